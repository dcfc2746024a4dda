//! Additive brightness adjustments.
//!
//! - [`brighten`] - Add one signed constant to every channel
//! - [`darken`] - Subtract a constant from every channel
//! - [`offset_channels`] - Add a separate constant per channel
//!
//! Results are clamped to `[0, 255]`.

use raster_core::{Image, Pixel};
use tracing::trace;

/// Adds `amount` to every channel. Negative amounts darken.
///
/// # Example
///
/// ```rust
/// use raster_core::{Image, Pixel};
/// use raster_ops::adjust::brighten;
///
/// let img = Image::filled(1, 1, Pixel::new(250.0, 100.0, 5.0));
/// assert_eq!(brighten(&img, 10.0).pixel(0, 0).to_array(), [255.0, 110.0, 15.0]);
/// assert_eq!(brighten(&img, -10.0).pixel(0, 0).to_array(), [240.0, 90.0, 0.0]);
/// ```
pub fn brighten(src: &Image, amount: f32) -> Image {
    trace!(height = src.height(), width = src.width(), amount, "brighten");
    src.map_pixels(|px| px.map(|v| v + amount))
}

/// Subtracts `amount` from every channel.
pub fn darken(src: &Image, amount: f32) -> Image {
    brighten(src, -amount)
}

/// Adds `offsets[0]` to red, `offsets[1]` to green and `offsets[2]` to blue.
pub fn offset_channels(src: &Image, offsets: [f32; 3]) -> Image {
    trace!(?offsets, "offset_channels");
    src.map_pixels(|px| {
        Pixel::new(
            px.red() + offsets[0],
            px.green() + offsets[1],
            px.blue() + offsets[2],
        )
    })
}
