//! Floyd-Steinberg error diffusion to black and white.

use crate::channels::intensity;
use raster_core::{CHANNEL_MAX, Channel, Image, Pixel};
use tracing::debug;

/// Neighbor offsets `(row, col)` and their share of the rounding error.
const DIFFUSION: [(isize, isize, f32); 4] = [
    (0, 1, 0.4375),
    (1, 1, 0.0625),
    (1, 0, 0.3125),
    (1, -1, 0.1875),
];

/// Dithers `src` to a black and white image.
///
/// Works on the intensity plane scaled to `[0, 1]`. Pixels are visited in
/// row-major order; each rounds half up to the nearest integer and pushes
/// the rounding error to its right, lower-right, lower and lower-left
/// neighbors. The result is written to all three channels.
///
/// # Example
///
/// ```rust
/// use raster_core::{Image, Pixel};
/// use raster_ops::dither::dither;
///
/// let img = Image::filled(1, 2, Pixel::gray(153.0));
/// let out = dither(&img);
/// assert_eq!(out.pixel(0, 0), Pixel::WHITE);
/// assert_eq!(out.pixel(0, 1), Pixel::BLACK);
/// ```
pub fn dither(src: &Image) -> Image {
    debug!(height = src.height(), width = src.width(), "Dithering");
    let (height, width) = src.dimensions();
    let mut plane = intensity(src).plane(Channel::Red).map(|v| v / CHANNEL_MAX);

    for row in 0..height {
        for col in 0..width {
            let old = plane.get(row, col);
            let new = (old + 0.5).floor();
            plane.set(row, col, new);
            let error = old - new;
            for (dr, dc, weight) in DIFFUSION {
                plane.add_if_inside(row as isize + dr, col as isize + dc, error * weight);
            }
        }
    }

    Image::from_fn(height, width, |row, col| Pixel::gray(plane.get(row, col) * CHANNEL_MAX))
}
