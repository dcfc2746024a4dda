//! Geometric transformation operations.
//!
//! # Operations
//!
//! - [`flip_h`] - Horizontal flip (mirror)
//! - [`flip_v`] - Vertical flip
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//! use raster_ops::transform::flip_h;
//!
//! let src = Image::from_fn(1, 2, |_, col| Pixel::gray(col as f32));
//! let flipped = flip_h(&src);
//! assert_eq!(flipped.pixel(0, 0).red(), 1.0);
//! ```

use raster_core::Image;
use tracing::trace;

/// Flips image horizontally (left-right mirror).
///
/// `(row, col)` of the result holds `(row, width - 1 - col)` of the source.
pub fn flip_h(src: &Image) -> Image {
    trace!(height = src.height(), width = src.width(), "flip_h");
    let width = src.width();
    Image::from_fn(src.height(), width, |row, col| src.pixel(row, width - 1 - col))
}

/// Flips image vertically (top-bottom mirror).
///
/// `(row, col)` of the result holds `(height - 1 - row, col)` of the source.
pub fn flip_v(src: &Image) -> Image {
    trace!(height = src.height(), width = src.width(), "flip_v");
    let height = src.height();
    Image::from_fn(height, src.width(), |row, col| src.pixel(height - 1 - row, col))
}
