//! Color matrix transforms.
//!
//! A [`ColorMatrix`] maps `[R, G, B]` to a new `[R, G, B]` where every output
//! channel is a linear combination of all three inputs:
//!
//! ```text
//! | R' |   | m00 m01 m02 |   | R |
//! | G' | = | m10 m11 m12 | * | G |
//! | B' |   | m20 m21 m22 |   | B |
//! ```
//!
//! Results are clamped to `[0, 255]`.

use raster_core::{Image, Pixel};
use tracing::trace;

/// 3x3 row-major color matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f32; 3]; 3]);

impl ColorMatrix {
    /// Identity transform.
    pub const IDENTITY: ColorMatrix = ColorMatrix([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Classic sepia tone.
    pub const SEPIA: ColorMatrix = ColorMatrix([
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ]);

    /// Multiplies the matrix by an `[R, G, B]` column vector.
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        [
            m[0][0] * rgb[0] + m[0][1] * rgb[1] + m[0][2] * rgb[2],
            m[1][0] * rgb[0] + m[1][1] * rgb[1] + m[1][2] * rgb[2],
            m[2][0] * rgb[0] + m[2][1] * rgb[1] + m[2][2] * rgb[2],
        ]
    }
}

/// Transforms every pixel by `matrix`.
pub fn color_matrix(src: &Image, matrix: &ColorMatrix) -> Image {
    trace!(height = src.height(), width = src.width(), "color_matrix");
    src.map_pixels(|px| Pixel::from_array(matrix.apply(px.to_array())))
}

/// Sepia tone via [`ColorMatrix::SEPIA`].
///
/// # Example
///
/// ```rust
/// use raster_core::{Image, Pixel};
/// use raster_ops::color::sepia;
///
/// let img = Image::filled(1, 1, Pixel::new(100.0, 150.0, 200.0));
/// let red = sepia(&img).pixel(0, 0).red();
/// assert!((red - (0.393 * 100.0 + 0.769 * 150.0 + 0.189 * 200.0)).abs() < 1e-3);
/// ```
pub fn sepia(src: &Image) -> Image {
    color_matrix(src, &ColorMatrix::SEPIA)
}
