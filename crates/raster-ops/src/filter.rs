//! Image filtering and convolution operations.
//!
//! # Kernels
//!
//! - [`Kernel::blur`] - 3x3 normalized Gaussian-like blur
//! - [`Kernel::sharpen`] - 5x5 sharpen with a negative outer ring
//! - [`Kernel::new`] / [`Kernel::from_rows`] - Any odd-sized kernel
//!
//! # Boundary
//!
//! Neighbors that fall outside the image contribute zero. There is no
//! wrapping, mirroring or edge clamping, so borders darken under kernels
//! with positive weights.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//! use raster_ops::filter::{convolve, Kernel};
//!
//! let src = Image::filled(16, 16, Pixel::gray(128.0));
//! let blurred = convolve(&src, &Kernel::blur());
//! assert_eq!(blurred.pixel(8, 8).red(), 128.0);
//! ```

use crate::{OpsError, OpsResult};
use raster_core::{Image, Pixel};
use tracing::{debug, trace};

/// Convolution kernel for image filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl Kernel {
    /// Creates a new kernel from row-major data.
    ///
    /// Width and height must be odd numbers.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] for an even (or zero) dimension or a
    /// data length that isn't `width * height`.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> OpsResult<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(OpsError::invalid_parameter(
                "convolve",
                format!("kernel dimensions must be odd, got {width}x{height}"),
            ));
        }
        if data.len() != width * height {
            return Err(OpsError::invalid_parameter(
                "convolve",
                format!(
                    "kernel data size {} doesn't match {}x{}",
                    data.len(),
                    width,
                    height
                ),
            ));
        }
        Ok(Self { data, width, height })
    }

    /// Creates a kernel from rows of weights.
    ///
    /// ```rust
    /// use raster_ops::filter::Kernel;
    ///
    /// let k = Kernel::from_rows(&[&[0.0, 1.0, 0.0]]).unwrap();
    /// assert_eq!((k.width(), k.height()), (3, 1));
    /// assert!(Kernel::from_rows(&[&[1.0, 1.0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[&[f32]]) -> OpsResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return Err(OpsError::invalid_parameter(
                "convolve",
                "kernel rows have different lengths",
            ));
        }
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::new(data, width, height)
    }

    /// The 3x3 blur kernel: corners 1/16, edges 1/8, center 1/4.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_ops::filter::Kernel;
    ///
    /// let k = Kernel::blur();
    /// assert_eq!(k.width(), 3);
    /// assert!((k.weights().iter().sum::<f32>() - 1.0).abs() < 1e-6);
    /// ```
    pub fn blur() -> Self {
        Self {
            data: vec![
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
                1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0,
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
            ],
            width: 3,
            height: 3,
        }
    }

    /// The 5x5 sharpen kernel.
    ///
    /// Outer ring -1/8, inner ring 1/4, center 1.
    pub fn sharpen() -> Self {
        const O: f32 = -1.0 / 8.0;
        const I: f32 = 1.0 / 4.0;
        Self {
            data: vec![
                O, O, O, O, O,
                O, I, I, I, O,
                O, I, 1.0, I, O,
                O, I, I, I, O,
                O, O, O, O, O,
            ],
            width: 5,
            height: 5,
        }
    }

    /// Kernel width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Kernel height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major weights.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.data
    }

    /// Returns the kernel radius (half-size) as `(x, y)`.
    #[inline]
    pub fn radius(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    #[inline]
    fn weight(&self, ky: usize, kx: usize) -> f32 {
        self.data[ky * self.width + kx]
    }
}

/// Applies a convolution kernel to every channel.
///
/// Each output channel is the weighted sum of the kernel neighborhood,
/// clamped to `[0, 255]`. Out-of-image neighbors count as zero.
///
/// Kernels are odd-sized by construction; [`Kernel::new`] and
/// [`Kernel::from_rows`] report even dimensions.
pub fn convolve(src: &Image, kernel: &Kernel) -> Image {
    trace!(
        height = src.height(),
        width = src.width(),
        kernel_w = kernel.width,
        kernel_h = kernel.height,
        "convolve"
    );
    let (height, width) = src.dimensions();
    let (rx, ry) = kernel.radius();

    Image::from_fn(height, width, |y, x| {
        let mut sums = [0.0f32; 3];

        for ky in 0..kernel.height {
            let sy = y as isize + ky as isize - ry as isize;
            if sy < 0 || sy >= height as isize {
                continue;
            }
            for kx in 0..kernel.width {
                let sx = x as isize + kx as isize - rx as isize;
                if sx < 0 || sx >= width as isize {
                    continue;
                }
                let px = src.pixel(sy as usize, sx as usize).to_array();
                let kw = kernel.weight(ky, kx);
                for (sum, v) in sums.iter_mut().zip(px) {
                    *sum += v * kw;
                }
            }
        }

        Pixel::from_array(sums)
    })
}

/// Blurs with [`Kernel::blur`].
pub fn blur(src: &Image) -> Image {
    debug!(height = src.height(), width = src.width(), "Applying blur");
    convolve(src, &Kernel::blur())
}

/// Sharpens with [`Kernel::sharpen`].
pub fn sharpen(src: &Image) -> Image {
    debug!(height = src.height(), width = src.width(), "Applying sharpen");
    convolve(src, &Kernel::sharpen())
}
