//! Error types for raster-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the image model itself:
//! - Pixel access outside the grid
//! - Images whose sizes disagree
//! - Buffers that don't match their declared dimensions
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Error, Result};
//!
//! fn check(row: usize, col: usize, height: usize, width: usize) -> Result<()> {
//!     if row >= height || col >= width {
//!         return Err(Error::out_of_bounds(row, col, height, width));
//!     }
//!     Ok(())
//! }
//! assert!(check(3, 0, 2, 2).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the image model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel (row {row}, col {col}) out of bounds for image {height}x{width}")]
    OutOfBounds {
        /// Row that was out of bounds
        row: usize,
        /// Column that was out of bounds
        col: usize,
        /// Image height
        height: usize,
        /// Image width
        width: usize,
    },

    /// Image dimensions don't match for the operation.
    ///
    /// Dimensions are reported as `height x width`.
    #[error("dimension mismatch: {a_height}x{a_width} vs {b_height}x{b_width}")]
    DimensionMismatch {
        /// First image height
        a_height: usize,
        /// First image width
        a_width: usize,
        /// Second image height
        b_height: usize,
        /// Second image width
        b_width: usize,
    },

    /// Buffer length doesn't agree with the declared dimensions.
    #[error("invalid dimensions: {height}x{width} ({reason})")]
    InvalidDimensions {
        /// Requested height
        height: usize,
        /// Requested width
        width: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            height,
            width,
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error from `(height, width)` pairs.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_height: a.0,
            a_width: a.1,
            b_height: b.0,
            b_width: b.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(height: usize, width: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            height,
            width,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is a size disagreement between images.
    #[inline]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}
