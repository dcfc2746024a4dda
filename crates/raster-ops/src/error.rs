//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("{op}: invalid parameter: {reason}")]
    InvalidParameter {
        /// Operation that rejected the parameter.
        op: &'static str,
        /// What was wrong, including the offending value.
        reason: String,
    },

    /// Images have incompatible sizes.
    ///
    /// Dimensions are `(height, width)`.
    #[error("{op}: size mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, got.0, got.1)]
    DimensionMismatch {
        /// Operation that needed matching sizes.
        op: &'static str,
        /// Size of the reference image.
        expected: (usize, usize),
        /// Size of the offending image.
        got: (usize, usize),
    },

    /// No image is stored under this name.
    #[error("unknown image: {0}")]
    UnknownImage(String),

    /// Token doesn't name an operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Error from the image model.
    #[error(transparent)]
    Core(#[from] raster_core::Error),
}

impl OpsError {
    /// Creates an [`OpsError::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            op,
            reason: reason.into(),
        }
    }

    /// Creates an [`OpsError::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(op: &'static str, expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, expected, got }
    }

    /// Returns `true` for [`OpsError::InvalidParameter`].
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns `true` for [`OpsError::DimensionMismatch`].
    #[inline]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Rejects a percentage outside `[0, 100]`.
pub(crate) fn check_percentage(op: &'static str, percentage: f32) -> OpsResult<()> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(OpsError::invalid_parameter(
            op,
            format!("percentage {percentage} outside [0, 100]"),
        ));
    }
    Ok(())
}
