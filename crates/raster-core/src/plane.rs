//! Single-channel real-valued planes.
//!
//! A [`ChannelPlane`] is scratch space for algorithms that work one channel
//! at a time and need values outside `[0, 255]` while they run (error
//! diffusion, wavelet coefficients). Values are not clamped here; clamping
//! happens when a plane is turned back into an [`Image`](crate::Image).

use crate::{Error, Result};

/// `height x width` row-major array of `f32`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlane {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) data: Vec<f32>,
}

impl ChannelPlane {
    /// Creates a zero-filled plane.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            data: vec![0.0; height * width],
        }
    }

    /// Wraps row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the length is wrong.
    pub fn from_vec(height: usize, width: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != height * width {
            return Err(Error::invalid_dimensions(
                height,
                width,
                format!("expected {} values, got {}", height * width, data.len()),
            ));
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Plane height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Plane width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `(height, width)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Row-major values.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major values.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.height && col < self.width,
            "{}",
            Error::out_of_bounds(row, col, self.height, self.width)
        );
        self.data[row * self.width + col]
    }

    /// Sets the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(
            row < self.height && col < self.width,
            "{}",
            Error::out_of_bounds(row, col, self.height, self.width)
        );
        self.data[row * self.width + col] = value;
    }

    /// Adds `delta` at `(row, col)` if the cell exists; ignores it otherwise.
    #[inline]
    pub fn add_if_inside(&mut self, row: isize, col: isize, delta: f32) {
        if row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width {
            self.data[row as usize * self.width + col as usize] += delta;
        }
    }

    /// Returns a new plane with `f` applied to every value.
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Self {
        Self {
            height: self.height,
            width: self.width,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}
