//! # raster-core
//!
//! Core types for raster image processing.
//!
//! This crate provides the data model shared by every raster-rs operation:
//!
//! - [`Pixel`] - RGB value whose channels are saturated to `[0, 255]`
//! - [`Image`] - Row-major `height x width` grid of pixels
//! - [`ChannelPlane`] - Unclamped single-channel scratch plane
//! - [`Channel`] - Red, green or blue
//! - [`Error`] - Bounds and dimension errors
//!
//! ## Design
//!
//! A pixel is clamped once, when it is built, so a stored value is always
//! valid. Images are plain owned values: operations read an `&Image` and
//! return a brand new one.
//!
//! ```
//! use raster_core::prelude::*;
//!
//! let img = Image::filled(2, 2, Pixel::new(300.0, 20.0, -5.0));
//! assert_eq!(img.pixel(1, 1).to_array(), [255.0, 20.0, 0.0]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (transforms, filters, wavelet, dithering)
//!    +-- raster-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize [`Pixel`], [`Image`] and [`Channel`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;
pub mod plane;

// Re-exports for convenience
pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{
    CHANNEL_MAX, CHANNEL_MIN, Channel, Pixel, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G,
    REC709_LUMA_R, clamp_channel,
};
pub use plane::ChannelPlane;

/// Prelude module for convenient imports.
///
/// ```
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::{Channel, Pixel};
    pub use crate::plane::ChannelPlane;
}
