//! # raster-ops
//!
//! Image transforms and compression for raster-rs.
//!
//! Every operation reads an [`Image`](raster_core::Image) and returns a new
//! one; inputs are never mutated. Channels are clamped to `[0, 255]` on
//! every write.
//!
//! # Modules
//!
//! - [`transform`] - Horizontal and vertical flips
//! - [`channels`] - Channel split/combine, value, intensity, luma
//! - [`adjust`] - Brighten and darken
//! - [`filter`] - Convolution, blur, sharpen
//! - [`color`] - Color matrices and sepia
//! - [`levels`] - Quadratic levels curve
//! - [`histogram`] - Histograms, color correction, histogram plots
//! - [`wavelet`] - Haar wavelet compression
//! - [`dither`] - Floyd-Steinberg dithering
//! - [`composite`] - Split-view previews
//! - [`operation`] - The [`Operation`] enum every dispatcher uses
//! - [`table`] - [`ImageTable`], a named image store
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//! use raster_ops::{composite, Operation};
//!
//! let img = Image::filled(4, 8, Pixel::new(120.0, 80.0, 40.0));
//! let sepia = Operation::Sepia.apply(&img).unwrap();
//! let red = 0.393 * 120.0 + 0.769 * 80.0 + 0.189 * 40.0;
//! assert!((sepia.pixel(0, 0).red() - red).abs() < 1e-3);
//!
//! // left half sepia, right half untouched
//! let preview = composite::split_view(&img, &Operation::Sepia, 50.0).unwrap();
//! assert_eq!(preview.pixel(0, 7), img.pixel(0, 7));
//! ```
//!
//! # Common Operations
//!
//! ## Compression
//!
//! ```rust,ignore
//! use raster_ops::wavelet::compress;
//!
//! // drop the smallest 80% of distinct coefficient magnitudes
//! let small = compress(&image, 80.0)?;
//! ```
//!
//! ## Levels
//!
//! ```rust,ignore
//! use raster_ops::{levels::adjust_levels, Levels};
//!
//! let curve = Levels::new(20.0, 128.0, 230.0)?;
//! let out = adjust_levels(&image, &curve)?;
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize [`Operation`] and [`Levels`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod channels;
pub mod color;
pub mod composite;
pub mod dither;
pub mod filter;
pub mod histogram;
pub mod levels;
pub mod operation;
pub mod table;
pub mod transform;
pub mod wavelet;

pub use channels::ChannelSplit;
pub use color::ColorMatrix;
pub use error::{OpsError, OpsResult};
pub use filter::Kernel;
pub use histogram::Histogram;
pub use levels::Levels;
pub use operation::Operation;
pub use table::ImageTable;
