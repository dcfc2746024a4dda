//! Closed set of single-image operations.
//!
//! [`Operation`] names every transform that maps one image to one image,
//! with its parameters attached. It is what [`split_view`](crate::composite::split_view)
//! and [`ImageTable::apply`](crate::ImageTable::apply) dispatch on.
//!
//! # Tokens
//!
//! Each operation has a kebab-case token (`"horizontal-flip"`,
//! `"levels-adjust"`, ...). [`str::parse`] accepts the tokens of
//! parameterless operations; [`Operation::with_args`] also builds the ones
//! that take numbers.
//!
//! ```rust
//! use raster_ops::Operation;
//!
//! let op: Operation = "sepia".parse().unwrap();
//! assert_eq!(op, Operation::Sepia);
//!
//! let op = Operation::with_args("compress", &[40.0]).unwrap();
//! assert_eq!(op, Operation::Compress(40.0));
//! assert_eq!(op.name(), "compress");
//! ```

use crate::{
    adjust, channels, color, dither, filter, histogram, levels, transform, wavelet, Levels,
    OpsError, OpsResult,
};
use raster_core::Image;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A single-image operation with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Operation {
    /// Keep only red.
    RedComponent,
    /// Keep only green.
    GreenComponent,
    /// Keep only blue.
    BlueComponent,
    /// Gray image of `max(R, G, B)`.
    ValueComponent,
    /// Gray image of the channel mean.
    IntensityComponent,
    /// Gray image of Rec.709 luma.
    LumaComponent,
    /// Mirror left-right.
    HorizontalFlip,
    /// Mirror top-bottom.
    VerticalFlip,
    /// Add a signed constant to every channel.
    Brighten(f32),
    /// 3x3 blur.
    Blur,
    /// 5x5 sharpen.
    Sharpen,
    /// Sepia color matrix.
    Sepia,
    /// Luma grayscale.
    Grayscale,
    /// Histogram peak alignment.
    ColorCorrect,
    /// Floyd-Steinberg black and white.
    Dither,
    /// Quadratic levels curve.
    Levels(Levels),
    /// Haar compression at a percentage.
    Compress(f32),
    /// 256x256 histogram plot. Changes the image size.
    Histogram,
}

impl Operation {
    /// Every parameterless operation.
    pub const SIMPLE: [Operation; 15] = [
        Operation::RedComponent,
        Operation::GreenComponent,
        Operation::BlueComponent,
        Operation::ValueComponent,
        Operation::IntensityComponent,
        Operation::LumaComponent,
        Operation::HorizontalFlip,
        Operation::VerticalFlip,
        Operation::Blur,
        Operation::Sharpen,
        Operation::Sepia,
        Operation::Grayscale,
        Operation::ColorCorrect,
        Operation::Dither,
        Operation::Histogram,
    ];

    /// Kebab-case token.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::RedComponent => "red-component",
            Operation::GreenComponent => "green-component",
            Operation::BlueComponent => "blue-component",
            Operation::ValueComponent => "value-component",
            Operation::IntensityComponent => "intensity-component",
            Operation::LumaComponent => "luma-component",
            Operation::HorizontalFlip => "horizontal-flip",
            Operation::VerticalFlip => "vertical-flip",
            Operation::Brighten(_) => "brighten",
            Operation::Blur => "blur",
            Operation::Sharpen => "sharpen",
            Operation::Sepia => "sepia",
            Operation::Grayscale => "grayscale",
            Operation::ColorCorrect => "color-correct",
            Operation::Dither => "dither",
            Operation::Levels(_) => "levels-adjust",
            Operation::Compress(_) => "compress",
            Operation::Histogram => "histogram",
        }
    }

    /// Builds an operation from its token and numeric arguments.
    ///
    /// `brighten` and `compress` take one number, `levels-adjust` takes
    /// three (black, mid, white); everything else takes none.
    ///
    /// # Errors
    ///
    /// - [`OpsError::UnknownOperation`] for an unrecognized token
    /// - [`OpsError::InvalidParameter`] for a wrong argument count or
    ///   invalid levels points
    pub fn with_args(token: &str, args: &[f32]) -> OpsResult<Self> {
        let op = match (token, args) {
            ("brighten", &[amount]) => Operation::Brighten(amount),
            ("compress", &[percentage]) => Operation::Compress(percentage),
            ("levels-adjust", &[black, mid, white]) => {
                Operation::Levels(Levels::new(black, mid, white)?)
            }
            ("brighten", _) => return Err(arity("brighten", 1, args.len())),
            ("compress", _) => return Err(arity("compress", 1, args.len())),
            ("levels-adjust", _) => return Err(arity("levels-adjust", 3, args.len())),
            _ => {
                let op = Self::SIMPLE
                    .into_iter()
                    .find(|op| op.name() == token)
                    .ok_or_else(|| OpsError::UnknownOperation(token.to_string()))?;
                if !args.is_empty() {
                    return Err(arity(op.name(), 0, args.len()));
                }
                op
            }
        };
        Ok(op)
    }

    /// Runs the operation on `src`.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] for an out-of-range compress
    /// percentage or invalid levels points.
    pub fn apply(&self, src: &Image) -> OpsResult<Image> {
        debug!(op = self.name(), height = src.height(), width = src.width(), "Applying operation");
        let out = match *self {
            Operation::RedComponent => channels::red_component(src),
            Operation::GreenComponent => channels::green_component(src),
            Operation::BlueComponent => channels::blue_component(src),
            Operation::ValueComponent => channels::value(src),
            Operation::IntensityComponent => channels::intensity(src),
            Operation::LumaComponent => channels::luma(src),
            Operation::HorizontalFlip => transform::flip_h(src),
            Operation::VerticalFlip => transform::flip_v(src),
            Operation::Brighten(amount) => adjust::brighten(src, amount),
            Operation::Blur => filter::blur(src),
            Operation::Sharpen => filter::sharpen(src),
            Operation::Sepia => color::sepia(src),
            Operation::Grayscale => channels::grayscale(src),
            Operation::ColorCorrect => histogram::color_correct(src),
            Operation::Dither => dither::dither(src),
            Operation::Levels(ref points) => levels::adjust_levels(src, points)?,
            Operation::Compress(percentage) => wavelet::compress(src, percentage)?,
            Operation::Histogram => histogram::histogram(src),
        };
        Ok(out)
    }
}

fn arity(op: &'static str, expected: usize, got: usize) -> OpsError {
    OpsError::invalid_parameter(op, format!("expected {expected} argument(s), got {got}"))
}

impl FromStr for Operation {
    type Err = OpsError;

    /// Parses a parameterless operation token.
    fn from_str(s: &str) -> OpsResult<Self> {
        Self::with_args(s.trim(), &[])
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Brighten(amount) => write!(f, "{} {amount}", self.name()),
            Operation::Compress(percentage) => write!(f, "{} {percentage}", self.name()),
            Operation::Levels(l) => write!(f, "{} {} {} {}", self.name(), l.black, l.mid, l.white),
            _ => f.write_str(self.name()),
        }
    }
}
