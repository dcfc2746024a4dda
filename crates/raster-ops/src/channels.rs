//! Channel extraction, recombination and scalar tone maps.
//!
//! # Splitting
//!
//! - [`split_rgb`] - Three full RGB images, each keeping a single channel
//! - [`red_component`], [`green_component`], [`blue_component`] - One of those
//! - [`combine_rgb`] - Rebuild an image from three sources
//!
//! # Scalar maps
//!
//! Each of these reduces a pixel to one number and writes it to all three
//! output channels, so the result is a gray RGB image:
//!
//! - [`value`] - `max(R, G, B)`
//! - [`intensity`] - `(R + G + B) / 3`
//! - [`luma`] - `0.2126*R + 0.7152*G + 0.0722*B`
//! - [`grayscale`] - same as [`luma`]
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//! use raster_ops::channels::{combine_rgb, split_rgb};
//!
//! let img = Image::filled(2, 2, Pixel::new(10.0, 20.0, 30.0));
//! let parts = split_rgb(&img);
//! assert_eq!(parts.green.pixel(0, 0).to_array(), [0.0, 20.0, 0.0]);
//!
//! let back = combine_rgb(&parts.red, &parts.green, &parts.blue).unwrap();
//! assert_eq!(back, img);
//! ```

use crate::{OpsError, OpsResult};
use raster_core::{Channel, Image, Pixel};
use tracing::trace;

/// Result of [`split_rgb`]: one image per channel, same size as the source.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSplit {
    /// Red channel only.
    pub red: Image,
    /// Green channel only.
    pub green: Image,
    /// Blue channel only.
    pub blue: Image,
}

impl ChannelSplit {
    /// Image holding `channel`.
    pub fn get(&self, channel: Channel) -> &Image {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Consumes the split into `(red, green, blue)`.
    pub fn into_parts(self) -> (Image, Image, Image) {
        (self.red, self.green, self.blue)
    }
}

/// Keeps only `channel` of every pixel; the other two become 0.
pub fn isolate_channel(src: &Image, channel: Channel) -> Image {
    src.map_pixels(|px| px.isolate(channel))
}

/// Splits an image into three single-channel RGB images.
pub fn split_rgb(src: &Image) -> ChannelSplit {
    trace!(height = src.height(), width = src.width(), "split_rgb");
    ChannelSplit {
        red: isolate_channel(src, Channel::Red),
        green: isolate_channel(src, Channel::Green),
        blue: isolate_channel(src, Channel::Blue),
    }
}

/// Red channel of [`split_rgb`].
pub fn red_component(src: &Image) -> Image {
    isolate_channel(src, Channel::Red)
}

/// Green channel of [`split_rgb`].
pub fn green_component(src: &Image) -> Image {
    isolate_channel(src, Channel::Green)
}

/// Blue channel of [`split_rgb`].
pub fn blue_component(src: &Image) -> Image {
    isolate_channel(src, Channel::Blue)
}

/// Combines red from `red`, green from `green` and blue from `blue`.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] unless all three have the same size.
pub fn combine_rgb(red: &Image, green: &Image, blue: &Image) -> OpsResult<Image> {
    trace!(height = red.height(), width = red.width(), "combine_rgb");
    for other in [green, blue] {
        if !red.same_dimensions(other) {
            return Err(OpsError::dimension_mismatch(
                "combine_rgb",
                red.dimensions(),
                other.dimensions(),
            ));
        }
    }
    Ok(Image::from_fn(red.height(), red.width(), |row, col| {
        Pixel::new(
            red.pixel(row, col).red(),
            green.pixel(row, col).green(),
            blue.pixel(row, col).blue(),
        )
    }))
}

/// Writes `f(pixel)` to all three channels.
fn gray_map<F: Fn(&Pixel) -> f32>(src: &Image, f: F) -> Image {
    src.map_pixels(|px| Pixel::gray(f(&px)))
}

/// Gray image of `max(R, G, B)`.
pub fn value(src: &Image) -> Image {
    trace!(height = src.height(), width = src.width(), "value");
    gray_map(src, Pixel::value)
}

/// Gray image of `(R + G + B) / 3`.
pub fn intensity(src: &Image) -> Image {
    trace!(height = src.height(), width = src.width(), "intensity");
    gray_map(src, Pixel::intensity)
}

/// Gray image of Rec.709 luma.
pub fn luma(src: &Image) -> Image {
    trace!(height = src.height(), width = src.width(), "luma");
    gray_map(src, Pixel::luma)
}

/// Grayscale conversion. Uses the luma weights.
pub fn grayscale(src: &Image) -> Image {
    luma(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Image {
        let mut img = Image::new(3, 3);
        img.set_pixel(1, 1, Pixel::new(120.0, 130.0, 140.0));
        img
    }

    #[test]
    fn test_split_keeps_one_channel() {
        let parts = split_rgb(&sample());
        assert_eq!(parts.red.pixel(1, 1).to_array(), [120.0, 0.0, 0.0]);
        assert_eq!(parts.green.pixel(1, 1).to_array(), [0.0, 130.0, 0.0]);
        assert_eq!(parts.blue.pixel(1, 1).to_array(), [0.0, 0.0, 140.0]);
        assert_eq!(parts.get(Channel::Green), &parts.green);
    }

    #[test]
    fn test_components_match_split() {
        let img = sample();
        let parts = split_rgb(&img);
        assert_eq!(red_component(&img), parts.red);
        assert_eq!(green_component(&img), parts.green);
        assert_eq!(blue_component(&img), parts.blue);
    }

    #[test]
    fn test_combine_takes_matching_channel() {
        let r = Image::filled(1, 1, Pixel::new(10.0, 99.0, 99.0));
        let g = Image::filled(1, 1, Pixel::new(99.0, 20.0, 99.0));
        let b = Image::filled(1, 1, Pixel::new(99.0, 99.0, 30.0));
        let out = combine_rgb(&r, &g, &b).unwrap();
        assert_eq!(out.pixel(0, 0).to_array(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_combine_dimension_mismatch() {
        let a = Image::new(2, 2);
        let b = Image::new(2, 3);
        let err = combine_rgb(&a, &a, &b).unwrap_err();
        assert!(err.is_dimension_mismatch());
        assert!(combine_rgb(&b, &a, &a).is_err());
    }

    #[test]
    fn test_scalar_maps() {
        let img = Image::filled(1, 1, Pixel::new(30.0, 60.0, 90.0));
        assert_eq!(value(&img).pixel(0, 0).to_array(), [90.0; 3]);
        assert_eq!(intensity(&img).pixel(0, 0).to_array(), [60.0; 3]);

        let y = luma(&img).pixel(0, 0);
        assert_relative_eq!(y.red(), 0.2126 * 30.0 + 0.7152 * 60.0 + 0.0722 * 90.0, epsilon = 1e-3);
        assert_eq!(y.red(), y.green());
        assert_eq!(y.green(), y.blue());
        assert_eq!(grayscale(&img), luma(&img));
    }

    #[test]
    fn test_source_untouched() {
        let img = sample();
        let copy = img.clone();
        let _ = split_rgb(&img);
        let _ = luma(&img);
        assert_eq!(img, copy);
    }
}
