//! Before/after split-view compositing.
//!
//! A split view shows the processed image on the left and the original on
//! the right, divided by a bright green band:
//!
//! ```text
//! |  processed  |#|  original  |
//! 0           split          width
//! ```
//!
//! - [`merge_split_view`] - Combine two already computed images
//! - [`split_view`] - Run an [`Operation`] and combine its output with the source
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//! use raster_ops::composite::{merge_split_view, SPLIT_MARKER};
//!
//! let original = Image::filled(2, 10, Pixel::BLACK);
//! let processed = Image::filled(2, 10, Pixel::WHITE);
//! let view = merge_split_view(&original, &processed, 50.0).unwrap();
//! assert_eq!(view.pixel(0, 0), Pixel::WHITE);
//! assert_eq!(view.pixel(0, 5), SPLIT_MARKER);
//! assert_eq!(view.pixel(0, 9), Pixel::BLACK);
//! ```

use crate::error::check_percentage;
use crate::{OpsError, OpsResult, Operation};
use raster_core::{Image, Pixel};
use tracing::debug;

/// Color of the separator band.
pub const SPLIT_MARKER: Pixel = Pixel::GREEN;

/// Image width covered by one band column.
const BAND_DIVISOR: usize = 400;

/// Where each column of a split view comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSource {
    /// Column of the processed image.
    Processed,
    /// Separator band.
    Marker,
    /// Column of the original image.
    Original,
}

/// Column layout of a split view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLayout {
    /// Last column showing the processed image.
    pub split: usize,
    /// First band column; may be negative when the band is clipped.
    pub band_start: isize,
    /// One past the last band column.
    pub band_end: isize,
}

impl SplitLayout {
    /// Layout for an image `width` wide split at `percentage`.
    ///
    /// `split = floor(width * percentage / 100)` and the band is
    /// `max(1, width / 400)` columns centered on it.
    pub fn new(width: usize, percentage: f32) -> Self {
        let split = (width as f64 * percentage as f64 / 100.0) as usize;
        let band = (width / BAND_DIVISOR).max(1) as isize;
        let band_start = split as isize - band / 2;
        Self {
            split,
            band_start,
            band_end: band_start + band,
        }
    }

    /// Source of column `col`.
    pub fn source(&self, col: usize) -> SplitSource {
        let c = col as isize;
        if c >= self.band_start && c < self.band_end {
            SplitSource::Marker
        } else if col <= self.split {
            SplitSource::Processed
        } else {
            SplitSource::Original
        }
    }
}

/// Combines `processed` (left) and `original` (right) at `percentage`.
///
/// At 0% the result is `original` and at 100% it is `processed`; neither
/// end draws the band.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if `percentage` is outside `[0, 100]`
/// - [`OpsError::DimensionMismatch`] if the images differ in size
pub fn merge_split_view(original: &Image, processed: &Image, percentage: f32) -> OpsResult<Image> {
    check_percentage("split_view", percentage)?;
    if !original.same_dimensions(processed) {
        return Err(OpsError::dimension_mismatch(
            "split_view",
            original.dimensions(),
            processed.dimensions(),
        ));
    }
    if percentage == 0.0 {
        return Ok(original.clone());
    }
    if percentage == 100.0 {
        return Ok(processed.clone());
    }

    let layout = SplitLayout::new(original.width(), percentage);
    debug!(
        width = original.width(),
        percentage,
        split = layout.split,
        band_start = layout.band_start,
        band_end = layout.band_end,
        "Merging split view"
    );
    Ok(Image::from_fn(original.height(), original.width(), |row, col| {
        match layout.source(col) {
            SplitSource::Processed => processed.pixel(row, col),
            SplitSource::Marker => SPLIT_MARKER,
            SplitSource::Original => original.pixel(row, col),
        }
    }))
}

/// Previews `op` on the left `percentage` of `src`.
///
/// # Errors
///
/// Anything [`Operation::apply`] or [`merge_split_view`] returns; an
/// operation that changes the image size, such as
/// [`Operation::Histogram`], gives [`OpsError::DimensionMismatch`].
pub fn split_view(src: &Image, op: &Operation, percentage: f32) -> OpsResult<Image> {
    check_percentage("split_view", percentage)?;
    let processed = op.apply(src)?;
    merge_split_view(src, &processed, percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(width: usize) -> (Image, Image) {
        (
            Image::filled(3, width, Pixel::gray(10.0)),
            Image::filled(3, width, Pixel::gray(200.0)),
        )
    }

    #[test]
    fn test_layout_small_image() {
        let layout = SplitLayout::new(10, 50.0);
        assert_eq!(layout, SplitLayout { split: 5, band_start: 5, band_end: 6 });
        assert_eq!(layout.source(4), SplitSource::Processed);
        assert_eq!(layout.source(5), SplitSource::Marker);
        assert_eq!(layout.source(6), SplitSource::Original);
    }

    #[test]
    fn test_layout_wide_band() {
        // 1200 / 400 = 3 columns centered on 600
        let layout = SplitLayout::new(1200, 50.0);
        assert_eq!((layout.band_start, layout.band_end), (599, 602));
        assert_eq!(layout.source(598), SplitSource::Processed);
        assert_eq!(layout.source(601), SplitSource::Marker);
        assert_eq!(layout.source(602), SplitSource::Original);
    }

    #[test]
    fn test_merge_columns() {
        let (original, processed) = pair(10);
        let view = merge_split_view(&original, &processed, 30.0).unwrap();
        assert_eq!(view.pixel(2, 0), processed.pixel(2, 0));
        assert_eq!(view.pixel(2, 2), processed.pixel(2, 2));
        assert_eq!(view.pixel(2, 3), SPLIT_MARKER);
        assert_eq!(view.pixel(2, 4), original.pixel(2, 4));
    }

    #[test]
    fn test_merge_ends_have_no_band() {
        let (original, processed) = pair(10);
        assert_eq!(merge_split_view(&original, &processed, 0.0).unwrap(), original);
        assert_eq!(merge_split_view(&original, &processed, 100.0).unwrap(), processed);
    }

    #[test]
    fn test_merge_mismatch() {
        let err = merge_split_view(&Image::new(2, 2), &Image::new(2, 3), 50.0).unwrap_err();
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn test_merge_bad_percentage() {
        let (original, processed) = pair(4);
        assert!(merge_split_view(&original, &processed, 101.0).unwrap_err().is_invalid_parameter());
        assert!(merge_split_view(&original, &processed, -1.0).is_err());
    }

    #[test]
    fn test_split_view_operation() {
        let src = Image::from_fn(4, 8, |_, c| Pixel::gray(c as f32 * 20.0));
        let flipped = Operation::HorizontalFlip.apply(&src).unwrap();
        let view = split_view(&src, &Operation::HorizontalFlip, 50.0).unwrap();
        assert_eq!(view.pixel(0, 1), flipped.pixel(0, 1));
        assert_eq!(view.pixel(0, 4), SPLIT_MARKER);
        assert_eq!(view.pixel(0, 6), src.pixel(0, 6));
        assert_eq!(split_view(&src, &Operation::Blur, 0.0).unwrap(), src);
        assert_eq!(split_view(&src, &Operation::Blur, 100.0).unwrap(), Operation::Blur.apply(&src).unwrap());
    }

    #[test]
    fn test_split_view_histogram_mismatch() {
        let src = Image::new(4, 4);
        assert!(split_view(&src, &Operation::Histogram, 50.0).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn test_source_untouched() {
        let src = Image::from_fn(3, 3, |r, c| Pixel::gray((r + c) as f32));
        let copy = src.clone();
        let _ = split_view(&src, &Operation::Sepia, 40.0).unwrap();
        assert_eq!(src, copy);
    }
}
