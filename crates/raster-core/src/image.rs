//! Image buffer type.
//!
//! [`Image`] is a `height x width` grid of [`Pixel`]s stored row-major,
//! top-to-bottom, origin at the top-left corner:
//!
//! ```text
//! Memory: [P(0,0) P(0,1) ... P(0,w-1)]  <- Row 0
//!         [P(1,0) P(1,1) ... P(1,w-1)]  <- Row 1
//!         ...
//! ```
//!
//! Coordinates are always `(row, col)`; constructors take `(height, width)`
//! to match.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//!
//! let mut img = Image::new(2, 3);
//! assert_eq!(img.pixel(1, 2), Pixel::BLACK);
//!
//! img.set_pixel(1, 2, Pixel::new(255.0, 0.0, 0.0));
//! assert_eq!(img.pixel(1, 2).red(), 255.0);
//! ```
//!
//! # Immutability
//!
//! Operations never edit their input. They build a fresh image with
//! [`Image::from_fn`] or [`Image::map_pixels`]. `set_pixel` exists for
//! builders that fill a new image before handing it out.

use crate::{ChannelPlane, Error, Pixel, Result};
use crate::pixel::Channel;

/// Owned RGB image.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Image {
    height: usize,
    width: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Creates an all-black image.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Image;
    ///
    /// let img = Image::new(1080, 1920);
    /// assert_eq!(img.height(), 1080);
    /// assert_eq!(img.width(), 1920);
    /// ```
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Pixel::BLACK)
    }

    /// Creates an image where every cell holds `pixel`.
    pub fn filled(height: usize, width: usize, pixel: Pixel) -> Self {
        Self {
            height,
            width,
            pixels: vec![pixel; height * width],
        }
    }

    /// Creates an image from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len() != height * width`.
    pub fn from_pixels(height: usize, width: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = height * width;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                height,
                width,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Builds an image by evaluating `f(row, col)` for every cell.
    ///
    /// ```rust
    /// use raster_core::{Image, Pixel};
    ///
    /// let ramp = Image::from_fn(1, 4, |_, col| Pixel::gray(col as f32 * 50.0));
    /// assert_eq!(ramp.pixel(0, 3).green(), 150.0);
    /// ```
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            height,
            width,
            pixels,
        }
    }

    /// Rebuilds an image from three equally sized channel planes.
    ///
    /// Values are clamped by [`Pixel::new`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the planes disagree in size.
    pub fn from_planes(red: &ChannelPlane, green: &ChannelPlane, blue: &ChannelPlane) -> Result<Self> {
        for other in [green, blue] {
            if other.dimensions() != red.dimensions() {
                return Err(Error::dimension_mismatch(red.dimensions(), other.dimensions()));
            }
        }
        let pixels = red
            .data()
            .iter()
            .zip(green.data())
            .zip(blue.data())
            .map(|((&r, &g), &b)| Pixel::new(r, g, b))
            .collect();
        Ok(Self {
            height: red.height(),
            width: red.width(),
            pixels,
        })
    }

    /// Image height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in pixels (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `(height, width)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns `true` if `other` has the same height and width.
    #[inline]
    pub fn same_dimensions(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Fails with [`Error::DimensionMismatch`] unless sizes agree.
    pub fn ensure_same_dimensions(&self, other: &Image) -> Result<()> {
        if self.same_dimensions(other) {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(self.dimensions(), other.dimensions()))
        }
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image. Use
    /// [`get_pixel`](Self::get_pixel) or [`try_pixel`](Self::try_pixel) for
    /// checked access.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        match self.index(row, col) {
            Some(i) => self.pixels[i],
            None => panic!("{}", Error::out_of_bounds(row, col, self.height, self.width)),
        }
    }

    /// Returns the pixel at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, row: usize, col: usize) -> Option<Pixel> {
        self.index(row, col).map(|i| self.pixels[i])
    }

    /// Returns the pixel at `(row, col)` or [`Error::OutOfBounds`].
    pub fn try_pixel(&self, row: usize, col: usize) -> Result<Pixel> {
        self.get_pixel(row, col)
            .ok_or_else(|| Error::out_of_bounds(row, col, self.height, self.width))
    }

    /// Replaces the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) {
        match self.index(row, col) {
            Some(i) => self.pixels[i] = pixel,
            None => panic!("{}", Error::out_of_bounds(row, col, self.height, self.width)),
        }
    }

    /// Replaces the pixel at `(row, col)` or returns [`Error::OutOfBounds`].
    pub fn try_set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<()> {
        let i = self
            .index(row, col)
            .ok_or_else(|| Error::out_of_bounds(row, col, self.height, self.width))?;
        self.pixels[i] = pixel;
        Ok(())
    }

    /// Pixels of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        if row >= self.height {
            panic!("{}", Error::out_of_bounds(row, 0, self.height, self.width));
        }
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterates over all pixels with their coordinates as `(row, col, pixel)`.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &px)| (i / width, i % width, px))
    }

    /// Returns a new image with `f` applied to every pixel.
    ///
    /// ```rust
    /// use raster_core::{Image, Pixel};
    ///
    /// let img = Image::filled(2, 2, Pixel::gray(10.0));
    /// let brighter = img.map_pixels(|px| px.map(|v| v + 5.0));
    /// assert_eq!(brighter.pixel(0, 0).red(), 15.0);
    /// assert_eq!(img.pixel(0, 0).red(), 10.0);
    /// ```
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: Fn(Pixel) -> Pixel,
    {
        Image {
            height: self.height,
            width: self.width,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    /// Extracts one channel as a plane of reals.
    pub fn plane(&self, channel: Channel) -> ChannelPlane {
        ChannelPlane {
            height: self.height,
            width: self.width,
            data: self.pixels.iter().map(|px| px.channel(channel)).collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Image {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            height: usize,
            width: usize,
            pixels: Vec<Pixel>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Image::from_pixels(raw.height, raw.width, raw.pixels).map_err(serde::de::Error::custom)
    }
}
