//! Pixel type and channel helpers.
//!
//! # Types
//!
//! - [`Pixel`] - Immutable RGB value with channels saturated to `[0, 255]`
//! - [`Channel`] - Names one of the three color channels
//!
//! # Clamping
//!
//! The clamp happens once, when a [`Pixel`] is built. Every stored channel
//! is therefore valid and readers never re-check:
//!
//! ```
//! use raster_core::Pixel;
//!
//! let px = Pixel::new(-40.0, 128.0, 400.0);
//! assert_eq!(px.to_array(), [0.0, 128.0, 255.0]);
//! ```

use std::fmt;

// ============================================================================
// Rec.709 Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the standard luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Lowest storable channel value.
pub const CHANNEL_MIN: f32 = 0.0;

/// Highest storable channel value.
pub const CHANNEL_MAX: f32 = 255.0;

/// Saturates a channel value to `[0, 255]`.
///
/// NaN maps to 0.
///
/// # Example
/// ```
/// use raster_core::pixel::clamp_channel;
/// assert_eq!(clamp_channel(-1.0), 0.0);
/// assert_eq!(clamp_channel(300.0), 255.0);
/// assert_eq!(clamp_channel(f32::NAN), 0.0);
/// ```
#[inline]
pub fn clamp_channel(value: f32) -> f32 {
    if value.is_nan() {
        CHANNEL_MIN
    } else {
        value.clamp(CHANNEL_MIN, CHANNEL_MAX)
    }
}

/// One of the three color channels of a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of the channel in `[R, G, B]` order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// An RGB pixel whose channels always lie in `[0, 255]`.
///
/// Fields are private so a `Pixel` can only come from a clamping
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pixel {
    red: f32,
    green: f32,
    blue: f32,
}

impl Pixel {
    /// Pure black.
    pub const BLACK: Pixel = Pixel {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// Pure white.
    pub const WHITE: Pixel = Pixel {
        red: 255.0,
        green: 255.0,
        blue: 255.0,
    };

    /// Pure green.
    pub const GREEN: Pixel = Pixel {
        red: 0.0,
        green: 255.0,
        blue: 0.0,
    };

    /// Creates a pixel, saturating each channel to `[0, 255]`.
    #[inline]
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Creates a pixel with the same value in all three channels.
    #[inline]
    pub fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a pixel from `[R, G, B]`.
    #[inline]
    pub fn from_array(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Red channel.
    #[inline]
    pub fn red(&self) -> f32 {
        self.red
    }

    /// Green channel.
    #[inline]
    pub fn green(&self) -> f32 {
        self.green
    }

    /// Blue channel.
    #[inline]
    pub fn blue(&self) -> f32 {
        self.blue
    }

    /// Reads a channel by name.
    #[inline]
    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Returns `[R, G, B]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns a copy with one channel replaced (and clamped).
    #[inline]
    pub fn with_channel(self, channel: Channel, value: f32) -> Self {
        let mut rgb = self.to_array();
        rgb[channel.index()] = value;
        Self::from_array(rgb)
    }

    /// Returns a copy keeping only `channel`; the other two become 0.
    #[inline]
    pub fn isolate(self, channel: Channel) -> Self {
        Self::BLACK.with_channel(channel, self.channel(channel))
    }

    /// Largest of the three channels.
    #[inline]
    pub fn value(&self) -> f32 {
        self.red.max(self.green).max(self.blue)
    }

    /// Mean of the three channels.
    #[inline]
    pub fn intensity(&self) -> f32 {
        (self.red + self.green + self.blue) / 3.0
    }

    /// Rec.709 luma: `0.2126*R + 0.7152*G + 0.0722*B`.
    ///
    /// ```
    /// use raster_core::Pixel;
    /// let luma = Pixel::new(100.0, 100.0, 100.0).luma();
    /// assert!((luma - 100.0).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn luma(&self) -> f32 {
        self.red * REC709_LUMA_R + self.green * REC709_LUMA_G + self.blue * REC709_LUMA_B
    }

    /// Applies `f` to every channel and clamps the result.
    #[inline]
    pub fn map<F: Fn(f32) -> f32>(self, f: F) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl From<[f32; 3]> for Pixel {
    fn from(rgb: [f32; 3]) -> Self {
        Self::from_array(rgb)
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32)
    }
}

// Deserialization goes through the clamping constructor.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pixel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            red: f32,
            green: f32,
            blue: f32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Pixel::new(raw.red, raw.green, raw.blue))
    }
}
