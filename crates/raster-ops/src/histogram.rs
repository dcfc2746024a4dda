//! Per-channel histograms, peak-based color correction and histogram plots.
//!
//! # Binning
//!
//! Each channel value goes into bin `floor(value)`, so a histogram has
//! 256 bins per channel and every channel's bins sum to `width * height`.
//!
//! # Color correction
//!
//! [`color_correct`] finds a "meaningful peak" per channel, skipping the
//! bins near 0 and 255 where clipping piles up, and shifts every channel
//! so its peak lands on the average of the three peaks.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Channel, Image, Pixel};
//! use raster_ops::Histogram;
//!
//! let img = Image::filled(4, 4, Pixel::new(10.0, 20.0, 30.0));
//! let hist = Histogram::compute(&img);
//! assert_eq!(hist.channel(Channel::Green)[20], 16);
//! assert_eq!(hist.total(Channel::Red), 16);
//! ```

use crate::adjust::offset_channels;
use raster_core::{Channel, Image, Pixel};
use tracing::{debug, trace};

/// Number of bins per channel.
pub const BINS: usize = 256;

/// Side length of [`render_histogram`] output.
pub const PLOT_SIZE: usize = 256;

/// Bin the peak search starts from.
const PEAK_SEED: usize = 10;
/// Peak search window, inclusive.
const PEAK_FIRST: usize = 11;
const PEAK_LAST: usize = 244;

const GRID_STEP: usize = 16;
const GRID_LEVEL: f32 = 192.0;

/// 256-bin histogram of each RGB channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel counts.
    pub red: [u64; BINS],
    /// Green channel counts.
    pub green: [u64; BINS],
    /// Blue channel counts.
    pub blue: [u64; BINS],
}

impl Histogram {
    /// Counts every pixel of `src` in one pass.
    pub fn compute(src: &Image) -> Self {
        trace!(height = src.height(), width = src.width(), "histogram");
        let mut hist = Self {
            red: [0; BINS],
            green: [0; BINS],
            blue: [0; BINS],
        };
        for px in src.as_slice() {
            hist.red[bin(px.red())] += 1;
            hist.green[bin(px.green())] += 1;
            hist.blue[bin(px.blue())] += 1;
        }
        hist
    }

    /// Bins of one channel.
    pub fn channel(&self, channel: Channel) -> &[u64; BINS] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Sum of one channel's bins.
    pub fn total(&self, channel: Channel) -> u64 {
        self.channel(channel).iter().sum()
    }

    /// Largest bin of one channel.
    pub fn max_frequency(&self, channel: Channel) -> u64 {
        self.channel(channel).iter().copied().max().unwrap_or(0)
    }

    /// Most frequent bin in `[11, 244]`, seeded with bin 10.
    ///
    /// A later bin wins only with a strictly higher count, so ties keep the
    /// lower index and a blank window yields 10.
    pub fn meaningful_peak(&self, channel: Channel) -> usize {
        let bins = self.channel(channel);
        let mut peak = PEAK_SEED;
        for i in PEAK_FIRST..=PEAK_LAST {
            if bins[i] > bins[peak] {
                peak = i;
            }
        }
        peak
    }
}

#[inline]
fn bin(value: f32) -> usize {
    (value as usize).min(BINS - 1)
}

/// Aligns the channel peaks on their average.
///
/// Each channel gets `average_peak - channel_peak` added, clamped to
/// `[0, 255]`. The average uses integer division.
pub fn color_correct(src: &Image) -> Image {
    let hist = Histogram::compute(src);
    let peaks = Channel::ALL.map(|c| hist.meaningful_peak(c) as i64);
    let average = peaks.iter().sum::<i64>() / 3;
    let offsets = peaks.map(|p| (average - p) as f32);
    debug!(?peaks, average, ?offsets, "Color correcting");
    offset_channels(src, offsets)
}

/// Plots a histogram on a 256x256 black canvas.
///
/// A light gray grid every 16 pixels goes underneath; red, green and blue
/// polylines follow, each scaled so its own tallest bin reaches the top.
/// A channel with no counts draws nothing.
pub fn render_histogram(hist: &Histogram) -> Image {
    let mut canvas = Image::new(PLOT_SIZE, PLOT_SIZE);
    let size = PLOT_SIZE as i64;
    let grid = Pixel::gray(GRID_LEVEL);

    for i in (0..=PLOT_SIZE).step_by(GRID_STEP) {
        let i = i as i64;
        draw_line(&mut canvas, (i, 0), (i, size), grid);
        draw_line(&mut canvas, (0, i), (size, i), grid);
    }

    for channel in Channel::ALL {
        let bins = hist.channel(channel);
        let max = hist.max_frequency(channel);
        if max == 0 {
            continue;
        }
        let color = Pixel::BLACK.with_channel(channel, 255.0);
        let y = |i: usize| size - (bins[i] * PLOT_SIZE as u64 / max) as i64;
        for i in 0..BINS - 1 {
            draw_line(&mut canvas, (i as i64, y(i)), (i as i64 + 1, y(i + 1)), color);
        }
    }
    canvas
}

/// Computes and plots the histogram of `src`.
pub fn histogram(src: &Image) -> Image {
    debug!(height = src.height(), width = src.width(), "Rendering histogram");
    render_histogram(&Histogram::compute(src))
}

/// Bresenham line between two `(x, y)` points, clipped to the canvas.
fn draw_line(canvas: &mut Image, from: (i64, i64), to: (i64, i64), color: Pixel) {
    let (height, width) = (canvas.height() as i64, canvas.width() as i64);
    let (x2, y2) = to;
    let dx = (x2 - from.0).abs();
    let dy = -(y2 - from.1).abs();
    let sx = if from.0 < x2 { 1 } else { -1 };
    let sy = if from.1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = from;

    loop {
        if (0..width).contains(&x) && (0..height).contains(&y) {
            canvas.set_pixel(y as usize, x as usize, color);
        }
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Image {
        Image::from_fn(16, 16, |r, c| {
            let v = (r * 16 + c) as f32;
            Pixel::new(v, 255.0 - v, 128.0)
        })
    }

    #[test]
    fn test_sum_is_pixel_count() {
        let img = Image::from_fn(7, 5, |r, c| Pixel::new(r as f32 * 30.0, c as f32 * 50.0, 3.7));
        let hist = Histogram::compute(&img);
        for c in Channel::ALL {
            assert_eq!(hist.total(c), 35);
        }
    }

    #[test]
    fn test_bins_truncate() {
        let img = Image::filled(1, 1, Pixel::new(12.9, 255.0, 0.0));
        let hist = Histogram::compute(&img);
        assert_eq!(hist.red[12], 1);
        assert_eq!(hist.green[255], 1);
        assert_eq!(hist.blue[0], 1);
    }

    #[test]
    fn test_meaningful_peak() {
        let mut img = Image::filled(4, 4, Pixel::new(100.0, 5.0, 250.0));
        img.set_pixel(0, 0, Pixel::new(60.0, 40.0, 120.0));
        let hist = Histogram::compute(&img);
        assert_eq!(hist.meaningful_peak(Channel::Red), 100);
        // 5 and 250 sit outside the window, so the lone in-window pixel wins
        assert_eq!(hist.meaningful_peak(Channel::Green), 40);
        assert_eq!(hist.meaningful_peak(Channel::Blue), 120);
    }

    #[test]
    fn test_peak_blank_window() {
        let hist = Histogram::compute(&Image::new(3, 3));
        assert_eq!(hist.meaningful_peak(Channel::Red), PEAK_SEED);
        assert_eq!(hist.max_frequency(Channel::Red), 9);
    }

    #[test]
    fn test_peak_tie_keeps_lower() {
        let img = Image::from_fn(1, 2, |_, c| Pixel::gray(if c == 0 { 50.0 } else { 60.0 }));
        let hist = Histogram::compute(&img);
        assert_eq!(hist.meaningful_peak(Channel::Blue), 50);
    }

    #[test]
    fn test_color_correct_aligns_peaks() {
        // peaks 100, 130, 160 -> average 130
        let img = Image::filled(2, 2, Pixel::new(100.0, 130.0, 160.0));
        let out = color_correct(&img);
        assert_eq!(out.pixel(1, 1).to_array(), [130.0, 130.0, 130.0]);
    }

    #[test]
    fn test_color_correct_integer_average() {
        // peaks 100, 100, 101 -> average 100
        let img = Image::filled(1, 1, Pixel::new(100.0, 100.0, 101.0));
        let out = color_correct(&img);
        assert_eq!(out.pixel(0, 0).to_array(), [100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_color_correct_blank_is_identity() {
        let img = Image::new(4, 4);
        assert_eq!(color_correct(&img), img);
    }

    #[test]
    fn test_render_size_and_grid() {
        let plot = histogram(&ramp());
        let grid = Pixel::gray(GRID_LEVEL);
        assert_eq!(plot.dimensions(), (PLOT_SIZE, PLOT_SIZE));
        assert_eq!(plot.pixel(5, 0), grid);
        assert_eq!(plot.pixel(32, 200), grid);
        assert_eq!(plot.pixel(5, 5), Pixel::BLACK);
    }

    #[test]
    fn test_render_peak_reaches_top() {
        // red and green are flat at the top, every blue count sits in bin 128
        let plot = histogram(&ramp());
        assert_eq!(plot.pixel(0, 128).to_array(), [0.0, 0.0, 255.0]);
        assert_eq!(plot.pixel(0, 50).to_array(), [0.0, 255.0, 0.0]);
        assert_eq!(plot.pixel(100, 128).to_array(), [0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_line_clipped_to_canvas() {
        let mut canvas = Image::new(4, 4);
        draw_line(&mut canvas, (-2, 1), (6, 1), Pixel::WHITE);
        draw_line(&mut canvas, (2, -3), (2, 9), Pixel::WHITE);
        for (row, col, px) in canvas.pixels() {
            assert_eq!(px == Pixel::WHITE, row == 1 || col == 2, "({row}, {col})");
        }
    }

    #[test]
    fn test_render_empty_histogram() {
        let plot = histogram(&Image::new(0, 0));
        assert!(plot.as_slice().iter().all(|&p| p == Pixel::BLACK || p == Pixel::gray(GRID_LEVEL)));
    }
}
