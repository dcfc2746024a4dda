//! Lossy compression with a 2D Haar wavelet.
//!
//! # Pipeline
//!
//! 1. Each channel becomes a square `f64` buffer whose side is the next
//!    power of two of `max(width, height)`, zero padded.
//! 2. [`haar_forward`] runs the transform in place.
//! 3. One threshold is chosen from the sorted, deduplicated magnitudes of
//!    all coefficients of all three channels; every coefficient at or below
//!    it becomes zero.
//! 4. [`haar_inverse`] reconstructs, the padding is cropped and pixels are
//!    clamped to `[0, 255]`.
//!
//! # Layout
//!
//! Buffers are row-major with stride `side`. A transform level works on the
//! top-left `active x active` block only, so every level function takes the
//! stride and the active size explicitly.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, Pixel};
//! use raster_ops::wavelet::compress;
//!
//! let img = Image::filled(5, 3, Pixel::new(40.0, 80.0, 120.0));
//! let out = compress(&img, 0.0).unwrap();
//! assert_eq!(out.dimensions(), (5, 3));
//! assert!((out.pixel(4, 2).green() - 80.0).abs() < 1e-3);
//! ```

use crate::error::check_percentage;
use crate::OpsResult;
use raster_core::{Channel, Image, Pixel};
use std::f64::consts::SQRT_2;
use tracing::{debug, trace};

/// Side of the square buffer holding an image of `height x width`.
///
/// The next power of two of the larger dimension; `0` stays `0`.
pub fn padded_side(height: usize, width: usize) -> usize {
    match height.max(width) {
        0 => 0,
        n => n.next_power_of_two(),
    }
}

/// Copies one channel into a zero-padded `side x side` buffer.
fn pad_channel(src: &Image, channel: Channel, side: usize) -> Vec<f64> {
    let mut buf = vec![0.0; side * side];
    for (row, col, px) in src.pixels() {
        buf[row * side + col] = px.channel(channel) as f64;
    }
    buf
}

fn check_square(buf: &[f64], side: usize) {
    assert!(
        side.is_power_of_two() && buf.len() == side * side,
        "haar buffer of {} values is not a power-of-two square of side {}",
        buf.len(),
        side
    );
}

/// Forward 2D Haar transform of a `side x side` buffer, in place.
///
/// Levels run from `active = side` down to `2`, each transforming the rows
/// and then the columns of the active block.
///
/// # Panics
///
/// If `side` isn't a power of two or `buf.len() != side * side`.
pub fn haar_forward(buf: &mut [f64], side: usize) {
    check_square(buf, side);
    let mut scratch = vec![0.0; side];
    let mut active = side;
    while active > 1 {
        forward_level(buf, side, active, &mut scratch);
        active /= 2;
    }
}

/// Inverse of [`haar_forward`], in place.
///
/// Levels run from `active = 2` up to `side`, each restoring the columns
/// and then the rows of the active block.
///
/// # Panics
///
/// Same as [`haar_forward`].
pub fn haar_inverse(buf: &mut [f64], side: usize) {
    check_square(buf, side);
    let mut scratch = vec![0.0; side];
    let mut active = 2;
    while active <= side {
        inverse_level(buf, side, active, &mut scratch);
        active *= 2;
    }
}

fn forward_level(buf: &mut [f64], stride: usize, active: usize, scratch: &mut [f64]) {
    for row in 0..active {
        let start = row * stride;
        forward_line(&mut buf[start..start + active], scratch);
    }
    for col in 0..active {
        with_column(buf, stride, active, col, scratch, forward_line);
    }
}

fn inverse_level(buf: &mut [f64], stride: usize, active: usize, scratch: &mut [f64]) {
    for col in 0..active {
        with_column(buf, stride, active, col, scratch, inverse_line);
    }
    for row in 0..active {
        let start = row * stride;
        inverse_line(&mut buf[start..start + active], scratch);
    }
}

/// Runs `f` on the first `active` values of column `col`.
fn with_column(
    buf: &mut [f64],
    stride: usize,
    active: usize,
    col: usize,
    scratch: &mut [f64],
    f: fn(&mut [f64], &mut [f64]),
) {
    let mut line: Vec<f64> = (0..active).map(|row| buf[row * stride + col]).collect();
    f(&mut line, scratch);
    for (row, v) in line.into_iter().enumerate() {
        buf[row * stride + col] = v;
    }
}

/// Pairwise butterfly: averages to the first half, differences to the second.
fn forward_line(line: &mut [f64], scratch: &mut [f64]) {
    let half = line.len() / 2;
    for k in 0..half {
        let (a, b) = (line[2 * k], line[2 * k + 1]);
        scratch[k] = (a + b) / SQRT_2;
        scratch[half + k] = (a - b) / SQRT_2;
    }
    line.copy_from_slice(&scratch[..line.len()]);
}

fn inverse_line(line: &mut [f64], scratch: &mut [f64]) {
    let half = line.len() / 2;
    for k in 0..half {
        let (avg, diff) = (line[k], line[half + k]);
        scratch[2 * k] = (avg + diff) / SQRT_2;
        scratch[2 * k + 1] = (avg - diff) / SQRT_2;
    }
    line.copy_from_slice(&scratch[..line.len()]);
}

/// Shared threshold for a set of transformed buffers.
///
/// Magnitudes are sorted and deduplicated; the threshold is the value at
/// `round(count * percentage / 100)`, clamped to the last entry so that
/// 100% drops everything. Index 0 only ever drops exact zeros, so 0% keeps
/// every non-zero coefficient.
fn threshold(buffers: &[Vec<f64>], percentage: f32) -> f64 {
    let mut magnitudes: Vec<f64> = buffers.iter().flatten().map(|v| v.abs()).collect();
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup();
    if magnitudes.is_empty() {
        return 0.0;
    }
    let index = (magnitudes.len() as f64 * percentage as f64 / 100.0).round() as usize;
    let index = index.min(magnitudes.len() - 1);
    trace!(unique = magnitudes.len(), index, "haar threshold");
    if index == 0 {
        return 0.0;
    }
    magnitudes[index]
}

/// Compresses `src` by dropping `percentage` percent of its distinct Haar
/// coefficient magnitudes.
///
/// 0% keeps the image within rounding. 100% zeroes every coefficient and
/// yields black.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`](crate::OpsError::InvalidParameter) if
/// `percentage` is outside `[0, 100]`.
pub fn compress(src: &Image, percentage: f32) -> OpsResult<Image> {
    check_percentage("compress", percentage)?;
    let (height, width) = src.dimensions();
    let side = padded_side(height, width);
    if side == 0 {
        return Ok(src.clone());
    }

    let mut buffers: Vec<Vec<f64>> = Channel::ALL
        .iter()
        .map(|&c| {
            let mut buf = pad_channel(src, c, side);
            haar_forward(&mut buf, side);
            buf
        })
        .collect();

    let limit = threshold(&buffers, percentage);
    let mut dropped = 0usize;
    for v in buffers.iter_mut().flatten() {
        if v.abs() <= limit {
            *v = 0.0;
            dropped += 1;
        }
    }
    debug!(
        height,
        width,
        side,
        percentage,
        threshold = limit,
        dropped,
        total = 3 * side * side,
        "Haar compression"
    );

    for buf in &mut buffers {
        haar_inverse(buf, side);
    }

    Ok(Image::from_fn(height, width, |row, col| {
        let i = row * side + col;
        Pixel::new(
            buffers[0][i] as f32,
            buffers[1][i] as f32,
            buffers[2][i] as f32,
        )
    }))
}
