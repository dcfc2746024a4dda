//! Levels adjustment through a quadratic tone curve.
//!
//! Three ascending control points `black < mid < white` define the curve
//! `y = a*x^2 + b*x + c` through `(black, 0)`, `(mid, 128)` and
//! `(white, 255)`. The coefficients come from solving the 3x3 system
//! with Cramer's rule.

use crate::{OpsError, OpsResult};
use raster_core::{CHANNEL_MAX, CHANNEL_MIN, Image};
use tracing::debug;

const OP: &str = "adjust_levels";

/// Control points for [`adjust_levels`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Levels {
    /// Input value mapped to 0.
    pub black: f32,
    /// Input value mapped to 128.
    pub mid: f32,
    /// Input value mapped to 255.
    pub white: f32,
}

impl Levels {
    /// Creates validated control points.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if any point is outside `[0, 255]` or
    /// the points aren't strictly ascending.
    ///
    /// ```rust
    /// use raster_ops::Levels;
    ///
    /// assert!(Levels::new(20.0, 100.0, 200.0).is_ok());
    /// assert!(Levels::new(100.0, 20.0, 200.0).is_err());
    /// assert!(Levels::new(0.0, 128.0, 300.0).is_err());
    /// ```
    pub fn new(black: f32, mid: f32, white: f32) -> OpsResult<Self> {
        let levels = Self { black, mid, white };
        levels.validate()?;
        Ok(levels)
    }

    /// Checks range and ordering.
    pub fn validate(&self) -> OpsResult<()> {
        for (name, v) in [("black", self.black), ("mid", self.mid), ("white", self.white)] {
            if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&v) {
                return Err(OpsError::invalid_parameter(
                    OP,
                    format!("{name} point {v} outside [0, 255]"),
                ));
            }
        }
        if !(self.black < self.mid && self.mid < self.white) {
            return Err(OpsError::invalid_parameter(
                OP,
                format!(
                    "points must ascend: black {} < mid {} < white {}",
                    self.black, self.mid, self.white
                ),
            ));
        }
        Ok(())
    }

    /// Curve coefficients `[a, b, c]`.
    ///
    /// Only meaningful for validated points; ascending points keep the
    /// system non-singular.
    pub fn coefficients(&self) -> [f64; 3] {
        let xs = [self.black as f64, self.mid as f64, self.white as f64];
        let ys = [0.0, 128.0, 255.0];
        let m = xs.map(|x| [x * x, x, 1.0]);

        let det = det3(m);
        let mut out = [0.0; 3];
        for (k, coef) in out.iter_mut().enumerate() {
            let mut mk = m;
            for (row, y) in mk.iter_mut().zip(ys) {
                row[k] = y;
            }
            *coef = det3(mk) / det;
        }
        out
    }
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Applies the levels curve to every channel, clamping to `[0, 255]`.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] for invalid control points.
pub fn adjust_levels(src: &Image, levels: &Levels) -> OpsResult<Image> {
    levels.validate()?;
    let [a, b, c] = levels.coefficients();
    debug!(
        black = levels.black,
        mid = levels.mid,
        white = levels.white,
        a,
        b,
        c,
        "Adjusting levels"
    );
    Ok(src.map_pixels(|px| {
        px.map(|v| {
            let x = v as f64;
            (a * x * x + b * x + c) as f32
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use raster_core::Pixel;

    #[test]
    fn test_control_points_hit_targets() {
        let levels = Levels::new(20.0, 100.0, 200.0).unwrap();
        for (input, expected) in [(20.0, 0.0), (100.0, 128.0), (200.0, 255.0)] {
            let img = Image::filled(1, 1, Pixel::gray(input));
            let px = adjust_levels(&img, &levels).unwrap().pixel(0, 0);
            assert_abs_diff_eq!(px.red(), expected, epsilon = 1e-3);
            assert_abs_diff_eq!(px.green(), expected, epsilon = 1e-3);
            assert_abs_diff_eq!(px.blue(), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_per_channel() {
        let levels = Levels::new(20.0, 100.0, 200.0).unwrap();
        let img = Image::filled(1, 1, Pixel::new(20.0, 100.0, 200.0));
        let px = adjust_levels(&img, &levels).unwrap().pixel(0, 0);
        assert_abs_diff_eq!(px.red(), 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(px.green(), 128.0, epsilon = 1e-3);
        assert_abs_diff_eq!(px.blue(), 255.0, epsilon = 1e-3);
    }

    #[test]
    fn test_identity_like_curve() {
        // (0,0) (128,128) (255,255) is nearly linear
        let [a, b, c] = Levels::new(0.0, 128.0, 255.0).unwrap().coefficients();
        assert_abs_diff_eq!(c, 0.0, epsilon = 1e-9);
        assert!(a.abs() < 1e-4);
        assert_abs_diff_eq!(b, 1.0, epsilon = 0.02);
    }

    #[test]
    fn test_rejects_bad_points() {
        for (b, m, w) in [
            (-1.0, 100.0, 200.0),
            (0.0, 100.0, 256.0),
            (50.0, 50.0, 200.0),
            (10.0, 200.0, 100.0),
            (f32::NAN, 100.0, 200.0),
        ] {
            let err = Levels::new(b, m, w).unwrap_err();
            assert!(err.is_invalid_parameter());
            assert!(err.to_string().starts_with("adjust_levels"));
        }
    }

    #[test]
    fn test_apply_revalidates() {
        let bad = Levels { black: 200.0, mid: 100.0, white: 50.0 };
        assert!(adjust_levels(&Image::new(1, 1), &bad).is_err());
    }

    #[test]
    fn test_output_clamped() {
        let levels = Levels::new(100.0, 150.0, 200.0).unwrap();
        let img = Image::from_fn(1, 256, |_, c| Pixel::gray(c as f32));
        let out = adjust_levels(&img, &levels).unwrap();
        assert!(out.as_slice().iter().all(|p| (0.0..=255.0).contains(&p.red())));
        assert_eq!(out.pixel(0, 0).red(), 0.0);
        assert_eq!(out.pixel(0, 255).red(), 255.0);
    }
}
