//! Angle and rotation primitives.
//!
//! All angles are in radians, counter-clockwise positive. Canonical headings
//! live in the half-open range [-π, π).

use std::f64::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Normalize angle to [-π, π).
///
/// Values already in range are returned untouched, so normalizing twice is
/// exact. Otherwise the angle is shifted by a whole number of turns and the
/// result is nudged back across the boundary if rounding left it at `π` or
/// below `-π`.
///
/// Non-finite input yields NaN.
///
/// # Example
/// ```
/// use gati::core::math::normalize_theta;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalize_theta(PI / 2.0), PI / 2.0);
/// assert_eq!(normalize_theta(PI), -PI);
/// assert!((normalize_theta(2.5 * PI) - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_theta(theta: f64) -> f64 {
    if (-PI..PI).contains(&theta) {
        return theta;
    }

    let turns = (theta / TWO_PI).floor();
    let mut a = theta - turns * TWO_PI;

    if a >= PI {
        a -= TWO_PI;
    }
    if a < -PI {
        a += TWO_PI;
    }
    a
}

/// Rotate the offset `(x, y)` counter-clockwise by `angle`.
///
/// ```text
/// | cos -sin | | x |
/// | sin  cos | | y |
/// ```
///
/// `angle` does not need to be normalized.
///
/// # Example
/// ```
/// use gati::core::math::rotate;
/// use std::f64::consts::FRAC_PI_2;
///
/// let (x, y) = rotate(1.0, 0.0, FRAC_PI_2);
/// assert!(x.abs() < 1e-12);
/// assert!((y - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rotate(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (cos * x - sin * y, sin * x + cos * y)
}

/// Signed shortest angular difference from `from` to `to`, in [-π, π).
///
/// Positive result means counter-clockwise rotation from `from` to `to`.
///
/// # Example
/// ```
/// use gati::core::math::angle_diff;
/// use std::f64::consts::PI;
///
/// let diff = angle_diff(-0.9 * PI, 0.9 * PI);
/// assert!((diff - (-0.2 * PI)).abs() < 1e-12);
/// ```
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    normalize_theta(to - from)
}

/// Check if two angles are approximately equal, handling wrap-around at ±π.
#[inline]
pub fn angles_approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
    angle_diff(a, b).abs() <= tolerance
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}
