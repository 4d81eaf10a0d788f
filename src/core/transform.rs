//! Planar rigid transform (SE(2)).

use std::fmt;
use std::ops::{Mul, MulAssign};

use super::math::{angles_approx_equal, normalize_theta, rotate};
use crate::config::ToleranceConfig;
use crate::error::{Error, Result};

/// A rigid-body pose in the plane: translation `(x, y)` and heading `th`.
///
/// Construction stores the heading as given. Composition always leaves the
/// heading in [-π, π); inversion negates it without normalizing.
///
/// # Composition
///
/// `a.compose(&b)` applies `b` in `a`'s rotated frame:
/// ```text
/// C = A ⊕ B:
///   C.x  = A.x + B.x * cos(A.th) - B.y * sin(A.th)
///   C.y  = A.y + B.x * sin(A.th) + B.y * cos(A.th)
///   C.th = normalize(A.th + B.th)
/// ```
///
/// ```
/// use gati::Transform2D;
///
/// let robot = Transform2D::new(2.0, 2.0, 0.0);
/// let goal = Transform2D::new(5.0, 5.0, 0.0);
///
/// // Goal expressed in the robot's frame.
/// let local = robot.inverse().compose(&goal);
/// assert!((local.x - 3.0).abs() < 1e-12);
/// assert!((local.y - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform2D {
    /// X translation
    pub x: f64,
    /// Y translation
    pub y: f64,
    /// Heading in radians, CCW positive
    pub th: f64,
}

impl Transform2D {
    /// Create a transform. The heading is stored as given.
    #[inline]
    pub const fn new(x: f64, y: f64, th: f64) -> Self {
        Self { x, y, th }
    }

    /// Create a transform, rejecting NaN or infinite components.
    pub fn try_new(x: f64, y: f64, th: f64) -> Result<Self> {
        for (component, value) in [("x", x), ("y", y), ("th", th)] {
            if !value.is_finite() {
                return Err(Error::NonFinite { component, value });
            }
        }
        Ok(Self::new(x, y, th))
    }

    /// Identity transform at the origin with zero heading.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Compose `other` onto this transform, in place.
    ///
    /// `other`'s translation is rotated into this transform's frame and
    /// added; headings are summed and normalized.
    #[inline]
    pub fn compose_in_place(&mut self, other: &Transform2D) {
        let (rx, ry) = rotate(other.x, other.y, self.th);
        self.x += rx;
        self.y += ry;
        self.th = normalize_theta(self.th + other.th);
    }

    /// Compose two transforms: `self ⊕ other`.
    ///
    /// Same computation as [`compose_in_place`](Self::compose_in_place),
    /// applied to a copy.
    #[inline]
    pub fn compose(&self, other: &Transform2D) -> Transform2D {
        let mut result = *self;
        result.compose_in_place(other);
        result
    }

    /// Inverse of this transform.
    ///
    /// ```text
    /// A⁻¹:
    ///   (x, y) = rotate(-A.x, -A.y, -A.th)
    ///   th     = -A.th
    /// ```
    ///
    /// The heading is negated but not normalized, so the inverse of a
    /// transform with heading `-π` has heading `π`. Use
    /// [`inverse_normalized`](Self::inverse_normalized) when the canonical
    /// range is required.
    #[inline]
    pub fn inverse(&self) -> Transform2D {
        let (x, y) = rotate(-self.x, -self.y, -self.th);
        Transform2D::new(x, y, -self.th)
    }

    /// Inverse of this transform with the heading normalized to [-π, π).
    #[inline]
    pub fn inverse_normalized(&self) -> Transform2D {
        let mut inv = self.inverse();
        inv.th = normalize_theta(inv.th);
        inv
    }

    /// Express `other` in this transform's frame.
    ///
    /// `self.compose(&self.relative_to(other)) ≈ other`
    #[inline]
    pub fn relative_to(&self, other: &Transform2D) -> Transform2D {
        self.inverse().compose(other)
    }

    /// Map a point from this transform's local frame to the parent frame.
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (rx, ry) = rotate(x, y, self.th);
        (self.x + rx, self.y + ry)
    }

    /// Whether the heading lies in the canonical range [-π, π).
    #[inline]
    pub fn heading_normalized(&self) -> bool {
        normalize_theta(self.th) == self.th
    }

    /// Component-wise comparison within tolerance; headings compare
    /// modulo 2π.
    pub fn approx_eq(&self, other: &Transform2D, tolerance: &ToleranceConfig) -> bool {
        (self.x - other.x).abs() <= tolerance.position_epsilon
            && (self.y - other.y).abs() <= tolerance.position_epsilon
            && angles_approx_equal(self.th, other.th, tolerance.angle_epsilon)
    }
}

impl fmt::Display for Transform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.6}]", self.x, self.y, self.th)
    }
}

impl Mul for Transform2D {
    type Output = Self;

    /// Compose two transforms (same as `compose`).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl MulAssign for Transform2D {
    /// Compose in place (same as `compose_in_place`).
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.compose_in_place(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_new_does_not_normalize() {
        let t = Transform2D::new(1.0, 2.0, 4.0);
        assert_eq!(t.th, 4.0);
        assert!(!t.heading_normalized());
    }

    #[test]
    fn test_default_is_identity() {
        let t = Transform2D::default();
        assert_eq!(t, Transform2D::identity());
        assert_eq!(t.x, 0.0);
        assert_eq!(t.y, 0.0);
        assert_eq!(t.th, 0.0);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(Transform2D::try_new(1.0, 2.0, 0.5).is_ok());

        match Transform2D::try_new(f64::NAN, 0.0, 0.0) {
            Err(Error::NonFinite { component, value }) => {
                assert_eq!(component, "x");
                assert!(value.is_nan());
            }
            other => panic!("expected NonFinite error, got {:?}", other),
        }

        assert!(matches!(
            Transform2D::try_new(0.0, f64::INFINITY, 0.0),
            Err(Error::NonFinite { component: "y", .. })
        ));
        assert!(matches!(
            Transform2D::try_new(0.0, 0.0, f64::NEG_INFINITY),
            Err(Error::NonFinite { component: "th", .. })
        ));
    }

    #[test]
    fn test_compose_identity() {
        let t = Transform2D::new(1.0, 2.0, 0.5);
        let result = t.compose(&Transform2D::identity());
        assert_eq!(result, t);

        let result = Transform2D::identity().compose(&t);
        assert_eq!(result, t);
    }

    #[test]
    fn test_composition_order() {
        let move_forward = Transform2D::new(1.0, 0.0, 0.0);
        let turn_left = Transform2D::new(0.0, 0.0, FRAC_PI_2);

        let result = move_forward.compose(&turn_left);
        assert_relative_eq!(result.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.th, FRAC_PI_2, epsilon = 1e-12);

        // Translation is applied in the rotated frame
        let result = turn_left.compose(&move_forward);
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.th, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_compose_normalizes_heading() {
        let a = Transform2D::new(0.0, 0.0, 0.75 * PI);
        let b = Transform2D::new(0.0, 0.0, 0.5 * PI);
        let result = a.compose(&b);
        assert!(result.heading_normalized());
        assert_relative_eq!(result.th, -0.75 * PI, epsilon = 1e-12);

        // Raw, out-of-range headings on both sides still produce a canonical result
        let a = Transform2D::new(0.0, 0.0, 7.0);
        let b = Transform2D::new(0.0, 0.0, 9.0);
        let result = a.compose(&b);
        assert!(result.heading_normalized());
        assert_relative_eq!(result.th, 16.0 - 6.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_compose_half_turn_lands_on_minus_pi() {
        let quarter = Transform2D::new(0.0, 0.0, FRAC_PI_2);
        let result = quarter.compose(&quarter);
        assert_eq!(result.th, -PI);
    }

    #[test]
    fn test_compose_does_not_modify_operands() {
        let a = Transform2D::new(1.0, 2.0, 0.3);
        let b = Transform2D::new(-0.5, 4.0, 1.1);
        let _ = a.compose(&b);
        assert_eq!(a, Transform2D::new(1.0, 2.0, 0.3));
        assert_eq!(b, Transform2D::new(-0.5, 4.0, 1.1));
    }

    #[test]
    fn test_compose_matches_compose_in_place() {
        let a = Transform2D::new(1.5, -2.0, 2.9);
        let b = Transform2D::new(0.25, 3.0, 1.7);

        let pure = a.compose(&b);
        let mut mutated = a;
        mutated.compose_in_place(&b);

        assert_eq!(pure, mutated);
    }

    #[test]
    fn test_inverse_translation_and_heading() {
        let t = Transform2D::new(2.0, 2.0, FRAC_PI_4);
        let inv = t.inverse();
        assert_relative_eq!(inv.x, -2.0 * std::f64::consts::SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(inv.y, 0.0, epsilon = 1e-12);
        assert_eq!(inv.th, -FRAC_PI_4);
    }

    #[test]
    fn test_inverse_heading_is_not_normalized() {
        let t = Transform2D::new(1.0, 0.0, -PI);
        let inv = t.inverse();
        assert_eq!(inv.th, PI);
        assert!(!inv.heading_normalized());

        let raw = Transform2D::new(0.0, 0.0, 5.0);
        assert_eq!(raw.inverse().th, -5.0);
    }

    #[test]
    fn test_inverse_normalized() {
        let t = Transform2D::new(1.0, 0.0, -PI);
        let inv = t.inverse_normalized();
        assert_eq!(inv.th, -PI);
        assert_eq!(inv.x, t.inverse().x);
        assert_eq!(inv.y, t.inverse().y);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Transform2D::new(1.0, 2.0, 0.5);
        let inv = t.inverse();

        let result = t.compose(&inv);
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.th, 0.0, epsilon = 1e-12);

        let result = inv.compose(&t);
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.th, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_of_identity() {
        let inv = Transform2D::identity().inverse();
        assert_eq!(inv.x, 0.0);
        assert_eq!(inv.y, 0.0);
        assert_eq!(inv.th, 0.0);
    }

    #[test]
    fn test_relative_to() {
        let a = Transform2D::new(1.0, 0.0, 0.0);
        let b = Transform2D::new(2.0, 1.0, FRAC_PI_2);

        let relative = a.relative_to(&b);
        let reconstructed = a.compose(&relative);

        assert_relative_eq!(reconstructed.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(reconstructed.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(reconstructed.th, b.th, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_point() {
        let t = Transform2D::new(1.0, 0.0, FRAC_PI_2);
        let (x, y) = t.transform_point(1.0, 0.0);
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_point_matches_compose() {
        let t = Transform2D::new(-3.0, 0.5, 2.2);
        let (x, y) = t.transform_point(4.0, -1.0);
        let composed = t.compose(&Transform2D::new(4.0, -1.0, 0.0));
        assert_eq!((x, y), (composed.x, composed.y));
    }

    #[test]
    fn test_mul_operator() {
        let a = Transform2D::new(1.0, 0.0, FRAC_PI_2);
        let b = Transform2D::new(1.0, 0.0, 0.0);
        assert_eq!(a * b, a.compose(&b));

        let mut c = a;
        c *= b;
        assert_eq!(c, a.compose(&b));
    }

    #[test]
    fn test_approx_eq() {
        let tolerance = ToleranceConfig {
            position_epsilon: 0.01,
            angle_epsilon: 0.01,
        };
        let a = Transform2D::new(1.0, 2.0, 0.5);
        let b = Transform2D::new(1.001, 2.001, 0.501);
        assert!(a.approx_eq(&b, &tolerance));

        let strict = ToleranceConfig {
            position_epsilon: 0.0001,
            angle_epsilon: 0.0001,
        };
        assert!(!a.approx_eq(&b, &strict));

        // Headings on either side of the ±π seam
        let c = Transform2D::new(0.0, 0.0, PI - 0.001);
        let d = Transform2D::new(0.0, 0.0, -PI + 0.001);
        assert!(c.approx_eq(&d, &tolerance));
    }

    #[test]
    fn test_display() {
        let t = Transform2D::new(3.0, -0.5, 0.25);
        assert_eq!(t.to_string(), "[3.000000, -0.500000, 0.250000]");
    }
}
