//! Free displacements in the plane (`Vec2`).
//!
//! Purpose
//! - Single home for the vector algebra: construction, magnitude and
//!   normalization, products, and the eps-tolerant orientation predicates.
//! - Angle algebra lives in `angle`, projection/rotation in `project`,
//!   operator and conversion impls in `ops`.
//!
//! Zero-vector conventions
//! - The zero vector is a legitimate value, not an error. By convention it
//!   is parallel AND perpendicular to every vector (its cross and dot
//!   products with anything are 0), and for cosine purposes it behaves as if
//!   aligned with the X axis. These are deliberate compatibility
//!   conventions; do not "fix" them.

use rand::Rng;

use crate::point::Point2;
use crate::scalar;

mod angle;
mod ops;
mod project;


/// Tolerance of the tolerant equality on `Vec2` and `Point2`, and the
/// default resolution of the orientation predicates.
pub const EPS: f64 = 1e-12;

/// A free displacement (Δx, Δy) in the plane.
///
/// Immutable value type; transformations return new vectors, and the
/// `*Assign` operators are the only in-place surface. Equality is tolerant
/// per component (see [`EPS`]), hence not transitive, so `Vec2` is
/// deliberately neither `Eq` nor `Hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vec2 {
    pub dx: f64,
    pub dy: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
    /// Unit vector along the X axis.
    pub const UNIT_X: Vec2 = Vec2::new(1.0, 0.0);
    /// Unit vector along the Y axis.
    pub const UNIT_Y: Vec2 = Vec2::new(0.0, 1.0);

    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Vector with the given magnitude at the oriented angle `radians` from
    /// the X axis. The magnitude must be non-negative.
    pub fn from_polar(magnitude: f64, radians: f64) -> Self {
        assert!(magnitude >= 0.0, "vector magnitude must be non-negative");
        Self::new(magnitude * radians.cos(), magnitude * radians.sin())
    }

    /// Like `from_polar` for callers that already hold the angle's sine and
    /// cosine. The pair is used as given, with no renormalization and no
    /// sin²+cos²=1 validation.
    pub fn from_polar_sin_cos(magnitude: f64, sina: f64, cosa: f64) -> Self {
        assert!(magnitude >= 0.0, "vector magnitude must be non-negative");
        Self::new(magnitude * cosa, magnitude * sina)
    }

    /// Displacement from `from` to `to`.
    #[inline]
    pub fn between(from: Point2, to: Point2) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Vector whose components are each uniform in [min(a, b), max(a, b)].
    pub fn random_uniform<R: Rng>(rng: &mut R, a: f64, b: f64) -> Self {
        let dx = scalar::random_uniform(rng, a, b);
        let dy = scalar::random_uniform(rng, a, b);
        Self::new(dx, dy)
    }

    /// True iff both components are exactly 0.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// True iff the magnitude is within `eps` of zero.
    pub fn is_zero_eps(self, eps: f64) -> bool {
        assert!(eps >= 0.0, "resolution must be non-negative");
        self.magnitude_squared() <= eps * eps
    }

    /// True iff the magnitude of `self − other` is within `eps`.
    pub fn eq_eps(self, other: Vec2, eps: f64) -> bool {
        assert!(eps >= 0.0, "resolution must be non-negative");
        (self - other).magnitude_squared() <= eps * eps
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// Squared Euclidean norm (no square root).
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Whether the vector is not (tolerance-)equal to the zero vector.
    #[inline]
    pub fn is_normalizable(self) -> bool {
        self != Vec2::ZERO
    }

    /// The unit vector with this direction, or `None` when the magnitude is
    /// exactly zero.
    pub fn normalized(self) -> Option<Vec2> {
        let m = self.magnitude();
        if m == 0.0 {
            None
        } else {
            Some(Vec2::new(self.dx / m, self.dy / m))
        }
    }

    /// Rescale to the given magnitude, keeping the direction for
    /// `value >= 0` and reversing it for negative `value`. No-op when the
    /// current magnitude is exactly zero.
    pub fn scaled_to(self, value: f64) -> Vec2 {
        let m = self.magnitude();
        if m > 0.0 {
            self * (value / m)
        } else {
            self
        }
    }

    /// Clamp the magnitude to at most `max_value`, keeping the direction.
    /// `max_value` must be non-negative.
    pub fn truncated_to(self, max_value: f64) -> Vec2 {
        assert!(max_value >= 0.0, "truncation magnitude must be non-negative");
        let m = self.magnitude();
        if m > max_value {
            self * (max_value / m)
        } else {
            self
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Signed 2D cross ("perp-dot") product; positive when `other` is
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }

    /// `is_parallel_to_eps` at the default resolution [`EPS`].
    #[inline]
    pub fn is_parallel_to(self, other: Vec2) -> bool {
        self.is_parallel_to_eps(other, EPS)
    }

    /// True iff |self × other| ≤ eps. The zero vector is parallel to every
    /// vector, itself included, since its cross product with anything is 0.
    /// Together with `is_perpendicular_to_eps` this makes the zero vector
    /// both parallel and perpendicular to everything — a deliberate
    /// compatibility convention, not a contradiction to resolve.
    pub fn is_parallel_to_eps(self, other: Vec2, eps: f64) -> bool {
        assert!(eps >= 0.0, "resolution must be non-negative");
        self.cross(other).abs() <= eps
    }

    /// `is_perpendicular_to_eps` at the default resolution [`EPS`].
    #[inline]
    pub fn is_perpendicular_to(self, other: Vec2) -> bool {
        self.is_perpendicular_to_eps(other, EPS)
    }

    /// True iff |self · other| ≤ eps. The zero vector is perpendicular to
    /// every vector, by the same convention as `is_parallel_to_eps`.
    pub fn is_perpendicular_to_eps(self, other: Vec2, eps: f64) -> bool {
        assert!(eps >= 0.0, "resolution must be non-negative");
        self.dot(other).abs() <= eps
    }
}
