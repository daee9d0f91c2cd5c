//! Projection onto a reference vector, and rotation.

use nalgebra::{Matrix2, Vector2};

use super::Vec2;

impl Vec2 {
    /// Component of `self` parallel to `other`:
    /// `(self · other / |other|²) · other`. When either operand is
    /// (tolerance-)equal to the zero vector the result is `self` — by
    /// convention any vector is parallel to the zero vector.
    pub fn parallel_projection_to(self, other: Vec2) -> Vec2 {
        if self == Vec2::ZERO || other == Vec2::ZERO {
            self
        } else {
            other * (self.dot(other) / other.magnitude_squared())
        }
    }

    /// Component of `self` perpendicular to `other`:
    /// `self − parallel_projection_to(other)`, with the same zero-vector
    /// fallback (any vector is perpendicular to the zero vector).
    pub fn perpendicular_projection_to(self, other: Vec2) -> Vec2 {
        if self == Vec2::ZERO || other == Vec2::ZERO {
            self
        } else {
            self - self.parallel_projection_to(other)
        }
    }

    /// Counter-clockwise rotation by `radians`.
    #[inline]
    pub fn rotated_ccw(self, radians: f64) -> Vec2 {
        self.rotated_ccw_sin_cos(radians.sin(), radians.cos())
    }

    /// Counter-clockwise rotation by the angle whose sine and cosine are
    /// given, for callers that already hold the pair.
    pub fn rotated_ccw_sin_cos(self, sina: f64, cosa: f64) -> Vec2 {
        let r = Matrix2::new(cosa, -sina, sina, cosa);
        let v = r * Vector2::new(self.dx, self.dy);
        Vec2::new(v.x, v.y)
    }

    /// Clockwise rotation by `radians`: counter-clockwise with the sine
    /// negated.
    #[inline]
    pub fn rotated_cw(self, radians: f64) -> Vec2 {
        self.rotated_ccw_sin_cos(-radians.sin(), radians.cos())
    }

    /// Clockwise rotation by the angle whose sine and cosine are given.
    #[inline]
    pub fn rotated_cw_sin_cos(self, sina: f64, cosa: f64) -> Vec2 {
        self.rotated_ccw_sin_cos(-sina, cosa)
    }
}
