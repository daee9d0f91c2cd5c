//! Oriented-angle algebra.
//!
//! `angle_from_x` is the primitive: oriented angles are measured
//! counter-clockwise and normalized into [0, 2π). The Y-axis quantities and
//! the angle between two arbitrary vectors are defined in terms of it, so
//! the whole family stays numerically consistent with a single definition.

use std::f64::consts::{PI, TAU};

use super::Vec2;

impl Vec2 {
    /// Oriented angle (radians) from the X axis to the vector, in [0, 2π).
    /// Returns 0 for the zero vector.
    pub fn angle_from_x(self) -> f64 {
        let mut a = self.dy.atan2(self.dx);
        if a < 0.0 {
            a += TAU;
        }
        debug_assert!((0.0..TAU).contains(&a), "angle not in [0, 2π)");
        a
    }

    /// Sine of the oriented angle from the X axis; 0 for the zero vector.
    pub fn sin_angle_from_x(self) -> f64 {
        let m = self.magnitude();
        if m == 0.0 {
            0.0
        } else {
            self.dy / m
        }
    }

    /// Cosine of the oriented angle from the X axis; 1 for the zero vector,
    /// which counts as aligned with the X axis for cosine purposes (a
    /// compatibility convention).
    pub fn cos_angle_from_x(self) -> f64 {
        let m = self.magnitude();
        if m == 0.0 {
            1.0
        } else {
            self.dx / m
        }
    }

    /// Tangent of the oriented angle from the X axis. With no X component
    /// the result is ±∞ by the sign of dy, and 0 for the zero vector — an
    /// explicit three-way split, not a limit.
    pub fn tan_angle_from_x(self) -> f64 {
        if self.dx == 0.0 {
            if self.dy > 0.0 {
                f64::INFINITY
            } else if self.dy < 0.0 {
                f64::NEG_INFINITY
            } else {
                0.0
            }
        } else {
            self.dy / self.dx
        }
    }

    /// Oriented angle (radians) from the Y axis to the vector, in [0, 2π).
    /// Derived from `angle_from_x` by a 3π/2 shift; returns 3π/2 for the
    /// zero vector.
    pub fn angle_from_y(self) -> f64 {
        let a = (self.angle_from_x() + 1.5 * PI) % TAU;
        debug_assert!((0.0..TAU).contains(&a), "angle not in [0, 2π)");
        a
    }

    /// Sine of the oriented angle from the Y axis; −1 for the zero vector.
    /// Note the sign: derived as `-cos_angle_from_x()`.
    #[inline]
    pub fn sin_angle_from_y(self) -> f64 {
        -self.cos_angle_from_x()
    }

    /// Cosine of the oriented angle from the Y axis; 0 for the zero vector.
    /// Derived as `sin_angle_from_x()`, with no sign flip.
    #[inline]
    pub fn cos_angle_from_y(self) -> f64 {
        self.sin_angle_from_x()
    }

    /// Tangent of the oriented angle from the Y axis. With no Y component
    /// the result is ∓∞ by the sign of dx, so −∞ for the zero vector.
    pub fn tan_angle_from_y(self) -> f64 {
        if self.dy == 0.0 {
            if self.dx >= 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            -self.dx / self.dy
        }
    }

    /// Oriented angle (radians) from `other` to `self`, measured
    /// counter-clockwise, in [0, 2π): the difference of the two absolute
    /// angles from the X axis, wrapped by +2π when negative.
    pub fn angle_from(self, other: Vec2) -> f64 {
        let this_a = self.angle_from_x();
        let that_a = other.angle_from_x();
        let a = if this_a >= that_a {
            this_a - that_a
        } else {
            this_a - that_a + TAU
        };
        debug_assert!((0.0..TAU).contains(&a), "angle not in [0, 2π)");
        a
    }

    /// Sine of the oriented angle from `other` to `self`.
    ///
    /// Consistent with the zero-vector conventions by construction:
    /// sin[angle(zero → u)] = +u.sin_angle_from_x(),
    /// sin[angle(u → zero)] = −u.sin_angle_from_x(),
    /// sin[angle(zero → zero)] = 0.
    pub fn sin_angle_from(self, other: Vec2) -> f64 {
        (self.angle_from_x() - other.angle_from_x()).sin()
    }

    /// Cosine of the oriented angle from `other` to `self`.
    ///
    /// Consistent by construction:
    /// cos[angle(zero → u)] = cos[angle(u → zero)] = u.cos_angle_from_x(),
    /// cos[angle(zero → zero)] = 1.
    pub fn cos_angle_from(self, other: Vec2) -> f64 {
        (self.angle_from_x() - other.angle_from_x()).cos()
    }

    /// Tangent of the oriented angle from `other` to `self`.
    ///
    /// When the dot product is exactly zero, the sign of the cross product
    /// decides ±∞. When both products are zero at least one operand is the
    /// zero vector: delegate to `tan_angle_from_x` of the non-zero operand
    /// (negated when it is `other`), or 0 when both are zero.
    pub fn tan_angle_from(self, other: Vec2) -> f64 {
        if other.dot(self) == 0.0 {
            let c = other.cross(self);
            if c > 0.0 {
                f64::INFINITY
            } else if c < 0.0 {
                f64::NEG_INFINITY
            } else if self.is_zero() {
                if other.is_zero() {
                    0.0
                } else {
                    -other.tan_angle_from_x()
                }
            } else {
                self.tan_angle_from_x()
            }
        } else {
            (self.angle_from_x() - other.angle_from_x()).tan()
        }
    }
}
