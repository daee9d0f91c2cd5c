//! Operator, conversion, and formatting impls for `Vec2`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::Vector2;

use super::{Vec2, EPS};
use crate::point::Point2;

/// Tolerant equality: the components must agree within [`EPS`]. Not
/// transitive, which is why `Vec2` implements neither `Eq` nor `Hash`.
impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        (self.dx - other.dx).abs() <= EPS && (self.dy - other.dy).abs() <= EPS
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self * rhs.dx, self * rhs.dy)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    /// The divisor must be non-zero.
    fn div(self, rhs: f64) -> Vec2 {
        assert!(rhs != 0.0, "attempt to divide a vector by 0");
        Vec2::new(self.dx / rhs, self.dy / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.dx, -self.dy)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl From<Point2> for Vec2 {
    /// The point's position vector relative to the origin.
    #[inline]
    fn from(p: Point2) -> Vec2 {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Vector2<f64> {
    #[inline]
    fn from(v: Vec2) -> Vector2<f64> {
        Vector2::new(v.dx, v.dy)
    }
}

impl From<Vector2<f64>> for Vec2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Vec2 {
        Vec2::new(v.x, v.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(dx: {}, dy: {})", self.dx, self.dy)
    }
}
