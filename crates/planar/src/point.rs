//! Positions in the plane (`Point2`) and their affine combination with
//! [`Vec2`].
//!
//! A point is defined in terms of the vector entity: point + vector
//! translates, point − point is the displacement between them, and a vector
//! read from the origin is a point.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::vec2::{Vec2, EPS};

/// A position (x, y) in the plane.
///
/// Shares the coordinate space and the tolerant-equality constant of
/// [`Vec2`]; it carries no tolerance policy of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// The origin.
    pub const ORIGIN: Point2 = Point2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `self + scalar·v` — the parametrized translation used by e.g.
    /// explicit-Euler integration steps.
    #[inline]
    pub fn advanced_by(self, scalar: f64, v: Vec2) -> Point2 {
        Point2::new(self.x + scalar * v.dx, self.y + scalar * v.dy)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance_to(self, other: Point2) -> f64 {
        (self - other).magnitude()
    }

    /// Squared distance to another point (no square root).
    #[inline]
    pub fn distance_squared_to(self, other: Point2) -> f64 {
        (self - other).magnitude_squared()
    }
}

/// Tolerant equality with the same constant as `Vec2`.
impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() <= EPS && (self.y - other.y).abs() <= EPS
    }
}

impl Add<Vec2> for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Vec2) -> Point2 {
        Point2::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Add<Point2> for Vec2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        rhs + self
    }
}

impl Sub for Point2 {
    type Output = Vec2;
    /// Displacement from `rhs` to `lhs`; the direction matters.
    #[inline]
    fn sub(self, rhs: Point2) -> Vec2 {
        Vec2::between(rhs, self)
    }
}

impl AddAssign<Vec2> for Point2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl From<Vec2> for Point2 {
    /// The vector read as a position relative to the origin.
    #[inline]
    fn from(v: Vec2) -> Point2 {
        Point2::new(v.dx, v.dy)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}
