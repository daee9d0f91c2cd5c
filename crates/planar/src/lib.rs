//! Planar analytic geometry: points and vectors in the plane.
//!
//! Purpose
//! - Give sprite-placement, steering, and collision code a single convention
//!   for oriented angles, normalization, scaling, and eps-tolerant
//!   parallel/perpendicular tests.
//! - Keep the API minimal and numerically explicit (eps-aware).
//!
//! Conventions
//! - Oriented angles are measured counter-clockwise and normalized into
//!   [0, 2π); `Vec2::angle_from_x` is the primitive everything else derives
//!   from.
//! - Equality of vectors and points is tolerant (per-component, `vec2::EPS`).
//! - Degenerate-but-valid inputs (normalizing the zero vector) yield `None`;
//!   contract violations (negative magnitude, negative tolerance, division
//!   by zero) panic.

pub mod point;
pub mod scalar;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::Point2;
pub use vec2::{Vec2, EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::Point2;
    pub use crate::scalar::{random_bool, random_uniform, random_uniform01};
    pub use crate::vec2::{Vec2, EPS};
}
