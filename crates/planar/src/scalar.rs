//! Scalar collaborators: uniform random scalars and the degree↔radian
//! convention.
//!
//! Angles are ergonomically supplied in degrees via std's
//! `f64::to_radians`/`f64::to_degrees`; there is no hand-rolled conversion
//! here, only the accuracy contract in the tests below. Random helpers take
//! an explicit `&mut impl Rng` so callers own seeding and reproducibility.

use rand::Rng;

/// Uniformly distributed scalar in the closed interval [0, 1].
#[inline]
pub fn random_uniform01<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..=1.0)
}

/// Uniformly distributed scalar in [min(a, b), max(a, b)], inclusive.
/// Operand order does not matter.
#[inline]
pub fn random_uniform<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Fair random boolean.
#[inline]
pub fn random_bool<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}
