#![allow(dead_code)]

use rand_pcg::Pcg64;

/// The number of samples drawn in the statistical tests.
pub const ITERATIONS: usize = 10_000;

/// Relative tolerance of the statistical tests.
pub const EPSILON: f64 = 0.1;

/// Absolute tolerance for quantities whose expected value is zero.
pub const DELTA: f64 = 0.05;

pub fn rng() -> Pcg64 {
    Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

/// Asserts that `actual` and `expected` agree within the relative tolerance `epsilon`, measured
/// against the smaller of the two in magnitude.
pub fn assert_in_epsilon(actual: f64, expected: f64, epsilon: f64) {
    let tolerance = epsilon * actual.abs().min(expected.abs());

    assert!(
        (actual - expected).abs() <= tolerance,
        "{} and {} differ by more than {} (relative tolerance {})",
        actual,
        expected,
        tolerance,
        epsilon
    );
}
