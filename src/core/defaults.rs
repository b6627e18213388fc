//! Conventional parameter values.
//!
//! None of these are part of the mathematical contract of the samplers; they are the values one
//! usually starts with and are used by the demos and benchmarks.

/// Number of integrand evaluations used when nothing else is known about the integrand.
pub const CALLS: usize = 10_000;

/// Number of uniform random numbers summed by the central-limit-theorem normal sampler and the
/// log-normal sampler. Larger values give a better approximation of the normal distribution, in
/// particular in its tails, at a proportionally higher cost.
pub const CLT_TERMS: usize = 200;

/// Bounds of the standard uniform distribution.
pub const UNIFORM: (f64, f64) = (0.0, 1.0);

/// Minimum, mode and maximum of the standard triangular distribution.
pub const TRIANGULAR: (f64, f64, f64) = (-1.0, 0.0, 1.0);

/// Rate of the standard exponential distribution.
pub const EXPONENTIAL_RATE: f64 = 1.0;

/// Mean and variance of the standard normal distribution.
pub const NORMAL: (f64, f64) = (0.0, 1.0);

/// Shape and rate of the gamma distribution, which is then the standard exponential
/// distribution.
pub const GAMMA: (f64, f64) = (1.0, 1.0);

/// Shape parameters of the beta distribution, which is then the standard uniform distribution.
pub const BETA: (f64, f64) = (1.0, 1.0);

/// Location and scale of the Laplace distribution.
pub const LAPLACE: (f64, f64) = (1.0, 1.0);
