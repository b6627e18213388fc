#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `mcvariates` generates [random variates] of common probability distributions and
//! approximates one-dimensional, possibly improper, integrals with [Monte Carlo integration].
//!
//! # Features
//!
//! - **Explicit random number generators**. Every sampler and integrator receives the source of
//! uniform random numbers as an argument. Every random number generator that implements the `Rng`
//! trait from the `rand` crate is such a source, see [`UniformSource`]. There is no hidden global
//! state, and all results only depend on the generator and its seed.
//! - **Continuous distributions**. Uniform, triangular, exponential, normal (Box-Muller, polar
//! method and central limit theorem), $\chi^2$, Student's t, log-normal, Erlang, gamma, beta and
//! Laplace, see [`distributions::continuous`].
//! - **Discrete distributions**. Geometric, negative binomial, binomial, Poisson and
//! hypergeometric, see [`distributions::discrete`].
//! - **Infinite integration domains**. Integrals over $[a,b]$, $[a,\infty)$, $(-\infty,b]$ and
//! $(-\infty,\infty)$ are mapped onto the unit interval by a change of variables, see
//! [`integrators`].
//! - **Non-finite number accounting**. Integrands sometimes produce `inf` or `nan` in extreme
//! regions of their integration domain. These values are counted and reported, and they enter the
//! estimate, so that a broken integrand is never mistaken for a finite result. A random number of
//! exactly zero on a semi-infinite domain, where the substitution needs its logarithm, is an
//! error.
//! - **Reproducible parallel integration**. [`integrators::plain::integrate_parallel`] produces
//! the same result independent of the number of threads it runs on.
//!
//! # How do I get started?
//!
//! ```
//! use mcvariates::distributions::continuous;
//! use mcvariates::integrators;
//! use rand::SeedableRng;
//! use rand_pcg::Pcg64;
//!
//! let mut rng = Pcg64::seed_from_u64(42);
//!
//! let x = continuous::gamma(&mut rng, 2.5, 1.0)?;
//! assert!(x > 0.0);
//!
//! // int_0^inf dx exp(-x) = 1
//! let integral = integrators::integral_a_inf(&mut rng, 0.0, 100_000, |x: f64| (-x).exp())?;
//! assert!((integral - 1.0).abs() < 0.01);
//! # Ok::<(), mcvariates::Error>(())
//! ```
//!
//! # What is ...?
//!
//! - the number of *calls* or the *sample size*, $N$, is the number of times the integrand is
//! evaluated. Every call consumes exactly one uniform random number;
//! - the *integrand* is the function, $f(x)$, that is being integrated;
//! - the *corrected integrand* is the integrand multiplied with the Jacobian of the substitution
//! that maps the integration domain onto $[0,1)$;
//! - an *acceptance-rejection* sampler draws candidates from an auxiliary distribution until one
//! of them is accepted. The number of attempts is random and unbounded, but finite on average.
//!
//! [random variates]: https://en.wikipedia.org/wiki/Random_variate
//! [Monte Carlo integration]: https://en.wikipedia.org/wiki/Monte_Carlo_integration

pub mod core;
pub mod distributions;
pub mod error;
pub mod integrators;

pub use crate::core::*;
pub use crate::error::{Error, Result};
