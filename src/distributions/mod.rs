//! Random variates of continuous and discrete probability distributions.
//!
//! All samplers are free functions that receive the [`UniformSource`] they draw from as their
//! first argument. Parameters are validated before the first random number is drawn; a parameter
//! outside of its domain results in [`Error::InvalidParameter`].
//!
//! Samplers based on acceptance-rejection ([`continuous::normal_polar`], the branches of
//! [`continuous::gamma`] with $k \neq 1$ and [`continuous::beta`]) retry until a candidate is
//! accepted. The expected number of attempts is finite for all valid parameters, but it grows for
//! extreme parameters, for instance for very small shape parameters. There is no iteration limit,
//! since any limit would change the sampled distribution.

pub mod continuous;
pub mod discrete;

use crate::core::UniformSource;
use crate::error::{Error, Result};

/// Draws a uniform random number and returns its natural logarithm, or an error if the random
/// number was exactly zero.
pub(crate) fn ln_uniform<S: UniformSource + ?Sized>(rng: &mut S, sampler: &str) -> Result<f64> {
    let u = rng.next_uniform();

    if u == 0.0 {
        return Err(Error::NumericDomain(format!(
            "{}: the logarithm of the uniform random number 0 is undefined",
            sampler
        )));
    }

    Ok(u.ln())
}

pub(crate) fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

pub(crate) fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}
