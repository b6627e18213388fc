//! Monte Carlo integration of one-dimensional integrands over finite and infinite domains.
//!
//! An integral over one of the four [`Domain`] shapes is mapped onto the unit interval by a
//! change of variables $x = g(u)$,
//!
//! $$ \int_D f(x) \, \mathrm{d}x = \int_0^1 f(g(u)) \, g'(u) \, \mathrm{d}u
//! \approx \frac{1}{N} \sum_{j=1}^N f(g(u_j)) \, g'(u_j) , $$
//!
//! where the $u_j$ are uniformly distributed in $[0,1)$. The statistical uncertainty of the
//! estimate decreases as $1/\sqrt{N}$, but its size is governed by the variance of the corrected
//! integrand $f(g(u)) \, g'(u)$. Integrands that decay slowly at infinity lead to corrected
//! integrands with a singularity at $u = 0$ and need many more calls.
//!
//! The functions [`integral_a_b`], [`integral_a_inf`], [`integral_inf_b`] and
//! [`integral_inf_inf`] return only the estimate; the [`plain`] module returns the full set of
//! estimators, including the standard error, and can distribute the calls over several threads.

pub mod plain;

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::estimators::BasicEstimators;
use crate::core::{Integrand, UniformSource};
use crate::error::{require, Error, Result};

/// The integration domain together with the substitution that maps it onto $[0,1)$.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum Domain {
    /// $\int_a^b$ with the substitution $x = a + u (b - a)$.
    Finite {
        /// Lower limit.
        a: f64,
        /// Upper limit.
        b: f64,
    },
    /// $\int_a^\infty$ with the substitution $x = a - \ln u$.
    UpperInfinite {
        /// Lower limit.
        a: f64,
    },
    /// $\int_{-\infty}^b$ with the substitution $x = b + \ln u$.
    LowerInfinite {
        /// Upper limit.
        b: f64,
    },
    /// $\int_{-\infty}^\infty$ with the substitution $x = \tan(\pi u - \pi/2)$.
    Infinite,
}

impl Domain {
    /// Checks that all finite limits of the domain are finite numbers.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Finite { a, b } => {
                require!(
                    a.is_finite() && b.is_finite(),
                    "integration limits must be finite, got a = {}, b = {}",
                    a,
                    b
                );
            }
            Self::UpperInfinite { a } => {
                require!(a.is_finite(), "lower limit must be finite, got {}", a);
            }
            Self::LowerInfinite { b } => {
                require!(b.is_finite(), "upper limit must be finite, got {}", b);
            }
            Self::Infinite => {}
        }

        Ok(())
    }

    /// Maps the uniform random number `u` onto the domain. Returns the point $x = g(u)$ and the
    /// Jacobian $g'(u)$ the integrand has to be multiplied with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericDomain`] if `u` is exactly zero on a semi-infinite domain, where
    /// the substitution needs $\ln u$.
    pub fn transform(&self, u: f64) -> Result<(f64, f64)> {
        match *self {
            Self::Finite { a, b } => Ok((a + u * (b - a), b - a)),
            Self::UpperInfinite { a } => Ok((a - ln_draw(u)?, 1.0 / u)),
            Self::LowerInfinite { b } => Ok((b + ln_draw(u)?, 1.0 / u)),
            Self::Infinite => {
                let t = PI * u - FRAC_PI_2;
                let cos = t.cos();
                Ok((t.tan(), PI / (cos * cos)))
            }
        }
    }

    /// Evaluates the change-of-variables-corrected `integrand` for the uniform random number `u`.
    pub fn corrected<I: Integrand + ?Sized>(&self, integrand: &I, u: f64) -> Result<f64> {
        let (x, jacobian) = self.transform(u)?;
        Ok(integrand.call(x) * jacobian)
    }
}

fn ln_draw(u: f64) -> Result<f64> {
    if u == 0.0 {
        return Err(Error::NumericDomain(
            "the semi-infinite substitution needs the logarithm of the uniform random number 0"
                .to_string(),
        ));
    }

    Ok(u.ln())
}

/// Approximates $\int_a^b f(x) \, \mathrm{d}x$ using `calls` evaluations of `f`.
pub fn integral_a_b<S, F>(rng: &mut S, a: f64, b: f64, calls: usize, f: F) -> Result<f64>
where
    S: UniformSource + ?Sized,
    F: Integrand,
{
    plain::integrate(&Domain::Finite { a, b }, &f, rng, calls).map(|e| e.mean())
}

/// Approximates $\int_a^\infty f(x) \, \mathrm{d}x$ using `calls` evaluations of `f`.
pub fn integral_a_inf<S, F>(rng: &mut S, a: f64, calls: usize, f: F) -> Result<f64>
where
    S: UniformSource + ?Sized,
    F: Integrand,
{
    plain::integrate(&Domain::UpperInfinite { a }, &f, rng, calls).map(|e| e.mean())
}

/// Approximates $\int_{-\infty}^b f(x) \, \mathrm{d}x$ using `calls` evaluations of `f`.
pub fn integral_inf_b<S, F>(rng: &mut S, b: f64, calls: usize, f: F) -> Result<f64>
where
    S: UniformSource + ?Sized,
    F: Integrand,
{
    plain::integrate(&Domain::LowerInfinite { b }, &f, rng, calls).map(|e| e.mean())
}

/// Approximates $\int_{-\infty}^\infty f(x) \, \mathrm{d}x$ using `calls` evaluations of `f`.
pub fn integral_inf_inf<S, F>(rng: &mut S, calls: usize, f: F) -> Result<f64>
where
    S: UniformSource + ?Sized,
    F: Integrand,
{
    plain::integrate(&Domain::Infinite, &f, rng, calls).map(|e| e.mean())
}
