//! Samplers for continuous distributions.
//!
//! Distributions of the normal family are parametrized by their mean and their *variance*; the
//! standard deviation $\sigma$ appearing in the formulas below is the square root of the latter.

use std::f64::consts::{E, PI};

use tracing::trace;

use super::{is_positive, ln_uniform};
use crate::core::UniformSource;
use crate::error::{require, Error, Result};

/// Draws from the uniform distribution on $[\mathrm{min}, \mathrm{max})$ by inverse transform:
/// $\mathrm{min} + (\mathrm{max} - \mathrm{min}) U$.
pub fn uniform<S: UniformSource + ?Sized>(rng: &mut S, min: f64, max: f64) -> Result<f64> {
    require!(
        min.is_finite() && max.is_finite() && min < max,
        "uniform: requires finite min < max, got min = {}, max = {}",
        min,
        max
    );

    Ok(min + (max - min) * rng.next_uniform())
}

/// Draws from the triangular distribution with support $[\mathrm{min}, \mathrm{max}]$ and the
/// given `mode`, using the two branches of its inverse distribution function.
pub fn triangular<S: UniformSource + ?Sized>(
    rng: &mut S,
    min: f64,
    mode: f64,
    max: f64,
) -> Result<f64> {
    require!(
        min.is_finite() && max.is_finite() && min < max,
        "triangular: requires finite min < max, got min = {}, max = {}",
        min,
        max
    );
    require!(
        min <= mode && mode <= max,
        "triangular: mode = {} is outside of [{}, {}]",
        mode,
        min,
        max
    );

    let u = rng.next_uniform();

    // probability mass left of the mode
    let limit = (mode - min) / (max - min);

    if limit > u {
        Ok(min + (u * (mode - min) * (max - min)).sqrt())
    } else {
        Ok(max - ((1.0 - u) * (max - min) * (max - mode)).sqrt())
    }
}

/// Draws from the exponential distribution with rate `lambda` by inverse transform:
/// $-\ln(1 - U) / \lambda$.
pub fn exponential<S: UniformSource + ?Sized>(rng: &mut S, lambda: f64) -> Result<f64> {
    require!(
        is_positive(lambda),
        "exponential: rate lambda must be positive and finite, got {}",
        lambda
    );

    Ok(-(1.0 - rng.next_uniform()).ln() / lambda)
}

fn require_normal(sampler: &str, mean: f64, variance: f64) -> Result<()> {
    require!(
        mean.is_finite(),
        "{}: mean must be finite, got {}",
        sampler,
        mean
    );
    require!(
        is_positive(variance),
        "{}: variance must be positive and finite, got {}",
        sampler,
        variance
    );

    Ok(())
}

/// Draws a pair of normally distributed numbers with the Box-Muller transform.
///
/// With $R = \sqrt{-2 \ln U}$ the pair is $(\mu + \sigma R \cos 2 \pi V, \mu + \sigma R \sin 2 \pi
/// V)$. Both components are normally distributed and independent of each other.
///
/// # Errors
///
/// Besides invalid parameters, returns [`Error::NumericDomain`] if $U$ is exactly zero.
pub fn normal_box_muller<S: UniformSource + ?Sized>(
    rng: &mut S,
    mean: f64,
    variance: f64,
) -> Result<(f64, f64)> {
    require_normal("normal_box_muller", mean, variance)?;

    let ln_u = ln_uniform(rng, "normal_box_muller")?;
    let v = rng.next_uniform();

    let radius = (-2.0 * ln_u).sqrt();
    let (sin, cos) = (2.0 * PI * v).sin_cos();
    let sigma = variance.sqrt();

    Ok((mean + sigma * radius * cos, mean + sigma * radius * sin))
}

/// Draws a pair of independent normally distributed numbers with Marsaglia's polar method.
///
/// Points $(V_x, V_y)$ are drawn uniformly from the square $(-1, 1)^2$ until
/// $S = V_x^2 + V_y^2$ lies inside the unit circle; the result is then
/// $\mu + \sigma V_{x,y} \sqrt{-2 \ln S / S}$. On average $4/\pi$ points are needed.
pub fn normal_polar<S: UniformSource + ?Sized>(
    rng: &mut S,
    mean: f64,
    variance: f64,
) -> Result<(f64, f64)> {
    require_normal("normal_polar", mean, variance)?;

    let mut attempts = 0_u64;

    let (vx, vy, s) = loop {
        attempts += 1;

        let vx = 2.0 * rng.next_uniform() - 1.0;
        let vy = 2.0 * rng.next_uniform() - 1.0;
        let s = vx * vx + vy * vy;

        // the origin itself is rejected, it would lead to 0/0
        if s < 1.0 && s > 0.0 {
            break (vx, vy, s);
        }
    };

    trace!(attempts, "normal_polar accepted a point");

    let factor = variance.sqrt() * (-2.0 * s.ln() / s).sqrt();

    Ok((mean + vx * factor, mean + vy * factor))
}

fn standard_normal_clt<S: UniformSource + ?Sized>(rng: &mut S, terms: usize) -> f64 {
    let n = terms as f64;
    let sum: f64 = (0..terms).map(|_| rng.next_uniform()).sum();

    (sum - 0.5 * n) * (12.0 / n).sqrt()
}

/// Draws an approximately normally distributed number using the central limit theorem.
///
/// The sum of `terms` uniform random numbers is standardized, $(\sum_i U_i - n/2) \sqrt{12/n}$,
/// then scaled by $\sigma$ and shifted by $\mu$. The result is only an approximation whose quality
/// is controlled by `terms`: the values are bounded by $\mu \pm \sigma \sqrt{3n}$ and the tails are
/// too light for small `terms`. [`defaults::CLT_TERMS`](crate::core::defaults::CLT_TERMS) is a
/// common choice.
pub fn normal_clt<S: UniformSource + ?Sized>(
    rng: &mut S,
    mean: f64,
    variance: f64,
    terms: usize,
) -> Result<f64> {
    require_normal("normal_clt", mean, variance)?;
    require!(terms > 0, "normal_clt: terms must be at least one");

    Ok(mean + variance.sqrt() * standard_normal_clt(rng, terms))
}

/// Draws from the $\chi^2$ distribution with `df` degrees of freedom as the sum of `df` squared
/// standard normal numbers, each obtained from [`normal_box_muller`] (the second number of each
/// pair is discarded).
pub fn chi_squared<S: UniformSource + ?Sized>(rng: &mut S, df: u64) -> Result<f64> {
    require!(df > 0, "chi_squared: degrees of freedom must be at least one");

    let mut sum = 0.0;

    for _ in 0..df {
        let (z, _) = normal_box_muller(rng, 0.0, 1.0)?;
        sum += z * z;
    }

    Ok(sum)
}

/// Draws from Student's t-distribution with `df` degrees of freedom: $Z / \sqrt{X / \nu}$ with a
/// standard normal $Z$ and a $\chi^2$-distributed $X$ with $\nu$ degrees of freedom.
///
/// Note that the mean exists only for `df > 1` and the variance only for `df > 2`.
pub fn student_t<S: UniformSource + ?Sized>(rng: &mut S, df: u64) -> Result<f64> {
    require!(df > 0, "student_t: degrees of freedom must be at least one");

    let (z, _) = normal_box_muller(rng, 0.0, 1.0)?;
    let chi2 = chi_squared(rng, df)?;

    Ok(z * (df as f64 / chi2).sqrt())
}

/// Draws from the log-normal distribution with the given `mean` and `variance` (of the log-normal
/// variable itself, not of its logarithm).
///
/// The parameters of the underlying normal distribution are $\sigma_y^2 = \ln(1 + \sigma^2 /
/// \mu^2)$ and $\mu_y = \ln \mu - \sigma_y^2 / 2$; the normal number is drawn with
/// [`normal_clt`] using `terms` uniform numbers and then exponentiated, so the same approximation
/// caveats apply.
///
/// # Errors
///
/// Besides invalid parameters, returns [`Error::NumericDomain`] if `mean` is not positive, since
/// its logarithm is needed.
pub fn log_normal<S: UniformSource + ?Sized>(
    rng: &mut S,
    mean: f64,
    variance: f64,
    terms: usize,
) -> Result<f64> {
    require_normal("log_normal", mean, variance)?;
    require!(terms > 0, "log_normal: terms must be at least one");

    if mean <= 0.0 {
        return Err(Error::NumericDomain(format!(
            "log_normal: the logarithm of the mean {} is undefined",
            mean
        )));
    }

    let variance_y = (variance / (mean * mean)).ln_1p();
    let mean_y = mean.ln() - 0.5 * variance_y;

    Ok((mean_y + variance_y.sqrt() * standard_normal_clt(rng, terms)).exp())
}

/// Draws from the Erlang distribution, the sum of `k` exponentially distributed numbers with rate
/// `lambda`: $-\frac{1}{\lambda} \sum_{i=1}^k \ln(1 - U_i)$.
pub fn erlang<S: UniformSource + ?Sized>(rng: &mut S, k: u64, lambda: f64) -> Result<f64> {
    require!(k > 0, "erlang: shape k must be at least one");
    require!(
        is_positive(lambda),
        "erlang: rate lambda must be positive and finite, got {}",
        lambda
    );

    let sum: f64 = (0..k).map(|_| (1.0 - rng.next_uniform()).ln()).sum();

    Ok(-sum / lambda)
}

/// Draws from the gamma distribution with shape `k` and rate `lambda`, i.e. with mean
/// $k / \lambda$.
///
/// - For $k = 1$ this is the [`exponential`] distribution.
/// - For $k < 1$ the acceptance-rejection method of Ahrens and Dieter (GS) is used.
/// - For $k > 1$ Fishman's method is used: two standard exponential numbers $E_u$, $E_v$ are drawn
///   until $E_v > (k - 1)(E_u - \ln E_u - 1)$, then $k E_u / \lambda$ is returned.
pub fn gamma<S: UniformSource + ?Sized>(rng: &mut S, k: f64, lambda: f64) -> Result<f64> {
    require!(
        is_positive(k),
        "gamma: shape k must be positive and finite, got {}",
        k
    );
    require!(
        is_positive(lambda),
        "gamma: rate lambda must be positive and finite, got {}",
        lambda
    );

    if k == 1.0 {
        return exponential(rng, lambda);
    }

    let mut attempts = 0_u64;

    let y = if k < 1.0 {
        let threshold = E / (E + k);

        loop {
            attempts += 1;

            let u = rng.next_uniform();
            let v = rng.next_uniform();

            if u > threshold {
                let y = -((1.0 - u) * (E + k) / (E * k)).ln();

                if y.powf(k - 1.0) > v {
                    break y;
                }
            } else {
                let y = (u * (k + E) / E).powf(1.0 / k);

                if (-y).exp() > v {
                    break y;
                }
            }
        }
    } else {
        loop {
            attempts += 1;

            let eu = -(1.0 - rng.next_uniform()).ln();
            let ev = -(1.0 - rng.next_uniform()).ln();

            if ev > (k - 1.0) * (eu - eu.ln() - 1.0) {
                break k * eu;
            }
        }
    };

    trace!(attempts, k, "gamma accepted a candidate");

    Ok(y / lambda)
}

/// Draws from the beta distribution with shape parameters `alpha` and `beta` using Jöhnk's
/// method: $Y_u = U^{1/\alpha}$ and $Y_v = V^{1/\beta}$ are drawn until $Y_u + Y_v < 1$, then
/// $Y_u / (Y_u + Y_v)$ is returned. The acceptance rate drops quickly when both parameters are
/// large.
pub fn beta<S: UniformSource + ?Sized>(rng: &mut S, alpha: f64, beta: f64) -> Result<f64> {
    require!(
        is_positive(alpha),
        "beta: alpha must be positive and finite, got {}",
        alpha
    );
    require!(
        is_positive(beta),
        "beta: beta must be positive and finite, got {}",
        beta
    );

    let mut attempts = 0_u64;

    let (yu, sum) = loop {
        attempts += 1;

        let yu = rng.next_uniform().powf(1.0 / alpha);
        let yv = rng.next_uniform().powf(1.0 / beta);
        let sum = yu + yv;

        if sum < 1.0 && sum > 0.0 {
            break (yu, sum);
        }
    };

    trace!(attempts, "beta accepted a candidate");

    Ok(yu / sum)
}

/// Draws from the Laplace distribution with location `mu` and scale `theta` by inverse transform:
/// with $v = U - 1/2$ the result is $\mu - \mathrm{sgn}(v) \, \theta \ln(1 - 2|v|)$.
///
/// # Errors
///
/// Besides invalid parameters, returns [`Error::NumericDomain`] if $U$ is exactly zero.
pub fn laplace<S: UniformSource + ?Sized>(rng: &mut S, mu: f64, theta: f64) -> Result<f64> {
    require!(mu.is_finite(), "laplace: mu must be finite, got {}", mu);
    require!(
        is_positive(theta),
        "laplace: scale theta must be positive and finite, got {}",
        theta
    );

    let v = rng.next_uniform() - 0.5;
    let ln = (1.0 - 2.0 * v.abs()).ln();

    if !ln.is_finite() {
        return Err(Error::NumericDomain(
            "laplace: the logarithm of the uniform random number 0 is undefined".to_string(),
        ));
    }

    if v > 0.0 {
        Ok(mu - theta * ln)
    } else {
        Ok(mu + theta * ln)
    }
}
