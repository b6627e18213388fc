//! Samplers for discrete distributions.

use super::{is_positive, is_probability, ln_uniform};
use crate::core::UniformSource;
use crate::error::{require, Error, Result};

const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn require_success_probability(sampler: &str, p: f64) -> Result<()> {
    require!(
        p > 0.0 && p <= 1.0,
        "{}: success probability must be in (0, 1], got {}",
        sampler,
        p
    );

    Ok(())
}

/// Draws the number of failures before the first success in a sequence of Bernoulli trials with
/// success probability `p`, using $\lfloor \ln U / \ln(1 - p) \rfloor$.
///
/// For `p == 1` the result is always zero.
///
/// # Errors
///
/// Besides an invalid `p`, returns [`Error::NumericDomain`] if $U$ is exactly zero or if the
/// number of failures does not fit into a `u64`, which only happens for tiny `p`.
pub fn geometric<S: UniformSource + ?Sized>(rng: &mut S, p: f64) -> Result<u64> {
    require_success_probability("geometric", p)?;

    let ln_u = ln_uniform(rng, "geometric")?;
    let failures = (ln_u / (-p).ln_1p()).floor();

    // 2^64 is the first float that does not fit
    if failures >= U64_LIMIT {
        return Err(Error::NumericDomain(format!(
            "geometric: {} failures for p = {} exceed the range of u64",
            failures, p
        )));
    }

    Ok(failures as u64)
}

/// Draws the number of failures before the `r`-th success in a sequence of Bernoulli trials with
/// success probability `p`, as the sum of `r` [`geometric`] numbers.
///
/// # Errors
///
/// Besides invalid parameters, returns [`Error::NumericDomain`] if a geometric number fails or
/// the sum does not fit into a `u64`.
pub fn negative_binomial<S: UniformSource + ?Sized>(rng: &mut S, r: u64, p: f64) -> Result<u64> {
    require!(r > 0, "negative_binomial: number of successes must be at least one");
    require_success_probability("negative_binomial", p)?;

    let mut failures: u64 = 0;

    for _ in 0..r {
        failures = failures.checked_add(geometric(rng, p)?).ok_or_else(|| {
            Error::NumericDomain(format!(
                "negative_binomial: failures for r = {}, p = {} exceed the range of u64",
                r, p
            ))
        })?;
    }

    Ok(failures)
}

/// Draws the number of successes in `n` Bernoulli trials with success probability `p`. Every trial
/// compares a fresh uniform random number with `p`.
pub fn binomial<S: UniformSource + ?Sized>(rng: &mut S, n: u64, p: f64) -> Result<u64> {
    require!(
        is_probability(p),
        "binomial: success probability must be in [0, 1], got {}",
        p
    );

    Ok((0..n).filter(|_| rng.next_uniform() < p).count() as u64)
}

/// Draws from the Poisson distribution with mean `lambda`.
///
/// Uniform random numbers are multiplied until their product falls below $e^{-\lambda}$; the
/// number of multiplications is the result. The product is accumulated as a sum of logarithms,
/// which selects exactly the same variates but does not underflow for large `lambda`. The
/// expected number of uniform random numbers needed is $\lambda + 1$.
pub fn poisson<S: UniformSource + ?Sized>(rng: &mut S, lambda: f64) -> Result<u64> {
    require!(
        is_positive(lambda),
        "poisson: lambda must be positive and finite, got {}",
        lambda
    );

    let mut count = 0;
    // a zero draw gives -inf and stops immediately, as the product would
    let mut ln_product = rng.next_uniform().ln();

    while -lambda < ln_product {
        count += 1;
        ln_product += rng.next_uniform().ln();
    }

    Ok(count)
}

/// Draws the number of elements of a category in a sample of `draws` elements taken without
/// replacement from a `population` that contains `successes` elements of that category.
///
/// The draws are simulated one after the other: the `i`-th draw (zero-based) is a success when a
/// fresh uniform random number is smaller than $(K - k) / (N - i)$, where $k$ is the number of
/// successes so far.
pub fn hypergeometric<S: UniformSource + ?Sized>(
    rng: &mut S,
    population: u64,
    successes: u64,
    draws: u64,
) -> Result<u64> {
    require!(
        successes <= population,
        "hypergeometric: {} successes exceed the population of {}",
        successes,
        population
    );
    require!(
        draws <= population,
        "hypergeometric: {} draws exceed the population of {}",
        draws,
        population
    );

    let found = (0..draws).fold(0, |found, i| {
        let probability = (successes - found) as f64 / (population - i) as f64;

        if rng.next_uniform() < probability {
            found + 1
        } else {
            found
        }
    });

    Ok(found)
}
