//! Plain integrator
use crate::core::estimators::*;
use crate::core::*;
use crate::error::{require, Error, Result};
use crate::integrators::Domain;

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use tracing::{debug, trace, warn};

use crossbeam as cb;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
/// Estimators for the plain integrator.
pub struct PlainEstimators<T> {
    sum: T,
    sumsq: T,
    calls: usize,
    non_finite_calls: usize,
    non_zero_calls: usize,
}

impl<T: Float> Default for PlainEstimators<T> {
    fn default() -> Self {
        Self {
            sum: T::zero(),
            sumsq: T::zero(),
            calls: 0,
            non_finite_calls: 0,
            non_zero_calls: 0,
        }
    }
}

impl<T: Float> Add for PlainEstimators<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sumsq: self.sumsq + other.sumsq,
            calls: self.calls + other.calls,
            non_finite_calls: self.non_finite_calls + other.non_finite_calls,
            non_zero_calls: self.non_zero_calls + other.non_zero_calls,
        }
    }
}

impl<T> BasicEstimators<T> for PlainEstimators<T>
where
    T: Float,
{
    fn mean(&self) -> T {
        self.sum / calls_as::<T>(self.calls)
    }

    /// The variance of the mean. It needs at least two calls, for a single call it is `NaN`.
    fn var(&self) -> T {
        let calls = calls_as::<T>(self.calls);
        (self.sumsq - self.sum * self.sum / calls) / calls / (calls - T::one())
    }
}

impl<T> Estimators<T> for PlainEstimators<T>
where
    T: Float,
{
    fn calls(&self) -> usize {
        self.calls
    }

    fn non_finite_calls(&self) -> usize {
        self.non_finite_calls
    }

    fn non_zero_calls(&self) -> usize {
        self.non_zero_calls
    }
}

impl<T> Updateable<T> for PlainEstimators<T>
where
    T: AddAssign + Float,
{
    fn update(&mut self, value: T) {
        self.calls += 1;

        if value != T::zero() {
            self.non_zero_calls += 1;

            // non-finite values are kept, so that they show up in the estimate
            if !value.is_finite() {
                self.non_finite_calls += 1;
            }

            self.sum += value;
            self.sumsq += value * value;
        }
    }
}

fn calls_as<T: Float>(calls: usize) -> T {
    num_traits::cast(calls).unwrap_or_else(T::nan)
}

/// Evaluate the corrected integrand for the next `calls` random numbers of `rng`.
fn accumulate<S, I>(
    domain: &Domain,
    integrand: &I,
    rng: &mut S,
    calls: usize,
) -> Result<PlainEstimators<f64>>
where
    S: UniformSource + ?Sized,
    I: Integrand + ?Sized,
{
    (0..calls).try_fold(PlainEstimators::default(), |mut acc, _| {
        acc.update(domain.corrected(integrand, rng.next_uniform())?);
        Ok(acc)
    })
}

fn report(domain: &Domain, estimators: &PlainEstimators<f64>) {
    if estimators.calls() > 1 {
        debug!(
            ?domain,
            calls = estimators.calls(),
            estimate = estimators.mean(),
            std = estimators.std(),
            "integration finished"
        );
    } else {
        debug!(
            ?domain,
            calls = estimators.calls(),
            estimate = estimators.mean(),
            "integration finished"
        );
    }

    if estimators.non_finite_calls() > 0 {
        warn!(
            non_finite_calls = estimators.non_finite_calls(),
            calls = estimators.calls(),
            "the integrand returned non-finite values, the estimate is not finite"
        );
    }
}

/// Integrate `integrand` over `domain` using `calls` evaluations, each of which consumes exactly one
/// random number from `rng`.
///
/// Corrected integrand values that are not finite enter the sums unchanged, so the estimate is
/// then `inf` or `NaN`; they are also counted in [`Estimators::non_finite_calls`].
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for an invalid domain or zero `calls`, and
/// [`Error::NumericDomain`] if a random number is exactly zero on a semi-infinite domain. In the
/// latter case `rng` has already advanced past the offending number.
pub fn integrate<S, I>(
    domain: &Domain,
    integrand: &I,
    rng: &mut S,
    calls: usize,
) -> Result<PlainEstimators<f64>>
where
    S: UniformSource + ?Sized,
    I: Integrand + ?Sized,
{
    domain.validate()?;
    require!(calls > 0, "the number of calls must be at least one");

    let estimators = accumulate(domain, integrand, rng, calls)?;
    report(domain, &estimators);

    Ok(estimators)
}

/// Integrate `integrand` over `domain` using `calls` evaluations distributed over `n_cores`
/// threads.
///
/// Every thread clones `rng` and skips the random numbers of the threads before it, so the
/// integrand is evaluated at exactly the same points as by [`integrate`] and the result does not
/// depend on `n_cores`, apart from rounding in the final summation. Afterwards `rng` is in the same
/// state as after a call to [`integrate`].
///
/// Skipping is done by drawing and discarding random numbers: the last thread discards almost all
/// `calls` numbers before it starts, and the calling thread draws `calls` numbers once more to
/// advance `rng`. Drawing a number is much cheaper than most integrands, but for cheap integrands
/// this sequential work limits the speedup to roughly a factor of two.
///
/// # Errors
///
/// Besides the errors of [`integrate`], returns [`Error::WorkerPanic`] if the integrand panicked
/// in one of the threads. If any thread fails, `rng` is left unchanged.
pub fn integrate_parallel<R, I>(
    domain: &Domain,
    integrand: &I,
    rng: &mut R,
    n_cores: usize,
    calls: usize,
) -> Result<PlainEstimators<f64>>
where
    R: UniformSource + Clone + Send,
    I: Integrand + Sync + ?Sized,
{
    domain.validate()?;
    require!(calls > 0, "the number of calls must be at least one");
    require!(n_cores > 0, "the number of cores must be at least one");

    let calls_per_core = calls_per_core(n_cores, calls);

    // distribute the workload evenly across the cores
    let contributions = cb::thread::scope(|s| {
        let handles = (0..n_cores)
            .map(|core| {
                let mut rng_local = rng.clone();

                s.spawn(move |_| {
                    // skip the random numbers used by the previous cores
                    for _ in 0..(calls_per_core * core).min(calls) {
                        rng_local.next_uniform();
                    }

                    let local_calls = compute_calls_for_core(core, n_cores, calls);
                    trace!(core, calls = local_calls, "worker started");

                    accumulate(domain, integrand, &mut rng_local, local_calls)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    })
    .map_err(|_| Error::WorkerPanic)?;

    let mut estimators = PlainEstimators::default();

    for contribution in contributions {
        estimators = estimators + contribution.map_err(|_| Error::WorkerPanic)??;
    }

    // leave the generator where a sequential integration would have left it
    for _ in 0..calls {
        rng.next_uniform();
    }

    report(domain, &estimators);

    Ok(estimators)
}
