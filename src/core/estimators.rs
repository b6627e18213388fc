//! This module contains everything related to estimators.
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Basic estimators, like the mean, variance, and the standard deviation.
pub trait BasicEstimators<T: Float> {
    /// Returns the mean value.
    fn mean(&self) -> T;

    /// Returns the variance, $V$.
    fn var(&self) -> T;

    /// Returns the standard deviation, $\sigma = \sqrt{V}$.
    fn std(&self) -> T {
        self.var().sqrt()
    }
}

/// More estimators.
pub trait Estimators<T: Float>: BasicEstimators<T> {
    /// Returns the number of times $N$, the integrand has been called.
    fn calls(&self) -> usize;

    /// Returns the number of times, $N_\mathrm{nf}$, the integrand has been called
    /// and its return value was non-finite.
    fn non_finite_calls(&self) -> usize;

    /// Returns the number of times, $N_\mathrm{nz}$, the integrand has been called
    /// and its return value was non-zero.
    fn non_zero_calls(&self) -> usize;
}

/// Everything that needs to be updated.
pub trait Updateable<T> {
    /// Update this estimator with `value`.
    fn update(&mut self, value: T);
}

/// A struct implementing the `BasicEstimator<T>` trait.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MeanVar<T> {
    mean: T,
    var: T,
}

impl<T> MeanVar<T> {
    /// Constructor.
    pub const fn new(mean: T, var: T) -> Self {
        Self { mean, var }
    }
}

impl<T: Float> MeanVar<T> {
    /// Computes the sample mean and the unbiased sample variance,
    /// $s^2 = \frac{1}{n-1} \sum_i (x_i - \bar{x})^2$, of `samples`.
    ///
    /// Uses Welford's update, so that large offsets do not cancel catastrophically. The mean of an
    /// empty sequence and the variance of sequences with less than two elements are `NaN`.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let (n, mean, m2) = samples.into_iter().fold(
            (T::zero(), T::zero(), T::zero()),
            |(n, mean, m2), x| {
                let n = n + T::one();
                let delta = x - mean;
                let mean = mean + delta / n;
                (n, mean, m2 + delta * (x - mean))
            },
        );

        if n == T::zero() {
            return Self::new(T::nan(), T::nan());
        }

        Self::new(mean, m2 / (n - T::one()))
    }
}

impl<T: Float> BasicEstimators<T> for MeanVar<T> {
    fn mean(&self) -> T {
        self.mean
    }

    fn var(&self) -> T {
        self.var
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_mean_var_new() {
        let mv = MeanVar::<f64>::new(6.4, 1.7);

        assert_approx_eq!(mv.mean(), 6.4);
        assert_approx_eq!(mv.var(), 1.7);
        assert_approx_eq!(mv.std(), 1.7_f64.sqrt());
    }

    #[test]
    fn test_from_samples() {
        let mv = MeanVar::from_samples(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_approx_eq!(mv.mean(), 5.0);
        // the sum of squared deviations is 32
        assert_approx_eq!(mv.var(), 32.0 / 7.0);
    }

    #[test]
    fn test_from_samples_with_offset() {
        let mv = MeanVar::from_samples((0..4).map(|i| 1e9 + f64::from(i)));

        assert_approx_eq!(mv.mean(), 1e9 + 1.5);
        assert_approx_eq!(mv.var(), 5.0 / 3.0, 1e-6);
    }

    #[test]
    fn test_from_samples_degenerate() {
        assert!(MeanVar::<f64>::from_samples(vec![]).mean().is_nan());

        let single = MeanVar::from_samples(vec![3.0]);
        assert_approx_eq!(single.mean(), 3.0);
        assert!(single.var().is_nan());
    }
}
