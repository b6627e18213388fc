//! The core module
pub mod defaults;
pub mod estimators;

use rand::Rng;

/// Source of independent random numbers uniformly distributed in $[0,1)$.
///
/// Every sampler and integrator of this crate receives its source explicitly, which makes all
/// results reproducible for a given seed. Since sources are passed as `&mut`, a source is never
/// shared between two threads at the same time; parallel integrations clone the source and let
/// every thread skip to its own block of random numbers instead.
pub trait UniformSource {
    /// Returns the next random number in $[0,1)$.
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen()
    }
}

/// Trait which every integrand must implement.
///
/// It is implemented for every closure and function of type `Fn(f64) -> f64`, so usually there is
/// no need to implement it by hand.
pub trait Integrand {
    /// Evaluates the integrand at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F: Fn(f64) -> f64 + ?Sized> Integrand for F {
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Compute the number of calls on a given core, given the total number of cores
/// `n_cores`, the index `core` (zero-based) of the current thread as well as the
/// total number of calls `total_calls` to perform combined on all cores.
pub(crate) fn compute_calls_for_core(core: usize, n_cores: usize, total_calls: usize) -> usize {
    debug_assert!(core < n_cores);
    let calls_per_core = calls_per_core(n_cores, total_calls);

    // the last cores might not need all of `calls_per_core` to reach `total_calls`
    total_calls
        .saturating_sub(core * calls_per_core)
        .min(calls_per_core)
}

/// Number of calls every core but the last performs.
pub(crate) fn calls_per_core(n_cores: usize, total_calls: usize) -> usize {
    (total_calls + n_cores - 1) / n_cores
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_pcg::Pcg64;

    #[test]
    fn test_calls_per_core_simple() {
        let n_cores = 3;
        let total_calls = 17;
        let calls_per_core = (0..n_cores)
            .map(|core| compute_calls_for_core(core, n_cores, total_calls))
            .collect::<Vec<_>>();

        assert_eq!(calls_per_core[0], 6);
        assert_eq!(calls_per_core[1], 6);
        assert_eq!(calls_per_core[2], 5);
        assert_eq!(total_calls, calls_per_core.into_iter().sum::<usize>());
    }

    #[test]
    fn test_calls_per_core() {
        let n_cores = 13;
        let total_calls = 16_490_248_407;
        let total_calls_check: usize = (0..n_cores)
            .map(|core| compute_calls_for_core(core, n_cores, total_calls))
            .sum();
        assert_eq!(total_calls, total_calls_check);
    }

    #[test]
    fn test_more_cores_than_calls() {
        let calls = (0..8)
            .map(|core| compute_calls_for_core(core, 8, 3))
            .collect::<Vec<_>>();

        assert_eq!(calls, vec![1, 1, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn uniform_source_stays_in_unit_interval() {
        let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

        for _ in 0..10_000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn uniform_source_matches_rng_gen() {
        let mut lhs = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
        let mut rhs = lhs.clone();

        for _ in 0..100 {
            let expected: f64 = rhs.gen();
            assert_eq!(lhs.next_uniform(), expected);
        }
    }

    #[test]
    fn closures_are_integrands() {
        let offset = 3.0;
        let f = |x: f64| 2.0 * x * x + offset;

        assert_eq!(f.call(1.0), 5.0);
    }
}
