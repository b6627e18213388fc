mod common;

use common::{assert_in_epsilon, rng, EPSILON};

use assert_approx_eq::assert_approx_eq;
use mcvariates::estimators::{BasicEstimators, Estimators};
use mcvariates::integrators::{self, plain, Domain};
use std::f64::consts::{E, FRAC_PI_2, PI};

// integrands decaying like 1/x^2 give corrected integrands with an infinite variance; their
// estimates converge slowly and from below
const HEAVY_TAIL_CALLS: usize = 10_000_000;

#[test]
fn polynomial_on_finite_interval() {
    let integral = integrators::integral_a_b(&mut rng(), 0.0, 1.0, 100_000, |x: f64| {
        2.0 * x * x + 3.0
    })
    .unwrap();

    assert_in_epsilon(integral, 11.0 / 3.0, EPSILON);
}

#[test]
fn reversed_limits_flip_the_sign() {
    let f = |x: f64| 2.0 * x * x + 3.0;
    let forward = integrators::integral_a_b(&mut rng(), 0.0, 1.0, 1000, f).unwrap();
    let backward = integrators::integral_a_b(&mut rng(), 1.0, 0.0, 1000, f).unwrap();

    // same random numbers, mirrored points
    assert_in_epsilon(-backward, forward, EPSILON);
}

#[test]
fn exponential_on_upper_half_line() {
    let integral = integrators::integral_a_inf(&mut rng(), 0.0, 100_000, |x: f64| {
        x * (3.0 - x).exp()
    })
    .unwrap();

    assert_in_epsilon(integral, E.powi(3), EPSILON);
}

#[test]
fn inverse_square_on_upper_half_line() {
    let f = |x: f64| 1.0 / ((x - 1.0) * (x - 1.0));
    let estimators = plain::integrate_parallel(
        &Domain::UpperInfinite { a: 2.0 },
        &f,
        &mut rng(),
        4,
        HEAVY_TAIL_CALLS,
    )
    .unwrap();

    assert_eq!(estimators.calls(), HEAVY_TAIL_CALLS);
    assert_in_epsilon(estimators.mean(), 1.0, EPSILON);
}

#[test]
fn lorentzian_on_lower_half_line() {
    let f = |x: f64| 1.0 / (x * x + 1.0);
    let estimators = plain::integrate_parallel(
        &Domain::LowerInfinite { b: 0.0 },
        &f,
        &mut rng(),
        4,
        HEAVY_TAIL_CALLS,
    )
    .unwrap();

    assert_in_epsilon(estimators.mean(), FRAC_PI_2, EPSILON);
}

#[test]
fn lower_half_line_with_the_short_form() {
    // int_-inf^1 dx exp(x) = e
    let integral = integrators::integral_inf_b(&mut rng(), 1.0, 100_000, f64::exp).unwrap();

    assert_in_epsilon(integral, E, EPSILON);
}

#[test]
fn odd_function_on_real_line() {
    let integral =
        integrators::integral_inf_inf(&mut rng(), 1_000_000, |x: f64| x * (-x * x).exp()).unwrap();

    assert_approx_eq!(integral, 0.0, 0.01);
}

#[test]
fn normal_density_on_real_line() {
    let (mean, variance) = (1.5, 2.0);
    let density = move |x: f64| {
        (-(x - mean) * (x - mean) / (2.0 * variance)).exp() / (2.0 * PI * variance).sqrt()
    };

    let integral = integrators::integral_inf_inf(&mut rng(), 100_000, density).unwrap();

    assert_in_epsilon(integral, 1.0, EPSILON);
}

#[test]
fn standard_error_covers_the_estimate() {
    let estimators = plain::integrate(
        &Domain::UpperInfinite { a: 0.0 },
        &|x: f64| x * x * (-x).exp(),
        &mut rng(),
        100_000,
    )
    .unwrap();

    // int_0^inf dx x^2 exp(-x) = 2
    assert_approx_eq!(estimators.mean(), 2.0, 5.0 * estimators.std());
    assert!(estimators.std() < 0.05);
}

#[test]
fn non_finite_values_reach_the_estimate() {
    let f = |x: f64| if x < 0.5 { f64::NAN } else { 2.0 };
    let estimators = plain::integrate(&Domain::Finite { a: 0.0, b: 1.0 }, &f, &mut rng(), 10_000).unwrap();

    assert_eq!(estimators.calls(), 10_000);
    assert_eq!(estimators.non_zero_calls(), 10_000);
    assert!(estimators.non_finite_calls() > 0);
    assert!(estimators.non_finite_calls() < 10_000);
    assert!(estimators.mean().is_nan());

    let integral = integrators::integral_a_b(&mut rng(), 0.0, 1.0, 1000, |_: f64| f64::NAN).unwrap();
    assert!(integral.is_nan());

    let integral = integrators::integral_a_b(&mut rng(), 0.0, 1.0, 1000, |x: f64| 1.0 / (x - x)).unwrap();
    assert_eq!(integral, f64::INFINITY);
}

#[test]
fn non_finite_values_reach_the_parallel_estimate() {
    let f = |x: f64| if x > 0.9 { f64::INFINITY } else { x };
    let estimators =
        plain::integrate_parallel(&Domain::Finite { a: 0.0, b: 1.0 }, &f, &mut rng(), 3, 10_000)
            .unwrap();

    assert!(estimators.non_finite_calls() > 0);
    assert_eq!(estimators.mean(), f64::INFINITY);
}

#[test]
fn integrand_that_vanishes_mostly() {
    let f = |x: f64| if x > 9.0 { 1.0 } else { 0.0 };
    let estimators = plain::integrate(&Domain::Finite { a: 0.0, b: 10.0 }, &f, &mut rng(), 10_000).unwrap();

    assert!(estimators.non_zero_calls() > 0);
    assert!(estimators.non_zero_calls() < 2000);
    assert_in_epsilon(estimators.mean(), 1.0, EPSILON);
}

#[test]
fn parallel_result_is_independent_of_the_cores() {
    let f = |x: f64| (-x).exp();
    let domain = Domain::UpperInfinite { a: 1.0 };

    let two = plain::integrate_parallel(&domain, &f, &mut rng(), 2, 50_000).unwrap();
    let five = plain::integrate_parallel(&domain, &f, &mut rng(), 5, 50_000).unwrap();

    assert_eq!(two.calls(), five.calls());
    assert_approx_eq!(two.mean(), five.mean(), 1e-12);
    assert_in_epsilon(two.mean(), (-1.0_f64).exp(), EPSILON);
}

#[test]
fn invalid_limits_are_rejected() {
    assert!(integrators::integral_a_b(&mut rng(), 0.0, f64::NAN, 100, f64::sin).is_err());
    assert!(integrators::integral_a_inf(&mut rng(), f64::INFINITY, 100, f64::sin).is_err());
    assert!(integrators::integral_inf_b(&mut rng(), f64::NEG_INFINITY, 100, f64::sin).is_err());
    assert!(integrators::integral_inf_inf(&mut rng(), 0, f64::sin).is_err());
}
