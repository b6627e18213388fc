//! Integrates a few functions over finite and infinite domains and prints the estimates together
//! with their standard errors. Set `RUST_LOG=mcvariates=debug` to see the integrator's log.

use mcvariates::core::defaults;
use mcvariates::estimators::{BasicEstimators, Estimators};
use mcvariates::integrators::{plain, Domain};
use mcvariates::Result;

use rand_pcg::Pcg64;
use std::f64::consts::{E, FRAC_PI_2, PI};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

type Case = (&'static str, Domain, f64, Box<dyn Fn(f64) -> f64 + Sync>);

fn case<F>(name: &'static str, domain: Domain, exact: f64, integrand: F) -> Case
where
    F: Fn(f64) -> f64 + Sync + 'static,
{
    (name, domain, exact, Box::new(integrand))
}

fn main() -> Result<()> {
    init_tracing("info");

    // Initialize the random number generator.
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let cases = vec![
        case(
            "int_0^1 dx (2x^2 + 3)",
            Domain::Finite { a: 0.0, b: 1.0 },
            11.0 / 3.0,
            |x: f64| 2.0 * x * x + 3.0,
        ),
        case(
            "int_0^inf dx x exp(3 - x)",
            Domain::UpperInfinite { a: 0.0 },
            E.powi(3),
            |x: f64| x * (3.0 - x).exp(),
        ),
        case(
            "int_2^inf dx 1 / (x - 1)^2",
            Domain::UpperInfinite { a: 2.0 },
            1.0,
            |x: f64| 1.0 / ((x - 1.0) * (x - 1.0)),
        ),
        case(
            "int_-inf^0 dx 1 / (x^2 + 1)",
            Domain::LowerInfinite { b: 0.0 },
            FRAC_PI_2,
            |x: f64| 1.0 / (x * x + 1.0),
        ),
        case(
            "int_-inf^inf dx exp(-x^2 / 2) / sqrt(2 pi)",
            Domain::Infinite,
            1.0,
            |x: f64| (-0.5 * x * x).exp() / (2.0 * PI).sqrt(),
        ),
    ];

    for (name, domain, exact, integrand) in &cases {
        let estimators = plain::integrate_parallel(
            domain,
            integrand.as_ref(),
            &mut rng,
            4,
            100 * defaults::CALLS,
        )?;

        println!(
            "{:<45} = {:>10.6} +- {:.6} (exact: {:.6}, non-finite calls: {})",
            name,
            estimators.mean(),
            estimators.std(),
            exact,
            estimators.non_finite_calls()
        );
    }

    Ok(())
}
