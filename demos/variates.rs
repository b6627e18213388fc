//! Draws samples of every distribution and compares their sample mean and variance with the exact
//! values. Set `RUST_LOG=mcvariates=trace` to follow the acceptance-rejection samplers.

use mcvariates::core::defaults;
use mcvariates::distributions::{continuous, discrete};
use mcvariates::estimators::{BasicEstimators, MeanVar};
use mcvariates::Result;

use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLES: usize = 100_000;

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn summarize<F>(name: &str, exact: (f64, f64), mut sampler: F) -> Result<()>
where
    F: FnMut() -> Result<f64>,
{
    let samples = (0..SAMPLES).map(|_| sampler()).collect::<Result<Vec<_>>>()?;
    let mv = MeanVar::from_samples(samples);

    println!(
        "{:<28} mean {:>9.4} (exact {:>9.4})   variance {:>9.4} (exact {:>9.4})",
        name,
        mv.mean(),
        exact.0,
        mv.var(),
        exact.1
    );

    Ok(())
}

fn main() -> Result<()> {
    init_tracing("warn");

    let mut rng = Pcg64::seed_from_u64(2718);

    summarize("uniform(5, 15)", (10.0, 100.0 / 12.0), || {
        continuous::uniform(&mut rng, 5.0, 15.0)
    })?;
    summarize("triangular(0, 2, 10)", (4.0, 84.0 / 18.0), || {
        continuous::triangular(&mut rng, 0.0, 2.0, 10.0)
    })?;
    summarize("exponential(5)", (0.2, 0.04), || {
        continuous::exponential(&mut rng, 5.0)
    })?;
    summarize("normal box-muller(5, 2)", (5.0, 2.0), || {
        continuous::normal_box_muller(&mut rng, 5.0, 2.0).map(|pair| pair.0)
    })?;
    summarize("normal polar(5, 2)", (5.0, 2.0), || {
        continuous::normal_polar(&mut rng, 5.0, 2.0).map(|pair| pair.0)
    })?;
    summarize("normal clt(5, 2)", (5.0, 2.0), || {
        continuous::normal_clt(&mut rng, 5.0, 2.0, defaults::CLT_TERMS)
    })?;
    summarize("chi squared(7)", (7.0, 14.0), || {
        continuous::chi_squared(&mut rng, 7)
    })?;
    summarize("student t(7)", (0.0, 1.4), || continuous::student_t(&mut rng, 7))?;
    summarize("log-normal(5, 2)", (5.0, 2.0), || {
        continuous::log_normal(&mut rng, 5.0, 2.0, defaults::CLT_TERMS)
    })?;
    summarize("erlang(5, 4.5)", (5.0 / 4.5, 5.0 / 20.25), || {
        continuous::erlang(&mut rng, 5, 4.5)
    })?;
    summarize("gamma(0.25, 4.5)", (0.25 / 4.5, 0.25 / 20.25), || {
        continuous::gamma(&mut rng, 0.25, 4.5)
    })?;
    summarize("gamma(5, 4.5)", (5.0 / 4.5, 5.0 / 20.25), || {
        continuous::gamma(&mut rng, 5.0, 4.5)
    })?;
    summarize("beta(3.25, 4.75)", (3.25 / 8.0, 3.25 * 4.75 / (9.0 * 64.0)), || {
        continuous::beta(&mut rng, 3.25, 4.75)
    })?;
    summarize("laplace(3.25, 4.75)", (3.25, 2.0 * 4.75 * 4.75), || {
        continuous::laplace(&mut rng, 3.25, 4.75)
    })?;

    summarize("geometric(0.25)", (3.0, 12.0), || {
        discrete::geometric(&mut rng, 0.25).map(|k| k as f64)
    })?;
    summarize("negative binomial(5, 0.25)", (15.0, 60.0), || {
        discrete::negative_binomial(&mut rng, 5, 0.25).map(|k| k as f64)
    })?;
    summarize("binomial(20, 0.25)", (5.0, 3.75), || {
        discrete::binomial(&mut rng, 20, 0.25).map(|k| k as f64)
    })?;
    summarize("poisson(5)", (5.0, 5.0), || {
        discrete::poisson(&mut rng, 5.0).map(|k| k as f64)
    })?;
    summarize("hypergeometric(100, 25, 10)", (2.5, 1.875 * 90.0 / 99.0), || {
        discrete::hypergeometric(&mut rng, 100, 25, 10).map(|k| k as f64)
    })?;

    Ok(())
}
