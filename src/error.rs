//! Error types shared by the samplers and the integrators.

use thiserror::Error;

/// Everything that can go wrong when drawing a variate or estimating an integral.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A distribution or integration parameter lies outside of its valid domain. This is always
    /// detected before the first random number is drawn.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An intermediate value would be undefined, for instance the logarithm of a uniform random
    /// number that happened to be exactly zero.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// A worker thread of a parallel integration panicked.
    #[error("a worker thread panicked during the integration")]
    WorkerPanic,
}

/// Shorthand for results returned by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidParameter(...))` from the enclosing function if `$cond` is false.
macro_rules! require {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::InvalidParameter(format!($($msg)*)));
        }
    };
}

pub(crate) use require;
