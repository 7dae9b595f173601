//! Error types for the SLRU cache.
//!
//! Construction is the only fallible step: once a cache exists every
//! operation is total and a miss is reported as `None` or `false`.

use thiserror::Error;

/// Error returned when a cache configuration is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The cache was asked to hold zero entries.
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,

    /// The probation ratio is not a finite value strictly between 0 and 1.
    #[error("probation ratio must be strictly between 0 and 1, got {0}")]
    InvalidProbationRatio(f64),
}
