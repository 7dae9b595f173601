//! Cache Configuration
//!
//! [`SlruCacheConfig`] carries the total entry capacity and the share of it
//! given to the probation segment. Like the other config structs in this crate
//! family its fields are public; validation happens when a cache is built from
//! it, so an invalid configuration never produces a cache.
//!
//! # Segment sizing
//!
//! ```text
//! probation_capacity = max(1, floor(probation_ratio × capacity))
//! protected_capacity = capacity − probation_capacity
//! ```
//!
//! | capacity | probation | protected |
//! |----------|-----------|-----------|
//! | 1        | 1         | 0         |
//! | 4        | 1         | 3         |
//! | 10       | 2         | 8         |
//! | 100      | 20        | 80        |
//!
//! The floor of one probation slot keeps small caches able to admit entries.
//! With a single slot in total there is no protected segment at all, and a
//! hit refreshes the entry where it is.
//!
//! # Examples
//!
//! ```
//! use slru_cache::config::SlruCacheConfig;
//!
//! let config = SlruCacheConfig::new(10);
//! assert_eq!(config.probation_capacity(), 2);
//! assert_eq!(config.protected_capacity(), 8);
//!
//! let config = SlruCacheConfig::new(10).with_probation_ratio(0.5);
//! assert_eq!(config.probation_capacity(), 5);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;

/// Share of the capacity given to the probation segment by default.
pub const DEFAULT_PROBATION_RATIO: f64 = 0.2;

/// Configuration for an [`SlruCache`](crate::SlruCache).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlruCacheConfig {
    /// Total number of entries across both segments.
    pub capacity: usize,
    /// Fraction of `capacity` reserved for the probation segment.
    pub probation_ratio: f64,
}

impl SlruCacheConfig {
    /// Creates a configuration with the default probation ratio.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            probation_ratio: DEFAULT_PROBATION_RATIO,
        }
    }

    /// Replaces the probation ratio.
    #[must_use]
    pub fn with_probation_ratio(mut self, probation_ratio: f64) -> Self {
        self.probation_ratio = probation_ratio;
        self
    }

    /// Checks that the configuration describes a usable cache.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let ratio = self.probation_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
            return Err(ConfigError::InvalidProbationRatio(ratio));
        }
        Ok(())
    }

    /// Returns the number of entries the probation segment may hold.
    pub fn probation_capacity(&self) -> usize {
        #[allow(clippy::cast_possible_truncation)]
        let share = (self.probation_ratio * self.capacity as f64) as usize;
        share.max(1).min(self.capacity)
    }

    /// Returns the number of entries the protected segment may hold.
    pub fn protected_capacity(&self) -> usize {
        self.capacity - self.probation_capacity()
    }
}
