//! SLRU Cache Metrics
//!
//! Metrics specific to the segmented LRU: how full each segment is, how
//! often entries earn promotion, and which segment hits and evictions land in.

use super::{CacheMetrics, CoreCacheMetrics};
use crate::slru::Segment;
use std::collections::BTreeMap;

/// SLRU-specific metrics (extends CoreCacheMetrics)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlruCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Number of entries currently in the probation segment
    pub probation_size: u64,

    /// Number of entries currently in the protected segment
    pub protected_size: u64,

    /// Capacity of the probation segment
    pub probation_capacity: u64,

    /// Capacity of the protected segment
    pub protected_capacity: u64,

    /// Total number of promotions from probation to protected
    pub total_promotions: u64,

    /// Number of lookups served from the probation segment
    pub probation_hits: u64,

    /// Number of lookups served from the protected segment
    pub protected_hits: u64,

    /// Number of evictions from the probation segment
    pub probation_evictions: u64,

    /// Number of evictions from the protected segment
    pub protected_evictions: u64,
}

impl SlruCacheMetrics {
    /// Creates zeroed metrics for segments of the given capacities.
    pub fn new(probation_capacity: u64, protected_capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(),
            probation_size: 0,
            protected_size: 0,
            probation_capacity,
            protected_capacity,
            total_promotions: 0,
            probation_hits: 0,
            protected_hits: 0,
            probation_evictions: 0,
            protected_evictions: 0,
        }
    }

    /// Records a lookup hit found in `segment`.
    pub fn record_hit(&mut self, segment: Segment) {
        self.core.record_hit();
        match segment {
            Segment::Probation => self.probation_hits += 1,
            Segment::Protected => self.protected_hits += 1,
        }
    }

    /// Records a promotion from probation to protected.
    pub fn record_promotion(&mut self) {
        self.total_promotions += 1;
    }

    /// Records an eviction from `segment`.
    pub fn record_eviction(&mut self, segment: Segment) {
        self.core.record_eviction();
        match segment {
            Segment::Probation => self.probation_evictions += 1,
            Segment::Protected => self.protected_evictions += 1,
        }
    }

    /// Updates the segment sizes.
    pub fn update_segment_sizes(&mut self, probation_size: u64, protected_size: u64) {
        self.probation_size = probation_size;
        self.protected_size = protected_size;
    }

    /// Ratio of hits served by the protected segment, or 0.0 without hits.
    pub fn protection_ratio(&self) -> f64 {
        if self.core.cache_hits > 0 {
            self.protected_hits as f64 / self.core.cache_hits as f64
        } else {
            0.0
        }
    }

    /// Protected segment fill level, or 0.0 when it has no capacity.
    pub fn protected_utilization(&self) -> f64 {
        if self.protected_capacity > 0 {
            self.protected_size as f64 / self.protected_capacity as f64
        } else {
            0.0
        }
    }

    /// Converts SLRU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("probation_size".to_string(), self.probation_size as f64);
        metrics.insert("protected_size".to_string(), self.protected_size as f64);
        metrics.insert(
            "probation_capacity".to_string(),
            self.probation_capacity as f64,
        );
        metrics.insert(
            "protected_capacity".to_string(),
            self.protected_capacity as f64,
        );
        metrics.insert(
            "protected_utilization".to_string(),
            self.protected_utilization(),
        );

        metrics.insert("total_promotions".to_string(), self.total_promotions as f64);

        metrics.insert("probation_hits".to_string(), self.probation_hits as f64);
        metrics.insert("protected_hits".to_string(), self.protected_hits as f64);
        metrics.insert("protection_ratio".to_string(), self.protection_ratio());

        metrics.insert(
            "probation_evictions".to_string(),
            self.probation_evictions as f64,
        );
        metrics.insert(
            "protected_evictions".to_string(),
            self.protected_evictions as f64,
        );

        if self.core.requests > 0 {
            metrics.insert(
                "promotion_rate".to_string(),
                self.total_promotions as f64 / self.core.requests as f64,
            );
        }

        metrics
    }
}

impl CacheMetrics for SlruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "SLRU"
    }
}
