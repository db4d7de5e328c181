//! Map Metrics
//!
//! Counters describing how a forgetting map has been used: lookups, hits,
//! insertions, replacements, and evictions. Counters are plain fields updated
//! inside the map's own operations; reading them never perturbs the map.
//!
//! # Why BTreeMap for export?
//!
//! [`to_btreemap`](ForgettingMapMetrics::to_btreemap) reports metrics as a
//! `BTreeMap<String, f64>` so keys always appear in the same order. With a
//! dozen keys the O(log n) cost is irrelevant, and the deterministic ordering
//! keeps logs and test output reproducible.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Usage counters for a forgetting map.
///
/// A *request* is any `find`; a *hit* is a `find` that located its key.
/// Uncounted reads (`peek`, `contains_key`, `usage_count`) do not appear here
/// at all, matching their contract of leaving the map untouched.
#[derive(Debug, Default, Clone)]
pub struct ForgettingMapMetrics {
    /// Total number of lookups (hits + misses).
    pub requests: u64,

    /// Lookups that found their key.
    pub hits: u64,

    /// Entries created for a previously absent key.
    pub insertions: u64,

    /// Inserts that overwrote an existing key.
    pub replacements: u64,

    /// Entries removed to make room for a new key.
    pub evictions: u64,

    /// Total usage-count increments across all entries, including entries
    /// that have since been evicted or replaced.
    pub usage_increments: u64,
}

impl ForgettingMapMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
        self.usage_increments += 1;
    }

    /// Records a lookup that missed.
    #[inline]
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records the creation of an entry for a new key.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an insert that overwrote an existing key.
    #[inline]
    pub fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    /// Records the eviction of a least-used entry.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Lookups that missed.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.requests - self.hits
    }

    /// Fraction of lookups that hit, in `0.0..=1.0`. 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, in `0.0..=1.0`. 0.0 before any lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Evictions per new-key insertion. 0.0 before any insertion.
    pub fn eviction_rate(&self) -> f64 {
        if self.insertions > 0 {
            self.evictions as f64 / self.insertions as f64
        } else {
            0.0
        }
    }

    /// Exports all metrics with deterministic key ordering.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("misses".to_string(), self.misses() as f64);
        metrics.insert("replacements".to_string(), self.replacements as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert(
            "usage_increments".to_string(),
            self.usage_increments as f64,
        );

        metrics.insert("eviction_rate".to_string(), self.eviction_rate());
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}
