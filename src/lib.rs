#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! Quick API reference for the two map types.
//!
//! ## Which type should I use?
//!
//! | Type | Access | Use when |
//! |------|--------|----------|
//! | [`ForgettingMap`] | `&mut self` | One owner, or external synchronization |
//! | [`ConcurrentForgettingMap`] | `&self` | Shared across threads via `Arc` (feature `concurrent`) |
//!
//! ## Single-threaded
//!
//! ```rust
//! use forgetting_map::ForgettingMap;
//! use core::num::NonZeroUsize;
//!
//! let mut map = ForgettingMap::new(NonZeroUsize::new(2).unwrap());
//! map.insert("a", 1);
//! map.insert("b", 2);
//! map.find(&"a");       // one counted use against "a"
//! map.insert("c", 3);   // "b" forgotten (zero uses)
//! assert!(map.find(&"b").is_none());
//! ```
//!
//! ## Concurrent
//!
//! Enable the `concurrent` feature:
//!
//! ```toml
//! [dependencies]
//! forgetting-map = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ```rust,ignore
//! use forgetting_map::ConcurrentForgettingMap;
//! use core::num::NonZeroUsize;
//! use std::sync::Arc;
//!
//! let map = Arc::new(ConcurrentForgettingMap::new(NonZeroUsize::new(100).unwrap()));
//!
//! let worker = Arc::clone(&map);
//! std::thread::spawn(move || {
//!     worker.insert("key".to_string(), 42);
//!     let _ = worker.find(&"key".to_string());
//! });
//! ```
//!
//! ## Operation semantics
//!
//! | Operation | Counts as a use? | May evict? |
//! |-----------|------------------|------------|
//! | `insert` (new key) | no | yes, one least-used entry |
//! | `insert` (existing key) | no (count resets to 0) | never |
//! | `find` / `find_mut` | yes, on hit | no |
//! | `peek` / `contains_key` / `usage_count` | no | no |
//! | `remove` / `clear` | no | no |
//!
//! ## Modules
//!
//! - [`map`]: the forgetting map implementation
//! - [`entry`]: the stored entry type (value + usage bookkeeping)
//! - [`config`]: construction configuration
//! - [`metrics`]: usage counters and deterministic metric export
//! - [`concurrent`]: thread-safe wrapper (requires the `concurrent` feature)

#![no_std]

/// Stored entry type.
///
/// Provides `Entry<V>`, the value plus the usage count and creation sequence
/// that drive eviction.
pub mod entry;

/// Map configuration structures.
pub mod config;

/// Forgetting map implementation.
///
/// Provides a fixed-capacity map that evicts the least-used entry when an
/// insert of a new key finds the map full.
pub mod map;

/// Map metrics.
///
/// Provides usage counters (hits, misses, insertions, replacements,
/// evictions) with deterministic `BTreeMap` export.
pub mod metrics;

/// Concurrent map implementation.
///
/// Provides a thread-safe forgetting map behind a single mutex, so eviction
/// always sees the whole map and usage increments are never lost.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export the map type
pub use map::ForgettingMap;

// Re-export entry and supporting types
pub use config::ForgettingMapConfig;
pub use entry::Entry;
pub use metrics::ForgettingMapMetrics;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentForgettingMap;
