//! Concurrent Forgetting Map
//!
//! A thread-safe wrapper around the forgetting map for shared access from
//! multiple threads. This is the multi-threaded counterpart to
//! [`ForgettingMap`](crate::ForgettingMap).
//!
//! # One lock, not a striped layout
//!
//! The whole map sits behind a single `parking_lot::Mutex`:
//!
//! - Eviction must pick the entry with the *globally* lowest usage count.
//!   Sharding the key space would make each shard evict its own local
//!   minimum, which is a different (and wrong) policy for this structure.
//! - `find` mutates the usage count, so every operation needs exclusive
//!   access anyway; an `RwLock` would provide no read parallelism.
//!
//! Both operations are short critical sections: one hash lookup, or one scan
//! plus one mutation when an insert evicts. Neither suspends or performs I/O
//! while holding the lock.
//!
//! # Thread Safety
//!
//! `ConcurrentForgettingMap` is `Send + Sync` and can be shared via `Arc`.
//! Because all mutation happens inside the lock, concurrent inserts can never
//! double-evict and concurrent finds never lose usage increments.
//!
//! # Zero-Copy Access
//!
//! [`find`](ConcurrentForgettingMap::find) clones the value out so the lock
//! is released before the caller touches it. For performance-critical paths,
//! [`find_with`](ConcurrentForgettingMap::find_with) applies a closure to the
//! value while the lock is held, avoiding the clone:
//!
//! ```rust,ignore
//! let len = map.find_with(&key, |value| value.len());
//! ```

use crate::config::ForgettingMapConfig;
use crate::map::MapCore;
use crate::metrics::ForgettingMapMetrics;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe forgetting map guarded by a single mutex.
pub struct ConcurrentForgettingMap<K, V, S = DefaultHashBuilder> {
    core: Mutex<MapCore<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentForgettingMap<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent forgetting map with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use forgetting_map::ConcurrentForgettingMap;
    /// use core::num::NonZeroUsize;
    ///
    /// let map: ConcurrentForgettingMap<String, i32> =
    ///     ConcurrentForgettingMap::new(NonZeroUsize::new(100).unwrap());
    /// ```
    pub fn new(cap: NonZeroUsize) -> Self {
        Self::with_hasher(cap, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentForgettingMap<K, V, S> {
    /// Creates a new concurrent forgetting map with the specified capacity
    /// and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        Self {
            core: Mutex::new(MapCore::with_hasher(cap, hash_builder)),
        }
    }

    /// Creates a new concurrent forgetting map from a configuration.
    ///
    /// Pass `None` to use the default hash builder.
    pub fn init(config: ForgettingMapConfig, hash_builder: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config.capacity(), hash_builder.unwrap_or_default())
    }

    /// Returns the maximum number of key-value pairs the map can hold.
    pub fn cap(&self) -> NonZeroUsize {
        self.core.lock().cap()
    }

    /// Returns the current number of key-value pairs in the map.
    pub fn len(&self) -> usize {
        self.core.lock().len()
    }

    /// Returns `true` if the map contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.core.lock().is_empty()
    }

    /// Counted lookup: returns a clone of the value and increments the
    /// entry's usage count.
    ///
    /// The clone happens inside the critical section; the lock is released
    /// before the value is returned. For zero-copy access use
    /// [`find_with`](ConcurrentForgettingMap::find_with).
    pub fn find<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.core.lock().find(key).cloned()
    }

    /// Counted lookup that applies a function to the value while the lock is
    /// held, avoiding a clone.
    pub fn find_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.core.lock().find(key).map(f)
    }

    /// Uncounted lookup: returns a clone of the value without touching the
    /// entry's usage count.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.core.lock().peek(key).cloned()
    }

    /// Returns `true` if the map contains the key. Does not count as a use.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.lock().contains_key(key)
    }

    /// Returns the entry's usage count, if present. Does not count as a use.
    pub fn usage_count<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.lock().usage_count(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Same semantics as [`ForgettingMap::insert`](crate::ForgettingMap::insert):
    /// replacement resets the usage count without evicting; a new key beyond
    /// capacity evicts the least-used entry inside the same critical section.
    ///
    /// Returns the displaced pair, if any.
    pub fn insert(&self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.core.lock().insert(key, value)
    }

    /// Removes a key from the map, returning the value if it existed.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.lock().remove(key)
    }

    /// Clears all entries from the map.
    pub fn clear(&self) {
        self.core.lock().clear()
    }

    /// Returns a snapshot of the usage counters for this map.
    pub fn metrics(&self) -> ForgettingMapMetrics {
        self.core.lock().metrics().clone()
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentForgettingMap<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentForgettingMap").finish_non_exhaustive()
    }
}
