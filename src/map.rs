//! Forgetting Map Implementation.
//!
//! A fixed-capacity key-value map that evicts the least-used entry when an
//! insert would exceed capacity. "Use" means a counted lookup: each successful
//! `find` increments the entry's usage count, and the entry with the lowest
//! count is the one forgotten. Ties go to the oldest entry.
//!
//! Eviction is a scan over current entries. Lookups stay O(1); only the insert
//! that actually evicts pays O(n). For the small fixed capacities this
//! structure targets, the scan is cheaper than maintaining frequency buckets
//! and keeps the module free of unsafe code.

extern crate alloc;

use crate::config::ForgettingMapConfig;
use crate::entry::Entry;
use crate::metrics::ForgettingMapMetrics;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal map core containing the actual algorithm.
///
/// This is shared between `ForgettingMap` (single-threaded) and
/// `ConcurrentForgettingMap` (multi-threaded). All algorithm logic is
/// implemented here to avoid code duplication.
pub(crate) struct MapCore<K, V, S = DefaultHashBuilder> {
    /// Configuration for the map.
    config: ForgettingMapConfig,

    /// Key to entry storage.
    map: HashMap<K, Entry<V>, S>,

    /// Next creation sequence to hand out. Monotonic within this map;
    /// uniqueness is what makes the eviction tie-break total.
    next_seq: u64,

    /// Usage counters for this map.
    metrics: ForgettingMapMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> MapCore<K, V, S> {
    /// Creates a new core with the specified capacity and hash builder.
    pub(crate) fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        let config = ForgettingMapConfig::new(cap);
        MapCore {
            config,
            map: HashMap::with_capacity_and_hasher(cap.get(), hash_builder),
            next_seq: 0,
            metrics: ForgettingMapMetrics::new(),
        }
    }

    /// Returns the maximum number of key-value pairs the map can hold.
    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.config.capacity()
    }

    /// Returns the current number of key-value pairs in the map.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map contains no key-value pairs.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a reference to the metrics for this map.
    #[inline]
    pub(crate) fn metrics(&self) -> &ForgettingMapMetrics {
        &self.metrics
    }

    /// Counted lookup: increments the usage count of the entry if present.
    pub(crate) fn find<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get_mut(key) {
            Some(entry) => {
                entry.touch();
                self.metrics.record_hit();
                Some(&entry.value)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Counted lookup returning a mutable reference to the value.
    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get_mut(key) {
            Some(entry) => {
                entry.touch();
                self.metrics.record_hit();
                Some(&mut entry.value)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Uncounted lookup: no usage-count change, no metrics.
    #[inline]
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).map(|entry| &entry.value)
    }

    /// Returns `true` if the key is present. Does not count as a use.
    #[inline]
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the usage count of the entry, if present. Does not count as a use.
    #[inline]
    pub(crate) fn usage_count<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).map(Entry::uses)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// An existing key is replaced in place: new value, usage count back to 0,
    /// fresh creation sequence, no eviction. A new key that would exceed
    /// capacity first evicts the entry with the lowest `(uses, seq)` rank.
    /// The victim is chosen among the entries present before the new key
    /// lands, so an insert can never evict its own entry.
    ///
    /// Returns the displaced pair: the old `(key, value)` on replacement, the
    /// evicted `(key, value)` on eviction, `None` otherwise.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        let seq = self.next_seq;
        self.next_seq += 1;

        if let Some(slot) = self.map.get_mut(&key) {
            let old = mem::replace(slot, Entry::new(value, seq));
            self.metrics.record_replacement();
            return Some((key, old.into_value()));
        }

        let mut evicted = None;
        if self.map.len() >= self.config.capacity().get() {
            if let Some(victim) = self.victim_key() {
                if let Some((old_key, old_entry)) = self.map.remove_entry(&victim) {
                    self.metrics.record_eviction();
                    evicted = Some((old_key, old_entry.into_value()));
                }
            }
        }

        self.map.insert(key, Entry::new(value, seq));
        self.metrics.record_insertion();

        evicted
    }

    /// Removes a key from the map, returning the value if the key was present.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key).map(Entry::into_value)
    }

    /// Clears the map, removing all key-value pairs.
    ///
    /// The creation sequence keeps running, so entries inserted after a clear
    /// are still younger than everything that came before.
    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    /// The key of the entry with the lowest `(uses, seq)` rank.
    ///
    /// The rank is unique per entry (sequences never repeat), so the minimum
    /// is a single entry and the choice does not depend on hash iteration
    /// order.
    fn victim_key(&self) -> Option<K>
    where
        K: Clone,
    {
        self.map
            .iter()
            .min_by_key(|(_, entry)| entry.rank())
            .map(|(key, _)| key.clone())
    }
}

impl<K, V, S> core::fmt::Debug for MapCore<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapCore")
            .field("capacity", &self.config.capacity())
            .field("len", &self.map.len())
            .finish()
    }
}

/// A fixed-capacity map that forgets its least-used entry when full.
///
/// Each successful [`find`](ForgettingMap::find) counts one use against the
/// entry it hits. When an insert of a new key finds the map full, the entry
/// with the fewest uses is evicted first; among ties the oldest entry loses.
/// Re-inserting an existing key replaces its value and resets its usage
/// count to 0 without evicting anything.
///
/// # Examples
///
/// ```
/// use forgetting_map::ForgettingMap;
/// use core::num::NonZeroUsize;
///
/// let mut map = ForgettingMap::new(NonZeroUsize::new(2).unwrap());
///
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// // Count a use against "a"
/// assert_eq!(map.find(&"a"), Some(&1));
///
/// // Full: "b" has zero uses and is forgotten
/// map.insert("c", 3);
/// assert_eq!(map.find(&"b"), None);
/// assert_eq!(map.find(&"a"), Some(&1));
/// assert_eq!(map.find(&"c"), Some(&3));
/// ```
#[derive(Debug)]
pub struct ForgettingMap<K, V, S = DefaultHashBuilder> {
    core: MapCore<K, V, S>,
}

impl<K: Hash + Eq, V, S: BuildHasher> ForgettingMap<K, V, S> {
    /// Creates a new forgetting map with the specified capacity and hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use forgetting_map::ForgettingMap;
    /// use core::num::NonZeroUsize;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let map: ForgettingMap<&str, u32, _> = ForgettingMap::with_hasher(
    ///     NonZeroUsize::new(10).unwrap(),
    ///     RandomState::new()
    /// );
    /// ```
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        Self {
            core: MapCore::with_hasher(cap, hash_builder),
        }
    }

    /// Creates a new forgetting map from a configuration.
    ///
    /// Pass `None` to use the default hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use forgetting_map::config::ForgettingMapConfig;
    /// use forgetting_map::ForgettingMap;
    /// use core::num::NonZeroUsize;
    ///
    /// let config = ForgettingMapConfig {
    ///     capacity: NonZeroUsize::new(100).unwrap(),
    /// };
    /// let map: ForgettingMap<String, i32> = ForgettingMap::init(config, None);
    /// ```
    pub fn init(config: ForgettingMapConfig, hash_builder: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config.capacity(), hash_builder.unwrap_or_default())
    }

    /// Returns the maximum number of key-value pairs the map can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.core.cap()
    }

    /// Returns the current number of key-value pairs in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns `true` if the map contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Returns a reference to the value corresponding to the key, counting
    /// one use against the entry.
    ///
    /// The key may be any borrowed form of the map's key type, but [`Hash`]
    /// and [`Eq`] on the borrowed form *must* match those for the key type.
    #[inline]
    pub fn find<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find(key)
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// counting one use against the entry.
    ///
    /// The key may be any borrowed form of the map's key type, but [`Hash`]
    /// and [`Eq`] on the borrowed form *must* match those for the key type.
    #[inline]
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.find_mut(key)
    }

    /// Returns a reference to the value corresponding to the key *without*
    /// counting a use.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.peek(key)
    }

    /// Returns `true` if the map contains the key. Does not count as a use.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.contains_key(key)
    }

    /// Returns the entry's usage count, if present. Does not count as a use.
    ///
    /// # Examples
    ///
    /// ```
    /// use forgetting_map::ForgettingMap;
    /// use core::num::NonZeroUsize;
    ///
    /// let mut map = ForgettingMap::new(NonZeroUsize::new(2).unwrap());
    /// map.insert("a", 1);
    /// assert_eq!(map.usage_count(&"a"), Some(0));
    ///
    /// map.find(&"a");
    /// assert_eq!(map.usage_count(&"a"), Some(1));
    /// assert_eq!(map.usage_count(&"missing"), None);
    /// ```
    #[inline]
    pub fn usage_count<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.usage_count(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key already exists its value is replaced and its usage count
    /// reset to 0; nothing is evicted. If the key is new and the map is at
    /// capacity, the least-used entry (oldest among ties) is evicted first,
    /// so the map never holds more than [`cap`](ForgettingMap::cap) entries.
    ///
    /// Returns the displaced pair: the old `(key, value)` on replacement, the
    /// evicted `(key, value)` on eviction, `None` otherwise.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        self.core.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.remove(key)
    }

    /// Clears the map, removing all key-value pairs.
    #[inline]
    pub fn clear(&mut self) {
        self.core.clear()
    }

    /// Returns the usage counters for this map.
    #[inline]
    pub fn metrics(&self) -> &ForgettingMapMetrics {
        self.core.metrics()
    }
}

impl<K: Hash + Eq, V> ForgettingMap<K, V> {
    /// Creates a new forgetting map with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use forgetting_map::ForgettingMap;
    /// use core::num::NonZeroUsize;
    ///
    /// let map: ForgettingMap<&str, u32> = ForgettingMap::new(NonZeroUsize::new(10).unwrap());
    /// ```
    pub fn new(cap: NonZeroUsize) -> ForgettingMap<K, V, DefaultHashBuilder> {
        ForgettingMap::with_hasher(cap, DefaultHashBuilder::default())
    }
}
