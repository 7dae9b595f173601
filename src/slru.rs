//! Segmented Least Recently Used (SLRU) Cache Implementation
//!
//! SLRU splits a fixed number of entries between two LRU-ordered segments: a small
//! **probation** segment that every new key enters, and a larger **protected**
//! segment reserved for keys that were accessed again while on probation.
//! A one-time access can only ever displace other probation entries, so a
//! scan does not wash the working set out of the cache.
//!
//! # How the Algorithm Works
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                                SLRU Cache                                    │
//! │                                                                              │
//! │  ┌─────────────────────────────────────────────────────────────────────┐    │
//! │  │                    PROTECTED SEGMENT (80%)                          │    │
//! │  │  MRU ◀──▶ [hot_1] ◀──▶ [hot_2] ◀──▶ ... ◀──▶ [evict] LRU          │    │
//! │  └─────────────────────────────────────────────────────────────────────┘    │
//! │                                                          ▲ promote           │
//! │                                                          │ (hit)             │
//! │  ┌─────────────────────────────────────────────────────────────────────┐    │
//! │  │                    PROBATION SEGMENT (20%)                          │    │
//! │  │  MRU ◀──▶ [new_1] ◀──▶ [new_2] ◀──▶ ... ◀──▶ [evict] LRU          │    │
//! │  └─────────────────────────────────────────────────────────────────────┘    │
//! │                              ▲                                              │
//! │                              │ insert                                       │
//! │                         new keys                                            │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entry Lifecycle
//!
//! 1. **Insert**: a new key enters the front of probation. If probation is
//!    already full, its least recently used entry is evicted first.
//! 2. **First hit in probation** (`get` or `set`): the entry moves to the front
//!    of protected. If that overflows protected, the protected LRU entry is
//!    evicted.
//! 3. **Hit in protected**: the entry moves to the front of protected.
//! 4. **Eviction / purge**: the only ways an entry leaves the cache.
//!
//! The two capacities are enforced independently: probation never evicts to
//! relieve protected, and protected never evicts to relieve probation.
//!
//! ## Operations
//!
//! | Operation | Lock | Effect | Time |
//! |-----------|------|--------|------|
//! | `set(key, value)` | write | admit, or refresh/promote and overwrite | O(1) |
//! | `get(key)` | write | refresh/promote, return value | O(1) |
//! | `peek(key)` | read | return value, order untouched | O(1) |
//! | `contains(key)` | read | existence check | O(1) |
//! | `len()` | read | `probation + protected` | O(1) |
//! | `purge()` | write | drop everything | O(n) |
//!
//! # Thread Safety
//!
//! `SlruCache` guards all of its state with a single `parking_lot::RwLock`.
//! `get` needs the write lock because a hit reorders the segments. Pure
//! observations (`peek`, `contains`, `len`) share the read lock and run in
//! parallel with each other.
//!
//! # Examples
//!
//! ```
//! use slru_cache::{Segment, SlruCache};
//!
//! // 10 entries: 2 in probation, 8 in protected
//! let cache = SlruCache::new(10).unwrap();
//!
//! cache.set(1, "one");
//! assert_eq!(cache.segment_of(&1), Some(Segment::Probation));
//!
//! assert_eq!(cache.get(&1), Some("one")); // promoted
//! assert_eq!(cache.segment_of(&1), Some(Segment::Protected));
//!
//! // A scan of one-time keys only churns the probation segment.
//! for i in 100..200 {
//!     cache.set(i, "scan");
//! }
//! assert!(cache.contains(&1));
//! assert_eq!(cache.probation_len(), 2);
//! ```

use crate::config::SlruCacheConfig;
use crate::error::ConfigError;
use crate::list::{Element, List};
use crate::metrics::{CacheMetrics, SlruCacheMetrics};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use log::{debug, trace};
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// The segment an entry currently resides in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Recently admitted entries that have not been reused yet
    Probation,
    /// Entries that were accessed again while on probation
    Protected,
}

/// The single owned record per key; the lookup map reaches it through the
/// list handle.
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Unsynchronized SLRU state and algorithm.
///
/// [`SlruCache`] wraps this in a lock; keeping the algorithm here lets every
/// method borrow `self` the way the operation needs (`&mut` for anything that
/// may reorder, `&` for pure lookups).
pub(crate) struct SlruCore<K, V, S = DefaultHashBuilder> {
    config: SlruCacheConfig,
    probation_cap: usize,
    protected_cap: usize,
    probation: List<Entry<K, V>>,
    protected: List<Entry<K, V>>,
    map: HashMap<K, Element, S>,
    metrics: SlruCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> SlruCore<K, V, S> {
    /// Validates `config` and builds an empty core.
    pub(crate) fn with_hasher(
        config: SlruCacheConfig,
        hash_builder: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let probation_cap = config.probation_capacity();
        let protected_cap = config.protected_capacity();
        debug!(
            "creating SLRU cache: capacity={} probation={} protected={}",
            config.capacity, probation_cap, protected_cap
        );

        Ok(SlruCore {
            config,
            probation_cap,
            protected_cap,
            probation: List::with_capacity(probation_cap),
            protected: List::with_capacity(protected_cap),
            map: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            metrics: SlruCacheMetrics::new(probation_cap as u64, protected_cap as u64),
        })
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn probation_capacity(&self) -> usize {
        self.probation_cap
    }

    #[inline]
    pub(crate) fn protected_capacity(&self) -> usize {
        self.protected_cap
    }

    #[inline]
    pub(crate) fn probation_len(&self) -> usize {
        self.probation.len()
    }

    #[inline]
    pub(crate) fn protected_len(&self) -> usize {
        self.protected.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.probation.len() + self.protected.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &SlruCacheMetrics {
        &self.metrics
    }

    fn segment(&self, element: Element) -> Segment {
        if element.list() == self.protected.id() {
            Segment::Protected
        } else {
            Segment::Probation
        }
    }

    fn entry(&self, element: Element) -> Option<&Entry<K, V>> {
        match self.segment(element) {
            Segment::Probation => self.probation.get(element),
            Segment::Protected => self.protected.get(element),
        }
    }

    fn entry_mut(&mut self, element: Element) -> Option<&mut Entry<K, V>> {
        match self.segment(element) {
            Segment::Probation => self.probation.get_mut(element),
            Segment::Protected => self.protected.get_mut(element),
        }
    }

    fn sync_segment_sizes(&mut self) {
        self.metrics
            .update_segment_sizes(self.probation.len() as u64, self.protected.len() as u64);
    }

    /// Removes the least recently used entry of `segment` and its map entry.
    fn evict(&mut self, segment: Segment) {
        let list = match segment {
            Segment::Probation => &mut self.probation,
            Segment::Protected => &mut self.protected,
        };
        let Some(victim) = list.back() else {
            return;
        };
        let Some(entry) = list.remove(victim) else {
            return;
        };
        self.map.remove(&entry.key);
        self.metrics.record_eviction(segment);
        trace!("evicted LRU entry from {:?} segment", segment);
    }

    /// Applies the access rules to a resident key.
    ///
    /// A protected entry moves to the front of protected. A probation entry is
    /// promoted to the front of protected, which may evict the protected LRU.
    /// Returns the entry's current handle and the segment it was found in.
    fn touch<Q>(&mut self, key: &Q) -> Option<(Element, Segment)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let element = *self.map.get(key)?;

        match self.segment(element) {
            Segment::Protected => {
                self.protected.move_to_front(element);
                Some((element, Segment::Protected))
            }
            Segment::Probation if self.protected_cap == 0 => {
                // Nowhere to promote to; refresh in place.
                self.probation.move_to_front(element);
                Some((element, Segment::Probation))
            }
            Segment::Probation => {
                let entry = self.probation.remove(element)?;
                let promoted = self.protected.push_front(entry);
                if let Some(slot) = self.map.get_mut(key) {
                    *slot = promoted;
                }
                self.metrics.record_promotion();
                trace!("promoted entry to protected segment");

                // protected_cap >= 1 here, so the victim is never `promoted`.
                if self.protected.len() > self.protected_cap {
                    self.evict(Segment::Protected);
                }
                self.sync_segment_sizes();
                Some((promoted, Segment::Probation))
            }
        }
    }

    /// Inserts or overwrites `key`.
    pub(crate) fn set(&mut self, key: K, value: V)
    where
        K: Clone,
    {
        if let Some((element, _)) = self.touch(&key) {
            if let Some(entry) = self.entry_mut(element) {
                entry.value = value;
            }
            self.metrics.core.record_update();
            return;
        }

        if self.probation.len() >= self.probation_cap {
            self.evict(Segment::Probation);
        }
        let element = self.probation.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.map.insert(key, element);
        self.metrics.core.record_insertion();
        self.sync_segment_sizes();
    }

    /// Looks up `key`, applying the access rules on a hit.
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some((element, segment)) = self.touch(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.metrics.record_hit(segment);
        self.entry(element).map(|entry| &entry.value)
    }

    /// Looks up `key` without changing any order.
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let element = *self.map.get(key)?;
        self.entry(element).map(|entry| &entry.value)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn segment_of<Q>(&self, key: &Q) -> Option<Segment>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).map(|element| self.segment(*element))
    }

    /// Drops every entry. Both segments get new identities.
    pub(crate) fn purge(&mut self) {
        debug!("purging SLRU cache with {} entries", self.len());
        self.map.clear();
        self.probation.clear();
        self.protected.clear();
        self.metrics.core.record_purge();
        self.sync_segment_sizes();
    }

    /// Keys of `segment` from most to least recently used.
    #[cfg(test)]
    pub(crate) fn keys(&self, segment: Segment) -> Vec<&K> {
        let list = match segment {
            Segment::Probation => &self.probation,
            Segment::Protected => &self.protected,
        };
        list.iter().map(|entry| &entry.key).collect()
    }
}

impl<K, V, S> fmt::Debug for SlruCore<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlruCore")
            .field("capacity", &self.config.capacity)
            .field("probation_capacity", &self.probation_cap)
            .field("protected_capacity", &self.protected_cap)
            .field("probation_len", &self.probation.len())
            .field("protected_len", &self.protected.len())
            .finish()
    }
}

/// A thread-safe Segmented LRU cache.
///
/// New keys enter the probation segment; a later `get` or `set` of the same
/// key while it is on probation promotes it to the protected segment. Each
/// segment evicts its own least recently used entry when it would overflow.
///
/// # Examples
///
/// ```
/// use slru_cache::SlruCache;
///
/// // probation holds 2 entries, protected holds 8
/// let cache = SlruCache::new(10).unwrap();
///
/// cache.set("k1", 1);
/// cache.set("k2", 2);
/// cache.set("k3", 3); // probation is full, "k1" is evicted
///
/// assert!(!cache.contains(&"k1"));
/// assert!(cache.contains(&"k2"));
/// assert!(cache.contains(&"k3"));
/// assert_eq!(cache.len(), 2);
/// ```
pub struct SlruCache<K, V, S = DefaultHashBuilder> {
    core: RwLock<SlruCore<K, V, S>>,
}

impl<K: Hash + Eq, V> SlruCache<K, V, DefaultHashBuilder> {
    /// Creates a cache holding at most `size` entries with the default
    /// probation ratio.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] if `size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use slru_cache::{ConfigError, SlruCache};
    ///
    /// let cache: SlruCache<u64, String> = SlruCache::new(100).unwrap();
    /// assert_eq!(cache.probation_capacity(), 20);
    /// assert_eq!(cache.protected_capacity(), 80);
    ///
    /// let err = SlruCache::<u64, String>::new(0).unwrap_err();
    /// assert_eq!(err, ConfigError::ZeroCapacity);
    /// ```
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        Self::init(SlruCacheConfig::new(size), None)
    }

    /// Creates a cache from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity and probation ratio
    /// * `hasher` - Optional custom hasher. If `None`, uses the default hasher.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not validate.
    pub fn init(
        config: SlruCacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<Self, ConfigError> {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> SlruCache<K, V, S> {
    /// Creates a cache from a configuration and a hash builder.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not validate.
    pub fn with_hasher(config: SlruCacheConfig, hash_builder: S) -> Result<Self, ConfigError> {
        Ok(Self {
            core: RwLock::new(SlruCore::with_hasher(config, hash_builder)?),
        })
    }

    /// Returns the maximum number of entries across both segments.
    pub fn cap(&self) -> usize {
        self.core.read().cap()
    }

    /// Returns the capacity of the probation segment.
    pub fn probation_capacity(&self) -> usize {
        self.core.read().probation_capacity()
    }

    /// Returns the capacity of the protected segment.
    pub fn protected_capacity(&self) -> usize {
        self.core.read().protected_capacity()
    }

    /// Returns the number of entries currently on probation.
    pub fn probation_len(&self) -> usize {
        self.core.read().probation_len()
    }

    /// Returns the number of entries currently protected.
    pub fn protected_len(&self) -> usize {
        self.core.read().protected_len()
    }

    /// Returns the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// Inserts `value` under `key`.
    ///
    /// A new key enters the probation segment, evicting the probation LRU
    /// entry first if the segment is full. A resident key counts as an access
    /// (promotion or refresh, exactly like [`get`](Self::get)) and then has its
    /// value overwritten in place; that path never evicts from probation and
    /// never changes [`len`](Self::len).
    pub fn set(&self, key: K, value: V)
    where
        K: Clone,
    {
        self.core.write().set(key, value);
    }

    /// Returns a clone of the value for `key`.
    ///
    /// This is an access: an entry on probation is promoted to protected, and
    /// a protected entry becomes the most recently used one.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.core.write().get(key).cloned()
    }

    /// Applies `f` to the value for `key` while holding the lock.
    ///
    /// Same access semantics as [`get`](Self::get) without cloning the value.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.core.write().get(key).map(f)
    }

    /// Returns a clone of the value for `key` without touching recency or
    /// segment membership.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.core.read().peek(key).cloned()
    }

    /// Applies `f` to the value for `key` under the read lock, leaving the
    /// eviction order untouched.
    pub fn peek_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.core.read().peek(key).map(f)
    }

    /// Returns `true` if `key` is resident. Does not count as an access.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.read().contains(key)
    }

    /// Returns the segment `key` currently lives in. Does not count as an
    /// access.
    pub fn segment_of<Q>(&self, key: &Q) -> Option<Segment>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.core.read().segment_of(key)
    }

    /// Removes every entry.
    pub fn purge(&self) {
        self.core.write().purge();
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for SlruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.core.read().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "SLRU"
    }
}

impl<K, V, S> fmt::Debug for SlruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlruCache")
            .field("core", &*self.core.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn make_core(size: usize) -> SlruCore<&'static str, i32> {
        SlruCore::with_hasher(SlruCacheConfig::new(size), DefaultHashBuilder::default()).unwrap()
    }

    fn assert_invariants<K: Hash + Eq, V>(core: &SlruCore<K, V>) {
        assert!(core.probation_len() <= core.probation_capacity());
        assert!(core.protected_len() <= core.protected_capacity());
        assert_eq!(core.map.len(), core.probation_len() + core.protected_len());
    }

    #[test]
    fn test_slru_basic() {
        let mut core = make_core(10);
        assert_eq!(core.probation_capacity(), 2);
        assert_eq!(core.protected_capacity(), 8);

        core.set("a", 1);
        core.set("b", 2);
        assert_eq!(core.keys(Segment::Probation), vec![&"b", &"a"]);

        assert_eq!(core.get(&"a"), Some(&1));
        assert_eq!(core.keys(Segment::Probation), vec![&"b"]);
        assert_eq!(core.keys(Segment::Protected), vec![&"a"]);
        assert_invariants(&core);
    }

    #[test]
    fn test_slru_admission_evicts_probation_lru() {
        let mut core = make_core(10);
        core.set("k1", 1);
        core.set("k2", 2);
        core.set("k3", 3);

        assert_eq!(core.keys(Segment::Probation), vec![&"k3", &"k2"]);
        assert!(!core.contains(&"k1"));
        assert_eq!(core.metrics().probation_evictions, 1);
        assert_invariants(&core);
    }

    #[test]
    fn test_slru_set_on_probation_promotes_and_updates() {
        let mut core = make_core(10);
        core.set("a", 1);
        core.set("a", 10);

        assert_eq!(core.segment_of(&"a"), Some(Segment::Protected));
        assert_eq!(core.peek(&"a"), Some(&10));
        assert_eq!(core.len(), 1);
        assert_eq!(core.metrics().total_promotions, 1);
    }

    #[test]
    fn test_slru_set_on_protected_refreshes_and_updates() {
        let mut core = make_core(10);
        for key in ["a", "b"] {
            core.set(key, 0);
            core.get(&key);
        }
        assert_eq!(core.keys(Segment::Protected), vec![&"b", &"a"]);

        core.set("a", 5);
        assert_eq!(core.keys(Segment::Protected), vec![&"a", &"b"]);
        assert_eq!(core.peek(&"a"), Some(&5));
        assert_eq!(core.metrics().total_promotions, 2);
    }

    #[test]
    fn test_slru_protected_overflow_evicts_protected_lru() {
        // 5 entries: 1 probation, 4 protected
        let mut core = make_core(5);
        for key in ["a", "b", "c", "d", "e"] {
            core.set(key, 0);
            assert_eq!(core.get(&key), Some(&0));
            assert_invariants(&core);
        }

        // "a" was the least recently used protected entry.
        assert!(!core.contains(&"a"));
        assert_eq!(core.keys(Segment::Protected), vec![&"e", &"d", &"c", &"b"]);
        assert_eq!(core.metrics().protected_evictions, 1);
        assert_eq!(core.metrics().probation_evictions, 0);
    }

    #[test]
    fn test_slru_update_never_evicts_probation() {
        let mut core = make_core(10);
        core.set("a", 1);
        core.set("b", 2);
        // Probation full; updating a resident key promotes instead of evicting.
        core.set("b", 20);
        assert!(core.contains(&"a"));
        assert_eq!(core.len(), 2);
        assert_eq!(core.metrics().core.evictions, 0);
    }

    #[test]
    fn test_slru_single_slot_refreshes_in_place() {
        let mut core = make_core(1);
        assert_eq!(core.probation_capacity(), 1);
        assert_eq!(core.protected_capacity(), 0);

        core.set("a", 1);
        assert_eq!(core.get(&"a"), Some(&1));
        assert_eq!(core.segment_of(&"a"), Some(Segment::Probation));

        core.set("a", 2);
        assert_eq!(core.get(&"a"), Some(&2));

        core.set("b", 3);
        assert!(!core.contains(&"a"));
        assert_eq!(core.get(&"b"), Some(&3));
        assert_invariants(&core);
    }

    #[test]
    fn test_slru_purge_resets_segments() {
        let mut core = make_core(10);
        core.set("a", 1);
        core.get(&"a");
        core.set("b", 2);

        core.purge();
        assert!(core.is_empty());
        assert!(core.keys(Segment::Probation).is_empty());
        assert!(core.keys(Segment::Protected).is_empty());
        assert_eq!(core.peek(&"a"), None);

        core.set("a", 3);
        assert_eq!(core.segment_of(&"a"), Some(Segment::Probation));
        assert_eq!(core.metrics().core.purges, 1);
        assert_invariants(&core);
    }

    #[test]
    fn test_slru_metrics_count_only_accesses() {
        let mut core = make_core(10);
        core.set("a", 1);
        core.get(&"a");
        core.get(&"a");
        core.get(&"missing");
        core.peek(&"a");
        core.contains(&"a");

        let metrics = core.metrics();
        assert_eq!(metrics.core.requests, 3);
        assert_eq!(metrics.core.cache_hits, 2);
        assert_eq!(metrics.probation_hits, 1);
        assert_eq!(metrics.protected_hits, 1);
        assert_eq!(metrics.protected_size, 1);
    }

    #[test]
    fn test_slru_cache_rejects_zero_size() {
        let result = SlruCache::<String, i32>::new(0);
        assert_eq!(result.unwrap_err(), ConfigError::ZeroCapacity);
    }

    #[test]
    fn test_slru_cache_borrowed_lookup() {
        let cache: SlruCache<String, i32> = SlruCache::new(10).unwrap();
        cache.set("key".to_string(), 10);

        assert_eq!(cache.peek("key"), Some(10));
        assert_eq!(cache.get_with("key", |v| v * 2), Some(20));
        assert_eq!(cache.peek_with("key", |v| *v + 1), Some(11));
        assert!(cache.contains("key"));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_slru_cache_metrics_report() {
        let cache = SlruCache::new(10).unwrap();
        cache.set("a", 1);
        cache.get(&"a");
        cache.get(&"b");

        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits"), Some(&1.0));
        assert_eq!(metrics.get("cache_misses"), Some(&1.0));
        assert_eq!(metrics.get("total_promotions"), Some(&1.0));
        assert_eq!(cache.algorithm_name(), "SLRU");
    }

    #[test]
    fn test_slru_concurrent_access() {
        let cache: Arc<SlruCache<String, usize>> = Arc::new(SlruCache::new(100).unwrap());
        let num_threads = 4;
        let ops_per_thread = 100;

        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();
        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("key_{}_{}", t, i);
                    cache.set(key.clone(), i);
                    let _ = cache.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 100);
        assert!(cache.probation_len() <= cache.probation_capacity());
        assert!(cache.protected_len() <= cache.protected_capacity());
    }
}
