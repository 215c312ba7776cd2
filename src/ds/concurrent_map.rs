//! Thread-safe generic map behind a single reader-writer lock.
//!
//! ## Architecture
//! - Entries live in one `HashMap<K, V, S>` guarded by a `parking_lot::RwLock`.
//! - Readers (`get`, `contains_key`, `keys`, `len`) share the lock; writers
//!   (`put`, `put_if_absent`, `remove`, `clear`) hold it exclusively.
//! - Access counters are relaxed atomics kept outside the lock.
//!
//! ## Core Operations
//! - `put`: insert or overwrite.
//! - `put_if_absent`: insert only when the key is missing; the check and the
//!   insert happen under the same write guard.
//! - `get`: clone the value out; `None` means absent, never "zero value".
//! - `keys`: snapshot copy of the key set at call time.
//!
//! ## Example Usage
//! ```rust
//! use leafkit::ds::ConcurrentMap;
//!
//! let map = ConcurrentMap::new();
//! map.put("China", "BeiJing");
//! assert!(map.put_if_absent("Japan", "Tokyo"));
//! assert!(!map.put_if_absent("China", "ShangHai"));
//!
//! assert_eq!(map.get(&"China"), Some("BeiJing"));
//! assert_eq!(map.size(), 2);
//! ```
//!
//! ## Type Constraints
//! - `K: Eq + Hash` for key lookup.
//! - `S: BuildHasher` for custom hashers (defaults to `RandomState`).
//!
//! ## Thread Safety
//! - `ConcurrentMap` is `Send + Sync` when `K`, `V` and `S` are; share it by
//!   reference or through an `Arc`.
use std::collections::HashMap;
use std::collections::hash_map::{Entry, RandomState};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Snapshot of map access counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapMetrics {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub updates: u64,
    pub removes: u64,
}

#[derive(Debug, Default)]
struct MapCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    updates: AtomicU64,
    removes: AtomicU64,
}

impl MapCounters {
    fn snapshot(&self) -> MapMetrics {
        MapMetrics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            removes: self.removes.load(Ordering::Relaxed),
        }
    }

    fn record_lookup(&self, found: bool) {
        let counter = if found { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn record_put(&self, replaced: bool) {
        let counter = if replaced {
            &self.updates
        } else {
            &self.inserts
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_remove(&self) {
        self.removes.fetch_add(1, Ordering::Relaxed);
    }
}

/// Map whose every operation is safe to call from many threads at once.
pub struct ConcurrentMap<K, V, S = RandomState> {
    elements: RwLock<HashMap<K, V, S>>,
    counters: MapCounters,
}

impl<K, V> ConcurrentMap<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Creates an empty map with the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> ConcurrentMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty map with a custom hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty map with a custom hasher and reserved capacity.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            elements: RwLock::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
            counters: MapCounters::default(),
        }
    }

    /// Maps `key` to `value`, returning the value it replaced.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let previous = self.elements.write().insert(key, value);
        self.counters.record_put(previous.is_some());
        previous
    }

    /// Maps `key` to `value` only if `key` is not already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn put_if_absent(&self, key: K, value: V) -> bool {
        let mut elements = self.elements.write();
        match elements.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                self.counters.record_put(false);
                true
            },
        }
    }

    /// Returns a clone of the value mapped to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.get_with(key, V::clone)
    }

    /// Applies `f` to the value mapped to `key` while holding the read lock.
    pub fn get_with<Q, R>(&self, key: &Q, f: impl FnOnce(&V) -> R) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let elements = self.elements.read();
        let found = elements.get(key);
        self.counters.record_lookup(found.is_some());
        found.map(f)
    }

    /// Returns `true` if the map holds `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.elements.read().contains_key(key)
    }

    /// Returns a snapshot of the keys, in no particular order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.elements.read().keys().cloned().collect()
    }

    /// Removes every mapping.
    pub fn clear(&self) {
        self.elements.write().clear();
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let removed = self.elements.write().remove(key);
        if removed.is_some() {
            self.counters.inc_remove();
        }
        removed
    }

    /// Returns the number of mappings.
    pub fn size(&self) -> usize {
        self.elements.read().len()
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the map holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Snapshot of the access counters.
    pub fn metrics(&self) -> MapMetrics {
        self.counters.snapshot()
    }
}

impl<K, V> Default for ConcurrentMap<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for ConcurrentMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements.read();
        f.debug_struct("ConcurrentMap")
            .field("elements", &*elements)
            .field("metrics", &self.counters.snapshot())
            .finish()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ConcurrentMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Self::with_hasher(S::default());
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}
