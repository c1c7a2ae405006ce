//! `ActivationSchedule`: the set of live entities and their per-tick order.

use std::hash::Hash;

use fg_core::SimRng;

#[cfg(feature = "fx-hash")]
type KeySet<K> = rustc_hash::FxHashSet<K>;
#[cfg(not(feature = "fx-hash"))]
type KeySet<K> = std::collections::HashSet<K>;

/// Live entities in insertion order, plus a membership set for O(1)
/// "was this removed mid-tick?" checks.
///
/// Removal only touches the membership sets; `order` is compacted lazily at
/// the next [`snapshot`](Self::snapshot).
pub struct ActivationSchedule<K> {
    order:   Vec<K>,
    live:    KeySet<K>,
    /// Removed but still present in `order`.
    retired: KeySet<K>,
    steps:   u64,
}

impl<K: Copy + Eq + Hash> Default for ActivationSchedule<K> {
    fn default() -> Self {
        Self { order: Vec::new(), live: KeySet::default(), retired: KeySet::default(), steps: 0 }
    }
}

impl<K: Copy + Eq + Hash> ActivationSchedule<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`.  Returns `false` if it was already live.
    pub fn add(&mut self, key: K) -> bool {
        if !self.live.insert(key) {
            return false;
        }
        // A key removed since the last compaction keeps its old slot.
        if !self.retired.remove(&key) {
            self.order.push(key);
        }
        true
    }

    /// Deregister `key`.  Returns `false` if it was not live.
    pub fn remove(&mut self, key: K) -> bool {
        if !self.live.remove(&key) {
            return false;
        }
        self.retired.insert(key);
        true
    }

    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.live.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of snapshots taken so far, i.e. ticks started.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Live entities in insertion order.
    pub fn live(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied().filter(|k| self.live.contains(k))
    }

    /// Start a tick: return every live entity in a uniformly random order.
    pub fn snapshot(&mut self, rng: &mut SimRng) -> Vec<K> {
        let live = &self.live;
        self.order.retain(|k| live.contains(k));
        self.retired.clear();
        let mut order = self.order.clone();
        rng.shuffle(&mut order);
        self.steps += 1;
        order
    }
}
