//! Secondary indices
//!
//! Maps an opaque key (user name or security id) to the unordered set of
//! slots whose live orders carry that key. Buckets are plain vectors:
//! removal is a linear scan plus swap-pop, acceptable because a bucket is
//! bounded by the orders simultaneously live for one key.

use std::collections::HashMap;

/// Key → slots index with swap-pop removal
///
/// A key with no remaining slots is dropped from the map, so `get` never
/// observes an empty bucket.
#[derive(Debug, Clone, Default)]
pub struct SlotIndex {
    buckets: HashMap<String, Vec<u64>>,
}

impl SlotIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with pre-reserved room for `keys` buckets
    pub fn with_capacity(keys: usize) -> Self {
        Self {
            buckets: HashMap::with_capacity(keys),
        }
    }

    /// Record that `slot` is live under `key`
    pub fn insert(&mut self, key: &str, slot: u64) {
        // Avoid allocating the key when the bucket already exists
        match self.buckets.get_mut(key) {
            Some(bucket) => bucket.push(slot),
            None => {
                self.buckets.insert(key.to_owned(), vec![slot]);
            }
        }
    }

    /// Remove `slot` from the bucket under `key`
    ///
    /// Silently ignores a missing key or slot. Drops the bucket when it
    /// empties.
    pub fn remove(&mut self, key: &str, slot: u64) {
        if let Some(bucket) = self.buckets.get_mut(key) {
            if let Some(position) = bucket.iter().position(|&s| s == slot) {
                bucket.swap_remove(position);
            }
            if bucket.is_empty() {
                self.buckets.remove(key);
            }
        }
    }

    /// Look up the slots recorded under `key`
    pub fn get(&self, key: &str) -> Option<&[u64]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Copy out the slots recorded under `key`
    ///
    /// Bulk cancellation iterates this copy so the live bucket can shrink
    /// underneath the loop without invalidating it.
    pub fn snapshot(&self, key: &str) -> Vec<u64> {
        self.buckets.get(key).cloned().unwrap_or_default()
    }

    /// Number of keys with at least one slot
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }
}
