//! A single instance's memo table.

use std::collections::HashMap;
use std::hash::Hash;

/// Observable state of a [`LookupCache`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CacheState {
    /// Nothing memoized (fresh, or just invalidated).
    Empty,
    /// Some query keys memoized.
    Partial,
}

/// Query results memoized since the last mutation of the owning instance.
///
/// The generation advances on every [`clear`](Self::clear). A caller that
/// delegates a query records the generation first and only memoizes the
/// result if no clear happened in between.
#[derive(Debug)]
pub struct LookupCache<K, V> {
    entries: HashMap<K, V>,
    generation: u64,
}

impl<K: Eq + Hash, V> LookupCache<K, V> {
    /// Creates an empty cache at generation 0.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
        }
    }

    /// Looks up a memoized result.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Memoizes `value` if the cache is still at `generation`.
    ///
    /// Returns `false` when a clear happened since `generation` was read; the
    /// value may then predate a mutation and is dropped.
    pub fn insert_at(&mut self, generation: u64, key: K, value: V) -> bool {
        if generation != self.generation {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    /// Drops every memoized result and advances the generation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of memoized keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty or partially populated.
    pub fn state(&self) -> CacheState {
        if self.entries.is_empty() {
            CacheState::Empty
        } else {
            CacheState::Partial
        }
    }
}

impl<K: Eq + Hash, V> Default for LookupCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
