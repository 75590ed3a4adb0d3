//! Side table of per-instance lookup caches.
//!
//! Instead of attaching hidden state to host objects, caches live here keyed
//! by [`InstanceId`]. The table is shared between the construct, mutate and
//! query hooks of one collection type. No borrow of the table is held while a
//! host implementation runs, so reentrant mutations and queries (on the same
//! instance or another) always see a consistent table.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

use foam_hook::{HookResult, Original};
use tracing::trace;

use crate::cache::LookupCache;
use crate::instance::{HostInstance, InstanceId};

/// Per-instance caches for one host collection type.
pub struct LookupCaches<K, V> {
    caches: RefCell<HashMap<InstanceId, LookupCache<K, V>>>,
}

impl<K, V> LookupCaches<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty side table.
    pub fn new() -> Self {
        Self {
            caches: RefCell::new(HashMap::new()),
        }
    }

    /// Attaches a fresh, empty cache to a newly constructed instance.
    pub fn on_construct<T: HostInstance>(&self, instance: &T) {
        self.caches
            .borrow_mut()
            .insert(instance.instance_id(), LookupCache::new());
    }

    /// Clears the instance's cache, then runs the original mutator.
    ///
    /// The clear happens first so a query issued from inside the mutator
    /// already sees the empty cache.
    pub fn on_mutate<T, A, O>(
        &self,
        instance: &mut T,
        args: A,
        original: &Original<T, A, O>,
    ) -> HookResult<O>
    where
        T: HostInstance,
    {
        self.invalidate(instance.instance_id());
        original.call(instance, args)
    }

    /// Runs the original release operation, then drops the instance's cache.
    ///
    /// If the host release fails the instance is still alive and keeps its
    /// cache.
    pub fn on_release<T, A, O>(
        &self,
        instance: &mut T,
        args: A,
        original: &Original<T, A, O>,
    ) -> HookResult<O>
    where
        T: HostInstance,
    {
        let out = original.call(instance, args)?;
        self.forget(instance.instance_id());
        Ok(out)
    }

    /// Answers a query from the instance's cache, or delegates and memoizes.
    ///
    /// Instances without a cache always delegate. A result whose delegation
    /// overlapped a mutation of the same instance is returned but not
    /// memoized.
    pub fn on_query<T>(&self, instance: &mut T, key: K, original: &Original<T, K, V>) -> HookResult<V>
    where
        T: HostInstance,
    {
        let id = instance.instance_id();
        let generation = match self.caches.borrow().get(&id) {
            Some(cache) => match cache.get(&key) {
                Some(hit) => {
                    trace!(instance = id.0, "lookup cache hit");
                    return Ok(hit.clone());
                }
                None => Some(cache.generation()),
            },
            None => None,
        };

        let Some(generation) = generation else {
            return original.call(instance, key);
        };

        trace!(instance = id.0, "lookup cache miss");
        let result = original.call(instance, key.clone())?;
        if let Some(cache) = self.caches.borrow_mut().get_mut(&id) {
            if !cache.insert_at(generation, key, result.clone()) {
                trace!(instance = id.0, "dropping result computed across a mutation");
            }
        }
        Ok(result)
    }

    /// Clears the cache of `id`, if it has one.
    pub fn invalidate(&self, id: InstanceId) {
        if let Some(cache) = self.caches.borrow_mut().get_mut(&id) {
            cache.clear();
        }
    }

    /// Drops the cache of `id`. Returns `false` if it had none.
    pub fn forget(&self, id: InstanceId) -> bool {
        self.caches.borrow_mut().remove(&id).is_some()
    }

    /// Returns `true` if `id` has a cache attached.
    pub fn is_attached(&self, id: InstanceId) -> bool {
        self.caches.borrow().contains_key(&id)
    }

    /// Number of memoized keys for `id`, or `None` without a cache.
    pub fn cached_len(&self, id: InstanceId) -> Option<usize> {
        self.caches.borrow().get(&id).map(LookupCache::len)
    }

    /// Number of instances with a cache attached.
    pub fn len(&self) -> usize {
        self.caches.borrow().len()
    }

    /// Returns `true` if no instance has a cache.
    pub fn is_empty(&self) -> bool {
        self.caches.borrow().is_empty()
    }
}

impl<K, V> Default for LookupCaches<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
