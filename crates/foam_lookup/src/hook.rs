//! Installing the lookup cache on a collection type's operations.

use std::hash::Hash;
use std::rc::Rc;

use foam_hook::{HookRegistry, HookResult, Operation};

use crate::instance::HostInstance;
use crate::table::LookupCaches;

/// Attaches an empty cache to every instance the constructor builds.
pub fn install_construct<A, T, K, V>(
    registry: &HookRegistry,
    construct: &Operation<(), A, T>,
    caches: Rc<LookupCaches<K, V>>,
) -> HookResult<()>
where
    A: 'static,
    T: HostInstance + 'static,
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    registry.install(construct, move |recv, args, original| {
        let instance = original.call(recv, args)?;
        caches.on_construct(&instance);
        Ok(instance)
    })
}

/// Makes a mutator clear the instance's cache before it runs.
pub fn install_invalidation<T, A, O, K, V>(
    registry: &HookRegistry,
    mutator: &Operation<T, A, O>,
    caches: Rc<LookupCaches<K, V>>,
) -> HookResult<()>
where
    T: HostInstance + 'static,
    A: 'static,
    O: 'static,
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    registry.install(mutator, move |instance, args, original| {
        caches.on_mutate(instance, args, original)
    })
}

/// Drops the instance's cache once the host has released the instance.
pub fn install_release<T, A, O, K, V>(
    registry: &HookRegistry,
    release: &Operation<T, A, O>,
    caches: Rc<LookupCaches<K, V>>,
) -> HookResult<()>
where
    T: HostInstance + 'static,
    A: 'static,
    O: 'static,
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    registry.install(release, move |instance, args, original| {
        caches.on_release(instance, args, original)
    })
}

/// Serves a query from the instance's cache, delegating on a miss.
pub fn install_query<T, K, V>(
    registry: &HookRegistry,
    query: &Operation<T, K, V>,
    caches: Rc<LookupCaches<K, V>>,
) -> HookResult<()>
where
    T: HostInstance + 'static,
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    registry.install(query, move |instance, key, original| {
        caches.on_query(instance, key, original)
    })
}
