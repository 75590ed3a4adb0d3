//! Wiring the deduplication store into the host's bake operation.

use std::cell::RefCell;
use std::rc::Rc;

use foam_hook::{HookRegistry, HookResult, Operation};

use crate::model::BakedModel;
use crate::store::DedupCache;

/// Installs deduplication on a bake operation.
///
/// The replacement lets the host bake as usual, then swaps the result for the
/// canonical instance when an equal model was baked before. The store is only
/// borrowed after the host's bake returns, so a bake that reenters the
/// registry never observes it borrowed.
pub fn install_bake_dedup<B, A, M>(
    registry: &HookRegistry,
    bake: &Operation<B, A, Rc<M>>,
    cache: Rc<RefCell<DedupCache<M>>>,
) -> HookResult<()>
where
    B: 'static,
    A: 'static,
    M: BakedModel + 'static,
{
    registry.install(bake, move |bakery, args, original| {
        let baked = original.call(bakery, args)?;
        Ok(cache.borrow_mut().intern(baked))
    })
}
