//! The grow-only deduplication store.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use foam_hook::HookResult;
use tracing::trace;

use crate::model::BakedModel;
use crate::signature::{signature, Signature};

/// Read handle on the number of models answered from the store.
///
/// Cloning shares the same counter; it only ever increases.
#[derive(Clone, Debug, Default)]
pub struct DedupCounter(Rc<Cell<u64>>);

impl DedupCounter {
    /// Current count.
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Maps model signatures to the first model seen with that signature.
///
/// Entries are never updated or removed. Callers receive shared [`Rc`]
/// handles, so every duplicate resolves to the same allocation.
pub struct DedupCache<M> {
    models: HashMap<Signature, Rc<M>>,
    deduplicated: DedupCounter,
}

impl<M: BakedModel> DedupCache<M> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
            deduplicated: DedupCounter::default(),
        }
    }

    /// Returns the canonical instance for `baked`.
    ///
    /// If an equal model was interned before, that instance is returned and
    /// `baked` is dropped. Models without a signature come back unchanged and
    /// are not stored.
    pub fn intern(&mut self, baked: Rc<M>) -> Rc<M> {
        let sig = match signature(baked.as_ref()) {
            Ok(sig) => sig,
            Err(err) => {
                trace!(%err, "model is not canonicalizable; keeping it unique");
                return baked;
            }
        };

        if let Some(canonical) = self.models.get(&sig) {
            self.deduplicated.increment();
            trace!(signature = %sig.content_hash(), "deduplicated baked model");
            return Rc::clone(canonical);
        }

        self.models.insert(sig, Rc::clone(&baked));
        baked
    }

    /// Bakes `raw` with `transform` through `bake`, then interns the result.
    ///
    /// Baking always runs; only the result is deduplicated. Bake failures are
    /// returned as-is.
    pub fn intern_baked<R, T, F>(&mut self, raw: R, transform: T, bake: F) -> HookResult<Rc<M>>
    where
        F: FnOnce(R, T) -> HookResult<Rc<M>>,
    {
        let baked = bake(raw, transform)?;
        Ok(self.intern(baked))
    }

    /// Number of bakes answered with a previously stored model.
    pub fn deduplicated(&self) -> u64 {
        self.deduplicated.get()
    }

    /// A shared read handle on the deduplication counter.
    pub fn counter(&self) -> DedupCounter {
        self.deduplicated.clone()
    }

    /// Number of distinct canonical models held.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<M: BakedModel> Default for DedupCache<M> {
    fn default() -> Self {
        Self::new()
    }
}
