//! FoamFix: memory and CPU savings layered onto a host game runtime.
//!
//! [`FoamFix`] reads a [`FoamConfig`] and installs each enabled feature on the
//! host's [`HookRegistry`]: baked model deduplication, per-instance class
//! lookup caching, the one-shot deduplication report, and a few behaviour
//! overrides. Disabled features leave the host operation untouched.

#![warn(missing_docs)]

use std::cell::RefCell;
use std::hash::Hash;
use std::path::Path;
use std::rc::Rc;

use foam_config::{load_config, ConfigError, FoamConfig};
use foam_dedup::{BakedModel, DedupCache, ReportHandle, TickReadiness};
use foam_hook::{EventBus, HookError, HookRegistry, Operation};
use foam_lookup::{HostInstance, LookupCaches};
use foam_tweaks::{LightSource, TransferCooldown};
use tracing::debug;

pub use foam_config;
pub use foam_dedup;
pub use foam_hook;
pub use foam_lookup;
pub use foam_tweaks;

/// Errors raised while setting FoamFix up.
#[derive(Debug, thiserror::Error)]
pub enum FoamError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A hook could not be installed.
    #[error(transparent)]
    Hook(#[from] HookError),
}

/// The host operations of a mutable collection with a class-keyed query.
///
/// `T` is the collection, `A` its constructor arguments, `I` the item type
/// taken by `add`/`remove`, and `K`/`V` the query key and result.
pub struct CollectionOps<A, T, I, AddOut, RemoveOut, K, V> {
    /// The collection constructor.
    pub construct: Operation<(), A, T>,
    /// Inserts an item.
    pub add: Operation<T, I, AddOut>,
    /// Removes an item.
    pub remove: Operation<T, I, RemoveOut>,
    /// Looks items up by class.
    pub query: Operation<T, K, V>,
    /// Called by the host when it is done with an instance.
    pub release: Operation<T, (), ()>,
}

/// Handle on the installed model deduplication.
pub struct ModelDedup<M> {
    /// The shared store.
    pub cache: Rc<RefCell<DedupCache<M>>>,
}

impl<M: BakedModel> ModelDedup<M> {
    /// Number of bakes answered with a previously stored model.
    pub fn deduplicated(&self) -> u64 {
        self.cache.borrow().deduplicated()
    }
}

/// Installs the configured features on a host.
pub struct FoamFix {
    config: FoamConfig,
}

impl FoamFix {
    /// Uses an already loaded configuration.
    pub fn new(config: FoamConfig) -> Self {
        Self { config }
    }

    /// Loads `foamfix.toml` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, FoamError> {
        Ok(Self::new(load_config(dir)?))
    }

    /// The active configuration.
    pub fn config(&self) -> &FoamConfig {
        &self.config
    }

    /// Deduplicates the results of the host's bake operation.
    ///
    /// Returns `None` when disabled.
    pub fn dedup_models<B, A, M>(
        &self,
        registry: &HookRegistry,
        bake: &Operation<B, A, Rc<M>>,
    ) -> Result<Option<ModelDedup<M>>, FoamError>
    where
        B: 'static,
        A: 'static,
        M: BakedModel + 'static,
    {
        if !self.config.dedup.enabled {
            debug!("model deduplication disabled");
            return Ok(None);
        }
        let cache = Rc::new(RefCell::new(DedupCache::new()));
        foam_dedup::install_bake_dedup(registry, bake, Rc::clone(&cache))?;
        Ok(Some(ModelDedup { cache }))
    }

    /// Caches class lookups on a collection until its next mutation.
    ///
    /// Returns the side table, or `None` when disabled.
    pub fn cache_lookups<A, T, I, AddOut, RemoveOut, K, V>(
        &self,
        registry: &HookRegistry,
        ops: &CollectionOps<A, T, I, AddOut, RemoveOut, K, V>,
    ) -> Result<Option<Rc<LookupCaches<K, V>>>, FoamError>
    where
        A: 'static,
        T: HostInstance + 'static,
        I: 'static,
        AddOut: 'static,
        RemoveOut: 'static,
        K: Eq + Hash + Clone + 'static,
        V: Clone + 'static,
    {
        if !self.config.lookup.enabled {
            debug!("lookup cache disabled");
            return Ok(None);
        }
        let caches = Rc::new(LookupCaches::new());
        foam_lookup::install_construct(registry, &ops.construct, Rc::clone(&caches))?;
        foam_lookup::install_invalidation(registry, &ops.add, Rc::clone(&caches))?;
        foam_lookup::install_invalidation(registry, &ops.remove, Rc::clone(&caches))?;
        foam_lookup::install_query(registry, &ops.query, Rc::clone(&caches))?;
        foam_lookup::install_release(registry, &ops.release, Rc::clone(&caches))?;
        Ok(Some(caches))
    }

    /// Registers the one-shot deduplication report on the host event bus.
    ///
    /// Returns `None` when the report or deduplication is disabled.
    pub fn report<Ctx, M>(&self, bus: &EventBus<Ctx>, dedup: Option<&ModelDedup<M>>) -> Option<ReportHandle>
    where
        Ctx: TickReadiness + 'static,
        M: BakedModel,
    {
        if !self.config.report.enabled {
            return None;
        }
        let counter = dedup?.cache.borrow().counter();
        Some(foam_dedup::register_report(bus, &self.config.report.event, counter))
    }

    /// Darkens lit redstone components. Returns whether it was installed.
    pub fn redstone_light<B, S>(
        &self,
        registry: &HookRegistry,
        get_light_value: &Operation<B, S, u32>,
    ) -> Result<bool, FoamError>
    where
        B: 'static,
        S: LightSource + 'static,
    {
        if !self.config.tweaks.redstone_light {
            return Ok(false);
        }
        foam_tweaks::install_redstone_light(registry, get_light_value)?;
        Ok(true)
    }

    /// Throttles hopper updates. Returns whether it was installed.
    pub fn hopper_throttle<H>(
        &self,
        registry: &HookRegistry,
        update: &Operation<H, (), ()>,
    ) -> Result<bool, FoamError>
    where
        H: TransferCooldown + 'static,
    {
        let cooldown = self.config.tweaks.hopper_cooldown;
        if cooldown == 0 {
            return Ok(false);
        }
        foam_tweaks::install_hopper_throttle(registry, update, cooldown)?;
        Ok(true)
    }

    /// Freezes texture animations. Returns whether it was installed.
    pub fn static_textures<S: 'static>(
        &self,
        registry: &HookRegistry,
        update_animation: &Operation<S, (), ()>,
    ) -> Result<bool, FoamError> {
        if self.config.tweaks.animations {
            return Ok(false);
        }
        foam_tweaks::install_static_textures(registry, update_animation)?;
        Ok(true)
    }
}

impl Default for FoamFix {
    fn default() -> Self {
        Self::new(FoamConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts() {
        let dir = std::env::temp_dir().join("foamfix-missing-config-dir");
        let err = FoamFix::from_dir(&dir).err().unwrap();
        assert!(matches!(err, FoamError::Config(ConfigError::IoError(_))));
    }

    #[test]
    fn hook_error_converts() {
        let err: FoamError = HookError::delegation("boom").into();
        assert_eq!(err.to_string(), "host operation failed: boom");
    }

    #[test]
    fn default_enables_everything() {
        let fix = FoamFix::default();
        assert!(fix.config().dedup.enabled);
        assert!(fix.config().lookup.enabled);
        assert!(fix.config().report.enabled);
    }
}
