//! Texture animation steps become no-ops.

use foam_hook::{HookRegistry, HookResult, Operation};

/// Replaces the sprite animation step with one that never delegates.
pub fn install_static_textures<S: 'static>(
    registry: &HookRegistry,
    update_animation: &Operation<S, (), ()>,
) -> HookResult<()> {
    registry.install(update_animation, |_, (), _| Ok(()))
}
