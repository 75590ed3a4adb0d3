//! Lit redstone components stop emitting block light.

use foam_hook::{HookRegistry, HookResult, Operation};

/// The block state fields the light override inspects.
pub trait LightSource {
    /// Unlocalized block name, e.g. `tile.torch`.
    fn block_name(&self) -> &str;
    /// Metadata value of the state.
    fn meta(&self) -> u32;
}

/// Returns `true` if the state's light value is forced to zero.
///
/// A standing torch (meta 5) and powered repeaters or comparators (meta bit 8)
/// are dark; every other state keeps its host light value.
pub fn suppresses_light<S: LightSource + ?Sized>(state: &S) -> bool {
    match state.block_name() {
        "tile.torch" => state.meta() == 5,
        "tile.repeater" | "tile.comparator" => state.meta() & 8 != 0,
        _ => false,
    }
}

/// Installs the override on the host's light value lookup.
pub fn install_redstone_light<B, S>(
    registry: &HookRegistry,
    get_light_value: &Operation<B, S, u32>,
) -> HookResult<()>
where
    B: 'static,
    S: LightSource + 'static,
{
    registry.install(get_light_value, |block, state, original| {
        if suppresses_light(&state) {
            return Ok(0);
        }
        original.call(block, state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct State(&'static str, u32);

    impl LightSource for State {
        fn block_name(&self) -> &str {
            self.0
        }

        fn meta(&self) -> u32 {
            self.1
        }
    }

    #[test]
    fn torch_rules() {
        assert!(suppresses_light(&State("tile.torch", 5)));
        assert!(!suppresses_light(&State("tile.torch", 1)));
    }

    #[test]
    fn powered_bit_rules() {
        assert!(suppresses_light(&State("tile.repeater", 8)));
        assert!(suppresses_light(&State("tile.comparator", 9)));
        assert!(!suppresses_light(&State("tile.comparator", 7)));
    }

    #[test]
    fn other_blocks_untouched() {
        assert!(!suppresses_light(&State("tile.glowstone", 8)));
    }

    #[test]
    fn installed_override_delegates_otherwise() {
        let registry = HookRegistry::new();
        let op = registry.method::<(), State, u32>("Block", "getLightValue");
        registry.register_native(&op, |_, _| Ok(15)).unwrap();
        install_redstone_light(&registry, &op).unwrap();
        assert_eq!(registry.invoke(&op, &mut (), State("tile.torch", 5)).unwrap(), 0);
        assert_eq!(registry.invoke(&op, &mut (), State("tile.torch", 4)).unwrap(), 15);
    }
}
