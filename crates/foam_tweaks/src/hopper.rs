//! Hoppers transfer at most once per cooldown window.

use foam_hook::{HookRegistry, HookResult, Operation};

/// Access to a hopper's transfer cooldown.
pub trait TransferCooldown {
    /// Remaining ticks before the next transfer.
    fn transfer_cooldown(&self) -> u32;
    /// Sets the remaining ticks.
    fn set_transfer_cooldown(&mut self, ticks: u32);
}

/// Installs the throttle on the hopper's update operation.
///
/// While the cooldown runs the host update is skipped; when it expires the
/// cooldown restarts at `cooldown` and the host update runs once.
pub fn install_hopper_throttle<H>(
    registry: &HookRegistry,
    update: &Operation<H, (), ()>,
    cooldown: u32,
) -> HookResult<()>
where
    H: TransferCooldown + 'static,
{
    registry.install(update, move |hopper, (), original| {
        let remaining = hopper.transfer_cooldown();
        if remaining > 0 {
            hopper.set_transfer_cooldown(remaining - 1);
            return Ok(());
        }
        hopper.set_transfer_cooldown(cooldown);
        original.call(hopper, ())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hopper {
        cooldown: u32,
        transfers: u32,
    }

    impl TransferCooldown for Hopper {
        fn transfer_cooldown(&self) -> u32 {
            self.cooldown
        }

        fn set_transfer_cooldown(&mut self, ticks: u32) {
            self.cooldown = ticks;
        }
    }

    #[test]
    fn transfers_once_per_window() {
        let registry = HookRegistry::new();
        let update = registry.method::<Hopper, (), ()>("TileEntityHopper", "update");
        registry
            .register_native(&update, |h: &mut Hopper, ()| {
                h.transfers += 1;
                Ok(())
            })
            .unwrap();
        install_hopper_throttle(&registry, &update, 8).unwrap();

        let mut hopper = Hopper {
            cooldown: 0,
            transfers: 0,
        };
        for _ in 0..18 {
            registry.invoke(&update, &mut hopper, ()).unwrap();
        }
        // Transfers on ticks 0 and 9; the rest are spent cooling down.
        assert_eq!(hopper.transfers, 2);
    }
}
