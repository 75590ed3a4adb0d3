//! One-shot report of the deduplication count.
//!
//! The host emits a tick event continuously; the report waits for the first
//! tick on which both the world and the player exist, logs the counter once,
//! and detaches itself.

use std::cell::Cell;
use std::rc::Rc;

use foam_hook::{EventBus, HandlerId, Listen};
use tracing::info;

use crate::store::DedupCounter;

/// Readiness flags the host exposes on its tick context.
pub trait TickReadiness {
    /// The world is loaded.
    fn world_ready(&self) -> bool;
    /// The local player exists.
    fn player_ready(&self) -> bool;
}

/// Handle returned by [`register_report`].
#[derive(Clone, Debug)]
pub struct ReportHandle {
    /// The bus handler id, detached after the report fires.
    pub id: HandlerId,
    reported: Rc<Cell<Option<u64>>>,
}

impl ReportHandle {
    /// The count that was reported, or `None` if the report has not fired.
    pub fn reported(&self) -> Option<u64> {
        self.reported.get()
    }
}

/// Registers the one-shot report on `event`.
pub fn register_report<Ctx>(bus: &EventBus<Ctx>, event: &str, counter: DedupCounter) -> ReportHandle
where
    Ctx: TickReadiness + 'static,
{
    let reported = Rc::new(Cell::new(None));
    let latch = Rc::clone(&reported);
    let id = bus.register(event, move |tick: &Ctx| {
        if latch.get().is_some() {
            return Listen::Detach;
        }
        if !(tick.world_ready() && tick.player_ready()) {
            return Listen::Keep;
        }
        let deduplicated = counter.get();
        info!(target: "foamfix", deduplicated, "Deduplicated {deduplicated} models.");
        latch.set(Some(deduplicated));
        Listen::Detach
    });
    ReportHandle { id, reported }
}
