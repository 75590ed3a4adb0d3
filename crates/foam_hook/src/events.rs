//! Named host events with self-detaching handlers.
//!
//! The host emits events such as `update` once per tick. Handlers decide on
//! every call whether to keep listening; a handler that returns
//! [`Listen::Detach`] is dropped after that call and never fires again.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use tracing::trace;

/// What a handler wants after running.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Listen {
    /// Stay registered.
    Keep,
    /// Remove this handler.
    Detach,
}

/// Opaque id returned by [`EventBus::register`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HandlerId(u64);

type Handler<Ctx> = Box<dyn FnMut(&Ctx) -> Listen>;

struct Registered<Ctx> {
    id: HandlerId,
    handler: Handler<Ctx>,
}

/// Single-threaded event bus keyed by event name.
///
/// `Ctx` is whatever the host hands to handlers on each emit (for the tick
/// event, the readiness of world and player).
pub struct EventBus<Ctx> {
    handlers: RefCell<HashMap<String, Vec<Registered<Ctx>>>>,
    /// Live handlers taken out of the table by an emit in progress.
    in_flight: RefCell<HashSet<HandlerId>>,
    /// In-flight ids unregistered before their emit finished.
    cancelled: RefCell<HashSet<HandlerId>>,
    next_id: Cell<u64>,
}

impl<Ctx> EventBus<Ctx> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(HashMap::new()),
            in_flight: RefCell::new(HashSet::new()),
            cancelled: RefCell::new(HashSet::new()),
            next_id: Cell::new(0),
        }
    }

    /// Registers `handler` for `event`.
    ///
    /// Handlers registered while `event` is being emitted first run on the
    /// next emit.
    pub fn register<F>(&self, event: &str, handler: F) -> HandlerId
    where
        F: FnMut(&Ctx) -> Listen + 'static,
    {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(Registered {
                id,
                handler: Box::new(handler),
            });
        id
    }

    /// Removes a handler. Returns `false` if it is not registered, including
    /// handlers that already detached.
    pub fn unregister(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        for list in handlers.values_mut() {
            if let Some(pos) = list.iter().position(|r| r.id == id) {
                list.remove(pos);
                return true;
            }
        }
        drop(handlers);
        if !self.in_flight.borrow_mut().remove(&id) {
            return false;
        }
        self.cancelled.borrow_mut().insert(id);
        true
    }

    /// Runs every handler for `event` in registration order and returns how
    /// many ran.
    pub fn emit(&self, event: &str, ctx: &Ctx) -> usize {
        let running = match self.handlers.borrow_mut().get_mut(event) {
            Some(list) => std::mem::take(list),
            None => return 0,
        };

        self.in_flight
            .borrow_mut()
            .extend(running.iter().map(|r| r.id));

        let mut fired = 0;
        let mut kept = Vec::with_capacity(running.len());
        for mut registered in running {
            if self.cancelled.borrow_mut().remove(&registered.id) {
                continue;
            }
            fired += 1;
            match (registered.handler)(ctx) {
                Listen::Keep => kept.push(registered),
                Listen::Detach => {
                    self.in_flight.borrow_mut().remove(&registered.id);
                    self.cancelled.borrow_mut().remove(&registered.id);
                    trace!(event, "handler detached");
                }
            }
        }
        kept.retain(|r| !self.cancelled.borrow_mut().remove(&r.id));
        {
            let mut in_flight = self.in_flight.borrow_mut();
            for r in &kept {
                in_flight.remove(&r.id);
            }
        }

        let mut handlers = self.handlers.borrow_mut();
        let list = handlers.entry(event.to_string()).or_default();
        // Anything registered during the emit was pushed onto the emptied
        // list; it runs after the survivors.
        kept.append(list);
        *list = kept;
        fired
    }

    /// Number of handlers currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.handlers.borrow().get(event).map_or(0, Vec::len)
    }
}

impl<Ctx> Default for EventBus<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}
