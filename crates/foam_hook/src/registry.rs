//! The hook registry: native implementations and their installed replacements.
//!
//! Each operation owns one slot holding the currently active implementation.
//! Installing a replacement captures the previous implementation as an
//! [`Original`] and makes the replacement current. Dispatch clones the active
//! implementation out of the slot before running it, so implementations may
//! reenter the registry (invoke other operations, or the same one) freely.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use foam_common::Interner;
use tracing::debug;

use crate::error::{HookError, HookResult};
use crate::operation::{HostOperation, Operation};

type Implementation<Recv, Args, Out> = Rc<dyn Fn(&mut Recv, Args) -> HookResult<Out>>;

struct Slot<Recv, Args, Out> {
    current: Implementation<Recv, Args, Out>,
}

/// Handle to the implementation a replacement wraps.
///
/// A replacement may call it zero, one, or many times, with whatever
/// arguments it likes. Errors come back unchanged.
pub struct Original<Recv, Args, Out> {
    inner: Implementation<Recv, Args, Out>,
}

impl<Recv, Args, Out> Original<Recv, Args, Out> {
    /// Invokes the wrapped implementation.
    pub fn call(&self, recv: &mut Recv, args: Args) -> HookResult<Out> {
        (self.inner)(recv, args)
    }
}

impl<Recv, Args, Out> Clone for Original<Recv, Args, Out> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Registry of hookable host operations.
///
/// The host registers a native implementation per operation and dispatches
/// through [`invoke`](Self::invoke). Installers layer replacements on top.
/// The registry is single-threaded, matching the host's logic thread.
pub struct HookRegistry {
    interner: Interner,
    slots: RefCell<HashMap<HostOperation, Box<dyn Any>>>,
    /// Number of replacements layered over each native implementation.
    depths: RefCell<HashMap<HostOperation, usize>>,
}

impl HookRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            interner: Interner::new(),
            slots: RefCell::new(HashMap::new()),
            depths: RefCell::new(HashMap::new()),
        }
    }

    /// The interner used for operation names.
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Returns a typed handle to the constructor of `owner`.
    pub fn constructor<Args, Out>(&self, owner: &str) -> Operation<(), Args, Out> {
        let owner = self.interner.get_or_intern(owner);
        Operation::new(HostOperation::construct(owner))
    }

    /// Returns a typed handle to the method `name` on `owner`.
    pub fn method<Recv, Args, Out>(&self, owner: &str, name: &str) -> Operation<Recv, Args, Out> {
        let owner = self.interner.get_or_intern(owner);
        let name = self.interner.get_or_intern(name);
        Operation::new(HostOperation::method(owner, name))
    }

    /// Renders an operation name for errors and logs.
    pub fn describe(&self, id: HostOperation) -> String {
        id.describe(&self.interner)
    }

    /// Registers the host's native implementation of an operation.
    pub fn register_native<Recv, Args, Out, F>(
        &self,
        op: &Operation<Recv, Args, Out>,
        native: F,
    ) -> HookResult<()>
    where
        Recv: 'static,
        Args: 'static,
        Out: 'static,
        F: Fn(&mut Recv, Args) -> HookResult<Out> + 'static,
    {
        let mut slots = self.slots.borrow_mut();
        if slots.contains_key(&op.id()) {
            return Err(HookError::DuplicateNative {
                operation: self.describe(op.id()),
            });
        }
        let slot = Slot {
            current: Rc::new(native) as Implementation<Recv, Args, Out>,
        };
        slots.insert(op.id(), Box::new(slot));
        Ok(())
    }

    /// Installs the first replacement for an operation.
    ///
    /// Fails with [`HookError::InstallConflict`] if a replacement is already
    /// present; use [`compose`](Self::compose) to layer on purpose.
    pub fn install<Recv, Args, Out, F>(
        &self,
        op: &Operation<Recv, Args, Out>,
        replacement: F,
    ) -> HookResult<()>
    where
        Recv: 'static,
        Args: 'static,
        Out: 'static,
        F: Fn(&mut Recv, Args, &Original<Recv, Args, Out>) -> HookResult<Out> + 'static,
    {
        self.wrap(op, replacement, false)
    }

    /// Installs a replacement that wraps whatever is currently active,
    /// including earlier replacements.
    pub fn compose<Recv, Args, Out, F>(
        &self,
        op: &Operation<Recv, Args, Out>,
        replacement: F,
    ) -> HookResult<()>
    where
        Recv: 'static,
        Args: 'static,
        Out: 'static,
        F: Fn(&mut Recv, Args, &Original<Recv, Args, Out>) -> HookResult<Out> + 'static,
    {
        self.wrap(op, replacement, true)
    }

    fn wrap<Recv, Args, Out, F>(
        &self,
        op: &Operation<Recv, Args, Out>,
        replacement: F,
        allow_layering: bool,
    ) -> HookResult<()>
    where
        Recv: 'static,
        Args: 'static,
        Out: 'static,
        F: Fn(&mut Recv, Args, &Original<Recv, Args, Out>) -> HookResult<Out> + 'static,
    {
        let mut slots = self.slots.borrow_mut();
        let slot = Self::slot_mut(&mut slots, op, &self.interner)?;
        let mut depths = self.depths.borrow_mut();
        let depth = depths.entry(op.id()).or_insert(0);
        if *depth > 0 && !allow_layering {
            return Err(HookError::InstallConflict {
                operation: self.describe(op.id()),
            });
        }

        let previous = Original {
            inner: Rc::clone(&slot.current),
        };
        slot.current = Rc::new(move |recv: &mut Recv, args: Args| {
            replacement(recv, args, &previous)
        }) as Implementation<Recv, Args, Out>;
        *depth += 1;
        debug!(
            operation = %op.id().describe(&self.interner),
            depth = *depth,
            "installed replacement"
        );
        Ok(())
    }

    /// Dispatches an operation through its active implementation.
    pub fn invoke<Recv, Args, Out>(
        &self,
        op: &Operation<Recv, Args, Out>,
        recv: &mut Recv,
        args: Args,
    ) -> HookResult<Out>
    where
        Recv: 'static,
        Args: 'static,
        Out: 'static,
    {
        let current = {
            let mut slots = self.slots.borrow_mut();
            let slot = Self::slot_mut(&mut slots, op, &self.interner)?;
            Rc::clone(&slot.current)
        };
        current(recv, args)
    }

    /// Dispatches a constructor.
    pub fn construct<Args, Out>(&self, op: &Operation<(), Args, Out>, args: Args) -> HookResult<Out>
    where
        Args: 'static,
        Out: 'static,
    {
        self.invoke(op, &mut (), args)
    }

    /// Returns `true` if at least one replacement is installed on `id`.
    pub fn is_hooked(&self, id: HostOperation) -> bool {
        self.installed_depth(id) > 0
    }

    /// Number of replacements layered on `id`, or 0 if it is unknown.
    pub fn installed_depth(&self, id: HostOperation) -> usize {
        self.depths.borrow().get(&id).copied().unwrap_or(0)
    }

    fn slot_mut<'s, Recv, Args, Out>(
        slots: &'s mut HashMap<HostOperation, Box<dyn Any>>,
        op: &Operation<Recv, Args, Out>,
        interner: &Interner,
    ) -> HookResult<&'s mut Slot<Recv, Args, Out>>
    where
        Recv: 'static,
        Args: 'static,
        Out: 'static,
    {
        let entry = slots.get_mut(&op.id()).ok_or_else(|| HookError::NotRegistered {
            operation: op.id().describe(interner),
        })?;
        entry
            .downcast_mut::<Slot<Recv, Args, Out>>()
            .ok_or_else(|| HookError::SignatureMismatch {
                operation: op.id().describe(interner),
            })
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
