//! Names and typed handles for host operations.

use std::fmt;
use std::marker::PhantomData;

use foam_common::{Ident, Interner};

/// What kind of entry point an operation is on its owning host type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OperationKind {
    /// The type's constructor.
    Construct,
    /// A named method on the type.
    Method(Ident),
}

/// Identifies one operation on a host type, e.g. "construct T" or "call T.m".
///
/// Owned by the host; the fabric only uses it as a registry key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HostOperation {
    /// The host type that owns the operation.
    pub owner: Ident,
    /// Constructor or method.
    pub kind: OperationKind,
}

impl HostOperation {
    /// The constructor of `owner`.
    pub fn construct(owner: Ident) -> Self {
        Self {
            owner,
            kind: OperationKind::Construct,
        }
    }

    /// The method `name` on `owner`.
    pub fn method(owner: Ident, name: Ident) -> Self {
        Self {
            owner,
            kind: OperationKind::Method(name),
        }
    }

    /// Renders the operation with its interned names resolved.
    pub fn describe(&self, interner: &Interner) -> String {
        let owner = interner.try_resolve(self.owner).unwrap_or("<unknown>");
        match self.kind {
            OperationKind::Construct => format!("new {owner}"),
            OperationKind::Method(name) => {
                let name = interner.try_resolve(name).unwrap_or("<unknown>");
                format!("{owner}.{name}")
            }
        }
    }
}

/// A typed handle to a [`HostOperation`].
///
/// `Recv` is the receiver the host passes (`()` for constructors), `Args` the
/// argument bundle and `Out` the return type. The handle carries no state, so
/// it is `Copy` regardless of its type parameters.
pub struct Operation<Recv, Args, Out> {
    id: HostOperation,
    _marker: PhantomData<fn(&mut Recv, Args) -> Out>,
}

impl<Recv, Args, Out> Operation<Recv, Args, Out> {
    /// Wraps a raw operation id in a typed handle.
    pub fn new(id: HostOperation) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// The untyped operation id.
    pub fn id(&self) -> HostOperation {
        self.id
    }
}

impl<Recv, Args, Out> Clone for Operation<Recv, Args, Out> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Recv, Args, Out> Copy for Operation<Recv, Args, Out> {}

impl<Recv, Args, Out> fmt::Debug for Operation<Recv, Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Operation").field(&self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_method() {
        let interner = Interner::new();
        let owner = interner.get_or_intern("ClassInheritanceMultiMap");
        let name = interner.get_or_intern("getByClass");
        let op = HostOperation::method(owner, name);
        assert_eq!(op.describe(&interner), "ClassInheritanceMultiMap.getByClass");
    }

    #[test]
    fn describe_constructor() {
        let interner = Interner::new();
        let owner = interner.get_or_intern("ClassInheritanceMultiMap");
        let op = HostOperation::construct(owner);
        assert_eq!(op.describe(&interner), "new ClassInheritanceMultiMap");
    }

    #[test]
    fn describe_foreign_ident() {
        let other = Interner::new();
        let op = HostOperation::construct(other.get_or_intern("EntityTracker"));
        let interner = Interner::new();
        assert_eq!(op.describe(&interner), "new <unknown>");
    }

    #[test]
    fn methods_on_same_owner_differ() {
        let interner = Interner::new();
        let owner = interner.get_or_intern("ClassInheritanceMultiMap");
        let add = HostOperation::method(owner, interner.get_or_intern("add"));
        let remove = HostOperation::method(owner, interner.get_or_intern("remove"));
        assert_ne!(add, remove);
        assert_ne!(add, HostOperation::construct(owner));
    }

    #[test]
    fn typed_handle_is_copy() {
        struct NotCopy;
        let interner = Interner::new();
        let owner = interner.get_or_intern("ClassInheritanceMultiMap");
        let op: Operation<NotCopy, NotCopy, NotCopy> =
            Operation::new(HostOperation::construct(owner));
        let copy = op;
        assert_eq!(op.id(), copy.id());
    }
}
