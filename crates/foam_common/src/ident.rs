//! Interned names for host types and operations.

use lasso::ThreadedRodeo;

/// An interned host name such as `net.minecraft.util.ClassInheritanceMultiMap`
/// or a method name like `getByClass`.
///
/// Represented as a `u32` index into an [`Interner`], giving O(1) equality and
/// hashing when used as a registry key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Ident(u32);

// SAFETY: `Ident` wraps a `u32`, which always fits in `usize` on supported
// platforms. `try_from_usize` rejects values that don't fit in `u32`.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// String interner backed by [`lasso::ThreadedRodeo`].
///
/// Interning takes `&self`, so one interner can be shared by the hook
/// registry and every installer without threading `&mut` through them.
pub struct Interner {
    rodeo: ThreadedRodeo<Ident>,
}

impl Interner {
    /// Creates a new empty interner.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Interns a string, returning the existing [`Ident`] if already present.
    pub fn get_or_intern(&self, s: &str) -> Ident {
        self.rodeo.get_or_intern(s)
    }

    /// Resolves an [`Ident`], returning `None` for foreign identifiers.
    pub fn try_resolve(&self, ident: Ident) -> Option<&str> {
        self.rodeo.try_resolve(&ident)
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_resolve_roundtrip() {
        let interner = Interner::new();
        let id = interner.get_or_intern("getByClass");
        assert_eq!(interner.try_resolve(id), Some("getByClass"));
    }

    #[test]
    fn same_string_same_ident() {
        let interner = Interner::new();
        let a = interner.get_or_intern("bakeModel");
        let b = interner.get_or_intern("bakeModel");
        assert_eq!(a, b);
    }

    #[test]
    fn different_strings_different_idents() {
        let interner = Interner::new();
        assert_ne!(interner.get_or_intern("add"), interner.get_or_intern("remove"));
    }

    #[test]
    fn try_resolve_unknown_is_none() {
        let other = Interner::new();
        other.get_or_intern("add");
        let foreign = other.get_or_intern("remove");
        assert!(Interner::new().try_resolve(foreign).is_none());
    }
}
