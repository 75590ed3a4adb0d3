//! Shared foundational types used across the foamfix crates.
//!
//! This crate provides interned names for host types and operations, and the
//! 128-bit content hash used to key canonicalized artifacts.

#![warn(missing_docs)]

pub mod hash;
pub mod ident;

pub use hash::ContentHash;
pub use ident::{Ident, Interner};
