//! Interception fabric for host runtime operations.
//!
//! A host exposes its constructors and methods as named operations in a
//! [`HookRegistry`]. Installers wrap those operations with replacements that
//! receive an [`Original`] handle to whatever implementation was active
//! before them, so caching layers can serve, delegate, or short-circuit.
//!
//! The crate also carries the host's named event bus ([`EventBus`]), which
//! one-shot observers use to wait for lifecycle conditions.

#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod operation;
pub mod registry;

pub use error::{HookError, HookResult};
pub use events::{EventBus, HandlerId, Listen};
pub use operation::{HostOperation, Operation, OperationKind};
pub use registry::{HookRegistry, Original};
