//! Invalidation-coupled lookup caches for mutable host collections.
//!
//! Each collection instance gets a memo table, held in a side table keyed by
//! the instance's identity. Mutators clear the table before delegating;
//! queries are answered from it or delegated and memoized. Instances built
//! before the cache was installed have no table and always delegate.

#![warn(missing_docs)]

pub mod cache;
pub mod hook;
pub mod instance;
pub mod table;

pub use cache::{CacheState, LookupCache};
pub use hook::{install_construct, install_invalidation, install_query, install_release};
pub use instance::{HostInstance, InstanceId};
pub use table::LookupCaches;
