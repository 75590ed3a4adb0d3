//! Content-addressed deduplication of baked models.
//!
//! Every baked model is reduced to a [`Signature`] covering its
//! rendering-relevant fields. The first model seen for a signature becomes the
//! canonical instance; later bakes that produce an equal model are answered
//! with that instance and the duplicate is dropped. The store is grow-only and
//! lives for the whole process.

#![warn(missing_docs)]

pub mod hook;
pub mod model;
pub mod report;
pub mod signature;
pub mod store;

pub use hook::install_bake_dedup;
pub use model::{AccessError, BakedModel, Face, VertexData};
pub use report::{register_report, ReportHandle, TickReadiness};
pub use signature::{signature, NotCanonicalizable, Signature};
pub use store::{DedupCache, DedupCounter};
