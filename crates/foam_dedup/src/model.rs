//! The host-facing view of a baked model.

use serde::{Deserialize, Serialize};

/// Raw packed vertex data of one quad, in host order.
pub type VertexData = Vec<i32>;

/// The closed set of faces a quad can be culled against.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Face {
    /// Negative Y.
    Down,
    /// Positive Y.
    Up,
    /// Negative Z.
    North,
    /// Positive Z.
    South,
    /// Negative X.
    West,
    /// Positive X.
    East,
}

impl Face {
    /// All faces in host declaration order.
    pub const ALL: [Face; 6] = [
        Face::Down,
        Face::Up,
        Face::North,
        Face::South,
        Face::West,
        Face::East,
    ];
}

/// An accessor on a host model was unavailable or failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("model accessor '{accessor}' failed: {reason}")]
pub struct AccessError {
    /// Accessor name, e.g. `getGeneralQuads`.
    pub accessor: &'static str,
    /// What went wrong.
    pub reason: String,
}

impl AccessError {
    /// Creates an access error for the named accessor.
    pub fn new(accessor: &'static str, reason: impl Into<String>) -> Self {
        Self {
            accessor,
            reason: reason.into(),
        }
    }
}

/// Accessors the host exposes on a baked model.
///
/// Every accessor may fail; a model whose accessors fail is treated as unique
/// and is never deduplicated.
pub trait BakedModel {
    /// Quads not bound to any face, in render order.
    fn general_quads(&self) -> Result<Vec<VertexData>, AccessError>;

    /// Face-bound quads grouped by face, in the host's iteration order.
    fn face_quads(&self) -> Result<Vec<(Face, Vec<VertexData>)>, AccessError>;

    /// Whether the model takes part in ambient occlusion.
    fn is_ambient_occlusion(&self) -> Result<bool, AccessError>;

    /// Whether the model renders in 3-D inside GUIs.
    fn is_gui_3d(&self) -> Result<bool, AccessError>;

    /// Whether the model is drawn by a custom renderer.
    fn is_built_in_renderer(&self) -> Result<bool, AccessError>;
}
