//! Canonical signatures of baked models.
//!
//! The signature is the bincode encoding of every rendering-relevant field in
//! a fixed layout: general quads, then face groups, then the flag triple.
//! Quad and face order is kept exactly as the host reports it, since draw
//! order is visible. Equality compares the full encoding; hashing uses a
//! precomputed XXH3-128 of it so map lookups stay cheap.

use std::hash::{Hash, Hasher};

use foam_common::ContentHash;
use serde::Serialize;

use crate::model::{AccessError, BakedModel, Face, VertexData};

/// A model that cannot be reduced to a signature.
///
/// Such models are treated as unique: never cached, never deduplicated.
#[derive(Debug, thiserror::Error)]
pub enum NotCanonicalizable {
    /// A host accessor was unavailable or failed.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The extracted fields could not be encoded.
    #[error("failed to encode model signature: {reason}")]
    Encode {
        /// Encoder error text.
        reason: String,
    },
}

/// Deterministic key of a baked model's rendering-relevant fields.
#[derive(Clone, Debug)]
pub struct Signature {
    hash: ContentHash,
    canonical: Box<[u8]>,
}

impl Signature {
    /// The XXH3-128 hash of the canonical encoding.
    pub fn content_hash(&self) -> ContentHash {
        self.hash
    }

    /// The canonical encoding itself.
    pub fn canonical(&self) -> &[u8] {
        &self.canonical
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.canonical == other.canonical
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

#[derive(Serialize)]
struct CanonicalModel {
    general: Vec<VertexData>,
    faces: Vec<(Face, Vec<VertexData>)>,
    ambient_occlusion: bool,
    gui_3d: bool,
    built_in_renderer: bool,
}

/// Computes the signature of `model`.
///
/// Pure: reads the model's accessors and nothing else.
pub fn signature<M: BakedModel + ?Sized>(model: &M) -> Result<Signature, NotCanonicalizable> {
    let canonical = CanonicalModel {
        general: model.general_quads()?,
        faces: model.face_quads()?,
        ambient_occlusion: model.is_ambient_occlusion()?,
        gui_3d: model.is_gui_3d()?,
        built_in_renderer: model.is_built_in_renderer()?,
    };
    let bytes = bincode::serde::encode_to_vec(&canonical, bincode::config::standard())
        .map_err(|e| NotCanonicalizable::Encode {
            reason: e.to_string(),
        })?;
    Ok(Signature {
        hash: ContentHash::from_bytes(&bytes),
        canonical: bytes.into_boxed_slice(),
    })
}
