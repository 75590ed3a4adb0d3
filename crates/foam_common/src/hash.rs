//! Content hashing for artifact canonicalization.

use std::fmt;

/// A 128-bit content hash computed using XXH3.
///
/// Used as the fast bucket key for canonical artifact encodings. Equality of
/// two hashes is a strong hint, not a proof, that the hashed bytes are equal;
/// callers that need exact equality keep the bytes alongside.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = ContentHash::from_bytes(b"0,0,0,1,1");
        let b = ContentHash::from_bytes(b"0,0,0,1,1");
        assert_eq!(a, b);
    }

    #[test]
    fn single_byte_change_differs() {
        let a = ContentHash::from_bytes(b"0,0,0,1,1");
        let b = ContentHash::from_bytes(b"0,0,0,1,2");
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_hex() {
        let h = ContentHash::from_bytes(b"quad");
        let s = format!("{h}");
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn debug_abbreviated() {
        let s = format!("{:?}", ContentHash::from_bytes(b"quad"));
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with("..)"));
    }
}
