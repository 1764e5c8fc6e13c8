//! The derived-key handle.
//!
//! A `DerivedKey` wraps the 32 bytes produced by PBKDF2 and keeps them
//! crate-private: the key can be used for encryption and decryption but
//! never exported, serialized, or logged.  Memory is zeroed on drop.

use zeroize::ZeroizeOnDrop;

/// Length of a derived key in bytes (256 bits).
pub(crate) const KEY_LEN: usize = 32;

/// A 256-bit symmetric key derived from a password and salt.
///
/// The raw bytes are deliberately inaccessible outside the crate; the only
/// thing a `DerivedKey` is good for is passing to the encrypt/decrypt
/// operations.  Dropping the handle zeroes the key material.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes produced by the KDF.
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes for an immediate cipher operation.
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
