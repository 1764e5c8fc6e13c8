use thiserror::Error;

/// All errors that can occur in passbox.
#[derive(Debug, Error)]
pub enum PassboxError {
    // --- Envelope / format errors ---
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),

    // --- Crypto errors ---
    #[error("Decryption failed — incorrect password or corrupted data")]
    DecryptionFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Hex codec errors ---
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience type alias for passbox results.
pub type Result<T> = std::result::Result<T, PassboxError>;
