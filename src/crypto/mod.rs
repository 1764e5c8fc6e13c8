//! Cryptographic primitives for passbox.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption over raw bytes (`aead`)
//! - PBKDF2-HMAC-SHA-256 password-based key derivation and salt
//!   generation (`kdf`)
//! - The opaque, zeroized derived-key handle (`keys`)

pub mod aead;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use passbox::crypto::{derive_key, generate_salt, ...};
pub use aead::{decrypt_bytes, encrypt_bytes, encrypt_bytes_with_nonce_len, NonceLength};
pub use kdf::{
    derive_key, derive_key_with_params, generate_salt, generate_salt_with_len, KdfParams,
    DEFAULT_SALT_LEN,
};
pub use keys::DerivedKey;
