//! Password-based key derivation using PBKDF2-HMAC-SHA-256.
//!
//! The salt is generated here too, because the salt only exists to feed
//! the KDF.  Salts cross the API boundary as base64 text so they compose
//! directly into the JSON envelope.
//!
//! The default iteration count (10 000) is kept for compatibility with
//! envelopes written by older deployments and is low by current guidance.
//! Production deployments should raise it substantially via `KdfParams`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::Hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;

use crate::crypto::keys::{DerivedKey, KEY_LEN};
use crate::errors::{PassboxError, Result};

/// Default length of the salt in bytes (256 bits).
pub const DEFAULT_SALT_LEN: usize = 32;

/// Configurable PBKDF2 parameters.
#[derive(Debug, Clone, Copy)]
pub struct KdfParams {
    /// Number of PBKDF2 iterations (default: 10 000).
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self { iterations: 10_000 }
    }
}

/// Minimum allowed iteration count.  Below this the KDF degenerates into
/// a plain hash and offers no brute-force resistance.
const MIN_ITERATIONS: u32 = 1_000;

/// Minimum allowed salt length in bytes (RFC 8018 requires at least 8).
/// A degenerate salt would make identical passwords derive identical
/// keys across envelopes.
const MIN_SALT_LEN: usize = 8;

/// Generate a cryptographically random salt of the default length
/// (32 bytes), returned as base64 text.
pub fn generate_salt() -> String {
    BASE64.encode(fill_random(DEFAULT_SALT_LEN))
}

/// Generate a cryptographically random salt of `byte_count` bytes,
/// returned as base64 text.
///
/// Fails on a salt shorter than 8 bytes.
pub fn generate_salt_with_len(byte_count: usize) -> Result<String> {
    Ok(BASE64.encode(generate_salt_bytes(byte_count)?))
}

/// Generate `byte_count` random salt bytes, enforcing the minimum length.
pub(crate) fn generate_salt_bytes(byte_count: usize) -> Result<Vec<u8>> {
    if byte_count < MIN_SALT_LEN {
        return Err(PassboxError::KeyDerivationFailed(format!(
            "salt length must be at least {MIN_SALT_LEN} bytes (got {byte_count})"
        )));
    }
    Ok(fill_random(byte_count))
}

/// Fill `byte_count` bytes from the OS random source.
///
/// Randomness failure is fatal: if the OS random source cannot supply
/// bytes, this panics rather than returning a weak salt.
fn fill_random(byte_count: usize) -> Vec<u8> {
    let mut salt = vec![0u8; byte_count];
    OsRng
        .try_fill_bytes(&mut salt)
        .expect("OS random source unavailable");
    salt
}

/// Derive a 256-bit key from a password and a base64 salt using
/// PBKDF2-HMAC-SHA-256 with the default parameters.
///
/// Prefer `derive_key_with_params` when the caller needs a different
/// iteration count.
pub fn derive_key(password: &str, salt_b64: &str) -> Result<DerivedKey> {
    derive_key_with_params(password, salt_b64, &KdfParams::default())
}

/// Derive a 256-bit key with explicit PBKDF2 parameters.
///
/// The same (password, salt, params) triple always produces the same key;
/// the salt is the sole randomness input.  A salt that is not valid base64
/// is a decode error, not a cryptographic failure.
pub fn derive_key_with_params(
    password: &str,
    salt_b64: &str,
    params: &KdfParams,
) -> Result<DerivedKey> {
    let salt = BASE64
        .decode(salt_b64)
        .map_err(|e| PassboxError::InvalidEnvelope(format!("salt is not valid base64: {e}")))?;

    derive_key_raw(password, &salt, params)
}

/// Derive a key from raw salt bytes.  Used by the facade, which already
/// holds the decoded salt from the envelope.
pub(crate) fn derive_key_raw(
    password: &str,
    salt: &[u8],
    params: &KdfParams,
) -> Result<DerivedKey> {
    if params.iterations < MIN_ITERATIONS {
        return Err(PassboxError::KeyDerivationFailed(format!(
            "iterations must be at least {MIN_ITERATIONS} (got {})",
            params.iterations
        )));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, params.iterations, &mut key)
        .map_err(|e| PassboxError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(DerivedKey::from_bytes(key))
}
