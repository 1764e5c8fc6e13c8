//! The password facade and the key-level value API.
//!
//! `encrypt`/`decrypt` are the common path: one password in, one envelope
//! blob out, with a fresh salt and key derivation per call.  Callers that
//! encrypt many values under one password should derive a key once with
//! `crypto::derive_key` and use `encrypt_with_key`/`decrypt_with_key`
//! instead, paying the KDF cost a single time.
//!
//! Every operation is a pure function over its inputs plus fresh OS
//! randomness; nothing is cached or shared between calls, so they can run
//! concurrently without coordination.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::crypto::aead::{decrypt_bytes, encrypt_bytes, encrypt_bytes_with_nonce_len};
use crate::crypto::kdf::{derive_key_raw, generate_salt_bytes, KdfParams, DEFAULT_SALT_LEN};
use crate::crypto::keys::DerivedKey;
use crate::crypto::NonceLength;
use crate::envelope::Envelope;
use crate::errors::{PassboxError, Result};

/// Knobs for the password-based encrypt path.
///
/// The defaults match the original wire format (32-byte salt, 10 000
/// PBKDF2 iterations, 16-byte nonce).  Envelopes written with different
/// nonce lengths decrypt transparently; a different iteration count must
/// be passed to `decrypt_with_params` as well, since it is not recorded
/// in the envelope.
#[derive(Debug, Clone, Copy)]
pub struct SealOptions {
    /// Salt length in bytes (default: 32).
    pub salt_len: usize,
    /// PBKDF2 parameters (default: 10 000 iterations).
    pub kdf: KdfParams,
    /// Nonce length (default: the legacy 16 bytes).
    pub nonce_len: NonceLength,
}

impl Default for SealOptions {
    fn default() -> Self {
        Self {
            salt_len: DEFAULT_SALT_LEN,
            kdf: KdfParams::default(),
            nonce_len: NonceLength::default(),
        }
    }
}

/// Encrypt `value` under `password`, returning the envelope JSON text.
///
/// Pipeline: fresh salt → PBKDF2 key → serialize value → AES-256-GCM →
/// envelope with the salt attached.
pub fn encrypt<T: Serialize>(password: &str, value: &T) -> Result<String> {
    encrypt_with_options(password, value, &SealOptions::default())
}

/// Encrypt `value` under `password` with explicit options.
pub fn encrypt_with_options<T: Serialize>(
    password: &str,
    value: &T,
    options: &SealOptions,
) -> Result<String> {
    let salt = generate_salt_bytes(options.salt_len)?;
    let key = derive_key_raw(password, &salt, &options.kdf)?;

    let plaintext = to_bytes(value)?;
    let (data, iv) = encrypt_bytes_with_nonce_len(&key, &plaintext, options.nonce_len)?;

    let envelope = Envelope {
        data,
        iv,
        salt: Some(salt),
    };
    envelope.encode()
}

/// Decrypt envelope text produced by `encrypt`, recovering the value.
///
/// A wrong password and a tampered envelope are deliberately
/// indistinguishable: both fail with the same incorrect-password error.
pub fn decrypt<T: DeserializeOwned>(password: &str, envelope_text: &str) -> Result<T> {
    decrypt_with_params(password, envelope_text, &KdfParams::default())
}

/// Decrypt with the PBKDF2 parameters the envelope was encrypted with.
pub fn decrypt_with_params<T: DeserializeOwned>(
    password: &str,
    envelope_text: &str,
    params: &KdfParams,
) -> Result<T> {
    let envelope = Envelope::decode(envelope_text)?;

    // The password path requires the salt; without it the key cannot be
    // re-derived.  This is a format error, not an authentication failure.
    let salt = envelope
        .salt
        .as_deref()
        .ok_or_else(|| PassboxError::InvalidEnvelope("missing salt field".into()))?;

    let key = derive_key_raw(password, salt, params)?;
    let plaintext = decrypt_bytes(&key, &envelope.data, &envelope.iv)?;
    from_bytes(&plaintext)
}

/// Encrypt `value` under an already-derived key.
///
/// The returned envelope carries no salt: the caller owns the key and is
/// responsible for keeping whatever it needs to re-derive it.
pub fn encrypt_with_key<T: Serialize>(key: &DerivedKey, value: &T) -> Result<Envelope> {
    let plaintext = to_bytes(value)?;
    let (data, iv) = encrypt_bytes(key, &plaintext)?;
    Ok(Envelope {
        data,
        iv,
        salt: None,
    })
}

/// Decrypt an envelope under an already-derived key.
pub fn decrypt_with_key<T: DeserializeOwned>(key: &DerivedKey, envelope: &Envelope) -> Result<T> {
    let plaintext = decrypt_bytes(key, &envelope.data, &envelope.iv)?;
    from_bytes(&plaintext)
}

/// Serialize the plaintext value to bytes.  The cryptographic core only
/// ever sees the byte form.
fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| PassboxError::SerializationError(format!("value: {e}")))
}

fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| PassboxError::SerializationError(format!("value: {e}")))
}
