//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt_bytes` generates a fresh random nonce and returns
//! it alongside the ciphertext; the envelope stores the two in separate
//! fields (`data` and `iv`).  The 16-byte authentication tag is appended
//! to the ciphertext by the AEAD primitive itself, so `data` is always
//! ciphertext ‖ tag.
//!
//! Nonce length: the original wire format uses a 16-byte nonce, while the
//! GCM standard recommends 12 bytes (96 bits).  The default stays at 16
//! for compatibility with existing envelopes; `NonceLength::Standard`
//! selects the recommended 12-byte nonce.  Decryption accepts either by
//! inspecting the stored nonce.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit, Nonce, OsRng};
use aes_gcm::aes::Aes256;
use aes_gcm::{Aes256Gcm, AesGcm};

use crate::crypto::keys::DerivedKey;
use crate::errors::{PassboxError, Result};

/// AES-256-GCM instantiated with the legacy 16-byte nonce.
type Aes256GcmLegacy = AesGcm<Aes256, U16>;

/// Nonce length used when encrypting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonceLength {
    /// 12 bytes (96 bits), the GCM-recommended and interoperable choice.
    Standard,
    /// 16 bytes, matching envelopes written by the original implementation.
    #[default]
    Legacy,
}

impl NonceLength {
    /// Nonce size in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            NonceLength::Standard => 12,
            NonceLength::Legacy => 16,
        }
    }
}

/// Encrypt `plaintext` under `key` with the default (legacy 16-byte) nonce.
///
/// Returns `(ciphertext ‖ tag, nonce)`; both are non-secret and travel
/// with the envelope.
pub fn encrypt_bytes(key: &DerivedKey, plaintext: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    encrypt_bytes_with_nonce_len(key, plaintext, NonceLength::default())
}

/// Encrypt `plaintext` under `key` with an explicit nonce length.
pub fn encrypt_bytes_with_nonce_len(
    key: &DerivedKey,
    plaintext: &[u8],
    nonce_len: NonceLength,
) -> Result<(Vec<u8>, Vec<u8>)> {
    match nonce_len {
        NonceLength::Standard => seal::<Aes256Gcm>(key, plaintext),
        NonceLength::Legacy => seal::<Aes256GcmLegacy>(key, plaintext),
    }
}

/// Decrypt data produced by `encrypt_bytes`.
///
/// The GCM instantiation is chosen from the nonce length (12 or 16 bytes).
/// Tag verification happens before any plaintext is released; a wrong key,
/// a wrong nonce, and a corrupted ciphertext are indistinguishable here
/// and all surface as the same failure.
pub fn decrypt_bytes(key: &DerivedKey, ciphertext: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
    match nonce.len() {
        12 => open::<Aes256Gcm>(key, ciphertext, nonce),
        16 => open::<Aes256GcmLegacy>(key, ciphertext, nonce),
        _ => Err(PassboxError::DecryptionFailed),
    }
}

fn seal<C>(key: &DerivedKey, plaintext: &[u8]) -> Result<(Vec<u8>, Vec<u8>)>
where
    C: Aead + KeyInit,
{
    // Build the cipher from the raw key bytes.
    let cipher = C::new_from_slice(key.as_bytes())
        .map_err(|e| PassboxError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Generate a random nonce of the cipher's nonce size.
    let nonce = C::generate_nonce(&mut OsRng);

    // Encrypt and authenticate the plaintext.
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassboxError::EncryptionFailed(format!("encryption error: {e}")))?;

    Ok((ciphertext, nonce.to_vec()))
}

fn open<C>(key: &DerivedKey, ciphertext: &[u8], nonce: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new_from_slice(key.as_bytes()).map_err(|_| PassboxError::DecryptionFailed)?;

    // Length was checked by the caller, so from_slice cannot panic.
    let nonce = Nonce::<C>::from_slice(nonce);

    // Decrypt and verify the auth tag.
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassboxError::DecryptionFailed)
}
