//! Password-based authenticated encryption envelopes.
//!
//! `encrypt` turns a password and any serializable value into a portable
//! JSON blob (`{data, iv, salt}`); `decrypt` recovers the value with the
//! same password and fails with a single incorrect-password error on a
//! wrong password or a tampered blob.
//!
//! ```
//! let blob = passbox::encrypt("hunter2", &serde_json::json!({"a": 1}))?;
//! let value: serde_json::Value = passbox::decrypt("hunter2", &blob)?;
//! assert_eq!(value["a"], 1);
//! # Ok::<(), passbox::PassboxError>(())
//! ```
//!
//! Callers encrypting many values under one password can derive a key
//! once with `derive_key` and use `encrypt_with_key`/`decrypt_with_key`.

pub mod crypto;
pub mod envelope;
pub mod errors;
pub mod hex;
pub mod seal;

// Re-export the public API at the crate root so callers can write
//   passbox::encrypt(...) / passbox::hex_to_bytes(...)
// without caring about the module layout.
pub use crypto::{
    derive_key, derive_key_with_params, generate_salt, generate_salt_with_len, DerivedKey,
    KdfParams, NonceLength,
};
pub use envelope::Envelope;
pub use errors::{PassboxError, Result};
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use seal::{
    decrypt, decrypt_with_key, decrypt_with_params, encrypt, encrypt_with_key,
    encrypt_with_options, SealOptions,
};
