//! The self-describing ciphertext envelope and its JSON codec.
//!
//! An envelope is a flat JSON object:
//!
//! ```text
//! { "data": <base64>, "iv": <base64>, "salt": <base64, optional> }
//! ```
//!
//! - **data**: AES-256-GCM ciphertext with the auth tag appended.
//! - **iv**: the nonce used for that encryption.
//! - **salt**: the KDF salt; present whenever the envelope was produced
//!   by the password-based facade, absent for the key-level API (where
//!   the caller manages the key and no salt exists).
//!
//! Unknown fields are ignored on decode, so newer writers can add fields
//! without breaking older readers.  Any missing required field or invalid
//! base64 is rejected here, before any cryptographic work happens.

use serde::{Deserialize, Serialize};

use crate::errors::{PassboxError, Result};

/// The unit that crosses a storage or transport boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Ciphertext with the 16-byte auth tag appended (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub data: Vec<u8>,

    /// The nonce used for this encryption (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub iv: Vec<u8>,

    /// The KDF salt, if the password-based facade produced this envelope.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "base64_encode_opt",
        deserialize_with = "base64_decode_opt"
    )]
    pub salt: Option<Vec<u8>>,
}

impl Envelope {
    /// Serialize the envelope to its JSON text form.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| PassboxError::SerializationError(format!("envelope: {e}")))
    }

    /// Parse envelope text.
    ///
    /// Fails with `InvalidEnvelope` if the text is not a JSON object, if
    /// `data` or `iv` is missing, or if any field is not valid base64.
    pub fn decode(text: &str) -> Result<Envelope> {
        serde_json::from_str(text).map_err(|e| PassboxError::InvalidEnvelope(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded byte fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&BASE64.encode(data))
}

fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}

fn base64_encode_opt<S>(
    data: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    // skip_serializing_if guarantees Some here.
    match data {
        Some(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
        None => serializer.serialize_none(),
    }
}

fn base64_decode_opt<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<u8>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => BASE64.decode(&s).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
