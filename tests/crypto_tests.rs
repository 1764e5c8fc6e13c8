//! Integration tests for the passbox crypto module.

use passbox::crypto::{
    decrypt_bytes, derive_key, derive_key_with_params, encrypt_bytes,
    encrypt_bytes_with_nonce_len, generate_salt, generate_salt_with_len, KdfParams, NonceLength,
};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let salt = generate_salt();
    let key = derive_key("test-password", &salt).expect("derive");
    let plaintext = b"the quick brown fox";

    let (ciphertext, nonce) = encrypt_bytes(&key, plaintext).expect("encrypt should succeed");

    // Ciphertext must carry the 16-byte auth tag.
    assert_eq!(ciphertext.len(), plaintext.len() + 16);

    let recovered = decrypt_bytes(&key, &ciphertext, &nonce).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn encrypt_produces_different_ciphertext_each_time() {
    let salt = generate_salt();
    let key = derive_key("test-password", &salt).expect("derive");
    let plaintext = b"same plaintext";

    let (ct1, nonce1) = encrypt_bytes(&key, plaintext).expect("encrypt 1");
    let (ct2, nonce2) = encrypt_bytes(&key, plaintext).expect("encrypt 2");

    // Because each call generates a new random nonce, the output must differ.
    assert_ne!(nonce1, nonce2, "nonces must differ between calls");
    assert_ne!(ct1, ct2, "two encryptions of the same plaintext must differ");
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let salt = generate_salt();
    let key = derive_key("right-password", &salt).expect("derive");
    let wrong_key = derive_key("wrong-password", &salt).expect("derive");

    let (ciphertext, nonce) = encrypt_bytes(&key, b"secret").expect("encrypt");
    let result = decrypt_bytes(&wrong_key, &ciphertext, &nonce);

    assert!(result.is_err(), "decryption with the wrong key must fail");
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let salt = generate_salt();
    let key = derive_key("pw", &salt).expect("derive");

    let (mut ciphertext, nonce) = encrypt_bytes(&key, b"payload").expect("encrypt");
    ciphertext[0] ^= 0xFF;

    let result = decrypt_bytes(&key, &ciphertext, &nonce);
    assert!(result.is_err(), "corrupted ciphertext must fail auth check");
}

#[test]
fn decrypt_with_corrupted_nonce_fails() {
    let salt = generate_salt();
    let key = derive_key("pw", &salt).expect("derive");

    let (ciphertext, mut nonce) = encrypt_bytes(&key, b"payload").expect("encrypt");
    nonce[0] ^= 0x01;

    let result = decrypt_bytes(&key, &ciphertext, &nonce);
    assert!(result.is_err(), "corrupted nonce must fail auth check");
}

#[test]
fn standard_nonce_roundtrip() {
    let salt = generate_salt();
    let key = derive_key("pw", &salt).expect("derive");

    let (ciphertext, nonce) =
        encrypt_bytes_with_nonce_len(&key, b"payload", NonceLength::Standard).expect("encrypt");
    assert_eq!(nonce.len(), 12);

    let recovered = decrypt_bytes(&key, &ciphertext, &nonce).expect("decrypt");
    assert_eq!(recovered, b"payload");
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA-256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_is_deterministic() {
    let salt = generate_salt();

    let key1 = derive_key("my-secure-passphrase", &salt).expect("derive 1");
    let key2 = derive_key("my-secure-passphrase", &salt).expect("derive 2");

    // The key bytes are not exposed, so prove equality through the cipher:
    // data encrypted under key1 must decrypt under key2.
    let (ciphertext, nonce) = encrypt_bytes(&key1, b"probe").expect("encrypt");
    let recovered = decrypt_bytes(&key2, &ciphertext, &nonce).expect("decrypt");
    assert_eq!(recovered, b"probe");
}

#[test]
fn different_salts_produce_different_keys() {
    let salt1 = generate_salt();
    let salt2 = generate_salt();

    let key1 = derive_key("same-password", &salt1).expect("derive 1");
    let key2 = derive_key("same-password", &salt2).expect("derive 2");

    let (ciphertext, nonce) = encrypt_bytes(&key1, b"probe").expect("encrypt");
    assert!(
        decrypt_bytes(&key2, &ciphertext, &nonce).is_err(),
        "different salts must produce different keys"
    );
}

#[test]
fn different_passwords_produce_different_keys() {
    let salt = generate_salt();

    let key1 = derive_key("password-one", &salt).expect("derive 1");
    let key2 = derive_key("password-two", &salt).expect("derive 2");

    let (ciphertext, nonce) = encrypt_bytes(&key1, b"probe").expect("encrypt");
    assert!(
        decrypt_bytes(&key2, &ciphertext, &nonce).is_err(),
        "different passwords must produce different keys"
    );
}

#[test]
fn custom_iteration_count_is_honored() {
    let salt = generate_salt();
    let params = KdfParams { iterations: 50_000 };

    let key_custom = derive_key_with_params("pw", &salt, &params).expect("derive custom");
    let key_default = derive_key("pw", &salt).expect("derive default");

    let (ciphertext, nonce) = encrypt_bytes(&key_custom, b"probe").expect("encrypt");
    assert!(
        decrypt_bytes(&key_default, &ciphertext, &nonce).is_err(),
        "different iteration counts must produce different keys"
    );

    let recovered = decrypt_bytes(
        &derive_key_with_params("pw", &salt, &params).expect("re-derive"),
        &ciphertext,
        &nonce,
    )
    .expect("decrypt");
    assert_eq!(recovered, b"probe");
}

// ---------------------------------------------------------------------------
// Salt generation
// ---------------------------------------------------------------------------

#[test]
fn generated_salts_are_unique() {
    let salt1 = generate_salt();
    let salt2 = generate_salt();
    assert_ne!(salt1, salt2, "two salts must never collide");
}

#[test]
fn salt_length_is_exact() {
    let raw = BASE64
        .decode(generate_salt_with_len(48).expect("valid length"))
        .expect("valid base64");
    assert_eq!(raw.len(), 48);

    let raw_default = BASE64.decode(generate_salt()).expect("valid base64");
    assert_eq!(raw_default.len(), 32);
}

#[test]
fn zero_length_salt_is_rejected() {
    assert!(
        generate_salt_with_len(0).is_err(),
        "an empty salt would defeat per-envelope key uniqueness"
    );
}
