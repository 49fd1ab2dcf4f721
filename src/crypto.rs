//! Cryptographic primitives for the user service
//!
//! Password digests are plain unsalted SHA-256. That is fast and deterministic
//! and unsuitable for a hardened deployment; swapping in a salted, adaptive KDF
//! changes stored digests and is deliberately not done here.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Compute SHA256 hash of data (hex encoded)
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Credential hasher: password -> 64 char lowercase hex digest
pub fn hash_password(password: &str) -> String {
    sha256_hex(password.as_bytes())
}

/// Check a password against a stored digest by re-hashing it
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}

/// HMAC-SHA256 tag over `parts`, fed to the MAC in order
pub fn hmac_tag(key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
    let mut mac = new_mac(key);
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time check of `tag` against the HMAC of `parts`
pub fn hmac_verify(key: &[u8], parts: &[&[u8]], tag: &[u8]) -> bool {
    let mut mac = new_mac(key);
    for part in parts {
        mac.update(part);
    }
    mac.verify_slice(tag).is_ok()
}

fn new_mac(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC can accept any key length")
}
