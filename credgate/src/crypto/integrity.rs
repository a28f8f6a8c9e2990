//! Fingerprints for identifying a hashed credential in logs without printing
//! the hash itself.

use sha2::{Digest, Sha256};

/// Hex characters kept from the digest.
const FINGERPRINT_LEN: usize = 12;

pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Short SHA-256 fingerprint of an encoded password hash.
pub fn fingerprint(encoded_hash: &str) -> String {
    let mut hex = hex::encode(sha256_digest(encoded_hash.as_bytes()));
    hex.truncate(FINGERPRINT_LEN);
    hex
}
