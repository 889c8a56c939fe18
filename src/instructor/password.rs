//! Salted password digests.
//!
//! The stored shape is `{"Salt": <hex>, "Hash": <hex>}` where the hash is
//! `sha256(salt_hex_bytes || password_bytes)`. Existing instructor stores
//! use this exact layout, so it stays even though it is a single round.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Random salt length in bytes, before hex encoding.
const SALT_LEN: usize = 10;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    #[serde(rename = "Salt")]
    pub salt: String,
    #[serde(rename = "Hash")]
    pub hash: String,
}

impl std::fmt::Debug for PasswordRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordRecord")
            .field("salt", &self.salt)
            .field("hash", &"<redacted>")
            .finish()
    }
}

impl PasswordRecord {
    /// Hash `password` under a fresh random salt.
    #[must_use]
    pub fn hash(password: &str) -> Self {
        let salt = hex::encode(rand::random::<[u8; SALT_LEN]>());
        let hash = digest(&salt, password);
        Self { salt, hash }
    }

    /// Whether `password` matches the stored digest.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        constant_time_eq(digest(&self.salt, password).as_bytes(), self.hash.as_bytes())
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare without an early exit on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
