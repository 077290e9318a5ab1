use std::fmt;

use sha2::{Digest, Sha256};
use uuid::Uuid;

const SCHEME: &str = "sha256";

/// Salted SHA-256 credential in the `sha256$<salt>$<hex digest>` layout.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a password under a fresh random salt.
    pub fn generate(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        Self::with_salt(&salt, password)
    }

    fn with_salt(salt: &str, password: &str) -> Self {
        Self(format!("{SCHEME}${salt}${}", digest(salt, password)))
    }

    /// Wrap a value read back from storage.
    pub fn from_stored(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a candidate password. Values not in the expected layout never match.
    pub fn verify(&self, password: &str) -> bool {
        let mut parts = self.0.splitn(3, '$');
        let (Some(SCHEME), Some(salt), Some(expected)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        let actual = digest(salt, password);
        actual.len() == expected.len()
            && actual
                .bytes()
                .zip(expected.bytes())
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
