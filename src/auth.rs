//! Password Hashing
//!
//! Salted SHA-256 hashing for stored credentials. Hashes are stored as
//! `salt$digest` with both halves hex-encoded; the salt is 128 random bits
//! per user, so identical passwords never share a stored hash.

use sha2::{Digest, Sha256};

/// Hash a password with a fresh random salt
///
/// Output format: `<salt-hex>$<digest-hex>`.
pub fn hash_password(password: &str) -> String {
    let salt = uuid::Uuid::new_v4().simple().to_string();
    let digest = salted_digest(&salt, password);
    format!("{salt}${digest}")
}

/// Verify a password against a stored `salt$digest` hash
///
/// Malformed stored values never verify.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };

    let actual = salted_digest(salt, password);
    constant_time_eq(expected.as_bytes(), actual.as_bytes())
}

fn salted_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compare without short-circuiting on the first mismatched byte
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let stored = hash_password("hunter2");
        assert!(verify_password(&stored, "hunter2"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let stored = hash_password("hunter2");
        assert!(!verify_password(&stored, "hunter3"));
        assert!(!verify_password(&stored, ""));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password");
        let b = hash_password("same-password");
        assert_ne!(a, b);

        // Both still verify
        assert!(verify_password(&a, "same-password"));
        assert!(verify_password(&b, "same-password"));
    }

    #[test]
    fn test_malformed_stored_hash_rejected() {
        assert!(!verify_password("not-a-valid-hash", "anything"));
        assert!(!verify_password("", "anything"));
    }

    #[test]
    fn test_stored_format() {
        let stored = hash_password("pw");
        let (salt, digest) = stored.split_once('$').unwrap();
        assert_eq!(salt.len(), 32);
        assert_eq!(digest.len(), 64);
    }
}
