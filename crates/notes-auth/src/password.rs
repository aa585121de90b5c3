//! Password hashing (Argon2id, PHC string format)

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::debug;

use crate::error::AuthError;

/// Hash a password with a fresh random salt
///
/// The salt and cost parameters are embedded in the returned string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored hash
///
/// A malformed hash is treated as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("p1").unwrap();

        assert_ne!(hash, "p1");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("p1", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("same", &first));
        assert!(verify_password("same", &second));
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!verify_password("p1", ""));
        assert!(!verify_password("p1", "not-a-phc-string"));
        assert!(!verify_password("p1", "$argon2id$v=19$garbage"));
    }
}
