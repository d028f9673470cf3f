use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::AppError;

/// Hashes a password with Argon2id and a fresh random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to hash password: {e}")))
}

/// Checks `password` against a stored PHC hash. Comparison is constant time.
///
/// A stored hash that cannot be parsed is a server fault, not a failed login.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored password hash is invalid: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password_verifies() {
        let hash = hash_password("pw123456").unwrap();
        assert!(verify_password("pw123456", &hash).unwrap());
    }

    #[test]
    fn test_wrong_and_empty_passwords_fail() {
        let hash = hash_password("pw123456").unwrap();
        assert!(!verify_password("pw1234567", &hash).unwrap());
        assert!(!verify_password("PW123456", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted_and_not_plaintext() {
        let a = hash_password("pw123456").unwrap();
        let b = hash_password("pw123456").unwrap();
        assert_ne!(a, b);
        assert!(!a.contains("pw123456"));
        assert!(a.starts_with("$argon2id$"));
    }

    #[test]
    fn test_corrupt_stored_hash_is_an_error() {
        assert!(verify_password("pw123456", "not-a-phc-string").is_err());
    }
}
