//! One-way credential hashing behind a narrow interface.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{UserError, UserResult};

/// One-way hashing and verification of credentials.
///
/// Plaintext passwords never cross this boundary outward: callers hash
/// before persisting and verify against the stored hash.
#[cfg_attr(test, mockall::automock)]
pub trait HashService: Send + Sync {
    /// Hash a plaintext password into an opaque, self-describing string.
    fn hash(&self, password: &str) -> UserResult<String>;

    /// Verify a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> UserResult<bool>;
}

/// Argon2id implementation of [`HashService`].
#[derive(Clone, Default)]
pub struct Argon2HashService;

impl Argon2HashService {
    pub fn new() -> Self {
        Self
    }
}

impl HashService for Argon2HashService {
    fn hash(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
