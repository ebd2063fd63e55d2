//! Password policy and hashing.

use thiserror::Error;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,

    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Enforce the password policy on a plaintext candidate.
pub fn validate_password(plain: &str) -> Result<(), CredentialError> {
    if plain.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::TooShort);
    }
    Ok(())
}

/// Hash a plaintext password with bcrypt.
pub fn hash_password(plain: &str) -> Result<String, CredentialError> {
    validate_password(plain)?;
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| CredentialError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash verifies as false rather than erroring; a login
/// attempt must never 500 on bad stored data.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}
