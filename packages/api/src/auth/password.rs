//! # Password storage — Argon2id
//!
//! Passwords are stored as PHC strings (`$argon2id$v=19$m=19456,t=2,p=1$...`) in the
//! `password_hash` column of `users`. [`hash_password`] salts with [`OsRng`];
//! [`verify_password`] maps a mismatch to [`CredentialError::InvalidCredentials`] so
//! the sign-in path can return it unchanged.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::CredentialError;

/// Hash a password with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Hash(e.to_string()))
}

/// Check `password` against a stored PHC string.
pub fn verify_password(password: &str, stored: &str) -> Result<(), CredentialError> {
    let parsed = PasswordHash::new(stored).map_err(|e| CredentialError::CorruptHash(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| CredentialError::InvalidCredentials)
}
