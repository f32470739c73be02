//! Authentication module for email + password accounts.

mod validation;
pub use validation::{
    validate_credentials, validate_email, validate_password, ValidationError, MIN_PASSWORD_LEN,
};

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::{session_user_id, SESSION_USER_ID_KEY};

/// Why a sign-in or sign-up was refused. The `Display` text reaches the user.
#[cfg(feature = "server")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("User already registered")]
    AlreadyRegistered,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Stored password hash is corrupt: {0}")]
    CorruptHash(String),
}
