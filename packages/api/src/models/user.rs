//! # User model for authenticated users
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, loaded with [`sqlx::FromRow`]:
//! `id` (UUID v4), `email` (unique, lower-cased on write), `password_hash`
//! (Argon2id PHC string) and the audit timestamps.
//!
//! ## [`UserInfo`]
//!
//! The client-safe projection that crosses the server function boundary. It drops
//! the hash and timestamps and carries the id as a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
        }
    }
}

/// The signed-in identity as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

impl UserInfo {
    /// The part of the email before `@`, used in the header greeting.
    pub fn greeting_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_name() {
        let user = UserInfo {
            id: "1".to_string(),
            email: "don.draper@example.com".to_string(),
        };
        assert_eq!(user.greeting_name(), "don.draper");

        let odd = UserInfo {
            id: "2".to_string(),
            email: "no-at-sign".to_string(),
        };
        assert_eq!(odd.greeting_name(), "no-at-sign");
    }
}
