//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | required |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |
//! | `SESSION_SECURE` | `false` |
//! | `SESSION_TTL_DAYS` | `7` |

use std::str::FromStr;

/// Settings the server binary and the connection pool read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Mark the session cookie `Secure` (enable behind HTTPS).
    pub session_secure: bool,
    /// Sessions expire after this many days of inactivity.
    pub session_ttl_days: u32,
}

impl ServerConfig {
    /// Read the configuration from the process environment, loading `.env` first.
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let database_url = lookup("DATABASE_URL").ok_or("DATABASE_URL not set")?;

        Ok(Self {
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            session_secure: parse_or(&lookup, "SESSION_SECURE", false)?,
            session_ttl_days: parse_or(&lookup, "SESSION_TTL_DAYS", 7)?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, String> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
