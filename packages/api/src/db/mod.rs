//! # Database module — PostgreSQL connection pool management
//!
//! Server-only. The pool is a lazy, process-wide singleton behind a
//! [`tokio::sync::OnceCell`]; the first call to [`get_pool`] reads
//! [`crate::config::ServerConfig`] and opens the pool with its
//! `max_connections`.
//!
//! Schema migrations live in `packages/api/migrations` and are applied by the
//! web binary at startup through [`MIGRATOR`].

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;

/// Embedded schema migrations (`users`, `designs`).
#[cfg(feature = "server")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
