//! # API crate — fullstack server functions for the creative suite dashboard
//!
//! Every public `async fn` here is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with the full server
//! logic (behind `#[cfg(feature = "server")]`) and once as a client stub that
//! forwards the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Credential validation (shared), Argon2 password storage and session keys (server) |
//! | [`config`] | — | [`config::ServerConfig`] read from the environment |
//! | [`db`] | `server` | PostgreSQL pool singleton and embedded migrations |
//! | [`models`] | — | `users` / `designs` rows and the client-safe [`UserInfo`] |
//!
//! ## Server functions
//!
//! - **Auth provider**: `get_current_user`, `sign_in`, `sign_up`, `sign_out`
//! - **Data store**: `list_designs`

use dioxus::prelude::*;

pub mod auth;
pub mod config;
pub mod db;
pub mod models;

pub use models::UserInfo;
pub use store::{Design, DesignQuery, OwnerFilter};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let Some(user_id) = auth::session_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Sign in with email and password, starting a session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::auth::CredentialError;
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new(CredentialError::InvalidCredentials.to_string()));
    };

    auth::verify_password(&password, &user.password_hash).map_err(|e| {
        if let CredentialError::CorruptHash(ref detail) = e {
            tracing::error!("Corrupt password hash for user {}: {}", user.id, detail);
        }
        ServerFnError::new(CredentialError::InvalidCredentials.to_string())
    })?;

    start_session(&session, &user).await?;
    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in")]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an account with email and password.
///
/// Returns the new identity when a session was started. Accounts are usable
/// immediately; the client still asks the user to verify their email.
#[cfg(feature = "server")]
#[post("/api/auth/sign-up", session: tower_sessions::Session)]
pub async fn sign_up(email: String, password: String) -> Result<Option<UserInfo>, ServerFnError> {
    use crate::auth::CredentialError;
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    auth::validate_credentials(&email, &password)
        .map_err(|e| ServerFnError::new(CredentialError::from(e).to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(CredentialError::AlreadyRegistered.to_string()));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| {
        tracing::error!("Sign-up hashing failed: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!("Registered user {}", user.id);
    start_session(&session, &user).await?;
    Ok(Some(user.to_info()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-up")]
pub async fn sign_up(email: String, password: String) -> Result<Option<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

/// Run a design query, newest edits first.
///
/// Ownerless designs are public. Owned designs are only returned to their owner.
#[cfg(feature = "server")]
#[post("/api/designs", session: tower_sessions::Session)]
pub async fn list_designs(query: DesignQuery) -> Result<Vec<Design>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::DesignRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<DesignRow> = match &query.owner {
        OwnerFilter::Owner(owner) => {
            let caller = auth::session_user_id(&session).await?;
            let owner = uuid::Uuid::parse_str(owner)
                .map_err(|e| ServerFnError::new(e.to_string()))?;
            if caller != Some(owner) {
                tracing::warn!("Rejected design query for foreign owner {}", owner);
                return Err(ServerFnError::new(store::StoreError::Unauthorized.to_string()));
            }
            sqlx::query_as(
                "SELECT id, user_id, title, type, thumbnail_bg, is_private, last_edited_at
                 FROM designs WHERE user_id = $1
                 ORDER BY last_edited_at DESC NULLS LAST",
            )
            .bind(owner)
            .fetch_all(pool)
            .await
        }
        OwnerFilter::Unowned => {
            sqlx::query_as(
                "SELECT id, user_id, title, type, thumbnail_bg, is_private, last_edited_at
                 FROM designs WHERE user_id IS NULL
                 ORDER BY last_edited_at DESC NULLS LAST",
            )
            .fetch_all(pool)
            .await
        }
    }
    .map_err(|e| {
        tracing::error!("Design query failed: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    Ok(rows.into_iter().map(Design::from).collect())
}

#[cfg(not(feature = "server"))]
#[post("/api/designs")]
pub async fn list_designs(query: DesignQuery) -> Result<Vec<Design>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
async fn start_session(
    session: &tower_sessions::Session,
    user: &models::User,
) -> Result<(), ServerFnError> {
    session
        .cycle_id()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
