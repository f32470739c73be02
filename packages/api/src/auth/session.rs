//! Session keys and helpers.

use dioxus::prelude::ServerFnError;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Read the signed-in user's id from the session, if any.
pub async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<Option<uuid::Uuid>, ServerFnError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user_id
        .map(|id| uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string())))
        .transpose()
}
