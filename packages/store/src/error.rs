//! Errors surfaced by a [`crate::DesignStore`].

use thiserror::Error;

/// Failure of a design query. The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store rejected or failed the query.
    #[error("{0}")]
    Query(String),
    /// The query asked for designs owned by someone other than the caller.
    #[error("Not authorized")]
    Unauthorized,
}
