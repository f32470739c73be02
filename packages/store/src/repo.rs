//! # Design store — the data collaborator behind the dashboard
//!
//! [`DesignStore`] is the single read operation the dashboard needs: run a
//! [`DesignQuery`] and get back the matching rows in query order, or a
//! [`StoreError`] whose message is shown to the user verbatim.
//!
//! Implementations:
//! - [`crate::MemoryStore`]: in-process rows, used by tests.
//! - `ui::ApiDesignStore`: forwards to the `list_designs` server function,
//!   which runs the query against PostgreSQL.

use crate::error::StoreError;
use crate::models::Design;
use crate::query::DesignQuery;

/// Async trait for querying saved designs.
pub trait DesignStore {
    fn list_designs(
        &self,
        query: &DesignQuery,
    ) -> impl std::future::Future<Output = Result<Vec<Design>, StoreError>>;
}
