//! The production [`store::DesignStore`]: forwards queries to the
//! `list_designs` server function, which runs them against PostgreSQL.

use dioxus::prelude::ServerFnError;
use store::{Design, DesignQuery, DesignStore, StoreError};

use crate::auth::server_message;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiDesignStore;

impl DesignStore for ApiDesignStore {
    async fn list_designs(&self, query: &DesignQuery) -> Result<Vec<Design>, StoreError> {
        api::list_designs(query.clone()).await.map_err(store_error)
    }
}

fn store_error(err: ServerFnError) -> StoreError {
    let message = server_message(err);
    if message == StoreError::Unauthorized.to_string() {
        StoreError::Unauthorized
    } else {
        StoreError::Query(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_from_server_message() {
        assert_eq!(store_error(ServerFnError::new("Not authorized")), StoreError::Unauthorized);

        let err = store_error(ServerFnError::new("connection refused"));
        assert_eq!(err, StoreError::Query("connection refused".to_string()));
        assert_eq!(err.to_string(), "connection refused");
    }
}
