use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::models::Design;
use crate::query::DesignQuery;
use crate::repo::DesignStore;

/// In-memory DesignStore for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    designs: Arc<Mutex<Vec<Design>>>,
    failure: Arc<Mutex<Option<StoreError>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_designs(designs: Vec<Design>) -> Self {
        let store = Self::new();
        *store.designs.lock().unwrap() = designs;
        store
    }

    pub fn insert(&self, design: Design) {
        self.designs.lock().unwrap().push(design);
    }

    /// Make every following query fail with `error` (None to recover).
    pub fn fail_with(&self, error: Option<StoreError>) {
        *self.failure.lock().unwrap() = error;
    }
}

impl DesignStore for MemoryStore {
    async fn list_designs(&self, query: &DesignQuery) -> Result<Vec<Design>, StoreError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        let mut rows: Vec<Design> = self
            .designs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| query.matches(d))
            .cloned()
            .collect();
        rows.sort_by(DesignQuery::compare);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn design(id: &str, owner: Option<&str>, edited_hours_ago: Option<i64>) -> Design {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Design {
            id: id.to_string(),
            user_id: owner.map(str::to_string),
            title: format!("Design {id}"),
            r#type: "Flyer".to_string(),
            thumbnail_bg: "bg-blue-200".to_string(),
            is_private: false,
            last_edited_at: edited_hours_ago.map(|h| base - Duration::hours(h)),
        }
    }

    #[tokio::test]
    async fn test_anonymous_query_returns_only_ownerless() {
        let store = MemoryStore::with_designs(vec![
            design("a", None, Some(1)),
            design("b", Some("alice"), Some(2)),
            design("c", None, Some(3)),
        ]);

        let rows = store.list_designs(&DesignQuery::for_identity(None)).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(rows.iter().all(|d| d.user_id.is_none()));
    }

    #[tokio::test]
    async fn test_owner_query_returns_only_owner_rows() {
        let store = MemoryStore::with_designs(vec![
            design("a", None, Some(1)),
            design("b", Some("alice"), Some(2)),
            design("c", Some("bob"), Some(3)),
        ]);

        let rows = store
            .list_designs(&DesignQuery::for_identity(Some("alice")))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "b");
    }

    #[tokio::test]
    async fn test_rows_ordered_newest_first_undated_last() {
        let store = MemoryStore::new();
        store.insert(design("old", None, Some(48)));
        store.insert(design("undated", None, None));
        store.insert(design("new", None, Some(1)));

        let rows = store.list_designs(&DesignQuery::for_identity(None)).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let store = MemoryStore::with_designs(vec![design("a", None, Some(1))]);
        store.fail_with(Some(StoreError::Query("relation \"designs\" does not exist".into())));

        let err = store
            .list_designs(&DesignQuery::for_identity(None))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "relation \"designs\" does not exist");

        store.fail_with(None);
        assert_eq!(
            store.list_designs(&DesignQuery::for_identity(None)).await.unwrap().len(),
            1
        );
    }
}
