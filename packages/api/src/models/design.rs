//! Row mapping for the `designs` table.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// A `designs` row as stored in PostgreSQL.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct DesignRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub thumbnail_bg: String,
    pub is_private: bool,
    pub last_edited_at: Option<DateTime<Utc>>,
}

#[cfg(feature = "server")]
impl From<DesignRow> for store::Design {
    fn from(row: DesignRow) -> Self {
        store::Design {
            id: row.id.to_string(),
            user_id: row.user_id.map(|id| id.to_string()),
            title: row.title,
            r#type: row.kind,
            thumbnail_bg: row.thumbnail_bg,
            is_private: row.is_private,
            last_edited_at: row.last_edited_at,
        }
    }
}
