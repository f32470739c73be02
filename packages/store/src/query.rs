//! Query description for the `designs` collection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Design;

/// Ownership predicate applied to every design query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerFilter {
    /// `user_id = <id>`
    Owner(String),
    /// `user_id IS NULL`
    Unowned,
}

/// A query over the `designs` collection, always ordered by
/// `last_edited_at` descending with missing timestamps last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignQuery {
    pub owner: OwnerFilter,
}

impl DesignQuery {
    /// Build the query for the current identity: the owner's designs when
    /// signed in, ownerless designs otherwise.
    pub fn for_identity(user_id: Option<&str>) -> Self {
        let owner = match user_id {
            Some(id) => OwnerFilter::Owner(id.to_string()),
            None => OwnerFilter::Unowned,
        };
        Self { owner }
    }

    /// The owner id the filter matches, or None for the ownerless filter.
    pub fn owner_id(&self) -> Option<&str> {
        match &self.owner {
            OwnerFilter::Owner(id) => Some(id),
            OwnerFilter::Unowned => None,
        }
    }

    pub fn matches(&self, design: &Design) -> bool {
        design.is_owned_by(self.owner_id())
    }

    /// Result ordering: most recently edited first, undated rows last.
    pub fn compare(a: &Design, b: &Design) -> Ordering {
        match (&a.last_edited_at, &b.last_edited_at) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_follows_identity() {
        let anon = DesignQuery::for_identity(None);
        assert_eq!(anon.owner, OwnerFilter::Unowned);
        assert_eq!(anon.owner_id(), None);

        let signed_in = DesignQuery::for_identity(Some("user-1"));
        assert_eq!(signed_in.owner, OwnerFilter::Owner("user-1".to_string()));
        assert_eq!(signed_in.owner_id(), Some("user-1"));
    }
}
