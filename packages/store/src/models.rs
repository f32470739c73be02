//! # Domain models for saved designs and the design-type catalog
//!
//! These types are `Serialize + Deserialize` so they can cross the server/client
//! boundary via Dioxus server functions.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Design`] | A saved design row from the `designs` table. Carries the owner reference (absent for demo designs), a title, the design-type label, a thumbnail style token, the privacy flag and the last-edit timestamp. |
//! | [`DesignKind`] | One entry of the fixed catalog of design-type shortcuts shown above the recent designs list. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved design as stored in the `designs` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Owner reference, or None for ownerless demo designs.
    pub user_id: Option<String>,
    pub title: String,
    /// Design-type label, e.g. "Presentation".
    pub r#type: String,
    /// Style token used as the thumbnail background class.
    pub thumbnail_bg: String,
    pub is_private: bool,
    pub last_edited_at: Option<DateTime<Utc>>,
}

impl Design {
    /// Whether this design belongs to `owner` (None meaning "no owner").
    pub fn is_owned_by(&self, owner: Option<&str>) -> bool {
        self.user_id.as_deref() == owner
    }
}

/// The fixed catalog of design-type shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DesignKind {
    Logo,
    YourStory,
    InstagramStory,
    Flyer,
    Doc,
    Whiteboard,
    Presentation,
    SocialMedia,
    WallPhoto,
    Video,
    Print,
    Website,
    CustomSize,
    Upload,
    More,
}

impl DesignKind {
    /// Every shortcut, in display order.
    pub const ALL: [DesignKind; 15] = [
        DesignKind::Logo,
        DesignKind::YourStory,
        DesignKind::InstagramStory,
        DesignKind::Flyer,
        DesignKind::Doc,
        DesignKind::Whiteboard,
        DesignKind::Presentation,
        DesignKind::SocialMedia,
        DesignKind::WallPhoto,
        DesignKind::Video,
        DesignKind::Print,
        DesignKind::Website,
        DesignKind::CustomSize,
        DesignKind::Upload,
        DesignKind::More,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DesignKind::Logo => "Logo",
            DesignKind::YourStory => "Your Story",
            DesignKind::InstagramStory => "Instagram Story",
            DesignKind::Flyer => "Flyer",
            DesignKind::Doc => "Doc",
            DesignKind::Whiteboard => "Whiteboard",
            DesignKind::Presentation => "Presentation",
            DesignKind::SocialMedia => "Social media",
            DesignKind::WallPhoto => "Wall Photo",
            DesignKind::Video => "Video",
            DesignKind::Print => "Print",
            DesignKind::Website => "Website",
            DesignKind::CustomSize => "Custom size",
            DesignKind::Upload => "Upload",
            DesignKind::More => "More",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DesignKind::Logo => "🎨",
            DesignKind::YourStory => "📱",
            DesignKind::InstagramStory => "📸",
            DesignKind::Flyer => "📄",
            DesignKind::Doc => "📝",
            DesignKind::Whiteboard => "⚪",
            DesignKind::Presentation => "🎯",
            DesignKind::SocialMedia => "❤️",
            DesignKind::WallPhoto => "🖼️",
            DesignKind::Video => "🎬",
            DesignKind::Print => "🖨️",
            DesignKind::Website => "🌐",
            DesignKind::CustomSize => "📐",
            DesignKind::Upload => "📤",
            DesignKind::More => "⋯",
        }
    }

    /// Background colour token for the shortcut tile.
    pub fn color(self) -> &'static str {
        match self {
            DesignKind::Logo => "bg-purple-500",
            DesignKind::YourStory => "bg-pink-500",
            DesignKind::InstagramStory => "bg-gradient-to-r from-purple-500 to-pink-500",
            DesignKind::Flyer => "bg-blue-500",
            DesignKind::Doc => "bg-green-500",
            DesignKind::Whiteboard => "bg-gray-500",
            DesignKind::Presentation => "bg-orange-500",
            DesignKind::SocialMedia => "bg-red-500",
            DesignKind::WallPhoto => "bg-indigo-500",
            DesignKind::Video => "bg-purple-600",
            DesignKind::Print => "bg-cyan-500",
            DesignKind::Website => "bg-blue-600",
            DesignKind::CustomSize => "bg-gray-600",
            DesignKind::Upload => "bg-emerald-500",
            DesignKind::More => "bg-slate-600",
        }
    }

    /// Look up a shortcut by its label.
    pub fn from_label(label: &str) -> Option<DesignKind> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_labels() {
        let labels: Vec<&str> = DesignKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.first(), Some(&"Logo"));
        assert_eq!(labels.last(), Some(&"More"));
        assert_eq!(labels.len(), 15);
        assert_eq!(DesignKind::from_label("Social media"), Some(DesignKind::SocialMedia));
        assert_eq!(DesignKind::from_label("social media"), None);
    }

    #[test]
    fn test_design_serializes_type_field() {
        let design = Design {
            id: "d1".to_string(),
            user_id: None,
            title: "Launch deck".to_string(),
            r#type: "Presentation".to_string(),
            thumbnail_bg: "bg-orange-200".to_string(),
            is_private: false,
            last_edited_at: None,
        };
        let encoded = toml::to_string(&design).unwrap();
        assert!(encoded.contains("type = \"Presentation\""));
        assert!(design.is_owned_by(None));
        assert!(!design.is_owned_by(Some("u1")));
    }
}
