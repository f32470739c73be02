//! # Client configuration — `suite.toml`
//!
//! Tunables for the dashboard shell, embedded into the web binary at build time.
//!
//! ## Structure
//!
//! ```toml
//! [dashboard]
//! skeleton_count = 8      # placeholder cards shown while designs load
//! default_view = "grid"   # "grid" or "list"
//!
//! [toasts]
//! default_duration_ms = 5000   # lifetime of toasts that don't set their own
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `suite.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
}

/// Layout of the recent designs list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
    #[serde(default)]
    pub default_view: ViewMode,
}

fn default_skeleton_count() -> usize {
    8
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            skeleton_count: default_skeleton_count(),
            default_view: ViewMode::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_duration")]
    pub default_duration_ms: u64,
}

fn default_toast_duration() -> u64 {
    5000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_toast_duration(),
        }
    }
}

impl SuiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "suite.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to defaults on a malformed document.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}: {}; using defaults", Self::filename(), e);
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = SuiteConfig::from_toml("").unwrap();
        assert_eq!(config, SuiteConfig::default());
        assert_eq!(config.dashboard.skeleton_count, 8);
        assert_eq!(config.dashboard.default_view, ViewMode::Grid);
        assert_eq!(config.toasts.default_duration_ms, 5000);
    }

    #[test]
    fn test_partial_sections() {
        let config = SuiteConfig::from_toml(
            r#"
            [dashboard]
            default_view = "list"
            "#,
        )
        .unwrap();
        assert_eq!(config.dashboard.default_view, ViewMode::List);
        assert_eq!(config.dashboard.skeleton_count, 8);
        assert_eq!(config.toasts, ToastConfig::default());
    }

    #[test]
    fn test_malformed_falls_back() {
        assert!(SuiteConfig::from_toml("[dashboard]\nskeleton_count = \"many\"").is_err());
        let config = SuiteConfig::from_toml_or_default("[dashboard]\nskeleton_count = \"many\"");
        assert_eq!(config, SuiteConfig::default());
    }

    #[test]
    fn test_roundtrip() {
        let mut config = SuiteConfig::default();
        config.dashboard.skeleton_count = 4;
        let text = config.to_toml().unwrap();
        assert_eq!(SuiteConfig::from_toml(&text).unwrap(), config);
    }
}
