//! `[last_updated]` section: the "last updated" stamp under each page.
//!
//! # Example
//!
//! ```toml
//! [last_updated]
//! enable = true
//! text = "Last updated"
//! date_style = "short"
//! time_style = "medium"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// `Intl.DateTimeFormat` style presets understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    Full,
    Long,
    #[default]
    Medium,
    Short,
}

impl FormatStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastUpdatedConfig {
    /// Show the stamp (renderer reads it from git history).
    pub enable: bool,
    /// Label before the timestamp.
    pub text: String,
    pub date_style: FormatStyle,
    pub time_style: FormatStyle,
}

impl Default for LastUpdatedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            text: "Last updated".into(),
            date_style: FormatStyle::Short,
            time_style: FormatStyle::Medium,
        }
    }
}

impl LastUpdatedConfig {
    pub const TEXT: FieldPath = FieldPath::new("last_updated.text");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.text.trim().is_empty() {
            diag.error(Self::TEXT, "label must not be empty while enabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_styles() {
        let config = test_parse_config(
            "[last_updated]\nenable = true\ntext = \"最后更新于\"\ndate_style = \"full\"\ntime_style = \"short\"",
        );
        let last = &config.last_updated;
        assert!(last.enable);
        assert_eq!(last.text, "最后更新于");
        assert_eq!(last.date_style, FormatStyle::Full);
        assert_eq!(last.time_style, FormatStyle::Short);
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.last_updated.enable);
        assert_eq!(config.last_updated.date_style, FormatStyle::Short);
        assert_eq!(config.last_updated.time_style, FormatStyle::Medium);
    }

    #[test]
    fn test_unknown_style_rejected() {
        let result: Result<LastUpdatedConfig, _> = toml::from_str("date_style = \"tiny\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_enabled_needs_label() {
        let mut diag = ConfigDiagnostics::new();
        LastUpdatedConfig {
            enable: true,
            text: " ".into(),
            ..Default::default()
        }
        .validate(&mut diag);
        assert!(diag.has_error_at("last_updated.text"));
    }
}
