//! `[site]` section: title, description, language, base path.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "API Docs"
//! description = "Reference for the task API"
//! lang = "zh-CN"
//! base = "/docs/"
//! clean_urls = true
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata injected into every rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,

    /// Site description (`<meta name="description">`).
    pub description: String,

    /// Language code (e.g., "en-US", "zh-CN").
    pub lang: String,

    /// Base path the site is served under. Empty or `/…/`.
    pub base: String,

    /// Generate links without the `.html` suffix.
    pub clean_urls: bool,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en-US".into(),
            base: "/".into(),
            clean_urls: false,
        }
    }
}

impl SiteMetadata {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const LANG: FieldPath = FieldPath::new("site.lang");
    pub const BASE: FieldPath = FieldPath::new("site.base");

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` is not blank
    /// - `lang` is a language tag
    /// - `base` is empty, or begins and ends with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "site title must not be empty");
        }

        if !is_language_tag(&self.lang) {
            diag.error_with_hint(
                Self::LANG,
                format!("'{}' is not a language tag", self.lang),
                "use a BCP 47 tag like \"en-US\" or \"zh-CN\"",
            );
        }

        if let Err(message) = check_base_path(&self.base) {
            diag.error_with_hint(Self::BASE, message, "use a value like \"/docs/\"");
        }
    }
}

/// Check the base path shape. Case and inner segments are left as written.
pub fn check_base_path(base: &str) -> Result<(), String> {
    if base.is_empty() {
        return Ok(());
    }
    if !base.starts_with('/') {
        return Err(format!("base path '{base}' must start with '/'"));
    }
    if !base.ends_with('/') {
        return Err(format!("base path '{base}' must end with '/'"));
    }
    if base.contains("//") {
        return Err(format!("base path '{base}' contains an empty segment"));
    }
    Ok(())
}

/// Loose BCP 47 shape check: `-` separated alphanumeric subtags of 1..=8
/// chars, the first one alphabetic.
pub fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(primary) = subtags.next() else {
        return false;
    };
    let primary_ok = (2..=8).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic());

    primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}
