//! `[[nav]]` entries: the flat top navigation bar.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Guide"
//! link = "/guide/getting-started"
//!
//! [[nav]]
//! text = "API"
//! link = "/api/"
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A labelled link. Used both in the top bar and inside sidebar sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,

    /// Internal path (`/guide/`) or absolute `http(s)` URL.
    pub link: String,
}

impl NavItem {
    pub const FIELD: FieldPath = FieldPath::new("nav");

    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Whether the link points inside this site.
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.link.starts_with('/')
    }

    /// Validate label and link of one item.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.field("text"), "label must not be empty");
        }

        if let Err(message) = check_link(&self.link) {
            diag.error_with_hint(
                field.field("link"),
                message,
                "use an internal path like \"/guide/\" or a full https:// URL",
            );
        }
    }

    /// Validate a flat list of items and reject duplicate targets.
    pub fn validate_list(items: &[Self], field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for (i, item) in items.iter().enumerate() {
            let item_field = field.index(i);
            item.validate(&item_field, diag);

            if !item.link.is_empty() && !seen.insert(item.link.as_str()) {
                diag.error(
                    item_field.field("link"),
                    format!("duplicate link target '{}'", item.link),
                );
            }
        }
    }
}

/// Check a link target: internal absolute path or `http(s)` URL.
pub fn check_link(link: &str) -> Result<(), String> {
    if link.trim().is_empty() {
        return Err("link must not be empty".into());
    }
    if link.starts_with("//") {
        return Err(format!("protocol-relative link '{link}' is not supported"));
    }
    if link.starts_with('/') {
        return Ok(());
    }
    check_http_url(link)
}

/// Strict `http(s)` URL check using the `url` crate.
pub fn check_http_url(link: &str) -> Result<(), String> {
    match url::Url::parse(link) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        )),
        Ok(parsed) if parsed.host_str().is_none() => {
            Err(format!("URL '{link}' must have a valid host"))
        }
        Ok(_) => Ok(()),
        Err(e) => Err(format!("invalid link '{link}': {e}")),
    }
}
