//! `[footer]` and `[doc_footer]` sections.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! message = "Released under the MIT License."
//! copyright = "Copyright © 2025"
//!
//! [doc_footer]
//! prev = "Previous page"
//! next = "Next page"
//! ```

use serde::{Deserialize, Serialize};

/// Site-wide footer. Hidden by the renderer when both fields are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl FooterConfig {
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.copyright.is_none()
    }
}

/// Labels of the previous/next links under each page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocFooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl DocFooterConfig {
    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_footers() {
        let config = test_parse_config(
            "[footer]\nmessage = \"MIT\"\n[doc_footer]\nprev = \"上一页\"\nnext = \"下一页\"",
        );
        assert_eq!(config.footer.message.as_deref(), Some("MIT"));
        assert!(config.footer.copyright.is_none());
        assert_eq!(config.doc_footer.prev.as_deref(), Some("上一页"));
        assert!(!config.doc_footer.is_empty());
    }

    #[test]
    fn test_empty_by_default() {
        let config = test_parse_config("");
        assert!(config.footer.is_empty());
        assert!(config.doc_footer.is_empty());
    }
}
