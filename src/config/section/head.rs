//! `[[head]]` entries: extra elements injected into `<head>`.
//!
//! Tags are emitted in the order written, and attributes keep their order.
//!
//! # Example
//!
//! ```toml
//! [[head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/favicon.ico" }
//!
//! [[head]]
//! tag = "script"
//! content = "window.__docs = true"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A single element rendered verbatim into the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name, e.g. `link`, `meta`, `script`.
    pub tag: String,

    /// Attributes in output order.
    #[serde(default)]
    pub attrs: IndexMap<String, String>,

    /// Inline content (for `script` and `style`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    pub const FIELD: FieldPath = FieldPath::new("head");

    pub fn new<K, V>(tag: &str, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tag: tag.into(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[inline]
    fn has(&self, attr: &str) -> bool {
        self.attrs.get(attr).is_some_and(|v| !v.is_empty())
    }

    #[inline]
    fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    /// Describe what a known tag is missing, `None` when complete.
    fn missing_requirement(&self) -> Option<&'static str> {
        match self.tag.as_str() {
            "link" if !(self.has("rel") && self.has("href")) => {
                Some("`link` requires both `rel` and `href`")
            }
            "meta" => {
                let keyed = self.has("name") || self.has("property") || self.has("http-equiv");
                if self.has("charset") || (keyed && self.has("content")) {
                    None
                } else {
                    Some("`meta` requires `charset`, or `content` with `name`/`property`/`http-equiv`")
                }
            }
            "script" if !(self.has("src") || self.has_content()) => {
                Some("`script` requires `src` or inline content")
            }
            "style" if !self.has_content() => Some("`style` requires inline content"),
            _ => None,
        }
    }

    /// Validate every head tag in order.
    pub fn validate_all(tags: &[Self], diag: &mut ConfigDiagnostics) {
        for (i, tag) in tags.iter().enumerate() {
            let field = Self::FIELD.index(i);

            if !is_tag_name(&tag.tag) {
                diag.error(
                    field.field("tag"),
                    format!("'{}' is not a valid element name", tag.tag),
                );
                continue;
            }

            if let Some(missing) = tag.missing_requirement() {
                diag.error(field.field("attrs"), missing);
            }
        }
    }
}

fn is_tag_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn errors_for(tags: &[HeadTag]) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::validate_all(tags, &mut diag);
        diag
    }

    #[test]
    fn test_parse_keeps_order() {
        let config = test_parse_config(
            r##"
[[head]]
tag = "meta"
attrs = { name = "theme-color", content = "#3c8772" }

[[head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.ico", type = "image/x-icon" }
"##,
        );
        assert_eq!(config.head.len(), 2);
        assert_eq!(config.head[0].tag, "meta");
        let keys: Vec<_> = config.head[1].attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["rel", "href", "type"]);
    }

    #[test]
    fn test_known_tag_requirements() {
        let ok = [
            HeadTag::new("link", [("rel", "icon"), ("href", "/favicon.ico")]),
            HeadTag::new("meta", [("charset", "utf-8")]),
            HeadTag::new("meta", [("property", "og:title"), ("content", "Docs")]),
            HeadTag::new("script", [("src", "/a.js")]),
            HeadTag::new::<&str, &str>("script", []).with_content("console.log(1)"),
            HeadTag::new::<&str, &str>("style", []).with_content("body{}"),
            HeadTag::new("noscript", [("x", "y")]),
        ];
        assert!(errors_for(&ok).is_empty());

        let bad = [
            HeadTag::new("link", [("rel", "icon")]),
            HeadTag::new("meta", [("name", "description")]),
            HeadTag::new::<&str, &str>("script", []),
            HeadTag::new::<&str, &str>("style", []),
        ];
        let diag = errors_for(&bad);
        assert_eq!(diag.len(), 4);
        assert!(diag.has_error_at("head[0].attrs"));
        assert!(diag.has_error_at("head[3].attrs"));
    }

    #[test]
    fn test_invalid_tag_name() {
        let diag = errors_for(&[HeadTag::new::<&str, &str>("", [])]);
        assert!(diag.has_error_at("head[0].tag"));

        let diag = errors_for(&[HeadTag::new::<&str, &str>("my tag", [])]);
        assert!(diag.has_error_at("head[0].tag"));
    }
}
