//! `[sidebar]` section: navigation shown beside content pages, scoped by
//! URL prefix.
//!
//! A page uses the sections of the longest prefix its path starts with.
//!
//! # Example
//!
//! ```toml
//! [[sidebar."/api/"]]
//! text = "Reference"
//! items = [{ text = "Overview", link = "/api/" }]
//!
//! [[sidebar."/api/auth/"]]
//! text = "Authentication"
//! collapsed = true
//! items = [{ text = "Password login", link = "/api/auth/password-login" }]
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};

/// A titled group of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Group label.
    pub text: String,

    /// Render the group folded until the reader opens it.
    #[serde(default)]
    pub collapsed: bool,

    pub items: Vec<NavItem>,
}

impl SidebarSection {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            collapsed: false,
            items,
        }
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }
}

/// URL prefix → sections. Keys are kept sorted so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarMap(BTreeMap<String, Vec<SidebarSection>>);

impl SidebarMap {
    pub const FIELD: FieldPath = FieldPath::new("sidebar");

    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the sections for a prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, sections: Vec<SidebarSection>) {
        self.0.insert(prefix.into(), sections);
    }

    pub fn get(&self, prefix: &str) -> Option<&[SidebarSection]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarSection])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Find the sidebar for a page path by longest matching prefix.
    ///
    /// The path gets a leading `/` if missing; query and fragment are
    /// ignored. A path equal to a prefix minus its trailing slash
    /// (`/api` for `/api/`) also matches.
    pub fn resolve(&self, page_path: &str) -> Option<(&str, &[SidebarSection])> {
        let path = normalize_page_path(page_path);

        self.0
            .iter()
            .filter(|(prefix, _)| covers(prefix, &path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, sections)| (prefix.as_str(), sections.as_slice()))
    }

    /// Whether any prefix covers the given path.
    pub fn covers_path(&self, page_path: &str) -> bool {
        self.resolve(page_path).is_some()
    }

    /// Validate the whole map.
    ///
    /// # Checks
    /// - at least one prefix
    /// - every prefix starts with `/`
    /// - every prefix has sections, every section has items
    /// - no duplicate link targets within one prefix
    /// - at least one item of a prefix links under that prefix
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.0.is_empty() {
            diag.error_with_hint(
                Self::FIELD,
                "sidebar must define at least one prefix",
                "add a section like [[sidebar.\"/\"]]",
            );
            return;
        }

        for (prefix, sections) in &self.0 {
            let field = Self::FIELD.key(prefix);

            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    field.clone(),
                    format!("prefix '{prefix}' must start with '/'"),
                    format!("use \"/{prefix}\""),
                );
            }

            if sections.is_empty() {
                diag.error(field, format!("prefix '{prefix}' has no sections"));
                continue;
            }

            validate_entry(prefix, sections, &field, diag);
        }
    }
}

fn validate_entry(
    prefix: &str,
    sections: &[SidebarSection],
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen = FxHashSet::default();
    let mut anchored = false;

    for (i, section) in sections.iter().enumerate() {
        let section_field = field.index(i);

        if section.text.trim().is_empty() {
            diag.error(section_field.field("text"), "section label must not be empty");
        }
        if section.items.is_empty() {
            diag.error(
                section_field.field("items"),
                format!("section '{}' has no items", section.text),
            );
        }

        for (j, item) in section.items.iter().enumerate() {
            let item_field = section_field.field("items").index(j);
            item.validate(&item_field, diag);

            if item.link.is_empty() {
                continue;
            }
            if !seen.insert(item.link.as_str()) {
                diag.error(
                    item_field.field("link"),
                    format!("duplicate link target '{}' under '{prefix}'", item.link),
                );
            }
            anchored |= item.is_internal() && covers(prefix, &normalize_page_path(&item.link));
        }
    }

    let has_items = sections.iter().any(|s| !s.items.is_empty());
    if has_items && !anchored {
        diag.error_with_hint(
            field.clone(),
            format!("no item links under prefix '{prefix}'"),
            format!("link at least one page starting with '{prefix}', or change the prefix"),
        );
    }
}

/// Segment-aware prefix match: `/api` covers `/api` and `/api/x`, not `/apiary`.
fn covers(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => prefix.ends_with('/') || rest.is_empty() || rest.starts_with('/'),
        None => prefix.strip_suffix('/') == Some(path),
    }
}

fn normalize_page_path(path: &str) -> String {
    let path = path.split(['#', '?']).next().unwrap_or_default();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
