//! `[search]` section: search provider and per-locale UI strings.
//!
//! UI strings are layered: built-in defaults, then the `root` locale
//! override, then the requested locale's override. Any key left out of an
//! override keeps the value from the layer below.
//!
//! # Example
//!
//! ```toml
//! [search]
//! provider = "local"
//!
//! [search.locales.root.button]
//! button_text = "搜索文档"
//!
//! [search.locales.root.modal]
//! no_results_text = "无法找到相关结果"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::site::is_language_tag;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Locale key addressing the site's default language.
pub const ROOT_LOCALE: &str = "root";

// ============================================================================
// provider
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built by the renderer.
    #[default]
    Local,

    /// Hosted DocSearch service.
    Algolia,
}

impl SearchProvider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Algolia => "algolia",
        }
    }
}

/// Credentials for the hosted search service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgoliaConfig {
    pub app_id: String,
    /// Search-only API key (public).
    pub api_key: String,
    pub index_name: String,
}

// ============================================================================
// string bundles
// ============================================================================

/// Override bundle. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchStrings {
    pub button: ButtonStrings,
    pub modal: ModalStrings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_aria_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results_text: Option<String>,
    pub footer: FooterStrings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_key_aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_up_key_aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_down_key_aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_key_aria_label: Option<String>,
}

/// Every UI string key, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ButtonText,
    ButtonAriaLabel,
    DisplayDetails,
    ResetButtonTitle,
    BackButtonTitle,
    NoResultsText,
    SelectText,
    SelectKeyAriaLabel,
    NavigateText,
    NavigateUpKeyAriaLabel,
    NavigateDownKeyAriaLabel,
    CloseText,
    CloseKeyAriaLabel,
}

impl SearchKey {
    pub const ALL: [Self; 13] = [
        Self::ButtonText,
        Self::ButtonAriaLabel,
        Self::DisplayDetails,
        Self::ResetButtonTitle,
        Self::BackButtonTitle,
        Self::NoResultsText,
        Self::SelectText,
        Self::SelectKeyAriaLabel,
        Self::NavigateText,
        Self::NavigateUpKeyAriaLabel,
        Self::NavigateDownKeyAriaLabel,
        Self::CloseText,
        Self::CloseKeyAriaLabel,
    ];

    /// Dotted key as written in `docsite.toml`.
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::ButtonText => "button.button_text",
            Self::ButtonAriaLabel => "button.button_aria_label",
            Self::DisplayDetails => "modal.display_details",
            Self::ResetButtonTitle => "modal.reset_button_title",
            Self::BackButtonTitle => "modal.back_button_title",
            Self::NoResultsText => "modal.no_results_text",
            Self::SelectText => "modal.footer.select_text",
            Self::SelectKeyAriaLabel => "modal.footer.select_key_aria_label",
            Self::NavigateText => "modal.footer.navigate_text",
            Self::NavigateUpKeyAriaLabel => "modal.footer.navigate_up_key_aria_label",
            Self::NavigateDownKeyAriaLabel => "modal.footer.navigate_down_key_aria_label",
            Self::CloseText => "modal.footer.close_text",
            Self::CloseKeyAriaLabel => "modal.footer.close_key_aria_label",
        }
    }

    /// Nested key path in the renderer's translation object.
    pub const fn renderer_path(&self) -> &'static [&'static str] {
        match self {
            Self::ButtonText => &["button", "buttonText"],
            Self::ButtonAriaLabel => &["button", "buttonAriaLabel"],
            Self::DisplayDetails => &["modal", "displayDetails"],
            Self::ResetButtonTitle => &["modal", "resetButtonTitle"],
            Self::BackButtonTitle => &["modal", "backButtonTitle"],
            Self::NoResultsText => &["modal", "noResultsText"],
            Self::SelectText => &["modal", "footer", "selectText"],
            Self::SelectKeyAriaLabel => &["modal", "footer", "selectKeyAriaLabel"],
            Self::NavigateText => &["modal", "footer", "navigateText"],
            Self::NavigateUpKeyAriaLabel => &["modal", "footer", "navigateUpKeyAriaLabel"],
            Self::NavigateDownKeyAriaLabel => &["modal", "footer", "navigateDownKeyAriaLabel"],
            Self::CloseText => &["modal", "footer", "closeText"],
            Self::CloseKeyAriaLabel => &["modal", "footer", "closeKeyAriaLabel"],
        }
    }

    /// The renderer's built-in English string.
    const fn default_text(&self) -> &'static str {
        match self {
            Self::ButtonText | Self::ButtonAriaLabel => "Search",
            Self::DisplayDetails => "Display detailed list",
            Self::ResetButtonTitle => "Reset search",
            Self::BackButtonTitle => "Close search",
            Self::NoResultsText => "No results for",
            Self::SelectText => "to select",
            Self::SelectKeyAriaLabel => "enter",
            Self::NavigateText => "to navigate",
            Self::NavigateUpKeyAriaLabel => "up arrow",
            Self::NavigateDownKeyAriaLabel => "down arrow",
            Self::CloseText => "to close",
            Self::CloseKeyAriaLabel => "escape",
        }
    }
}

impl SearchStrings {
    /// The renderer's default bundle, every key set.
    pub fn defaults() -> Self {
        let mut strings = Self::default();
        for key in SearchKey::ALL {
            *strings.slot_mut(key) = Some(key.default_text().to_string());
        }
        strings
    }

    /// Override value for a key. Blank strings count as unset.
    pub fn get(&self, key: SearchKey) -> Option<&str> {
        self.slot(key)
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, key: SearchKey, value: impl Into<String>) {
        *self.slot_mut(key) = Some(value.into());
    }

    /// Whether no key is overridden.
    pub fn is_empty(&self) -> bool {
        SearchKey::ALL.iter().all(|&key| self.get(key).is_none())
    }

    fn slot(&self, key: SearchKey) -> &Option<String> {
        let (b, m, f) = (&self.button, &self.modal, &self.modal.footer);
        match key {
            SearchKey::ButtonText => &b.button_text,
            SearchKey::ButtonAriaLabel => &b.button_aria_label,
            SearchKey::DisplayDetails => &m.display_details,
            SearchKey::ResetButtonTitle => &m.reset_button_title,
            SearchKey::BackButtonTitle => &m.back_button_title,
            SearchKey::NoResultsText => &m.no_results_text,
            SearchKey::SelectText => &f.select_text,
            SearchKey::SelectKeyAriaLabel => &f.select_key_aria_label,
            SearchKey::NavigateText => &f.navigate_text,
            SearchKey::NavigateUpKeyAriaLabel => &f.navigate_up_key_aria_label,
            SearchKey::NavigateDownKeyAriaLabel => &f.navigate_down_key_aria_label,
            SearchKey::CloseText => &f.close_text,
            SearchKey::CloseKeyAriaLabel => &f.close_key_aria_label,
        }
    }

    fn slot_mut(&mut self, key: SearchKey) -> &mut Option<String> {
        let (b, m) = (&mut self.button, &mut self.modal);
        match key {
            SearchKey::ButtonText => &mut b.button_text,
            SearchKey::ButtonAriaLabel => &mut b.button_aria_label,
            SearchKey::DisplayDetails => &mut m.display_details,
            SearchKey::ResetButtonTitle => &mut m.reset_button_title,
            SearchKey::BackButtonTitle => &mut m.back_button_title,
            SearchKey::NoResultsText => &mut m.no_results_text,
            SearchKey::SelectText => &mut m.footer.select_text,
            SearchKey::SelectKeyAriaLabel => &mut m.footer.select_key_aria_label,
            SearchKey::NavigateText => &mut m.footer.navigate_text,
            SearchKey::NavigateUpKeyAriaLabel => &mut m.footer.navigate_up_key_aria_label,
            SearchKey::NavigateDownKeyAriaLabel => &mut m.footer.navigate_down_key_aria_label,
            SearchKey::CloseText => &mut m.footer.close_text,
            SearchKey::CloseKeyAriaLabel => &mut m.footer.close_key_aria_label,
        }
    }
}

/// Overlay `overrides` on `defaults`, key by key.
pub fn merge(defaults: &SearchStrings, overrides: &SearchStrings) -> SearchStrings {
    let mut merged = defaults.clone();
    for key in SearchKey::ALL {
        if let Some(value) = overrides.get(key) {
            merged.set(key, value);
        }
    }
    merged
}

/// A bundle with every key resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSearchStrings(SearchStrings);

impl ResolvedSearchStrings {
    pub fn get(&self, key: SearchKey) -> &str {
        self.0.get(key).unwrap_or(key.default_text())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SearchKey, &str)> {
        SearchKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

// ============================================================================
// section
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,

    /// Locale key (`root` or a language tag) → string overrides.
    pub locales: BTreeMap<String, SearchStrings>,

    /// Required when `provider = "algolia"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaConfig>,
}

impl SearchConfig {
    pub const PROVIDER: FieldPath = FieldPath::new("search.provider");
    pub const LOCALES: FieldPath = FieldPath::new("search.locales");
    pub const ALGOLIA: FieldPath = FieldPath::new("search.algolia");

    /// Resolve the UI strings for a locale: defaults ← `root` ← `locale`.
    ///
    /// Unknown locales resolve to the `root` layer.
    pub fn strings_for(&self, locale: &str) -> ResolvedSearchStrings {
        let mut strings = SearchStrings::defaults();
        if let Some(root) = self.locales.get(ROOT_LOCALE) {
            strings = merge(&strings, root);
        }
        if locale != ROOT_LOCALE
            && let Some(overrides) = self.locales.get(locale)
        {
            strings = merge(&strings, overrides);
        }
        ResolvedSearchStrings(strings)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for locale in self.locales.keys() {
            if locale != ROOT_LOCALE && !is_language_tag(locale) {
                diag.error_with_hint(
                    Self::LOCALES.key(locale),
                    format!("'{locale}' is neither \"{ROOT_LOCALE}\" nor a language tag"),
                    "use \"root\" for the default language, or a tag like \"en-US\"",
                );
            }
        }

        match (self.provider, &self.algolia) {
            (SearchProvider::Algolia, None) => diag.error_with_hint(
                Self::ALGOLIA,
                "provider is \"algolia\" but [search.algolia] is missing",
                "set app_id, api_key and index_name",
            ),
            (SearchProvider::Algolia, Some(algolia)) => {
                let required = [
                    ("app_id", &algolia.app_id),
                    ("api_key", &algolia.api_key),
                    ("index_name", &algolia.index_name),
                ];
                for (name, value) in required {
                    if value.trim().is_empty() {
                        diag.error(Self::ALGOLIA.field(name), "must not be empty");
                    }
                }
            }
            (SearchProvider::Local, Some(_)) => {
                diag.warn(Self::ALGOLIA, "ignored while provider is \"local\"");
            }
            (SearchProvider::Local, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_complete() {
        let defaults = SearchStrings::defaults();
        for key in SearchKey::ALL {
            assert!(defaults.get(key).is_some(), "{} unset", key.config_key());
        }
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let mut overrides = SearchStrings::default();
        overrides.set(SearchKey::ButtonText, "搜索文档");

        let merged = merge(&SearchStrings::defaults(), &overrides);
        assert_eq!(merged.get(SearchKey::ButtonText), Some("搜索文档"));
        assert_eq!(merged.get(SearchKey::NoResultsText), Some("No results for"));
        assert_eq!(merged.get(SearchKey::CloseKeyAriaLabel), Some("escape"));
    }

    #[test]
    fn test_blank_override_does_not_blank_default() {
        let mut overrides = SearchStrings::default();
        overrides.set(SearchKey::NoResultsText, "");

        let merged = merge(&SearchStrings::defaults(), &overrides);
        assert_eq!(merged.get(SearchKey::NoResultsText), Some("No results for"));
    }

    #[test]
    fn test_locale_layering() {
        let config = test_parse_config(
            r#"
[search.locales.root.button]
button_text = "搜索文档"

[search.locales.root.modal]
no_results_text = "无法找到相关结果"

[search.locales.en-US.button]
button_text = "Search docs"
"#,
        );
        let search = &config.search;

        let root = search.strings_for(ROOT_LOCALE);
        assert_eq!(root.get(SearchKey::ButtonText), "搜索文档");
        assert_eq!(root.get(SearchKey::NoResultsText), "无法找到相关结果");
        assert_eq!(root.get(SearchKey::SelectText), "to select");

        let en = search.strings_for("en-US");
        assert_eq!(en.get(SearchKey::ButtonText), "Search docs");
        // Falls through to root, then to defaults
        assert_eq!(en.get(SearchKey::NoResultsText), "无法找到相关结果");
        assert_eq!(en.get(SearchKey::NavigateText), "to navigate");

        // Unknown locale gets the root layer
        assert_eq!(search.strings_for("fr").get(SearchKey::ButtonText), "搜索文档");
    }

    #[test]
    fn test_only_button_text_overridden() {
        let config = test_parse_config("[search.locales.root.button]\nbutton_text = \"Find\"");
        let strings = config.search.strings_for(ROOT_LOCALE);
        assert_eq!(strings.get(SearchKey::ButtonText), "Find");
        for (key, value) in strings.iter() {
            assert!(!value.is_empty(), "{} resolved empty", key.config_key());
        }
        assert_eq!(strings.get(SearchKey::NoResultsText), "No results for");
    }

    #[test]
    fn test_algolia_requires_credentials() {
        let mut diag = ConfigDiagnostics::new();
        SearchConfig {
            provider: SearchProvider::Algolia,
            ..Default::default()
        }
        .validate(&mut diag);
        assert!(diag.has_error_at("search.algolia"));

        let mut diag = ConfigDiagnostics::new();
        SearchConfig {
            provider: SearchProvider::Algolia,
            algolia: Some(AlgoliaConfig {
                app_id: "APP".into(),
                api_key: String::new(),
                index_name: "docs".into(),
            }),
            ..Default::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_at("search.algolia.api_key"));
    }

    #[test]
    fn test_bad_locale_key() {
        let mut config = SearchConfig::default();
        config
            .locales
            .insert("zh_CN".into(), SearchStrings::default());
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_at("search.locales.\"zh_CN\""));
    }

    #[test]
    fn test_algolia_ignored_for_local() {
        let mut diag = ConfigDiagnostics::new();
        SearchConfig {
            algolia: Some(AlgoliaConfig::default()),
            ..Default::default()
        }
        .validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
