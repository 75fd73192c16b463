//! Site configuration for the documentation renderer.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── head       # [[head]]
//! │   ├── nav        # [[nav]]
//! │   ├── sidebar    # [sidebar]
//! │   ├── social     # [[social_links]]
//! │   ├── search     # [search]
//! │   ├── outline    # [outline]
//! │   ├── last_updated
//! │   └── footer     # [footer], [doc_footer]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── builtin        # Compiled-in literals
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration comes either from the compiled-in literals
//! ([`SiteConfig::load`]) or from a `docsite.toml` with the same shape.
//! Both paths validate before returning, so the renderer only ever sees
//! a well-formed value.

mod builtin;
pub mod section;
pub mod types;
mod util;

use util::{expand_tilde, find_config_file};

pub use section::{
    DocFooterConfig, FooterConfig, HeadTag, LastUpdatedConfig, NavItem, OutlineConfig,
    SearchConfig, SidebarMap, SidebarSection, SiteMetadata, SocialLink,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// Config file searched for when `--config` is not given.
pub const CONFIG_FILE: &str = "docsite.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure, handed to the renderer as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title, description, language, base path.
    pub site: SiteMetadata,

    /// Extra `<head>` elements, in output order.
    pub head: Vec<HeadTag>,

    /// Top navigation bar.
    pub nav: Vec<NavItem>,

    /// Prefix-scoped sidebars.
    pub sidebar: SidebarMap,

    /// Icon links in the navigation bar.
    pub social_links: Vec<SocialLink>,

    pub search: SearchConfig,

    pub outline: OutlineConfig,

    pub last_updated: LastUpdatedConfig,

    pub footer: FooterConfig,

    pub doc_footer: DocFooterConfig,
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in configuration"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl SiteConfig {
    /// Build and validate the compiled-in configuration.
    ///
    /// Deterministic and free of I/O: two calls return equal values.
    pub fn load() -> Result<Self, ConfigError> {
        builtin::site().checked()
    }

    /// Validate without printing anything; warnings stay in [`Self::diagnose`].
    pub fn checked(self) -> Result<Self, ConfigError> {
        self.diagnose().into_result().map_err(ConfigError::Diagnostics)?;
        Ok(self)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration source for a CLI invocation.
    ///
    /// Order: explicit `--config`, then `docsite.toml` found by walking up
    /// from the working directory, then the compiled-in literals.
    pub fn discover(cli: &Cli) -> Result<(Self, ConfigSource)> {
        if let Some(path) = &cli.config {
            let path = expand_tilde(path);
            let config = Self::from_path(&path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?;
            return Ok((config, ConfigSource::File(path)));
        }

        match find_config_file(Path::new(CONFIG_FILE)) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let config = Self::from_path(&path)
                    .with_context(|| format!("Failed to load config '{}'", path.display()))?;
                Ok((config, ConfigSource::File(path)))
            }
            None => {
                debug!("config"; "no {} found, using built-in configuration", CONFIG_FILE);
                let config = Self::load()?;
                config.diagnose().print_warnings();
                Ok((config, ConfigSource::Builtin))
            }
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Serialize back to `docsite.toml` form.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every check and collect the results without failing.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        HeadTag::validate_all(&self.head, &mut diag);
        NavItem::validate_list(&self.nav, &NavItem::FIELD, &mut diag);
        self.sidebar.validate(&mut diag);
        SocialLink::validate_all(&self.social_links, &mut diag);
        self.search.validate(&mut diag);
        self.outline.validate(&mut diag);
        self.last_updated.validate(&mut diag);

        self.check_nav_coverage(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings, and fails with every collected error at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Warn about internal nav links that no sidebar prefix covers.
    fn check_nav_coverage(&self, diag: &mut ConfigDiagnostics) {
        if self.sidebar.is_empty() {
            return;
        }
        for (i, item) in self.nav.iter().enumerate() {
            if item.is_internal() && item.link != "/" && !self.sidebar.covers_path(&item.link) {
                diag.warn(
                    NavItem::FIELD.index(i).field("link"),
                    format!("'{}' has no sidebar", item.link),
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config without validation.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[site]
title = "API Docs"
base = "/Docs/"

[[nav]]
text = "API"
link = "/api/"

[[sidebar."/api/"]]
text = "Reference"
items = [{ text = "Overview", link = "/api/" }]
"#;

    #[test]
    fn test_load_is_deterministic() {
        let a = SiteConfig::load().unwrap();
        let b = SiteConfig::load().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_base_path_case_preserved() {
        let config = SiteConfig::from_str(MINIMAL).unwrap();
        assert_eq!(config.site.title, "API Docs");
        assert_eq!(config.site.base, "/Docs/");
    }

    #[test]
    fn test_base_path_without_slashes_fails() {
        let content = MINIMAL.replace("base = \"/Docs/\"", "base = \"docs\"");
        let err = SiteConfig::from_str(&content).unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => assert!(diag.has_error_at("site.base")),
            other => panic!("unexpected error: {other}"),
        }

        let content = MINIMAL.replace("base = \"/Docs/\"", "base = \"/docs/\"");
        assert!(SiteConfig::from_str(&content).is_ok());
    }

    #[test]
    fn test_empty_sidebar_fails() {
        let err = SiteConfig::from_str("[site]\ntitle = \"API Docs\"").unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics");
        };
        assert!(diag.has_error_at("sidebar"));
    }

    #[test]
    fn test_duplicate_nav_targets_fail() {
        let content = format!("{MINIMAL}\n[[nav]]\ntext = \"Again\"\nlink = \"/api/\"\n");
        let err = SiteConfig::from_str(&content).unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics");
        };
        assert!(diag.has_error_at("nav[1].link"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"Docs\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SiteConfig::load().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SiteConfig::load().unwrap();
        let toml = config.to_toml().unwrap();
        let parsed = SiteConfig::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_nav_without_sidebar_warns() {
        let content = format!("{MINIMAL}\n[[nav]]\ntext = \"Guide\"\nlink = \"/guide/\"\n");
        let config: SiteConfig = toml::from_str(&content).unwrap();
        let diag = config.diagnose();
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "nav[1].link");
    }

    #[test]
    fn test_checked_passes_warnings_through() {
        let content = format!("{MINIMAL}\n[[nav]]\ntext = \"Guide\"\nlink = \"/guide/\"\n");
        let config: SiteConfig = toml::from_str(&content).unwrap();
        let checked = config.clone().checked().unwrap();
        assert_eq!(checked, config);
        assert_eq!(checked.diagnose().warnings().len(), 1);

        let broken = MINIMAL.replace("base = \"/Docs/\"", "base = \"docs\"");
        let config: SiteConfig = toml::from_str(&broken).unwrap();
        assert!(matches!(config.checked(), Err(ConfigError::Diagnostics(_))));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = format!("{MINIMAL}\n[unknown_section]\nfield = \"value\"");
        let (config, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();

        assert_eq!(config.site.title, "API Docs");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, MINIMAL).unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.sidebar.len(), 1);

        let missing = SiteConfig::from_path(&temp.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Builtin.to_string(), "built-in configuration");
        assert_eq!(
            ConfigSource::File(PathBuf::from("docsite.toml")).to_string(),
            "docsite.toml"
        );
    }
}
