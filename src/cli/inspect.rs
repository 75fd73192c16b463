//! `docsite sidebar` and `docsite strings`: look up resolved values.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::config::{SiteConfig, section::search::ROOT_LOCALE};
use crate::log;

/// Print the sidebar a page path resolves to.
pub fn show_sidebar(config: &SiteConfig, page_path: &str) -> Result<()> {
    let Some((prefix, sections)) = config.sidebar.resolve(page_path) else {
        bail!("no sidebar prefix matches '{page_path}'");
    };

    log!("sidebar"; "{} → {}", page_path, prefix.cyan());
    for section in sections {
        let marker = if section.collapsed { "▸" } else { "▾" };
        println!("{marker} {}", section.text);
        for item in &section.items {
            println!("    {} {}", item.text, item.link.dimmed());
        }
    }
    Ok(())
}

/// Print every search UI string for a locale, marking overridden ones.
pub fn show_strings(config: &SiteConfig, locale: &str) -> Result<()> {
    let resolved = config.search.strings_for(locale);
    if locale != ROOT_LOCALE && !config.search.locales.contains_key(locale) {
        log!("warning"; "no overrides for locale '{}', showing root strings", locale);
    }

    for (key, value) in resolved.iter() {
        println!("{:<44} {}", key.config_key(), value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sidebar() {
        let config = SiteConfig::load().unwrap();
        assert!(show_sidebar(&config, "/api/auth/password-login").is_ok());
        assert!(show_sidebar(&config, "/blog/").is_err());
    }

    #[test]
    fn test_show_strings() {
        let config = SiteConfig::load().unwrap();
        assert!(show_strings(&config, ROOT_LOCALE).is_ok());
        assert!(show_strings(&config, "en-US").is_ok());
    }
}
