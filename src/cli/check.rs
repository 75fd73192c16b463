//! `docsite check`: load, validate, summarize.

use anyhow::Result;

use crate::config::{ConfigSource, SiteConfig};
use crate::log;

/// Print a one-screen summary of a validated configuration.
///
/// Loading already failed on any error, so reaching here means the
/// configuration is ready for the renderer.
pub fn check_config(config: &SiteConfig, source: &ConfigSource) -> Result<()> {
    log!("check"; "{} is valid", source);
    for line in summary(config) {
        eprintln!("  {line}");
    }
    Ok(())
}

fn summary(config: &SiteConfig) -> Vec<String> {
    let site = &config.site;
    let prefixes: Vec<_> = config.sidebar.prefixes().collect();
    let locales: Vec<_> = config.search.locales.keys().map(String::as_str).collect();
    let sections: usize = config.sidebar.iter().map(|(_, s)| s.len()).sum();

    vec![
        format!("title:    {} ({})", site.title, site.lang),
        format!("base:     {}", if site.base.is_empty() { "/" } else { site.base.as_str() }),
        format!("head:     {} tag(s)", config.head.len()),
        format!("nav:      {} link(s)", config.nav.len()),
        format!(
            "sidebar:  {} section(s) under {}",
            sections,
            prefixes.join(", ")
        ),
        format!(
            "search:   {}{}",
            config.search.provider.as_str(),
            if locales.is_empty() {
                String::new()
            } else {
                format!(" [{}]", locales.join(", "))
            }
        ),
        format!(
            "outline:  h{}..=h{} \"{}\"",
            config.outline.level.min, config.outline.level.max, config.outline.label
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_prefixes_and_locales() {
        let config = SiteConfig::load().unwrap();
        let lines = summary(&config);
        let sidebar = lines.iter().find(|l| l.starts_with("sidebar:")).unwrap();
        assert!(sidebar.contains("/api/auth/"));
        assert!(sidebar.contains("/guide/"));

        let search = lines.iter().find(|l| l.starts_with("search:")).unwrap();
        assert_eq!(search, "search:   local [root]");

        assert!(lines.iter().any(|l| l == "outline:  h2..=h3 \"页面导航\""));
    }
}
