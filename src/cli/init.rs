//! `docsite init`: write a starting `docsite.toml`.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{CONFIG_FILE, SiteConfig};
use crate::log;

/// Generate docsite.toml content from the built-in configuration.
pub fn generate_config_template() -> Result<String> {
    let config = SiteConfig::load()?;
    let body = config
        .to_toml()
        .context("Failed to serialize built-in configuration")?;

    let mut out = String::with_capacity(body.len() + 128);
    out.push_str(&format!(
        "# docsite configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Validate with `docsite check`, hand off with `docsite dump`.\n\n");
    out.push_str(&body);
    Ok(out)
}

/// Write docsite.toml into `dir` (current directory when `None`).
pub fn write_config(dir: Option<&Path>, force: bool) -> Result<PathBuf> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    let path = root.join(CONFIG_FILE);

    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite",
            path.display()
        );
    }

    fs::create_dir_all(&root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template()?)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(Some(temp.path()), false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# docsite configuration file"));
        assert!(content.contains("[site]"));

        // The written file loads back to the built-in configuration
        let loaded = SiteConfig::from_path(&path).unwrap();
        assert_eq!(loaded, SiteConfig::load().unwrap());
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "custom content").unwrap();

        assert!(write_config(Some(temp.path()), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");

        write_config(Some(temp.path()), true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "custom content");
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("new-site");
        let path = write_config(Some(&dir), false).unwrap();
        assert!(path.exists());
    }
}
