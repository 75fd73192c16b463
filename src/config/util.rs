//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/docs/api/auth/   ← cwd
/// /home/user/docs/docsite.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("api/auth");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("docsite.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("docsite.toml")).unwrap();
        assert_eq!(found, temp.path().join("docsite.toml"));
    }

    #[test]
    fn test_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file_from(temp.path(), Path::new("no-such-docsite.toml")).is_none());
    }

    #[test]
    fn test_absolute_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        assert!(find_config_file_from(temp.path(), &path).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde(Path::new("a/b.toml")), PathBuf::from("a/b.toml"));
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(expand_tilde(Path::new("~/x.toml")), Path::new(&home).join("x.toml"));
        }
    }
}
