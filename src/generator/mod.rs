//! Output generators for the renderer hand-off.
//!
//! - **Renderer**: the JSON object the documentation renderer consumes
//!   (`renderer.rs`)
//!
//! Generators only read the validated `SiteConfig`; they never check it
//! again.

pub mod renderer;

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

/// Write generated content to a file, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{content}")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_creates_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out/site.json");
        write_output("{}", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
