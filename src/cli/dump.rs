//! `docsite dump`: emit the resolved configuration.

use anyhow::{Context, Result};

use crate::cli::{DumpArgs, DumpFormat};
use crate::config::SiteConfig;
use crate::generator::{renderer::to_renderer_json, write_output};

pub fn run_dump(args: &DumpArgs, config: &SiteConfig) -> Result<()> {
    let content = render(config, args.format, args.pretty)?;
    write_output(&content, args.output.as_deref())?;

    if let Some(path) = &args.output {
        crate::log!("dump"; "wrote {}", path.display());
    }
    Ok(())
}

fn render(config: &SiteConfig, format: DumpFormat, pretty: bool) -> Result<String> {
    match format {
        DumpFormat::Renderer => to_json(&to_renderer_json(config), pretty),
        DumpFormat::Json => to_json(config, pretty),
        DumpFormat::Toml => config.to_toml().context("Failed to serialize config as TOML"),
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize config as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_formats() {
        let config = SiteConfig::load().unwrap();

        let renderer = render(&config, DumpFormat::Renderer, false).unwrap();
        assert!(renderer.contains("\"themeConfig\""));

        let json = render(&config, DumpFormat::Json, true).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let toml = render(&config, DumpFormat::Toml, false).unwrap();
        assert!(toml.contains("[site]"));
    }

    #[test]
    fn test_dump_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        let args = DumpArgs {
            format: DumpFormat::Renderer,
            pretty: true,
            output: Some(path.clone()),
        };
        run_dump(&args, &SiteConfig::load().unwrap()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["title"], "滴答清单 API");
    }
}
