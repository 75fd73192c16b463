//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Documentation site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    version: (),

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nearest docsite.toml, else built-in)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a docsite.toml seeded from the built-in configuration
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write into (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing docsite.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved configuration
    #[command(visible_alias = "d")]
    Dump {
        #[command(flatten)]
        args: DumpArgs,
    },

    /// Show which sidebar a page path resolves to
    #[command(visible_alias = "s")]
    Sidebar {
        /// Page path, e.g. /api/auth/password-login
        path: String,
    },

    /// Show the merged search UI strings for a locale
    Strings {
        /// Locale key (default: root)
        #[arg(default_value = "root")]
        locale: String,
    },
}

/// Dump command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DumpArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = DumpFormat::Renderer)]
    pub format: DumpFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    /// Object in the renderer's shape (camelCase, head tuples, themeConfig)
    Renderer,
    /// SiteConfig as JSON
    Json,
    /// SiteConfig as docsite.toml
    Toml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dump() {
        let cli = Cli::parse_from(["docsite", "dump", "--format", "toml", "-o", "out.toml"]);
        let Commands::Dump { args } = cli.command else {
            panic!("expected dump");
        };
        assert_eq!(args.format, DumpFormat::Toml);
        assert_eq!(args.output, Some(PathBuf::from("out.toml")));
        assert!(!args.pretty);
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["docsite", "check", "-C", "site/docsite.toml", "-V"]);
        assert_eq!(cli.config, Some(PathBuf::from("site/docsite.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_version_is_long_only() {
        let err = Cli::try_parse_from(["docsite", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = Cli::parse_from(["docsite", "-V", "check"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_strings_default_locale() {
        let cli = Cli::parse_from(["docsite", "strings"]);
        assert!(matches!(cli.command, Commands::Strings { ref locale } if locale == "root"));
    }
}
