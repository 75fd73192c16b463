//! docsite - typed configuration for an API reference documentation site.
//!
//! Loads the site configuration (compiled-in, or `docsite.toml`), rejects
//! anything malformed, and hands the result to the documentation renderer.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Init doesn't need (or want) an existing config
    if let Commands::Init { dir, force } = &cli.command {
        return cli::init::write_config(dir.as_deref(), *force).map(|_| ());
    }

    let (config, source) = match SiteConfig::discover(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            log!("error"; "{:#}", e);
            std::process::exit(1);
        }
    };
    init_config(config);
    debug!("config"; "loaded {}", source);

    let config = cfg();

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Check => cli::check::check_config(&config, &source),
        Commands::Dump { args } => cli::dump::run_dump(args, &config),
        Commands::Sidebar { path } => cli::inspect::show_sidebar(&config, path),
        Commands::Strings { locale } => cli::inspect::show_strings(&config, locale),
    }
}
