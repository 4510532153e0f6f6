//! pubpages - static detail pages for academic publications.

mod build;
mod cli;
mod config;
mod data;
mod generator;
mod utils;

use anyhow::Result;
use build::SiteBuilder;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Err(err) = SiteBuilder::new(&config).build() {
        log!("error"; "build failed: {:#}", err);
        return Err(err);
    }
    Ok(())
}

/// Load configuration from CLI arguments.
///
/// A missing config file falls back to defaults; CLI flags are applied on top.
/// Validation happens when the build starts.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("warn"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    Ok(config)
}
