//! Command-line interface definitions.
//!
//! Running without arguments builds the site described by `./pubpages.toml`.
//! Every flag overrides the matching config field.

use clap::Parser;
use std::path::PathBuf;

/// Publication page generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Site root directory; all configured paths resolve against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (relative to root)
    #[arg(short = 'C', long, default_value = "pubpages.toml")]
    pub config: PathBuf,

    /// Output directory for generated pages (relative to root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override base URL for the site.
    ///
    /// Useful for CI deployments where the production URL differs from the
    /// one in pubpages.toml.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Minify the generated pages
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Skip publications missing a required field instead of failing
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub skip_invalid: Option<bool>,
}
