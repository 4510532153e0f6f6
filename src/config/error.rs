//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid pubpages.toml")]
    Toml(#[from] toml::de::Error),

    #[error("[build.output] `{path}` {reason}")]
    OutputPath { path: PathBuf, reason: &'static str },

    #[error("Config validation error: {0}")]
    Validation(String),
}
