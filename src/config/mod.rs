//! Site configuration management for `pubpages.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `[base]`    | Site URL and home page used for absolute links    |
//! | `[build]`   | Data, template and output paths, sitemap, minify  |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://example.org"
//!
//! [build]
//! data = "data/publications.json"
//! template = "template.html"
//! output = "publications"
//!
//! [build.sitemap]
//! path = "sitemap.xml"
//!
//! [build.list]
//! template = "list.html"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing pubpages.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site URL information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Publication JSON source, resolved against the root.
    pub fn data_path(&self) -> PathBuf {
        self.get_root().join(&self.build.data)
    }

    /// Page template, resolved against the root.
    pub fn template_path(&self) -> PathBuf {
        self.get_root().join(&self.build.template)
    }

    /// Directory receiving the generated pages, resolved against the root.
    pub fn output_dir(&self) -> PathBuf {
        self.get_root().join(&self.build.output)
    }

    /// Sitemap file location, resolved against the root.
    pub fn sitemap_path(&self) -> PathBuf {
        self.get_root().join(&self.build.sitemap.path)
    }

    /// List template and rendered list page, when the list is enabled.
    pub fn list_paths(&self) -> Option<(PathBuf, PathBuf)> {
        let list = &self.build.list;
        let template = list.template.as_ref()?;
        Some((
            self.get_root().join(template),
            self.get_root().join(&list.output),
        ))
    }

    /// Site files that must survive orphan cleanup even when they live in
    /// the output directory.
    pub fn protected_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![
            self.template_path(),
            self.get_root().join(self.base.home.trim_start_matches('/')),
            self.sitemap_path(),
        ];
        if let Some((template, output)) = self.list_paths() {
            paths.extend([template, output]);
        }
        paths
    }

    /// URL path of the output directory relative to the site root.
    ///
    /// `publications` → `"publications"`, `./site/pubs/` → `"site/pubs"`.
    /// Only meaningful once [`validate`](Self::validate) has accepted the path.
    pub fn output_url_prefix(&self) -> String {
        self.build
            .output
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Absolute URL of a generated page.
    pub fn page_url(&self, filename: &str) -> String {
        format!("{}/{}/{filename}", self.base_url(), self.output_url_prefix())
    }

    /// Absolute URL of the site home page (always the first sitemap entry).
    pub fn home_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url(),
            self.base.home.trim_start_matches('/')
        )
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(root) = &cli.root {
            self.set_root(root);
        }

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
        Self::update_option(&mut self.build.skip_invalid, cli.skip_invalid.as_ref());

        if let Some(url) = &cli.base_url {
            self.base.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        match &self.base.url {
            None => bail!(ConfigError::Validation(
                "[base.url] is required to build absolute links".into()
            )),
            Some(url) if !url.starts_with("http") => bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            )),
            _ => {}
        }

        self.validate_output()?;

        if self.build.sitemap.path.as_os_str().is_empty() {
            bail!(ConfigError::Validation(
                "[build.sitemap.path] must not be empty".into()
            ));
        }

        Ok(())
    }

    /// The output directory must be a subdirectory of the root: cleanup
    /// deletes every unknown `.html` file in it.
    fn validate_output(&self) -> Result<(), ConfigError> {
        let output = &self.build.output;
        let reject = |reason| ConfigError::OutputPath {
            path: output.clone(),
            reason,
        };

        for component in output.components() {
            match component {
                Component::ParentDir => return Err(reject("must not leave the site root")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(reject("must be relative to the site root"));
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }
        if self.output_url_prefix().is_empty() {
            return Err(reject("must not be the site root"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
