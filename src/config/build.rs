//! `[build]` section configuration.
//!
//! Contains input/output paths, minification, record validation, sitemap and
//! publication list settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in pubpages.toml - page generation configuration.
///
/// # Example
/// ```toml
/// [build]
/// data = "data/publications.json"   # Publication records
/// template = "template.html"        # Page template with {{...}} tokens
/// output = "publications"           # Generated pages
/// minify = false
///
/// [build.sitemap]
/// path = "sitemap.xml"
///
/// [build.list]
/// template = "list.html"            # Enables the static publication list
/// output = "index.html"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// JSON array of publication records.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// HTML template containing the page placeholders.
    #[serde(default = "defaults::build::template")]
    #[educe(Default = defaults::build::template())]
    pub template: PathBuf,

    /// Output directory for `<id>.html` pages. Also the URL path of the pages.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify generated pages.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Skip records missing a required field instead of aborting the build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub skip_invalid: bool,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Static publication list settings.
    #[serde(default)]
    pub list: ListConfig,
}

/// `[build.sitemap]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Sitemap path relative to the site root.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.list]` section.
///
/// The list page is only rendered when `template` is set.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    /// List template containing `{{PUBLICATION_LIST}}`, relative to the root.
    #[serde(default = "defaults::build::list::template")]
    #[educe(Default = defaults::build::list::template())]
    pub template: Option<PathBuf>,

    /// Rendered list page, relative to the root.
    #[serde(default = "defaults::build::list::output")]
    #[educe(Default = defaults::build::list::output())]
    pub output: PathBuf,
}
