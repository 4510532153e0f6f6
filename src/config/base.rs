//! `[base]` section configuration.
//!
//! Contains the site URL used to build every absolute link.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in pubpages.toml - where the site is served from.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://example.org"
/// home = "index.html"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Base URL for citation metadata, PDF links and sitemap entries.
    /// Required for every build.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Home page path relative to `url`, listed first in the sitemap.
    #[serde(default = "defaults::base::home")]
    #[educe(Default = defaults::base::home())]
    pub home: String,
}
