//! Sitemap generation.
//!
//! Lists the home page followed by every generated publication page, in the
//! order the pages were built.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.org/index.html</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! `lastmod` is the build date for every entry, not the date a record changed.

use crate::{
    config::SiteConfig,
    log,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Write the sitemap for the generated page URLs.
///
/// Returns the number of entries, including the home page.
pub fn build_sitemap(config: &SiteConfig, page_urls: &[String], lastmod: &str) -> Result<usize> {
    let sitemap = Sitemap::new(&config.home_url(), page_urls, lastmod);
    let count = sitemap.urls.len();
    sitemap.write(config)?;
    Ok(count)
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (YYYY-MM-DD format)
    lastmod: String,
}

impl Sitemap {
    /// Home page first, then the pages in build order, all stamped with `lastmod`.
    fn new(home_url: &str, page_urls: &[String], lastmod: &str) -> Self {
        let urls = std::iter::once(home_url)
            .chain(page_urls.iter().map(String::as_str))
            .map(|loc| UrlEntry {
                loc: loc.to_owned(),
                lastmod: lastmod.to_owned(),
            })
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to its configured path, replacing any previous file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HOME: &str = "https://example.org/index.html";

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_home_only() {
        let xml = Sitemap::new(HOME, &[], "2025-01-01").into_xml();

        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://example.org/index.html</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
    }

    #[test]
    fn test_sitemap_home_first_then_build_order() {
        let pages = urls(&[
            "https://example.org/publications/b.html",
            "https://example.org/publications/a.html",
        ]);
        let xml = Sitemap::new(HOME, &pages, "2025-01-01").into_xml();

        let locs: Vec<_> = xml
            .lines()
            .filter_map(|line| line.trim().strip_prefix("<loc>"))
            .filter_map(|rest| rest.strip_suffix("</loc>"))
            .collect();
        assert_eq!(
            locs,
            [
                HOME,
                "https://example.org/publications/b.html",
                "https://example.org/publications/a.html",
            ]
        );
    }

    #[test]
    fn test_sitemap_same_lastmod_for_every_entry() {
        let pages = urls(&["https://example.org/publications/a.html"]);
        let xml = Sitemap::new(HOME, &pages, "2024-12-31").into_xml();

        assert_eq!(xml.matches("<lastmod>2024-12-31</lastmod>").count(), 2);
        assert_eq!(xml.matches("<lastmod>").count(), 2);
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let pages = urls(&["https://example.org/p?a=1&b=2"]);
        let xml = Sitemap::new(HOME, &pages, "2025-01-01").into_xml();

        assert!(xml.contains("<loc>https://example.org/p?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = Sitemap::new(HOME, &[], "2025-01-01").into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_build_sitemap_writes_and_replaces() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.org".into());
        config.set_root(dir.path());

        let sitemap_path = dir.path().join("sitemap.xml");
        fs::write(&sitemap_path, "stale").unwrap();

        let pages = urls(&["https://example.org/publications/a.html"]);
        let count = build_sitemap(&config, &pages, "2025-01-01").unwrap();
        assert_eq!(count, 2);

        let written = fs::read_to_string(&sitemap_path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("<loc>https://example.org/index.html</loc>"));
        assert!(written.contains("<loc>https://example.org/publications/a.html</loc>"));
    }
}
