//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! SiteBuilder::build()
//!     │
//!     ├── SiteConfig::validate()
//!     ├── load_publications() ──► Catalog (validated, nothing written yet)
//!     ├── Template::from_path() ──► page template, list template if enabled
//!     │
//!     ├── for each publication ──► render_page() ──► <output>/<id>.html
//!     ├── render_list() ──► [build.list] output (optional)
//!     │
//!     ├── build_sitemap() ──► sitemap.xml (home page + generated pages)
//!     │
//!     └── cleanup_orphans() ──► delete <output>/*.html not written above,
//!                               except protected site files
//! ```
//!
//! Every input is read and validated before the first file is written. A
//! failing page write aborts the rest of the build; pages already written stay.

use crate::{
    config::SiteConfig,
    data::load_publications,
    generator::{
        cleanup::{DirLister, FsLister, cleanup_orphans},
        list::render_list,
        page::render_page,
        sitemap::build_sitemap,
    },
    log,
    utils::{
        date::{Clock, SystemClock},
        minify::{MinifyType, minify},
        template::{Placeholder, Template},
    },
};
use anyhow::{Context, Result};
use std::{collections::HashSet, fs};

/// Summary of one build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Absolute URLs of the generated pages, in build order.
    pub page_urls: Vec<String>,
    /// Entries written to the sitemap, home page included.
    pub sitemap_entries: usize,
    /// Orphan pages deleted from the output directory.
    pub removed: Vec<String>,
    /// Records skipped because of `skip_invalid`.
    pub skipped: usize,
    /// Cards on the publication list, `None` when the list is disabled.
    pub listed: Option<usize>,
}

/// Builds publication pages, the sitemap, and prunes orphans in one pass.
pub struct SiteBuilder<'a> {
    config: &'a SiteConfig,
    clock: Box<dyn Clock>,
    lister: Box<dyn DirLister>,
}

impl<'a> SiteBuilder<'a> {
    /// Builder using the system clock and the real output directory listing.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
            lister: Box::new(FsLister),
        }
    }

    /// Replace the date source used for sitemap `lastmod`.
    #[cfg(test)]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the listing used to find orphan pages.
    #[cfg(test)]
    pub fn with_lister(mut self, lister: impl DirLister + 'static) -> Self {
        self.lister = Box::new(lister);
        self
    }

    /// Run the whole pipeline.
    pub fn build(&self) -> Result<BuildReport> {
        let config = self.config;
        config.validate()?;

        let data_path = config.data_path();
        let template_path = config.template_path();
        let output_dir = config.output_dir();

        let catalog = load_publications(&data_path, config.build.skip_invalid)
            .with_context(|| format!("Failed to load publications from {}", data_path.display()))?;
        let template = Template::from_path(&template_path)?;
        let list = match config.list_paths() {
            Some((list_template, list_path)) => Some((Template::from_path(&list_template)?, list_path)),
            None => None,
        };

        if template.placeholders().is_empty() {
            log!("warn"; "{} contains no placeholders", template_path.display());
        }
        log!("data"; "found {} publications, {} with pages", catalog.total, catalog.pages.len());

        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        let mut generated = HashSet::with_capacity(catalog.pages.len());
        let mut report = BuildReport {
            skipped: catalog.skipped.len(),
            ..Default::default()
        };

        for publication in &catalog.pages {
            let filename = publication.filename();
            let path = output_dir.join(&filename);

            let html = render_page(&template, publication, config);
            let html = minify(MinifyType::Html(html.as_bytes()), config);
            fs::write(&path, &*html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("page"; "{}", filename);

            report.page_urls.push(config.page_url(&filename));
            generated.insert(filename);
        }

        if let Some((list_template, list_path)) = &list {
            if !list_template.placeholders().contains(&Placeholder::PublicationList) {
                log!("warn"; "list template has no {{{{PUBLICATION_LIST}}}} token");
            }
            if catalog.unlisted > 0 {
                log!("warn"; "{} records left off the list: invalid field types", catalog.unlisted);
            }

            let html = render_list(list_template, &catalog.listed, &generated, config);
            let html = minify(MinifyType::Html(html.as_bytes()), config);
            if let Some(parent) = list_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(list_path, &*html)
                .with_context(|| format!("Failed to write {}", list_path.display()))?;
            log!("list"; "{} publications in {}", catalog.listed.len(), list_path.display());

            report.listed = Some(catalog.listed.len());
        }

        report.sitemap_entries =
            build_sitemap(config, &report.page_urls, &self.clock.today_ymd())?;
        report.removed = cleanup_orphans(
            &output_dir,
            &generated,
            &config.protected_paths(),
            self.lister.as_ref(),
        )?;

        log!(
            "build";
            "done: {} pages, {} orphans removed",
            report.page_urls.len(),
            report.removed.len()
        );
        Ok(report)
    }
}
