//! Static publication list.
//!
//! Every visible record becomes one card in the list template's
//! `{{PUBLICATION_LIST}}` token:
//!
//! ```text
//! div.pub-card
//!     ├── div.pub-content   title link, authors, venue (year)
//!     ├── div.pub-actions   PDF, Details, BibTeX toggle
//!     └── div#bib-N         bibtex, hidden until toggled
//! ```
//!
//! The title links to the detail page when this build wrote one, else to the
//! PDF, else it is plain text. The list template provides `toggleBib`.

use crate::{
    config::SiteConfig,
    data::ListEntry,
    utils::{
        escape::escape_html,
        template::{Placeholder, Template},
    },
};
use std::{collections::HashSet, path::Component};

/// Render the list page. Only `{{PUBLICATION_LIST}}` is replaced.
pub fn render_list(
    template: &Template,
    entries: &[ListEntry],
    generated: &HashSet<String>,
    config: &SiteConfig,
) -> String {
    let page_dir = page_dir_href(config);
    let cards: String = entries
        .iter()
        .map(|entry| card(entry, generated, &page_dir))
        .collect();

    template.render(|placeholder| match placeholder {
        Placeholder::PublicationList => Some(cards.as_str()),
        _ => None,
    })
}

/// Output directory as seen from the list page, with a trailing `/`.
fn page_dir_href(config: &SiteConfig) -> String {
    let depth = config.build.list.output.parent().map_or(0, |dir| {
        dir.components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count()
    });
    format!("{}{}/", "../".repeat(depth), config.output_url_prefix())
}

fn card(entry: &ListEntry, generated: &HashSet<String>, page_dir: &str) -> String {
    let page = entry
        .page_filename()
        .filter(|name| generated.contains(name))
        .map(|name| escape_html(&format!("{page_dir}{name}")));
    let pdf = (!entry.pdf_link.is_empty()).then(|| escape_html(&entry.pdf_link));

    let title = match (&page, &pdf) {
        (Some(href), _) => format!(r#"<a href="{href}" class="pub-title-link">{}</a>"#, entry.title),
        (None, Some(href)) => format!(
            r#"<a href="{href}" target="_blank" class="pub-title-link">{}</a>"#,
            entry.title
        ),
        (None, None) => format!(r#"<span class="pub-title-static">{}</span>"#, entry.title),
    };
    let year = entry
        .year
        .as_ref()
        .map(|year| format!(" <strong>({})</strong>", escape_html(&year.to_string())))
        .unwrap_or_default();

    let mut actions = String::new();
    if let Some(href) = &pdf {
        actions.push_str(&format!(
            "\n        <a href=\"{href}\" target=\"_blank\" class=\"btn-link\">PDF</a>"
        ));
    }
    if let Some(href) = &page {
        actions.push_str(&format!(
            "\n        <a href=\"{href}\" class=\"btn-link\">Details</a>"
        ));
    }

    let index = entry.index;
    format!(
        r#"
<div class="pub-card">
    <div class="pub-content">
        <h4>{title}</h4>
        <p class="authors">{authors}</p>
        <p class="venue">{venue}{year}</p>
    </div>
    <div class="pub-actions">{actions}
        <button class="btn-bib" onclick="toggleBib('bib-{index}')">BibTeX</button>
    </div>
    <div id="bib-{index}" class="bibtex-hidden">{bibtex}</div>
</div>"#,
        authors = escape_html(&entry.authors.join(", ")),
        venue = escape_html(&entry.venue),
        bibtex = entry.bibtex,
    )
}
