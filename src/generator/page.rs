//! Publication page rendering.
//!
//! Each page is the template with its seven placeholders filled:
//!
//! | Token            | Value                                          | Escaped |
//! |------------------|------------------------------------------------|---------|
//! | `{{TITLE}}`      | title                                          | no      |
//! | `{{META_TAGS}}`  | citation meta tags + description               | per tag |
//! | `{{AUTHORS}}`    | authors joined with `, `                       | yes     |
//! | `{{VENUE}}`      | `venue (year)`                                 | venue   |
//! | `{{ABSTRACT}}`   | abstract                                       | no      |
//! | `{{BIBTEX}}`     | bibtex                                         | no      |
//! | `{{PDF_BUTTON}}` | "Read PDF" link, empty without a PDF           | href    |
//!
//! Title, abstract and bibtex are trusted HTML fragments in the body; only
//! their copies inside meta attributes are escaped. `{{PUBLICATION_LIST}}` is
//! left as written.

use crate::{
    config::SiteConfig,
    data::Publication,
    utils::{
        escape::escape_html,
        link::PdfLink,
        template::{Placeholder, Template},
    },
};

/// Characters of the escaped abstract kept in the `description` meta tag.
const DESCRIPTION_LEN: usize = 160;

/// Render the full HTML page for one publication.
pub fn render_page(template: &Template, publication: &Publication, config: &SiteConfig) -> String {
    let pdf = PdfLink::derive(
        &publication.pdf_link,
        config.base_url(),
        &config.output_url_prefix(),
    );

    let meta_tags = meta_tags(publication, pdf.as_ref());
    let authors = escape_html(&publication.authors.join(", "));
    let venue = format!("{} ({})", escape_html(&publication.venue), publication.year);
    let pdf_button = pdf.as_ref().map(pdf_button).unwrap_or_default();

    template.render(|placeholder| {
        Some(match placeholder {
            Placeholder::Title => publication.title.as_str(),
            Placeholder::MetaTags => meta_tags.as_str(),
            Placeholder::Authors => authors.as_str(),
            Placeholder::Venue => venue.as_str(),
            Placeholder::Abstract => publication.abstract_text.as_str(),
            Placeholder::Bibtex => publication.bibtex.as_str(),
            Placeholder::PdfButton => pdf_button.as_str(),
            Placeholder::PublicationList => return None,
        })
    })
}

/// Build the citation metadata block for `{{META_TAGS}}`.
///
/// `citation_author` holds the raw `; `-joined authors.
fn meta_tags(publication: &Publication, pdf: Option<&PdfLink>) -> String {
    let mut tags = String::with_capacity(512);

    let mut push = |name: &str, content: &str| {
        tags.push_str(&format!("\n    <meta name=\"{name}\" content=\"{content}\">"));
    };

    push("citation_title", &escape_html(&publication.title));
    push("citation_author", &publication.authors.join("; "));
    push("citation_publication_date", &publication.year.to_string());
    push("citation_conference_title", &escape_html(&publication.venue));
    push("description", &description(&publication.abstract_text));

    if let Some(pdf) = pdf {
        push("citation_pdf_url", &escape_html(&pdf.absolute));
    }

    tags.push('\n');
    tags
}

/// First 160 characters of the escaped abstract, always followed by `...`.
fn description(abstract_text: &str) -> String {
    let mut description: String = escape_html(abstract_text)
        .chars()
        .take(DESCRIPTION_LEN)
        .collect();
    description.push_str("...");
    description
}

fn pdf_button(pdf: &PdfLink) -> String {
    format!(
        r#"<a href="{}" class="btn-action" target="_blank">Read PDF</a>"#,
        escape_html(&pdf.href)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Year;

    const TEMPLATE: &str = "<head>{{META_TAGS}}<title>{{TITLE}}</title></head>\n\
        <h1>{{TITLE}}</h1><p class=\"authors\">{{AUTHORS}}</p><p>{{VENUE}}</p>\n\
        <div>{{ABSTRACT}}</div><pre>{{BIBTEX}}</pre>{{PDF_BUTTON}}{{FOOTER}}";

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.org".into());
        config
    }

    fn publication() -> Publication {
        Publication {
            id: "smith2023".into(),
            title: "Graphs <em>&</em> Things".into(),
            authors: vec!["Ann O'Hara".into(), "Bo Li".into()],
            venue: "ICML & Friends".into(),
            year: Year::Number(2023),
            abstract_text: "We <b>prove</b> it.".into(),
            bibtex: "@inproceedings{smith2023, title={Graphs}}".into(),
            pdf_link: "../publications/pdfs/smith2023.pdf".into(),
        }
    }

    fn render(publication: &Publication) -> String {
        render_page(&Template::new(TEMPLATE), publication, &config())
    }

    #[test]
    fn test_title_raw_in_body_escaped_in_meta() {
        let html = render(&publication());

        assert!(html.contains("<h1>Graphs <em>&</em> Things</h1>"));
        assert!(html.contains("<title>Graphs <em>&</em> Things</title>"));
        assert!(html.contains(
            r#"<meta name="citation_title" content="Graphs &lt;em&gt;&amp;&lt;/em&gt; Things">"#
        ));
    }

    #[test]
    fn test_authors() {
        let html = render(&publication());

        assert!(html.contains(r#"<meta name="citation_author" content="Ann O'Hara; Bo Li">"#));
        assert!(html.contains(r#"<p class="authors">Ann O&#x27;Hara, Bo Li</p>"#));
    }

    #[test]
    fn test_venue_and_year() {
        let html = render(&publication());

        assert!(html.contains("<p>ICML &amp; Friends (2023)</p>"));
        assert!(html.contains(r#"<meta name="citation_conference_title" content="ICML &amp; Friends">"#));
        assert!(html.contains(r#"<meta name="citation_publication_date" content="2023">"#));
    }

    #[test]
    fn test_abstract_and_bibtex_raw() {
        let html = render(&publication());

        assert!(html.contains("<div>We <b>prove</b> it.</div>"));
        assert!(html.contains("<pre>@inproceedings{smith2023, title={Graphs}}</pre>"));
    }

    #[test]
    fn test_pdf_button_and_meta() {
        let html = render(&publication());

        assert!(html.contains(
            r#"<meta name="citation_pdf_url" content="https://example.org/publications/pdfs/smith2023.pdf">"#
        ));
        assert!(html.contains(
            r#"<a href="pdfs/smith2023.pdf" class="btn-action" target="_blank">Read PDF</a>"#
        ));
    }

    #[test]
    fn test_no_pdf() {
        let mut publication = publication();
        publication.pdf_link.clear();
        let html = render(&publication);

        assert!(!html.contains("citation_pdf_url"));
        assert!(!html.contains("Read PDF"));
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let html = render(&publication());
        assert!(html.ends_with("{{FOOTER}}"));
    }

    #[test]
    fn test_list_token_kept_in_page() {
        let template = Template::new("<h1>{{TITLE}}</h1>{{PUBLICATION_LIST}}");
        let html = render_page(&template, &publication(), &config());
        assert_eq!(html, "<h1>Graphs <em>&</em> Things</h1>{{PUBLICATION_LIST}}");
    }

    #[test]
    fn test_float_year() {
        let mut publication = publication();
        publication.year = Year::Float(2023.0);
        let html = render(&publication);

        assert!(html.contains("<p>ICML &amp; Friends (2023.0)</p>"));
        assert!(html.contains(r#"<meta name="citation_publication_date" content="2023.0">"#));
    }

    #[test]
    fn test_meta_tags_order() {
        let tags = meta_tags(&publication(), None);
        let names: Vec<_> = tags
            .lines()
            .filter_map(|line| line.trim().strip_prefix("<meta name=\""))
            .filter_map(|rest| rest.split('"').next())
            .collect();

        assert_eq!(
            names,
            [
                "citation_title",
                "citation_author",
                "citation_publication_date",
                "citation_conference_title",
                "description",
            ]
        );
    }

    #[test]
    fn test_description_short_abstract_still_gets_ellipsis() {
        let abstract_text = "a".repeat(50);
        assert_eq!(description(&abstract_text), format!("{abstract_text}..."));
    }

    #[test]
    fn test_description_empty_abstract() {
        assert_eq!(description(""), "...");
    }

    #[test]
    fn test_description_truncates_at_160_chars() {
        let abstract_text = "é".repeat(200);
        let description = description(&abstract_text);

        assert_eq!(description.chars().count(), 163);
        assert!(description.ends_with("é..."));
    }

    #[test]
    fn test_description_truncates_escaped_text() {
        // 158 plain chars then `&` (5 chars once escaped): the cut lands inside `&amp;`
        let abstract_text = format!("{}&tail", "x".repeat(158));
        let description = description(&abstract_text);

        assert!(description.ends_with("&a..."));
    }

    #[test]
    fn test_render_is_deterministic() {
        let publication = publication();
        assert_eq!(render(&publication), render(&publication));
    }
}
