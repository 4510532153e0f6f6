//! PDF link derivation for publication pages.
//!
//! One raw `pdf_link` yields two targets:
//!
//! | Raw link                          | Absolute (metadata)                         | Button href      |
//! |-----------------------------------|---------------------------------------------|------------------|
//! | `https://arxiv.org/abs/1234`      | unchanged                                   | unchanged        |
//! | `../publications/pdfs/foo.pdf`    | `<base>/publications/pdfs/foo.pdf`          | `pdfs/foo.pdf`   |
//! | `publications/pdfs/foo.pdf`       | `<base>/publications/pdfs/foo.pdf`          | `pdfs/foo.pdf`   |
//! | `/files/foo.pdf`                  | `<base>/files/foo.pdf`                      | unchanged        |
//!
//! Citation crawlers need a fully-qualified URL, while the button is resolved
//! by the browser relative to the page inside the output directory.

/// Both forms of a publication's PDF link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLink {
    /// Fully-qualified URL for `citation_pdf_url`.
    pub absolute: String,
    /// Href for the "Read PDF" button, relative to the page directory.
    pub href: String,
}

impl PdfLink {
    /// Derive both link forms from a raw `pdf_link` value.
    ///
    /// `output_prefix` is the URL path of the output directory (e.g. `publications`).
    /// Relative links pointing into it lose that prefix for the button, see
    /// `strip_output_prefix`.
    ///
    /// Returns `None` for an empty link.
    pub fn derive(raw: &str, base_url: &str, output_prefix: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        if is_external_link(raw) {
            return Some(Self {
                absolute: raw.to_owned(),
                href: raw.to_owned(),
            });
        }

        let absolute = format!("{}/{}", base_url.trim_end_matches('/'), strip_relative_prefix(raw));
        let href = strip_output_prefix(raw, output_prefix).to_owned();

        Some(Self { absolute, href })
    }
}

/// Links with an http(s) scheme are used verbatim.
#[inline]
fn is_external_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Strip every leading `../`, `./` and `/` so the path is rooted at the site root.
fn strip_relative_prefix(path: &str) -> &str {
    let mut rest = path;
    loop {
        if let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

/// Rewrite a link into the output directory relative to that directory.
///
/// Removes one `<prefix>/` when it is written root-relative (`publications/`,
/// `/publications/`) or climbs out of the page directory and back in
/// (`../publications/`). Anything else is kept as written.
fn strip_output_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }

    let parent = "../".repeat(prefix.split('/').count());
    ["", "/", parent.as_str()]
        .into_iter()
        .find_map(|lead| {
            path.strip_prefix(lead)?
                .strip_prefix(prefix)?
                .strip_prefix('/')
        })
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.org";
    const PREFIX: &str = "publications";

    #[test]
    fn test_empty_link() {
        assert_eq!(PdfLink::derive("", BASE, PREFIX), None);
    }

    #[test]
    fn test_external_link_unchanged() {
        let link = PdfLink::derive("https://arxiv.org/abs/1234", BASE, PREFIX).unwrap();
        assert_eq!(link.absolute, "https://arxiv.org/abs/1234");
        assert_eq!(link.href, "https://arxiv.org/abs/1234");

        let link = PdfLink::derive("http://example.com/publications/a.pdf", BASE, PREFIX).unwrap();
        assert_eq!(link.absolute, "http://example.com/publications/a.pdf");
        assert_eq!(link.href, "http://example.com/publications/a.pdf");
    }

    #[test]
    fn test_parent_relative_link() {
        let link = PdfLink::derive("../publications/pdfs/foo.pdf", BASE, PREFIX).unwrap();
        assert_eq!(link.absolute, "https://example.org/publications/pdfs/foo.pdf");
        assert_eq!(link.href, "pdfs/foo.pdf");
    }

    #[test]
    fn test_root_relative_link() {
        let link = PdfLink::derive("publications/pdfs/foo.pdf", BASE, PREFIX).unwrap();
        assert_eq!(link.absolute, "https://example.org/publications/pdfs/foo.pdf");
        assert_eq!(link.href, "pdfs/foo.pdf");
    }

    #[test]
    fn test_link_outside_output_dir() {
        let link = PdfLink::derive("/files/foo.pdf", BASE, PREFIX).unwrap();
        assert_eq!(link.absolute, "https://example.org/files/foo.pdf");
        assert_eq!(link.href, "/files/foo.pdf");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let link = PdfLink::derive("./pdfs/foo.pdf", "https://example.org/", PREFIX).unwrap();
        assert_eq!(link.absolute, "https://example.org/pdfs/foo.pdf");
        assert_eq!(link.href, "./pdfs/foo.pdf");
    }

    #[test]
    fn test_strip_relative_prefix() {
        assert_eq!(strip_relative_prefix("../../a/b.pdf"), "a/b.pdf");
        assert_eq!(strip_relative_prefix(".././/a.pdf"), "a.pdf");
        assert_eq!(strip_relative_prefix("a/../b.pdf"), "a/../b.pdf");
        assert_eq!(strip_relative_prefix("..pdf"), "..pdf");
    }

    #[test]
    fn test_strip_output_prefix_only_once() {
        assert_eq!(
            strip_output_prefix("publications/publications/x.pdf", PREFIX),
            "publications/x.pdf"
        );
        assert_eq!(strip_output_prefix("publicationsx/x.pdf", PREFIX), "publicationsx/x.pdf");
        assert_eq!(strip_output_prefix("x.pdf", ""), "x.pdf");
    }

    #[test]
    fn test_strip_output_prefix_lead_forms() {
        assert_eq!(strip_output_prefix("/publications/x.pdf", PREFIX), "x.pdf");
        assert_eq!(strip_output_prefix("../publications/x.pdf", PREFIX), "x.pdf");
        assert_eq!(strip_output_prefix("./publications/x.pdf", PREFIX), "./publications/x.pdf");
        assert_eq!(strip_output_prefix("../other/x.pdf", PREFIX), "../other/x.pdf");
    }

    #[test]
    fn test_strip_output_prefix_nested_output() {
        assert_eq!(strip_output_prefix("../../site/pubs/x.pdf", "site/pubs"), "x.pdf");
        assert_eq!(strip_output_prefix("site/pubs/x.pdf", "site/pubs"), "x.pdf");
        assert_eq!(strip_output_prefix("../site/pubs/x.pdf", "site/pubs"), "../site/pubs/x.pdf");
    }
}
