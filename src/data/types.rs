//! Publication record types.
//!
//! Records are read from a JSON array. Only records with `"create_page": true`
//! become pages; every record not hidden with `"hide_from_list": true` can
//! also appear on the publication list as a [`ListEntry`].

use serde::Deserialize;
use std::fmt;

/// Characters that make an id unusable as a file name.
const FORBIDDEN_ID_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Publication year, written either as a number or a string in the JSON source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    /// Non-integer JSON number such as `2023.0`, printed as written.
    Float(f64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(year) => write!(f, "{year}"),
            Self::Float(year) if year.fract() == 0.0 => write!(f, "{year:.1}"),
            Self::Float(year) => write!(f, "{year}"),
            Self::Text(year) => f.write_str(year),
        }
    }
}

/// A publication that gets its own page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Publication {
    /// File stem of the generated page.
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: Year,

    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    /// BibTeX entry shown verbatim on the page.
    #[serde(default)]
    pub bibtex: String,

    /// Absolute URL, or a path relative to the site root or the output directory.
    #[serde(default)]
    pub pdf_link: String,
}

impl Publication {
    /// Fields that must be present on every page-generating record.
    pub const REQUIRED_FIELDS: [&'static str; 5] = ["id", "title", "authors", "venue", "year"];

    /// Output file name, `<id>.html`.
    pub fn filename(&self) -> String {
        format!("{}.html", self.id)
    }

    /// Whether `id` can be used as a file stem inside the output directory.
    pub fn has_safe_id(&self) -> bool {
        let id = self.id.as_str();
        !id.is_empty()
            && id != "."
            && id != ".."
            && !id
                .chars()
                .any(|c| c.is_control() || FORBIDDEN_ID_CHARS.contains(&c))
    }
}

/// One card on the publication list.
///
/// Every field is optional so records without a page still render.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListEntry {
    /// Position in the source array, used for the BibTeX toggle id.
    #[serde(skip)]
    pub index: usize,
    /// Whether the record asked for a detail page.
    #[serde(skip)]
    pub create_page: bool,

    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: Option<Year>,
    pub bibtex: String,
    pub pdf_link: String,
}

impl ListEntry {
    /// Detail page file name, when the record asked for one.
    pub fn page_filename(&self) -> Option<String> {
        (self.create_page && !self.id.is_empty()).then(|| format!("{}.html", self.id))
    }
}
