//! Placeholder substitution for the page and list templates.
//!
//! A template is plain HTML with `{{NAME}}` tokens. Tokens the renderer
//! supplies a value for are replaced everywhere they occur, all others are
//! kept verbatim. The source is scanned
//! once, so substituted values are never scanned again and the order in which
//! values are supplied does not matter.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::{fs, path::Path, sync::LazyLock};

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").unwrap());

/// Tokens recognized in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Title,
    MetaTags,
    Authors,
    Venue,
    Abstract,
    Bibtex,
    PdfButton,
    /// List template only.
    PublicationList,
}

impl Placeholder {
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::MetaTags,
        Self::Authors,
        Self::Venue,
        Self::Abstract,
        Self::Bibtex,
        Self::PdfButton,
        Self::PublicationList,
    ];

    /// Name between the braces, e.g. `META_TAGS`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::MetaTags => "META_TAGS",
            Self::Authors => "AUTHORS",
            Self::Venue => "VENUE",
            Self::Abstract => "ABSTRACT",
            Self::Bibtex => "BIBTEX",
            Self::PdfButton => "PDF_BUTTON",
            Self::PublicationList => "PUBLICATION_LIST",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// A loaded page template.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        Ok(Self::new(source))
    }

    /// Placeholders that appear at least once in the template.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| {
                RE_PLACEHOLDER
                    .captures_iter(&self.source)
                    .any(|caps| &caps[1] == p.name())
            })
            .collect()
    }

    /// Replace every token `value_of` has a value for.
    pub fn render<'v, F>(&self, value_of: F) -> String
    where
        F: Fn(Placeholder) -> Option<&'v str>,
    {
        RE_PLACEHOLDER
            .replace_all(&self.source, |caps: &Captures| {
                Placeholder::from_name(&caps[1])
                    .and_then(&value_of)
                    .unwrap_or(&caps[0])
                    .to_owned()
            })
            .into_owned()
    }
}
