//! Publication records loaded from the JSON data source.
//!
//! ```text
//! publications.json
//!     │
//!     ├── not an array ───────────────────────► RecordError::NotAnArray
//!     │
//!     └── for each record
//!             │
//!             ├── hide_from_list != true ─────► list entry (best effort)
//!             ├── create_page != true ────────► no page
//!             │
//!             └── create_page == true
//!                     │
//!                     ├── missing/invalid field ► abort, or skip with `skip_invalid`
//!                     ├── unsafe id ────────────► abort, or skip with `skip_invalid`
//!                     ├── duplicate id ─────────► abort
//!                     └── Publication
//! ```
//!
//! All checks run before any page is written.

mod error;
mod types;

pub use error::RecordError;
pub use types::{ListEntry, Publication, Year};

use crate::log;
use serde::Deserialize;
use serde_json::Value;
use std::{collections::HashSet, fs, path::Path};

/// Records selected for page generation, in source order.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Publications that get a page.
    pub pages: Vec<Publication>,
    /// Number of records in the source, with or without a page.
    pub total: usize,
    /// Page-generating records dropped because of `skip_invalid`.
    pub skipped: Vec<RecordError>,
    /// Records shown on the publication list, in source order.
    pub listed: Vec<ListEntry>,
    /// Visible records left off the list because a field had the wrong type.
    pub unlisted: usize,
}

/// Read and validate the publication records at `path`.
pub fn load_publications(path: &Path, skip_invalid: bool) -> Result<Catalog, RecordError> {
    let content =
        fs::read_to_string(path).map_err(|err| RecordError::Io(path.to_path_buf(), err))?;
    let catalog = parse_publications(&content, skip_invalid)?;

    for err in &catalog.skipped {
        log!("warn"; "skipped {}", err);
    }

    Ok(catalog)
}

/// Parse and validate publication records from JSON text.
pub fn parse_publications(content: &str, skip_invalid: bool) -> Result<Catalog, RecordError> {
    let Value::Array(records) = serde_json::from_str::<Value>(content)? else {
        return Err(RecordError::NotAnArray);
    };

    let mut catalog = Catalog {
        total: records.len(),
        ..Default::default()
    };
    let mut seen = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        match list_entry(index, &record) {
            Some(Ok(entry)) => catalog.listed.push(entry),
            Some(Err(_)) => catalog.unlisted += 1,
            None => {}
        }

        let publication = match to_publication(index, record) {
            Ok(Some(publication)) => publication,
            Ok(None) => continue,
            Err(err) if skip_invalid && err.is_record_level() => {
                catalog.skipped.push(err);
                continue;
            }
            Err(err) => return Err(err),
        };

        if !seen.insert(publication.id.clone()) {
            return Err(RecordError::DuplicateId(publication.id));
        }
        catalog.pages.push(publication);
    }

    Ok(catalog)
}

fn is_set(fields: &serde_json::Map<String, Value>, flag: &str) -> bool {
    matches!(fields.get(flag), Some(Value::Bool(true)))
}

/// List entry for one record, `None` when the record is hidden from the list.
fn list_entry(index: usize, record: &Value) -> Option<Result<ListEntry, serde_json::Error>> {
    if let Value::Object(fields) = record
        && is_set(fields, "hide_from_list")
    {
        return None;
    }

    Some(ListEntry::deserialize(record).map(|entry| ListEntry {
        index,
        create_page: matches!(record.get("create_page"), Some(Value::Bool(true))),
        ..entry
    }))
}

/// Convert one record, returning `None` when it does not ask for a page.
fn to_publication(index: usize, record: Value) -> Result<Option<Publication>, RecordError> {
    let Value::Object(fields) = &record else {
        return Err(RecordError::NotAnObject { index });
    };

    if !is_set(fields, "create_page") {
        return Ok(None);
    }

    if let Some(field) = Publication::REQUIRED_FIELDS
        .into_iter()
        .find(|field| !fields.contains_key(*field))
    {
        return Err(RecordError::MissingField { index, field });
    }

    let id = fields
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let publication: Publication = serde_json::from_value(record)
        .map_err(|source| RecordError::Invalid { index, id, source })?;

    if !publication.has_safe_id() {
        return Err(RecordError::UnsafeId(publication.id));
    }

    Ok(Some(publication))
}
