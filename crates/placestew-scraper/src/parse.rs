//! Record assembly for a single place detail page.

use std::path::Path;

use placestew_core::PlaceRecord;

use crate::dom::Document;
use crate::error::ScraperError;
use crate::extract::fields;

/// Parse a place detail page and extract every field.
///
/// Never fails: markup that matches none of the known layouts yields a
/// record with every field absent.
#[must_use]
pub fn parse_html(html: &str) -> PlaceRecord {
    parse_document(&Document::parse(html))
}

/// Extract every field from an already-parsed document.
#[must_use]
pub fn parse_document(doc: &Document) -> PlaceRecord {
    let record = PlaceRecord {
        name: fields::extract_name(doc),
        rating: fields::extract_rating(doc),
        review_count: fields::extract_review_count(doc),
        price_level: fields::extract_price_level(doc),
        category: fields::extract_category(doc),
        address: fields::extract_address(doc),
        phone: fields::extract_phone(doc),
        hours: fields::extract_hours(doc),
        website: fields::extract_website(doc),
        description: fields::extract_description(doc),
    };
    tracing::debug!(
        fields_found = record.field_count(),
        name = record.name.as_deref().unwrap_or("<none>"),
        "assembled place record"
    );
    record
}

/// Read an HTML file as UTF-8 and parse it with [`parse_html`].
///
/// # Errors
///
/// See [`read_html`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<PlaceRecord, ScraperError> {
    let html = read_html(path)?;
    Ok(parse_html(&html))
}

/// Read an HTML file as UTF-8.
///
/// # Errors
///
/// Returns [`ScraperError::InputNotFound`] if `path` does not exist and
/// [`ScraperError::Read`] if it cannot be read or is not valid UTF-8.
pub fn read_html(path: impl AsRef<Path>) -> Result<String, ScraperError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScraperError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScraperError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
