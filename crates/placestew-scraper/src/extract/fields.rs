//! Per-field extractors for a place detail page.
//!
//! Each field owns a [`FieldChain`]: selectors for the layouts seen so far,
//! most specific first, and a validator that rejects values of the wrong
//! shape so the next selector gets a chance.

use std::sync::LazyLock;

use regex::Regex;

use super::chain::{Accessor, FieldChain};
use crate::dom::Document;

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("valid rating regex"));
static REVIEW_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][0-9,]*").expect("valid review count regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9\-()\s]{10,}").expect("valid phone regex"));

const HOURS_KEYWORDS: [&str; 5] = ["open", "close", "am", "pm", "hour"];

static NAME: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "name",
        &[
            ("h1.DUwDvf", Accessor::Text),
            ("h1.lfPIob", Accessor::Text),
            ("h1", Accessor::Text),
        ],
        validate_name,
    )
});

static RATING: LazyLock<FieldChain<f64>> = LazyLock::new(|| {
    FieldChain::new(
        "rating",
        &[
            (".F7nice span[aria-hidden]", Accessor::Text),
            ("span[aria-hidden]", Accessor::Text),
        ],
        validate_rating,
    )
});

static REVIEW_COUNT: LazyLock<FieldChain<u64>> = LazyLock::new(|| {
    FieldChain::new(
        "review_count",
        &[
            ("span[role='img'][aria-label*='review']", Accessor::Text),
            (".F7nice span[role='img']", Accessor::Text),
        ],
        validate_review_count,
    )
});

static PRICE_LEVEL: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "price_level",
        &[
            ("span[role='img'][aria-label*='$']", Accessor::Attr("aria-label")),
            (".mgr77e span[role='img']", Accessor::Attr("aria-label")),
            (".mgr77e [aria-label]", Accessor::Attr("aria-label")),
        ],
        validate_price_level,
    )
});

static CATEGORY: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "category",
        &[
            ("button[jsaction*='category']", Accessor::Text),
            (".DkEaL", Accessor::Text),
        ],
        validate_category,
    )
});

static ADDRESS: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "address",
        &[
            ("button[data-item-id='address'] .Io6YTe", Accessor::Text),
            (".Io6YTe.kR99db", Accessor::Text),
        ],
        validate_address,
    )
});

static PHONE: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "phone",
        &[
            ("button[data-item-id^='phone'] .Io6YTe", Accessor::Text),
            ("button[aria-label^='Phone'] .Io6YTe", Accessor::Text),
        ],
        validate_phone,
    )
});

static HOURS: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "hours",
        &[
            ("button[data-item-id='oh'] .Io6YTe", Accessor::Text),
            (".Io6YTe", Accessor::Text),
        ],
        validate_hours,
    )
});

static WEBSITE: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "website",
        &[
            ("a[data-item-id='authority']", Accessor::Attr("href")),
            ("a[data-item-id='menu']", Accessor::Attr("href")),
        ],
        validate_website,
    )
});

static DESCRIPTION: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "description",
        &[
            (".PYvSYb", Accessor::Text),
            ("button[aria-label*='About'] .Io6YTe", Accessor::Text),
        ],
        validate_description,
    )
});

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

#[must_use]
pub fn extract_name(doc: &Document) -> Option<String> {
    NAME.extract(doc.root())
}

#[must_use]
pub fn extract_rating(doc: &Document) -> Option<f64> {
    RATING.extract(doc.root())
}

#[must_use]
pub fn extract_review_count(doc: &Document) -> Option<u64> {
    REVIEW_COUNT.extract(doc.root())
}

/// Price level read from the `aria-label` of the price badge, e.g.
/// `"Cheap$"` becomes `"$"`.
#[must_use]
pub fn extract_price_level(doc: &Document) -> Option<String> {
    PRICE_LEVEL.extract(doc.root())
}

#[must_use]
pub fn extract_category(doc: &Document) -> Option<String> {
    CATEGORY.extract(doc.root())
}

#[must_use]
pub fn extract_address(doc: &Document) -> Option<String> {
    ADDRESS.extract(doc.root())
}

#[must_use]
pub fn extract_phone(doc: &Document) -> Option<String> {
    PHONE.extract(doc.root())
}

#[must_use]
pub fn extract_hours(doc: &Document) -> Option<String> {
    HOURS.extract(doc.root())
}

#[must_use]
pub fn extract_website(doc: &Document) -> Option<String> {
    WEBSITE.extract(doc.root())
}

#[must_use]
pub fn extract_description(doc: &Document) -> Option<String> {
    DESCRIPTION.extract(doc.root())
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Any non-empty text.
#[must_use]
pub fn validate_name(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// First `[0-9]+\.[0-9]+` substring as a float: `"3.9 stars"` → `3.9`.
#[must_use]
pub fn validate_rating(raw: &str) -> Option<f64> {
    RATING_RE.find(raw)?.as_str().parse().ok()
}

/// First digit group with thousands separators removed: `"(1,107)"` → `1107`.
#[must_use]
pub fn validate_review_count(raw: &str) -> Option<u64> {
    let digits: String = REVIEW_COUNT_RE
        .find(raw)?
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Only the `$` characters; `None` if there are none.
#[must_use]
pub fn validate_price_level(raw: &str) -> Option<String> {
    let dollars: String = raw.chars().filter(|c| *c == '$').collect();
    (!dollars.is_empty()).then_some(dollars)
}

/// Non-empty and longer than three characters.
#[must_use]
pub fn validate_category(raw: &str) -> Option<String> {
    let text = raw.trim();
    (text.chars().count() > 3).then(|| text.to_string())
}

/// Longer than five characters; shorter text is a placeholder node.
#[must_use]
pub fn validate_address(raw: &str) -> Option<String> {
    let text = raw.trim();
    (text.chars().count() > 5).then(|| text.to_string())
}

/// Contains a run of at least ten ASCII digits, spaces, hyphens or
/// parentheses.
///
/// A shape check only; the text is returned unchanged.
#[must_use]
pub fn validate_phone(raw: &str) -> Option<String> {
    let text = raw.trim();
    PHONE_RE.is_match(text).then(|| text.to_string())
}

/// Mentions one of the hours keywords, case-insensitively.
#[must_use]
pub fn validate_hours(raw: &str) -> Option<String> {
    let text = raw.trim();
    let lower = text.to_lowercase();
    HOURS_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
        .then(|| text.to_string())
}

/// Absolute link: must start with `http`.
#[must_use]
pub fn validate_website(raw: &str) -> Option<String> {
    let href = raw.trim();
    href.starts_with("http").then(|| href.to_string())
}

/// Longer than ten characters.
#[must_use]
pub fn validate_description(raw: &str) -> Option<String> {
    let text = raw.trim();
    (text.chars().count() > 10).then(|| text.to_string())
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
