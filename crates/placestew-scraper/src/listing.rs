//! Search results listing: one record per result card.
//!
//! A listing page holds `div[role='article']` cards. Name, rating, review
//! count, price, phone and website come from their own fallback chains. The
//! remaining fields share unlabelled `.W4Efsd` info rows of `·`-separated
//! snippets, so they are told apart by shape: the [`AddressHeuristic`]
//! picks the address, an opening-state prefix picks the hours, and the
//! first remaining digit-free snippet is the category.

use std::sync::LazyLock;

use placestew_core::PlaceRecord;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::dom::{attr_of, text_of, Document};
use crate::extract::fields::{
    validate_name, validate_phone, validate_price_level, validate_rating, validate_review_count,
    validate_website,
};
use crate::extract::{Accessor, FieldChain};
use crate::heuristics::{AddressHeuristic, CommaAddressHeuristic};

/// Separator between snippets in an info row. The `⋅` (U+22C5) inside
/// hours text is a different character and stays intact.
const SEGMENT_SEPARATOR: char = '\u{b7}';

const HOURS_PREFIXES: [&str; 4] = ["open", "closed", "closes", "opens"];

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[role='article']").expect("valid selector"));
static INFO_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".W4Efsd").expect("valid selector"));
static ICON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[role='img']").expect("valid selector"));

static LABELLED_REVIEWS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9][0-9,]*)\s*review").expect("valid labelled reviews regex")
});

static CARD_NAME: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "card.name",
        &[
            ("div.qBF1Pd.fontHeadlineSmall", Accessor::Text),
            (".qBF1Pd", Accessor::Text),
        ],
        validate_name,
    )
});

static CARD_RATING: LazyLock<FieldChain<f64>> = LazyLock::new(|| {
    FieldChain::new(
        "card.rating",
        &[
            ("span.MW4etd", Accessor::Text),
            ("span[role='img'][aria-label*='star']", Accessor::Attr("aria-label")),
        ],
        validate_rating,
    )
});

static CARD_REVIEW_COUNT: LazyLock<FieldChain<u64>> = LazyLock::new(|| {
    FieldChain::new(
        "card.review_count",
        &[
            ("span.UY7F9", Accessor::Text),
            ("span[role='img'][aria-label*='star']", Accessor::Attr("aria-label")),
        ],
        validate_card_review_count,
    )
});

static CARD_PRICE_LEVEL: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "card.price_level",
        &[("span[role='img'][aria-label*='$']", Accessor::Attr("aria-label"))],
        validate_price_level,
    )
});

static CARD_PHONE: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "card.phone",
        &[("span.UsdlK", Accessor::Text)],
        validate_phone,
    )
});

static CARD_WEBSITE: LazyLock<FieldChain<String>> = LazyLock::new(|| {
    FieldChain::new(
        "card.website",
        &[("a[data-value='Website']", Accessor::Attr("href"))],
        validate_website,
    )
});

/// Parse every result card in a listing page with the default address rule.
///
/// Cards that yield no field at all are dropped.
#[must_use]
pub fn parse_listing(html: &str) -> Vec<PlaceRecord> {
    parse_listing_with(html, &CommaAddressHeuristic::default())
}

/// Parse every result card in a listing page with a caller-supplied address rule.
#[must_use]
pub fn parse_listing_with(html: &str, heuristic: &dyn AddressHeuristic) -> Vec<PlaceRecord> {
    let doc = Document::parse(html);
    let mut cards = 0usize;
    let records: Vec<PlaceRecord> = doc
        .root()
        .select(&CARD)
        .inspect(|_| cards += 1)
        .map(|card| parse_card(card, heuristic))
        .filter(|record| !record.is_empty())
        .collect();
    tracing::debug!(cards, records = records.len(), "parsed results listing");
    records
}

/// Parse one result card delivered as an HTML fragment.
///
/// The fragment may be the card's outer HTML or just its contents.
#[must_use]
pub fn parse_card_fragment(fragment: &str) -> PlaceRecord {
    parse_card_fragment_with(fragment, &CommaAddressHeuristic::default())
}

#[must_use]
pub fn parse_card_fragment_with(fragment: &str, heuristic: &dyn AddressHeuristic) -> PlaceRecord {
    let doc = Document::parse_fragment(fragment);
    let root = doc.root();
    let card = root.select(&CARD).next().unwrap_or(root);
    parse_card(card, heuristic)
}

/// Names of every result card, in page order. Duplicates are kept.
#[must_use]
pub fn listing_names(html: &str) -> Vec<String> {
    parse_listing(html)
        .into_iter()
        .filter_map(|record| record.name)
        .collect()
}

fn parse_card(card: ElementRef<'_>, heuristic: &dyn AddressHeuristic) -> PlaceRecord {
    let name = CARD_NAME
        .extract(card)
        .or_else(|| attr_of(card, "aria-label").and_then(validate_name));

    let segments = info_segments(card);
    let address = segments
        .iter()
        .find(|s| !is_hours_segment(s) && heuristic.looks_like_address(s))
        .cloned();
    let hours = segments.iter().find(|s| is_hours_segment(s)).cloned();
    let category = segments
        .iter()
        .filter(|s| Some(*s) != address.as_ref() && !is_hours_segment(s))
        .find(|s| s.chars().count() > 3 && !s.chars().any(|c| c.is_ascii_digit()))
        .cloned();

    PlaceRecord {
        name,
        rating: CARD_RATING.extract(card),
        review_count: CARD_REVIEW_COUNT.extract(card),
        price_level: CARD_PRICE_LEVEL.extract(card),
        category,
        address,
        phone: CARD_PHONE.extract(card),
        hours,
        website: CARD_WEBSITE.extract(card),
        description: None,
    }
}

/// Text snippets from the innermost info rows of a card.
///
/// Rows holding the star/price icons are skipped; their numbers would
/// otherwise pass for an address.
fn info_segments(card: ElementRef<'_>) -> Vec<String> {
    card.select(&INFO_ROW)
        .filter(|row| row.select(&INFO_ROW).next().is_none())
        .filter(|row| row.select(&ICON).next().is_none())
        .flat_map(|row| {
            text_of(row)
                .split(SEGMENT_SEPARATOR)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn is_hours_segment(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    HOURS_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Review count from either a bare `"(1,107)"` or a star label such as
/// `"3.9 stars 1,107 Reviews"`, where the first number is the rating.
fn validate_card_review_count(raw: &str) -> Option<u64> {
    match LABELLED_REVIEWS_RE.captures(raw) {
        Some(cap) => validate_review_count(cap.get(1)?.as_str()),
        None => validate_review_count(raw),
    }
}
