//! DOM query layer over the `scraper` crate.
//!
//! Parsing is permissive and never fails: malformed or truncated markup
//! degrades to whatever tree the html5ever tree builder recovers, and an
//! empty string yields an empty tree. Queries that match nothing, or whose
//! selector does not parse, return an empty result rather than an error.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document or fragment.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parse a fragment such as one result card's outer HTML.
    #[must_use]
    pub fn parse_fragment(html: &str) -> Self {
        Self {
            html: Html::parse_fragment(html),
        }
    }

    /// Root element, used as the scope every extraction chain searches under.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// First element matching `css`, in document order.
    #[must_use]
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = parse_selector(css)?;
        self.html.select(&selector).next()
    }

    /// Every element matching `css`, in document order.
    #[must_use]
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        let Some(selector) = parse_selector(css) else {
            return Vec::new();
        };
        self.html.select(&selector).collect()
    }
}

/// Compile a CSS selector, logging and discarding it when it does not parse.
#[must_use]
pub fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!(css, error = %e, "ignoring unparsable selector");
            None
        }
    }
}

/// Plain text of `element` and its descendants.
///
/// Text nodes are concatenated, surrounding whitespace is stripped and
/// internal whitespace runs (newlines and indentation included) collapse to
/// a single space.
#[must_use]
pub fn text_of(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Value of the attribute `name` on `element`, if present.
#[must_use]
pub fn attr_of<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}
