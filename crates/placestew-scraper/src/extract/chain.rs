//! Ordered selector fallback chains.
//!
//! A [`FieldChain`] pairs each selector with an [`Accessor`] and runs one
//! validator over whatever the accessor reads. Strategies are tried in
//! declaration order; for each, only the first matching node is inspected.
//! A miss or a rejected value moves on to the next strategy.

use scraper::{ElementRef, Selector};

use crate::dom::{attr_of, text_of};

/// What to read from a matched node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// Trimmed, whitespace-collapsed element text.
    Text,
    /// A named attribute; a missing attribute reads as the empty string.
    Attr(&'static str),
}

#[derive(Debug)]
struct Strategy {
    css: &'static str,
    selector: Selector,
    accessor: Accessor,
}

/// One field's fallback chain.
#[derive(Debug)]
pub struct FieldChain<T> {
    field: &'static str,
    strategies: Vec<Strategy>,
    validate: fn(&str) -> Option<T>,
}

impl<T> FieldChain<T> {
    /// Build a chain from `(css, accessor)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a selector does not parse. Chains are built from string
    /// literals, so this only fires on a typo in the source.
    #[must_use]
    pub fn new(
        field: &'static str,
        strategies: &[(&'static str, Accessor)],
        validate: fn(&str) -> Option<T>,
    ) -> Self {
        let strategies = strategies
            .iter()
            .map(|&(css, accessor)| Strategy {
                css,
                selector: Selector::parse(css).expect("valid selector"),
                accessor,
            })
            .collect();
        Self {
            field,
            strategies,
            validate,
        }
    }

    /// Run the chain under `scope` and return the first accepted value.
    pub fn extract(&self, scope: ElementRef<'_>) -> Option<T> {
        for strategy in &self.strategies {
            let Some(node) = scope.select(&strategy.selector).next() else {
                continue;
            };

            let raw = match strategy.accessor {
                Accessor::Text => text_of(node),
                Accessor::Attr(name) => attr_of(node, name).unwrap_or_default().to_string(),
            };

            if let Some(value) = (self.validate)(&raw) {
                tracing::trace!(field = self.field, css = strategy.css, "strategy accepted");
                return Some(value);
            }
            tracing::trace!(
                field = self.field,
                css = strategy.css,
                raw = %raw,
                "strategy matched but value rejected"
            );
        }
        None
    }
}
