//! The place record produced by every extraction entry point.

use serde::{Deserialize, Serialize};

/// Structured data pulled from one place detail page or one result card.
///
/// Every field is extracted independently and may be absent even when the
/// others are present. Serializes to a JSON object with exactly these ten
/// keys, in this order; absent fields become `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    /// One or more `$` characters.
    pub price_level: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    /// Absolute `http`/`https` URL.
    pub website: Option<String>,
    pub description: Option<String>,
}

impl PlaceRecord {
    /// Number of fields that carry a value.
    #[must_use]
    pub fn field_count(&self) -> usize {
        [
            self.name.is_some(),
            self.rating.is_some(),
            self.review_count.is_some(),
            self.price_level.is_some(),
            self.category.is_some(),
            self.address.is_some(),
            self.phone.is_some(),
            self.hours.is_some(),
            self.website.is_some(),
            self.description.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// `true` when no field was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}
