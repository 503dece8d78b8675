//! Field extraction: selector fallback chains and the per-field rules built
//! on them.

pub mod chain;
pub mod fields;

pub use chain::{Accessor, FieldChain};
pub use fields::{
    extract_address, extract_category, extract_description, extract_hours, extract_name,
    extract_phone, extract_price_level, extract_rating, extract_review_count, extract_website,
};
