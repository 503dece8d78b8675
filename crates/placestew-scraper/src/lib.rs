pub mod dom;
pub mod driver;
pub mod error;
pub mod extract;
pub mod heuristics;
pub mod listing;
pub mod parse;

pub use dom::Document;
pub use driver::{search_place_names, search_places, BrowserDriver, DriverError, SearchOptions};
pub use error::ScraperError;
pub use heuristics::{AddressHeuristic, CommaAddressHeuristic};
pub use listing::{listing_names, parse_card_fragment, parse_listing, parse_listing_with};
pub use parse::{parse_document, parse_file, parse_html, read_html};
pub use placestew_core::PlaceRecord;
