//! Filter API route handlers and module exports.

mod count_filtered_listings;
pub use count_filtered_listings::count_filtered_listings;

mod insert_listing;
pub use insert_listing::{insert_listing, validate_listing};
