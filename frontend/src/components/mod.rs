pub mod filter_panel;
pub mod listing_count;
pub mod price_range_filter;
