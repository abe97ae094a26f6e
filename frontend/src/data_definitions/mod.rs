pub mod filter_slices;
pub mod panel_mode;
pub mod price_range;
