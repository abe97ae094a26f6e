//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod listing;
pub mod filter_criteria;
pub mod listing_filter;
pub mod filter_response;
