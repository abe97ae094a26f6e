//! Listing filter HTTP service.

pub mod api;
pub mod db_utils;
pub mod server;
