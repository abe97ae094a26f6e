//! Filter panel library: filter state store, price range synchronization and
//! the live listing count, independent of any rendering layer.

pub mod api;
pub mod components;
pub mod data_definitions;
pub mod utils;
