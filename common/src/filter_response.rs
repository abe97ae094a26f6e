//! Wire bodies returned by the filter endpoints.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertListingResponse {
    pub message: String,
}

impl InsertListingResponse {
    pub fn success() -> Self {
        Self { message: "Success".to_string() }
    }
}
