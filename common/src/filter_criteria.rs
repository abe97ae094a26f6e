//! Shared filter criteria model and its query-string form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const PARAM_PRICE_MIN: &str = "priceMin";
pub const PARAM_PRICE_MAX: &str = "priceMax";
pub const PARAM_ROOM_TYPE: &str = "roomType";
pub const PARAM_BEDROOMS: &str = "bedrooms";
pub const PARAM_BEDS: &str = "beds";
pub const PARAM_BATHROOMS: &str = "bathrooms";
pub const PARAM_AMENITIES: &str = "amenities";
pub const PARAM_BOOKING_OPTIONS: &str = "bookingOptions";
pub const PARAM_BUILDING_TYPE: &str = "buildingType";
pub const PARAM_NAME: &str = "name";
pub const PARAM_AGE: &str = "age";
pub const PARAM_CITY: &str = "city";

/// The aggregate set of active constraints. Every field left at its default
/// (`None`, empty set, empty string) is unset and never excludes a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub room_type: String,
    pub bedrooms: Option<u32>,
    pub beds: Option<u32>,
    pub bathrooms: Option<u32>,
    pub amenities: BTreeSet<String>,
    pub booking_options: BTreeSet<String>,
    pub building_type: String,
    pub name: String,
    pub age: Option<u32>,
    pub city: String,
}

impl FilterCriteria {
    /// Encode as query pairs. Lists are comma-joined; unset values and empty
    /// lists are left out.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.price_min {
            pairs.push((PARAM_PRICE_MIN, v.to_string()));
        }
        if let Some(v) = self.price_max {
            pairs.push((PARAM_PRICE_MAX, v.to_string()));
        }
        if !self.room_type.is_empty() {
            pairs.push((PARAM_ROOM_TYPE, self.room_type.clone()));
        }
        for (key, value) in [
            (PARAM_BEDROOMS, self.bedrooms),
            (PARAM_BEDS, self.beds),
            (PARAM_BATHROOMS, self.bathrooms),
        ] {
            if let Some(v) = value {
                pairs.push((key, v.to_string()));
            }
        }
        if !self.amenities.is_empty() {
            pairs.push((PARAM_AMENITIES, join_tags(&self.amenities)));
        }
        if !self.booking_options.is_empty() {
            pairs.push((PARAM_BOOKING_OPTIONS, join_tags(&self.booking_options)));
        }
        if !self.building_type.is_empty() {
            pairs.push((PARAM_BUILDING_TYPE, self.building_type.clone()));
        }
        if !self.name.is_empty() {
            pairs.push((PARAM_NAME, self.name.clone()));
        }
        if let Some(v) = self.age {
            pairs.push((PARAM_AGE, v.to_string()));
        }
        if !self.city.is_empty() {
            pairs.push((PARAM_CITY, self.city.clone()));
        }
        pairs
    }

    /// Build criteria from raw query parameters. Parsing is lenient: a value
    /// that is absent, empty or malformed leaves its field unset, unknown keys
    /// are ignored and a repeated key keeps its last value.
    pub fn from_query_params<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut criteria = Self::default();
        for (key, value) in params {
            match key {
                PARAM_PRICE_MIN => criteria.price_min = parse_price(value),
                PARAM_PRICE_MAX => criteria.price_max = parse_price(value),
                PARAM_ROOM_TYPE => criteria.room_type = value.to_string(),
                PARAM_BEDROOMS => criteria.bedrooms = parse_count(value),
                PARAM_BEDS => criteria.beds = parse_count(value),
                PARAM_BATHROOMS => criteria.bathrooms = parse_count(value),
                PARAM_AMENITIES => criteria.amenities = split_tags(value),
                PARAM_BOOKING_OPTIONS => criteria.booking_options = split_tags(value),
                PARAM_BUILDING_TYPE => criteria.building_type = value.to_string(),
                PARAM_NAME => criteria.name = value.to_string(),
                PARAM_AGE => criteria.age = parse_count(value),
                PARAM_CITY => criteria.city = value.to_string(),
                _ => {}
            }
        }
        criteria
    }
}

fn parse_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn split_tags(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(",")
}
