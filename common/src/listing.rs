//! Persisted listing records.

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "room", alias = "방")]
    Room,
    #[serde(rename = "entire home", alias = "집 전체")]
    EntireHome,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::EntireHome => "entire home",
        }
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoomType(pub String);

impl Display for UnknownRoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown room type: {:?}", self.0)
    }
}

impl std::error::Error for UnknownRoomType {}

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room" | "방" => Ok(Self::Room),
            "entire home" | "집 전체" => Ok(Self::EntireHome),
            other => Err(UnknownRoomType(other.to_string())),
        }
    }
}

/// True when two room type labels name the same type: identical strings, or
/// canonical and alias labels of one known type.
pub fn same_room_type(a: &str, b: &str) -> bool {
    a == b
        || matches!(
            (a.parse::<RoomType>(), b.parse::<RoomType>()),
            (Ok(x), Ok(y)) if x == y
        )
}

/// Stored room type label. `""` (or `null`) means unset; anything else must be
/// a known label and is kept exactly as written.
fn room_type_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if !raw.is_empty() {
        raw.parse::<RoomType>().map_err(serde::de::Error::custom)?;
    }
    Ok(raw)
}

/// A rentable space, as stored in the listings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u64,
    pub name: String,
    pub price_per_day: f64,
    #[serde(default, deserialize_with = "room_type_label")]
    pub room_type: String,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub booking_options: BTreeSet<String>,
    #[serde(default)]
    pub building_type: String,
    pub age: u32,
    #[serde(default)]
    pub city: String,
}
