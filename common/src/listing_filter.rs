//! Pure filter engine over in-memory listings.

use std::collections::BTreeSet;

use crate::{
    filter_criteria::FilterCriteria,
    listing::{Listing, same_room_type},
};


impl FilterCriteria {
    /// True when the listing satisfies every active predicate.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.price_min.is_none_or(|min| listing.price_per_day >= min)
            && self.price_max.is_none_or(|max| listing.price_per_day <= max)
            && (self.room_type.is_empty() || same_room_type(&self.room_type, &listing.room_type))
            && self.bedrooms.is_none_or(|n| listing.bedrooms == n)
            && self.beds.is_none_or(|n| listing.beds == n)
            && self.bathrooms.is_none_or(|n| listing.bathrooms == n)
            && contains_all(&listing.amenities, &self.amenities)
            && contains_all(&listing.booking_options, &self.booking_options)
            && (self.building_type.is_empty() || listing.building_type == self.building_type)
            && (self.name.is_empty() || listing.name.contains(self.name.as_str()))
            && self.age.is_none_or(|age| listing.age == age)
            && (self.city.is_empty() || listing.city.contains(self.city.as_str()))
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

fn contains_all(have: &BTreeSet<String>, required: &BTreeSet<String>) -> bool {
    required.is_subset(have)
}

/// Listings that pass every active predicate, in their original order.
pub fn filter_listings<'a>(criteria: &FilterCriteria, listings: &'a [Listing]) -> Vec<&'a Listing> {
    listings.iter().filter(|listing| criteria.matches(listing)).collect()
}

pub fn count_listings(criteria: &FilterCriteria, listings: &[Listing]) -> u64 {
    listings.iter().filter(|listing| criteria.matches(listing)).count() as u64
}
