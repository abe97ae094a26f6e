//! Filter state store: one independently addressable slice per filter category.

use std::{collections::BTreeSet, sync::Arc};

use common::{filter_criteria::FilterCriteria, listing::RoomType};
use tokio::sync::watch;

use crate::data_definitions::price_range::PriceRange;

/// A single unit of filter state. Subscribers are only woken when the value
/// actually changes, and every effective change bumps the owning store's
/// revision.
#[derive(Debug)]
pub struct Slice<T> {
    value: watch::Sender<T>,
    default: T,
    revision: Arc<watch::Sender<u64>>,
}

impl<T: Clone + PartialEq> Slice<T> {
    fn new(default: T, revision: Arc<watch::Sender<u64>>) -> Self {
        let (value, _) = watch::channel(default.clone());
        Self { value, default, revision }
    }

    /// A slice with a revision counter of its own.
    pub fn detached(default: T) -> Self {
        let (revision, _) = watch::channel(0);
        Self::new(default, Arc::new(revision))
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Replace the value. Returns whether anything changed.
    pub fn set(&self, new_value: T) -> bool {
        self.update(move |value| replace_if_changed(value, new_value))
    }

    /// Edit in place; `modify` reports whether it changed the value.
    pub fn update(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = self.value.send_if_modified(modify);
        if changed {
            self.revision.send_modify(|revision| *revision += 1);
        }
        changed
    }

    pub fn reset(&self) -> bool {
        self.set(self.default.clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.value.subscribe()
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Checkbox driven tag sets (amenities, booking options).
impl Slice<BTreeSet<String>> {
    pub fn check(&self, tag: &str) -> bool {
        self.update(|tags| tags.insert(tag.to_string()))
    }

    pub fn uncheck(&self, tag: &str) -> bool {
        self.update(|tags| tags.remove(tag))
    }

    pub fn toggle(&self, tag: &str, checked: bool) -> bool {
        if checked { self.check(tag) } else { self.uncheck(tag) }
    }
}

impl Slice<PriceRange> {
    pub fn set_min(&self, min: f64) -> bool {
        self.update(|range| replace_if_changed(&mut range.min, min))
    }

    pub fn set_max(&self, max: f64) -> bool {
        self.update(|range| replace_if_changed(&mut range.max, max))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BedCounts {
    pub bedrooms: Option<u32>,
    pub beds: Option<u32>,
    pub bathrooms: Option<u32>,
}

impl Slice<BedCounts> {
    pub fn set_bedrooms(&self, bedrooms: Option<u32>) -> bool {
        self.update(|counts| replace_if_changed(&mut counts.bedrooms, bedrooms))
    }

    pub fn set_beds(&self, beds: Option<u32>) -> bool {
        self.update(|counts| replace_if_changed(&mut counts.beds, beds))
    }

    pub fn set_bathrooms(&self, bathrooms: Option<u32>) -> bool {
        self.update(|counts| replace_if_changed(&mut counts.bathrooms, bathrooms))
    }
}

/// Explicit container for every filter slice, owned by the panel and shared
/// by `Arc`.
#[derive(Debug)]
pub struct FilterStore {
    pub price_range: Slice<PriceRange>,
    pub room_type: Slice<Option<RoomType>>,
    pub bed_counts: Slice<BedCounts>,
    pub amenities: Slice<BTreeSet<String>>,
    pub booking_options: Slice<BTreeSet<String>>,
    pub building_type: Slice<String>,
    pub name: Slice<String>,
    pub age: Slice<Option<u32>>,
    pub city: Slice<String>,
    revision: Arc<watch::Sender<u64>>,
}

impl FilterStore {
    pub fn new(default_price_range: PriceRange) -> Self {
        let (revision, _) = watch::channel(0);
        let revision = Arc::new(revision);
        Self {
            price_range: Slice::new(default_price_range, revision.clone()),
            room_type: Slice::new(None, revision.clone()),
            bed_counts: Slice::new(BedCounts::default(), revision.clone()),
            amenities: Slice::new(BTreeSet::new(), revision.clone()),
            booking_options: Slice::new(BTreeSet::new(), revision.clone()),
            building_type: Slice::new(String::new(), revision.clone()),
            name: Slice::new(String::new(), revision.clone()),
            age: Slice::new(None, revision.clone()),
            city: Slice::new(String::new(), revision.clone()),
            revision,
        }
    }

    /// Derived purely from the current slice values.
    pub fn criteria(&self) -> FilterCriteria {
        let price_range = self.price_range.get();
        let bed_counts = self.bed_counts.get();
        FilterCriteria {
            price_min: Some(price_range.min),
            price_max: Some(price_range.max),
            room_type: self.room_type.get().map(|room_type| room_type.to_string()).unwrap_or_default(),
            bedrooms: bed_counts.bedrooms,
            beds: bed_counts.beds,
            bathrooms: bed_counts.bathrooms,
            amenities: self.amenities.get(),
            booking_options: self.booking_options.get(),
            building_type: self.building_type.get(),
            name: self.name.get(),
            age: self.age.get(),
            city: self.city.get(),
        }
    }

    pub fn reset_all(&self) {
        self.price_range.reset();
        self.room_type.reset();
        self.bed_counts.reset();
        self.amenities.reset();
        self.booking_options.reset();
        self.building_type.reset();
        self.name.reset();
        self.age.reset();
        self.city.reset();
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Wakes on any effective change to any slice.
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
