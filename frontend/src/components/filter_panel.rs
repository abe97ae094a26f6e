//! Filter panel root: owns the store and wires the price filter and the live
//! count to it. The same panel backs both the inline and the modal layout.

use std::sync::Arc;

use crate::{
    api::filter_api::CountSource,
    components::{listing_count::{ListingCount, QueryStatus}, price_range_filter::PriceRangeFilter},
    data_definitions::{filter_slices::{FilterStore, Slice}, panel_mode::{ModalState, PanelMode}},
};

pub const COUNT_ERROR_MESSAGE: &str = "Failed to fetch the number of stays.";

pub struct FilterPanel {
    mode: PanelMode,
    store: Arc<FilterStore>,
    price_range: PriceRangeFilter,
    count: ListingCount,
    modal: Slice<ModalState>,
}

impl FilterPanel {
    /// Must be created inside a tokio runtime.
    pub fn new(mode: PanelMode, source: Arc<dyn CountSource>) -> Self {
        let store = Arc::new(FilterStore::new(mode.default_price_range()));
        let price_range = PriceRangeFilter::new(store.clone(), mode.price_domain());
        let count = ListingCount::spawn(store.clone(), source);
        Self {
            mode,
            store,
            price_range,
            count,
            modal: Slice::detached(ModalState::default()),
        }
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn store(&self) -> &Arc<FilterStore> {
        &self.store
    }

    pub fn price_range(&self) -> &PriceRangeFilter {
        &self.price_range
    }

    pub fn count(&self) -> &ListingCount {
        &self.count
    }

    /// "Clear all": every slice back to its default. Leaves the modal open.
    pub fn clear_filters(&self) {
        self.store.reset_all();
    }

    /// Text for the "show N stays" button.
    pub fn count_label(&self) -> String {
        match self.count.status() {
            QueryStatus::Loading => "Loading...".to_string(),
            QueryStatus::Ready(count) => format!("Show {} stays", count),
            QueryStatus::Failed(_) => "Show stays".to_string(),
        }
    }

    /// Shown next to the count, without blocking the rest of the panel.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.count.status() {
            QueryStatus::Failed(_) => Some(COUNT_ERROR_MESSAGE),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.mode == PanelMode::Inline || self.modal.get().is_open
    }

    /// Opening restores the scroll position saved by the last close.
    pub fn open(&self) -> f64 {
        self.modal.update(|state| !std::mem::replace(&mut state.is_open, true));
        self.modal.get().scroll_position
    }

    pub fn close(&self, scroll_position: f64) {
        self.modal.set(ModalState { is_open: false, scroll_position });
    }

    /// Filters are applied live, so applying only closes the modal.
    pub fn apply(&self, scroll_position: f64) {
        self.close(scroll_position);
    }
}
