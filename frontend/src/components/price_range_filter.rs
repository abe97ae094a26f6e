//! Dual-thumb price filter: throttled slider drags plus two boundary inputs
//! validated on commit.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::debug;

use crate::{
    data_definitions::{filter_slices::FilterStore, price_range::{PriceRange, RangeDomain, RangeInputs}},
    utils::throttle::{DRAG_THROTTLE_INTERVAL, Throttle},
};

struct SyncedInputs {
    inputs: RangeInputs,
    shared: watch::Receiver<PriceRange>,
}

pub struct PriceRangeFilter {
    store: Arc<FilterStore>,
    domain: RangeDomain,
    inputs: Mutex<SyncedInputs>,
    drag: Throttle<(f64, f64)>,
}

impl PriceRangeFilter {
    /// Must be created inside a tokio runtime.
    pub fn new(store: Arc<FilterStore>, domain: RangeDomain) -> Self {
        let shared = store.price_range.subscribe();
        let inputs = RangeInputs::from_range(*shared.borrow());

        let drag_store = store.clone();
        let drag = Throttle::new(DRAG_THROTTLE_INTERVAL, move |(low, high): (f64, f64)| {
            let range = domain.normalize_drag(low, high);
            debug!("applying dragged price range {}", range);
            drag_store.price_range.set(range);
        });

        Self {
            store,
            domain,
            inputs: Mutex::new(SyncedInputs { inputs, shared }),
            drag,
        }
    }

    pub fn domain(&self) -> RangeDomain {
        self.domain
    }

    pub fn range(&self) -> PriceRange {
        self.store.price_range.get()
    }

    /// Slider movement. Applied to shared state at most once per throttle
    /// window, using the latest pair.
    pub fn drag(&self, low: f64, high: f64) {
        self.drag.push((low, high));
    }

    pub fn stage_low(&self, text: impl Into<String>) {
        self.synced_inputs().inputs.low_text = text.into();
    }

    pub fn stage_high(&self, text: impl Into<String>) {
        self.synced_inputs().inputs.high_text = text.into();
    }

    pub fn low_text(&self) -> String {
        self.synced_inputs().inputs.low_text.clone()
    }

    pub fn high_text(&self) -> String {
        self.synced_inputs().inputs.high_text.clone()
    }

    /// Focus left the low input. Returns whether the staged value was
    /// committed; otherwise the input reverts to the committed low.
    pub fn commit_low(&self) -> bool {
        let mut synced = self.synced_inputs();
        let committed = self.store.price_range.get();
        match self.domain.commit_low(&synced.inputs.low_text, committed) {
            Some(min) => {
                self.store.price_range.set_min(min);
                synced.inputs.low_text = min.to_string();
                true
            }
            None => {
                debug!("discarding low price input {:?}", synced.inputs.low_text);
                synced.inputs.low_text = committed.min.to_string();
                false
            }
        }
    }

    pub fn commit_high(&self) -> bool {
        let mut synced = self.synced_inputs();
        let committed = self.store.price_range.get();
        match self.domain.commit_high(&synced.inputs.high_text, committed) {
            Some(max) => {
                self.store.price_range.set_max(max);
                synced.inputs.high_text = max.to_string();
                true
            }
            None => {
                debug!("discarding high price input {:?}", synced.inputs.high_text);
                synced.inputs.high_text = committed.max.to_string();
                false
            }
        }
    }

    /// Staging values are reset whenever the shared range changed since the
    /// last look, so external resets show up in both inputs.
    fn synced_inputs(&self) -> MutexGuard<'_, SyncedInputs> {
        let mut guard = self.inputs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.shared.has_changed().unwrap_or(false) {
            let range = *guard.shared.borrow_and_update();
            guard.inputs.sync_from(range);
        }
        guard
    }
}
