//! Presentation presets for the filter panel.

use crate::data_definitions::price_range::{PriceRange, RangeDomain};

/// The inline panel and the modal panel share one filter contract and differ
/// only in their price preset and in whether they can be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Inline,
    Modal,
}

impl PanelMode {
    pub fn price_domain(&self) -> RangeDomain {
        match self {
            Self::Inline => RangeDomain { min: 0.0, max: 500.0, gap: 10.0 },
            Self::Modal => RangeDomain { min: 14000.0, max: 779850.0, gap: 10000.0 },
        }
    }

    pub fn default_price_range(&self) -> PriceRange {
        match self {
            Self::Inline => PriceRange::new(100.0, 200.0),
            Self::Modal => PriceRange::new(14000.0, 779850.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModalState {
    pub is_open: bool,
    pub scroll_position: f64,
}
