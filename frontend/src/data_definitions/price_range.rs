//! Two-sided price range rules shared by slider drags and boundary inputs.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Fixed slider domain and the minimum width `gap` kept between the two
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeDomain {
    pub min: f64,
    pub max: f64,
    pub gap: f64,
}

impl RangeDomain {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Order a dragged pair and widen a zero-width pair by `gap` on both sides.
    pub fn normalize_drag(&self, low: f64, high: f64) -> PriceRange {
        let (low, high) = (self.clamp(low), self.clamp(high));
        if low < high {
            PriceRange::new(low, high)
        } else if low > high {
            PriceRange::new(high, low)
        } else {
            PriceRange::new((low - self.gap).max(self.min), (high + self.gap).min(self.max))
        }
    }

    /// Validate a staged low boundary against the committed range. `None`
    /// means the staged text must be discarded.
    pub fn commit_low(&self, staged: &str, committed: PriceRange) -> Option<f64> {
        let value = parse_boundary(staged)?;
        if value < self.min || value >= committed.max {
            return None;
        }
        if committed.max - value < self.gap {
            return Some((committed.max - self.gap).max(self.min));
        }
        Some(value)
    }

    pub fn commit_high(&self, staged: &str, committed: PriceRange) -> Option<f64> {
        let value = parse_boundary(staged)?;
        if value > self.max || value <= committed.min {
            return None;
        }
        if value - committed.min < self.gap {
            return Some((committed.min + self.gap).min(self.max));
        }
        Some(value)
    }
}

fn parse_boundary(staged: &str) -> Option<f64> {
    staged.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Text typed into the two boundary inputs, kept apart from shared state
/// until it is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeInputs {
    pub low_text: String,
    pub high_text: String,
}

impl RangeInputs {
    pub fn from_range(range: PriceRange) -> Self {
        Self { low_text: range.min.to_string(), high_text: range.max.to_string() }
    }

    pub fn sync_from(&mut self, range: PriceRange) {
        *self = Self::from_range(range);
    }
}
