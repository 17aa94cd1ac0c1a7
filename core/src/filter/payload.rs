use crate::dataset::RowSet;
use serde::{Deserialize, Serialize};

/// Inclusive payload-mass interval in kilograms.
///
/// Bounds are taken as given: a range with `low > high` (or a NaN bound)
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub const MIN_KG: f64 = 0.0;
    pub const MAX_KG: f64 = 10_000.0;
    pub const STEP_KG: f64 = 1_000.0;
    pub const MARKS_KG: [f64; 5] = [0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0];

    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The whole slider span.
    pub fn full() -> Self {
        Self::new(Self::MIN_KG, Self::MAX_KG)
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    /// Clamps `value` into the slider span and rounds it to the nearest step.
    pub fn snap(value: f64) -> f64 {
        if value.is_nan() {
            return Self::MIN_KG;
        }
        let clamped = value.clamp(Self::MIN_KG, Self::MAX_KG);
        (clamped / Self::STEP_KG).round() * Self::STEP_KG
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Rows with `low <= payload_mass_kg <= high`, in their original order.
///
/// An inverted range yields no rows.
pub fn filter_by_payload_range<'a>(rows: &RowSet<'a>, low: f64, high: f64) -> RowSet<'a> {
    let range = PayloadRange::new(low, high);
    if !range.is_ordered() {
        return RowSet::default();
    }
    rows.retain_where(|record| range.contains(record.payload_mass_kg))
}
