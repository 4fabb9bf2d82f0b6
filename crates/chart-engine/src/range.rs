// File: crates/chart-engine/src/range.rs
// Summary: Value-domain computation (min/max) with caller overrides and a guaranteed non-zero span.

use crate::axis::AxisOptions;
use crate::types::NormalizedSeries;

/// Data domain used to scale values to pixels.
/// Contract: `max_y > min_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRanges {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for DataRanges {
    fn default() -> Self {
        Self { min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 1.0 }
    }
}

/// Scan every value across every series and derive the Y domain.
///
/// The lower bound always includes zero so bar and area baselines are visible;
/// `overrides.min`/`overrides.max` replace the computed bounds. A degenerate or
/// inverted domain is widened to `min_y + 1`.
pub fn calculate_ranges(series: &[NormalizedSeries], overrides: &AxisOptions) -> DataRanges {
    let mut observed_min = f64::INFINITY;
    let mut observed_max = f64::NEG_INFINITY;
    let mut longest = 0usize;
    for s in series {
        longest = longest.max(s.data.len());
        for v in s.values().filter(|v| v.is_finite()) {
            observed_min = observed_min.min(v);
            observed_max = observed_max.max(v);
        }
    }

    let defaults = DataRanges::default();
    let has_values = observed_min.is_finite() && observed_max.is_finite();

    let min_y = match overrides.min.filter(|v| v.is_finite()) {
        Some(m) => m,
        None if has_values => observed_min.min(0.0),
        None => defaults.min_y,
    };
    let mut max_y = match overrides.max.filter(|v| v.is_finite()) {
        Some(m) => m,
        None if has_values => observed_max,
        None => defaults.max_y,
    };
    if !(max_y > min_y) {
        max_y = widen(min_y);
    }

    DataRanges {
        min_x: 0.0,
        max_x: longest.saturating_sub(1) as f64,
        min_y,
        max_y,
    }
}

/// `min + 1`, or the next representable step up when `1` is below the value's precision.
fn widen(min: f64) -> f64 {
    let bumped = min + 1.0;
    if bumped > min { bumped } else { min + min.abs() * f64::EPSILON * 2.0 }
}
