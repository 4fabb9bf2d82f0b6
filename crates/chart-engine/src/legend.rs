// File: crates/chart-engine/src/legend.rs
// Summary: Legend entries and the empty-state message derived from normalized series.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ChartKind, NormalizedSeries};

pub const NO_DATA_MESSAGE: &str = "No chart data available";
pub const NO_MEASURABLE_VALUES_MESSAGE: &str = "Chart data contains no measurable values";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LegendItem {
    /// `"{name}-{index}"`, unique even when series names repeat.
    pub id: String,
    pub label: String,
    pub color: String,
    pub series_index: usize,
}

pub fn build_legend(series: &[NormalizedSeries]) -> Vec<LegendItem> {
    series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendItem {
            id: format!("{}-{}", s.name, i),
            label: s.name.clone(),
            color: s.color.clone(),
            series_index: i,
        })
        .collect()
}

/// Message shown instead of a chart when there is nothing to plot.
///
/// Values are summed by absolute value, so data whose values cancel to exactly
/// zero is not treated as empty; data that is all zeros is.
pub fn empty_state_message(series: &[NormalizedSeries], kind: ChartKind) -> Option<&'static str> {
    if series.is_empty() {
        return Some(NO_DATA_MESSAGE);
    }
    let magnitude: f64 = series.iter().flat_map(|s| s.values()).filter(|v| v.is_finite()).map(f64::abs).sum();
    if magnitude == 0.0 {
        return Some(NO_MEASURABLE_VALUES_MESSAGE);
    }
    if kind == ChartKind::Pie && !has_pie_total(pie_total(&series[0])) {
        return Some(NO_MEASURABLE_VALUES_MESSAGE);
    }
    None
}

/// Sum of the positive, finite values of a series; only these become slices.
pub fn pie_total(series: &NormalizedSeries) -> f64 {
    series.values().filter(|v| v.is_finite() && *v > 0.0).sum()
}

/// A pie can be laid out only over a positive total that did not overflow.
pub fn has_pie_total(total: f64) -> bool {
    total > 0.0 && total.is_finite()
}
