// File: crates/chart-engine/src/series.rs
// Summary: Caller data shapes and the normalizer that resolves every series color.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::palette_color;
use crate::types::{DataPoint, NormalizedSeries, Series, IMPLICIT_SERIES_NAME};

/// Chart input: a flat point list (one implicit series) or a list of named series.
///
/// When decoded from untyped data, a list whose entries carry `name` and `data`
/// is taken as a series collection; anything else is read as a flat point list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ChartData {
    Series(Vec<Series>),
    Points(Vec<DataPoint>),
}

impl Default for ChartData {
    fn default() -> Self {
        ChartData::Points(Vec::new())
    }
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Series(s) => s.is_empty(),
            ChartData::Points(p) => p.is_empty(),
        }
    }
}

impl From<Vec<DataPoint>> for ChartData {
    fn from(points: Vec<DataPoint>) -> Self {
        ChartData::Points(points)
    }
}

impl From<Vec<Series>> for ChartData {
    fn from(series: Vec<Series>) -> Self {
        ChartData::Series(series)
    }
}

/// Resolve colors for every series.
///
/// Explicit series colors win; otherwise `palette[index % len]`, then the built-in
/// palette. Empty input yields an empty list.
pub fn normalize_series(data: &ChartData, palette: &[String]) -> Vec<NormalizedSeries> {
    match data {
        ChartData::Points(points) if points.is_empty() => Vec::new(),
        ChartData::Points(points) => vec![NormalizedSeries {
            name: IMPLICIT_SERIES_NAME.to_string(),
            data: points.clone(),
            color: palette_color(palette, 0),
        }],
        ChartData::Series(series) => series
            .iter()
            .enumerate()
            .map(|(i, s)| NormalizedSeries {
                name: s.name.clone(),
                data: s.data.clone(),
                color: match s.color.as_deref().map(str::trim) {
                    Some(c) if !c.is_empty() => c.to_string(),
                    _ => palette_color(palette, i),
                },
            })
            .collect(),
    }
}

/// Length of the longest series (0 when there are none).
pub fn max_point_count(series: &[NormalizedSeries]) -> usize {
    series.iter().map(|s| s.data.len()).max().unwrap_or(0)
}
