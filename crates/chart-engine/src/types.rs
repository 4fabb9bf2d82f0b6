// File: crates/chart-engine/src/types.rs
// Summary: Shared data model (points, series, chart kinds) and size/padding defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: i32 = 500;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;

/// Name given to the implicit series built from a flat point list.
pub const IMPLICIT_SERIES_NAME: &str = "Series 1";

/// The four supported chart kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Pie,
    Area,
}

/// A single plotted value. Read-only to the engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    pub value: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { label: None, value, color: None }
    }

    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self { label: Some(label.into()), value, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A named sequence of points sharing one color.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series {
    pub name: String,
    pub data: Vec<DataPoint>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self { name: name.into(), data, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A series whose color has been resolved.
/// Contract: `color` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSeries {
    pub name: String,
    pub data: Vec<DataPoint>,
    pub color: String,
}

impl NormalizedSeries {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().map(|p| p.value)
    }
}

impl From<NormalizedSeries> for Series {
    fn from(s: NormalizedSeries) -> Self {
        Series { name: s.name, data: s.data, color: Some(s.color) }
    }
}

/// Screen margins around the plotting rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal padding (left + right), saturating at the `i32` bounds.
    pub const fn hsum(&self) -> i32 { self.left.saturating_add(self.right) }
    /// Total vertical padding (top + bottom), saturating at the `i32` bounds.
    pub const fn vsum(&self) -> i32 { self.top.saturating_add(self.bottom) }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(20, 20, 60, 60)
    }
}
