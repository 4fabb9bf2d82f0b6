// File: crates/chart-engine/src/config.rs
// Summary: Caller-supplied chart configuration with defaults, plus the accessible label it yields.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::AxisOptions;
use crate::series::ChartData;
use crate::theme::Theme;
use crate::types::{ChartKind, Padding, HEIGHT, WIDTH};

/// Accessible name used when the caller supplies no title.
pub const DEFAULT_ACCESSIBLE_NAME: &str = "Chart";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ChartConfig {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ChartKind,
    pub data: ChartData,
    pub width: i32,
    pub height: i32,
    /// Series palette; empty means the built-in one.
    pub colors: Vec<String>,
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_tooltip: bool,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub padding: Padding,
    /// Draw tick labels, axis titles, slice percentages and empty-state text.
    pub draw_labels: bool,
    /// Serialized as the preset name (`"light"`, `"dark"`, `"high-contrast-dark"`).
    #[cfg_attr(feature = "serde", serde(with = "crate::theme::by_name"))]
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData::default(),
            width: WIDTH,
            height: HEIGHT,
            colors: Vec::new(),
            show_legend: true,
            show_grid: true,
            show_tooltip: true,
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
            title: None,
            subtitle: None,
            description: None,
            padding: Padding::default(),
            draw_labels: true,
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    pub fn new(kind: ChartKind, data: impl Into<ChartData>) -> Self {
        Self { kind, data: data.into(), ..Self::default() }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_axes(mut self, x_axis: AxisOptions, y_axis: AxisOptions) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    pub fn accessible_label(&self) -> AccessibleLabel {
        let non_blank = |s: &Option<String>| s.as_deref().map(str::trim).filter(|t| !t.is_empty()).map(str::to_string);
        AccessibleLabel {
            role: "img",
            name: non_blank(&self.title).unwrap_or_else(|| DEFAULT_ACCESSIBLE_NAME.to_string()),
            description: non_blank(&self.description).or_else(|| non_blank(&self.subtitle)),
        }
    }
}

/// Role/name/description the host attaches to the drawing surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessibleLabel {
    pub role: &'static str,
    pub name: String,
    pub description: Option<String>,
}
