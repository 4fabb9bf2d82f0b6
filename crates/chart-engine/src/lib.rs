// File: crates/chart-engine/src/lib.rs
// Summary: Engine entry point; exports normalization, ranges, rendering and hit-testing APIs.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod legend;
pub mod pie;
pub mod range;
pub mod render;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::AxisOptions;
pub use chart::Chart;
pub use config::{AccessibleLabel, ChartConfig};
pub use error::{ChartError, Result};
pub use geometry::{compute_dimensions, ChartDimensions};
pub use hit::{find_hit, HitTarget};
pub use legend::{build_legend, empty_state_message, LegendItem};
pub use range::{calculate_ranges, DataRanges};
pub use series::{normalize_series, ChartData};
pub use theme::Theme;
pub use text::TextShaper;
pub use tooltip::{on_pointer_leave, on_pointer_move, TooltipState};
pub use types::{ChartKind, DataPoint, NormalizedSeries, Padding, Series};
