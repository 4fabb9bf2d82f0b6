// File: crates/chart-engine/src/geometry.rs
// Summary: Plotting-rectangle math (padding applied to the requested surface size).

use crate::types::Padding;

/// Padded plotting region inside the total drawing surface.
/// Contract: `plot_width` and `plot_height` are never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDimensions {
    pub padding: Padding,
    pub plot_width: f64,
    pub plot_height: f64,
    pub total_width: f64,
    pub total_height: f64,
}

impl ChartDimensions {
    pub fn plot_left(&self) -> f64 { self.padding.left as f64 }
    pub fn plot_top(&self) -> f64 { self.padding.top as f64 }
    pub fn plot_right(&self) -> f64 { self.plot_left() + self.plot_width }
    pub fn plot_bottom(&self) -> f64 { self.plot_top() + self.plot_height }

    pub fn plot_center(&self) -> (f64, f64) {
        (self.plot_left() + self.plot_width / 2.0, self.plot_top() + self.plot_height / 2.0)
    }

    /// True when there is no area to draw marks into.
    pub fn is_degenerate(&self) -> bool {
        self.plot_width <= 0.0 || self.plot_height <= 0.0
    }
}

/// Apply `padding` to a requested `width` x `height`, clamping the plot size at zero.
pub fn compute_dimensions(width: i32, height: i32, padding: Padding) -> ChartDimensions {
    let total_width = width.max(0) as f64;
    let total_height = height.max(0) as f64;
    let plot_width = (width as f64 - padding.hsum() as f64).max(0.0);
    let plot_height = (height as f64 - padding.vsum() as f64).max(0.0);
    ChartDimensions { padding, plot_width, plot_height, total_width, total_height }
}
