// File: crates/chart-engine/src/scale.rs
// Summary: Index (X) and value (Y) transforms from data space to surface pixels.

use crate::geometry::ChartDimensions;
use crate::range::DataRanges;

/// Horizontal scale placing point `i` at `left + step * i`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub step: f64,
}

impl IndexScale {
    /// Spread `point_count` points across the plot width; a single point sits on the left edge.
    pub fn new(dims: &ChartDimensions, point_count: usize) -> Self {
        let divisions = point_count.saturating_sub(1).max(1) as f64;
        Self { left_px: dims.plot_left(), step: dims.plot_width / divisions }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + self.step * index as f64
    }
}

/// Vertical value scale mapping the data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(dims: &ChartDimensions, ranges: &DataRanges) -> Self {
        let mut s = Self {
            top_px: dims.plot_top(),
            bottom_px: dims.plot_bottom(),
            vmin: ranges.min_y,
            vmax: ranges.max_y,
        };
        if !(s.vmax > s.vmin) { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let height = self.bottom_px - self.top_px;
        self.top_px + height - ((v - self.vmin) / (self.vmax - self.vmin)) * height
    }
    /// Pixel row of the zero line, clamped into the visible range.
    pub fn baseline_px(&self) -> f64 {
        self.to_px(0.0f64.clamp(self.vmin, self.vmax))
    }
}
