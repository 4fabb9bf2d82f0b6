// File: crates/chart-engine/src/chart.rs
// Summary: Chart owning its Skia raster surface, the current hit targets and tooltip state.

use skia_safe as skia;
use tracing::{debug, trace};

use crate::config::{AccessibleLabel, ChartConfig};
use crate::error::{ChartError, Result};
use crate::geometry::{compute_dimensions, ChartDimensions};
use crate::hit::HitTarget;
use crate::legend::{build_legend, empty_state_message, LegendItem};
use crate::range::{calculate_ranges, DataRanges};
use crate::render::render_frame;
use crate::series::normalize_series;
use crate::text::TextShaper;
use crate::tooltip::{on_pointer_leave, on_pointer_move, Tooltip, TooltipState};
use crate::types::NormalizedSeries;

/// A rendered chart.
///
/// Every render pass clears the surface, redraws, and replaces the hit-target list
/// as one step under `&mut self`, so pointer handling always sees the geometry of
/// the pixels currently on the surface.
pub struct Chart {
    config: ChartConfig,
    series: Vec<NormalizedSeries>,
    surface: skia::Surface,
    text: TextShaper,
    targets: Vec<HitTarget>,
    tooltip: Tooltip,
}

impl Chart {
    /// Normalize `config.data`, allocate the surface and render the first frame.
    pub fn new(config: ChartConfig) -> Result<Self> {
        let surface = make_surface(config.width, config.height)?;
        let series = normalize_series(&config.data, &config.colors);
        let mut chart = Self {
            config,
            series,
            surface,
            text: TextShaper::new(),
            targets: Vec::new(),
            tooltip: Tooltip::default(),
        };
        chart.render();
        Ok(chart)
    }

    /// Replace the configuration and re-render, resizing the surface if needed.
    pub fn update(&mut self, config: ChartConfig) -> Result<()> {
        if surface_size(config.width, config.height) != surface_size(self.config.width, self.config.height) {
            self.surface = make_surface(config.width, config.height)?;
        }
        self.series = normalize_series(&config.data, &config.colors);
        self.config = config;
        self.render();
        Ok(())
    }

    /// Run one full render pass.
    pub fn render(&mut self) {
        let canvas = self.surface.canvas();
        let targets = render_frame(canvas, &self.text, &self.config, &self.series);
        self.targets = targets;
        if !self.config.show_tooltip {
            self.tooltip.hide();
        }
        debug!(
            kind = ?self.config.kind,
            series = self.series.len(),
            targets = self.targets.len(),
            width = self.config.width,
            height = self.config.height,
            "rendered chart"
        );
    }

    /// Handle a pointer move in surface coordinates. Returns whether the tooltip changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let next = if self.config.show_tooltip {
            on_pointer_move(x, y, &self.targets)
        } else {
            TooltipState::hidden()
        };
        let changed = self.tooltip.apply(next);
        trace!(x, y, visible = self.tooltip.state().visible, changed, "pointer move");
        changed
    }

    /// Handle the pointer leaving the surface. Returns whether the tooltip changed.
    pub fn pointer_leave(&mut self) -> bool {
        self.tooltip.apply(on_pointer_leave())
    }

    pub fn tooltip(&self) -> &TooltipState {
        self.tooltip.state()
    }

    pub fn hit_targets(&self) -> &[HitTarget] {
        &self.targets
    }

    pub fn series(&self) -> &[NormalizedSeries] {
        &self.series
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dimensions(&self) -> ChartDimensions {
        compute_dimensions(self.config.width, self.config.height, self.config.padding)
    }

    pub fn ranges(&self) -> DataRanges {
        calculate_ranges(&self.series, &self.config.y_axis)
    }

    /// Legend entries, or none when the legend is switched off.
    pub fn legend(&self) -> Vec<LegendItem> {
        if self.config.show_legend { build_legend(&self.series) } else { Vec::new() }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        empty_state_message(&self.series, self.config.kind)
    }

    pub fn accessible_label(&self) -> AccessibleLabel {
        self.config.accessible_label()
    }

    /// Read back the surface as unpremultiplied RGBA8: (pixels, width, height, row bytes).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = surface_size(self.config.width, self.config.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    /// Encode the current surface as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let pixmap = self.surface.peek_pixels().ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        if !skia::png_encoder::encode(&pixmap, &mut bytes, &skia::png_encoder::Options::default()) {
            return Err(ChartError::Encode);
        }
        Ok(bytes)
    }

    /// Write the current surface to `path` as PNG, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Raster surfaces cannot be empty; zero or negative sizes get a 1x1 surface.
fn surface_size(width: i32, height: i32) -> (i32, i32) {
    (width.max(1), height.max(1))
}

fn make_surface(width: i32, height: i32) -> Result<skia::Surface> {
    let (w, h) = surface_size(width, height);
    skia::surfaces::raster_n32_premul((w, h)).ok_or(ChartError::Surface { width: w, height: h })
}
