// File: crates/chart-engine/src/pie.rs
// Summary: Pie layout (angles, percentages, labels) and drawing for the first series.

use std::f64::consts::{FRAC_PI_2, TAU};

use skia_safe as skia;

use crate::color::{palette_color, resolve_color};
use crate::geometry::ChartDimensions;
use crate::hit::HitTarget;
use crate::legend::{has_pie_total, pie_total};
use crate::render::Frame;
use crate::text::{Anchor, Face, TextSpec};
use crate::types::NormalizedSeries;

/// Slices whose share is at or below this percentage get no in-slice label.
pub const LABEL_THRESHOLD_PERCENT: f64 = 5.0;
/// Gap between the pie edge and the plotting rectangle.
pub const PIE_MARGIN: f64 = 10.0;
/// Distance of percentage labels from the center, as a fraction of the radius.
const LABEL_RADIUS_FACTOR: f64 = 0.65;
const LABEL_FONT: f32 = 12.0;

/// One wedge of the pie. Angles are radians, clockwise from 3 o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
    /// Share of the total, 0..=100.
    pub percentage: f64,
    pub color: String,
    pub label: Option<String>,
    /// In-slice percentage text, present only above [`LABEL_THRESHOLD_PERCENT`].
    pub percentage_label: Option<String>,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Text drawn inside a slice with the given share, if any.
pub fn percentage_label(percentage: f64) -> Option<String> {
    (percentage > LABEL_THRESHOLD_PERCENT).then(|| format!("{percentage:.1}%"))
}

/// Center and radius of the pie inside the plotting rectangle.
pub fn pie_geometry(dims: &ChartDimensions) -> (f64, f64, f64) {
    let (cx, cy) = dims.plot_center();
    let radius = (dims.plot_width.min(dims.plot_height) / 2.0 - PIE_MARGIN).max(0.0);
    (cx, cy, radius)
}

/// Lay out one slice per positive value, starting at 12 o'clock and going clockwise.
/// Slice colors come from the point, else `palette[i % len]` by point index.
pub fn layout_pie(series: &NormalizedSeries, palette: &[String]) -> Vec<PieSlice> {
    let total = pie_total(series);
    if !has_pie_total(total) {
        return Vec::new();
    }
    let mut angle = -FRAC_PI_2;
    let mut out = Vec::new();
    for (i, p) in series.data.iter().enumerate() {
        if !(p.value.is_finite() && p.value > 0.0) {
            continue;
        }
        let sweep = p.value / total * TAU;
        let percentage = p.value * 100.0 / total;
        out.push(PieSlice {
            start_angle: angle,
            end_angle: angle + sweep,
            value: p.value,
            percentage,
            color: p.color.clone().unwrap_or_else(|| palette_color(palette, i)),
            label: p.label.clone(),
            percentage_label: percentage_label(percentage),
        });
        angle += sweep;
    }
    out
}

pub(crate) fn draw_pie(frame: &Frame, series: &NormalizedSeries) -> Vec<HitTarget> {
    let (cx, cy, radius) = pie_geometry(&frame.dims);
    if radius <= 0.0 {
        return Vec::new();
    }
    let slices = layout_pie(series, &frame.config.colors);
    let oval = skia::Rect::from_ltrb(
        (cx - radius) as f32,
        (cy - radius) as f32,
        (cx + radius) as f32,
        (cy + radius) as f32,
    );

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(frame.config.theme.slice_border);

    for s in &slices {
        let start = s.start_angle.to_degrees() as f32;
        let sweep = (s.end_angle - s.start_angle).to_degrees() as f32;
        fill.set_color(resolve_color(&s.color));
        frame.canvas.draw_arc(oval, start, sweep, true, &fill);
        if slices.len() > 1 {
            frame.canvas.draw_arc(oval, start, sweep, true, &border);
        }
    }

    if frame.config.draw_labels {
        let spec = TextSpec::new(LABEL_FONT, frame.config.theme.slice_label, Face::Numeric);
        for s in &slices {
            let Some(text) = s.percentage_label.as_deref() else { continue };
            let mid = s.mid_angle();
            let lx = cx + mid.cos() * radius * LABEL_RADIUS_FACTOR;
            let ly = cy + mid.sin() * radius * LABEL_RADIUS_FACTOR;
            frame.text.draw(frame.canvas, text, lx as f32, ly as f32 + LABEL_FONT * 0.35, Anchor::Center, spec);
        }
    }

    slices
        .into_iter()
        .map(|s| HitTarget::Slice {
            start_angle: s.start_angle,
            end_angle: s.end_angle,
            center_x: cx,
            center_y: cy,
            radius,
            value: s.value,
            label: s.label,
            series: series.name.clone(),
            color: s.color,
            percentage: s.percentage,
        })
        .collect()
}
