// File: crates/chart-engine/src/render.rs
// Summary: Per-frame drawing pipeline: grid, axes, line/area and bar series, empty state.

use skia_safe as skia;

use crate::color::resolve_color;
use crate::config::ChartConfig;
use crate::geometry::{compute_dimensions, ChartDimensions};
use crate::grid::{format_tick, linspace, x_divisions, y_ticks, Y_DIVISIONS};
use crate::hit::HitTarget;
use crate::legend::empty_state_message;
use crate::pie;
use crate::range::{calculate_ranges, DataRanges};
use crate::scale::{IndexScale, ValueScale};
use crate::series::max_point_count;
use crate::text::{Anchor, Face, TextShaper, TextSpec};
use crate::types::{ChartKind, NormalizedSeries};

/// Visual radius of a line/area point marker.
pub const POINT_RADIUS: f64 = 4.0;
/// Share of each bar group occupied by bars; the rest is inter-group spacing.
pub const BAR_BAND: f64 = 0.8;

const LINE_WIDTH: f32 = 2.0;
const TICK_FONT: f32 = 11.0;
const TITLE_FONT: f32 = 13.0;
const EMPTY_FONT: f32 = 14.0;
/// At most this many category labels are drawn under the X axis.
const MAX_X_LABELS: usize = 10;

/// Everything a drawing routine needs for one render pass.
pub struct Frame<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: &'a TextShaper,
    pub config: &'a ChartConfig,
    pub dims: ChartDimensions,
    pub ranges: DataRanges,
}

/// Clear the surface and draw `series` per `config`, returning the geometry of every
/// plotted value in drawing order.
pub fn render_frame(
    canvas: &skia::Canvas,
    text: &TextShaper,
    config: &ChartConfig,
    series: &[NormalizedSeries],
) -> Vec<HitTarget> {
    canvas.clear(config.theme.background);

    let dims = compute_dimensions(config.width, config.height, config.padding);
    let ranges = calculate_ranges(series, &config.y_axis);
    let frame = Frame { canvas, text, config, dims, ranges };

    if let Some(message) = empty_state_message(series, config.kind) {
        draw_empty_state(&frame, message);
        return Vec::new();
    }
    if dims.is_degenerate() {
        return Vec::new();
    }

    match config.kind {
        ChartKind::Pie => pie::draw_pie(&frame, &series[0]),
        kind => {
            let point_count = max_point_count(series);
            if config.show_grid {
                draw_grid(&frame, point_count);
            }
            draw_axes(&frame, series, point_count);
            if kind == ChartKind::Bar {
                let bars = bar_rects(series, &dims, &ranges);
                draw_bars(&frame, &bars);
                bars
            } else {
                let xs = IndexScale::new(&dims, point_count);
                let ys = ValueScale::new(&dims, &ranges);
                let mut targets = Vec::new();
                for s in series {
                    let points = line_points(s, &xs, &ys);
                    draw_line_series(&frame, s, &points, kind == ChartKind::Area);
                    targets.extend(points);
                }
                targets
            }
        }
    }
}

// ---- layout -----------------------------------------------------------------

/// Marker geometry for each finite value of `series`.
pub fn line_points(series: &NormalizedSeries, xs: &IndexScale, ys: &ValueScale) -> Vec<HitTarget> {
    series
        .data
        .iter()
        .enumerate()
        .filter(|(_, p)| p.value.is_finite())
        .map(|(i, p)| HitTarget::Point {
            x: xs.to_px(i),
            y: ys.to_px(p.value),
            radius: POINT_RADIUS,
            value: p.value,
            label: p.label.clone(),
            series: series.name.clone(),
            color: p.color.clone().unwrap_or_else(|| series.color.clone()),
        })
        .collect()
}

/// Bar rectangles: one group per point index, one sub-band per series inside the
/// central [`BAR_BAND`] of the group. Bars run from the zero line to the value.
pub fn bar_rects(series: &[NormalizedSeries], dims: &ChartDimensions, ranges: &DataRanges) -> Vec<HitTarget> {
    let point_count = max_point_count(series);
    if point_count == 0 || series.is_empty() {
        return Vec::new();
    }
    let ys = ValueScale::new(dims, ranges);
    let group_width = dims.plot_width / point_count as f64;
    let band = group_width * BAR_BAND;
    let bar_width = band / series.len() as f64;
    let base = ys.baseline_px();

    let mut out = Vec::new();
    for (si, s) in series.iter().enumerate() {
        for (i, p) in s.data.iter().enumerate() {
            if !p.value.is_finite() {
                continue;
            }
            let top = ys.to_px(p.value.clamp(ys.vmin, ys.vmax));
            out.push(HitTarget::Bar {
                x: dims.plot_left() + group_width * i as f64 + (group_width - band) / 2.0 + bar_width * si as f64,
                y: top.min(base),
                width: bar_width,
                height: (top - base).abs(),
                value: p.value,
                label: p.label.clone(),
                series: s.name.clone(),
                color: p.color.clone().unwrap_or_else(|| s.color.clone()),
            });
        }
    }
    out
}

// ---- drawing ----------------------------------------------------------------

fn draw_grid(frame: &Frame, point_count: usize) {
    let d = &frame.dims;
    let mut paint = skia::Paint::default();
    paint.set_color(frame.config.theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // horizontals
    for y in linspace(d.plot_top(), d.plot_bottom(), Y_DIVISIONS + 1) {
        frame.canvas.draw_line((d.plot_left() as f32, y as f32), (d.plot_right() as f32, y as f32), &paint);
    }
    // verticals
    let divisions = x_divisions(point_count);
    if divisions > 0 {
        for x in linspace(d.plot_left(), d.plot_right(), divisions + 1) {
            frame.canvas.draw_line((x as f32, d.plot_top() as f32), (x as f32, d.plot_bottom() as f32), &paint);
        }
    }
}

fn draw_axes(frame: &Frame, series: &[NormalizedSeries], point_count: usize) {
    let d = &frame.dims;
    let theme = &frame.config.theme;
    let (l, t, r, b) = (d.plot_left() as f32, d.plot_top() as f32, d.plot_right() as f32, d.plot_bottom() as f32);

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    frame.canvas.draw_line((l, b), (r, b), &axis_paint);
    frame.canvas.draw_line((l, t), (l, b), &axis_paint);

    if !frame.config.draw_labels {
        return;
    }

    let tick_spec = TextSpec::new(TICK_FONT, theme.tick, Face::Numeric);
    let title_spec = TextSpec::new(TITLE_FONT, theme.axis_label, Face::Sans);
    let ys = ValueScale::new(d, &frame.ranges);
    for v in y_ticks(frame.ranges.min_y, frame.ranges.max_y) {
        let y = ys.to_px(v) as f32;
        frame.text.draw(frame.canvas, &format_tick(v), l - 8.0, y + 4.0, Anchor::Right, tick_spec);
    }

    draw_category_labels(frame, series, point_count);

    if let Some(title) = frame.config.x_axis.title_text() {
        let (cx, _) = d.plot_center();
        let y = (d.total_height as f32 - 12.0).max(b + 2.0 * TITLE_FONT);
        frame.text.draw(frame.canvas, title, cx as f32, y, Anchor::Center, title_spec);
    }
    if let Some(title) = frame.config.y_axis.title_text() {
        let (_, cy) = d.plot_center();
        frame.text.draw_vertical(frame.canvas, title, TITLE_FONT, cy as f32, title_spec);
    }
}

/// Point labels under the X axis, thinned to at most [`MAX_X_LABELS`].
fn draw_category_labels(frame: &Frame, series: &[NormalizedSeries], point_count: usize) {
    if point_count == 0 {
        return;
    }
    let d = &frame.dims;
    let stride = point_count.div_ceil(MAX_X_LABELS);
    let bars = frame.config.kind == ChartKind::Bar;
    let xs = IndexScale::new(d, point_count);
    let group_width = d.plot_width / point_count as f64;
    let spec = TextSpec::new(TICK_FONT, frame.config.theme.tick, Face::Sans);

    for i in (0..point_count).step_by(stride) {
        let Some(label) = series.iter().find_map(|s| s.data.get(i).and_then(|p| p.label.as_deref())) else {
            continue;
        };
        let x = if bars { d.plot_left() + group_width * (i as f64 + 0.5) } else { xs.to_px(i) };
        frame.text.draw(frame.canvas, label, x as f32, d.plot_bottom() as f32 + 18.0, Anchor::Center, spec);
    }
}

fn draw_line_series(frame: &Frame, series: &NormalizedSeries, points: &[HitTarget], area: bool) {
    let coords: Vec<(f32, f32)> = points
        .iter()
        .filter_map(|t| match *t {
            HitTarget::Point { x, y, .. } => Some((x as f32, y as f32)),
            _ => None,
        })
        .collect();
    let Some(&first) = coords.first() else { return };
    let color = resolve_color(&series.color);

    let mut path = skia::Path::new();
    path.move_to(first);
    for &p in coords.iter().skip(1) {
        path.line_to(p);
    }

    if area && coords.len() > 1 {
        let baseline = frame.dims.plot_bottom() as f32;
        let mut fill_path = path.clone();
        if let Some(&(last_x, _)) = coords.last() {
            fill_path.line_to((last_x, baseline));
        }
        fill_path.line_to((first.0, baseline));
        fill_path.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color.with_a(frame.config.theme.area_fill_alpha));
        frame.canvas.draw_path(&fill_path, &fill);
    }

    if coords.len() > 1 {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(LINE_WIDTH);
        stroke.set_color(color);
        frame.canvas.draw_path(&path, &stroke);
    }

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    for t in points {
        if let HitTarget::Point { x, y, radius, color, .. } = t {
            marker.set_color(resolve_color(color));
            frame.canvas.draw_circle((*x as f32, *y as f32), *radius as f32, &marker);
        }
    }
}

fn draw_bars(frame: &Frame, bars: &[HitTarget]) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    for t in bars {
        if let HitTarget::Bar { x, y, width, height, color, .. } = t {
            body.set_color(resolve_color(color));
            let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
            frame.canvas.draw_rect(rect, &body);
        }
    }
}

fn draw_empty_state(frame: &Frame, message: &str) {
    if !frame.config.draw_labels {
        return;
    }
    let x = frame.dims.total_width as f32 / 2.0;
    let y = frame.dims.total_height as f32 / 2.0 + EMPTY_FONT * 0.35;
    let spec = TextSpec::new(EMPTY_FONT, frame.config.theme.empty_text, Face::Sans);
    frame.text.draw(frame.canvas, message, x, y, Anchor::Center, spec);
}
