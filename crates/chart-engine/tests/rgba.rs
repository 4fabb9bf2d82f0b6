// File: crates/chart-engine/tests/rgba.rs
// Purpose: Validate the RGBA readback buffer and a few known pixels per chart kind.

use chart_engine::{theme, Chart, ChartConfig, ChartKind, DataPoint, Theme};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() -> anyhow::Result<()> {
    let data = vec![DataPoint::new(0.0), DataPoint::new(4.0)];
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Line, data).without_labels())?;
    let (px, w, h, stride) = chart.rgba8()?;
    assert_eq!((w, h), (500, 300));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // light theme background in the top-left corner
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
    Ok(())
}

#[test]
fn bar_fills_with_point_color() -> anyhow::Result<()> {
    let data = vec![DataPoint::labeled("A", 10.0).with_color("#ff0000")];
    let mut config = ChartConfig::new(ChartKind::Bar, data).without_labels();
    config.show_grid = false;
    let mut chart = Chart::new(config)?;
    let (px, _, _, stride) = chart.rgba8()?;
    // bar spans x 102..438, y 20..240
    assert_eq!(pixel(&px, stride, 270, 130), [255, 0, 0, 255]);
    // gap before the band stays background
    assert_eq!(pixel(&px, stride, 80, 130), [255, 255, 255, 255]);
    Ok(())
}

#[test]
fn pie_slices_use_palette_by_index() -> anyhow::Result<()> {
    let data = vec![DataPoint::new(1.0), DataPoint::new(1.0)];
    let config = ChartConfig::new(ChartKind::Pie, data)
        .with_colors(["#00ff00", "#0000ff"])
        .without_labels();
    let mut chart = Chart::new(config)?;
    let (px, _, _, stride) = chart.rgba8()?;
    // center (270, 130), radius 100; first slice is the right half
    assert_eq!(pixel(&px, stride, 320, 130), [0, 255, 0, 255]);
    assert_eq!(pixel(&px, stride, 220, 130), [0, 0, 255, 255]);
    // outside the pie
    assert_eq!(pixel(&px, stride, 270, 5), [255, 255, 255, 255]);
    Ok(())
}

#[test]
fn rerender_clears_previous_frame() -> anyhow::Result<()> {
    let data = vec![DataPoint::new(10.0).with_color("#ff0000")];
    let mut config = ChartConfig::new(ChartKind::Bar, data).without_labels();
    config.show_grid = false;
    let mut chart = Chart::new(config.clone())?;
    assert!(matches!(chart.hit_targets()[0], chart_engine::HitTarget::Bar { .. }));

    config.kind = ChartKind::Line;
    chart.update(config)?;
    assert!(chart.hit_targets().iter().all(|t| matches!(t, chart_engine::HitTarget::Point { .. })));
    let (px, _, _, stride) = chart.rgba8()?;
    assert_eq!(pixel(&px, stride, 270, 130), [255, 255, 255, 255]);
    Ok(())
}

#[test]
fn dark_theme_background() -> anyhow::Result<()> {
    let config = ChartConfig::default().with_theme(Theme::dark()).without_labels();
    let mut chart = Chart::new(config)?;
    let (px, _, _, stride) = chart.rgba8()?;
    assert_eq!(pixel(&px, stride, 10, 10), [18, 18, 20, 255]);
    Ok(())
}

#[test]
fn theme_presets_are_found_by_name() {
    assert_eq!(theme::find("dark"), Theme::dark());
    assert_eq!(theme::find("LIGHT"), Theme::light());
    assert_eq!(theme::find("no-such-theme"), Theme::light());
    let names: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
    assert_eq!(names, ["light", "dark", "high-contrast-dark"]);
}

#[test]
fn zero_sized_request_still_renders() -> anyhow::Result<()> {
    let data = vec![DataPoint::new(1.0)];
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Line, data).with_size(0, -20))?;
    assert!(chart.hit_targets().is_empty());
    assert_eq!(chart.dimensions().plot_width, 0.0);
    let (px, w, h, _) = chart.rgba8()?;
    assert_eq!((w, h), (1, 1));
    assert_eq!(px.len(), 4);
    Ok(())
}
