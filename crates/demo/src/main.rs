// File: crates/demo/src/main.rs
// Summary: Demo loads a label/value CSV (or built-in sample), renders line/area/bar/pie PNGs,
// and prints the tooltip found under a sweep of pointer positions.

use anyhow::{Context, Result};
use chart_engine::{AxisOptions, Chart, ChartConfig, ChartData, ChartKind, DataPoint, Series};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,chart_engine=debug")),
        )
        .init();

    let (data, stem) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let data = load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (data, stem)
        }
        None => (sample_data(), "sample".to_string()),
    };
    info!(stem = %stem, empty = data.is_empty(), "input ready");

    for kind in [ChartKind::Line, ChartKind::Area, ChartKind::Bar, ChartKind::Pie] {
        let config = ChartConfig::new(kind, data.clone())
            .with_axes(AxisOptions::titled("Category"), AxisOptions::titled("Value"))
            .with_title(format!("{stem} ({kind:?})"));
        let mut chart = Chart::new(config)?;

        if let Some(message) = chart.empty_message() {
            warn!(?kind, reason = message, "nothing to plot");
        }
        for item in chart.legend() {
            info!(id = %item.id, color = %item.color, "legend");
        }

        let out = out_name_with(&stem, kind);
        chart.write_png(&out)?;
        println!("Wrote {}", out.display());

        probe_tooltips(&mut chart);
    }
    Ok(())
}

/// Sweep the pointer along the plot's middle row and report every tooltip change.
fn probe_tooltips(chart: &mut Chart) {
    let dims = chart.dimensions();
    let (_, cy) = dims.plot_center();
    let mut x = dims.plot_left();
    while x <= dims.plot_right() {
        if chart.pointer_move(x, cy) {
            let t = chart.tooltip();
            if t.visible {
                println!(
                    "  tooltip @({:.0},{:.0}) {} {} = {}{}",
                    t.x,
                    t.y,
                    t.series.as_deref().unwrap_or("-"),
                    t.label.as_deref().unwrap_or("-"),
                    t.value,
                    t.percentage.map(|p| format!(" ({p:.1}%)")).unwrap_or_default(),
                );
            }
        }
        x += 2.0;
    }
    chart.pointer_leave();
}

fn sample_data() -> ChartData {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    let series = |name: &str, values: [f64; 6]| {
        Series::new(name, months.iter().zip(values).map(|(m, v)| DataPoint::labeled(*m, v)).collect())
    };
    ChartData::Series(vec![
        series("Revenue", [12.0, 19.0, 3.0, 5.0, 2.0, 3.0]),
        series("Cost", [7.0, 11.0, 5.0, 8.0, 3.0, 7.0]),
    ])
}

/// Produce output file name like target/out/chart_<stem>_<kind>.png
fn out_name_with(stem: &str, kind: ChartKind) -> PathBuf {
    let kind = format!("{kind:?}").to_lowercase();
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{stem}_{kind}.png"));
    out
}

/// Load a `label,value[,series]` CSV. Rows without a series column form one flat list;
/// otherwise rows are grouped by series name in first-seen order.
fn load_csv(path: &Path) -> Result<ChartData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "category", "name", "x"]);
    let i_value = idx(&["value", "y", "amount"]).context("no value column (value/y/amount)")?;
    let i_series = idx(&["series", "group"]);

    let mut flat = Vec::new();
    let mut grouped: Vec<Series> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            warn!(line = ?rec.position().map(|p| p.line()), "skipping row without numeric value");
            continue;
        };
        let mut point = DataPoint::new(value);
        point.label = i_label.and_then(|i| rec.get(i)).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        match i_series.and_then(|i| rec.get(i)).map(str::trim) {
            Some(name) if !name.is_empty() => match grouped.iter_mut().find(|s| s.name == name) {
                Some(s) => s.data.push(point),
                None => grouped.push(Series::new(name, vec![point])),
            },
            _ => flat.push(point),
        }
    }

    if grouped.is_empty() {
        Ok(ChartData::Points(flat))
    } else {
        if !flat.is_empty() {
            grouped.push(Series::new("Other", flat));
        }
        Ok(ChartData::Series(grouped))
    }
}
