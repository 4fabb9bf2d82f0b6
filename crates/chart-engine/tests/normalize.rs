// File: crates/chart-engine/tests/normalize.rs
// Purpose: Series normalization, palette cycling, legend derivation and empty-state messages.

use chart_engine::color::{parse_color, DEFAULT_PALETTE};
use chart_engine::legend::{NO_DATA_MESSAGE, NO_MEASURABLE_VALUES_MESSAGE};
use chart_engine::pie::layout_pie;
use chart_engine::{
    build_legend, empty_state_message, normalize_series, ChartData, ChartKind, DataPoint, Series,
};
use proptest::prelude::*;

fn points(values: &[f64]) -> Vec<DataPoint> {
    values.iter().map(|&v| DataPoint::new(v)).collect()
}

#[test]
fn flat_points_become_one_implicit_series() {
    let data = ChartData::Points(vec![DataPoint::labeled("Jan", 10.0), DataPoint::labeled("Feb", 20.0)]);
    let series = normalize_series(&data, &[]);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].name, "Series 1");
    assert_eq!(series[0].color, DEFAULT_PALETTE[0]);
    assert_eq!(series[0].data.len(), 2);
}

#[test]
fn empty_input_yields_no_series() {
    assert!(normalize_series(&ChartData::Points(Vec::new()), &[]).is_empty());
    assert!(normalize_series(&ChartData::Series(Vec::new()), &[]).is_empty());
    assert!(normalize_series(&ChartData::default(), &[]).is_empty());
}

#[test]
fn colors_resolve_explicit_then_palette_then_builtin() {
    let data = ChartData::Series(vec![
        Series::new("a", points(&[1.0])),
        Series::new("b", points(&[1.0])).with_color("#010203"),
        Series::new("c", points(&[1.0])),
        Series::new("d", points(&[1.0])).with_color("  "),
    ]);
    let palette = vec!["#aaaaaa".to_string(), "#bbbbbb".to_string()];
    let colors: Vec<String> = normalize_series(&data, &palette).into_iter().map(|s| s.color).collect();
    assert_eq!(colors, ["#aaaaaa", "#010203", "#aaaaaa", "#bbbbbb"]);

    let builtin: Vec<String> = normalize_series(&data, &[]).into_iter().map(|s| s.color).collect();
    assert_eq!(builtin, [DEFAULT_PALETTE[0], "#010203", DEFAULT_PALETTE[2], DEFAULT_PALETTE[3]]);
}

#[test]
fn builtin_palette_wraps_after_five() {
    let data = ChartData::Series((0..7).map(|i| Series::new(format!("s{i}"), points(&[1.0]))).collect());
    let series = normalize_series(&data, &[]);
    assert_eq!(series[5].color, DEFAULT_PALETTE[0]);
    assert_eq!(series[6].color, DEFAULT_PALETTE[1]);
}

proptest! {
    #[test]
    fn normalizing_twice_keeps_colors(count in 0usize..12, palette_len in 0usize..4) {
        let palette: Vec<String> = (0..palette_len).map(|i| format!("#0{i}0{i}0{i}")).collect();
        let data = ChartData::Series((0..count).map(|i| Series::new(format!("s{i}"), points(&[i as f64]))).collect());
        let once = normalize_series(&data, &palette);
        let again = ChartData::Series(once.iter().cloned().map(Series::from).collect());
        // a different palette must not matter once colors are present
        let twice = normalize_series(&again, &["#ffffff".to_string()]);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn legend_mirrors_series_order_with_unique_ids() {
    let data = ChartData::Series(vec![
        Series::new("Revenue", points(&[1.0])),
        Series::new("Revenue", points(&[2.0])),
        Series::new("Cost", points(&[3.0])).with_color("red"),
    ]);
    let legend = build_legend(&normalize_series(&data, &[]));
    let ids: Vec<&str> = legend.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["Revenue-0", "Revenue-1", "Cost-2"]);
    assert_eq!(legend[2].label, "Cost");
    assert_eq!(legend[2].color, "red");
    assert_eq!(legend[1].series_index, 1);
}

#[test]
fn empty_state_messages() {
    let none = normalize_series(&ChartData::Points(Vec::new()), &[]);
    assert_eq!(empty_state_message(&none, ChartKind::Line), Some(NO_DATA_MESSAGE));
    assert_eq!(NO_DATA_MESSAGE, "No chart data available");

    let zeros = normalize_series(
        &ChartData::Points(vec![DataPoint::labeled("A", 0.0), DataPoint::labeled("B", 0.0)]),
        &[],
    );
    assert_eq!(empty_state_message(&zeros, ChartKind::Bar), Some(NO_MEASURABLE_VALUES_MESSAGE));
    assert_eq!(NO_MEASURABLE_VALUES_MESSAGE, "Chart data contains no measurable values");

    let real = normalize_series(&ChartData::Points(points(&[1.0, 2.0])), &[]);
    assert_eq!(empty_state_message(&real, ChartKind::Line), None);
}

#[test]
fn series_without_points_count_as_unmeasurable() {
    let data = ChartData::Series(vec![Series::new("empty", Vec::new())]);
    let series = normalize_series(&data, &[]);
    assert_eq!(empty_state_message(&series, ChartKind::Line), Some(NO_MEASURABLE_VALUES_MESSAGE));
}

#[test]
fn cancelling_values_are_measured_by_magnitude() {
    let series = normalize_series(&ChartData::Points(points(&[-5.0, 5.0])), &[]);
    assert_eq!(empty_state_message(&series, ChartKind::Line), None);
}

#[test]
fn pie_without_positive_total_is_unmeasurable() {
    let series = normalize_series(&ChartData::Points(points(&[-5.0, -1.0])), &[]);
    assert_eq!(empty_state_message(&series, ChartKind::Bar), None);
    assert_eq!(empty_state_message(&series, ChartKind::Pie), Some(NO_MEASURABLE_VALUES_MESSAGE));
}

#[test]
fn pie_total_overflow_is_unmeasurable() {
    let series = normalize_series(&ChartData::Points(points(&[1e308, 1e308])), &[]);
    assert_eq!(empty_state_message(&series, ChartKind::Line), None);
    assert_eq!(empty_state_message(&series, ChartKind::Pie), Some(NO_MEASURABLE_VALUES_MESSAGE));
    assert!(layout_pie(&series[0], &[]).is_empty());
}

#[test]
fn color_strings_parse() {
    let c = parse_color("#ff8000").expect("hex6");
    assert_eq!((c.r(), c.g(), c.b(), c.a()), (255, 128, 0, 255));
    let c = parse_color("#f00").expect("hex3");
    assert_eq!((c.r(), c.g(), c.b()), (255, 0, 0));
    let c = parse_color("#00000080").expect("hex8");
    assert_eq!(c.a(), 128);
    assert!(parse_color("purple").is_some());
    assert!(parse_color("#12345").is_none());
    assert!(parse_color("not-a-color").is_none());
}
