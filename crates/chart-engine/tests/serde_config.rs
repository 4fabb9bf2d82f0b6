// File: crates/chart-engine/tests/serde_config.rs
// Purpose: Decoding caller configuration from JSON (requires the `serde` feature).

#![cfg(feature = "serde")]

use chart_engine::{normalize_series, ChartConfig, ChartData, ChartKind, Theme};

#[test]
fn flat_point_list_decodes_as_points() {
    let config: ChartConfig = serde_json::from_str(
        r#"{ "type": "bar", "data": [{ "label": "A", "value": 1 }, { "value": 2, "color": "red" }] }"#,
    )
    .expect("decode");
    assert_eq!(config.kind, ChartKind::Bar);
    assert!(matches!(config.data, ChartData::Points(ref p) if p.len() == 2));
    // unspecified fields keep their defaults
    assert_eq!((config.width, config.height), (500, 300));
    assert!(config.show_tooltip);
}

#[test]
fn named_entries_decode_as_series() {
    let config: ChartConfig = serde_json::from_str(
        r##"{
            "type": "line",
            "data": [
                { "name": "North", "data": [{ "value": 1 }], "color": "#112233" },
                { "name": "South", "data": [{ "value": 2 }] }
            ],
            "colors": ["#aaaaaa"],
            "showGrid": false,
            "yAxis": { "title": "Units", "min": 0, "max": 10 }
        }"##,
    )
    .expect("decode");
    assert!(!config.show_grid);
    assert_eq!(config.y_axis.max, Some(10.0));
    let series = normalize_series(&config.data, &config.colors);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].color, "#112233");
    assert_eq!(series[1].color, "#aaaaaa");
}

#[test]
fn empty_data_decodes_to_nothing() {
    let config: ChartConfig = serde_json::from_str(r#"{ "type": "pie", "data": [] }"#).expect("decode");
    assert!(config.data.is_empty());
}

#[test]
fn theme_is_resolved_by_name() {
    let config: ChartConfig = serde_json::from_str(r#"{ "theme": "dark" }"#).expect("decode");
    assert_eq!(config.theme, Theme::dark());

    let config: ChartConfig = serde_json::from_str(r#"{ "theme": "High-Contrast-Dark" }"#).expect("decode");
    assert_eq!(config.theme, Theme::high_contrast_dark());

    // unknown names and a missing field both fall back to light
    let config: ChartConfig = serde_json::from_str(r#"{ "theme": "sepia" }"#).expect("decode");
    assert_eq!(config.theme, Theme::light());
    let config: ChartConfig = serde_json::from_str("{}").expect("decode");
    assert_eq!(config.theme, Theme::light());
}

#[test]
fn theme_encodes_as_its_name() {
    let config = ChartConfig::default().with_theme(Theme::dark());
    let value = serde_json::to_value(&config).expect("encode");
    assert_eq!(value["theme"], "dark");
}
