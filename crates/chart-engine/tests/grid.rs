// File: crates/chart-engine/tests/grid.rs
// Purpose: Grid division counts, Y tick placement and tick label formatting.

use chart_engine::grid::{format_tick, linspace, x_divisions, y_ticks, Y_DIVISIONS};

#[test]
fn vertical_divisions_follow_point_count() {
    assert_eq!(x_divisions(0), 0);
    assert_eq!(x_divisions(1), 0);
    assert_eq!(x_divisions(2), 1);
    assert_eq!(x_divisions(11), 10);
    assert_eq!(x_divisions(50), 10);
}

#[test]
fn six_horizontal_lines() {
    let ys = linspace(20.0, 240.0, Y_DIVISIONS + 1);
    assert_eq!(ys.len(), 6);
    assert_eq!(ys[0], 20.0);
    assert_eq!(ys[5], 240.0);
}

#[test]
fn y_ticks_span_the_range() {
    assert_eq!(y_ticks(0.0, 20.0), vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);
    let ticks = y_ticks(-10.0, 0.0);
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks.first(), Some(&-10.0));
    assert_eq!(ticks.last(), Some(&0.0));
}

#[test]
fn tick_labels() {
    assert_eq!(format_tick(0.0), "0");
    assert_eq!(format_tick(20.0), "20");
    assert_eq!(format_tick(-4.0), "-4");
    assert_eq!(format_tick(1.5), "1.5");
    assert_eq!(format_tick(0.1), "0.1");
    assert_eq!(format_tick(1.0 / 3.0), "0.33");
}
