// File: crates/chart-engine/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Number of horizontal grid divisions (and Y tick intervals).
pub const Y_DIVISIONS: usize = 5;
/// Upper bound on vertical grid divisions.
pub const MAX_X_DIVISIONS: usize = 10;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Vertical grid divisions for `point_count` points: `min(10, point_count - 1)`.
pub fn x_divisions(point_count: usize) -> usize {
    point_count.saturating_sub(1).min(MAX_X_DIVISIONS)
}

/// Y tick values, `Y_DIVISIONS + 1` of them from `min` to `max`.
pub fn y_ticks(min: f64, max: f64) -> Vec<f64> {
    linspace(min, max, Y_DIVISIONS + 1)
}

/// Format a tick value: integers without decimals, everything else with up to two.
pub fn format_tick(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
