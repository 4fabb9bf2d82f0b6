// File: crates/chart-engine/src/hit.rs
// Summary: Geometry recorded during rendering and the pointer hit-test over it.

use std::f64::consts::TAU;

// Absorbs rounding when a single slice sweeps the whole pie.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Extra pixels around a point marker that still count as a hit.
pub const POINT_HIT_TOLERANCE: f64 = 6.0;

/// On-surface geometry of one plotted value, recorded by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum HitTarget {
    Point {
        x: f64,
        y: f64,
        radius: f64,
        value: f64,
        label: Option<String>,
        series: String,
        color: String,
    },
    Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        value: f64,
        label: Option<String>,
        series: String,
        color: String,
    },
    /// Angles are radians in screen space (clockwise, 0 at 3 o'clock).
    Slice {
        start_angle: f64,
        end_angle: f64,
        center_x: f64,
        center_y: f64,
        radius: f64,
        value: f64,
        label: Option<String>,
        series: String,
        color: String,
        /// Share of the pie total, 0..=100.
        percentage: f64,
    },
}

impl HitTarget {
    pub fn value(&self) -> f64 {
        match self {
            HitTarget::Point { value, .. }
            | HitTarget::Bar { value, .. }
            | HitTarget::Slice { value, .. } => *value,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            HitTarget::Point { label, .. }
            | HitTarget::Bar { label, .. }
            | HitTarget::Slice { label, .. } => label.as_deref(),
        }
    }

    pub fn series(&self) -> &str {
        match self {
            HitTarget::Point { series, .. }
            | HitTarget::Bar { series, .. }
            | HitTarget::Slice { series, .. } => series,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            HitTarget::Point { color, .. }
            | HitTarget::Bar { color, .. }
            | HitTarget::Slice { color, .. } => color,
        }
    }

    pub fn percentage(&self) -> Option<f64> {
        match self {
            HitTarget::Slice { percentage, .. } => Some(*percentage),
            _ => None,
        }
    }

    /// Whether the surface coordinate (`px`, `py`) lies on this target.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        match *self {
            HitTarget::Point { x, y, radius, .. } => {
                (px - x).hypot(py - y) <= radius + POINT_HIT_TOLERANCE
            }
            HitTarget::Bar { x, y, width, height, .. } => {
                px >= x && px <= x + width && py >= y && py <= y + height
            }
            HitTarget::Slice { start_angle, end_angle, center_x, center_y, radius, .. } => {
                let dx = px - center_x;
                let dy = py - center_y;
                if dx.hypot(dy) > radius {
                    return false;
                }
                angle_in_sweep(dy.atan2(dx), start_angle, end_angle)
            }
        }
    }
}

/// Map any angle into `[0, 2π)`.
pub fn normalize_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU { 0.0 } else { r }
}

/// Whether `angle` falls in the sweep `[start, end)`, handling wrap past a full turn.
pub fn angle_in_sweep(angle: f64, start: f64, end: f64) -> bool {
    if end - start >= TAU - FULL_TURN_EPSILON {
        return true;
    }
    let a = normalize_angle(angle);
    let s = normalize_angle(start);
    let e = normalize_angle(end);
    if s <= e {
        a >= s && a < e
    } else {
        a >= s || a <= e
    }
}

/// First target under the pointer, in recording order.
pub fn find_hit(targets: &[HitTarget], x: f64, y: f64) -> Option<&HitTarget> {
    targets.iter().find(|t| t.contains(x, y))
}
