// File: crates/chart-engine/src/tooltip.rs
// Summary: Tooltip state machine (hidden / shown) driven by pointer events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hit::{find_hit, HitTarget};

/// Offset of the tooltip anchor from the pointer so the cursor stays visible.
pub const TOOLTIP_OFFSET: (f64, f64) = (12.0, -12.0);

/// Floating tooltip content for the host to render.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: Option<String>,
    pub series: Option<String>,
    pub color: Option<String>,
    pub percentage: Option<f64>,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Tooltip for `target` anchored near the pointer at (`x`, `y`).
    pub fn for_target(target: &HitTarget, x: f64, y: f64) -> Self {
        Self {
            visible: true,
            x: x + TOOLTIP_OFFSET.0,
            y: y + TOOLTIP_OFFSET.1,
            value: target.value(),
            label: target.label().map(str::to_string),
            series: Some(target.series().to_string()),
            color: Some(target.color().to_string()),
            percentage: target.percentage(),
        }
    }
}

/// Resolve a pointer move against the current targets.
pub fn on_pointer_move(x: f64, y: f64, targets: &[HitTarget]) -> TooltipState {
    match find_hit(targets, x, y) {
        Some(target) => TooltipState::for_target(target, x, y),
        None => TooltipState::hidden(),
    }
}

pub fn on_pointer_leave() -> TooltipState {
    TooltipState::hidden()
}

/// Holds the current tooltip and suppresses redundant updates.
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    state: TooltipState,
}

impl Tooltip {
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Store `next` unless it equals the current state. Returns whether anything changed.
    pub fn apply(&mut self, next: TooltipState) -> bool {
        // Any hidden state is equivalent to any other.
        if !next.visible && !self.state.visible {
            return false;
        }
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }

    pub fn hide(&mut self) -> bool {
        self.apply(TooltipState::hidden())
    }
}
