//! Double-activation windows and drag suppression.
//!
//! A double activation is two hits on the *same* target inside the window;
//! two quick clicks on different targets must not count for either one.
//! Timestamps come from the caller in milliseconds so the rules stay pure.

use serde::{Deserialize, Serialize};

/// Window for interior double-clicks.
pub const DOUBLE_WINDOW_MS: u64 = 380;
/// The exterior entrance uses a slightly tighter window.
pub const EXTERIOR_WINDOW_MS: u64 = 350;
/// Clicks arriving this soon after a drag are treated as drag residue.
pub const DRAG_SUPPRESS_MS: u64 = 130;
/// Pointer travel below this many pixels is not a drag.
pub const DRAG_SLOP_PX: f32 = 8.0;

/// Tracks successive activations and decides single vs. double.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TapTracker {
    window_ms: u64,
    last_tap_ms: Option<u64>,
    last_target: Option<u64>,
}

impl TapTracker {
    pub fn new(window_ms: u64) -> Self {
        Self { window_ms, last_tap_ms: None, last_target: None }
    }

    /// Record a hit on `target` at `now_ms`; true when this completes a
    /// double activation. Identity is part of the rule: a second hit inside
    /// the window on a different target restarts the sequence instead.
    pub fn register(&mut self, target: u64, now_ms: u64) -> bool {
        let is_double = match (self.last_tap_ms, self.last_target) {
            (Some(then), Some(prev)) => {
                now_ms.saturating_sub(then) < self.window_ms && prev == target
            }
            _ => false,
        };
        self.last_tap_ms = Some(now_ms);
        self.last_target = Some(target);
        is_double
    }
}

/// Remembers the last real drag so the click that ends it can be dropped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DragGate {
    last_drag_ms: Option<u64>,
}

impl DragGate {
    /// Call whenever pointer travel exceeds [`DRAG_SLOP_PX`].
    pub fn note_drag(&mut self, now_ms: u64) {
        self.last_drag_ms = Some(now_ms);
    }

    /// False while still inside the suppression window after a drag.
    pub fn allows_click(&self, now_ms: u64) -> bool {
        match self.last_drag_ms {
            Some(then) => now_ms.saturating_sub(then) >= DRAG_SUPPRESS_MS,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_target_in_window_is_double() {
        let mut taps = TapTracker::new(DOUBLE_WINDOW_MS);
        assert!(!taps.register(7, 1000));
        assert!(taps.register(7, 1300));
    }

    #[test]
    fn test_same_target_after_window_is_single() {
        let mut taps = TapTracker::new(DOUBLE_WINDOW_MS);
        assert!(!taps.register(7, 1000));
        assert!(!taps.register(7, 1380));
        assert!(!taps.register(7, 2000));
    }

    #[test]
    fn test_different_targets_never_double() {
        let mut taps = TapTracker::new(DOUBLE_WINDOW_MS);
        assert!(!taps.register(1, 1000));
        // Fast click on a second target: no double on either.
        assert!(!taps.register(2, 1100));
        // A third fast click back on the second target does pair up.
        assert!(taps.register(2, 1200));
    }

    #[test]
    fn test_sequence_restarts_on_identity_change() {
        let mut taps = TapTracker::new(EXTERIOR_WINDOW_MS);
        assert!(!taps.register(1, 0));
        assert!(!taps.register(2, 100));
        assert!(!taps.register(1, 200 + EXTERIOR_WINDOW_MS));
    }

    #[test]
    fn test_drag_suppresses_trailing_click() {
        let mut gate = DragGate::default();
        assert!(gate.allows_click(500));
        gate.note_drag(1000);
        assert!(!gate.allows_click(1050));
        assert!(!gate.allows_click(1129));
        assert!(gate.allows_click(1130));
    }
}
