//! Named trigger volumes with edge-triggered enter/exit.
//!
//! Proximity navigation ("walk through the open door") must fire once per
//! entry, not every frame spent lingering inside the radius. Each volume
//! keeps an inside latch; disarming a volume (door closed, overlay up)
//! clears the latch so re-arming requires a fresh entry edge.

use serde::{Deserialize, Serialize};

/// What a sample observed at the volume boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEdge {
    None,
    Entered,
    Exited,
}

/// Boolean edge detector shared by volumes and the stair summit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeLatch {
    inside: bool,
}

impl EdgeLatch {
    pub fn sample(&mut self, hit: bool) -> TriggerEdge {
        match (self.inside, hit) {
            (false, true) => {
                self.inside = true;
                TriggerEdge::Entered
            }
            (true, false) => {
                self.inside = false;
                TriggerEdge::Exited
            }
            _ => TriggerEdge::None,
        }
    }

    pub fn reset(&mut self) {
        self.inside = false;
    }

    pub fn inside(&self) -> bool {
        self.inside
    }
}

/// Circular floor-plane trigger around a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerVolume {
    pub center_x: f32,
    pub center_z: f32,
    pub radius: f32,
    armed: bool,
    latch: EdgeLatch,
}

impl TriggerVolume {
    pub fn new(center_x: f32, center_z: f32, radius: f32) -> Self {
        Self { center_x, center_z, radius, armed: true, latch: EdgeLatch::default() }
    }

    /// Disarmed volumes never report edges; the latch clears so that the
    /// next arming needs a genuine entry.
    pub fn set_armed(&mut self, armed: bool) {
        if self.armed && !armed {
            self.latch.reset();
        }
        self.armed = armed;
    }

    pub fn armed(&self) -> bool {
        self.armed
    }

    /// Sample against a walk position; at most one Entered per entry.
    pub fn sample(&mut self, x: f32, z: f32) -> TriggerEdge {
        if !self.armed {
            return TriggerEdge::None;
        }
        let dx = x - self.center_x;
        let dz = z - self.center_z;
        let hit = dx * dx + dz * dz < self.radius * self.radius;
        self.latch.sample(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_fires_once_while_lingering() {
        let mut vol = TriggerVolume::new(0.0, 0.0, 1.5);
        assert_eq!(vol.sample(3.0, 0.0), TriggerEdge::None);
        assert_eq!(vol.sample(1.0, 0.0), TriggerEdge::Entered);
        for _ in 0..100 {
            assert_eq!(vol.sample(1.0, 0.1), TriggerEdge::None);
        }
    }

    #[test]
    fn test_exit_then_reenter_fires_again() {
        let mut vol = TriggerVolume::new(0.0, 0.0, 1.5);
        assert_eq!(vol.sample(0.0, 0.0), TriggerEdge::Entered);
        assert_eq!(vol.sample(5.0, 0.0), TriggerEdge::Exited);
        assert_eq!(vol.sample(0.5, 0.5), TriggerEdge::Entered);
    }

    #[test]
    fn test_disarmed_volume_is_silent() {
        let mut vol = TriggerVolume::new(0.0, 0.0, 1.5);
        vol.set_armed(false);
        assert_eq!(vol.sample(0.0, 0.0), TriggerEdge::None);
        assert_eq!(vol.sample(0.0, 0.0), TriggerEdge::None);
    }

    #[test]
    fn test_disarm_clears_latch_for_fresh_entry() {
        let mut vol = TriggerVolume::new(0.0, 0.0, 1.5);
        assert_eq!(vol.sample(0.0, 0.0), TriggerEdge::Entered);
        // Close the door while standing in the threshold, then reopen.
        vol.set_armed(false);
        vol.set_armed(true);
        assert_eq!(vol.sample(0.0, 0.0), TriggerEdge::Entered);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let mut vol = TriggerVolume::new(0.0, 0.0, 1.5);
        assert_eq!(vol.sample(1.5, 0.0), TriggerEdge::None);
        assert_eq!(vol.sample(1.499, 0.0), TriggerEdge::Entered);
    }
}
