//! Stair region mapping from floor position to climb height.
//!
//! The hall staircase is not geometry the walker collides with; it is a
//! rectangular region along one wall where z-position maps linearly to a
//! camera climb offset. Reaching the top of the run counts as arriving at
//! the landing above.

use serde::{Deserialize, Serialize};

/// One straight stair run along a side wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairRun {
    /// Region begins where x exceeds this.
    pub side_x: f32,
    /// Region near edge (larger z).
    pub z_enter: f32,
    /// Region far edge (smaller z).
    pub z_exit: f32,
    /// Climb begins once z passes this.
    pub z_start: f32,
    /// Climb completes at this z.
    pub z_top: f32,
    /// Total height gained over the run.
    pub rise: f32,
    /// Progress beyond this counts as the summit.
    pub summit: f32,
}

impl StairRun {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x > self.side_x && z < self.z_enter && z > self.z_exit
    }

    /// Climb fraction in [0, 1] for a z inside the run.
    pub fn progress(&self, z: f32) -> f32 {
        if z >= self.z_start {
            return 0.0;
        }
        ((self.z_start - z) / (self.z_start - self.z_top)).clamp(0.0, 1.0)
    }

    /// Camera height offset for a walk position; zero outside the region.
    pub fn climb_offset(&self, x: f32, z: f32) -> f32 {
        if self.contains(x, z) {
            self.progress(z) * self.rise
        } else {
            0.0
        }
    }

    /// True at the top of the run, where the landing takes over.
    pub fn at_summit(&self, x: f32, z: f32) -> bool {
        self.contains(x, z) && self.progress(z) > self.summit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall_stairs() -> StairRun {
        StairRun {
            side_x: 5.0 - 2.8,
            z_enter: 2.0,
            z_exit: -5.8,
            z_start: 1.8,
            z_top: -5.4,
            rise: 3.15,
            summit: 0.96,
        }
    }

    #[test]
    fn test_outside_region_has_no_climb() {
        let run = hall_stairs();
        assert_eq!(run.climb_offset(0.0, 0.0), 0.0);
        assert_eq!(run.climb_offset(4.0, 3.0), 0.0);
    }

    #[test]
    fn test_progress_maps_linearly() {
        let run = hall_stairs();
        assert_eq!(run.progress(1.8), 0.0);
        assert!((run.progress(-5.4) - 1.0).abs() < 1e-6);
        let mid = run.progress((1.8 + -5.4) / 2.0);
        assert!((mid - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_climb_offset_scales_rise() {
        let run = hall_stairs();
        let offset = run.climb_offset(4.0, -5.4);
        assert!((offset - 3.15).abs() < 1e-4);
    }

    #[test]
    fn test_summit_requires_near_full_progress() {
        let run = hall_stairs();
        assert!(!run.at_summit(4.0, -4.0));
        assert!(run.at_summit(4.0, -5.35));
    }

    #[test]
    fn test_progress_clamped_past_top() {
        let run = hall_stairs();
        assert!((run.progress(-40.0) - 1.0).abs() < 1e-6);
    }
}
