//! Performance tiers, startup probe, and the FPS downgrade governor.
//!
//! A tier bundles every quality knob the scene builders read: render
//! resolution multiplier, shadows, shadow map size, particle density and
//! texture resolution. The tier is chosen once at startup from a coarse
//! device probe and can only ever move down, one level per sample window,
//! when measured frame rate falls below the thresholds. A downgrade takes
//! effect the next time a session is built, never mid-frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerfTier {
    Low,
    Medium,
    High,
}

/// Quality knobs derived from a tier. Read-only to all scene code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSettings {
    pub tier: PerfTier,
    pub pixel_ratio: f32,
    pub shadows: bool,
    pub shadow_map_size: u32,
    pub particles_scale: f32,
    pub texture_scale: f32,
}

impl TierSettings {
    pub const fn for_tier(tier: PerfTier) -> Self {
        match tier {
            PerfTier::Low => Self {
                tier: PerfTier::Low,
                pixel_ratio: 1.0,
                shadows: false,
                shadow_map_size: 256,
                particles_scale: 0.3,
                texture_scale: 0.25,
            },
            PerfTier::Medium => Self {
                tier: PerfTier::Medium,
                pixel_ratio: 1.5,
                shadows: true,
                shadow_map_size: 512,
                particles_scale: 0.6,
                texture_scale: 0.5,
            },
            PerfTier::High => Self {
                tier: PerfTier::High,
                pixel_ratio: 2.0,
                shadows: true,
                shadow_map_size: 1024,
                particles_scale: 1.0,
                texture_scale: 1.0,
            },
        }
    }
}

impl Default for TierSettings {
    fn default() -> Self {
        Self::for_tier(PerfTier::High)
    }
}

/// Hosts narrower than this start at Medium.
pub const NARROW_VIEWPORT: f32 = 768.0;

/// Coarse device facts available before any frame renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StartupProbe {
    pub viewport_width: f32,
    pub coarse_pointer: bool,
}

/// Pick the starting tier: touch devices and narrow hosts begin at Medium,
/// everything else at High. Low is only ever reached by downgrade.
pub fn initial_tier(probe: &StartupProbe) -> PerfTier {
    if probe.coarse_pointer || probe.viewport_width < NARROW_VIEWPORT {
        PerfTier::Medium
    } else {
        PerfTier::High
    }
}

/// One tier down, or None from Low.
pub fn step_down(tier: PerfTier) -> Option<PerfTier> {
    match tier {
        PerfTier::High => Some(PerfTier::Medium),
        PerfTier::Medium => Some(PerfTier::Low),
        PerfTier::Low => None,
    }
}

/// Seconds of frames accumulated per governor sample.
pub const SAMPLE_WINDOW_SECS: f32 = 3.0;
/// Below this the tier always steps down.
pub const CRITICAL_FPS: f32 = 20.0;
/// Below this a High tier steps to Medium.
pub const STRAINED_FPS: f32 = 40.0;

/// Rolling frame-rate sampler that recommends downgrades. Upgrades are
/// never recommended; a machine that struggled once keeps the lower tier.
#[derive(Debug, Clone)]
pub struct FpsGovernor {
    frames: u32,
    elapsed: f32,
    window: f32,
}

impl FpsGovernor {
    pub fn new() -> Self {
        Self { frames: 0, elapsed: 0.0, window: SAMPLE_WINDOW_SECS }
    }

    /// Record one frame of `dt` seconds; at each window boundary, returns
    /// the tier to move to, if any.
    pub fn note_frame(&mut self, dt: f32, current: PerfTier) -> Option<PerfTier> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < self.window {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        if fps < CRITICAL_FPS {
            step_down(current)
        } else if fps < STRAINED_FPS && current == PerfTier::High {
            Some(PerfTier::Medium)
        } else {
            None
        }
    }
}

impl Default for FpsGovernor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_window(gov: &mut FpsGovernor, fps: f32, tier: PerfTier) -> Option<PerfTier> {
        let dt = 1.0 / fps;
        let frames = (SAMPLE_WINDOW_SECS * fps).ceil() as u32 + 1;
        let mut out = None;
        for _ in 0..frames {
            if let Some(next) = gov.note_frame(dt, tier) {
                out = Some(next);
            }
        }
        out
    }

    #[test]
    fn test_tier_tables_match_expected_knobs() {
        let low = TierSettings::for_tier(PerfTier::Low);
        assert_eq!(low.pixel_ratio, 1.0);
        assert!(!low.shadows);
        assert_eq!(low.shadow_map_size, 256);
        assert_eq!(low.particles_scale, 0.3);
        assert_eq!(low.texture_scale, 0.25);

        let medium = TierSettings::for_tier(PerfTier::Medium);
        assert_eq!(medium.pixel_ratio, 1.5);
        assert!(medium.shadows);
        assert_eq!(medium.shadow_map_size, 512);

        let high = TierSettings::for_tier(PerfTier::High);
        assert_eq!(high.texture_scale, 1.0);
        assert_eq!(high.shadow_map_size, 1024);
    }

    #[test]
    fn test_initial_tier_from_probe() {
        let desktop = StartupProbe { viewport_width: 1920.0, coarse_pointer: false };
        assert_eq!(initial_tier(&desktop), PerfTier::High);
        let phone = StartupProbe { viewport_width: 390.0, coarse_pointer: true };
        assert_eq!(initial_tier(&phone), PerfTier::Medium);
        let narrow = StartupProbe { viewport_width: 700.0, coarse_pointer: false };
        assert_eq!(initial_tier(&narrow), PerfTier::Medium);
    }

    #[test]
    fn test_downgrade_is_one_step_at_a_time() {
        let mut gov = FpsGovernor::new();
        // Catastrophic frame rate from High still only drops one level.
        assert_eq!(run_window(&mut gov, 5.0, PerfTier::High), Some(PerfTier::Medium));
        assert_eq!(run_window(&mut gov, 5.0, PerfTier::Medium), Some(PerfTier::Low));
        assert_eq!(run_window(&mut gov, 5.0, PerfTier::Low), None);
    }

    #[test]
    fn test_strained_only_drops_from_high() {
        let mut gov = FpsGovernor::new();
        assert_eq!(run_window(&mut gov, 30.0, PerfTier::High), Some(PerfTier::Medium));
        assert_eq!(run_window(&mut gov, 30.0, PerfTier::Medium), None);
    }

    #[test]
    fn test_healthy_rate_never_upgrades() {
        let mut gov = FpsGovernor::new();
        assert_eq!(run_window(&mut gov, 60.0, PerfTier::Low), None);
        assert_eq!(run_window(&mut gov, 144.0, PerfTier::Medium), None);
    }

    #[test]
    fn test_no_recommendation_inside_window() {
        let mut gov = FpsGovernor::new();
        for _ in 0..10 {
            assert_eq!(gov.note_frame(0.016, PerfTier::High), None);
        }
    }
}
