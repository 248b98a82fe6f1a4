//! Animated atmosphere components: lights, flicker, sway, particles.

use serde::{Deserialize, Serialize};

use super::common::Vec3;
use gloam_logic::color::Rgb8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightKind {
    Point,
    /// Downward-facing spot, `angle` is the half cone in radians.
    Spot { angle: f32, penumbra: f32 },
    Directional,
}

/// A light source entity. `intensity` is the animated value; `base`
/// intensity lives on the Flicker component when one is attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightRig {
    pub kind: LightKind,
    pub color: Rgb8,
    pub intensity: f32,
    pub range: f32,
    pub shadows: bool,
}

/// Intensity flicker: two sine terms plus uniform jitter, evaluated
/// against the session clock every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flicker {
    pub base: f32,
    pub amp: f32,
    pub freq: f32,
    pub slow_amp: f32,
    pub slow_freq: f32,
    pub jitter: f32,
}

impl Flicker {
    pub fn steady(base: f32, amp: f32, freq: f32) -> Self {
        Self { base, amp, freq, slow_amp: 0.0, slow_freq: 0.0, jitter: 0.0 }
    }
}

/// World-space point a spot or directional light faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim(pub Vec3);

/// Couples a glow surface and its light to a door's open fraction. The
/// plane's opacity and the light's color/intensity ease toward the lit
/// state while the door stands open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenGlow {
    pub pivot: hecs::Entity,
    pub lit_opacity: f32,
    pub lit_intensity: f32,
    pub open_color: Rgb8,
    pub closed_color: Rgb8,
    pub opacity_ease: f32,
    pub light_ease: f32,
}

/// Gentle rotational sway for hung props (signs, portraits).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sway {
    pub amp_z: f32,
    pub freq_z: f32,
    pub amp_x: f32,
    pub freq_x: f32,
    pub phase: f32,
}

/// Vertical bob around a base height (flames, ghosts).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bob {
    pub base_y: f32,
    pub amp: f32,
    pub freq: f32,
    pub phase: f32,
}

/// One particle cloud: every mote falls (rises when `fall` is negative),
/// wobbles on x by a phase-offset sine, and wraps to the opposite bound
/// when it leaves the floor/ceiling column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftParticles {
    pub positions: Vec<Vec3>,
    pub fall: f32,
    pub wobble_amp: f32,
    pub wobble_freq: f32,
    pub phase_step: f32,
    pub floor_y: f32,
    pub ceiling_y: f32,
    pub color: Rgb8,
    pub size: f32,
    pub opacity: f32,
}
