//! Held-key locomotion, scroll glide, and walk bounds clamping.
//!
//! Movement is polled, not event-driven: the engine asks every frame which
//! keys are held and advances the walk target accordingly. Direction is
//! camera-relative through the look yaw, the wheel adds a decaying glide
//! along z, and the result is clamped to the room's axis-aligned bounds.
//! That clamp is the entire collision model.

use serde::{Deserialize, Serialize};

/// Forward walk distance per frame.
pub const WALK_SPEED: f32 = 0.1;
/// Strafing moves at three quarters of walk speed.
pub const STRAFE_FACTOR: f32 = 0.75;
/// Look-x to yaw conversion for camera-relative movement.
pub const YAW_GAIN: f32 = 0.11;

/// Wheel delta to glide velocity.
pub const SCROLL_GAIN: f32 = 0.013;
/// Fraction of glide velocity applied to z each frame.
pub const GLIDE_ADVANCE: f32 = 0.9;
/// Glide velocity decay per frame.
pub const GLIDE_DECAY: f32 = 0.8;
/// Velocities below this are zeroed.
pub const GLIDE_REST: f32 = 0.001;

/// Camera pose smoothing fraction per frame (interior rooms).
pub const CAMERA_SMOOTHING: f32 = 0.08;
/// Mouse NDC to look-x gain (negative: look against pointer travel).
pub const LOOK_X_GAIN: f32 = -5.8;
/// Mouse NDC to look-y gain.
pub const LOOK_Y_GAIN: f32 = -1.4;
/// Touch-drag look gains, applied to pointer travel as a fraction of the
/// host surface, then clamped.
pub const DRAG_X_GAIN: f32 = 12.0;
pub const DRAG_Y_GAIN: f32 = 4.5;
pub const DRAG_X_CLAMP: f32 = 6.5;
pub const DRAG_Y_CLAMP: f32 = 2.5;

/// Pointer NDC to camera offset in facade parallax rooms.
pub const PARALLAX_GAIN: f32 = 1.5;
/// Parallax camera smoothing fraction per frame.
pub const PARALLAX_EASE: f32 = 0.05;

/// Look-x fraction folded into the camera x target.
pub const LOOK_SIDE_BIAS: f32 = 0.28;
/// Look-y fraction folded into the camera height target.
pub const LOOK_HEIGHT_BIAS: f32 = 0.14;
/// Look-x to look-point lateral offset.
pub const LOOK_POINT_X_GAIN: f32 = -1.5;
/// Look-y to look-point height offset.
pub const LOOK_POINT_Y_GAIN: f32 = 0.26;
/// The walk look point sits this far ahead on z.
pub const LOOK_AHEAD_Z: f32 = -6.0;
/// Fraction of the climb offset carried into the look height.
pub const CLIMB_LOOK_FACTOR: f32 = 0.8;

/// Which locomotion keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Walkable extent of a room, given as the wall coordinates. The clamp
/// keeps the camera a comfortable margin off each wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkBounds {
    pub left: f32,
    pub right: f32,
    pub far: f32,
    pub near: f32,
}

impl WalkBounds {
    pub const SIDE_MARGIN: f32 = 0.6;
    pub const FAR_MARGIN: f32 = 1.3;
    pub const NEAR_MARGIN: f32 = 0.5;

    pub const fn new(left: f32, right: f32, far: f32, near: f32) -> Self {
        Self { left, right, far, near }
    }

    /// Clamp a walk position inside the margins.
    pub fn clamp(&self, x: f32, z: f32) -> (f32, f32) {
        (
            x.clamp(self.left + Self::SIDE_MARGIN, self.right - Self::SIDE_MARGIN),
            z.clamp(self.far + Self::FAR_MARGIN, self.near - Self::NEAR_MARGIN),
        )
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        let (cx, cz) = self.clamp(x, z);
        cx == x && cz == z
    }
}

/// Advance the walk target by one frame of held-key movement. Forward is
/// whichever way the look yaw points; strafing is perpendicular and slower.
pub fn walk_step(x: f32, z: f32, keys: HeldKeys, look_x: f32) -> (f32, f32) {
    let yaw = look_x * YAW_GAIN;
    let (sin, cos) = yaw.sin_cos();
    let mut nx = x;
    let mut nz = z;
    if keys.forward {
        nx -= sin * WALK_SPEED;
        nz -= cos * WALK_SPEED;
    }
    if keys.back {
        nx += sin * WALK_SPEED;
        nz += cos * WALK_SPEED;
    }
    if keys.left {
        nx -= cos * WALK_SPEED * STRAFE_FACTOR;
        nz += sin * WALK_SPEED * STRAFE_FACTOR;
    }
    if keys.right {
        nx += cos * WALK_SPEED * STRAFE_FACTOR;
        nz -= sin * WALK_SPEED * STRAFE_FACTOR;
    }
    (nx, nz)
}

/// Decaying scroll momentum along z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Glide {
    pub velocity: f32,
}

impl Glide {
    /// Feed a wheel delta into the glide.
    pub fn push(&mut self, wheel_delta: f32) {
        self.velocity += wheel_delta * SCROLL_GAIN;
    }

    /// One frame of glide; returns how far z moves forward (subtract from z).
    pub fn step(&mut self) -> f32 {
        if self.velocity.abs() <= GLIDE_REST {
            return 0.0;
        }
        let advance = self.velocity * GLIDE_ADVANCE;
        self.velocity *= GLIDE_DECAY;
        if self.velocity.abs() < GLIDE_REST {
            self.velocity = 0.0;
        }
        advance
    }

    pub fn at_rest(&self) -> bool {
        self.velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_forward_with_centered_look_walks_negative_z() {
        let keys = HeldKeys { forward: true, ..Default::default() };
        let (x, z) = walk_step(0.0, 0.0, keys, 0.0);
        assert!(x.abs() < 1e-6);
        assert!((z + WALK_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_strafe_is_slower_and_perpendicular() {
        let keys = HeldKeys { right: true, ..Default::default() };
        let (x, z) = walk_step(0.0, 0.0, keys, 0.0);
        assert!((x - WALK_SPEED * STRAFE_FACTOR).abs() < 1e-6);
        assert!(z.abs() < 1e-6);
    }

    #[test]
    fn test_movement_follows_yaw() {
        let keys = HeldKeys { forward: true, ..Default::default() };
        // Looking hard left bends the walk direction off pure -z.
        let (x, _z) = walk_step(0.0, 0.0, keys, 3.0);
        assert!(x.abs() > 1e-3);
    }

    #[test]
    fn test_clamp_holds_under_random_deltas() {
        let bounds = WalkBounds::new(-5.0, 5.0, -20.0, 8.0);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x6710);
        let (mut x, mut z) = (0.0f32, 0.0f32);
        for _ in 0..2000 {
            x += rng.gen_range(-50.0..50.0);
            z += rng.gen_range(-50.0..50.0);
            let (cx, cz) = bounds.clamp(x, z);
            assert!(cx >= bounds.left + WalkBounds::SIDE_MARGIN);
            assert!(cx <= bounds.right - WalkBounds::SIDE_MARGIN);
            assert!(cz >= bounds.far + WalkBounds::FAR_MARGIN);
            assert!(cz <= bounds.near - WalkBounds::NEAR_MARGIN);
            x = cx;
            z = cz;
        }
    }

    #[test]
    fn test_glide_decays_to_rest() {
        let mut glide = Glide::default();
        glide.push(120.0);
        assert!(!glide.at_rest());
        let mut total = 0.0;
        for _ in 0..200 {
            total += glide.step();
        }
        assert!(glide.at_rest());
        assert!(total > 0.0);
    }

    #[test]
    fn test_glide_applies_wheel_gain() {
        let mut glide = Glide::default();
        glide.push(100.0);
        assert!((glide.velocity - 1.3).abs() < 1e-6);
        let advance = glide.step();
        assert!((advance - 1.3 * GLIDE_ADVANCE).abs() < 1e-6);
    }
}
