//! Flicker system - per-frame light intensity wobble

use hecs::World;
use rand::Rng;

use crate::components::{Flicker, LightRig};

/// Re-evaluate every flickering light against the session clock. Two
/// sine terms give the slow breathing, the jitter term the candle spit.
pub fn flicker_system(world: &mut World, t: f32) {
    let mut rng = rand::thread_rng();
    for (_, (flicker, light)) in world.query::<(&Flicker, &mut LightRig)>().iter() {
        let mut v = flicker.base + (t * flicker.freq).sin() * flicker.amp;
        if flicker.slow_amp != 0.0 {
            v += (t * flicker.slow_freq).sin() * flicker.slow_amp;
        }
        if flicker.jitter > 0.0 {
            v += rng.gen::<f32>() * flicker.jitter;
        }
        light.intensity = v.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LightKind, Placement};
    use gloam_logic::color::Rgb8;

    fn point(intensity: f32) -> LightRig {
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(255, 200, 120),
            intensity,
            range: 10.0,
            shadows: false,
        }
    }

    #[test]
    fn test_steady_flicker_is_deterministic() {
        let mut world = World::new();
        let light = world.spawn((Placement::at(0.0, 2.0, 0.0), point(0.0), Flicker::steady(20.0, 4.0, 2.0)));
        flicker_system(&mut world, 0.25);
        let expected = 20.0 + (0.25f32 * 2.0).sin() * 4.0;
        let got = world.get::<&LightRig>(light).unwrap().intensity;
        assert!((got - expected).abs() < 1e-5);
    }

    #[test]
    fn test_jitter_stays_within_band() {
        let mut world = World::new();
        let flicker = Flicker { base: 10.0, amp: 2.0, freq: 3.0, slow_amp: 1.0, slow_freq: 0.5, jitter: 5.0 };
        let light = world.spawn((point(0.0), flicker));
        for i in 0..50 {
            let t = i as f32 * 0.016;
            flicker_system(&mut world, t);
            let v = world.get::<&LightRig>(light).unwrap().intensity;
            assert!(v >= 10.0 - 3.0 && v <= 10.0 + 3.0 + 5.0);
        }
    }

    #[test]
    fn test_intensity_never_negative() {
        let mut world = World::new();
        let light = world.spawn((point(0.0), Flicker::steady(0.5, 4.0, 1.0)));
        for i in 0..200 {
            flicker_system(&mut world, i as f32 * 0.1);
            assert!(world.get::<&LightRig>(light).unwrap().intensity >= 0.0);
        }
    }
}
