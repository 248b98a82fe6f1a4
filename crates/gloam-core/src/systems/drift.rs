//! Drift system - advances particle clouds

use hecs::World;

use crate::components::DriftParticles;

/// Move every mote of every cloud: steady fall (or rise), a phase-offset
/// sideways wobble, and wrap-around at the column bounds so the cloud
/// density stays constant.
pub fn drift_system(world: &mut World, t: f32, dt: f32) {
    for (_, cloud) in world.query::<&mut DriftParticles>().iter() {
        let span = cloud.ceiling_y - cloud.floor_y;
        if span <= 0.0 {
            continue;
        }
        let fall = cloud.fall;
        let wobble_amp = cloud.wobble_amp;
        let wobble_freq = cloud.wobble_freq;
        let phase_step = cloud.phase_step;
        let floor = cloud.floor_y;
        let ceiling = cloud.ceiling_y;
        for (i, p) in cloud.positions.iter_mut().enumerate() {
            p.y -= fall * dt;
            p.x += (t * wobble_freq + i as f32 * phase_step).sin() * wobble_amp * dt;
            if p.y < floor {
                p.y += span;
            } else if p.y > ceiling {
                p.y -= span;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Vec3;
    use gloam_logic::color::Rgb8;

    fn cloud(fall: f32, ys: &[f32]) -> DriftParticles {
        DriftParticles {
            positions: ys.iter().map(|&y| Vec3::new(0.0, y, 0.0)).collect(),
            fall,
            wobble_amp: 0.0,
            wobble_freq: 0.0,
            phase_step: 0.0,
            floor_y: 0.0,
            ceiling_y: 6.0,
            color: Rgb8::new(200, 200, 200),
            size: 0.02,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_falling_mote_wraps_to_ceiling() {
        let mut world = World::new();
        let e = world.spawn((cloud(0.1, &[0.004]),));
        drift_system(&mut world, 0.0, 0.1);
        let c = world.get::<&DriftParticles>(e).unwrap();
        let y = c.positions[0].y;
        assert!(y > 5.9 && y <= 6.0);
    }

    #[test]
    fn test_rising_mote_wraps_to_floor() {
        let mut world = World::new();
        let e = world.spawn((cloud(-0.1, &[5.996]),));
        drift_system(&mut world, 0.0, 0.1);
        let c = world.get::<&DriftParticles>(e).unwrap();
        let y = c.positions[0].y;
        assert!(y >= 0.0 && y < 0.1);
    }

    #[test]
    fn test_motes_wobble_out_of_phase() {
        let mut world = World::new();
        let mut c = cloud(0.0, &[3.0, 3.0]);
        c.wobble_amp = 1.0;
        c.wobble_freq = 1.0;
        c.phase_step = 1.5;
        let e = world.spawn((c,));
        drift_system(&mut world, 1.0, 0.016);
        let c = world.get::<&DriftParticles>(e).unwrap();
        assert!((c.positions[0].x - c.positions[1].x).abs() > 1e-4);
    }

    #[test]
    fn test_empty_column_is_skipped() {
        let mut world = World::new();
        let mut c = cloud(0.1, &[1.0]);
        c.ceiling_y = 0.0;
        let e = world.spawn((c,));
        drift_system(&mut world, 0.0, 0.1);
        assert!((world.get::<&DriftParticles>(e).unwrap().positions[0].y - 1.0).abs() < 1e-6);
    }
}
