//! Sway system - hung props rock, flames and ghosts bob

use hecs::World;

use crate::components::{Bob, Placement, Sway};

/// Rock every swaying prop around its rest rotation.
pub fn sway_system(world: &mut World, t: f32) {
    for (_, (sway, placement)) in world.query::<(&Sway, &mut Placement)>().iter() {
        placement.rot.z = (t * sway.freq_z + sway.phase).sin() * sway.amp_z;
        if sway.amp_x > 0.0 {
            placement.rot.x = (t * sway.freq_x + sway.phase).sin() * sway.amp_x;
        }
    }
}

/// Float every bobbing prop around its base height.
pub fn bob_system(world: &mut World, t: f32) {
    for (_, (bob, placement)) in world.query::<(&Bob, &mut Placement)>().iter() {
        placement.pos.y = bob.base_y + (t * bob.freq + bob.phase).sin() * bob.amp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_sway_oscillates_roll_only_by_default() {
        let mut world = World::new();
        let sway = Sway { amp_z: 0.1, freq_z: 1.0, amp_x: 0.0, freq_x: 0.0, phase: 0.0 };
        let sign = world.spawn((sway, Placement::at(0.0, 3.0, -2.0)));

        sway_system(&mut world, PI / 2.0);
        let placement = *world.get::<&Placement>(sign).unwrap();
        assert!((placement.rot.z - 0.1).abs() < 1e-5);
        assert_eq!(placement.rot.x, 0.0);

        sway_system(&mut world, 3.0 * PI / 2.0);
        let placement = *world.get::<&Placement>(sign).unwrap();
        assert!((placement.rot.z + 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_bob_floats_around_base_height() {
        let mut world = World::new();
        let bob = Bob { base_y: 3.0, amp: 0.06, freq: 0.8, phase: 0.0 };
        let ghost = world.spawn((bob, Placement::at(-3.5, 3.0, 0.2)));

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for i in 0..300 {
            bob_system(&mut world, i as f32 * 0.05);
            let y = world.get::<&Placement>(ghost).unwrap().pos.y;
            min = min.min(y);
            max = max.max(y);
        }
        assert!(min >= 3.0 - 0.06 - 1e-4 && max <= 3.0 + 0.06 + 1e-4);
        assert!(max - min > 0.1);
    }
}
