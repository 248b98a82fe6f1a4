//! Door system - advances swings, carries hinged parts, eases glows

use hecs::World;

use crate::components::{DoorPivot, LightRig, OpenGlow, Placement, PivotPart, Surface};
use gloam_logic::ease;

/// Advance every door swing one frame and reposition the parts that
/// hang off each pivot. Glow surfaces and lights ease toward the state
/// their door is in.
pub fn door_system(world: &mut World) {
    // Step the swings and remember where each pivot ended up.
    let mut pivots = Vec::new();
    for (entity, (placement, door)) in world.query::<(&Placement, &mut DoorPivot)>().iter() {
        let angle = door.swing.step();
        pivots.push((entity, *placement, angle, door.swing.is_open));
    }

    if pivots.is_empty() {
        return;
    }

    // Carried parts follow their pivot's placement and current angle.
    let mut moves = Vec::new();
    for (entity, part) in world.query::<&PivotPart>().iter() {
        let (_, pivot_placement, angle, _) = match pivots.iter().find(|(p, ..)| *p == part.pivot) {
            Some(found) => *found,
            None => continue,
        };
        moves.push((entity, part.world_placement(&pivot_placement, angle)));
    }
    for (entity, placement) in moves {
        if let Ok(mut slot) = world.get::<&mut Placement>(entity) {
            *slot = placement;
        }
    }

    // Glow planes fade in while their door stands open.
    for (_, (glow, surface)) in world.query::<(&OpenGlow, &mut Surface)>().iter() {
        let open = pivots
            .iter()
            .find(|(p, ..)| *p == glow.pivot)
            .map_or(false, |(.., is_open)| *is_open);
        let target = if open { glow.lit_opacity } else { 0.0 };
        surface.opacity = ease::approach(surface.opacity, target, glow.opacity_ease);
    }

    // Glow lights swap color on the latch and ease intensity.
    for (_, (glow, light)) in world.query::<(&OpenGlow, &mut LightRig)>().iter() {
        let open = pivots
            .iter()
            .find(|(p, ..)| *p == glow.pivot)
            .map_or(false, |(.., is_open)| *is_open);
        light.color = if open { glow.open_color } else { glow.closed_color };
        let target = if open { glow.lit_intensity } else { 0.0 };
        light.intensity = ease::approach(light.intensity, target, glow.light_ease);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LightKind, Vec3};
    use gloam_logic::color::Rgb8;
    use gloam_logic::door::DoorSwing;

    fn pivot_world() -> (World, hecs::Entity, hecs::Entity) {
        let mut world = World::new();
        let swing = DoorSwing::interior(-0.52 * std::f32::consts::PI, 0.0, 0.0);
        let pivot = world.spawn((
            Placement::at(1.0, 0.0, -2.0),
            DoorPivot { swing, leads_to: None },
        ));
        let leaf = world.spawn((
            Placement::at(0.0, 0.0, 0.0),
            PivotPart { pivot, local_pos: Vec3::new(0.5, 1.0, 0.0), local_yaw: 0.0 },
        ));
        (world, pivot, leaf)
    }

    #[test]
    fn test_closed_door_leaves_leaf_at_hinge_offset() {
        let (mut world, _, leaf) = pivot_world();
        door_system(&mut world);
        let placement = *world.get::<&Placement>(leaf).unwrap();
        assert!((placement.pos.x - 1.5).abs() < 1e-5);
        assert!((placement.pos.z - -2.0).abs() < 1e-5);
    }

    #[test]
    fn test_open_door_swings_leaf_around_pivot() {
        let (mut world, pivot, leaf) = pivot_world();
        world
            .get::<&mut DoorPivot>(pivot)
            .unwrap()
            .swing
            .set_open(true);
        for _ in 0..600 {
            door_system(&mut world);
        }
        let door = world.get::<&DoorPivot>(pivot).unwrap();
        assert!(door.swing.settled());
        drop(door);
        let placement = *world.get::<&Placement>(leaf).unwrap();
        // Swung past the hinge plane rather than resting in the jamb.
        assert!((placement.pos.x - 1.5).abs() > 0.3);
    }

    #[test]
    fn test_glow_eases_toward_door_state() {
        let (mut world, pivot, _) = pivot_world();
        let glow = OpenGlow {
            pivot,
            lit_opacity: 0.9,
            lit_intensity: 15.0,
            open_color: Rgb8::new(0xcc, 0x11, 0x22),
            closed_color: Rgb8::new(0x44, 0x00, 0xaa),
            opacity_ease: 0.5,
            light_ease: 0.5,
        };
        let plane = world.spawn((
            glow,
            Surface {
                opacity: 0.0,
                ..Surface::matte(Rgb8::new(0x44, 0x00, 0xaa), 0.5)
            },
        ));
        let light = world.spawn((
            glow,
            LightRig {
                kind: LightKind::Point,
                color: Rgb8::new(0x44, 0x00, 0xaa),
                intensity: 0.0,
                range: 15.0,
                shadows: false,
            },
        ));

        door_system(&mut world);
        assert!(world.get::<&Surface>(plane).unwrap().opacity < 0.01);

        world
            .get::<&mut DoorPivot>(pivot)
            .unwrap()
            .swing
            .set_open(true);
        for _ in 0..200 {
            door_system(&mut world);
        }
        assert!(world.get::<&Surface>(plane).unwrap().opacity > 0.8);
        let rig = world.get::<&LightRig>(light).unwrap();
        assert_eq!(rig.color, Rgb8::new(0xcc, 0x11, 0x22));
        assert!(rig.intensity > 14.0);
    }
}
