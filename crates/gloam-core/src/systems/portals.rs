//! Portal system - arms trigger volumes and fires room-entry events

use hecs::World;

use crate::components::{DoorPivot, RoomPortal};
use crate::events::{EventQueue, SessionEvent};
use gloam_logic::trigger::TriggerEdge;

/// Sample every portal against the walker position. A portal tied to a
/// door arms only while that door stands open; all portals disarm while
/// an overlay panel is up so a portal cannot fire under it.
pub fn portal_system(world: &mut World, x: f32, z: f32, panel_open: bool, events: &mut EventQueue) {
    for (_, (portal, door)) in world.query::<(&mut RoomPortal, Option<&DoorPivot>)>().iter() {
        let armed = !panel_open && door.map_or(true, |d| d.swing.is_open);
        portal.volume.set_armed(armed);
        if portal.volume.sample(x, z) == TriggerEdge::Entered {
            events.emit(SessionEvent::EnterRoom(portal.room));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Placement;
    use gloam_logic::content::RoomKey;
    use gloam_logic::door::DoorSwing;
    use gloam_logic::trigger::TriggerVolume;

    fn door_portal_world() -> (World, hecs::Entity) {
        let mut world = World::new();
        let swing = DoorSwing::exterior(2.0, 0.0);
        let pivot = world.spawn((
            Placement::at(0.4, 0.4, 0.0),
            DoorPivot { swing, leads_to: Some(RoomKey::Hall) },
            RoomPortal {
                room: RoomKey::Hall,
                volume: TriggerVolume::new(0.4, 0.0, 1.5),
            },
        ));
        (world, pivot)
    }

    #[test]
    fn test_closed_door_portal_never_fires() {
        let (mut world, _) = door_portal_world();
        let mut events = EventQueue::default();
        portal_system(&mut world, 0.4, 0.0, false, &mut events);
        assert!(events.drain().is_empty());
    }

    #[test]
    fn test_open_door_portal_fires_once_per_entry() {
        let (mut world, pivot) = door_portal_world();
        world
            .get::<&mut DoorPivot>(pivot)
            .unwrap()
            .swing
            .set_open(true);
        let mut events = EventQueue::default();

        // Approach from outside the radius, then step in and linger.
        portal_system(&mut world, 0.0, 8.0, false, &mut events);
        portal_system(&mut world, 0.0, 1.0, false, &mut events);
        portal_system(&mut world, 0.0, 0.9, false, &mut events);

        let fired = events.drain();
        assert_eq!(fired, vec![SessionEvent::EnterRoom(RoomKey::Hall)]);
    }

    #[test]
    fn test_panel_suppresses_portals() {
        let (mut world, pivot) = door_portal_world();
        world
            .get::<&mut DoorPivot>(pivot)
            .unwrap()
            .swing
            .set_open(true);
        let mut events = EventQueue::default();
        portal_system(&mut world, 0.0, 0.9, true, &mut events);
        assert!(events.drain().is_empty());

        // Dropping the panel re-arms; the latch restarts from outside.
        portal_system(&mut world, 0.0, 0.9, false, &mut events);
        assert_eq!(events.drain().len(), 1);
    }
}
