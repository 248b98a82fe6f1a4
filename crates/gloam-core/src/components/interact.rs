//! Interaction components: clickable targets, door pivots, portals.

use hecs::Entity;

use super::common::Vec3;
use gloam_logic::content::{PanelKey, RoomKey};
use gloam_logic::door::DoorSwing;
use gloam_logic::trigger::TriggerVolume;

/// Hit-testable extent of a clickable, resolved against its Placement.
/// Wall quads face +Z before yaw; floor quads lie in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickShape {
    Wall { w: f32, h: f32 },
    Floor { w: f32, d: f32 },
}

/// What a click on a target does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAction {
    /// Toggle the referenced door; a double activation on an open door
    /// walks through instead.
    ToggleDoor(Entity),
    /// Open an overlay panel; a double activation enters the panel's room.
    OpenPanel(PanelKey),
    /// Bare floor: a double activation teleports the walker to the hit.
    Floor,
    /// Direct navigation target.
    Navigate(RoomKey),
    /// Focus the indexed content item (a gallery piece, a slide).
    SelectItem(usize),
}

/// A registered hit-testable target. Immutable after the build; the pick
/// pass intersects the flat list of these, never the full world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clickable {
    pub shape: ClickShape,
    pub action: TargetAction,
}

/// The swinging part of a doorway. Pivot placement is the hinge edge;
/// parts attached via [`PivotPart`] follow the swing angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorPivot {
    pub swing: DoorSwing,
    pub leads_to: Option<RoomKey>,
}

/// A prop carried by a door pivot: the leaf, its click plane. Local
/// offsets are in hinge space; the door system recomputes world placement
/// whenever the swing moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotPart {
    pub pivot: Entity,
    pub local_pos: Vec3,
    pub local_yaw: f32,
}

impl PivotPart {
    /// World placement of this part for the pivot's pose and swing angle.
    pub fn world_placement(&self, pivot: &super::Placement, angle: f32) -> super::Placement {
        let yaw = pivot.rot.y + angle;
        super::Placement {
            pos: pivot.pos + self.local_pos.rotated_y(yaw),
            rot: Vec3::new(pivot.rot.x, yaw + self.local_yaw, pivot.rot.z),
        }
    }
}

/// Proximity navigation volume owned by a door (or a landing). Armed only
/// while its condition holds; fires at most once per entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomPortal {
    pub room: RoomKey,
    pub volume: TriggerVolume,
}
