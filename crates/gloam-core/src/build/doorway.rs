//! Interior doorway assembly.
//!
//! Every doorway is the same kit: a dark void box recessed behind the
//! opening, jambs, header and threshold around it, a pivot at the hinge
//! edge carrying the leaf and an invisible click plane, a sign board
//! above, and an accent point light spilling into the room. The pivot
//! entity owns the swing state and the proximity portal.

use hecs::Entity;

use gloam_logic::color::Rgb8;
use gloam_logic::content::RoomKey;
use gloam_logic::door::DoorSwing;
use gloam_logic::trigger::TriggerVolume;

use crate::components::{
    ClickShape, Clickable, DoorPivot, LightKind, LightRig, Placement, PivotPart, PropShape,
    RoomPortal, Surface, TargetAction, Vec3,
};
use crate::textures::FALLBACK_ACCENT;

use super::BuildCtx;

pub(crate) const DOOR_W: f32 = 2.0;
pub(crate) const DOOR_H: f32 = 3.5;
/// Frame depth standing proud of the wall face.
const FRAME_T: f32 = 0.2;
/// Width of each frame piece.
const FRAME_W: f32 = 0.25;
/// Depth of the dark void behind the opening.
const VOID_D: f32 = 0.5;
/// Proximity portal radius around the doorway center.
pub(crate) const PORTAL_RADIUS: f32 = 1.5;

const SIGN_W: f32 = DOOR_W + FRAME_W * 1.5;
const SIGN_H: f32 = DOOR_H * 0.28;

const TRIM: Rgb8 = Rgb8::new(0x6a, 0x40, 0x20);
const VOID_BLACK: Rgb8 = Rgb8::new(0x00, 0x00, 0x00);

/// Where a doorway sits and where it leads.
pub(crate) struct DoorwayPlan<'a> {
    pub label: &'a str,
    pub accent: &'a str,
    pub leads_to: RoomKey,
    /// Doorway center on the wall face, at floor level.
    pub center_x: f32,
    pub center_z: f32,
    /// Yaw turning a +z plane toward the room interior.
    pub face_yaw: f32,
    /// Yaw of the closed leaf direction, hinge to latch. Hinges sit on
    /// the smaller-z edge of side-wall doors and the smaller-x edge of
    /// back-wall doors.
    pub leaf_yaw: f32,
    pub open_angle: f32,
}

/// Spawn the full assembly; returns the pivot entity.
pub(crate) fn spawn(ctx: &mut BuildCtx<'_>, plan: &DoorwayPlan<'_>) -> Entity {
    let accent = Rgb8::parse_or(plan.accent, FALLBACK_ACCENT);
    let normal = Vec3::new(0.0, 0.0, 1.0).rotated_y(plan.face_yaw);
    let along = Vec3::new(1.0, 0.0, 0.0).rotated_y(plan.leaf_yaw);
    let center = Vec3::new(plan.center_x, 0.0, plan.center_z);
    let wall_rot = Vec3::new(0.0, plan.face_yaw, 0.0);

    // Cut-out illusion: an unlit black box recessed behind the wall face
    let mut void_surface = Surface::matte(VOID_BLACK, 1.0);
    void_surface.unlit = true;
    ctx.spawn_prop(
        Placement {
            pos: center + normal * (-VOID_D * 0.5 + 0.02) + Vec3::new(0.0, DOOR_H * 0.5, 0.0),
            rot: wall_rot,
        },
        PropShape::Box { w: DOOR_W, h: DOOR_H, d: VOID_D },
        void_surface,
    );

    // Jambs, header, threshold
    let trim = Surface::matte(TRIM, 0.78);
    for side in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement {
                pos: center
                    + along * (side * (DOOR_W * 0.5 + FRAME_W * 0.5))
                    + normal * (FRAME_T * 0.5)
                    + Vec3::new(0.0, DOOR_H * 0.5, 0.0),
                rot: wall_rot,
            },
            PropShape::Box { w: FRAME_W, h: DOOR_H + FRAME_W * 2.0, d: FRAME_T },
            trim,
        );
    }
    ctx.spawn_prop(
        Placement {
            pos: center + normal * (FRAME_T * 0.5) + Vec3::new(0.0, DOOR_H + FRAME_W * 0.5, 0.0),
            rot: wall_rot,
        },
        PropShape::Box { w: DOOR_W + FRAME_W * 2.0, h: FRAME_W, d: FRAME_T },
        trim,
    );
    ctx.spawn_prop(
        Placement {
            pos: center + normal * (FRAME_T * 0.5) + Vec3::new(0.0, 0.035, 0.0),
            rot: wall_rot,
        },
        PropShape::Box { w: DOOR_W, h: 0.07, d: FRAME_T },
        trim,
    );

    // Pivot at the hinge edge, nudged off the wall face. The entry volume
    // sits on the doorway center, not the hinge, so reach is symmetric
    // across the opening.
    let hinge = center - along * (DOOR_W * 0.5);
    let hinge_pose = Placement {
        pos: hinge + normal * 0.04 + Vec3::new(0.0, DOOR_H * 0.5, 0.0),
        rot: Vec3::new(0.0, plan.leaf_yaw, 0.0),
    };
    let pivot = ctx.world.spawn((
        hinge_pose,
        DoorPivot {
            swing: DoorSwing::interior(plan.open_angle, hinge.x, hinge.z),
            leads_to: Some(plan.leads_to),
        },
        RoomPortal {
            room: plan.leads_to,
            volume: TriggerVolume::new(plan.center_x, plan.center_z, PORTAL_RADIUS),
        },
    ));

    // Leaf rides the pivot
    let leaf_part = PivotPart {
        pivot,
        local_pos: Vec3::new(DOOR_W * 0.5, 0.0, 0.0),
        local_yaw: 0.0,
    };
    let leaf_tex = ctx.factory.door_leaf(plan.accent);
    let leaf_id = ctx.texture(leaf_tex);
    let leaf_alloc = ctx.alloc();
    ctx.world.spawn((
        leaf_part.world_placement(&hinge_pose, 0.0),
        PropShape::Box { w: DOOR_W - 0.08, h: DOOR_H - 0.06, d: 0.07 },
        Surface::textured(leaf_id, 0.82),
        leaf_alloc,
        leaf_part,
    ));

    // Invisible click plane riding just off the leaf face
    let click_part = PivotPart {
        pivot,
        local_pos: Vec3::new(DOOR_W * 0.5, 0.0, 0.09),
        local_yaw: 0.0,
    };
    let click_alloc = ctx.alloc();
    ctx.world.spawn((
        click_part.world_placement(&hinge_pose, 0.0),
        PropShape::Plane { w: DOOR_W, h: DOOR_H },
        Surface::invisible(),
        click_alloc,
        click_part,
        Clickable {
            shape: ClickShape::Wall { w: DOOR_W, h: DOOR_H },
            action: TargetAction::ToggleDoor(pivot),
        },
    ));

    // Sign board above the header; clicking it works the door too
    let sign_tex = ctx.factory.sign_board(plan.label, plan.accent);
    let sign_id = ctx.texture(sign_tex);
    let mut sign_surface = Surface::textured(sign_id, 0.9);
    sign_surface.unlit = true;
    let sign_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement {
            pos: center + normal * 0.12 + Vec3::new(0.0, DOOR_H + SIGN_H * 0.5 + 0.08, 0.0),
            rot: wall_rot,
        },
        PropShape::Plane { w: SIGN_W, h: SIGN_H },
        sign_surface,
        sign_alloc,
        Clickable {
            shape: ClickShape::Wall { w: SIGN_W, h: SIGN_H },
            action: TargetAction::ToggleDoor(pivot),
        },
    ));

    // Accent glow spilling out of the doorway
    ctx.spawn_light(
        Placement {
            pos: center + normal * 1.2 + Vec3::new(0.0, DOOR_H * 0.5, 0.0),
            rot: Vec3::ZERO,
        },
        LightRig { kind: LightKind::Point, color: accent, intensity: 20.0, range: 7.0, shadows: false },
    );

    pivot
}
