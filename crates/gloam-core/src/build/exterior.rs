//! The street-facing facade: brick under moonlight, the entrance door,
//! one haunted window. Nobody walks here; pointer parallax and scroll
//! glide carry the approach, and the doorway portal, armed once the
//! leaf stands open, hands off to the hall.

use std::f32::consts::PI;

use gloam_logic::color::Rgb8;
use gloam_logic::content::RoomKey;
use gloam_logic::door::DoorSwing;
use gloam_logic::trigger::TriggerVolume;
use rand::Rng;

use crate::components::{
    Bob, ClickShape, Clickable, DoorPivot, DriftParticles, Flicker, LightKind, LightRig,
    OpenGlow, Placement, PivotPart, PropShape, RoomPortal, Surface, TargetAction, Vec3,
};

use super::{BuildCtx, CameraSpawn, FogRig, RoomRig};

const DOOR_W: f32 = 3.2;
const DOOR_H: f32 = 6.0;
/// Door sits right of center; the window balances it on the left.
const DOOR_X: f32 = 2.0;
const WIN_W: f32 = 2.8;
const WIN_H: f32 = 4.0;
const WIN_X: f32 = -3.5;
const WIN_Y: f32 = 3.0;
/// The scroll glide must bring the camera this close to the door
/// center before the portal fires.
const ENTRY_RADIUS: f32 = 1.5;

const FRAME_PURPLE: Rgb8 = Rgb8::new(0x5a, 0x2a, 0x6a);

pub(super) fn build(ctx: &mut BuildCtx<'_>) -> RoomRig {
    // Facade and ground
    let (brick_map, brick_bump) = {
        let (m, b) = ctx.factory.brick();
        (ctx.texture(m), ctx.texture(b))
    };
    let wall = Surface {
        metalness: 0.1,
        ..Surface::textured(brick_map, 0.9)
            .with_bump(brick_bump)
            .tiled(6.0, 4.0)
    };
    ctx.spawn_prop(
        Placement::at(0.0, 5.0, -0.5),
        PropShape::Plane { w: 30.0, h: 20.0 },
        wall,
    );
    let ground_map = ctx.texture(ctx.factory.stone());
    ctx.spawn_prop(
        Placement {
            pos: Vec3::new(0.0, 0.0, 4.0),
            rot: Vec3::new(-PI * 0.5, 0.0, 0.0),
        },
        PropShape::Plane { w: 30.0, h: 10.0 },
        Surface::textured(ground_map, 0.95).tiled(6.0, 2.0),
    );

    spawn_entrance(ctx);
    spawn_window(ctx);
    spawn_boarded_window(ctx);
    spawn_fence(ctx);

    ctx.spawn_aimed_light(
        Placement::at(-6.0, 12.0, 10.0),
        LightRig {
            kind: LightKind::Directional,
            color: Rgb8::new(0x55, 0x66, 0xaa),
            intensity: 1.5,
            range: 0.0,
            shadows: true,
        },
        Vec3::ZERO,
    );

    // Night air
    let mut rng = rand::thread_rng();
    let count = ctx.particle_count(400);
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 20.0,
                rng.gen::<f32>() * 10.0,
                rng.gen::<f32>() * 15.0,
            )
        })
        .collect();
    ctx.world.spawn((DriftParticles {
        positions,
        fall: 0.6,
        wobble_amp: 0.3,
        wobble_freq: 0.5,
        phase_step: 1.0,
        floor_y: 0.0,
        ceiling_y: 10.0,
        color: Rgb8::new(0xaa, 0x88, 0xff),
        size: 0.05,
        opacity: 0.6,
    },));

    RoomRig {
        room: RoomKey::Exterior,
        // The walkway runs straight up to the door; the glide has to end
        // inside the entry volume around the door center.
        spawn: CameraSpawn {
            pos: Vec3::new(DOOR_X, 2.5, 12.0),
            look_at: Vec3::new(DOOR_X * 0.5, 3.0, 0.0),
        },
        eye_height: 2.5,
        bounds: None,
        stairs: None,
        stair_destination: None,
        screen: None,
        showcase: None,
        portrait: None,
        glide_z: Some((0.9, 12.0)),
        background: Rgb8::new(0x03, 0x01, 0x08),
        fog: Some(FogRig { color: Rgb8::new(0x03, 0x01, 0x08), density: 0.05 }),
        ambient: (Rgb8::new(0x11, 0x0a, 0x22), 1.5),
        fov_wide: 45.0,
        fov_narrow: 65.0,
        wasd: false,
        parallax: true,
    }
}

/// Door frame, swinging leaf, the darkness behind it and the glow that
/// bleeds out once it opens. The pivot owns the entry portal.
fn spawn_entrance(ctx: &mut BuildCtx<'_>) {
    let content = ctx.content;
    let trim = Surface::matte(FRAME_PURPLE, 0.6);
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(DOOR_X + sx * (DOOR_W * 0.5 + 0.15), DOOR_H * 0.5, 0.0),
            PropShape::Box { w: 0.3, h: DOOR_H + 0.3, d: 0.6 },
            trim,
        );
    }
    ctx.spawn_prop(
        Placement::at(DOOR_X, DOOR_H + 0.15, 0.0),
        PropShape::Box { w: DOOR_W + 0.6, h: 0.3, d: 0.6 },
        trim,
    );
    ctx.spawn_prop(
        Placement::at(DOOR_X, 0.2, 0.5),
        PropShape::Box { w: DOOR_W + 1.5, h: 0.4, d: 1.5 },
        trim,
    );

    // Hinge on the left edge; the portal arms once the leaf is open
    let hinge = Placement::at(DOOR_X - DOOR_W * 0.5, 0.4, 0.0);
    let pivot = ctx.world.spawn((
        hinge,
        DoorPivot {
            swing: DoorSwing::exterior(hinge.pos.x, hinge.pos.z),
            leads_to: Some(RoomKey::Hall),
        },
        RoomPortal {
            room: RoomKey::Hall,
            volume: TriggerVolume::new(DOOR_X, 0.0, ENTRY_RADIUS),
        },
    ));

    let leaf_map = ctx.texture(ctx.factory.front_door(
        &content.resident.title,
        "IS INSIDE THE HOUSE.",
        "COME ON IN.",
    ));
    let leaf_part = PivotPart {
        pivot,
        local_pos: Vec3::new(DOOR_W * 0.5, DOOR_H * 0.5 - 0.05, 0.0),
        local_yaw: 0.0,
    };
    let leaf_alloc = ctx.alloc();
    ctx.world.spawn((
        leaf_part.world_placement(&hinge, 0.0),
        PropShape::Box { w: DOOR_W, h: DOOR_H - 0.1, d: 0.2 },
        Surface {
            metalness: 0.1,
            ..Surface::textured(leaf_map, 0.7)
        },
        leaf_alloc,
        leaf_part,
        Clickable {
            shape: ClickShape::Wall { w: DOOR_W, h: DOOR_H - 0.1 },
            action: TargetAction::ToggleDoor(pivot),
        },
    ));
    let handle_part = PivotPart {
        pivot,
        local_pos: Vec3::new(DOOR_W - 0.4, DOOR_H * 0.5, 0.22),
        local_yaw: 0.0,
    };
    let handle_alloc = ctx.alloc();
    ctx.world.spawn((
        handle_part.world_placement(&hinge, 0.0),
        PropShape::Cylinder { radius_top: 0.04, radius_bottom: 0.04, height: 0.5 },
        Surface {
            metalness: 0.9,
            ..Surface::matte(Rgb8::new(0xdd, 0xdd, 0xff), 0.2)
        },
        handle_alloc,
        handle_part,
    ));

    // Pitch darkness behind the opening
    let mut void = Surface::matte(Rgb8::new(0x00, 0x00, 0x00), 1.0);
    void.unlit = true;
    ctx.spawn_prop(
        Placement::at(DOOR_X, DOOR_H * 0.5 + 0.4, -1.2),
        PropShape::Box { w: DOOR_W, h: DOOR_H, d: 2.0 },
        void,
    );
    let mut gleam = Surface::matte(Rgb8::new(0x44, 0x00, 0xaa), 1.0);
    gleam.unlit = true;
    gleam.opacity = 0.0;
    let open_glow = OpenGlow {
        pivot,
        lit_opacity: 0.9,
        lit_intensity: 15.0,
        open_color: Rgb8::new(0xcc, 0x11, 0x22),
        closed_color: Rgb8::new(0x44, 0x00, 0xaa),
        opacity_ease: 0.05,
        light_ease: 0.1,
    };
    let gleam_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(DOOR_X, DOOR_H * 0.5 + 0.4, -0.4),
        PropShape::Plane { w: DOOR_W, h: DOOR_H },
        gleam,
        gleam_alloc,
        open_glow,
    ));
    ctx.world.spawn((
        Placement::at(DOOR_X, 3.0, 1.0),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0x44, 0x00, 0xaa),
            intensity: 0.0,
            range: 15.0,
            shadows: false,
        },
        open_glow,
    ));

    spawn_lamp(ctx);
}

/// Porch lamp over the door, guttering.
fn spawn_lamp(ctx: &mut BuildCtx<'_>) {
    let bracket = Surface {
        metalness: 0.8,
        ..Surface::matte(Rgb8::new(0x22, 0x22, 0x22), 0.7)
    };
    ctx.spawn_prop(
        Placement::at(DOOR_X, 7.2, 0.3),
        PropShape::Box { w: 0.1, h: 0.4, d: 0.4 },
        bracket,
    );
    ctx.spawn_prop(
        Placement::at(DOOR_X, 7.35, 0.5),
        PropShape::Cone { radius: 0.3, height: 0.3 },
        bracket,
    );
    let mut bulb = Surface::matte(Rgb8::new(0xff, 0xaa, 0x33), 1.0);
    bulb.unlit = true;
    ctx.spawn_prop(
        Placement::at(DOOR_X, 7.1, 0.5),
        PropShape::Sphere { radius: 0.12 },
        bulb,
    );
    let lamp = ctx.spawn_light(
        Placement::at(DOOR_X, 7.0, 0.5),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xcc, 0x77),
            intensity: 16.0,
            range: 15.0,
            shadows: true,
        },
    );
    let _ = ctx.world.insert_one(
        lamp,
        Flicker { base: 8.0, amp: 0.8, freq: 15.0, slow_amp: 0.0, slow_freq: 0.0, jitter: 1.0 },
    );
}

/// The window: a dark cutout with the resident ghost behind the glass,
/// purple spill inside and out.
fn spawn_window(ctx: &mut BuildCtx<'_>) {
    let mut hole = Surface::matte(Rgb8::new(0x01, 0x00, 0x05), 1.0);
    hole.unlit = true;
    ctx.spawn_prop(
        Placement::at(WIN_X, WIN_Y, -0.48),
        PropShape::Plane { w: WIN_W, h: WIN_H },
        hole,
    );
    let ghost_map = ctx.texture(ctx.factory.ghost());
    let mut ghost = Surface::textured(ghost_map, 1.0);
    ghost.unlit = true;
    let ghost_entity = ctx.spawn_prop(
        Placement::at(WIN_X, WIN_Y, -0.45),
        PropShape::Plane { w: WIN_W, h: WIN_H },
        ghost,
    );
    let _ = ctx.world.insert_one(
        ghost_entity,
        Bob { base_y: WIN_Y, amp: 0.06, freq: 0.8, phase: 0.0 },
    );

    let trim = Surface::matte(FRAME_PURPLE, 0.6);
    ctx.spawn_prop(
        Placement::at(WIN_X, WIN_Y + WIN_H * 0.5 + 0.1, 0.0),
        PropShape::Box { w: WIN_W + 0.4, h: 0.2, d: 0.4 },
        trim,
    );
    // Sill stands a little proud
    ctx.spawn_prop(
        Placement::at(WIN_X, WIN_Y - WIN_H * 0.5 - 0.1, 0.1),
        PropShape::Box { w: WIN_W + 0.4, h: 0.2, d: 0.6 },
        trim,
    );
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(WIN_X + sx * (WIN_W * 0.5 + 0.1), WIN_Y, 0.0),
            PropShape::Box { w: 0.2, h: WIN_H, d: 0.4 },
            trim,
        );
    }
    let mut glass = Surface {
        metalness: 0.9,
        ..Surface::matte(Rgb8::new(0x05, 0x02, 0x11), 0.1)
    };
    glass.opacity = 0.6;
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(WIN_X + sx * WIN_W * 0.25, WIN_Y, 0.05),
            PropShape::Plane { w: WIN_W * 0.5 - 0.1, h: WIN_H - 0.2 },
            glass,
        );
    }
    ctx.spawn_prop(
        Placement::at(WIN_X, WIN_Y, 0.1),
        PropShape::Box { w: 0.15, h: WIN_H, d: 0.1 },
        trim,
    );
    ctx.spawn_prop(
        Placement::at(WIN_X, WIN_Y + 0.4, 0.1),
        PropShape::Box { w: WIN_W, h: 0.15, d: 0.1 },
        trim,
    );

    let win_glow = ctx.spawn_light(
        Placement::at(WIN_X, WIN_Y, 1.5),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0x88, 0x33, 0xff),
            intensity: 4.0,
            range: 10.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(
        win_glow,
        Flicker { base: 3.0, amp: 1.0, freq: 3.0, slow_amp: 0.5, slow_freq: 8.0, jitter: 0.0 },
    );
    let spill = ctx.spawn_aimed_light(
        Placement::at(WIN_X, WIN_Y, 0.5),
        LightRig {
            kind: LightKind::Spot { angle: PI / 6.0, penumbra: 0.8 },
            color: Rgb8::new(0x66, 0x22, 0xff),
            intensity: 6.0,
            range: 20.0,
            shadows: true,
        },
        Vec3::new(WIN_X + 2.0, 0.0, 4.0),
    );
    let _ = ctx.world.insert_one(spill, Flicker::steady(5.0, 1.5, 2.5));
}

/// A second window on the far right, nailed shut.
fn spawn_boarded_window(ctx: &mut BuildCtx<'_>) {
    let mut hole = Surface::matte(Rgb8::new(0x01, 0x00, 0x05), 1.0);
    hole.unlit = true;
    ctx.spawn_prop(
        Placement::at(7.5, 3.2, -0.48),
        PropShape::Plane { w: 2.2, h: 3.0 },
        hole,
    );
    let trim = Surface::matte(FRAME_PURPLE, 0.6);
    ctx.spawn_prop(
        Placement::at(7.5, 4.8, 0.0),
        PropShape::Box { w: 2.6, h: 0.2, d: 0.4 },
        trim,
    );
    ctx.spawn_prop(
        Placement::at(7.5, 1.6, 0.05),
        PropShape::Box { w: 2.6, h: 0.2, d: 0.5 },
        trim,
    );
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(7.5 + sx * 1.2, 3.2, 0.0),
            PropShape::Box { w: 0.2, h: 3.0, d: 0.4 },
            trim,
        );
    }
    let board_map = ctx.texture(ctx.factory.boards("#241430"));
    let board = Surface::textured(board_map, 0.95).tiled(1.0, 0.2);
    for (by, roll) in [(2.3f32, 0.12f32), (3.1, -0.08), (3.9, 0.15), (4.4, -0.1)] {
        ctx.spawn_prop(
            Placement {
                pos: Vec3::new(7.5, by, -0.1),
                rot: Vec3::new(0.0, 0.0, roll),
            },
            PropShape::Box { w: 2.8, h: 0.3, d: 0.06 },
            board,
        );
    }
}

/// Sagging yard fence across the approach, gated before the door.
fn spawn_fence(ctx: &mut BuildCtx<'_>) {
    let wood = Surface::matte(Rgb8::new(0x15, 0x0a, 0x1e), 0.95);
    let fz = 7.5;
    let posts = [-9.0f32, -7.5, -6.0, -4.5, -3.0, -1.5, 4.6, 6.1, 7.6, 9.0];
    for (i, px) in posts.into_iter().enumerate() {
        let lean = ((i * 7 % 5) as f32 - 2.0) * 0.02;
        ctx.spawn_prop(
            Placement {
                pos: Vec3::new(px, 0.58, fz),
                rot: Vec3::new(0.0, 0.0, lean),
            },
            PropShape::Box { w: 0.09, h: 1.15, d: 0.09 },
            wood,
        );
    }
    // Rails stop either side of the gate gap
    for ry in [0.55f32, 0.95] {
        ctx.spawn_prop(
            Placement::at(-4.8, ry, fz),
            PropShape::Box { w: 8.4, h: 0.07, d: 0.05 },
            wood,
        );
        ctx.spawn_prop(
            Placement::at(6.8, ry, fz),
            PropShape::Box { w: 4.4, h: 0.07, d: 0.05 },
            wood,
        );
    }
}
