//! The entrance hall: a long walkable shell with three swinging
//! doorways, the staircase up to the gallery, the resident's portrait,
//! and the hanging sign.

use std::f32::consts::PI;

use gloam_logic::color::Rgb8;
use gloam_logic::content::{PanelKey, RoomKey};
use gloam_logic::door::{BACK_WALL_OPEN, LEFT_WALL_OPEN, RIGHT_WALL_OPEN};
use gloam_logic::stairs::StairRun;
use gloam_logic::walk::WalkBounds;
use hecs::Entity;
use rand::Rng;

use crate::components::{
    Bob, ClickShape, Clickable, DriftParticles, Flicker, LightKind, LightRig, Placement,
    PropShape, Surface, Sway, TargetAction, Vec3,
};

use super::doorway::{self, DoorwayPlan};
use super::{BuildCtx, CameraSpawn, FogRig, RoomRig};

// Room extents.
const RW: f32 = 10.0;
const RH: f32 = 5.0;
const Z_NEAR: f32 = 8.0;
const Z_FAR: f32 = -20.0;
const LEFT_X: f32 = -RW * 0.5;
const RIGHT_X: f32 = RW * 0.5;
const ROOM_LEN: f32 = Z_NEAR - Z_FAR;
const MID_Z: f32 = (Z_NEAR + Z_FAR) * 0.5;

// Shelf under the portrait.
const SHELF_Z: f32 = 3.5;
const SHELF_Y: f32 = 1.85;
const SHELF_D: f32 = 0.48;
const SHELF_W: f32 = 2.4;
const SHELF_MID_X: f32 = LEFT_X + SHELF_D * 0.5;
const SHELF_TOP_Y: f32 = SHELF_Y + 0.05;

// Portrait canvas.
const PORTRAIT_W: f32 = 0.82;
const PORTRAIT_H: f32 = 1.02;
const PORTRAIT_D: f32 = 0.08;

// Hanging sign over the stair foot.
const HANG_X: f32 = 3.5;
const HANG_Z: f32 = 1.4;
const HANG_Y: f32 = RH - 1.5;
const HANG_W: f32 = 1.9;
const HANG_H: f32 = 0.75;

// Straight stair run along the right wall.
const STEPS: usize = 11;
const STEP_RISE: f32 = 0.3;
const STEP_RUN: f32 = 0.66;
const STAIR_W: f32 = 3.0;
const STAIR_Z: f32 = 1.8;

pub(super) fn hall(ctx: &mut BuildCtx<'_>) -> RoomRig {
    let content = ctx.content;

    // Shared sheet textures
    let wall_map = ctx.texture(ctx.factory.wallpaper());
    let wall_bump = ctx.texture(ctx.factory.rough_bump(128, 255));
    let floor_map = ctx.texture(ctx.factory.planks());
    let floor_bump = ctx.texture(ctx.factory.rough_bump(90, 200));
    let trim_map = ctx.texture(ctx.factory.tread());
    let shelf_map = ctx.texture(ctx.factory.boards("#6a4018"));

    let wall_surface = Surface::textured(wall_map, 0.95)
        .with_bump(wall_bump)
        .tiled(3.0, 2.0)
        .tinted(Rgb8::new(0x99, 0x88, 0x99));
    let trim_surface = Surface::textured(trim_map, 0.78)
        .tiled(10.0, 1.0)
        .tinted(Rgb8::new(0x6a, 0x40, 0x20));
    let shelf_surface = Surface::textured(shelf_map, 0.85).tinted(Rgb8::new(0x6a, 0x40, 0x18));
    let rail = Surface::matte(Rgb8::new(0x1a, 0x0e, 0x04), 0.75);
    let iron = Surface {
        metalness: 0.9,
        ..Surface::matte(Rgb8::new(0x0c, 0x0c, 0x18), 0.3)
    };

    // Floor, ceiling, walls
    let mut floor_surface = Surface::textured(floor_map, 0.9).with_bump(floor_bump).tiled(2.5, 7.0);
    floor_surface.metalness = 0.03;
    let floor_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement { pos: Vec3::new(0.0, 0.0, MID_Z), rot: Vec3::new(-PI * 0.5, 0.0, 0.0) },
        PropShape::Plane { w: RW, h: ROOM_LEN },
        floor_surface,
        floor_alloc,
        Clickable { shape: ClickShape::Floor { w: RW, d: ROOM_LEN }, action: TargetAction::Floor },
    ));
    ctx.spawn_prop(
        Placement { pos: Vec3::new(0.0, RH, MID_Z), rot: Vec3::new(PI * 0.5, 0.0, 0.0) },
        PropShape::Plane { w: RW, h: ROOM_LEN },
        Surface::matte(Rgb8::new(0x03, 0x01, 0x08), 0.99),
    );
    ctx.spawn_prop(
        Placement::at(0.0, RH * 0.5, Z_FAR),
        PropShape::Plane { w: RW, h: RH },
        wall_surface,
    );
    ctx.spawn_prop(
        Placement::at(LEFT_X, RH * 0.5, MID_Z).with_yaw(PI * 0.5),
        PropShape::Plane { w: ROOM_LEN, h: RH },
        wall_surface,
    );
    ctx.spawn_prop(
        Placement::at(RIGHT_X, RH * 0.5, MID_Z).with_yaw(-PI * 0.5),
        PropShape::Plane { w: ROOM_LEN, h: RH },
        wall_surface,
    );

    // Baseboards, crown, chair rail
    for (len, x, y, z, yaw, h, d) in [
        (ROOM_LEN, LEFT_X + 0.06, 0.11, MID_Z, PI * 0.5, 0.22, 0.12),
        (ROOM_LEN, RIGHT_X - 0.06, 0.11, MID_Z, -PI * 0.5, 0.22, 0.12),
        (RW, 0.0, 0.11, Z_FAR + 0.06, 0.0, 0.22, 0.12),
        (ROOM_LEN, LEFT_X + 0.07, RH - 0.1, MID_Z, PI * 0.5, 0.2, 0.14),
        (ROOM_LEN, RIGHT_X - 0.07, RH - 0.1, MID_Z, -PI * 0.5, 0.2, 0.14),
        (RW, 0.0, RH - 0.1, Z_FAR + 0.07, 0.0, 0.2, 0.14),
        (ROOM_LEN, LEFT_X + 0.045, 1.1, MID_Z, PI * 0.5, 0.1, 0.09),
        (ROOM_LEN, RIGHT_X - 0.045, 1.1, MID_Z, -PI * 0.5, 0.1, 0.09),
    ] {
        ctx.spawn_prop(
            Placement::at(x, y, z).with_yaw(yaw),
            PropShape::Box { w: len, h, d },
            trim_surface,
        );
    }

    // Three doorways
    doorway::spawn(
        ctx,
        &DoorwayPlan {
            label: &content.archive_panel.title,
            accent: &content.archive_panel.accent,
            leads_to: RoomKey::Archive,
            center_x: LEFT_X,
            center_z: -2.5,
            face_yaw: PI * 0.5,
            leaf_yaw: -PI * 0.5,
            open_angle: LEFT_WALL_OPEN,
        },
    );
    doorway::spawn(
        ctx,
        &DoorwayPlan {
            label: &content.vault_panel.title,
            accent: &content.vault_panel.accent,
            leads_to: RoomKey::Vault,
            center_x: RIGHT_X,
            center_z: 3.5,
            face_yaw: -PI * 0.5,
            leaf_yaw: -PI * 0.5,
            open_angle: RIGHT_WALL_OPEN,
        },
    );
    doorway::spawn(
        ctx,
        &DoorwayPlan {
            label: &content.library_panel.title,
            accent: &content.library_panel.accent,
            leads_to: RoomKey::Library,
            center_x: 0.0,
            center_z: Z_FAR,
            face_yaw: 0.0,
            leaf_yaw: 0.0,
            open_angle: BACK_WALL_OPEN,
        },
    );

    // Shelf and portrait on the left wall
    ctx.spawn_prop(
        Placement::at(SHELF_MID_X, SHELF_Y, SHELF_Z),
        PropShape::Box { w: SHELF_D, h: 0.1, d: SHELF_W },
        shelf_surface,
    );
    ctx.spawn_prop(
        Placement::at(LEFT_X + 0.025, SHELF_Y * 0.5, SHELF_Z),
        PropShape::Box { w: 0.05, h: SHELF_Y, d: SHELF_W + 0.12 },
        Surface::matte(Rgb8::new(0x08, 0x06, 0x14), 0.92),
    );
    for dz in [-(SHELF_W * 0.5 - 0.2), SHELF_W * 0.5 - 0.2] {
        ctx.spawn_prop(
            Placement::at(SHELF_MID_X, SHELF_Y - 0.17, SHELF_Z + dz),
            PropShape::Box { w: SHELF_D - 0.05, h: 0.28, d: 0.07 },
            shelf_surface,
        );
    }

    let portrait = spawn_portrait(ctx);

    // Candle and vase on the shelf top
    let candle_z = SHELF_Z + SHELF_W * 0.5 - 0.3;
    let vase_z = SHELF_Z - SHELF_W * 0.5 + 0.32;
    ctx.spawn_prop(
        Placement::at(SHELF_MID_X, SHELF_TOP_Y + 0.19, candle_z),
        PropShape::Cylinder { radius_top: 0.024, radius_bottom: 0.03, height: 0.38 },
        Surface::matte(Rgb8::new(0xc8, 0xb0, 0x80), 0.92),
    );
    let mut flame_surface = Surface::matte(Rgb8::new(0xff, 0x88, 0x00), 1.0);
    flame_surface.unlit = true;
    let flame_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(SHELF_MID_X, SHELF_TOP_Y + 0.4, candle_z),
        PropShape::Sphere { radius: 0.02 },
        flame_surface,
        flame_alloc,
        Bob { base_y: SHELF_TOP_Y + 0.4, amp: 0.014, freq: 9.8, phase: 0.0 },
    ));
    let vase = Surface {
        metalness: 0.1,
        ..Surface::matte(Rgb8::new(0x0e, 0x0a, 0x08), 0.88)
    };
    ctx.spawn_prop(
        Placement::at(SHELF_MID_X, SHELF_TOP_Y + 0.12, vase_z),
        PropShape::Cylinder { radius_top: 0.07, radius_bottom: 0.09, height: 0.24 },
        vase,
    );
    ctx.spawn_prop(
        Placement::at(SHELF_MID_X, SHELF_TOP_Y + 0.35, vase_z),
        PropShape::Cylinder { radius_top: 0.038, radius_bottom: 0.07, height: 0.18 },
        vase,
    );

    // Hanging sign above the stair foot
    spawn_hanging_sign(ctx, shelf_surface, iron);

    // Staircase along the right wall
    let tread_map = ctx.texture(ctx.factory.tread());
    let tread_surface = Surface::textured(tread_map, 0.92).tinted(Rgb8::new(0x70, 0x48, 0x28));
    let stair_x = RIGHT_X - STAIR_W * 0.5;
    let baluster_x = RIGHT_X - STAIR_W + 0.2;
    for i in 0..STEPS {
        let sz = STAIR_Z - i as f32 * STEP_RUN;
        let sy = i as f32 * STEP_RISE;
        let tread_alloc = ctx.alloc();
        ctx.world.spawn((
            Placement::at(stair_x, sy + 0.045, sz - STEP_RUN * 0.5),
            PropShape::Box { w: STAIR_W, h: 0.09, d: STEP_RUN + 0.04 },
            tread_surface,
            tread_alloc,
            Clickable {
                shape: ClickShape::Floor { w: STAIR_W, d: STEP_RUN + 0.04 },
                action: TargetAction::Floor,
            },
        ));
        ctx.spawn_prop(
            Placement::at(stair_x, sy + STEP_RISE * 0.5, sz - STEP_RUN + 0.028),
            PropShape::Box { w: STAIR_W, h: STEP_RISE, d: 0.055 },
            Surface::matte(Rgb8::new(0x0e, 0x08, 0x02), 0.95),
        );
        for b in 0..2 {
            ctx.spawn_prop(
                Placement::at(baluster_x, sy + 0.46, sz - STEP_RUN * 0.5 - b as f32 * 0.3),
                PropShape::Cylinder { radius_top: 0.028, radius_bottom: 0.028, height: 0.92 },
                rail,
            );
        }
    }
    ctx.spawn_prop(
        Placement::at(baluster_x, 0.5, STAIR_Z + 0.1),
        PropShape::Box { w: 0.17, h: 1.0, d: 0.17 },
        rail,
    );
    ctx.spawn_prop(
        Placement::at(baluster_x, 1.06, STAIR_Z + 0.1),
        PropShape::Sphere { radius: 0.14 },
        rail,
    );
    let rail_len = STEPS as f32 * STEP_RUN + 0.65;
    let rail_pitch = (STEPS as f32 * STEP_RISE).atan2(rail_len);
    ctx.spawn_prop(
        Placement {
            pos: Vec3::new(baluster_x, STEPS as f32 * STEP_RISE * 0.5 + 0.96, STAIR_Z - STEPS as f32 * STEP_RUN * 0.5),
            rot: Vec3::new(rail_pitch, 0.0, 0.0),
        },
        PropShape::Box { w: 0.1, h: 0.1, d: rail_len },
        rail,
    );

    spawn_chandelier(ctx);
    spawn_cobwebs(ctx);
    spawn_lights(ctx);

    // Dust hanging in the lamplight
    let mut rng = rand::thread_rng();
    let count = ctx.particle_count(280);
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * RW * 0.9,
                rng.gen::<f32>() * RH,
                Z_FAR + rng.gen::<f32>() * ROOM_LEN,
            )
        })
        .collect();
    ctx.world.spawn((DriftParticles {
        positions,
        fall: 0.132,
        wobble_amp: 0.108,
        wobble_freq: 0.32,
        phase_step: 0.66,
        floor_y: 0.0,
        ceiling_y: RH,
        color: Rgb8::new(0x88, 0x22, 0x22),
        size: 0.032,
        opacity: 0.4,
    },));

    RoomRig {
        room: RoomKey::Hall,
        spawn: CameraSpawn {
            pos: Vec3::new(0.0, 1.75, Z_NEAR - 0.8),
            look_at: Vec3::new(0.0, 1.65, Z_NEAR - 6.8),
        },
        eye_height: 1.75,
        bounds: Some(WalkBounds::new(LEFT_X, RIGHT_X, Z_FAR, Z_NEAR)),
        stairs: Some(StairRun {
            side_x: RIGHT_X - 2.8,
            z_enter: 2.0,
            z_exit: -5.8,
            z_start: 1.8,
            z_top: -5.4,
            rise: 3.15,
            summit: 0.96,
        }),
        stair_destination: Some(RoomKey::Gallery),
        screen: None,
        showcase: None,
        portrait: Some(portrait),
        glide_z: None,
        background: Rgb8::new(0, 0, 0),
        fog: Some(FogRig { color: Rgb8::new(0, 0, 0), density: 0.033 }),
        ambient: (Rgb8::new(0x08, 0x04, 0x1a), 22.0),
        fov_wide: 65.0,
        fov_narrow: 75.0,
        wasd: true,
        parallax: false,
    }
}

/// Framed portrait above the shelf; the canvas swaps to the loaded
/// likeness when the asset arrives.
fn spawn_portrait(ctx: &mut BuildCtx<'_>) -> Entity {
    let gx = LEFT_X + PORTRAIT_D * 0.5 + 0.025;
    let gy = SHELF_TOP_Y + PORTRAIT_H * 0.5 + 0.02;
    let yaw = PI * 0.5;

    ctx.spawn_prop(
        Placement::at(gx, gy, SHELF_Z).with_yaw(yaw),
        PropShape::Box { w: PORTRAIT_W + 0.16, h: PORTRAIT_H + 0.16, d: PORTRAIT_D },
        Surface {
            metalness: 0.55,
            ..Surface::matte(Rgb8::new(0x3a, 0x22, 0x00), 0.5)
        },
    );
    ctx.spawn_prop(
        Placement::at(gx - 0.006, gy, SHELF_Z).with_yaw(yaw),
        PropShape::Box { w: PORTRAIT_W + 0.04, h: PORTRAIT_H + 0.04, d: PORTRAIT_D + 0.01 },
        Surface::matte(Rgb8::new(0x10, 0x0c, 0x00), 0.9),
    );
    for (ox, oy) in [(-1.0f32, -1.0f32), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
        ctx.spawn_prop(
            Placement::at(gx, gy + oy * (PORTRAIT_H * 0.5 + 0.05), SHELF_Z - ox * (PORTRAIT_W * 0.5 + 0.05))
                .with_yaw(yaw),
            PropShape::Box { w: 0.055, h: 0.055, d: PORTRAIT_D + 0.025 },
            Surface {
                metalness: 0.78,
                ..Surface::matte(Rgb8::new(0x5a, 0x3a, 0x00), 0.22)
            },
        );
    }

    let canvas_map = ctx.texture(ctx.factory.portrait_placeholder());
    let canvas_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(gx + PORTRAIT_D * 0.5 + 0.003, gy, SHELF_Z).with_yaw(yaw),
        PropShape::Plane { w: PORTRAIT_W, h: PORTRAIT_H },
        Surface::textured(canvas_map, 0.65),
        canvas_alloc,
        Clickable {
            shape: ClickShape::Wall { w: PORTRAIT_W, h: PORTRAIT_H },
            action: TargetAction::OpenPanel(PanelKey::Resident),
        },
        Sway { amp_z: 0.01, freq_z: 0.5, amp_x: 0.0, freq_x: 0.0, phase: 0.0 },
    ))
}

/// Chained sign pointing visitors up the stairs.
fn spawn_hanging_sign(ctx: &mut BuildCtx<'_>, backing: Surface, iron: Surface) {
    let content = ctx.content;

    ctx.spawn_prop(
        Placement::at(HANG_X, RH - 0.52, HANG_Z),
        PropShape::Box { w: 0.025, h: 1.05, d: 0.025 },
        iron,
    );
    let chain = Surface {
        metalness: 0.9,
        ..Surface::matte(Rgb8::new(0x1a, 0x1a, 0x28), 0.32)
    };
    for sx in [-1.0f32, 1.0] {
        let chx = HANG_X + sx * HANG_W * 0.44;
        for i in 0..6 {
            ctx.spawn_prop(
                Placement {
                    pos: Vec3::new(chx, RH - 0.1 - i as f32 * 0.14, HANG_Z),
                    rot: Vec3::new((i % 2) as f32 * PI * 0.5, 0.0, 0.0),
                },
                PropShape::Torus { radius: 0.038, tube: 0.012 },
                chain,
            );
        }
    }

    let sway = Sway { amp_z: 0.055, freq_z: 0.68, amp_x: 0.027, freq_x: 0.47, phase: 0.0 };
    let sign_map = ctx.texture(
        ctx.factory
            .sign_board(&content.gallery_panel.title, &content.gallery_panel.accent),
    );
    let mut sign_surface = Surface::textured(sign_map, 0.9);
    sign_surface.unlit = true;
    let sign_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(HANG_X, HANG_Y, HANG_Z),
        PropShape::Box { w: HANG_W, h: HANG_H, d: 0.06 },
        sign_surface,
        sign_alloc,
        sway,
    ));
    let backing_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(HANG_X, HANG_Y, HANG_Z - 0.032),
        PropShape::Box { w: HANG_W, h: HANG_H, d: 0.055 },
        backing,
        backing_alloc,
        sway,
    ));
    let click_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(HANG_X, HANG_Y, HANG_Z + 0.04),
        PropShape::Plane { w: HANG_W, h: HANG_H },
        Surface::invisible(),
        click_alloc,
        Clickable {
            shape: ClickShape::Wall { w: HANG_W, h: HANG_H },
            action: TargetAction::OpenPanel(PanelKey::Gallery),
        },
    ));
}

fn spawn_chandelier(ctx: &mut BuildCtx<'_>) {
    let metal = Surface {
        metalness: 0.88,
        ..Surface::matte(Rgb8::new(0x09, 0x09, 0x12), 0.38)
    };
    let cz = 2.8;
    ctx.spawn_prop(
        Placement::at(0.0, RH - 0.55, cz),
        PropShape::Box { w: 0.03, h: 1.1, d: 0.03 },
        metal,
    );
    ctx.spawn_prop(
        Placement::at(0.0, RH - 1.3, cz),
        PropShape::Cylinder { radius_top: 0.25, radius_bottom: 0.16, height: 0.26 },
        metal,
    );
    let wax = Surface::matte(Rgb8::new(0xc8, 0xb0, 0x80), 0.92);
    let mut flame = Surface::matte(Rgb8::new(0xff, 0x88, 0x00), 1.0);
    flame.unlit = true;
    for i in 0..5 {
        let ang = (i as f32 / 5.0) * PI * 2.0;
        let (sin, cos) = ang.sin_cos();
        ctx.spawn_prop(
            Placement {
                pos: Vec3::new(cos * 0.31, RH - 1.42, cz + sin * 0.31),
                rot: Vec3::new(0.0, ang, PI * 0.5),
            },
            PropShape::Cylinder { radius_top: 0.013, radius_bottom: 0.013, height: 0.62 },
            metal,
        );
        ctx.spawn_prop(
            Placement::at(cos * 0.62, RH - 1.34, cz + sin * 0.62),
            PropShape::Cylinder { radius_top: 0.022, radius_bottom: 0.022, height: 0.2 },
            wax,
        );
        ctx.spawn_prop(
            Placement::at(cos * 0.62, RH - 1.12, cz + sin * 0.62),
            PropShape::Sphere { radius: 0.025 },
            flame,
        );
    }
}

/// Sagging webs in the high corners, faked with translucent cones.
fn spawn_cobwebs(ctx: &mut BuildCtx<'_>) {
    let mut web = Surface::matte(Rgb8::new(0x2a, 0x18, 0x2a), 1.0);
    web.unlit = true;
    web.opacity = 0.48;
    for (x, z) in [
        (LEFT_X + 0.55, Z_FAR + 0.55),
        (RIGHT_X - 0.55, Z_FAR + 0.55),
        (LEFT_X + 0.5, Z_NEAR - 1.2),
        (0.0, Z_FAR + 1.8),
    ] {
        ctx.spawn_prop(
            Placement::at(x, RH - 0.28 - 0.33, z),
            PropShape::Cone { radius: 0.55, height: 0.65 },
            web,
        );
    }
}

fn spawn_lights(ctx: &mut BuildCtx<'_>) {
    let chandelier = ctx.spawn_light(
        Placement::at(0.0, RH - 1.28, 2.8),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xaa, 0x44),
            intensity: 78.0,
            range: 34.0,
            shadows: true,
        },
    );
    let _ = ctx.world.insert_one(
        chandelier,
        Flicker { base: 72.0, amp: 14.0, freq: 3.9, slow_amp: 0.0, slow_freq: 0.0, jitter: 10.0 },
    );

    ctx.spawn_aimed_light(
        Placement::at(2.0, RH, Z_NEAR + 4.0),
        LightRig {
            kind: LightKind::Directional,
            color: Rgb8::new(0x15, 0x22, 0x98),
            intensity: 2.8,
            range: 0.0,
            shadows: false,
        },
        Vec3::new(0.0, RH * 0.5, 0.0),
    );

    ctx.spawn_light(
        Placement::at(LEFT_X + 2.5, SHELF_Y + 1.6, SHELF_Z),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xcc, 0x88),
            intensity: 32.0,
            range: 7.0,
            shadows: false,
        },
    );

    let portrait_spot = ctx.spawn_aimed_light(
        Placement::at(LEFT_X + 2.2, SHELF_TOP_Y + PORTRAIT_H * 0.5 + 2.2, SHELF_Z + 0.9),
        LightRig {
            kind: LightKind::Spot { angle: PI / 6.0, penumbra: 0.4 },
            color: Rgb8::new(0xff, 0xee, 0x99),
            intensity: 115.0,
            range: 10.0,
            shadows: true,
        },
        Vec3::new(LEFT_X + 0.14, SHELF_TOP_Y + PORTRAIT_H * 0.5, SHELF_Z),
    );
    let _ = ctx.world.insert_one(portrait_spot, Flicker::steady(103.0, 13.0, 0.88));

    let candle = ctx.spawn_light(
        Placement::at(SHELF_MID_X + 0.3, SHELF_TOP_Y + 0.5, SHELF_Z + SHELF_W * 0.5 - 0.3),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0x66, 0x00),
            intensity: 26.0,
            range: 5.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(
        candle,
        Flicker { base: 23.0, amp: 5.0, freq: 21.0, slow_amp: 0.0, slow_freq: 0.0, jitter: 10.0 },
    );

    let sign = ctx.spawn_light(
        Placement::at(HANG_X, HANG_Y + 1.2, HANG_Z),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0x66, 0x00, 0x00),
            intensity: 24.0,
            range: 10.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(sign, Flicker::steady(21.0, 9.0, 1.6));

    ctx.spawn_light(
        Placement::at(RIGHT_X - STAIR_W + 1.2, 2.6, -1.0),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0x77, 0x33),
            intensity: 18.0,
            range: 12.0,
            shadows: false,
        },
    );
    ctx.spawn_light(
        Placement::at(0.0, 1.8, Z_FAR + 5.0),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0x44, 0x00, 0x04),
            intensity: 42.0,
            range: 22.0,
            shadows: false,
        },
    );
    let green = ctx.spawn_light(
        Placement::at(LEFT_X + 1.8, 2.0, -2.5),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0x00, 0x33, 0x08),
            intensity: 22.0,
            range: 9.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(green, Flicker::steady(18.0, 11.0, 2.6));
}
