//! The four chambers off the hall: archive, library, gallery, vault.
//!
//! Chambers have no walking. An autonomous camera eases between the
//! stations in the room's [`ShowcaseRig`] and idles with a slow sway;
//! content drives one swappable screen (archive slides, the vault
//! hologram), a plaque wall (library), or the hung tour (gallery).

use std::f32::consts::PI;

use gloam_logic::color::Rgb8;
use gloam_logic::content::{PanelKey, RoomKey};
use rand::Rng;

use crate::components::{
    Bob, ClickShape, Clickable, DriftParticles, Flicker, LightKind, LightRig, Placement,
    PropShape, Surface, TargetAction, Vec3,
};
use crate::textures::FALLBACK_ACCENT;

use super::{BuildCtx, CameraSpawn, CameraStation, FogRig, RoomRig, ScreenRig, ShowcaseRig};

// Projection surface shared by the archive and the vault.
const SCREEN_W: f32 = 10.5;
const SCREEN_H: f32 = 5.9;

// Archive: a raked lecture room.
const ARC_W: f32 = 18.0;
const ARC_H: f32 = 6.0;
const ARC_D: f32 = 18.0;
const ARC_SCREEN_Y: f32 = 3.3;
const ARC_SCREEN_Z: f32 = -ARC_D * 0.5 + 0.08;

// Library: a tall shelf-walled hall.
const LIB_W: f32 = 26.0;
const LIB_H: f32 = 14.0;
const LIB_D: f32 = 26.0;
const CASE_W: f32 = 8.9;
const CASE_H: f32 = 7.91;

// Gallery: a square parlor hung with the works.
const GAL_W: f32 = 14.0;
const GAL_H: f32 = 5.5;
const GAL_D: f32 = 14.0;
const FRAME_W: f32 = 4.2;
const FRAME_H: f32 = 3.0;
const CANVAS_W: f32 = 3.8;
const CANVAS_H: f32 = 2.6;
const HANG_Y: f32 = 2.95;

// Vault: a low server bay.
const VLT_W: f32 = 20.0;
const VLT_H: f32 = 5.5;
const VLT_D: f32 = 16.0;
const VLT_SCREEN_Y: f32 = 3.0;
const VLT_SCREEN_Z: f32 = -VLT_D * 0.5 + 0.08;

/// Wall position and yaw of each hung work, then the matching camera
/// perch. Two on the rear wall, two per flank.
const GAL_SLOTS: [(f32, f32, f32); 6] = [
    (-2.8, -6.88, 0.0),
    (2.8, -6.88, 0.0),
    (-6.88, -2.0, PI * 0.5),
    (-6.88, 2.5, PI * 0.5),
    (6.88, -2.0, -PI * 0.5),
    (6.88, 2.5, -PI * 0.5),
];
const GAL_VIEWS: [(f32, f32, f32); 6] = [
    (-2.8, 1.8, -2.5),
    (2.8, 1.8, -2.5),
    (-2.5, 1.8, -2.0),
    (-2.5, 1.8, 2.5),
    (2.5, 1.8, -2.0),
    (2.5, 1.8, 2.5),
];

pub(super) fn archive(ctx: &mut BuildCtx<'_>) -> RoomRig {
    let content = ctx.content;
    let accent = &content.archive_panel.accent;

    // Shell sheets
    let end_map = ctx.texture(ctx.factory.concrete(0));
    let side_map = ctx.texture(ctx.factory.concrete(2));
    let floor_map = ctx.texture(ctx.factory.tiles());
    let ceil_map = ctx.texture(ctx.factory.concrete(1));
    let ends = Surface::textured(end_map, 0.92)
        .tiled(5.0, 2.0)
        .tinted(Rgb8::new(0xcc, 0xcc, 0xdd));
    let sides = Surface::textured(side_map, 0.92)
        .tiled(5.0, 2.0)
        .tinted(Rgb8::new(0xbb, 0xbb, 0xcc));
    let floor = Surface {
        metalness: 0.15,
        ..Surface::textured(floor_map, 0.55).tiled(5.0, 5.0)
    };
    let ceiling = Surface::textured(ceil_map, 0.98)
        .tiled(4.0, 4.0)
        .tinted(Rgb8::new(0x88, 0x88, 0x88));
    chamber_shell(ctx, ARC_W, ARC_H, ARC_D, floor, ceiling, ends, sides);

    // Raked seating, five rows of eight
    let seat = Surface::matte(Rgb8::new(0x1a, 0x08, 0x08), 0.88);
    let leg = Surface {
        metalness: 0.7,
        ..Surface::matte(Rgb8::new(0x1a, 0x1a, 0x1a), 0.45)
    };
    let desk = Surface::matte(Rgb8::new(0x0c, 0x0c, 0x0c), 0.75);
    let riser = Surface::matte(Rgb8::new(0x10, 0x10, 0x14), 0.9);
    for row in 0..5 {
        let rz = 1.5 + row as f32 * 1.5;
        let ry = row as f32 * 0.22;
        if row > 0 {
            ctx.spawn_prop(
                Placement::at(0.0, ry, rz - 0.75),
                PropShape::Box { w: 16.0, h: 0.22, d: 0.12 },
                riser,
            );
        }
        for col in 0..8 {
            let cx = -6.3 + col as f32 * 1.8;
            ctx.spawn_prop(
                Placement::at(cx, ry + 0.48, rz),
                PropShape::Box { w: 0.7, h: 0.08, d: 0.6 },
                seat,
            );
            ctx.spawn_prop(
                Placement::at(cx, ry + 0.78, rz - 0.28),
                PropShape::Box { w: 0.7, h: 0.52, d: 0.08 },
                seat,
            );
            for sx in [-0.28f32, 0.28] {
                ctx.spawn_prop(
                    Placement::at(cx + sx, ry + 0.24, rz),
                    PropShape::Box { w: 0.06, h: 0.48, d: 0.06 },
                    leg,
                );
            }
            ctx.spawn_prop(
                Placement::at(cx + 0.42, ry + 0.72, rz - 0.08),
                PropShape::Box { w: 0.55, h: 0.03, d: 0.32 },
                desk,
            );
        }
    }

    // Low stage before the screen wall
    ctx.spawn_prop(
        Placement::at(0.0, 0.11, -7.1),
        PropShape::Box { w: 18.0, h: 0.22, d: 3.8 },
        Surface::matte(Rgb8::new(0x0d, 0x0d, 0x11), 0.85),
    );
    ctx.spawn_prop(
        Placement::at(0.0, 0.26, -5.3),
        PropShape::Box { w: 18.0, h: 0.08, d: 0.06 },
        Surface {
            metalness: 0.5,
            ..Surface::matte(Rgb8::new(0x1a, 0x1a, 0x2a), 0.6)
        },
    );

    spawn_lectern(ctx);

    // Projection screen; its texture swaps with the slide index
    let metal = Surface {
        metalness: 0.6,
        ..Surface::matte(Rgb8::new(0x22, 0x22, 0x26), 0.4)
    };
    ctx.spawn_prop(
        Placement::at(0.0, ARC_SCREEN_Y + SCREEN_H * 0.5 + 0.2, ARC_SCREEN_Z),
        PropShape::Box { w: SCREEN_W + 0.4, h: 0.18, d: 0.18 },
        Surface::matte(Rgb8::new(0x1a, 0x1a, 0x1a), 0.6),
    );
    ctx.spawn_prop(
        Placement::at(0.0, ARC_SCREEN_Y, ARC_SCREEN_Z + 0.01),
        PropShape::Box { w: SCREEN_W + 0.12, h: SCREEN_H + 0.12, d: 0.04 },
        Surface {
            metalness: 0.6,
            ..Surface::matte(Rgb8::new(0x0d, 0x0d, 0x0d), 0.45)
        },
    );
    let total = content.archive.len();
    let surface = match content.archive.first() {
        Some(entry) => {
            let map = ctx.texture(ctx.factory.slide(entry, accent, 0, total));
            Surface::textured(map, 0.25).glowing(Rgb8::new(0x11, 0x11, 0x22), 0.08)
        }
        None => Surface::matte(Rgb8::new(0x04, 0x04, 0x08), 0.25),
    };
    let screen = ctx.spawn_prop(
        Placement::at(0.0, ARC_SCREEN_Y, ARC_SCREEN_Z + 0.04),
        PropShape::Plane { w: SCREEN_W, h: SCREEN_H },
        surface,
    );
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(sx * (SCREEN_W * 0.5 + 0.1), ARC_SCREEN_Y, ARC_SCREEN_Z + 0.02),
            PropShape::Box { w: 0.04, h: SCREEN_H + 0.3, d: 0.06 },
            metal,
        );
    }

    // Ceiling projector aimed down the hall
    ctx.spawn_prop(
        Placement::at(0.0, 5.45, 1.5),
        PropShape::Box { w: 0.52, h: 0.2, d: 0.38 },
        Surface {
            metalness: 0.7,
            ..Surface::matte(Rgb8::new(0x11, 0x11, 0x11), 0.4)
        },
    );
    ctx.spawn_prop(
        Placement::at(0.0, 5.42, 1.31).with_pitch(PI * 0.5),
        PropShape::Cylinder { radius_top: 0.055, radius_bottom: 0.06, height: 0.14 },
        metal,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 5.76, 1.5),
        PropShape::Cylinder { radius_top: 0.02, radius_bottom: 0.02, height: 0.42 },
        metal,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 5.96, 1.5),
        PropShape::Box { w: 0.22, h: 0.04, d: 0.22 },
        metal,
    );
    let mut beam = Surface::matte(Rgb8::new(0x33, 0x55, 0xff), 1.0);
    beam.unlit = true;
    beam.opacity = 0.07;
    ctx.spawn_prop(
        Placement::at(0.0, 5.35, 1.35).with_pitch(-PI * 0.5),
        PropShape::Cone { radius: 0.05, height: 0.2 },
        beam,
    );
    let proj = ctx.spawn_aimed_light(
        Placement::at(0.0, 5.45, 1.4),
        LightRig {
            kind: LightKind::Spot { angle: PI / 9.0, penumbra: 0.08 },
            color: Rgb8::new(0xff, 0xff, 0xff),
            intensity: 58.0,
            range: 14.0,
            shadows: false,
        },
        Vec3::new(0.0, ARC_SCREEN_Y, ARC_SCREEN_Z),
    );
    let _ = ctx.world.insert_one(proj, Flicker::steady(52.0, 16.0, 0.4));
    let glow = ctx.spawn_light(
        Placement::at(0.0, ARC_SCREEN_Y, ARC_SCREEN_Z + 1.5),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0x88, 0x99, 0xcc),
            intensity: 22.0,
            range: 8.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(glow, Flicker::steady(20.0, 4.0, 0.9));

    // Whiteboard on the left wall
    let board = Surface::matte(Rgb8::new(0x0a, 0x0a, 0x12), 0.85).glowing(Rgb8::new(0x04, 0x04, 0x08), 0.3);
    ctx.spawn_prop(
        Placement::at(-ARC_W * 0.5 + 0.05, 2.4, -2.0).with_yaw(PI * 0.5),
        PropShape::Box { w: 3.3, h: 1.9, d: 0.05 },
        metal,
    );
    ctx.spawn_prop(
        Placement::at(-ARC_W * 0.5 + 0.08, 2.4, -2.0).with_yaw(PI * 0.5),
        PropShape::Plane { w: 3.2, h: 1.8 },
        board,
    );
    ctx.spawn_prop(
        Placement::at(-ARC_W * 0.5 + 0.15, 1.42, -2.0).with_yaw(PI * 0.5),
        PropShape::Box { w: 1.2, h: 0.04, d: 0.12 },
        metal,
    );

    // Cove strip under the screen and floor guides along the flanks
    ctx.spawn_prop(
        Placement::at(0.0, 0.28, ARC_SCREEN_Z + 0.07),
        PropShape::Box { w: SCREEN_W + 2.0, h: 0.06, d: 0.06 },
        Surface::matte(Rgb8::new(0x08, 0x10, 0x33), 0.5).glowing(Rgb8::new(0x22, 0x44, 0xcc), 0.9),
    );
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(sx * (ARC_W * 0.5 - 0.12), 0.05, 0.0),
            PropShape::Box { w: 0.04, h: 0.04, d: 16.0 },
            Surface::matte(Rgb8::new(0x06, 0x0c, 0x2a), 0.5).glowing(Rgb8::new(0x11, 0x33, 0xaa), 0.9),
        );
    }

    // Flat ceiling panels and their downlights
    let panel = Surface::matte(Rgb8::new(0x20, 0x22, 0x28), 0.6).glowing(Rgb8::new(0xaa, 0xb0, 0xcc), 0.8);
    for row in 0..3 {
        let pz = -6.0 + row as f32 * 5.0;
        for col in 0..4 {
            let px = -6.0 + col as f32 * 4.0;
            ctx.spawn_prop(
                Placement {
                    pos: Vec3::new(px, ARC_H - 0.02, pz),
                    rot: Vec3::new(PI * 0.5, 0.0, 0.0),
                },
                PropShape::Plane { w: 2.2, h: 0.35 },
                panel,
            );
            ctx.spawn_light(
                Placement::at(px, ARC_H - 0.1, pz),
                LightRig {
                    kind: LightKind::Point,
                    color: Rgb8::new(0xaa, 0xb0, 0xcc),
                    intensity: 18.0,
                    range: 10.0,
                    shadows: false,
                },
            );
        }
    }

    ctx.spawn_aimed_light(
        Placement::at(4.0, ARC_H, 6.0),
        LightRig {
            kind: LightKind::Directional,
            color: Rgb8::new(0x1a, 0x1a, 0x44),
            intensity: 1.8,
            range: 0.0,
            shadows: false,
        },
        Vec3::new(0.0, 2.0, 0.0),
    );

    // Chalk dust drifting in the projector beam
    let mut rng = rand::thread_rng();
    let count = ctx.particle_count(180);
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * (ARC_W - 1.0),
                rng.gen::<f32>() * ARC_H,
                (rng.gen::<f32>() - 0.5) * (ARC_D - 1.0),
            )
        })
        .collect();
    ctx.world.spawn((DriftParticles {
        positions,
        fall: 0.03,
        wobble_amp: 0.06,
        wobble_freq: 0.3,
        phase_step: 0.6,
        floor_y: 0.0,
        ceiling_y: ARC_H,
        color: Rgb8::new(0x88, 0x99, 0xcc),
        size: 0.022,
        opacity: 0.3,
    },));

    let station = CameraStation {
        pos: Vec3::new(0.0, 2.2, 8.5),
        look: Vec3::new(0.0, 2.8, -8.0),
    };
    RoomRig {
        room: RoomKey::Archive,
        spawn: CameraSpawn { pos: station.pos, look_at: station.look },
        eye_height: 2.2,
        bounds: None,
        stairs: None,
        stair_destination: None,
        screen: if total > 0 { Some(ScreenRig { entity: screen, total }) } else { None },
        showcase: Some(ShowcaseRig {
            stations: vec![station],
            pos_ease: 0.04,
            look_ease: 0.05,
            sway_x: (0.25, 0.12),
            sway_y: (0.06, 0.22),
            look_sway_x: (0.3, 0.08),
        }),
        portrait: None,
        glide_z: None,
        background: Rgb8::new(0x01, 0x02, 0x05),
        fog: Some(FogRig { color: Rgb8::new(0x01, 0x02, 0x05), density: 0.038 }),
        ambient: (Rgb8::new(0x06, 0x08, 0x10), 12.0),
        fov_wide: 62.0,
        fov_narrow: 72.0,
        wasd: false,
        parallax: false,
    }
}

pub(super) fn library(ctx: &mut BuildCtx<'_>) -> RoomRig {
    let content = ctx.content;
    let accent = &content.library_panel.accent;

    let wall_map = ctx.texture(ctx.factory.wallpaper());
    let wall_bump = ctx.texture(ctx.factory.rough_bump(110, 220));
    let floor_map = ctx.texture(ctx.factory.planks());
    let ends = Surface::textured(wall_map, 0.93)
        .with_bump(wall_bump)
        .tiled(7.0, 2.0)
        .tinted(Rgb8::new(0xdd, 0xc8, 0xa0));
    let sides = Surface::textured(wall_map, 0.93)
        .with_bump(wall_bump)
        .tiled(5.0, 2.0)
        .tinted(Rgb8::new(0xcc, 0xba, 0xa0));
    let floor = Surface::textured(floor_map, 0.84).tiled(7.0, 5.0);
    let ceiling = Surface::matte(Rgb8::new(0x11, 0x11, 0x08), 0.98);
    chamber_shell(ctx, LIB_W, LIB_H, LIB_D, floor, ceiling, ends, sides);

    // Baseboard and dado rails on all four walls
    let trim = Surface::matte(Rgb8::new(0x2e, 0x1a, 0x06), 0.85);
    for (y, h, d) in [(0.11, 0.22, 0.09), (1.6, 0.07, 0.07)] {
        ctx.spawn_prop(
            Placement::at(0.0, y, -LIB_D * 0.5 + 0.05),
            PropShape::Box { w: LIB_W, h, d },
            trim,
        );
        ctx.spawn_prop(
            Placement::at(0.0, y, LIB_D * 0.5 - 0.05),
            PropShape::Box { w: LIB_W, h, d },
            trim,
        );
        ctx.spawn_prop(
            Placement::at(-LIB_W * 0.5 + 0.05, y, 0.0).with_yaw(PI * 0.5),
            PropShape::Box { w: LIB_D, h, d },
            trim,
        );
        ctx.spawn_prop(
            Placement::at(LIB_W * 0.5 - 0.05, y, 0.0).with_yaw(-PI * 0.5),
            PropShape::Box { w: LIB_D, h, d },
            trim,
        );
    }

    // The shelf wall
    let back_map = ctx.texture(ctx.factory.boards("#5c3010"));
    let side_board_map = ctx.texture(ctx.factory.boards("#7a4a18"));
    let shelf_map = ctx.texture(ctx.factory.boards("#a06830"));
    let case_z = -LIB_D * 0.5 + 0.1;
    let case_mid_y = CASE_H * 0.5 + 0.04;
    ctx.spawn_prop(
        Placement::at(0.0, case_mid_y, case_z),
        PropShape::Box { w: CASE_W + 0.16, h: CASE_H, d: 0.07 },
        Surface::textured(back_map, 0.9).tiled(24.0, 2.0),
    );
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(sx * (CASE_W * 0.5 + 0.07), case_mid_y, case_z + 0.64),
            PropShape::Box { w: 0.11, h: CASE_H, d: 1.35 },
            Surface::textured(side_board_map, 0.88).tiled(2.0, 6.0),
        );
    }
    ctx.spawn_prop(
        Placement::at(0.0, CASE_H + 0.1, case_z + 0.66),
        PropShape::Box { w: CASE_W + 0.44, h: 0.13, d: 1.39 },
        Surface::textured(side_board_map, 0.88),
    );
    ctx.spawn_prop(
        Placement::at(0.0, CASE_H + 0.2, case_z + 0.72),
        PropShape::Box { w: CASE_W + 0.72, h: 0.06, d: 1.51 },
        Surface::textured(side_board_map, 0.88),
    );

    let shelf_surface = Surface::textured(shelf_map, 0.82).tiled(28.0, 1.0);
    let brass = Surface {
        metalness: 0.88,
        ..Surface::matte(Rgb8::new(0xc0, 0x95, 0x20), 0.3)
    };
    let spines = [
        Rgb8::new(0x3a, 0x08, 0x08),
        Rgb8::new(0x08, 0x1a, 0x08),
        Rgb8::new(0x08, 0x08, 0x3a),
        Rgb8::new(0x1a, 0x10, 0x08),
        Rgb8::new(0x3a, 0x1a, 0x00),
    ];
    let mut rng = rand::thread_rng();
    for k in 0..5 {
        let sy = 0.15 + k as f32 * 1.85;
        ctx.spawn_prop(
            Placement::at(0.0, sy, case_z + 0.6),
            PropShape::Box { w: CASE_W, h: 0.13, d: 1.25 },
            shelf_surface,
        );
        ctx.spawn_prop(
            Placement::at(0.0, sy + 0.08, case_z + 1.2),
            PropShape::Box { w: CASE_W, h: 0.03, d: 0.05 },
            brass,
        );
        // A run of spines behind the plaques
        let mut bx = -CASE_W * 0.5 + 0.25;
        while bx < CASE_W * 0.5 - 0.25 {
            let bw = 0.05 + rng.gen::<f32>() * 0.055;
            let bh = 0.28 + rng.gen::<f32>() * 0.24;
            let spine = spines[rng.gen_range(0..spines.len())];
            ctx.spawn_prop(
                Placement::at(bx, sy + bh * 0.5 + 0.07, case_z + 0.35)
                    .with_yaw((rng.gen::<f32>() - 0.5) * 0.1),
                PropShape::Box { w: bw, h: bh, d: 0.22 },
                Surface::matte(spine, 0.9),
            );
            bx += bw + 0.014;
        }
    }

    // One standing nameboard per catalogued skill, three to a shelf
    for (i, skill) in content.library.iter().take(15).enumerate() {
        let row = i / 3;
        let col = i % 3;
        let sx = -2.8 + col as f32 * 2.8;
        let sy = 0.15 + row as f32 * 1.85;
        let sign_map = ctx.texture(ctx.factory.sign_board(skill, accent));
        let mut sign_surface = Surface::textured(sign_map, 0.9);
        sign_surface.unlit = true;
        ctx.spawn_prop(
            Placement {
                pos: Vec3::new(sx, sy + 0.45, case_z + 0.95),
                rot: Vec3::new(-0.08, 0.0, 0.0),
            },
            PropShape::Plane { w: 2.2, h: 0.66 },
            sign_surface,
        );
    }

    // Catalogue panel high over the case; opens the reading overlay
    let plaque_map = ctx.texture(ctx.factory.plaque(
        &content.library_panel.title,
        &content.library,
        accent,
    ));
    ctx.spawn_prop(
        Placement::at(0.0, 10.53, case_z - 0.02),
        PropShape::Box { w: 11.3, h: 4.5, d: 0.1 },
        Surface::textured(side_board_map, 0.88),
    );
    let panel_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(0.0, 10.53, case_z + 0.05),
        PropShape::Plane { w: 11.0, h: 4.2 },
        Surface::textured(plaque_map, 0.8).glowing(Rgb8::new(0x33, 0x22, 0x11), 0.5),
        panel_alloc,
        Clickable {
            shape: ClickShape::Wall { w: 11.0, h: 4.2 },
            action: TargetAction::OpenPanel(PanelKey::Library),
        },
    ));
    let panel_glow = ctx.spawn_light(
        Placement::at(0.0, 10.5, case_z + 1.4),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xaa, 0x44),
            intensity: 24.0,
            range: 14.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(panel_glow, Flicker::steady(22.0, 4.0, 1.3));
    let panel_spot = ctx.spawn_aimed_light(
        Placement::at(0.0, 12.8, case_z + 4.0),
        LightRig {
            kind: LightKind::Spot { angle: PI / 7.0, penumbra: 0.35 },
            color: Rgb8::new(0xff, 0xf5, 0xe0),
            intensity: 58.0,
            range: 16.0,
            shadows: false,
        },
        Vec3::new(0.0, 10.53, case_z),
    );
    let _ = ctx.world.insert_one(panel_spot, Flicker::steady(54.0, 8.0, 0.7));

    // Shelf spot washing the case
    ctx.spawn_aimed_light(
        Placement::at(0.0, 9.5, case_z + 3.6),
        LightRig {
            kind: LightKind::Spot { angle: PI / 6.0, penumbra: 0.3 },
            color: Rgb8::new(0xff, 0xf0, 0xe0),
            intensity: 60.0,
            range: 20.0,
            shadows: false,
        },
        Vec3::new(0.0, 4.0, case_z),
    );

    // Reading table and rug mid-room
    let iron = Surface {
        metalness: 0.92,
        ..Surface::matte(Rgb8::new(0x0e, 0x0e, 0x12), 0.28)
    };
    ctx.spawn_prop(
        Placement::at(0.0, 1.8, 3.5),
        PropShape::Box { w: 4.5, h: 0.15, d: 7.5 },
        Surface::textured(shelf_map, 0.7).tiled(4.0, 6.0),
    );
    for (lx, lz) in [(-2.0f32, 0.3f32), (2.0, 0.3), (-2.0, 6.7), (2.0, 6.7)] {
        ctx.spawn_prop(
            Placement::at(lx, 0.86, lz),
            PropShape::Box { w: 0.12, h: 1.72, d: 0.12 },
            iron,
        );
    }
    let rug_map = ctx.texture(ctx.factory.rug(accent));
    ctx.spawn_prop(
        Placement {
            pos: Vec3::new(0.0, 0.01, 3.5),
            rot: Vec3::new(-PI * 0.5, 0.0, 0.0),
        },
        PropShape::Plane { w: 10.0, h: 7.0 },
        Surface::textured(rug_map, 0.95),
    );

    // Candle ring overhead and sconces at reading height
    spawn_chandelier_ring(ctx, 13.35, 12.05, 1.05, 0.044, 8, Some((14.0, 8.0)));
    let chan = ctx.spawn_light(
        Placement::at(0.0, 12.7, 0.0),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xcc, 0x66),
            intensity: 90.0,
            range: 40.0,
            shadows: true,
        },
    );
    let _ = ctx.world.insert_one(
        chan,
        Flicker { base: 86.0, amp: 17.0, freq: 3.2, slow_amp: 0.0, slow_freq: 0.0, jitter: 11.0 },
    );
    for sx in [-1.0f32, 1.0] {
        spawn_sconce(
            ctx,
            Vec3::new(sx * 9.5, 3.3, LIB_D * 0.5 - 0.1),
            Vec3::new(0.0, 0.0, -1.0),
            24.0,
            8.0,
        );
        spawn_sconce(
            ctx,
            Vec3::new(sx * (LIB_W * 0.5 - 0.1), 3.3, -2.5),
            Vec3::new(-sx, 0.0, 0.0),
            24.0,
            8.0,
        );
    }

    ctx.spawn_aimed_light(
        Placement::at(2.0, LIB_H, 15.0),
        LightRig {
            kind: LightKind::Directional,
            color: Rgb8::new(0x22, 0x1a, 0x0a),
            intensity: 2.8,
            range: 0.0,
            shadows: false,
        },
        Vec3::new(0.0, 5.0, 0.0),
    );

    // Dust sifting down from the high dark
    let count = ctx.particle_count(400);
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * (LIB_W - 2.0),
                rng.gen::<f32>() * LIB_H,
                (rng.gen::<f32>() - 0.5) * (LIB_D - 2.0),
            )
        })
        .collect();
    ctx.world.spawn((DriftParticles {
        positions,
        fall: 0.078,
        wobble_amp: 0.1,
        wobble_freq: 0.35,
        phase_step: 0.7,
        floor_y: 0.0,
        ceiling_y: LIB_H,
        color: Rgb8::new(0xcc, 0xaa, 0x88),
        size: 0.019,
        opacity: 0.2,
    },));

    let station = CameraStation {
        pos: Vec3::new(0.0, 5.4, 1.5),
        look: Vec3::new(0.0, 4.6, case_z),
    };
    RoomRig {
        room: RoomKey::Library,
        spawn: CameraSpawn { pos: station.pos, look_at: station.look },
        eye_height: 5.4,
        bounds: None,
        stairs: None,
        stair_destination: None,
        screen: None,
        showcase: Some(ShowcaseRig {
            stations: vec![station],
            pos_ease: 0.04,
            look_ease: 0.05,
            sway_x: (0.22, 0.08),
            sway_y: (0.12, 0.13),
            look_sway_x: (0.0, 0.0),
        }),
        portrait: None,
        glide_z: None,
        background: Rgb8::new(0x02, 0x01, 0x01),
        fog: Some(FogRig { color: Rgb8::new(0x02, 0x01, 0x01), density: 0.026 }),
        ambient: (Rgb8::new(0x11, 0x09, 0x08), 24.0),
        fov_wide: 60.0,
        fov_narrow: 68.0,
        wasd: false,
        parallax: false,
    }
}

pub(super) fn gallery(ctx: &mut BuildCtx<'_>) -> RoomRig {
    let content = ctx.content;
    let accent = &content.gallery_panel.accent;

    let wall_map = ctx.texture(ctx.factory.wallpaper());
    let wall_bump = ctx.texture(ctx.factory.rough_bump(120, 240));
    let floor_map = ctx.texture(ctx.factory.planks());
    let walls = Surface::textured(wall_map, 0.96)
        .with_bump(wall_bump)
        .tiled(4.0, 2.0)
        .tinted(Rgb8::new(0xaa, 0xaa, 0xcc));
    let floor = Surface::textured(floor_map, 0.85).tiled(3.0, 3.0);
    let ceiling = Surface::textured(floor_map, 0.95)
        .tiled(3.0, 3.0)
        .tinted(Rgb8::new(0x22, 0x22, 0x22));
    chamber_shell(ctx, GAL_W, GAL_H, GAL_D, floor, ceiling, walls, walls);

    // Skirting, cornice, dado on all four walls
    let trim_map = ctx.texture(ctx.factory.tread());
    let trim = Surface::textured(trim_map, 0.8)
        .tiled(12.0, 1.0)
        .tinted(Rgb8::new(0x8a, 0x55, 0x30));
    for (y, h, d) in [(0.125, 0.25, 0.12), (GAL_H - 0.11, 0.22, 0.12), (1.2, 0.1, 0.08)] {
        ctx.spawn_prop(
            Placement::at(0.0, y, -GAL_D * 0.5 + 0.06),
            PropShape::Box { w: GAL_W, h, d },
            trim,
        );
        ctx.spawn_prop(
            Placement::at(0.0, y, GAL_D * 0.5 - 0.06),
            PropShape::Box { w: GAL_W, h, d },
            trim,
        );
        ctx.spawn_prop(
            Placement::at(-GAL_W * 0.5 + 0.06, y, 0.0).with_yaw(PI * 0.5),
            PropShape::Box { w: GAL_D, h, d },
            trim,
        );
        ctx.spawn_prop(
            Placement::at(GAL_W * 0.5 - 0.06, y, 0.0).with_yaw(-PI * 0.5),
            PropShape::Box { w: GAL_D, h, d },
            trim,
        );
    }

    // Ceiling beams both ways
    let beam = Surface::matte(Rgb8::new(0x1a, 0x0e, 0x04), 0.9);
    for p in [-5.0f32, -1.0, 3.0] {
        ctx.spawn_prop(
            Placement::at(0.0, GAL_H - 0.1, p),
            PropShape::Box { w: GAL_W, h: 0.2, d: 0.35 },
            beam,
        );
        ctx.spawn_prop(
            Placement::at(p, GAL_H - 0.1, 0.0),
            PropShape::Box { w: 0.35, h: 0.2, d: GAL_D },
            beam,
        );
    }

    let rug_map = ctx.texture(ctx.factory.rug(accent));
    ctx.spawn_prop(
        Placement {
            pos: Vec3::new(0.0, 0.01, 0.5),
            rot: Vec3::new(-PI * 0.5, 0.0, 0.0),
        },
        PropShape::Plane { w: 5.5, h: 4.5 },
        Surface::textured(rug_map, 0.95),
    );

    // The hung works, one camera perch each
    let gold = Surface {
        metalness: 0.55,
        ..Surface::matte(Rgb8::new(0x3a, 0x22, 0x00), 0.5)
    };
    let boss = Surface {
        metalness: 0.72,
        ..Surface::matte(Rgb8::new(0x5a, 0x3a, 0x00), 0.25)
    };
    let count = content.gallery.len().min(GAL_SLOTS.len());
    for (i, work) in content.gallery.iter().take(GAL_SLOTS.len()).enumerate() {
        let (sx, sz, yaw) = GAL_SLOTS[i];
        let normal = Vec3::new(0.0, 0.0, 1.0).rotated_y(yaw);
        let along = Vec3::new(1.0, 0.0, 0.0).rotated_y(yaw);
        let center = Vec3::new(sx, HANG_Y, sz);
        let wall_rot = Vec3::new(0.0, yaw, 0.0);

        for s in [-1.0f32, 1.0] {
            ctx.spawn_prop(
                Placement {
                    pos: center + Vec3::new(0.0, s * (FRAME_H * 0.5 + 0.06), 0.0),
                    rot: wall_rot,
                },
                PropShape::Box { w: FRAME_W + 0.36, h: 0.18, d: 0.12 },
                gold,
            );
            ctx.spawn_prop(
                Placement {
                    pos: center + along * (s * (FRAME_W * 0.5 + 0.06)),
                    rot: wall_rot,
                },
                PropShape::Box { w: 0.12, h: FRAME_H + 0.36, d: 0.18 },
                gold,
            );
        }
        for (ox, oy) in [(-1.0f32, -1.0f32), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            ctx.spawn_prop(
                Placement {
                    pos: center
                        + along * (ox * (FRAME_W * 0.5 + 0.06))
                        + Vec3::new(0.0, oy * (FRAME_H * 0.5 + 0.06), 0.0),
                    rot: wall_rot,
                },
                PropShape::Box { w: 0.18, h: 0.18, d: 0.3 },
                boss,
            );
        }
        ctx.spawn_prop(
            Placement { pos: center + normal * 0.08, rot: wall_rot },
            PropShape::Box { w: FRAME_W - 0.16, h: FRAME_H - 0.16, d: 0.06 },
            Surface::matte(Rgb8::new(0x1a, 0x15, 0x10), 0.92),
        );
        let canvas_map = ctx.texture(ctx.factory.poster(&work.name, &work.caption, accent));
        let canvas_alloc = ctx.alloc();
        ctx.world.spawn((
            Placement { pos: center + normal * 0.11, rot: wall_rot },
            PropShape::Plane { w: CANVAS_W, h: CANVAS_H },
            Surface::textured(canvas_map, 0.7),
            canvas_alloc,
            Clickable {
                shape: ClickShape::Wall { w: CANVAS_W, h: CANVAS_H },
                action: TargetAction::SelectItem(i),
            },
        ));
        let cord_h = GAL_H - (HANG_Y + FRAME_H * 0.5);
        ctx.spawn_prop(
            Placement {
                pos: center + normal * 0.02 + Vec3::new(0.0, FRAME_H * 0.5 + cord_h * 0.5, 0.0),
                rot: Vec3::ZERO,
            },
            PropShape::Cylinder { radius_top: 0.005, radius_bottom: 0.005, height: cord_h },
            Surface::matte(Rgb8::new(0x1a, 0x12, 0x08), 0.9),
        );
        ctx.spawn_prop(
            Placement {
                pos: center + normal * 0.09 + Vec3::new(0.0, -(FRAME_H * 0.5 + 0.26), 0.0),
                rot: wall_rot,
            },
            PropShape::Box { w: 2.47, h: 0.24, d: 0.04 },
            Surface {
                metalness: 0.8,
                ..Surface::matte(Rgb8::new(0x6a, 0x58, 0x20), 0.3)
            },
        );
        let spot = ctx.spawn_aimed_light(
            Placement { pos: center + normal * 3.5 + Vec3::new(0.0, 2.5, 0.0), rot: Vec3::ZERO },
            LightRig {
                kind: LightKind::Spot { angle: PI / 10.0, penumbra: 0.3 },
                color: Rgb8::new(0xff, 0xf2, 0xcc),
                intensity: 90.0,
                range: 12.0,
                shadows: true,
            },
            center,
        );
        let _ = ctx.world.insert_one(spot, Flicker::steady(86.0, 8.0, 0.5));
    }

    // Sconces flanking the rear pair
    for sx in [-5.4f32, -0.2, 0.2, 5.4] {
        spawn_sconce(
            ctx,
            Vec3::new(sx, 4.15, -GAL_D * 0.5 + 0.1),
            Vec3::new(0.0, 0.0, 1.0),
            18.0,
            5.0,
        );
    }

    spawn_fireplace(ctx);
    spawn_parlor_corner(ctx);
    spawn_chandelier_ring(ctx, 4.9, 3.9, 0.8, 0.035, 6, None);

    let chan = ctx.spawn_light(
        Placement::at(0.0, 4.5, 0.0),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xaa, 0x44),
            intensity: 65.0,
            range: 28.0,
            shadows: true,
        },
    );
    let _ = ctx.world.insert_one(
        chan,
        Flicker { base: 62.0, amp: 14.0, freq: 3.5, slow_amp: 0.0, slow_freq: 0.0, jitter: 9.0 },
    );
    ctx.spawn_aimed_light(
        Placement::at(3.0, GAL_H, 11.0),
        LightRig {
            kind: LightKind::Directional,
            color: Rgb8::new(0x1a, 0x22, 0x66),
            intensity: 2.2,
            range: 0.0,
            shadows: false,
        },
        Vec3::new(0.0, 2.75, 0.0),
    );
    ctx.spawn_light(
        Placement::at(0.0, 1.5, 0.0),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0x22, 0x00, 0x10),
            intensity: 30.0,
            range: 20.0,
            shadows: false,
        },
    );

    // Dust hanging in the picture lights
    let mut rng = rand::thread_rng();
    let pcount = ctx.particle_count(200);
    let positions = (0..pcount)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * (GAL_W - 1.0),
                rng.gen::<f32>() * GAL_H,
                (rng.gen::<f32>() - 0.5) * (GAL_D - 1.0),
            )
        })
        .collect();
    ctx.world.spawn((DriftParticles {
        positions,
        fall: 0.066,
        wobble_amp: 0.12,
        wobble_freq: 0.4,
        phase_step: 0.8,
        floor_y: 0.0,
        ceiling_y: GAL_H,
        color: Rgb8::new(0xcc, 0xaa, 0x88),
        size: 0.028,
        opacity: 0.35,
    },));

    let mut stations: Vec<CameraStation> = (0..count)
        .map(|i| {
            let (vx, vy, vz) = GAL_VIEWS[i];
            let (sx, sz, _) = GAL_SLOTS[i];
            CameraStation {
                pos: Vec3::new(vx, vy, vz),
                look: Vec3::new(sx, HANG_Y, sz),
            }
        })
        .collect();
    if stations.is_empty() {
        stations.push(CameraStation {
            pos: Vec3::new(0.0, 1.8, 5.5),
            look: Vec3::new(0.0, 2.2, -GAL_D * 0.5),
        });
    }
    let spawn = CameraSpawn { pos: stations[0].pos, look_at: stations[0].look };
    RoomRig {
        room: RoomKey::Gallery,
        spawn,
        eye_height: 1.8,
        bounds: None,
        stairs: None,
        stair_destination: None,
        screen: None,
        showcase: Some(ShowcaseRig {
            stations,
            pos_ease: 0.045,
            look_ease: 0.12,
            sway_x: (0.0, 0.0),
            sway_y: (0.018, 0.6),
            look_sway_x: (0.0, 0.0),
        }),
        portrait: None,
        glide_z: None,
        background: Rgb8::new(0, 0, 0),
        fog: Some(FogRig { color: Rgb8::new(0, 0, 0), density: 0.04 }),
        ambient: (Rgb8::new(0x08, 0x04, 0x12), 15.0),
        fov_wide: 65.0,
        fov_narrow: 72.0,
        wasd: false,
        parallax: false,
    }
}

pub(super) fn vault(ctx: &mut BuildCtx<'_>) -> RoomRig {
    let content = ctx.content;
    let accent = &content.vault_panel.accent;
    let accent_rgb = Rgb8::parse_or(accent, FALLBACK_ACCENT);

    let panel_map = ctx.texture(ctx.factory.metal_panel());
    let grate_map = ctx.texture(ctx.factory.grate());
    let ends = Surface {
        metalness: 0.5,
        ..Surface::textured(panel_map, 0.65)
            .tiled(4.0, 2.0)
            .tinted(Rgb8::new(0xaa, 0xbb, 0xcc))
    };
    let sides = Surface {
        metalness: 0.55,
        ..Surface::textured(panel_map, 0.6)
            .tiled(4.0, 2.0)
            .tinted(Rgb8::new(0x99, 0xaa, 0xbb))
    };
    let floor = Surface {
        metalness: 0.3,
        ..Surface::textured(grate_map, 0.45).tiled(7.0, 6.0)
    };
    let ceiling = Surface::textured(panel_map, 0.9)
        .tiled(6.0, 4.0)
        .tinted(Rgb8::new(0x44, 0x55, 0x66));
    chamber_shell(ctx, VLT_W, VLT_H, VLT_D, floor, ceiling, ends, sides);

    // Hologram display on the far wall
    let housing = Surface {
        metalness: 0.7,
        ..Surface::matte(Rgb8::new(0x0a, 0x0e, 0x18), 0.3)
    };
    for dy in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(0.0, VLT_SCREEN_Y + dy * (SCREEN_H * 0.5 + 0.22), VLT_SCREEN_Z),
            PropShape::Box { w: SCREEN_W + 0.5, h: 0.22, d: 0.22 },
            housing,
        );
    }
    ctx.spawn_prop(
        Placement::at(0.0, VLT_SCREEN_Y, VLT_SCREEN_Z + 0.01),
        PropShape::Box { w: SCREEN_W + 0.14, h: SCREEN_H + 0.14, d: 0.05 },
        Surface {
            metalness: 0.8,
            ..Surface::matte(Rgb8::new(0x08, 0x0c, 0x16), 0.25)
        },
    );
    let total = content.vault.len();
    let surface = match content.vault.first() {
        Some(entry) => {
            let map = ctx.texture(ctx.factory.hologram(entry, accent, 0, total));
            Surface::textured(map, 0.2).glowing(Rgb8::new(0x00, 0x11, 0x22), 0.12)
        }
        None => Surface::matte(Rgb8::new(0x02, 0x06, 0x0c), 0.2),
    };
    let screen = ctx.spawn_prop(
        Placement::at(0.0, VLT_SCREEN_Y, VLT_SCREEN_Z + 0.045),
        PropShape::Plane { w: SCREEN_W, h: SCREEN_H },
        surface,
    );
    let led = Surface::matte(accent_rgb.scaled(0.4), 0.5).glowing(accent_rgb, 1.2);
    for d in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(0.0, VLT_SCREEN_Y + d * (SCREEN_H * 0.5 + 0.02), VLT_SCREEN_Z + 0.05),
            PropShape::Box { w: SCREEN_W + 0.02, h: 0.04, d: 0.04 },
            led,
        );
        ctx.spawn_prop(
            Placement::at(d * (SCREEN_W * 0.5 + 0.02), VLT_SCREEN_Y, VLT_SCREEN_Z + 0.05),
            PropShape::Box { w: 0.04, h: SCREEN_H + 0.04, d: 0.04 },
            led,
        );
    }
    let glow = ctx.spawn_light(
        Placement::at(0.0, VLT_SCREEN_Y, VLT_SCREEN_Z + 2.0),
        LightRig {
            kind: LightKind::Point,
            color: accent_rgb,
            intensity: 20.0,
            range: 9.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(glow, Flicker::steady(18.0, 5.0, 1.1));
    let fill = ctx.spawn_light(
        Placement::at(0.0, VLT_SCREEN_Y, VLT_SCREEN_Z + 3.0),
        LightRig {
            kind: LightKind::Point,
            color: accent_rgb.scaled(0.85),
            intensity: 18.0,
            range: 10.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(fill, Flicker::steady(16.0, 4.0, 0.8));

    // Server racks along the left wall
    let dark = Surface::matte(Rgb8::new(0x08, 0x08, 0x10), 0.8);
    let chrome = Surface {
        metalness: 0.85,
        ..Surface::matte(Rgb8::new(0x30, 0x34, 0x3c), 0.3)
    };
    for i in 0..3 {
        let rz = -4.0 + i as f32 * 3.5;
        ctx.spawn_prop(
            Placement::at(-9.05, 2.1, rz),
            PropShape::Box { w: 1.4, h: 4.2, d: 0.7 },
            dark,
        );
        ctx.spawn_prop(
            Placement::at(-8.34, 2.1, rz).with_yaw(PI * 0.5),
            PropShape::Plane { w: 1.2, h: 4.0 },
            Surface::textured(panel_map, 0.6).tiled(0.4, 1.6),
        );
        ctx.spawn_prop(
            Placement::at(-9.05, 4.25, rz),
            PropShape::Box { w: 1.3, h: 0.08, d: 0.08 },
            chrome,
        );
        for cy in [0.8f32, 2.0] {
            ctx.spawn_prop(
                Placement::at(-8.5, cy, rz + 0.3),
                PropShape::Box { w: 0.08, h: 0.08, d: 0.55 },
                dark,
            );
        }
        ctx.spawn_prop(
            Placement::at(-8.38, 2.1, rz + 0.55),
            PropShape::Box { w: 0.08, h: 3.8, d: 0.04 },
            Surface::matte(Rgb8::new(0x00, 0x33, 0x11), 0.5).glowing(Rgb8::new(0x00, 0xff, 0x44), 0.4),
        );
    }

    // Operator desk facing the display
    let dz = 2.2;
    ctx.spawn_prop(
        Placement::at(0.0, 0.82, dz),
        PropShape::Box { w: 3.8, h: 0.06, d: 1.0 },
        Surface::matte(Rgb8::new(0x0c, 0x0e, 0x16), 0.7),
    );
    for (lx, lz) in [(-1.7f32, dz - 0.42), (1.7, dz - 0.42), (-1.7, dz + 0.42), (1.7, dz + 0.42)] {
        ctx.spawn_prop(
            Placement::at(lx, 0.41, lz),
            PropShape::Box { w: 0.06, h: 0.82, d: 0.06 },
            chrome,
        );
    }
    ctx.spawn_prop(
        Placement::at(0.0, 0.44, dz),
        PropShape::Box { w: 3.4, h: 0.04, d: 0.16 },
        dark,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 1.28, dz - 0.35),
        PropShape::Box { w: 1.76, h: 0.78, d: 0.06 },
        dark,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 1.28, dz - 0.31),
        PropShape::Plane { w: 1.7, h: 0.72 },
        Surface::matte(Rgb8::new(0x04, 0x0a, 0x14), 0.4).glowing(Rgb8::new(0x0a, 0x1e, 0x3a), 0.55),
    );
    ctx.spawn_prop(
        Placement::at(0.0, 0.95, dz - 0.35),
        PropShape::Box { w: 0.12, h: 0.6, d: 0.1 },
        chrome,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 0.86, dz),
        PropShape::Box { w: 0.72, h: 0.02, d: 0.26 },
        dark,
    );
    ctx.spawn_prop(
        Placement::at(1.2, 1.14, dz - 0.3).with_yaw(-0.3),
        PropShape::Plane { w: 0.82, h: 0.52 },
        Surface::matte(Rgb8::new(0x06, 0x10, 0x04), 0.4).glowing(Rgb8::new(0x0e, 0x22, 0x08), 0.45),
    );
    // Coffee, gone cold
    ctx.spawn_prop(
        Placement::at(-1.1, 0.9, dz + 0.2),
        PropShape::Cylinder { radius_top: 0.045, radius_bottom: 0.04, height: 0.1 },
        Surface::matte(Rgb8::new(0x2a, 0x2a, 0x30), 0.6),
    );

    // Ceiling ducts and lit service beams
    for dx in [-7.5f32, -2.5, 2.5, 7.5] {
        ctx.spawn_prop(
            Placement::at(dx, VLT_H - 0.25, 0.0),
            PropShape::Box { w: 0.22, h: 0.14, d: VLT_D - 1.0 },
            dark,
        );
    }
    for bx in [-6.0f32, 0.0, 6.0] {
        ctx.spawn_prop(
            Placement::at(bx, VLT_H - 0.14, 0.0),
            PropShape::Box { w: 0.38, h: 0.18, d: VLT_D - 1.0 },
            Surface::matte(Rgb8::new(0x0a, 0x0e, 0x1a), 0.7),
        );
        ctx.spawn_prop(
            Placement::at(bx, VLT_H - 0.26, 0.0),
            PropShape::Box { w: 0.3, h: 0.04, d: VLT_D - 1.0 },
            Surface::matte(Rgb8::new(0x02, 0x10, 0x2a), 0.5).glowing(Rgb8::new(0x00, 0x55, 0xcc), 0.8),
        );
        for pz in [-5.0f32, -1.5, 2.0] {
            ctx.spawn_light(
                Placement::at(bx, VLT_H - 0.45, pz),
                LightRig {
                    kind: LightKind::Point,
                    color: Rgb8::new(0x33, 0x66, 0xcc),
                    intensity: 10.0,
                    range: 7.0,
                    shadows: false,
                },
            );
        }
    }

    // Floor guide strips along the flanks
    for sx in [-1.0f32, 1.0] {
        ctx.spawn_prop(
            Placement::at(sx * (VLT_W * 0.5 - 0.1), 0.03, 0.0),
            PropShape::Box { w: 0.08, h: 0.06, d: VLT_D - 0.5 },
            Surface::matte(Rgb8::new(0x01, 0x0a, 0x22), 0.5).glowing(Rgb8::new(0x00, 0x44, 0xcc), 0.9),
        );
        ctx.spawn_light(
            Placement::at(sx * (VLT_W * 0.5 - 0.4), 0.2, 0.0),
            LightRig {
                kind: LightKind::Point,
                color: Rgb8::new(0x00, 0x44, 0xff),
                intensity: 6.0,
                range: 4.0,
                shadows: false,
            },
        );
    }

    // UPS cabinets on the right wall, one with a fault lamp
    for (uz, fault) in [(-3.0f32, false), (1.5, true)] {
        ctx.spawn_prop(
            Placement::at(9.35, 0.8, uz),
            PropShape::Box { w: 0.9, h: 1.6, d: 0.55 },
            dark,
        );
        for (k, sy) in [0.4f32, 0.7, 1.0, 1.3].into_iter().enumerate() {
            let (c, e) = if fault && k == 3 {
                (Rgb8::new(0x44, 0x00, 0x00), Rgb8::new(0xcc, 0x11, 0x11))
            } else {
                (Rgb8::new(0x00, 0x33, 0x11), Rgb8::new(0x00, 0xcc, 0x44))
            };
            ctx.spawn_prop(
                Placement::at(8.88, sy, uz + 0.18),
                PropShape::Box { w: 0.02, h: 0.04, d: 0.04 },
                Surface::matte(c, 0.5).glowing(e, 0.7),
            );
        }
    }

    ctx.spawn_aimed_light(
        Placement::at(-5.0, VLT_H, 5.0),
        LightRig {
            kind: LightKind::Directional,
            color: Rgb8::new(0x11, 0x22, 0xaa),
            intensity: 1.5,
            range: 0.0,
            shadows: true,
        },
        Vec3::new(0.0, 1.5, -2.0),
    );

    // Coolant haze rising through the grate
    let mut rng = rand::thread_rng();
    let count = ctx.particle_count(200);
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * (VLT_W - 1.0),
                rng.gen::<f32>() * VLT_H,
                (rng.gen::<f32>() - 0.5) * (VLT_D - 1.0),
            )
        })
        .collect();
    ctx.world.spawn((DriftParticles {
        positions,
        fall: -0.036,
        wobble_amp: 0.06,
        wobble_freq: 0.4,
        phase_step: 0.5,
        floor_y: 0.0,
        ceiling_y: VLT_H,
        color: Rgb8::new(0x44, 0x88, 0xff),
        size: 0.018,
        opacity: 0.25,
    },));

    let station = CameraStation {
        pos: Vec3::new(0.0, 2.0, 7.5),
        look: Vec3::new(0.0, 2.3, -6.0),
    };
    RoomRig {
        room: RoomKey::Vault,
        spawn: CameraSpawn { pos: station.pos, look_at: station.look },
        eye_height: 2.0,
        bounds: None,
        stairs: None,
        stair_destination: None,
        screen: if total > 0 { Some(ScreenRig { entity: screen, total }) } else { None },
        showcase: Some(ShowcaseRig {
            stations: vec![station],
            pos_ease: 0.04,
            look_ease: 0.05,
            sway_x: (0.3, 0.1),
            sway_y: (0.05, 0.18),
            look_sway_x: (0.4, 0.07),
        }),
        portrait: None,
        glide_z: None,
        background: Rgb8::new(0x01, 0x02, 0x05),
        fog: Some(FogRig { color: Rgb8::new(0x01, 0x02, 0x05), density: 0.042 }),
        ambient: (Rgb8::new(0x05, 0x08, 0x12), 15.0),
        fov_wide: 65.0,
        fov_narrow: 72.0,
        wasd: false,
        parallax: false,
    }
}

/// Six-sided room box. The facing pair of walls takes `ends`, the
/// flanks `sides`.
fn chamber_shell(
    ctx: &mut BuildCtx<'_>,
    w: f32,
    h: f32,
    d: f32,
    floor: Surface,
    ceiling: Surface,
    ends: Surface,
    sides: Surface,
) {
    ctx.spawn_prop(
        Placement { pos: Vec3::ZERO, rot: Vec3::new(-PI * 0.5, 0.0, 0.0) },
        PropShape::Plane { w, h: d },
        floor,
    );
    ctx.spawn_prop(
        Placement { pos: Vec3::new(0.0, h, 0.0), rot: Vec3::new(PI * 0.5, 0.0, 0.0) },
        PropShape::Plane { w, h: d },
        ceiling,
    );
    ctx.spawn_prop(
        Placement::at(0.0, h * 0.5, -d * 0.5),
        PropShape::Plane { w, h },
        ends,
    );
    ctx.spawn_prop(
        Placement::at(0.0, h * 0.5, d * 0.5).with_yaw(PI),
        PropShape::Plane { w, h },
        ends,
    );
    ctx.spawn_prop(
        Placement::at(-w * 0.5, h * 0.5, 0.0).with_yaw(PI * 0.5),
        PropShape::Plane { w: d, h },
        sides,
    );
    ctx.spawn_prop(
        Placement::at(w * 0.5, h * 0.5, 0.0).with_yaw(-PI * 0.5),
        PropShape::Plane { w: d, h },
        sides,
    );
}

/// Lectern with the dormant laptop, center stage.
fn spawn_lectern(ctx: &mut BuildCtx<'_>) {
    let body = Surface::matte(Rgb8::new(0x11, 0x11, 0x18), 0.7);
    let metal = Surface {
        metalness: 0.7,
        ..Surface::matte(Rgb8::new(0x22, 0x22, 0x26), 0.4)
    };
    let lz = -6.5;
    ctx.spawn_prop(
        Placement::at(0.0, 1.32, lz),
        PropShape::Box { w: 0.9, h: 0.06, d: 0.55 },
        body,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 0.83, lz - 0.24),
        PropShape::Box { w: 0.82, h: 1.0, d: 0.05 },
        Surface::matte(Rgb8::new(0x0e, 0x0e, 0x16), 0.75),
    );
    for sx in [-0.38f32, 0.38] {
        ctx.spawn_prop(
            Placement::at(sx, 0.76, lz),
            PropShape::Box { w: 0.06, h: 1.0, d: 0.5 },
            metal,
        );
    }
    ctx.spawn_prop(
        Placement::at(0.0, 0.24, lz),
        PropShape::Box { w: 0.82, h: 0.04, d: 0.5 },
        body,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 1.36, lz),
        PropShape::Box { w: 0.55, h: 0.02, d: 0.38 },
        Surface {
            metalness: 0.8,
            ..Surface::matte(Rgb8::new(0x1c, 0x1c, 0x1c), 0.5)
        },
    );
    // Lid cracked open toward the seats
    ctx.spawn_prop(
        Placement::at(0.0, 1.54, lz - 0.24).with_pitch(-0.35),
        PropShape::Box { w: 0.52, h: 0.34, d: 0.01 },
        Surface::matte(Rgb8::new(0x05, 0x06, 0x0c), 0.4).glowing(Rgb8::new(0x11, 0x33, 0xaa), 0.35),
    );
    ctx.spawn_prop(
        Placement::at(0.28, 1.5, lz),
        PropShape::Cylinder { radius_top: 0.008, radius_bottom: 0.008, height: 0.3 },
        metal,
    );
    ctx.spawn_prop(
        Placement::at(0.28, 1.66, lz),
        PropShape::Sphere { radius: 0.022 },
        metal,
    );
}

/// Ring chandelier: drop rod, hoop, radial arms, candles with unlit
/// flames, and optionally a point light per candle.
fn spawn_chandelier_ring(
    ctx: &mut BuildCtx<'_>,
    rod_top: f32,
    hoop_y: f32,
    radius: f32,
    tube: f32,
    arms: usize,
    candle_light: Option<(f32, f32)>,
) {
    let metal = Surface {
        metalness: 0.88,
        ..Surface::matte(Rgb8::new(0x09, 0x09, 0x12), 0.38)
    };
    let rod_h = rod_top - hoop_y;
    ctx.spawn_prop(
        Placement::at(0.0, hoop_y + rod_h * 0.5, 0.0),
        PropShape::Cylinder { radius_top: 0.022, radius_bottom: 0.022, height: rod_h },
        metal,
    );
    ctx.spawn_prop(
        Placement::at(0.0, hoop_y, 0.0),
        PropShape::Torus { radius, tube },
        metal,
    );
    let wax = Surface::matte(Rgb8::new(0xc8, 0xb0, 0x80), 0.92);
    let mut flame = Surface::matte(Rgb8::new(0xff, 0x90, 0x22), 1.0);
    flame.unlit = true;
    for i in 0..arms {
        let ang = (i as f32 / arms as f32) * PI * 2.0;
        let (sin, cos) = ang.sin_cos();
        ctx.spawn_prop(
            Placement {
                pos: Vec3::new(cos * radius * 0.5, hoop_y, sin * radius * 0.5),
                rot: Vec3::new(0.0, ang, PI * 0.5),
            },
            PropShape::Cylinder { radius_top: 0.014, radius_bottom: 0.014, height: radius },
            metal,
        );
        ctx.spawn_prop(
            Placement::at(cos * radius, hoop_y + 0.1, sin * radius),
            PropShape::Cylinder { radius_top: 0.02, radius_bottom: 0.024, height: 0.2 },
            wax,
        );
        ctx.spawn_prop(
            Placement::at(cos * radius, hoop_y + 0.26, sin * radius),
            PropShape::Sphere { radius: 0.026 },
            flame,
        );
        if let Some((intensity, range)) = candle_light {
            ctx.spawn_light(
                Placement::at(cos * radius, hoop_y + 0.3, sin * radius),
                LightRig {
                    kind: LightKind::Point,
                    color: Rgb8::new(0xff, 0xaa, 0x44),
                    intensity,
                    range,
                    shadows: false,
                },
            );
        }
    }
    ctx.spawn_prop(
        Placement::at(0.0, hoop_y - 0.35, 0.0),
        PropShape::Sphere { radius: 0.07 },
        metal,
    );
}

/// Wall sconce: bracket, naked flame, a warm flickering point.
fn spawn_sconce(ctx: &mut BuildCtx<'_>, pos: Vec3, normal: Vec3, intensity: f32, range: f32) {
    let iron = Surface {
        metalness: 0.85,
        ..Surface::matte(Rgb8::new(0x0e, 0x0e, 0x12), 0.35)
    };
    ctx.spawn_prop(
        Placement { pos, rot: Vec3::ZERO },
        PropShape::Box { w: 0.1, h: 0.36, d: 0.1 },
        iron,
    );
    let mut flame = Surface::matte(Rgb8::new(0xff, 0x90, 0x22), 1.0);
    flame.unlit = true;
    let fp = pos + normal * 0.26 + Vec3::new(0.0, 0.25, 0.0);
    ctx.spawn_prop(
        Placement { pos: fp, rot: Vec3::ZERO },
        PropShape::Sphere { radius: 0.03 },
        flame,
    );
    let light = ctx.spawn_light(
        Placement { pos: fp + normal * 0.1, rot: Vec3::ZERO },
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xaa, 0x44),
            intensity,
            range,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(
        light,
        Flicker {
            base: intensity * 0.9,
            amp: intensity * 0.18,
            freq: 12.0,
            slow_amp: 0.0,
            slow_freq: 0.0,
            jitter: intensity * 0.2,
        },
    );
}

/// Fireplace centered on the gallery's rear wall, fire and all.
fn spawn_fireplace(ctx: &mut BuildCtx<'_>) {
    let fz = -GAL_D * 0.5 + 0.25;
    let stone = Surface::matte(Rgb8::new(0x2a, 0x24, 0x18), 0.9);
    let dark = Surface::matte(Rgb8::new(0x14, 0x0e, 0x06), 0.85);
    ctx.spawn_prop(
        Placement::at(0.0, 1.4, fz),
        PropShape::Box { w: 3.1, h: 2.8, d: 0.5 },
        stone,
    );
    let mut void = Surface::matte(Rgb8::new(0x05, 0x03, 0x02), 1.0);
    void.unlit = true;
    ctx.spawn_prop(
        Placement::at(0.0, 0.9, fz + 0.01),
        PropShape::Box { w: 2.2, h: 1.8, d: 0.6 },
        void,
    );
    ctx.spawn_prop(
        Placement::at(0.0, 2.86, fz + 0.1),
        PropShape::Box { w: 3.4, h: 0.12, d: 0.38 },
        dark,
    );

    let mut fire = Surface::matte(Rgb8::new(0xff, 0x66, 0x00), 1.0);
    fire.unlit = true;
    fire.opacity = 0.85;
    let fire_alloc = ctx.alloc();
    ctx.world.spawn((
        Placement::at(0.0, 0.9, fz + 0.15),
        PropShape::Plane { w: 1.2, h: 1.4 },
        fire,
        fire_alloc,
        Bob { base_y: 0.9, amp: 0.04, freq: 8.0, phase: 0.0 },
    ));
    let fire_light = ctx.spawn_light(
        Placement::at(0.0, 1.5, fz + 1.25),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0x66, 0x00),
            intensity: 60.0,
            range: 10.0,
            shadows: true,
        },
    );
    let _ = ctx.world.insert_one(
        fire_light,
        Flicker { base: 55.0, amp: 10.0, freq: 18.0, slow_amp: 0.0, slow_freq: 0.0, jitter: 20.0 },
    );

    let iron = Surface {
        metalness: 0.85,
        ..Surface::matte(Rgb8::new(0x0e, 0x0e, 0x12), 0.35)
    };
    for sx in [-0.6f32, 0.6] {
        ctx.spawn_prop(
            Placement::at(sx, 0.12, fz + 0.5),
            PropShape::Cylinder { radius_top: 0.03, radius_bottom: 0.03, height: 0.24 },
            iron,
        );
    }
    // Mantel clock and candelabra pair
    ctx.spawn_prop(
        Placement::at(0.0, 3.12, fz + 0.08),
        PropShape::Box { w: 0.3, h: 0.4, d: 0.15 },
        dark,
    );
    let mut flame = Surface::matte(Rgb8::new(0xff, 0x90, 0x22), 1.0);
    flame.unlit = true;
    for sx in [-0.9f32, 0.9] {
        ctx.spawn_prop(
            Placement::at(sx, 3.05, fz + 0.08),
            PropShape::Cylinder { radius_top: 0.016, radius_bottom: 0.022, height: 0.22 },
            iron,
        );
        ctx.spawn_prop(
            Placement::at(sx, 3.2, fz + 0.08),
            PropShape::Sphere { radius: 0.022 },
            flame,
        );
        ctx.spawn_light(
            Placement::at(sx, 3.25, fz + 0.25),
            LightRig {
                kind: LightKind::Point,
                color: Rgb8::new(0xff, 0x99, 0x44),
                intensity: 12.0,
                range: 4.0,
                shadows: false,
            },
        );
    }
}

/// Armchair, side table and oil lamp in the gallery's south-west
/// corner, plus the corner bookcase opposite.
fn spawn_parlor_corner(ctx: &mut BuildCtx<'_>) {
    let leather = Surface::matte(Rgb8::new(0x28, 0x0c, 0x04), 0.85);
    let fabric = Surface::matte(Rgb8::new(0x1a, 0x0a, 0x06), 0.95);
    let darkwood = Surface::matte(Rgb8::new(0x1e, 0x10, 0x08), 0.8);
    let (ax, az) = (-4.8, 5.0);
    ctx.spawn_prop(
        Placement::at(ax, 0.5, az),
        PropShape::Box { w: 0.85, h: 0.25, d: 0.8 },
        fabric,
    );
    ctx.spawn_prop(
        Placement::at(ax, 1.05, az + 0.3),
        PropShape::Box { w: 0.85, h: 0.95, d: 0.22 },
        leather,
    );
    for sx in [-0.5f32, 0.5] {
        ctx.spawn_prop(
            Placement::at(ax + sx, 0.72, az),
            PropShape::Box { w: 0.18, h: 0.45, d: 0.8 },
            leather,
        );
    }
    for (sx, sz) in [(-0.35f32, -0.3f32), (0.35, -0.3), (-0.35, 0.3), (0.35, 0.3)] {
        ctx.spawn_prop(
            Placement::at(ax + sx, 0.18, az + sz),
            PropShape::Box { w: 0.07, h: 0.36, d: 0.07 },
            darkwood,
        );
    }

    let (tx, tz) = (-3.95, 4.4);
    ctx.spawn_prop(
        Placement::at(tx, 0.62, tz),
        PropShape::Cylinder { radius_top: 0.32, radius_bottom: 0.32, height: 0.05 },
        darkwood,
    );
    ctx.spawn_prop(
        Placement::at(tx, 0.3, tz),
        PropShape::Cylinder { radius_top: 0.035, radius_bottom: 0.06, height: 0.6 },
        darkwood,
    );
    ctx.spawn_prop(
        Placement::at(tx - 0.1, 0.67, tz + 0.05).with_yaw(0.4),
        PropShape::Box { w: 0.28, h: 0.05, d: 0.2 },
        Surface::matte(Rgb8::new(0x3a, 0x1a, 0x00), 0.9),
    );
    // Oil lamp
    ctx.spawn_prop(
        Placement::at(tx + 0.12, 0.7, tz - 0.08),
        PropShape::Cylinder { radius_top: 0.03, radius_bottom: 0.05, height: 0.12 },
        Surface {
            metalness: 0.7,
            ..Surface::matte(Rgb8::new(0x4a, 0x38, 0x10), 0.4)
        },
    );
    let mut globe = Surface::matte(Rgb8::new(0xff, 0xc8, 0x66), 1.0);
    globe.unlit = true;
    globe.opacity = 0.85;
    ctx.spawn_prop(
        Placement::at(tx + 0.12, 0.82, tz - 0.08),
        PropShape::Sphere { radius: 0.045 },
        globe,
    );
    let lamp = ctx.spawn_light(
        Placement::at(tx + 0.12, 0.9, tz - 0.08),
        LightRig {
            kind: LightKind::Point,
            color: Rgb8::new(0xff, 0xaa, 0x44),
            intensity: 20.0,
            range: 5.0,
            shadows: false,
        },
    );
    let _ = ctx.world.insert_one(
        lamp,
        Flicker { base: 18.0, amp: 4.0, freq: 14.0, slow_amp: 0.0, slow_freq: 0.0, jitter: 8.0 },
    );

    // Corner bookcase stuffed with whatever fits
    let case_x = 6.6;
    ctx.spawn_prop(
        Placement::at(case_x, 1.4, 5.0),
        PropShape::Box { w: 0.35, h: 2.8, d: 1.2 },
        Surface::matte(Rgb8::new(0x1a, 0x0e, 0x04), 0.85),
    );
    let spines = [
        Rgb8::new(0x3a, 0x08, 0x08),
        Rgb8::new(0x08, 0x1a, 0x08),
        Rgb8::new(0x08, 0x08, 0x3a),
        Rgb8::new(0x1a, 0x10, 0x08),
        Rgb8::new(0x3a, 0x1a, 0x00),
    ];
    let mut rng = rand::thread_rng();
    for shelf in 0..4 {
        let sy = 0.35 + shelf as f32 * 0.65;
        ctx.spawn_prop(
            Placement::at(case_x - 0.21, sy, 5.0),
            PropShape::Box { w: 0.07, h: 0.03, d: 1.1 },
            darkwood,
        );
        let mut bz = 4.55;
        while bz < 5.42 {
            let bw = 0.04 + rng.gen::<f32>() * 0.055;
            let bh = 0.25 + rng.gen::<f32>() * 0.22;
            let spine = spines[rng.gen_range(0..spines.len())];
            ctx.spawn_prop(
                Placement::at(case_x - 0.14, sy + bh * 0.5 + 0.02, bz)
                    .with_yaw((rng.gen::<f32>() - 0.5) * 0.1),
                PropShape::Box { w: 0.18, h: bh, d: bw },
                Surface::matte(spine, 0.9),
            );
            bz += bw + 0.012;
        }
    }
}
