//! Room builders.
//!
//! Each room is constructed exactly once per session: shell, props, door
//! assemblies, lights, particles, screens. Builders return a [`RoomRig`]
//! of handles and knobs for the controller; after the build no geometry
//! is created or destroyed until teardown. Content switches (archive
//! slides, the portrait) swap a single texture id on an existing surface.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use image::RgbaImage;

use gloam_logic::color::Rgb8;
use gloam_logic::content::{ManorContent, RoomKey};
use gloam_logic::stairs::StairRun;
use gloam_logic::tiers::TierSettings;
use gloam_logic::walk::WalkBounds;

use crate::components::{Aim, Allocated, LightRig, Placement, PropShape, Surface, Vec3};
use crate::ledger::{ResourceId, ResourceKind, ResourceLedger};
use crate::textures::TextureFactory;

mod doorway;
mod exterior;
mod furnish;
mod shell;

pub(crate) use doorway::{DoorwayPlan, DOOR_H, DOOR_W};

/// Exponential fog parameters for a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogRig {
    pub color: Rgb8,
    pub density: f32,
}

/// Camera pose a freshly built room starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpawn {
    pub pos: Vec3,
    pub look_at: Vec3,
}

/// The one material slot whose texture swaps when content changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRig {
    pub entity: Entity,
    pub total: usize,
}

/// One resting pose of a chamber's autonomous camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraStation {
    pub pos: Vec3,
    pub look: Vec3,
}

/// Autonomous camera plan for chambers without walking. The camera
/// eases toward the station picked by the focused item and idles with
/// sinusoidal sway; `(amp, freq)` pairs, zero amp disables an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseRig {
    pub stations: Vec<CameraStation>,
    pub pos_ease: f32,
    pub look_ease: f32,
    pub sway_x: (f32, f32),
    pub sway_y: (f32, f32),
    pub look_sway_x: (f32, f32),
}

/// Handles and knobs the controller animates. Built once, never
/// reconstructed while the room lives.
#[derive(Debug, Clone)]
pub struct RoomRig {
    pub room: RoomKey,
    pub spawn: CameraSpawn,
    /// Walker eye height above the floor.
    pub eye_height: f32,
    /// Present in walkable rooms; absent outdoors.
    pub bounds: Option<WalkBounds>,
    pub stairs: Option<StairRun>,
    /// Room entered at the stair summit.
    pub stair_destination: Option<RoomKey>,
    pub screen: Option<ScreenRig>,
    /// Autonomous camera; present in chambers, absent where [`Self::wasd`]
    /// locomotion runs.
    pub showcase: Option<ShowcaseRig>,
    /// Prop whose texture swaps when the resident portrait finishes
    /// loading.
    pub portrait: Option<Entity>,
    /// Dolly range for scroll approach in non-walkable rooms (min z, max z).
    pub glide_z: Option<(f32, f32)>,
    pub background: Rgb8,
    pub fog: Option<FogRig>,
    pub ambient: (Rgb8, f32),
    pub fov_wide: f32,
    pub fov_narrow: f32,
    /// Held-key locomotion enabled.
    pub wasd: bool,
    /// Facade-style pointer parallax instead of walk look.
    pub parallax: bool,
}

/// Build-time context threaded through the room builders. Every texture,
/// geometry and material allocation goes through the ledger here.
pub struct BuildCtx<'a> {
    pub world: &'a mut World,
    pub ledger: &'a mut ResourceLedger,
    pub images: &'a mut BTreeMap<ResourceId, RgbaImage>,
    pub factory: TextureFactory,
    pub settings: TierSettings,
    pub content: &'a ManorContent,
}

impl BuildCtx<'_> {
    pub(crate) fn texture(&mut self, img: RgbaImage) -> ResourceId {
        let id = self.ledger.create(ResourceKind::Texture);
        self.images.insert(id, img);
        id
    }

    /// Fresh geometry + material pair for one prop.
    pub(crate) fn alloc(&mut self) -> Allocated {
        Allocated {
            geometry: self.ledger.create(ResourceKind::Geometry),
            material: self.ledger.create(ResourceKind::Material),
        }
    }

    pub(crate) fn spawn_prop(&mut self, placement: Placement, shape: PropShape, surface: Surface) -> Entity {
        let allocated = self.alloc();
        self.world.spawn((placement, shape, surface, allocated))
    }

    /// Lights carry no renderer allocations; shadow casting is gated by
    /// the tier here so builders never check it themselves.
    pub(crate) fn spawn_light(&mut self, placement: Placement, mut rig: LightRig) -> Entity {
        rig.shadows = rig.shadows && self.settings.shadows;
        self.world.spawn((placement, rig))
    }

    /// Spot and directional lights face a world-space point.
    pub(crate) fn spawn_aimed_light(&mut self, placement: Placement, mut rig: LightRig, aim: Vec3) -> Entity {
        rig.shadows = rig.shadows && self.settings.shadows;
        self.world.spawn((placement, rig, Aim(aim)))
    }

    pub(crate) fn particle_count(&self, base: usize) -> usize {
        ((base as f32 * self.settings.particles_scale) as usize).max(1)
    }
}

/// Build one room into the world. A world only ever holds one room;
/// switching rooms disposes the session first.
pub fn build_room(ctx: &mut BuildCtx<'_>, room: RoomKey) -> RoomRig {
    match room {
        RoomKey::Exterior => exterior::build(ctx),
        RoomKey::Hall => shell::hall(ctx),
        RoomKey::Archive => furnish::archive(ctx),
        RoomKey::Library => furnish::library(ctx),
        RoomKey::Gallery => furnish::gallery(ctx),
        RoomKey::Vault => furnish::vault(ctx),
    }
}
