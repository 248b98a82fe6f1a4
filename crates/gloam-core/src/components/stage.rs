//! Static stage components: placement, shape, and surface of props.

use serde::{Deserialize, Serialize};

use super::common::Vec3;
use crate::ledger::ResourceId;
use gloam_logic::color::Rgb8;

/// Where a prop sits and how it is oriented (XYZ euler, radians).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    pub pos: Vec3,
    pub rot: Vec3,
}

impl Placement {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self { pos: Vec3::new(x, y, z), rot: Vec3::ZERO }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.rot.y = yaw;
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.rot.x = pitch;
        self
    }
}

/// Renderable geometry of a prop. Dimensions are baked in; placement is
/// separate so transforms never rebuild geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PropShape {
    Box { w: f32, h: f32, d: f32 },
    /// Flat quad in the local XY plane, facing +Z before rotation.
    Plane { w: f32, h: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Sphere { radius: f32 },
    Cone { radius: f32, height: f32 },
    Torus { radius: f32, tube: f32 },
}

/// Material description for a prop. The viewer turns this into whatever
/// its renderer wants; scene code only ever swaps `texture` on content
/// changes, never the shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub color: Rgb8,
    pub texture: Option<ResourceId>,
    pub bump: Option<ResourceId>,
    /// UV tiling applied to `texture` and `bump`.
    pub repeat: (f32, f32),
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: Option<Rgb8>,
    pub emissive_strength: f32,
    pub opacity: f32,
    pub unlit: bool,
    /// Invisible surfaces exist for hit-testing only.
    pub visible: bool,
}

impl Surface {
    pub fn matte(color: Rgb8, roughness: f32) -> Self {
        Self {
            color,
            texture: None,
            bump: None,
            repeat: (1.0, 1.0),
            roughness,
            metalness: 0.0,
            emissive: None,
            emissive_strength: 0.0,
            opacity: 1.0,
            unlit: false,
            visible: true,
        }
    }

    pub fn textured(texture: ResourceId, roughness: f32) -> Self {
        Self { texture: Some(texture), ..Self::matte(Rgb8::new(255, 255, 255), roughness) }
    }

    pub fn invisible() -> Self {
        Self { visible: false, ..Self::matte(Rgb8::default(), 1.0) }
    }

    pub fn with_bump(mut self, bump: ResourceId) -> Self {
        self.bump = Some(bump);
        self
    }

    pub fn tiled(mut self, u: f32, v: f32) -> Self {
        self.repeat = (u, v);
        self
    }

    pub fn tinted(mut self, color: Rgb8) -> Self {
        self.color = color;
        self
    }

    pub fn glowing(mut self, color: Rgb8, strength: f32) -> Self {
        self.emissive = Some(color);
        self.emissive_strength = strength;
        self
    }
}

/// Renderer-side allocations backing a prop, released through the ledger
/// exactly once at teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocated {
    pub geometry: ResourceId,
    pub material: ResourceId,
}
