//! Ray picking against the flat clickable list.
//!
//! The pick pass intersects registered [`Clickable`] shapes only, never
//! the full world. Wall quads may be carried by a door pivot, so their
//! Placement is already in world space by the time a ray arrives; only
//! yaw is honored for orientation, which is exact for doors and walls and
//! well within the oversized click plane slop for gently swaying props.

use hecs::{Entity, World};

use crate::components::{ClickShape, Clickable, Placement, Vec3};

/// World-space ray from the camera through the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir: dir.normalize() }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Nearest clickable hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub t: f32,
    pub point: Vec3,
}

/// Intersect a ray with one placed click shape; returns distance along
/// the ray when it hits.
pub fn intersect(ray: &Ray, placement: &Placement, shape: &ClickShape) -> Option<f32> {
    match *shape {
        ClickShape::Wall { w, h } => {
            let yaw = placement.rot.y;
            let (sin, cos) = yaw.sin_cos();
            let normal = Vec3::new(sin, 0.0, cos);
            let denom = ray.dir.dot(&normal);
            if denom.abs() < 1e-6 {
                return None;
            }
            let t = (placement.pos - ray.origin).dot(&normal) / denom;
            if t <= 0.0 {
                return None;
            }
            let p = ray.point_at(t);
            let right = Vec3::new(cos, 0.0, -sin);
            let u = (p - placement.pos).dot(&right);
            let v = p.y - placement.pos.y;
            if u.abs() <= w * 0.5 && v.abs() <= h * 0.5 {
                Some(t)
            } else {
                None
            }
        }
        ClickShape::Floor { w, d } => {
            if ray.dir.y.abs() < 1e-6 {
                return None;
            }
            let t = (placement.pos.y - ray.origin.y) / ray.dir.y;
            if t <= 0.0 {
                return None;
            }
            let p = ray.point_at(t);
            if (p.x - placement.pos.x).abs() <= w * 0.5 && (p.z - placement.pos.z).abs() <= d * 0.5
            {
                Some(t)
            } else {
                None
            }
        }
    }
}

/// Nearest hit among every clickable in the world.
pub fn pick_nearest(world: &World, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (entity, (placement, clickable)) in world.query::<(&Placement, &Clickable)>().iter() {
        if let Some(t) = intersect(ray, placement, &clickable.shape) {
            if best.map_or(true, |hit| t < hit.t) {
                best = Some(PickHit { entity, t, point: ray.point_at(t) });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TargetAction;

    fn wall_at(world: &mut World, z: f32, yaw: f32) -> Entity {
        world.spawn((
            Placement::at(0.0, 1.5, z).with_yaw(yaw),
            Clickable {
                shape: ClickShape::Wall { w: 2.0, h: 3.0 },
                action: TargetAction::Floor,
            },
        ))
    }

    #[test]
    fn test_straight_on_hit() {
        let mut world = World::new();
        let wall = wall_at(&mut world, -5.0, 0.0);
        let ray = Ray::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick_nearest(&world, &ray).expect("should hit");
        assert_eq!(hit.entity, wall);
        assert!((hit.t - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss_outside_extents() {
        let mut world = World::new();
        wall_at(&mut world, -5.0, 0.0);
        let ray = Ray::new(Vec3::new(3.0, 1.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pick_nearest(&world, &ray).is_none());
    }

    #[test]
    fn test_nearest_of_two_wins() {
        let mut world = World::new();
        let _far = wall_at(&mut world, -8.0, 0.0);
        let near = wall_at(&mut world, -3.0, 0.0);
        let ray = Ray::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick_nearest(&world, &ray).expect("should hit");
        assert_eq!(hit.entity, near);
    }

    #[test]
    fn test_yawed_wall_hit() {
        let mut world = World::new();
        // Wall rotated to face +X, placed on the -x side.
        let wall = world.spawn((
            Placement::at(-5.0, 1.5, 0.0).with_yaw(std::f32::consts::FRAC_PI_2),
            Clickable {
                shape: ClickShape::Wall { w: 2.0, h: 3.0 },
                action: TargetAction::Floor,
            },
        ));
        let ray = Ray::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let hit = pick_nearest(&world, &ray).expect("should hit");
        assert_eq!(hit.entity, wall);
    }

    #[test]
    fn test_floor_hit_from_above() {
        let mut world = World::new();
        let floor = world.spawn((
            Placement::at(0.0, 0.0, -6.0),
            Clickable {
                shape: ClickShape::Floor { w: 10.0, d: 28.0 },
                action: TargetAction::Floor,
            },
        ));
        let ray = Ray::new(Vec3::new(0.0, 1.75, 0.0), Vec3::new(0.0, -0.5, -1.0));
        let hit = pick_nearest(&world, &ray).expect("should hit");
        assert_eq!(hit.entity, floor);
        assert!(hit.point.y.abs() < 1e-4);
    }

    #[test]
    fn test_behind_ray_never_hits() {
        let mut world = World::new();
        wall_at(&mut world, 5.0, 0.0);
        let ray = Ray::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pick_nearest(&world, &ray).is_none());
    }
}
