//! Reference physics world
//!
//! A flat list of tagged box colliders answering the two camera queries by
//! brute force. Good enough for demos and tests; a game would plug its own
//! backend in behind [`PhysicsWorld`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::query::{LineHit, PhysicsWorld, SurfaceTag, SweepHit};
use crate::error::QueryError;

/// A static box collider with a surface tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub bounds: Aabb,
    pub tag: SurfaceTag,
}

impl Collider {
    pub fn new(bounds: Aabb, tag: SurfaceTag) -> Self {
        Self { bounds, tag }
    }
}

/// Collection of colliders implementing [`PhysicsWorld`].
///
/// Colliders that already contain the query origin are skipped, so a pivot
/// standing inside a trigger volume or on a floor slab does not block itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColliderScene {
    colliders: Vec<Collider>,
    /// When false every query fails with [`QueryError::WorldNotReady`]
    ready: bool,
}

impl Default for ColliderScene {
    fn default() -> Self {
        Self::new()
    }
}

impl ColliderScene {
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            ready: true,
        }
    }

    /// Adds a collider and returns its index.
    pub fn insert(&mut self, collider: Collider) -> usize {
        self.colliders.push(collider);
        self.colliders.len() - 1
    }

    /// Convenience for a tagged box given its two corners.
    pub fn add_box(&mut self, a: Vec3, b: Vec3, tag: SurfaceTag) -> usize {
        self.insert(Collider::new(Aabb::new(a, b), tag))
    }

    pub fn remove(&mut self, index: usize) -> Option<Collider> {
        (index < self.colliders.len()).then(|| self.colliders.remove(index))
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Marks the world (un)available, e.g. while a level is streaming in.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    fn check_ready(&self) -> Result<(), QueryError> {
        if self.ready {
            Ok(())
        } else {
            Err(QueryError::WorldNotReady)
        }
    }
}

impl PhysicsWorld for ColliderScene {
    fn line_test(&self, start: Vec3, end: Vec3) -> Result<Option<LineHit>, QueryError> {
        self.check_ready()?;

        let segment = end - start;
        let length = segment.length();
        if length <= f32::EPSILON {
            return Ok(None);
        }
        let dir = segment / length;

        let mut closest: Option<LineHit> = None;
        for collider in &self.colliders {
            if collider.bounds.contains(start) {
                continue;
            }
            let Some(t) = collider.bounds.ray_entry(start, dir) else {
                continue;
            };
            if t > length || closest.is_some_and(|hit| t >= hit.distance) {
                continue;
            }
            let point = start + dir * t;
            closest = Some(LineHit {
                point,
                normal: collider.bounds.surface_normal(point),
                distance: t,
                tag: collider.tag,
            });
        }
        Ok(closest)
    }

    fn sphere_sweep(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
    ) -> Result<Option<SweepHit>, QueryError> {
        self.check_ready()?;

        let Some(dir) = direction.try_normalize() else {
            return Ok(None);
        };

        let mut closest: Option<SweepHit> = None;
        for collider in &self.colliders {
            let grown = collider.bounds.inflated(radius);
            if grown.contains(origin) {
                continue;
            }
            let Some(t) = grown.ray_entry(origin, dir) else {
                continue;
            };
            if t > max_distance || closest.is_some_and(|hit| t >= hit.distance) {
                continue;
            }
            closest = Some(SweepHit {
                distance: t,
                tag: collider.tag,
            });
        }
        Ok(closest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_scene() -> ColliderScene {
        let mut scene = ColliderScene::new();
        // Wall slab across +Z at z in [3, 4]
        scene.add_box(
            Vec3::new(-5.0, -5.0, 3.0),
            Vec3::new(5.0, 5.0, 4.0),
            SurfaceTag::Wall,
        );
        scene
    }

    #[test]
    fn test_line_hits_wall() {
        let scene = wall_scene();
        let hit = scene
            .line_test(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0))
            .unwrap()
            .expect("line should hit the wall");
        assert!((hit.distance - 3.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_Z);
        assert_eq!(hit.tag, SurfaceTag::Wall);
    }

    #[test]
    fn test_line_shorter_than_wall_distance_misses() {
        let scene = wall_scene();
        let hit = scene.line_test(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.9)).unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn test_closest_collider_wins() {
        let mut scene = wall_scene();
        scene.add_box(
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.5),
            SurfaceTag::Prop,
        );
        let hit = scene
            .line_test(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0))
            .unwrap()
            .unwrap();
        assert_eq!(hit.tag, SurfaceTag::Prop);
        assert!((hit.distance - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sweep_contacts_radius_early() {
        let scene = wall_scene();
        let hit = scene
            .sphere_sweep(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 0.5, 10.0)
            .unwrap()
            .unwrap();
        assert!((hit.distance - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_sweep_respects_max_distance() {
        let scene = wall_scene();
        let hit = scene
            .sphere_sweep(Vec3::ZERO, Vec3::Z, 0.5, 2.0)
            .unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn test_origin_inside_collider_is_ignored() {
        let mut scene = ColliderScene::new();
        scene.add_box(Vec3::splat(-1.0), Vec3::splat(1.0), SurfaceTag::Floor);
        assert!(scene.line_test(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)).unwrap().is_none());
        assert!(scene.sphere_sweep(Vec3::ZERO, Vec3::Z, 0.2, 5.0).unwrap().is_none());
    }

    #[test]
    fn test_not_ready_world_fails() {
        let mut scene = wall_scene();
        scene.set_ready(false);
        assert_eq!(
            scene.line_test(Vec3::ZERO, Vec3::Z),
            Err(QueryError::WorldNotReady)
        );
        assert_eq!(
            scene.sphere_sweep(Vec3::ZERO, Vec3::Z, 0.5, 5.0),
            Err(QueryError::WorldNotReady)
        );
    }

    #[test]
    fn test_readiness_and_clear() {
        let mut scene = wall_scene();
        assert!(scene.is_ready());
        scene.set_ready(false);
        assert!(!scene.is_ready());
        scene.set_ready(true);

        scene.add_box(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -0.5, 1.0),
            SurfaceTag::Floor,
        );
        let floors = scene.iter().filter(|c| c.tag.is_floor()).count();
        assert_eq!((scene.len(), floors), (2, 1));

        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.line_test(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)), Ok(None));
    }

    #[test]
    fn test_remove_collider() {
        let mut scene = wall_scene();
        assert_eq!(scene.len(), 1);
        assert!(scene.remove(0).is_some());
        assert!(scene.remove(0).is_none());
        assert!(scene.is_empty());
    }
}
