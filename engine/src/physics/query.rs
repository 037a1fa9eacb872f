//! Physics query interface consumed by the boom resolver.
//!
//! Both queries are pure reads against scene geometry. `Ok(None)` means the
//! query ran and found nothing; `Err` means the world could not be queried.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Surface classification attached to every collider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceTag {
    #[default]
    Untagged,
    /// Ground geometry. Excluded from anticipatory pull-in.
    Floor,
    Wall,
    Prop,
}

impl SurfaceTag {
    #[inline]
    pub fn is_floor(self) -> bool {
        self == SurfaceTag::Floor
    }
}

/// Result of a line test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHit {
    /// World-space contact point
    pub point: Vec3,
    /// Outward surface normal at `point`
    pub normal: Vec3,
    /// Distance from the line start to `point`
    pub distance: f32,
    pub tag: SurfaceTag,
}

/// Result of a sphere sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepHit {
    /// Distance the sphere centre travelled before touching geometry
    pub distance: f32,
    pub tag: SurfaceTag,
}

/// Scene queries the camera needs from a physics backend.
pub trait PhysicsWorld {
    /// First intersection on the segment `start..end`.
    fn line_test(&self, start: Vec3, end: Vec3) -> Result<Option<LineHit>, QueryError>;

    /// First contact of a sphere of `radius` moved from `origin` along
    /// `direction` (need not be normalized) for at most `max_distance`.
    fn sphere_sweep(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
    ) -> Result<Option<SweepHit>, QueryError>;
}

impl<W: PhysicsWorld + ?Sized> PhysicsWorld for &W {
    fn line_test(&self, start: Vec3, end: Vec3) -> Result<Option<LineHit>, QueryError> {
        (**self).line_test(start, end)
    }

    fn sphere_sweep(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
    ) -> Result<Option<SweepHit>, QueryError> {
        (**self).sphere_sweep(origin, direction, radius, max_distance)
    }
}
