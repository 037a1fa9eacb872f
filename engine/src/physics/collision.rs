//! Collision primitives
//!
//! Axis-aligned boxes and the slab-method ray test used by the reference
//! scene. A sphere sweep is answered as a ray test against the box inflated by
//! the sphere radius (conservative at the box corners).
//!
//! # Example
//!
//! ```ignore
//! use boom_rig_engine::physics::collision::Aabb;
//! use glam::Vec3;
//!
//! let wall = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
//! let t = wall.ray_entry(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
//! assert_eq!(t, Some(4.0));
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Builds a box from two opposite corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Box grown by `radius` on every side.
    #[inline]
    pub fn inflated(&self, radius: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(radius),
            max: self.max + Vec3::splat(radius),
        }
    }

    /// Distance along `dir` (normalized) at which a ray from `origin` enters
    /// the box. Returns `None` for a miss, for a box behind the origin, and for
    /// an origin already inside the box.
    pub fn ray_entry(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let (t_enter, t_exit) = slab_interval(origin, dir, self.min, self.max)?;
        if t_enter >= 0.0 && t_enter <= t_exit {
            Some(t_enter)
        } else {
            None
        }
    }

    /// Outward face normal closest to `point` (a point on the surface).
    pub fn surface_normal(&self, point: Vec3) -> Vec3 {
        let center = (self.min + self.max) * 0.5;
        let half = ((self.max - self.min) * 0.5).max(Vec3::splat(f32::EPSILON));
        let n = (point - center) / half;
        let a = n.abs();

        if a.x >= a.y && a.x >= a.z {
            Vec3::new(n.x.signum(), 0.0, 0.0)
        } else if a.y >= a.z {
            Vec3::new(0.0, n.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, n.z.signum())
        }
    }
}

/// Slab-method entry/exit parameters of a ray against a box.
///
/// Returns `None` when the slabs never overlap or the box lies entirely behind
/// the origin.
fn slab_interval(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<(f32, f32)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-10 {
            // Parallel to this slab: must already be between its planes
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t1 = (min[axis] - o) * inv;
        let t2 = (max[axis] - o) * inv;
        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));
    }

    if t_exit >= t_enter && t_exit >= 0.0 {
        Some((t_enter, t_exit))
    } else {
        None
    }
}
