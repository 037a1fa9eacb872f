//! Transform Module
//!
//! World-space placement of the rig nodes. The pivot is a rotated, translated
//! node; the boom lives in the pivot's local space, so the resolver only ever
//! needs point/direction conversions between the two spaces.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rigid transform (translation + rotation, unit scale).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space position
    pub position: Vec3,
    /// World-space rotation
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    #[inline]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    #[inline]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Local point -> world point.
    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    /// World point -> local point.
    #[inline]
    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.position)
    }

    /// Local direction -> world direction (rotation only, length preserved).
    #[inline]
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }
}

/// Handle to a followed target. The rig looks positions up through
/// [`AnchorLookup`] and never owns the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorId(pub u32);

/// Read-only source of anchor world positions.
pub trait AnchorLookup {
    /// Current world position of `id`, or `None` if the target no longer exists.
    fn anchor_position(&self, id: AnchorId) -> Option<Vec3>;
}

impl AnchorLookup for std::collections::HashMap<AnchorId, Vec3> {
    fn anchor_position(&self, id: AnchorId) -> Option<Vec3> {
        self.get(&id).copied()
    }
}

/// Moves `current` toward `target` by at most `max_delta`, landing exactly on
/// `target` once it is within reach.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + to_target / distance * max_delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_round_trip_through_rotation() {
        let t = Transform::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        let world = t.transform_point(Vec3::new(0.0, 0.0, 2.0));
        // +Z rotated 90° around Y lands on +X
        assert!((world - Vec3::new(3.0, 2.0, 3.0)).length() < 1e-5);
        let local = t.inverse_transform_point(world);
        assert!((local - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_transform_direction_ignores_translation() {
        let t = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(t.transform_direction(Vec3::Z), Vec3::Z);
    }

    #[test]
    fn test_move_towards_is_bounded() {
        let p = move_towards(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0);
        assert!((p.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_move_towards_does_not_overshoot() {
        let target = Vec3::new(1.0, 1.0, 0.0);
        let p = move_towards(Vec3::ZERO, target, 100.0);
        assert_eq!(p, target);
    }

    #[test]
    fn test_anchor_lookup_map() {
        let mut anchors = std::collections::HashMap::new();
        anchors.insert(AnchorId(7), Vec3::ONE);
        assert_eq!(anchors.anchor_position(AnchorId(7)), Some(Vec3::ONE));
        assert_eq!(anchors.anchor_position(AnchorId(8)), None);
    }
}
