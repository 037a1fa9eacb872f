//! Camera Rig
//!
//! Owns the pivot transform, the orientation controller and the boom resolver,
//! and runs them in a fixed order each frame:
//!
//! 1. **Rotation**: look input -> pivot rotation.
//! 2. **Collision**: boom resolved against the freshly rotated pivot.
//! 3. **Follow**: pivot stepped toward its anchor.
//!
//! The order is explicit in [`CameraRig::update`]; nothing depends on engine
//! callback ordering.

use glam::{Mat4, Quat, Vec3};

use super::boom::{BoomCollisionResolver, BoomStatus};
use super::orientation::OrientationController;
use super::transform::{AnchorId, AnchorLookup, Transform};
use crate::config::RigConfig;
use crate::error::RigError;
use crate::input::LookInput;
use crate::physics::PhysicsWorld;

/// Final lens placement handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraPose {
    /// Looking direction (-Z in camera space).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// World -> view matrix.
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation.conjugate()) * Mat4::from_translation(-self.position)
    }
}

impl From<Transform> for CameraPose {
    fn from(t: Transform) -> Self {
        Self {
            position: t.position,
            rotation: t.rotation,
        }
    }
}

/// Pivot + boom camera rig.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pivot: Transform,
    orientation: OrientationController,
    boom: BoomCollisionResolver,
}

impl CameraRig {
    /// Builds a rig from validated tunables and the pivot's starting placement.
    pub fn new(config: RigConfig, anchor: AnchorId, pivot: Transform) -> Result<Self, RigError> {
        config.validate()?;

        let orientation = OrientationController::new(config.orientation, anchor, pivot.rotation)?;
        let boom = BoomCollisionResolver::new(config.boom)?;
        let pivot = Transform::new(pivot.position, orientation.rotation());

        log::info!(
            "camera rig ready: anchor {:?}, boom {:.2}..{:.2}",
            anchor,
            config.boom.min_distance,
            config.boom.max_distance
        );

        Ok(Self {
            pivot,
            orientation,
            boom,
        })
    }

    #[inline]
    pub fn pivot(&self) -> &Transform {
        &self.pivot
    }

    /// Moves the pivot instantly, e.g. after a respawn.
    pub fn teleport(&mut self, position: Vec3) {
        self.pivot.position = position;
    }

    #[inline]
    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    #[inline]
    pub fn boom(&self) -> &BoomCollisionResolver {
        &self.boom
    }

    /// Lens pose for the current state.
    pub fn pose(&self) -> CameraPose {
        self.boom.world_transform(&self.pivot).into()
    }

    /// Phase 1: rotate the pivot from look input.
    pub fn rotation_pass(&mut self, input: LookInput, delta_time: f32) {
        self.pivot.rotation = self
            .orientation
            .update(input.horizontal, input.vertical, delta_time);
    }

    /// Phase 2: resolve the boom against the current pivot.
    pub fn collision_pass<W: PhysicsWorld + ?Sized>(
        &mut self,
        input: LookInput,
        delta_time: f32,
        world: &W,
    ) -> Result<BoomStatus, RigError> {
        match self
            .boom
            .resolve(&self.pivot, input.magnitude(), delta_time, world)
        {
            Ok(_) => Ok(self.boom.status()),
            Err(err) => {
                log::warn!("boom collision skipped this frame: {err}");
                Err(err.into())
            }
        }
    }

    /// Phase 3: step the pivot toward its anchor. A vanished anchor leaves
    /// the pivot where it is.
    pub fn follow_pass<A: AnchorLookup + ?Sized>(&mut self, anchors: &A, delta_time: f32) {
        let anchor = self.orientation.anchor;
        match anchors.anchor_position(anchor) {
            Some(target) => {
                self.pivot.position =
                    self.orientation
                        .follow_update(self.pivot.position, target, delta_time);
            }
            None => log::warn!("anchor {anchor:?} not found; pivot holds position"),
        }
    }

    /// Runs the three phases in order and returns the resulting lens pose.
    ///
    /// A failed collision query aborts the frame after the rotation phase.
    /// The new pivot rotation is kept, the boom keeps its last good state,
    /// and the follow phase does not run, so the pivot stays where it was
    /// until a frame with a healthy world. Callers that want follow to keep
    /// going regardless can drive [`Self::follow_pass`] themselves.
    pub fn update<W, A>(
        &mut self,
        input: LookInput,
        delta_time: f32,
        world: &W,
        anchors: &A,
    ) -> Result<CameraPose, RigError>
    where
        W: PhysicsWorld + ?Sized,
        A: AnchorLookup + ?Sized,
    {
        self.rotation_pass(input, delta_time);
        self.collision_pass(input, delta_time, world)?;
        self.follow_pass(anchors, delta_time);
        Ok(self.pose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::physics::ColliderScene;
    use std::collections::HashMap;

    fn rig() -> CameraRig {
        CameraRig::new(RigConfig::default(), AnchorId(1), Transform::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RigConfig::default();
        config.boom.probe_radius = -0.1;
        let err = CameraRig::new(config, AnchorId(1), Transform::default());
        assert!(matches!(err, Err(RigError::Config(_))));
    }

    #[test]
    fn test_open_space_pose_sits_at_full_extension() {
        let mut rig = rig();
        let world = ColliderScene::new();
        let anchors = HashMap::from([(AnchorId(1), Vec3::ZERO)]);
        let pose = rig
            .update(LookInput::default(), 0.016, &world, &anchors)
            .unwrap();
        assert!((pose.position - Vec3::new(0.0, 0.0, 2.9)).length() < 1e-4);
        assert_eq!(pose.forward(), Vec3::NEG_Z);
        assert_eq!(pose.up(), Vec3::Y);
    }

    #[test]
    fn test_negative_follow_speed_rejected_at_construction() {
        let mut config = RigConfig::default();
        config.orientation.follow_speed = -10.0;
        let err = CameraRig::new(config, AnchorId(1), Transform::default());
        assert!(matches!(
            err,
            Err(RigError::Config(ConfigError::Negative { .. }))
        ));
    }

    #[test]
    fn test_missing_anchor_keeps_pivot() {
        let mut rig = rig();
        rig.teleport(Vec3::new(1.0, 2.0, 3.0));
        let world = ColliderScene::new();
        let anchors: HashMap<AnchorId, Vec3> = HashMap::new();
        rig.update(LookInput::default(), 0.1, &world, &anchors).unwrap();
        assert_eq!(rig.pivot().position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_query_failure_skips_follow() {
        let mut rig = rig();
        let mut world = ColliderScene::new();
        world.set_ready(false);
        let anchors = HashMap::from([(AnchorId(1), Vec3::new(50.0, 0.0, 0.0))]);
        let err = rig.update(LookInput::new(2.0, 0.0), 0.1, &world, &anchors);
        assert!(matches!(err, Err(RigError::Query(_))));
        assert_eq!(rig.pivot().position, Vec3::ZERO);
        // Rotation phase already ran: 2.0 * 150 * 0.1
        assert!((rig.orientation().yaw() - 30.0).abs() < 1e-4);
        assert_eq!(rig.pivot().rotation, rig.orientation().rotation());
        assert_eq!(rig.boom().current_distance(), 2.9);
    }

    #[test]
    fn test_view_matrix_maps_lens_to_origin() {
        let pose = CameraPose {
            position: Vec3::new(3.0, 1.0, -2.0),
            rotation: Quat::from_rotation_y(0.5),
        };
        let p = pose.view_matrix().transform_point3(pose.position);
        assert!(p.length() < 1e-5);
    }
}
