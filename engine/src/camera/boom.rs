//! Boom Collision Resolver
//!
//! Keeps the camera lens on a boom hanging off the pivot, shortened whenever
//! the scene would otherwise cut through it. Each frame is one of two states:
//!
//! - **Blocked**: a line from the pivot to the fully extended boom end hits
//!   something. The distance snaps to the hit (no smoothing) and the lens is
//!   placed at the hit point expressed in pivot space, so a glancing hit keeps
//!   its lateral offset.
//! - **Clear**: a sphere is swept from the pivot along the current boom
//!   direction. A non-floor hit sets the target distance to the hit plus one
//!   sphere diameter; otherwise the target is the full extension. The distance
//!   then eases toward the target, faster while the player is looking around.
//!
//! Below `min_distance` the lens is raised vertically so it rides over a close
//! wall instead of sinking into it.

use glam::Vec3;

use super::transform::Transform;
use crate::config::BoomConfig;
use crate::error::{ConfigError, QueryError};
use crate::physics::PhysicsWorld;

/// Which branch the last resolve took.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoomStatus {
    /// Line of sight to the full boom end is obstructed
    Blocked,
    /// Nothing on the line; distance eased toward the probe target
    #[default]
    Clear,
}

/// Collision-aware boom state.
#[derive(Clone, Debug)]
pub struct BoomCollisionResolver {
    /// Rest-pose unit direction in pivot space
    base_direction: Vec3,
    /// Current boom length
    current_distance: f32,
    /// Distance the Clear state is easing toward
    target_distance: f32,
    /// Boom position in pivot space
    local_offset: Vec3,
    status: BoomStatus,
    config: BoomConfig,
}

impl BoomCollisionResolver {
    /// Captures the base direction and starting distance from
    /// `config.initial_offset`.
    pub fn new(config: BoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let offset = config.initial_offset;
        let base_direction = offset
            .try_normalize()
            .ok_or(ConfigError::DegenerateBaseDirection)?;
        let current_distance = offset.length().clamp(0.0, config.max_distance);

        log::debug!(
            "boom initialised: base direction {base_direction}, distance {current_distance:.3}"
        );

        Ok(Self {
            base_direction,
            current_distance,
            target_distance: current_distance,
            local_offset: base_direction * current_distance,
            status: BoomStatus::Clear,
            config,
        })
    }

    #[inline]
    pub fn base_direction(&self) -> Vec3 {
        self.base_direction
    }

    #[inline]
    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    #[inline]
    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Boom position in pivot space after the last resolve.
    #[inline]
    pub fn local_offset(&self) -> Vec3 {
        self.local_offset
    }

    #[inline]
    pub fn status(&self) -> BoomStatus {
        self.status
    }

    /// Runs one frame and returns the new local offset.
    ///
    /// `input_magnitude` is the current look speed; values above 1 speed up
    /// the easing. On a query failure nothing is modified.
    pub fn resolve<W: PhysicsWorld + ?Sized>(
        &mut self,
        pivot: &Transform,
        input_magnitude: f32,
        delta_time: f32,
        world: &W,
    ) -> Result<Vec3, QueryError> {
        let start = pivot.position;
        let end = pivot.transform_point(self.base_direction * self.config.max_distance);

        if let Some(hit) = world.line_test(start, end)? {
            let distance = hit.distance.max(0.0);
            let mut local = pivot.inverse_transform_point(hit.point);
            if distance < self.config.min_distance {
                local.y += self.config.min_distance - distance;
            }

            self.enter(BoomStatus::Blocked);
            log::trace!("boom blocked at {distance:.3} ({:?})", hit.tag);
            self.current_distance = distance;
            self.target_distance = distance;
            self.local_offset = local;
            return Ok(local);
        }

        let target = self.probe_target(pivot, world)?;

        self.enter(BoomStatus::Clear);
        self.target_distance = target;
        let t = (self.config.smooth_rate * self.speed_factor(input_magnitude) * delta_time)
            .clamp(0.0, 1.0);
        self.current_distance += (target - self.current_distance) * t;
        self.current_distance = self.current_distance.clamp(0.0, self.config.max_distance);
        self.local_offset = self.dolly_direction() * self.current_distance;

        log::trace!(
            "boom clear: distance {:.3} -> target {target:.3}",
            self.current_distance
        );
        Ok(self.local_offset)
    }

    /// World-space lens transform for the given pivot.
    pub fn world_transform(&self, pivot: &Transform) -> Transform {
        Transform::new(pivot.transform_point(self.local_offset), pivot.rotation)
    }

    /// Sphere probe along the current boom direction.
    fn probe_target<W: PhysicsWorld + ?Sized>(
        &self,
        pivot: &Transform,
        world: &W,
    ) -> Result<f32, QueryError> {
        let local_dir = if self.local_offset.length_squared() > f32::EPSILON {
            self.local_offset
        } else {
            self.base_direction
        };
        let direction = pivot.transform_direction(local_dir);

        let hit = world.sphere_sweep(
            pivot.position,
            direction,
            self.config.probe_radius,
            self.config.max_distance,
        )?;

        Ok(match hit {
            Some(hit) if !hit.tag.is_floor() => hit.distance + 2.0 * self.config.probe_radius,
            _ => self.config.max_distance,
        })
    }

    /// Base direction, raised when the boom is shorter than `min_distance`.
    fn dolly_direction(&self) -> Vec3 {
        let mut dir = self.base_direction;
        if self.current_distance < self.config.min_distance {
            let quarter_radius = self.config.probe_radius / 4.0;
            dir.y += self.config.min_distance - self.current_distance + quarter_radius;
        }
        dir
    }

    fn speed_factor(&self, input_magnitude: f32) -> f32 {
        let factor = input_magnitude.abs().max(1.0);
        match self.config.max_speed_factor {
            Some(cap) => factor.min(cap.max(1.0)),
            None => factor,
        }
    }

    fn enter(&mut self, status: BoomStatus) {
        if self.status != status {
            log::debug!("boom {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{LineHit, SurfaceTag, SweepHit};
    use std::cell::Cell;

    /// Returns canned hits and counts queries.
    struct Canned {
        line: Option<LineHit>,
        sweep: Option<SweepHit>,
        fail: bool,
        sweeps: Cell<u32>,
    }

    impl Canned {
        fn new(line: Option<LineHit>, sweep: Option<SweepHit>) -> Self {
            Self {
                line,
                sweep,
                fail: false,
                sweeps: Cell::new(0),
            }
        }
    }

    impl PhysicsWorld for Canned {
        fn line_test(&self, _: Vec3, _: Vec3) -> Result<Option<LineHit>, QueryError> {
            if self.fail {
                return Err(QueryError::WorldNotReady);
            }
            Ok(self.line)
        }

        fn sphere_sweep(
            &self,
            _: Vec3,
            _: Vec3,
            _: f32,
            _: f32,
        ) -> Result<Option<SweepHit>, QueryError> {
            self.sweeps.set(self.sweeps.get() + 1);
            Ok(self.sweep)
        }
    }

    fn resolver() -> BoomCollisionResolver {
        BoomCollisionResolver::new(BoomConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_state_from_offset() {
        let r = BoomCollisionResolver::new(BoomConfig {
            initial_offset: Vec3::new(0.0, 0.0, 2.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.base_direction(), Vec3::Z);
        assert!((r.current_distance() - 2.0).abs() < 1e-6);
        assert_eq!(r.local_offset(), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_initial_distance_is_clamped_to_max() {
        let r = BoomCollisionResolver::new(BoomConfig {
            initial_offset: Vec3::new(0.0, 0.0, 10.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.current_distance(), 2.9);
    }

    #[test]
    fn test_zero_offset_is_fatal() {
        let err = BoomCollisionResolver::new(BoomConfig {
            initial_offset: Vec3::ZERO,
            ..Default::default()
        });
        assert!(matches!(err, Err(ConfigError::DegenerateBaseDirection)));
    }

    #[test]
    fn test_blocked_skips_sphere_probe() {
        let mut r = resolver();
        let world = Canned::new(
            Some(LineHit {
                point: Vec3::new(0.0, 0.0, 2.0),
                normal: Vec3::NEG_Z,
                distance: 2.0,
                tag: SurfaceTag::Wall,
            }),
            None,
        );
        r.resolve(&Transform::default(), 0.0, 0.016, &world).unwrap();
        assert_eq!(world.sweeps.get(), 0);
        assert_eq!(r.status(), BoomStatus::Blocked);
    }

    #[test]
    fn test_floor_sweep_targets_max() {
        let mut r = resolver();
        let world = Canned::new(
            None,
            Some(SweepHit {
                distance: 0.5,
                tag: SurfaceTag::Floor,
            }),
        );
        r.resolve(&Transform::default(), 0.0, 0.016, &world).unwrap();
        assert_eq!(r.target_distance(), 2.9);
        assert_eq!(r.current_distance(), 2.9);
    }

    #[test]
    fn test_wall_sweep_targets_hit_plus_diameter() {
        let mut r = resolver();
        let world = Canned::new(
            None,
            Some(SweepHit {
                distance: 0.7,
                tag: SurfaceTag::Wall,
            }),
        );
        r.resolve(&Transform::default(), 0.0, 0.016, &world).unwrap();
        assert!((r.target_distance() - 1.7).abs() < 1e-6);
        assert!(r.current_distance() < 2.9);
    }

    #[test]
    fn test_query_failure_leaves_state_untouched() {
        let mut r = resolver();
        let before = (r.current_distance(), r.local_offset(), r.status());
        let mut world = Canned::new(None, None);
        world.fail = true;
        let err = r.resolve(&Transform::default(), 0.0, 0.016, &world);
        assert_eq!(err, Err(QueryError::WorldNotReady));
        assert_eq!((r.current_distance(), r.local_offset(), r.status()), before);
    }

    #[test]
    fn test_speed_factor_floor_and_cap() {
        let mut r = resolver();
        assert_eq!(r.speed_factor(0.2), 1.0);
        assert_eq!(r.speed_factor(-3.0), 3.0);
        assert_eq!(r.speed_factor(50.0), 50.0);
        r.config.max_speed_factor = Some(4.0);
        assert_eq!(r.speed_factor(50.0), 4.0);
    }

    #[test]
    fn test_dolly_direction_raised_when_close() {
        let mut r = resolver();
        r.current_distance = 1.0;
        let dir = r.dolly_direction();
        // 1.6 - 1.0 + 0.5 / 4
        assert!((dir.y - 0.725).abs() < 1e-6);
        r.current_distance = 2.0;
        assert_eq!(r.dolly_direction(), r.base_direction());
    }
}
