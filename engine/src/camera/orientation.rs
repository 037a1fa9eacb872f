//! Orientation Controller
//!
//! Accumulates yaw/pitch from look input and rebuilds the pivot rotation,
//! then drags the pivot toward its anchor at a bounded speed. Angles are kept
//! in degrees, matching the tunables.
//!
//! The controller knows nothing about collision; the boom resolver reads the
//! pivot transform it produces and never writes back.

use glam::{EulerRot, Quat, Vec3};

use super::transform::{AnchorId, move_towards};
use crate::config::OrientationConfig;
use crate::error::ConfigError;

/// Yaw/pitch state for the pivot.
///
/// ## Usage
/// ```rust,ignore
/// let mut orientation = OrientationController::new(config, AnchorId(0), pivot.rotation)?;
///
/// // Rotation phase
/// pivot.rotation = orientation.update(look.horizontal, look.vertical, dt);
///
/// // Follow phase
/// pivot.position = orientation.follow_update(pivot.position, target, dt);
/// ```
#[derive(Clone, Debug)]
pub struct OrientationController {
    /// Followed target (lookup handle only)
    pub anchor: AnchorId,
    /// Horizontal angle in degrees, unbounded
    yaw: f32,
    /// Vertical angle in degrees, always within the clamp range
    pitch: f32,
    config: OrientationConfig,
}

impl OrientationController {
    /// Creates a controller whose angles reproduce `initial_rotation` (minus
    /// any roll), so the first update does not snap the view.
    pub fn new(
        config: OrientationConfig,
        anchor: AnchorId,
        initial_rotation: Quat,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let (yaw, pitch, _roll) = initial_rotation.to_euler(EulerRot::YXZ);
        let yaw = yaw.to_degrees();
        let pitch = pitch
            .to_degrees()
            .clamp(config.min_clamp_angle, config.max_clamp_angle);

        Ok(Self {
            anchor,
            yaw,
            pitch,
            config,
        })
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Applies one frame of look input and returns the new pivot rotation.
    ///
    /// Inputs must be finite; they are not sanitized here.
    pub fn update(&mut self, input_dx: f32, input_dy: f32, delta_time: f32) -> Quat {
        debug_assert!(
            input_dx.is_finite() && input_dy.is_finite() && delta_time.is_finite(),
            "look input must be finite"
        );

        let step = self.config.rotation_sensitivity * delta_time;
        self.yaw += input_dx * step;
        self.pitch = (self.pitch + input_dy * step)
            .clamp(self.config.min_clamp_angle, self.config.max_clamp_angle);

        self.rotation()
    }

    /// Rotation for the current angles: yaw about world Y, then pitch about
    /// the local X axis, no roll.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Steps `current` toward `target` by at most `follow_speed * delta_time`.
    pub fn follow_update(&self, current: Vec3, target: Vec3, delta_time: f32) -> Vec3 {
        move_towards(current, target, self.config.follow_speed * delta_time.max(0.0))
    }

    /// Sets the angles directly (pitch is clamped).
    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(self.config.min_clamp_angle, self.config.max_clamp_angle);
    }
}
