//! Rig Configuration
//!
//! Numeric tunables for the orientation controller and the boom resolver,
//! loadable from JSON. Every field has a default, so a config file only needs
//! to list what it changes.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for yaw/pitch accumulation and pivot follow.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    /// Degrees per second per unit of look input
    pub rotation_sensitivity: f32,
    /// Maximum pivot travel toward the anchor, units per second
    pub follow_speed: f32,
    /// Lowest allowed pitch in degrees
    pub min_clamp_angle: f32,
    /// Highest allowed pitch in degrees
    pub max_clamp_angle: f32,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            rotation_sensitivity: 150.0,
            follow_speed: 120.0,
            min_clamp_angle: -80.0,
            max_clamp_angle: 80.0,
        }
    }
}

impl OrientationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("rotation_sensitivity", self.rotation_sensitivity)?;
        check_finite("follow_speed", self.follow_speed)?;
        check_finite("min_clamp_angle", self.min_clamp_angle)?;
        check_finite("max_clamp_angle", self.max_clamp_angle)?;
        check_non_negative("follow_speed", self.follow_speed)?;

        if self.min_clamp_angle >= self.max_clamp_angle {
            return Err(ConfigError::ClampRange {
                min: self.min_clamp_angle,
                max: self.max_clamp_angle,
            });
        }
        Ok(())
    }
}

/// Tunables for the collision-aware boom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoomConfig {
    /// Below this distance the lens is raised over the obstruction
    pub min_distance: f32,
    /// Full extension of the boom
    pub max_distance: f32,
    /// Radius of the anticipatory sphere sweep
    pub probe_radius: f32,
    /// Base interpolation speed toward the target distance, per second
    pub smooth_rate: f32,
    /// Upper bound on the look-input speed-up of `smooth_rate`.
    /// `None` leaves it uncapped.
    pub max_speed_factor: Option<f32>,
    /// Initial boom position in pivot space. Its direction becomes the base
    /// direction, its length the starting distance.
    pub initial_offset: Vec3,
}

impl Default for BoomConfig {
    fn default() -> Self {
        Self {
            min_distance: 1.6,
            max_distance: 2.9,
            probe_radius: 0.5,
            smooth_rate: 8.0,
            max_speed_factor: None,
            initial_offset: Vec3::new(0.0, 0.0, 2.9),
        }
    }
}

impl BoomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("min_distance", self.min_distance)?;
        check_finite("max_distance", self.max_distance)?;
        check_finite("probe_radius", self.probe_radius)?;
        check_finite("smooth_rate", self.smooth_rate)?;
        check_non_negative("smooth_rate", self.smooth_rate)?;
        if let Some(cap) = self.max_speed_factor {
            check_finite("max_speed_factor", cap)?;
        }
        if !self.initial_offset.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "initial_offset",
                value: self.initial_offset.length(),
            });
        }

        if self.min_distance >= self.max_distance {
            return Err(ConfigError::DistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if self.probe_radius <= 0.0 {
            return Err(ConfigError::ProbeRadius(self.probe_radius));
        }
        if self.initial_offset.length_squared() <= f32::EPSILON * f32::EPSILON {
            return Err(ConfigError::DegenerateBaseDirection);
        }
        Ok(())
    }
}

/// Complete rig configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub orientation: OrientationConfig,
    pub boom: BoomConfig,
}

impl RigConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.orientation.validate()?;
        self.boom.validate()
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded rig config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        Err(ConfigError::Negative { name, value })
    } else {
        Ok(())
    }
}
