//! Error types for rig construction and per-frame updates.

use thiserror::Error;

/// Rejected tunables or initial placement. Fatal to rig construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min distance {min} must be smaller than max distance {max}")]
    DistanceRange { min: f32, max: f32 },

    #[error("min clamp angle {min}° must be smaller than max clamp angle {max}°")]
    ClampRange { min: f32, max: f32 },

    #[error("probe radius must be positive, got {0}")]
    ProbeRadius(f32),

    #[error("boom starts at the pivot; no base direction can be derived")]
    DegenerateBaseDirection,

    #[error("tunable `{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("tunable `{name}` is not finite: {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("failed to read rig config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rig config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Physics backend failure. "No hit" is not an error; this is a world that
/// could not answer the query at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("physics world is not ready for queries")]
    WorldNotReady,

    #[error("physics backend failure: {0}")]
    Backend(String),
}

/// Errors surfaced by [`crate::camera::CameraRig`].
#[derive(Debug, Error)]
pub enum RigError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("boom collision query failed: {0}")]
    Query(#[from] QueryError),
}
