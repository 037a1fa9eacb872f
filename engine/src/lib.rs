//! Boom Rig Engine Library
//!
//! A third-person "boom-arm" camera rig. A pivot follows a target and turns
//! with look input; a boom hanging off the pivot carries the lens and is
//! shortened whenever scene geometry would otherwise cut through it.
//!
//! # Modules
//!
//! - [`camera`] - Orientation controller, boom collision resolver, and the rig tying them together
//! - [`physics`] - Line/sphere query interface plus a box-collider reference world
//! - [`input`] - Look-axis sampling and cursor capture
//! - [`config`] - JSON-loadable tunables
//! - [`error`] - Configuration and query errors
//!
//! # Example
//!
//! ```ignore
//! use std::collections::HashMap;
//! use boom_rig_engine::camera::{AnchorId, CameraRig, Transform};
//! use boom_rig_engine::config::RigConfig;
//! use boom_rig_engine::input::LookAxes;
//! use boom_rig_engine::physics::{ColliderScene, SurfaceTag};
//! use glam::Vec3;
//!
//! let mut world = ColliderScene::new();
//! world.add_box(Vec3::new(-50.0, -1.0, -50.0), Vec3::new(50.0, 0.0, 50.0), SurfaceTag::Floor);
//!
//! let player = AnchorId(0);
//! let mut anchors = HashMap::from([(player, Vec3::new(0.0, 1.5, 0.0))]);
//! let mut rig = CameraRig::new(RigConfig::default(), player, Transform::default())?;
//! let mut axes = LookAxes::new();
//!
//! // Every frame
//! axes.accumulate_pointer(mouse_dx, mouse_dy);
//! let pose = rig.update(axes.sample(), dt, &world, &anchors)?;
//! renderer.set_view(pose.view_matrix());
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;

pub use camera::{
    AnchorId, BoomCollisionResolver, CameraPose, CameraRig, OrientationController, Transform,
};
pub use config::{BoomConfig, OrientationConfig, RigConfig};
pub use error::{ConfigError, QueryError, RigError};
pub use input::{LookAxes, LookInput};
pub use physics::{ColliderScene, PhysicsWorld, SurfaceTag};
