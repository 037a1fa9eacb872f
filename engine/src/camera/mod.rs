//! Camera Module
//!
//! Third-person boom camera: an orientation controller turning look input
//! into pivot rotation, and a collision-aware boom keeping the lens out of
//! scene geometry. Window-system agnostic; it only deals with camera state
//! and math.

pub mod boom;
pub mod orientation;
pub mod rig;
pub mod transform;

pub use boom::{BoomCollisionResolver, BoomStatus};
pub use orientation::OrientationController;
pub use rig::{CameraPose, CameraRig};
pub use transform::{AnchorId, AnchorLookup, Transform, move_towards};
