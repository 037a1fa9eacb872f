//! Input Module
//!
//! Platform-agnostic look input for the camera rig. Decoupled from any
//! windowing system: the application feeds raw pointer and stick values in
//! and samples one [`LookInput`] per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use boom_rig_engine::input::{LookAxes, LookInput};
//!
//! let mut axes = LookAxes::new();
//! axes.accumulate_pointer(dx, dy);
//! axes.set_stick(stick_x, stick_y);
//!
//! let look: LookInput = axes.sample();
//! rig.update(look, dt, &world, &anchors)?;
//! ```

pub mod axes;
pub mod cursor;

pub use axes::{Axis, LookAxes, LookInput};
pub use cursor::{CursorControl, capture_cursor, release_cursor};
