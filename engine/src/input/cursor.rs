//! Cursor Setup
//!
//! Locking and hiding the cursor is global window state owned by the
//! application. The rig only describes the action; the application runs it
//! once at startup against its windowing backend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use boom_rig_engine::input::cursor::{capture_cursor, CursorControl};
//!
//! struct WinitCursor<'a>(&'a winit::window::Window);
//!
//! impl CursorControl for WinitCursor<'_> {
//!     fn set_locked(&mut self, locked: bool) { /* set_cursor_grab */ }
//!     fn set_visible(&mut self, visible: bool) { self.0.set_cursor_visible(visible) }
//! }
//!
//! capture_cursor(&mut WinitCursor(&window));
//! ```

/// Windowing-side cursor operations.
pub trait CursorControl {
    /// Confine the cursor to the window (locked) or free it.
    fn set_locked(&mut self, locked: bool);
    fn set_visible(&mut self, visible: bool);
}

/// Locks and hides the cursor for mouse-look.
pub fn capture_cursor<C: CursorControl + ?Sized>(cursor: &mut C) {
    cursor.set_locked(true);
    cursor.set_visible(false);
    log::debug!("cursor captured for mouse look");
}

/// Unlocks and shows the cursor (menus, pause screens).
pub fn release_cursor<C: CursorControl + ?Sized>(cursor: &mut C) {
    cursor.set_locked(false);
    cursor.set_visible(true);
    log::debug!("cursor released");
}
