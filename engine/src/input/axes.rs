//! Look Axes
//!
//! Combines pointer motion and right-stick deflection into one raw value per
//! look axis per frame. Pointer deltas accumulate between frames and are
//! consumed by [`LookAxes::sample`]; stick values are levels and persist until
//! the next stick event.
//!
//! # Example
//!
//! ```rust,ignore
//! use boom_rig_engine::input::LookAxes;
//!
//! let mut axes = LookAxes::new();
//!
//! // In event loop
//! axes.accumulate_pointer(0.4, -0.1);
//! axes.set_stick(0.5, 0.0);
//!
//! // Once per frame
//! let look = axes.sample();
//! // look.horizontal = 0.9, look.vertical = -0.1
//! ```

/// Named raw look axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    MouseX,
    MouseY,
    RightStickX,
    RightStickY,
}

/// Per-frame look deltas, pointer and stick already summed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookInput {
    /// Drives yaw
    pub horizontal: f32,
    /// Drives pitch
    pub vertical: f32,
}

impl LookInput {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Horizontal look speed, used to hurry the boom while the view swings.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.horizontal.abs()
    }

    /// True when both axes carry finite values.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.horizontal.is_finite() && self.vertical.is_finite()
    }
}

/// Pointer + stick look-axis source.
#[derive(Debug, Clone, Default)]
pub struct LookAxes {
    /// Pointer motion accumulated since the last sample
    pointer_x: f32,
    pointer_y: f32,
    /// Current right-stick deflection
    stick_x: f32,
    stick_y: f32,
}

impl LookAxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds raw pointer motion. Non-finite deltas are dropped.
    #[inline]
    pub fn accumulate_pointer(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.pointer_x += dx;
            self.pointer_y += dy;
        }
    }

    /// Sets the right-stick deflection, clamped to [-1, 1].
    #[inline]
    pub fn set_stick(&mut self, x: f32, y: f32) {
        let sanitize = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.stick_x = sanitize(x);
        self.stick_y = sanitize(y);
    }

    /// Raw value of one axis without consuming anything.
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::MouseX => self.pointer_x,
            Axis::MouseY => self.pointer_y,
            Axis::RightStickX => self.stick_x,
            Axis::RightStickY => self.stick_y,
        }
    }

    /// Returns this frame's combined look input and clears pointer motion.
    pub fn sample(&mut self) -> LookInput {
        let look = LookInput {
            horizontal: self.pointer_x + self.stick_x,
            vertical: self.pointer_y + self.stick_y,
        };
        self.pointer_x = 0.0;
        self.pointer_y = 0.0;
        look
    }

    /// Clears pointer motion and centres the stick.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
