//! Raw device input and its normalization
//!
//! The host keeps a [`RawInput`] up to date from its event listeners and
//! calls [`RawInput::normalize`] once per frame.

use serde::{Deserialize, Serialize};

use crate::sim::ControlInput;

/// Arrow keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Device state sampled at the start of a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub keys: KeyState,
    /// Screen X of an active touch or held mouse button
    pub pointer_x: Option<f32>,
}

impl RawInput {
    /// Track a key transition. Unknown key codes are ignored.
    pub fn set_key(&mut self, code: &str, pressed: bool) {
        match code {
            "ArrowLeft" => self.keys.left = pressed,
            "ArrowRight" => self.keys.right = pressed,
            "ArrowUp" => self.keys.up = pressed,
            "ArrowDown" => self.keys.down = pressed,
            _ => {}
        }
    }

    /// Touch start / mouse down / drag
    pub fn pointer_down(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// Touch end / mouse up
    pub fn pointer_up(&mut self) {
        self.pointer_x = None;
    }

    /// Collapse device state into this frame's control input.
    ///
    /// A pointer overrides the keys: it always accelerates and steers toward
    /// the half of the viewport it is on. Without a pointer the car
    /// auto-accelerates unless only the brake key is held.
    pub fn normalize(&self, viewport_width: f32) -> ControlInput {
        if let Some(x) = self.pointer_x {
            let left = x < viewport_width / 2.0;
            return ControlInput {
                accelerate: true,
                steer_left: left,
                steer_right: !left,
            };
        }

        ControlInput {
            accelerate: self.keys.up || !self.keys.down,
            steer_left: self.keys.left,
            steer_right: self.keys.right,
        }
    }
}
