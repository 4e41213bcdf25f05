//! Platform abstraction layer
//!
//! Converts raw device state (keyboard, touch, mouse) into the normalized
//! [`ControlInput`](crate::sim::ControlInput) the simulation consumes.

pub mod input;

pub use input::{KeyState, RawInput};
