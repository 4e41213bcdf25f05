//! The shared coordinate model
//!
//! Every entity lives in one frame: X is the offset from the road centerline,
//! Y is the screen row (growing downward). The vehicle sits on a fixed anchor
//! line near the bottom of the viewport and the world scrolls toward it.
//! Screen X only exists at the projection boundary ([`road_to_screen`]).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::ContactBox;

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen row the vehicle is pinned to
    #[inline]
    pub fn anchor_y(&self, anchor_offset: f32) -> f32 {
        self.height - anchor_offset
    }

    /// Rows strictly below this are behind the vehicle and off screen
    #[inline]
    pub fn bottom_cull_y(&self, margin: f32) -> f32 {
        self.height + margin
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Rectangular-distance overlap: `|Δx| < half_x` and `|Δy| < half_y`
#[inline]
pub fn within_box(a: Vec2, b: Vec2, contact: ContactBox) -> bool {
    let d = (a - b).abs();
    d.x < contact.half_x && d.y < contact.half_y
}

/// Project a road-relative position to screen pixels
#[inline]
pub fn road_to_screen(pos: Vec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(viewport.center_x() + pos.x, pos.y)
}

/// Clamp a road-relative X into `[-limit, limit]`, reporting whether it moved
#[inline]
pub fn clamp_to_road(x: f32, limit: f32) -> (f32, bool) {
    let clamped = x.clamp(-limit, limit);
    (clamped, clamped != x)
}
