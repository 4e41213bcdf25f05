//! Zombie Drift - a top-down road drifting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicle physics, abilities, collisions, scoring)
//! - `renderer`: Stateless projection of a render snapshot into vertex data
//! - `platform`: Raw device input normalization
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences (particle budget)

pub mod color;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use settings::{QualityPreset, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Road dimensions
    pub const ROAD_WIDTH: f32 = 400.0;

    /// Vehicle defaults
    pub const CAR_WIDTH: f32 = 40.0;
    pub const CAR_HEIGHT: f32 = 70.0;
    /// Half-width used for road clamping and obstacle contact
    pub const VEHICLE_HALF_WIDTH: f32 = 30.0;
    /// Distance of the vehicle's anchor line from the bottom of the viewport
    pub const VEHICLE_ANCHOR_OFFSET: f32 = 150.0;
    pub const MAX_SPEED: f32 = 12.0;
    pub const ACCELERATION: f32 = 0.5;
    /// Speed decay per frame while coasting
    pub const COAST_DECAY: f32 = 0.98;
    pub const TURN_RATE: f32 = 0.08;
    /// Below this speed steering has no effect
    pub const STEER_MIN_SPEED: f32 = 0.5;
    /// 1.0 = no drift, lower = more slide
    pub const DRIFT_FACTOR: f32 = 0.9;
    pub const WALL_BOUNCE: f32 = -0.5;
    pub const HEADING_RECENTER: f32 = 0.9;
    /// Vehicle speed above which any obstacle dies on contact
    pub const KILL_SPEED: f32 = 3.0;

    /// Entity sizes
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const ITEM_SIZE: f32 = 30.0;

    /// Off-screen spawn row
    pub const SPAWN_Y: f32 = -100.0;
    /// Distance past the viewport edges before an entity is culled
    pub const CULL_MARGIN: f32 = 50.0;

    /// Particle defaults
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLES_PER_EXPLOSION: usize = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
