//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One frame per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod ability;
pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod vehicle;
pub mod world;

pub use ability::{AbilityBanner, AbilityEffects, AbilityKind, ActiveAbility, CATALOG};
pub use collision::Impact;
pub use geometry::{Viewport, road_to_screen, within_box};
pub use snapshot::RenderSnapshot;
pub use state::{
    Bullet, GameEvent, GamePhase, Item, Obstacle, Particle, SimulationState, Vehicle,
};
pub use tick::{ControlInput, tick};
