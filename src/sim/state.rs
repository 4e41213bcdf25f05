//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`SimulationState`]. There are
//! no statics: two states never share anything, and a seed plus an input
//! sequence reproduces a run exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ability::{AbilityBanner, AbilityEffects, AbilityKind, ActiveAbility};
use super::geometry::Viewport;
use crate::color::Color;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; the world is frozen
    GameOver,
}

/// Notifications for the UI layer, produced by a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// New score total (at most once per frame)
    ScoreChanged(u64),
    /// Ability banner to show, or `None` for "no ability"
    AbilityChanged(Option<AbilityBanner>),
    GameOver { final_score: u64 },
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Road-relative X (Y is the anchor line)
    pub x: f32,
    pub velocity: Vec2,
    /// Radians, 0 = straight up the road
    pub heading: f32,
    pub speed: f32,
    pub ability: Option<ActiveAbility>,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            x: 0.0,
            velocity: Vec2::ZERO,
            heading: 0.0,
            speed: 0.0,
            ability: None,
        }
    }
}

impl Vehicle {
    #[inline]
    pub fn ability_kind(&self) -> Option<AbilityKind> {
        self.ability.map(|a| a.kind)
    }

    /// Modifiers of the active ability (identity when none)
    #[inline]
    pub fn effects(&self) -> AbilityEffects {
        self.ability_kind()
            .map(AbilityKind::effects)
            .unwrap_or(AbilityEffects::NONE)
    }

    /// Current speed cap given the active ability
    #[inline]
    pub fn speed_cap(&self, max_speed: f32) -> f32 {
        max_speed * self.effects().speed_multiplier
    }

    pub fn clamp_speed(&mut self, max_speed: f32) {
        self.speed = self.speed.clamp(0.0, self.speed_cap(max_speed));
    }
}

/// An oncoming zombie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    /// Own forward creep, pixels per frame
    pub speed: f32,
    pub frozen: bool,
    pub alive: bool,
    pub size: f32,
}

/// A power-up pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub pos: Vec2,
    pub kind: AbilityKind,
    pub size: f32,
}

/// A machine-gun round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    /// Own vertical velocity (negative = up the screen)
    pub vy: f32,
    pub alive: bool,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left
    pub life: u32,
    pub color: Color,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation frame counter
    pub frame: u64,
    pub vehicle: Vehicle,
    /// Active obstacles (sorted by id)
    pub obstacles: Vec<Obstacle>,
    /// Active items (sorted by id)
    pub items: Vec<Item>,
    /// Active bullets (sorted by id)
    pub bullets: Vec<Bullet>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Particle pool cap
    pub max_particles: usize,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl SimulationState {
    /// Create a new session with default tuning and settings
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            tuning: Tuning::default(),
            viewport,
            phase: GamePhase::Playing,
            score: 0,
            frame: 0,
            vehicle: Vehicle::default(),
            obstacles: Vec::new(),
            items: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            max_particles: Settings::default().particle_budget(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Use `tuning` for this session. Values that fail validation are
    /// ignored and the defaults stay in place.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        match tuning.validate() {
            Ok(()) => self.tuning = tuning,
            Err(e) => log::warn!("Ignoring tuning override: {e}"),
        }
        self
    }

    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.max_particles = settings.particle_budget();
        self
    }

    /// Viewport changed (window resize)
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "Viewport resized to {}x{}",
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Screen row the vehicle is pinned to
    #[inline]
    pub fn anchor_y(&self) -> f32 {
        self.viewport.anchor_y(self.tuning.vehicle_anchor_offset)
    }

    /// Vehicle position in the shared frame
    #[inline]
    pub fn vehicle_pos(&self) -> Vec2 {
        Vec2::new(self.vehicle.x, self.anchor_y())
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_obstacle_at(&mut self, pos: Vec2, speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle {
            id,
            pos,
            speed,
            frozen: false,
            alive: true,
            size: self.tuning.obstacle_size,
        });
        id
    }

    pub fn spawn_item_at(&mut self, pos: Vec2, kind: AbilityKind) -> u32 {
        let id = self.next_entity_id();
        self.items.push(Item {
            id,
            pos,
            kind,
            size: self.tuning.item_size,
        });
        id
    }

    pub fn spawn_bullet_at(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.bullets.push(Bullet {
            id,
            pos,
            vy: -self.tuning.bullet_speed,
            alive: true,
        });
        id
    }

    /// Burst of particles; anything past the pool cap is dropped
    pub fn spawn_explosion(&mut self, pos: Vec2, color: Color) {
        let room = self.max_particles.saturating_sub(self.particles.len());
        let count = self.tuning.particles_per_explosion.min(room);
        let spread = self.tuning.particle_spread;

        for _ in 0..count {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * spread,
                (self.rng.random::<f32>() - 0.5) * spread,
            );
            self.particles.push(Particle {
                pos,
                vel,
                life: self.tuning.particle_life,
                color,
            });
        }
    }

    /// Ensure pools are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
        self.items.sort_by_key(|i| i.id);
        self.bullets.sort_by_key(|b| b.id);
    }
}
