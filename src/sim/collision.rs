//! Collision detection and scoring
//!
//! Runs once per frame after every position update, in a fixed order:
//! obstacles against the vehicle, items against the vehicle, then bullets
//! against obstacles. All tests are rectangular distance checks in the shared
//! road-relative frame.

use glam::Vec2;

use super::ability::{self, AbilityEffects};
use super::geometry::within_box;
use super::state::{GameEvent, GamePhase, Obstacle, SimulationState};
use crate::color::Color;
use crate::tuning::{ContactBox, Tuning};

/// Explosion colors
pub mod splat {
    use crate::color::Color;

    pub const BLOOD: Color = Color::hex(0xaa0000);
    pub const ICE: Color = Color::hex(0xccddff);
    pub const CRASH: Color = Color::WHITE;
    pub const BULLET: Color = Color::hex(0x00ff00);
}

/// Outcome of the vehicle touching an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Obstacle dies, vehicle survives
    Kill,
    /// Vehicle is wrecked
    Crash,
}

/// Obstacle contact box, widened by the active ability
#[inline]
pub fn obstacle_contact(tuning: &Tuning, effects: &AbilityEffects) -> ContactBox {
    ContactBox::new(
        tuning.obstacle_contact.half_x * effects.hitbox_scale,
        tuning.obstacle_contact.half_y,
    )
}

/// Decide what happens when the vehicle hits `obstacle`
pub fn impact(
    speed: f32,
    effects: &AbilityEffects,
    obstacle: &Obstacle,
    kill_speed: f32,
) -> Impact {
    if speed > kill_speed || effects.grants_kill || obstacle.frozen {
        Impact::Kill
    } else {
        Impact::Crash
    }
}

/// Run all three passes. Stops after the obstacle pass if the vehicle crashed.
pub fn resolve(state: &mut SimulationState, events: &mut Vec<GameEvent>) {
    obstacle_pass(state, events);
    if state.is_game_over() {
        return;
    }
    item_pass(state, events);
    bullet_pass(state);
}

/// Vehicle against every live obstacle
pub fn obstacle_pass(state: &mut SimulationState, events: &mut Vec<GameEvent>) {
    let vehicle_pos = state.vehicle_pos();
    let effects = state.vehicle.effects();
    let contact = obstacle_contact(&state.tuning, &effects);
    let kill_speed = state.tuning.kill_speed;
    let speed = state.vehicle.speed;

    let mut splats: Vec<Color> = Vec::new();
    let mut crashed = false;

    for obstacle in state.obstacles.iter_mut().filter(|o| o.alive) {
        if !within_box(obstacle.pos, vehicle_pos, contact) {
            continue;
        }
        match impact(speed, &effects, obstacle, kill_speed) {
            Impact::Kill => {
                obstacle.alive = false;
                splats.push(if obstacle.frozen {
                    splat::ICE
                } else {
                    splat::BLOOD
                });
                log::debug!("Obstacle {} run over", obstacle.id);
            }
            Impact::Crash => {
                crashed = true;
                break;
            }
        }
    }

    state.score += splats.len() as u64 * effects.score_multiplier;
    for color in splats {
        state.spawn_explosion(vehicle_pos, color);
    }

    if crashed {
        state.phase = GamePhase::GameOver;
        state.spawn_explosion(vehicle_pos, splat::CRASH);
        events.push(GameEvent::GameOver {
            final_score: state.score,
        });
        log::info!(
            "Game over at frame {} with score {} (speed {:.2})",
            state.frame,
            state.score,
            speed
        );
    }
}

/// Vehicle against items; each touched item activates its ability once
pub fn item_pass(state: &mut SimulationState, events: &mut Vec<GameEvent>) {
    let vehicle_pos = state.vehicle_pos();
    let contact = state.tuning.item_contact;

    let mut i = 0;
    while i < state.items.len() {
        if within_box(state.items[i].pos, vehicle_pos, contact) {
            let item = state.items.remove(i);
            ability::activate(state, item.kind, events);
        } else {
            i += 1;
        }
    }
}

/// Each bullet kills at most the first obstacle it touches
pub fn bullet_pass(state: &mut SimulationState) {
    let contact = state.tuning.bullet_contact;
    let mut hits: Vec<Vec2> = Vec::new();

    for bullet in state.bullets.iter_mut().filter(|b| b.alive) {
        let target = state
            .obstacles
            .iter_mut()
            .find(|o| o.alive && within_box(bullet.pos, o.pos, contact));
        if let Some(obstacle) = target {
            obstacle.alive = false;
            bullet.alive = false;
            hits.push(obstacle.pos);
            log::debug!("Bullet {} hit obstacle {}", bullet.id, obstacle.id);
        }
    }

    state.score += hits.len() as u64;
    for pos in hits {
        state.spawn_explosion(pos, splat::BULLET);
    }
}
