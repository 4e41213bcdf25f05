//! Per-frame simulation step
//!
//! Core game loop that advances the simulation one frame deterministically.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, SimulationState};
use super::{collision, spawn, vehicle, world};

/// Normalized control input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInput {
    pub accelerate: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl ControlInput {
    /// -1 left, +1 right, 0 straight. Left wins when both are held.
    #[inline]
    pub fn steer_direction(&self) -> f32 {
        if self.steer_left {
            -1.0
        } else if self.steer_right {
            1.0
        } else {
            0.0
        }
    }
}

/// Advance the game state by one frame, returning the UI events it produced
pub fn tick(state: &mut SimulationState, input: &ControlInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // The world is frozen once the run has ended
    if state.is_game_over() {
        return events;
    }

    let score_before = state.score;

    vehicle::update(state, input, &mut events);
    let forward = vehicle::forward_speed(&state.vehicle);

    spawn::spawn(state);
    world::advance(state, forward);

    collision::resolve(state, &mut events);

    world::cull(state);
    world::age_particles(state);

    state.frame += 1;

    // Ensure deterministic ordering
    state.normalize_order();

    if state.score != score_before {
        announce_score(&mut events, state.score);
    }

    events
}

/// Queue the frame's score total ahead of any `GameOver`, so the UI shows the
/// final total first
fn announce_score(events: &mut Vec<GameEvent>, score: u64) {
    let at = events
        .iter()
        .position(|e| matches!(e, GameEvent::GameOver { .. }))
        .unwrap_or(events.len());
    events.insert(at, GameEvent::ScoreChanged(score));
}
