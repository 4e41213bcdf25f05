//! Probabilistic spawning
//!
//! Obstacles and items appear on the off-screen row above the viewport at a
//! random X inside the road. The gun fires on a fixed frame cadence.

use glam::Vec2;
use rand::Rng;

use super::ability::AbilityKind;
use super::state::SimulationState;

/// Roll this frame's spawns
pub fn spawn(state: &mut SimulationState) {
    if state.rng.random_bool(state.tuning.obstacle_spawn_chance) {
        spawn_obstacle(state);
    }
    if state.rng.random_bool(state.tuning.item_spawn_chance) {
        spawn_item(state);
    }
    if state.vehicle.effects().fires_bullets && state.frame % state.tuning.bullet_interval == 0 {
        fire_bullet(state);
    }
}

/// Uniform X in `±(road_width - margin) / 2`
fn random_road_x(state: &mut SimulationState, margin: f32) -> f32 {
    let span = state.tuning.road_width - margin;
    (state.rng.random::<f32>() - 0.5) * span
}

pub fn spawn_obstacle(state: &mut SimulationState) -> u32 {
    let margin = state.tuning.obstacle_spawn_margin;
    let x = random_road_x(state, margin);
    let speed = state.tuning.obstacle_min_speed
        + state.rng.random::<f32>() * state.tuning.obstacle_speed_range;
    let id = state.spawn_obstacle_at(Vec2::new(x, state.tuning.spawn_y), speed);
    log::debug!("Obstacle {} spawned at x={:.1} speed={:.2}", id, x, speed);
    id
}

pub fn spawn_item(state: &mut SimulationState) -> u32 {
    let margin = state.tuning.item_spawn_margin;
    let x = random_road_x(state, margin);
    let kind = AbilityKind::ALL[state.rng.random_range(0..AbilityKind::ALL.len())];
    let id = state.spawn_item_at(Vec2::new(x, state.tuning.spawn_y), kind);
    log::debug!("Item {} ({}) spawned at x={:.1}", id, kind.id(), x);
    id
}

pub fn fire_bullet(state: &mut SimulationState) -> u32 {
    let muzzle = state.vehicle_pos() - Vec2::new(0.0, state.tuning.bullet_muzzle_offset);
    state.spawn_bullet_at(muzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ability::ActiveAbility;
    use crate::sim::geometry::Viewport;
    use crate::tuning::Tuning;

    #[test]
    fn test_spawn_positions_stay_on_road() {
        let mut state = SimulationState::new(42, Viewport::default());
        for _ in 0..500 {
            spawn_obstacle(&mut state);
            spawn_item(&mut state);
        }
        assert!(state.obstacles.iter().all(|o| o.pos.x.abs() <= 170.0));
        assert!(state.obstacles.iter().all(|o| (1.0..3.0).contains(&o.speed)));
        assert!(state.items.iter().all(|i| i.pos.x.abs() <= 160.0));
        assert!(state.items.iter().all(|i| i.pos.y == -100.0));
    }

    #[test]
    fn test_zero_chance_never_spawns() {
        let tuning = Tuning {
            obstacle_spawn_chance: 0.0,
            item_spawn_chance: 0.0,
            ..Tuning::default()
        };
        let mut state = SimulationState::new(42, Viewport::default()).with_tuning(tuning);
        for _ in 0..1000 {
            spawn(&mut state);
        }
        assert!(state.obstacles.is_empty() && state.items.is_empty());
    }

    #[test]
    fn test_gun_cadence() {
        let tuning = Tuning {
            obstacle_spawn_chance: 0.0,
            item_spawn_chance: 0.0,
            ..Tuning::default()
        };
        let mut state = SimulationState::new(3, Viewport::new(800.0, 600.0)).with_tuning(tuning);
        state.vehicle.x = 25.0;
        state.vehicle.ability = Some(ActiveAbility {
            kind: AbilityKind::Gun,
            remaining: 250,
        });

        for frame in 0..30 {
            state.frame = frame;
            spawn(&mut state);
        }

        assert_eq!(state.bullets.len(), 3);
        assert_eq!(state.bullets[0].pos, Vec2::new(25.0, 410.0));
    }
}
