//! Idle/demo driver
//!
//! Produces control input from the current state: dodge the closest obstacle
//! ahead when the car is too slow to plough through it, otherwise chase the
//! nearest item. Used by the headless runner and for attract-mode demos.

use super::state::SimulationState;
use super::tick::ControlInput;

/// How far up the road the driver looks
const LOOKAHEAD: f32 = 300.0;
/// Lateral distance that counts as "in our lane"
const LANE_HALF_WIDTH: f32 = 60.0;
/// Don't twitch for tiny offsets
const DEAD_ZONE: f32 = 8.0;

pub fn drive(state: &SimulationState) -> ControlInput {
    let me = state.vehicle_pos();
    let ahead = |y: f32| y < me.y && me.y - y < LOOKAHEAD;
    let safe_to_ram =
        state.vehicle.speed > state.tuning.kill_speed + 1.0 || state.vehicle.effects().grants_kill;

    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.alive && !o.frozen && ahead(o.pos.y))
        .filter(|o| (o.pos.x - me.x).abs() < LANE_HALF_WIDTH)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let target_x = match threat {
        Some(obstacle) if !safe_to_ram => {
            // Swerve to whichever side has more road
            let limit = state.tuning.vehicle_x_limit();
            let dodge_left = obstacle.pos.x > me.x || me.x > limit - LANE_HALF_WIDTH;
            let dodge_left = dodge_left && me.x > -limit + LANE_HALF_WIDTH;
            Some(if dodge_left {
                obstacle.pos.x - LANE_HALF_WIDTH * 1.5
            } else {
                obstacle.pos.x + LANE_HALF_WIDTH * 1.5
            })
        }
        _ => state
            .items
            .iter()
            .filter(|i| ahead(i.pos.y))
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|i| i.pos.x),
    };

    let offset = target_x.map(|x| x - me.x).unwrap_or(0.0);
    ControlInput {
        accelerate: true,
        steer_left: offset < -DEAD_ZONE,
        steer_right: offset > DEAD_ZONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ability::AbilityKind;
    use crate::sim::geometry::Viewport;
    use glam::Vec2;

    #[test]
    fn test_cruises_straight_on_empty_road() {
        let state = SimulationState::new(1, Viewport::default());
        let input = drive(&state);
        assert!(input.accelerate);
        assert_eq!(input.steer_direction(), 0.0);
    }

    #[test]
    fn test_dodges_when_slow() {
        let mut state = SimulationState::new(1, Viewport::default());
        let pos = state.vehicle_pos() + Vec2::new(10.0, -100.0);
        state.spawn_obstacle_at(pos, 1.0);
        let input = drive(&state);
        assert!(input.steer_left);
    }

    #[test]
    fn test_chases_items_when_fast() {
        let mut state = SimulationState::new(1, Viewport::default());
        state.vehicle.speed = 12.0;
        let anchor = state.vehicle_pos();
        state.spawn_obstacle_at(anchor + Vec2::new(0.0, -50.0), 1.0);
        state.spawn_item_at(anchor + Vec2::new(100.0, -200.0), AbilityKind::Gun);
        let input = drive(&state);
        assert!(input.steer_right);
    }
}
