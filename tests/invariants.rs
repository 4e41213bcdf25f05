//! Property tests over random seeds and input sequences

use proptest::prelude::*;

use zombie_drift::sim::{ControlInput, SimulationState, Viewport, tick};

fn control() -> impl Strategy<Value = ControlInput> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(accelerate, steer_left, steer_right)| {
        ControlInput {
            accelerate,
            steer_left,
            steer_right,
        }
    })
}

fn viewport() -> impl Strategy<Value = Viewport> {
    (320.0f32..1920.0, 400.0f32..1200.0).prop_map(|(w, h)| Viewport::new(w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vehicle_stays_on_road_and_under_speed_cap(
        seed in any::<u64>(),
        viewport in viewport(),
        inputs in prop::collection::vec(control(), 1..600),
    ) {
        let mut state = SimulationState::new(seed, viewport);
        let limit = state.tuning.vehicle_x_limit();
        let max_speed = state.tuning.max_speed;

        for input in &inputs {
            tick(&mut state, input);

            prop_assert!(state.vehicle.x.abs() <= limit, "x = {}", state.vehicle.x);
            let cap = state.vehicle.speed_cap(max_speed);
            prop_assert!(state.vehicle.speed >= 0.0);
            prop_assert!(state.vehicle.speed <= cap, "speed {} > cap {}", state.vehicle.speed, cap);
            prop_assert!(
                (-std::f32::consts::PI..std::f32::consts::PI).contains(&state.vehicle.heading)
            );
        }
    }

    #[test]
    fn same_seed_same_run(
        seed in any::<u64>(),
        inputs in prop::collection::vec(control(), 1..300),
    ) {
        let mut a = SimulationState::new(seed, Viewport::default());
        let mut b = SimulationState::new(seed, Viewport::default());

        for input in &inputs {
            prop_assert_eq!(tick(&mut a, input), tick(&mut b, input));
        }
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.frame, b.frame);
        prop_assert_eq!(a.vehicle.x, b.vehicle.x);
        prop_assert_eq!(a.obstacles.len(), b.obstacles.len());
        prop_assert_eq!(a.items.len(), b.items.len());
    }

    #[test]
    fn game_over_is_permanent(
        seed in any::<u64>(),
        inputs in prop::collection::vec(control(), 1..50),
    ) {
        let mut state = SimulationState::new(seed, Viewport::default());
        state.spawn_obstacle_at(state.vehicle_pos(), 0.0);
        tick(&mut state, &ControlInput::default());
        prop_assert!(state.is_game_over());

        let frame = state.frame;
        let score = state.score;
        let x = state.vehicle.x;
        let obstacles = state.obstacles.len();
        for input in &inputs {
            prop_assert!(tick(&mut state, input).is_empty());
        }
        prop_assert_eq!(state.frame, frame);
        prop_assert_eq!(state.score, score);
        prop_assert_eq!(state.vehicle.x, x);
        prop_assert_eq!(state.obstacles.len(), obstacles);
    }
}
