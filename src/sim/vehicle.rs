//! Vehicle physics
//!
//! Arcade drift model: the car accelerates along its heading, but its actual
//! velocity only eases toward the heading each frame, so hard turns slide.
//! X is integrated directly; forward motion is expressed by scrolling the
//! world instead (see [`forward_speed`]).

use glam::Vec2;

use super::ability;
use super::geometry::clamp_to_road;
use super::state::{GameEvent, SimulationState, Vehicle};
use super::tick::ControlInput;
use crate::normalize_angle;
use crate::tuning::Tuning;

/// Advance the vehicle one frame and count down its ability
pub fn update(state: &mut SimulationState, input: &ControlInput, events: &mut Vec<GameEvent>) {
    if state.is_game_over() {
        return;
    }
    drive(&mut state.vehicle, input, &state.tuning);
    ability::tick_timer(state, events);
}

/// Apply throttle, steering, drift and road clamping
pub fn drive(vehicle: &mut Vehicle, input: &ControlInput, tuning: &Tuning) {
    let steer = input.steer_direction();

    if input.accelerate {
        vehicle.speed += tuning.acceleration;
    } else {
        vehicle.speed *= tuning.coast_decay;
    }
    vehicle.clamp_speed(tuning.max_speed);

    if steer != 0.0 && vehicle.speed > tuning.steer_min_speed {
        vehicle.heading = normalize_angle(
            vehicle.heading + steer * tuning.turn_rate * (vehicle.speed / tuning.max_speed),
        );
    }

    // Direction the wheels point (up the screen is -Y)
    let desired = Vec2::new(vehicle.heading.sin(), -vehicle.heading.cos()) * vehicle.speed;
    vehicle.velocity =
        vehicle.velocity * tuning.drift_factor + desired * (1.0 - tuning.drift_factor);

    let (x, hit_edge) = clamp_to_road(vehicle.x + vehicle.velocity.x, tuning.vehicle_x_limit());
    vehicle.x = x;
    if hit_edge {
        vehicle.velocity.x *= tuning.wall_bounce;
    }

    // Self-centering
    if steer == 0.0 {
        vehicle.heading *= tuning.heading_recenter;
    }
}

/// World scroll rate for this frame: the vehicle's forward velocity,
/// scaled by the active ability
#[inline]
pub fn forward_speed(vehicle: &Vehicle) -> f32 {
    -vehicle.velocity.y * vehicle.effects().scroll_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ability::{AbilityKind, ActiveAbility};

    const GAS: ControlInput = ControlInput {
        accelerate: true,
        steer_left: false,
        steer_right: false,
    };

    #[test]
    fn test_accelerates_to_cap() {
        let tuning = Tuning::default();
        let mut vehicle = Vehicle::default();
        for _ in 0..100 {
            drive(&mut vehicle, &GAS, &tuning);
        }
        assert_eq!(vehicle.speed, 12.0);
        // Straight ahead: all velocity is forward
        assert!(vehicle.velocity.x.abs() < 1e-4);
        assert!(forward_speed(&vehicle) > 11.0);
    }

    #[test]
    fn test_coasting_decays() {
        let tuning = Tuning::default();
        let mut vehicle = Vehicle {
            speed: 10.0,
            ..Default::default()
        };
        drive(&mut vehicle, &ControlInput::default(), &tuning);
        assert!((vehicle.speed - 9.8).abs() < 1e-5);
    }

    #[test]
    fn test_no_steering_below_threshold() {
        let tuning = Tuning::default();
        let mut vehicle = Vehicle::default();
        let input = ControlInput {
            accelerate: false,
            steer_left: true,
            steer_right: false,
        };
        drive(&mut vehicle, &input, &tuning);
        assert_eq!(vehicle.heading, 0.0);
    }

    #[test]
    fn test_steering_turns_and_drifts() {
        let tuning = Tuning::default();
        let mut vehicle = Vehicle {
            speed: 12.0,
            velocity: Vec2::new(0.0, -12.0),
            ..Default::default()
        };
        let right = ControlInput {
            accelerate: true,
            steer_left: false,
            steer_right: true,
        };
        drive(&mut vehicle, &right, &tuning);
        assert!((vehicle.heading - 0.08).abs() < 1e-5);
        // Velocity lags the heading
        let desired_x = vehicle.heading.sin() * vehicle.speed;
        assert!(vehicle.velocity.x > 0.0 && vehicle.velocity.x < desired_x);
    }

    #[test]
    fn test_heading_recenters_without_steer() {
        let tuning = Tuning::default();
        let mut vehicle = Vehicle {
            heading: 0.5,
            ..Default::default()
        };
        drive(&mut vehicle, &ControlInput::default(), &tuning);
        assert!((vehicle.heading - 0.45).abs() < 1e-5);
    }

    #[test]
    fn test_road_edge_bounces() {
        let tuning = Tuning::default();
        let mut vehicle = Vehicle {
            x: 168.0,
            velocity: Vec2::new(10.0, 0.0),
            ..Default::default()
        };
        drive(&mut vehicle, &ControlInput::default(), &tuning);
        assert_eq!(vehicle.x, 170.0);
        assert!(vehicle.velocity.x < 0.0);
        assert!((vehicle.velocity.x + 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_slow_mo_halves_scroll() {
        let mut vehicle = Vehicle {
            velocity: Vec2::new(0.0, -10.0),
            ..Default::default()
        };
        assert_eq!(forward_speed(&vehicle), 10.0);
        vehicle.ability = Some(ActiveAbility {
            kind: AbilityKind::Time,
            remaining: 5,
        });
        assert_eq!(forward_speed(&vehicle), 5.0);
    }
}
