//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults match the shipped
//! game; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Axis-aligned contact thresholds (strict `<` on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactBox {
    pub half_x: f32,
    pub half_y: f32,
}

impl ContactBox {
    pub const fn new(half_x: f32, half_y: f32) -> Self {
        Self { half_x, half_y }
    }
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Road & vehicle ===
    pub road_width: f32,
    pub vehicle_half_width: f32,
    pub vehicle_anchor_offset: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub coast_decay: f32,
    pub turn_rate: f32,
    pub steer_min_speed: f32,
    pub drift_factor: f32,
    pub wall_bounce: f32,
    pub heading_recenter: f32,
    pub kill_speed: f32,

    // === Spawning ===
    pub obstacle_spawn_chance: f64,
    pub item_spawn_chance: f64,
    pub spawn_y: f32,
    /// Road width excluded from obstacle spawn X (split across both edges)
    pub obstacle_spawn_margin: f32,
    pub item_spawn_margin: f32,
    pub obstacle_min_speed: f32,
    pub obstacle_speed_range: f32,
    /// Max lateral random-walk step per frame
    pub obstacle_jitter: f32,
    pub obstacle_size: f32,
    pub item_size: f32,

    // === Gun ===
    pub bullet_interval: u64,
    pub bullet_speed: f32,
    /// Bullets leave this far above the anchor line
    pub bullet_muzzle_offset: f32,

    // === Collision & scoring ===
    pub obstacle_contact: ContactBox,
    pub item_contact: ContactBox,
    pub bullet_contact: ContactBox,
    pub cull_margin: f32,
    /// Top of the band cleared by a shockwave
    pub shock_band_top: f32,
    pub shock_points: u64,

    // === Effects ===
    pub particles_per_explosion: usize,
    pub particle_life: u32,
    /// Particle velocity components are uniform in ±spread/2
    pub particle_spread: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            vehicle_half_width: VEHICLE_HALF_WIDTH,
            vehicle_anchor_offset: VEHICLE_ANCHOR_OFFSET,
            max_speed: MAX_SPEED,
            acceleration: ACCELERATION,
            coast_decay: COAST_DECAY,
            turn_rate: TURN_RATE,
            steer_min_speed: STEER_MIN_SPEED,
            drift_factor: DRIFT_FACTOR,
            wall_bounce: WALL_BOUNCE,
            heading_recenter: HEADING_RECENTER,
            kill_speed: KILL_SPEED,

            obstacle_spawn_chance: 0.03,
            item_spawn_chance: 0.005,
            spawn_y: SPAWN_Y,
            obstacle_spawn_margin: 60.0,
            item_spawn_margin: 80.0,
            obstacle_min_speed: 1.0,
            obstacle_speed_range: 2.0,
            obstacle_jitter: 1.0,
            obstacle_size: OBSTACLE_SIZE,
            item_size: ITEM_SIZE,

            bullet_interval: 10,
            bullet_speed: 15.0,
            bullet_muzzle_offset: 40.0,

            obstacle_contact: ContactBox::new(30.0, 40.0),
            item_contact: ContactBox::new(40.0, 40.0),
            bullet_contact: ContactBox::new(20.0, 20.0),
            cull_margin: CULL_MARGIN,
            shock_band_top: -200.0,
            shock_points: 10,

            particles_per_explosion: PARTICLES_PER_EXPLOSION,
            particle_life: PARTICLE_LIFE,
            particle_spread: 10.0,
        }
    }
}

/// Failure to load a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    /// Not valid JSON, or a field has the wrong type
    #[error("malformed tuning document: {0}")]
    Json(#[from] serde_json::Error),
    /// Parsed, but a value is out of range
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

impl Tuning {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value keeps the simulation well-formed
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(msg: impl Into<String>) -> Result<(), TuningError> {
            Err(TuningError::Invalid(msg.into()))
        }

        let reals = [
            ("road_width", self.road_width),
            ("vehicle_half_width", self.vehicle_half_width),
            ("vehicle_anchor_offset", self.vehicle_anchor_offset),
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("coast_decay", self.coast_decay),
            ("turn_rate", self.turn_rate),
            ("steer_min_speed", self.steer_min_speed),
            ("drift_factor", self.drift_factor),
            ("wall_bounce", self.wall_bounce),
            ("heading_recenter", self.heading_recenter),
            ("kill_speed", self.kill_speed),
            ("spawn_y", self.spawn_y),
            ("obstacle_spawn_margin", self.obstacle_spawn_margin),
            ("item_spawn_margin", self.item_spawn_margin),
            ("obstacle_min_speed", self.obstacle_min_speed),
            ("obstacle_speed_range", self.obstacle_speed_range),
            ("obstacle_jitter", self.obstacle_jitter),
            ("obstacle_size", self.obstacle_size),
            ("item_size", self.item_size),
            ("bullet_speed", self.bullet_speed),
            ("bullet_muzzle_offset", self.bullet_muzzle_offset),
            ("cull_margin", self.cull_margin),
            ("shock_band_top", self.shock_band_top),
            ("particle_spread", self.particle_spread),
        ];
        if let Some((name, v)) = reals.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(format!("{name} must be finite, got {v}"));
        }
        for (name, contact) in [
            ("obstacle_contact", self.obstacle_contact),
            ("item_contact", self.item_contact),
            ("bullet_contact", self.bullet_contact),
        ] {
            if !(contact.half_x.is_finite() && contact.half_y.is_finite()) {
                return invalid(format!("{name} must be finite"));
            }
        }

        for (name, p) in [
            ("obstacle_spawn_chance", self.obstacle_spawn_chance),
            ("item_spawn_chance", self.item_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{name} must be within [0, 1], got {p}"));
            }
        }
        for (name, factor) in [
            ("coast_decay", self.coast_decay),
            ("heading_recenter", self.heading_recenter),
        ] {
            if !(0.0..=1.0).contains(&factor) {
                return invalid(format!("{name} must be within [0, 1], got {factor}"));
            }
        }
        if !(0.0..1.0).contains(&self.drift_factor) {
            return invalid(format!(
                "drift_factor must be within [0, 1), got {}",
                self.drift_factor
            ));
        }
        if !(-1.0..=0.0).contains(&self.wall_bounce) {
            return invalid(format!(
                "wall_bounce must be within [-1, 0], got {}",
                self.wall_bounce
            ));
        }
        // One frame of steering may not exceed half a turn
        if !(0.0..=std::f32::consts::PI).contains(&self.turn_rate) {
            return invalid(format!(
                "turn_rate must be within [0, pi], got {}",
                self.turn_rate
            ));
        }
        if self.road_width <= 0.0 || self.max_speed <= 0.0 {
            return invalid("road_width and max_speed must be positive");
        }
        for (name, v) in [
            ("acceleration", self.acceleration),
            ("kill_speed", self.kill_speed),
            ("obstacle_min_speed", self.obstacle_min_speed),
            ("obstacle_speed_range", self.obstacle_speed_range),
            ("obstacle_jitter", self.obstacle_jitter),
            ("particle_spread", self.particle_spread),
        ] {
            if v < 0.0 {
                return invalid(format!("{name} must not be negative, got {v}"));
            }
        }
        if self.vehicle_half_width < 0.0 || self.vehicle_half_width * 2.0 >= self.road_width {
            return invalid(format!(
                "vehicle (half width {}) does not fit a road of width {}",
                self.vehicle_half_width, self.road_width
            ));
        }
        for (name, size) in [
            ("obstacle_size", self.obstacle_size),
            ("item_size", self.item_size),
        ] {
            if size <= 0.0 || size >= self.road_width {
                return invalid(format!(
                    "{name} {size} does not fit a road of width {}",
                    self.road_width
                ));
            }
        }
        if self.obstacle_spawn_margin > self.road_width || self.item_spawn_margin > self.road_width
        {
            return invalid("spawn margins exceed the road width");
        }
        if self.bullet_interval == 0 {
            return invalid("bullet_interval must be at least 1");
        }
        Ok(())
    }

    /// Largest |x| the vehicle may occupy
    #[inline]
    pub fn vehicle_x_limit(&self) -> f32 {
        self.road_width / 2.0 - self.vehicle_half_width
    }

    /// Largest |x| an obstacle may occupy
    #[inline]
    pub fn obstacle_x_limit(&self) -> f32 {
        self.road_width / 2.0 - self.obstacle_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().vehicle_x_limit(), 170.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_speed": 20.0, "obstacle_spawn_chance": 0.0 }"#)
            .expect("valid override");
        assert_eq!(tuning.max_speed, 20.0);
        assert_eq!(tuning.obstacle_spawn_chance, 0.0);
        assert_eq!(tuning.road_width, ROAD_WIDTH);
        assert_eq!(tuning.item_contact, ContactBox::new(40.0, 40.0));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "item_spawn_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_vehicle_wider_than_road() {
        let err = Tuning::from_json(r#"{ "road_width": 50.0 }"#).unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn test_rejects_obstacle_wider_than_road() {
        let err = Tuning::from_json(r#"{ "obstacle_size": 500.0 }"#).unwrap_err();
        assert!(err.to_string().contains("obstacle_size"));

        let err = Tuning::from_json(r#"{ "item_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_runaway_turn_rate() {
        let err = Tuning::from_json(r#"{ "turn_rate": 1e30 }"#).unwrap_err();
        assert!(err.to_string().contains("turn_rate"));
        assert!(Tuning::from_json(r#"{ "turn_rate": 3.0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_factors() {
        for json in [
            r#"{ "coast_decay": 1.5 }"#,
            r#"{ "heading_recenter": -0.1 }"#,
            r#"{ "wall_bounce": 0.5 }"#,
            r#"{ "obstacle_jitter": -1.0 }"#,
            r#"{ "obstacle_contact": { "half_x": 1e39, "half_y": 40.0 } }"#,
        ] {
            assert!(Tuning::from_json(json).is_err(), "{json} should be rejected");
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ max_speed: ").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let mut tuning = Tuning::default();
        tuning.bullet_interval = 4;
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
