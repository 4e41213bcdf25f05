//! Read-only view of a finished frame for renderers and UI
//!
//! Built after `tick` returns; holds copies, so the simulation can keep
//! running while a renderer works from the snapshot.

use glam::Vec2;
use serde::Serialize;

use super::ability::AbilityKind;
use super::geometry::Viewport;
use super::state::{GamePhase, SimulationState};
use crate::color::Color;
use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

#[derive(Debug, Clone, Serialize)]
pub struct VehicleView {
    /// Position in the shared road frame
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub ability: Option<AbilityKind>,
    pub ability_remaining: u32,
    pub width: f32,
    pub height: f32,
    /// Draw scale (2 while giant)
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub pos: Vec2,
    pub frozen: bool,
    pub size: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub pos: Vec2,
    pub kind: AbilityKind,
    pub size: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletView {
    pub id: u32,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Remaining life as a fraction of the full lifetime
    pub alpha: f32,
    pub color: Color,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub road_width: f32,
    pub vehicle: VehicleView,
    pub obstacles: Vec<ObstacleView>,
    pub items: Vec<ItemView>,
    pub bullets: Vec<BulletView>,
    pub particles: Vec<ParticleView>,
}

impl RenderSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let vehicle = &state.vehicle;
        let full_life = state.tuning.particle_life.max(1) as f32;

        Self {
            frame: state.frame,
            score: state.score,
            phase: state.phase,
            viewport: state.viewport,
            road_width: state.tuning.road_width,
            vehicle: VehicleView {
                pos: state.vehicle_pos(),
                heading: vehicle.heading,
                speed: vehicle.speed,
                ability: vehicle.ability_kind(),
                ability_remaining: vehicle.ability.map(|a| a.remaining).unwrap_or(0),
                width: CAR_WIDTH,
                height: CAR_HEIGHT,
                scale: vehicle.effects().hitbox_scale,
            },
            obstacles: state
                .obstacles
                .iter()
                .filter(|o| o.alive)
                .map(|o| ObstacleView {
                    id: o.id,
                    pos: o.pos,
                    frozen: o.frozen,
                    size: o.size,
                })
                .collect(),
            items: state
                .items
                .iter()
                .map(|i| ItemView {
                    id: i.id,
                    pos: i.pos,
                    kind: i.kind,
                    size: i.size,
                })
                .collect(),
            bullets: state
                .bullets
                .iter()
                .filter(|b| b.alive)
                .map(|b| BulletView { id: b.id, pos: b.pos })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    alpha: p.life as f32 / full_life,
                    color: p.color,
                })
                .collect(),
        }
    }
}

impl SimulationState {
    /// Snapshot of the current frame
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ability::ActiveAbility;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = SimulationState::new(1, Viewport::new(640.0, 480.0));
        state.vehicle.x = -20.0;
        state.vehicle.ability = Some(ActiveAbility {
            kind: AbilityKind::Giant,
            remaining: 42,
        });
        state.spawn_obstacle_at(Vec2::new(10.0, 10.0), 1.0);
        state.spawn_item_at(Vec2::new(0.0, 0.0), AbilityKind::Money);
        state.spawn_explosion(Vec2::ZERO, Color::WHITE);

        let snap = state.snapshot();
        assert_eq!(snap.vehicle.pos, Vec2::new(-20.0, 330.0));
        assert_eq!(snap.vehicle.ability, Some(AbilityKind::Giant));
        assert_eq!(snap.vehicle.ability_remaining, 42);
        assert_eq!(snap.vehicle.scale, 2.0);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.items[0].kind, AbilityKind::Money);
        assert!(snap.particles.iter().all(|p| p.alpha == 1.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SimulationState::new(1, Viewport::default());
        let json = serde_json::to_value(state.snapshot()).expect("serializable");
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["vehicle"]["ability"], serde_json::Value::Null);
    }
}
