//! Power-up abilities
//!
//! A closed set of kinds, a static catalog (name, duration, color) and an
//! effect table. Gameplay code reads [`AbilityEffects`] instead of branching
//! on the kind, so a new ability is mostly a new table row.
//!
//! At most one ability is active on the vehicle. Activating one replaces the
//! current one outright; `Shock` resolves instantly and never stays active.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, SimulationState};
use crate::color::Color;

/// Ability kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityKind {
    Nitro,
    Shield,
    Freeze,
    Gun,
    Giant,
    Saws,
    Time,
    Hover,
    Shock,
    Money,
}

/// Static catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityDef {
    pub kind: AbilityKind,
    pub id: &'static str,
    pub name: &'static str,
    /// Duration in frames
    pub duration: u32,
    pub color: Color,
}

const fn def(
    kind: AbilityKind,
    id: &'static str,
    name: &'static str,
    duration: u32,
    rgb: u32,
) -> AbilityDef {
    AbilityDef {
        kind,
        id,
        name,
        duration,
        color: Color::hex(rgb),
    }
}

/// Indexed by `AbilityKind as usize`
pub const CATALOG: [AbilityDef; 10] = [
    def(AbilityKind::Nitro, "nitro", "NITRO", 180, 0xff8800),
    def(AbilityKind::Shield, "shield", "SHIELD", 300, 0x00ffff),
    def(AbilityKind::Freeze, "freeze", "FREEZE", 400, 0x00bbff),
    def(AbilityKind::Gun, "gun", "M.GUN", 250, 0x666666),
    def(AbilityKind::Giant, "giant", "GIANT", 300, 0xaa0000),
    def(AbilityKind::Saws, "saws", "SAWS", 400, 0xcccccc),
    def(AbilityKind::Time, "time", "SLOW MO", 200, 0x0000ff),
    def(AbilityKind::Hover, "hover", "HOVER", 300, 0xffff00),
    def(AbilityKind::Shock, "shock", "SHOCKWAVE", 10, 0xffffff),
    def(AbilityKind::Money, "money", "x3 POINTS", 500, 0xffdd00),
];

/// Gameplay modifiers granted by the active ability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityEffects {
    /// Multiplier on the vehicle's max speed
    pub speed_multiplier: f32,
    /// Multiplier on the obstacle contact width
    pub hitbox_scale: f32,
    /// Obstacles die on contact regardless of speed
    pub grants_kill: bool,
    pub freezes_obstacles: bool,
    pub fires_bullets: bool,
    /// Multiplier on the world scroll rate
    pub scroll_multiplier: f32,
    /// Multiplier on obstacles' own forward creep
    pub self_motion_multiplier: f32,
    /// Points per vehicle kill
    pub score_multiplier: u64,
    /// Resolves on pickup and never stays active
    pub instant: bool,
}

impl AbilityEffects {
    pub const NONE: AbilityEffects = AbilityEffects {
        speed_multiplier: 1.0,
        hitbox_scale: 1.0,
        grants_kill: false,
        freezes_obstacles: false,
        fires_bullets: false,
        scroll_multiplier: 1.0,
        self_motion_multiplier: 1.0,
        score_multiplier: 1,
        instant: false,
    };
}

impl Default for AbilityEffects {
    fn default() -> Self {
        Self::NONE
    }
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 10] = [
        AbilityKind::Nitro,
        AbilityKind::Shield,
        AbilityKind::Freeze,
        AbilityKind::Gun,
        AbilityKind::Giant,
        AbilityKind::Saws,
        AbilityKind::Time,
        AbilityKind::Hover,
        AbilityKind::Shock,
        AbilityKind::Money,
    ];

    #[inline]
    pub fn def(self) -> &'static AbilityDef {
        &CATALOG[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.def().id
    }

    pub fn from_id(id: &str) -> Option<Self> {
        CATALOG.iter().find(|d| d.id == id).map(|d| d.kind)
    }

    pub fn effects(self) -> AbilityEffects {
        let none = AbilityEffects::NONE;
        match self {
            AbilityKind::Nitro => AbilityEffects {
                speed_multiplier: 1.8,
                ..none
            },
            AbilityKind::Giant => AbilityEffects {
                speed_multiplier: 0.8,
                hitbox_scale: 2.0,
                grants_kill: true,
                ..none
            },
            AbilityKind::Shield | AbilityKind::Saws => AbilityEffects {
                grants_kill: true,
                ..none
            },
            AbilityKind::Freeze => AbilityEffects {
                freezes_obstacles: true,
                ..none
            },
            AbilityKind::Gun => AbilityEffects {
                fires_bullets: true,
                ..none
            },
            AbilityKind::Time => AbilityEffects {
                scroll_multiplier: 0.5,
                self_motion_multiplier: 0.2,
                ..none
            },
            AbilityKind::Money => AbilityEffects {
                score_multiplier: 3,
                ..none
            },
            AbilityKind::Shock => AbilityEffects {
                instant: true,
                ..none
            },
            // Cosmetic only
            AbilityKind::Hover => none,
        }
    }

    pub fn banner(self) -> AbilityBanner {
        let def = self.def();
        AbilityBanner {
            kind: self,
            name: def.name,
            color: def.color,
        }
    }
}

/// The ability currently held by the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAbility {
    pub kind: AbilityKind,
    /// Frames left before it expires
    pub remaining: u32,
}

/// UI payload for an ability change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbilityBanner {
    pub kind: AbilityKind,
    pub name: &'static str,
    pub color: Color,
}

/// Replace the vehicle's ability with `kind`
pub fn activate(state: &mut SimulationState, kind: AbilityKind, events: &mut Vec<GameEvent>) {
    let def = kind.def();
    if let Some(previous) = state.vehicle.ability.take() {
        log::debug!(
            "{} replaced by {} with {} frames left",
            previous.kind.id(),
            def.id,
            previous.remaining
        );
    }

    state.vehicle.ability = Some(ActiveAbility {
        kind,
        remaining: def.duration,
    });
    events.push(GameEvent::AbilityChanged(Some(kind.banner())));
    log::info!("Ability activated: {}", def.name);

    if kind.effects().instant {
        shockwave(state);
        state.vehicle.ability = None;
        events.push(GameEvent::AbilityChanged(None));
    }

    state.vehicle.clamp_speed(state.tuning.max_speed);
}

/// Count down the active ability, clearing it when the timer runs out
pub fn tick_timer(state: &mut SimulationState, events: &mut Vec<GameEvent>) {
    let Some(active) = state.vehicle.ability.as_mut() else {
        return;
    };

    active.remaining = active.remaining.saturating_sub(1);
    if active.remaining == 0 {
        log::info!("Ability expired: {}", active.kind.def().name);
        deactivate(state, events);
    }
}

/// Drop the active ability (if any)
pub fn deactivate(state: &mut SimulationState, events: &mut Vec<GameEvent>) {
    if state.vehicle.ability.take().is_some() {
        events.push(GameEvent::AbilityChanged(None));
        state.vehicle.clamp_speed(state.tuning.max_speed);
    }
}

/// Destroy every obstacle inside the visible band
fn shockwave(state: &mut SimulationState) {
    let top = state.tuning.shock_band_top;
    let bottom = state.viewport.height;

    let mut blasted = Vec::new();
    for obstacle in &mut state.obstacles {
        if obstacle.alive && obstacle.pos.y > top && obstacle.pos.y < bottom {
            obstacle.alive = false;
            blasted.push(obstacle.pos);
        }
    }
    state.obstacles.retain(|o| o.alive);

    for pos in &blasted {
        state.spawn_explosion(*pos, SHOCK_SPLAT);
    }
    state.score += blasted.len() as u64 * state.tuning.shock_points;
    log::debug!("Shockwave cleared {} obstacles", blasted.len());
}

const SHOCK_SPLAT: Color = Color::hex(0x00aa00);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Viewport;
    use glam::Vec2;

    fn state() -> SimulationState {
        SimulationState::new(7, Viewport::new(800.0, 600.0))
    }

    #[test]
    fn test_catalog_order_matches_kinds() {
        for kind in AbilityKind::ALL {
            assert_eq!(kind.def().kind, kind);
            assert_eq!(AbilityKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(AbilityKind::from_id("magnet"), None);
    }

    #[test]
    fn test_each_kind_touches_one_concern() {
        assert_eq!(AbilityKind::Nitro.effects().speed_multiplier, 1.8);
        assert_eq!(AbilityKind::Money.effects().score_multiplier, 3);
        assert_eq!(AbilityKind::Time.effects().scroll_multiplier, 0.5);
        assert!(AbilityKind::Gun.effects().fires_bullets);
        assert!(AbilityKind::Freeze.effects().freezes_obstacles);
        assert!(AbilityKind::Shield.effects().grants_kill);
        assert!(AbilityKind::Saws.effects().grants_kill);
        assert!(AbilityKind::Shock.effects().instant);
        assert_eq!(AbilityKind::Hover.effects(), AbilityEffects::NONE);
    }

    #[test]
    fn test_activation_replaces_previous() {
        let mut state = state();
        let mut events = Vec::new();

        activate(&mut state, AbilityKind::Nitro, &mut events);
        state.vehicle.speed = 20.0;
        activate(&mut state, AbilityKind::Money, &mut events);

        let active = state.vehicle.ability.expect("money active");
        assert_eq!(active.kind, AbilityKind::Money);
        assert_eq!(active.remaining, 500);
        // Nitro's speed allowance is gone in the same frame
        assert_eq!(state.vehicle.speed, 12.0);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_timer_expiry_emits_none() {
        let mut state = state();
        let mut events = Vec::new();
        state.vehicle.ability = Some(ActiveAbility {
            kind: AbilityKind::Shield,
            remaining: 2,
        });

        tick_timer(&mut state, &mut events);
        assert!(state.vehicle.ability.is_some());
        assert!(events.is_empty());

        tick_timer(&mut state, &mut events);
        assert!(state.vehicle.ability.is_none());
        assert_eq!(events, vec![GameEvent::AbilityChanged(None)]);
    }

    #[test]
    fn test_shock_clears_band_and_returns_to_none() {
        let mut state = state();
        let mut events = Vec::new();
        state.spawn_obstacle_at(Vec2::new(0.0, -150.0), 1.0);
        state.spawn_obstacle_at(Vec2::new(50.0, 300.0), 1.0);
        // Above the band and below the viewport survive
        state.spawn_obstacle_at(Vec2::new(0.0, -250.0), 1.0);
        state.spawn_obstacle_at(Vec2::new(0.0, 610.0), 1.0);

        activate(&mut state, AbilityKind::Shock, &mut events);

        assert!(state.vehicle.ability.is_none());
        assert_eq!(state.obstacles.len(), 2);
        assert!(
            state
                .obstacles
                .iter()
                .all(|o| o.pos.y <= -200.0 || o.pos.y >= 600.0)
        );
        assert_eq!(state.score, 20);
        assert_eq!(
            events.last(),
            Some(&GameEvent::AbilityChanged(None)),
            "shock ends in the frame it starts"
        );
    }
}
