//! Full-frame scene assembly
//!
//! Draw order: background, road, lane marks, items, obstacles, bullets,
//! the car, then particles on top.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::ability::AbilityKind;
use crate::sim::geometry::road_to_screen;
use crate::sim::snapshot::{RenderSnapshot, VehicleView};

/// Spacing of the dashed center line
const LANE_PERIOD: f32 = 100.0;
const LANE_DASH: Vec2 = Vec2::new(10.0, 40.0);
const BULLET_SIZE: Vec2 = Vec2::new(4.0, 10.0);
const PARTICLE_SIZE: f32 = 4.0;

/// Build the triangle list for one frame, in screen pixels
pub fn build_scene(snap: &RenderSnapshot) -> Vec<Vertex> {
    let viewport = &snap.viewport;
    let to_screen = |pos: Vec2| road_to_screen(pos, viewport);
    let mut out = Vec::new();

    out.extend(shapes::rect(
        Vec2::new(viewport.width / 2.0, viewport.height / 2.0),
        Vec2::new(viewport.width, viewport.height),
        colors::BACKGROUND,
    ));
    out.extend(shapes::rect(
        Vec2::new(viewport.center_x(), viewport.height / 2.0),
        Vec2::new(snap.road_width, viewport.height),
        colors::ROAD,
    ));

    // Dashes scroll with the car's speed
    let offset = (snap.frame as f32 * snap.vehicle.speed) % LANE_PERIOD;
    let mut y = -LANE_PERIOD;
    while y < viewport.height + LANE_PERIOD {
        let top_left = to_screen(Vec2::new(-LANE_DASH.x / 2.0, y + offset));
        out.extend(shapes::rect(top_left + LANE_DASH / 2.0, LANE_DASH, colors::LANE_MARK));
        y += LANE_PERIOD;
    }

    for item in &snap.items {
        let color = item.kind.def().color.to_rgba(1.0);
        out.extend(shapes::circle(to_screen(item.pos), item.size / 2.0, color, 16));
    }

    for obstacle in &snap.obstacles {
        let center = to_screen(obstacle.pos);
        let body = if obstacle.frozen {
            colors::ZOMBIE_FROZEN
        } else {
            colors::ZOMBIE
        };
        out.extend(shapes::rect(center, Vec2::splat(obstacle.size), body));
        for eye_x in [-3.5, 3.5] {
            out.extend(shapes::rect(
                center + Vec2::new(eye_x, -8.5),
                Vec2::splat(3.0),
                colors::ZOMBIE_EYE,
            ));
        }
    }

    for bullet in &snap.bullets {
        out.extend(shapes::rect(to_screen(bullet.pos), BULLET_SIZE, colors::BULLET));
    }

    out.extend(car(&snap.vehicle, to_screen(snap.vehicle.pos), snap.frame));

    for particle in &snap.particles {
        let color = particle.color.to_rgba(particle.alpha);
        let top_left = to_screen(particle.pos);
        out.extend(shapes::rect(
            top_left + Vec2::splat(PARTICLE_SIZE / 2.0),
            Vec2::splat(PARTICLE_SIZE),
            color,
        ));
    }

    out
}

/// The player car, rotated to its heading and scaled while giant
fn car(vehicle: &VehicleView, origin: Vec2, frame: u64) -> Vec<Vertex> {
    let angle = vehicle.heading;
    let scale = vehicle.scale;
    let size = Vec2::new(vehicle.width, vehicle.height) * scale;
    let half = size / 2.0;
    let part = |offset: Vec2, part_size: Vec2, color| {
        shapes::rotated_rect(origin, angle, offset * scale, part_size * scale, color)
    };

    let mut out = Vec::new();
    out.extend(shapes::rotated_rect(
        origin,
        angle,
        Vec2::splat(5.0),
        size,
        colors::SHADOW,
    ));

    match vehicle.ability {
        Some(AbilityKind::Shield) => {
            let radius = vehicle.height * scale / 1.5;
            out.extend(shapes::ring(origin, radius - 1.5, radius + 1.5, colors::SHIELD_RING, 32));
        }
        Some(AbilityKind::Saws) => {
            let spin = (frame as f32 * 0.3) % std::f32::consts::PI;
            for (side, dir) in [(-1.0, 1.0), (1.0, -1.0)] {
                let hub = origin + Vec2::from_angle(angle).rotate(Vec2::new(side * half.x, 0.0));
                out.extend(shapes::rotated_rect(
                    hub,
                    angle + spin * dir,
                    Vec2::ZERO,
                    Vec2::splat(20.0 * scale),
                    colors::SAW,
                ));
            }
        }
        _ => {}
    }

    let body = if vehicle.ability == Some(AbilityKind::Nitro) {
        colors::CAR_NITRO
    } else {
        colors::CAR
    };
    out.extend(shapes::rotated_rect(origin, angle, Vec2::ZERO, size, body));

    let w = vehicle.width;
    let h = vehicle.height;
    out.extend(part(
        Vec2::new(0.0, -h / 4.0 + 7.5),
        Vec2::new(w - 4.0, 15.0),
        colors::WINDSHIELD,
    ));
    for x in [-w / 2.0 + 6.0, w / 2.0 - 6.0] {
        out.extend(part(
            Vec2::new(x, -h / 2.0 + 2.5),
            Vec2::new(8.0, 5.0),
            colors::HEADLIGHT,
        ));
    }

    out
}
