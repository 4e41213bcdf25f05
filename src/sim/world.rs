//! Entity pool motion, culling and particle aging

use rand::Rng;

use super::state::SimulationState;

/// Scroll every pooled entity toward the vehicle by `forward`
pub fn advance(state: &mut SimulationState, forward: f32) {
    let effects = state.vehicle.effects();
    let jitter = state.tuning.obstacle_jitter;
    let x_limit = state.tuning.obstacle_x_limit();

    for obstacle in &mut state.obstacles {
        obstacle.frozen = effects.freezes_obstacles;

        // Frozen obstacles only ride the world scroll
        let creep = if obstacle.frozen {
            0.0
        } else {
            obstacle.speed * effects.self_motion_multiplier
        };
        obstacle.pos.y += forward + creep;

        if !obstacle.frozen {
            let step = (state.rng.random::<f32>() - 0.5) * 2.0 * jitter;
            obstacle.pos.x = (obstacle.pos.x + step).clamp(-x_limit, x_limit);
        }
    }

    for item in &mut state.items {
        item.pos.y += forward;
    }

    for bullet in &mut state.bullets {
        bullet.pos.y += forward + bullet.vy;
    }
}

/// Remove dead entities and anything that left the screen
pub fn cull(state: &mut SimulationState) {
    let bottom = state.viewport.bottom_cull_y(state.tuning.cull_margin);
    let top = -state.tuning.cull_margin;

    state.obstacles.retain(|o| o.alive && o.pos.y <= bottom);
    state.items.retain(|i| i.pos.y <= bottom);
    state
        .bullets
        .retain(|b| b.alive && b.pos.y >= top && b.pos.y <= bottom);
}

/// Move particles and drop expired ones
pub fn age_particles(state: &mut SimulationState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    state.particles.retain(|p| p.life > 0);
}
