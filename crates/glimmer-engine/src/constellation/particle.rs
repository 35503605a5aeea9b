//! A single drifting constellation particle.

use glam::Vec2;

use crate::core::rng::Rng;
use super::ConstellationConfig;

/// A simulated drifting point: position, velocity, radius.
/// Plain data — spawning goes through the factory so tests can seed the rng.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Spawn a particle uniformly inside `bounds`, with velocity components
    /// in ±`max_speed` per frame and radius in the configured range.
    pub fn spawn(config: &ConstellationConfig, bounds: Vec2, rng: &mut Rng) -> Self {
        Particle {
            pos: Vec2::new(rng.range_f32(0.0, bounds.x), rng.range_f32(0.0, bounds.y)),
            vel: Vec2::new(
                rng.range_f32(-config.max_speed, config.max_speed),
                rng.range_f32(-config.max_speed, config.max_speed),
            ),
            radius: rng.range_f32(config.min_radius, config.max_radius),
        }
    }

    /// Advance one frame: position moves by velocity, and any axis that
    /// lands outside `[0, bound]` is clamped to the boundary with its
    /// velocity component negated (elastic reflection).
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos += self.vel;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
        } else if self.pos.x > bounds.x {
            self.pos.x = bounds.x;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
        } else if self.pos.y > bounds.y {
            self.pos.y = bounds.y;
            self.vel.y = -self.vel.y;
        }
    }

    /// Whether the particle lies inside `[0, w] × [0, h]`.
    pub fn in_bounds(&self, bounds: Vec2) -> bool {
        (0.0..=bounds.x).contains(&self.pos.x) && (0.0..=bounds.y).contains(&self.pos.y)
    }
}
