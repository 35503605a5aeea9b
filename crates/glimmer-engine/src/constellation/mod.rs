//! The constellation simulation: a fixed population of drifting particles,
//! connective lines between nearby pairs, and lines to the pointer.
//!
//! This is an explicit context object — particles, bounds, pointer, and the
//! random source all live here, owned by the caller. The simulation never
//! draws or schedules frames; it writes into a `DrawList` and the host
//! drives `step`/`render`/`connect_pointer` once per frame.

pub mod particle;

use glam::Vec2;

use crate::core::rng::Rng;
use crate::core::theme::Theme;
use crate::renderer::instance::{DiscInstance, DrawList, LineInstance};
use particle::Particle;

/// Tunable constants for the simulation.
#[derive(Debug, Clone)]
pub struct ConstellationConfig {
    /// Fixed particle population.
    pub particle_count: usize,
    /// Velocity components are drawn from ±this, in units per frame.
    pub max_speed: f32,
    /// Particle radius range.
    pub min_radius: f32,
    pub max_radius: f32,
    /// Pairs closer than this get a connecting line.
    pub link_distance: f32,
    /// Particles closer than this to the pointer get a line to it.
    pub pointer_distance: f32,
    /// Stroke width for pair lines.
    pub link_width: f32,
    /// Stroke width for pointer lines.
    pub pointer_width: f32,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            particle_count: 60,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            link_distance: 150.0,
            pointer_distance: 200.0,
            link_width: 1.0,
            pointer_width: 2.0,
        }
    }
}

/// The simulation context. Created at startup, reset wholesale on resize.
pub struct Constellation {
    config: ConstellationConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    rng: Rng,
}

impl Constellation {
    /// Populate `config.particle_count` particles uniformly inside `bounds`.
    /// Deterministic for a fixed seed.
    pub fn new(config: ConstellationConfig, bounds: Vec2, seed: u64) -> Self {
        let mut sim = Self {
            config,
            bounds,
            particles: Vec::new(),
            pointer: None,
            rng: Rng::new(seed),
        };
        sim.populate();
        sim
    }

    fn populate(&mut self) {
        self.particles.clear();
        self.particles.reserve(self.config.particle_count);
        for _ in 0..self.config.particle_count {
            self.particles
                .push(Particle::spawn(&self.config, self.bounds, &mut self.rng));
        }
    }

    /// Advance every particle one frame.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.advance(self.bounds);
        }
    }

    /// Discard the population and re-populate at the new bounds.
    /// A full reset — particles do not keep their relative positions.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        self.populate();
    }

    /// Overwrite the tracked pointer position (canvas coordinates).
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Forget the pointer (it left the canvas).
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Emit the frame's discs and pair lines.
    ///
    /// Every unordered pair within `link_distance` gets a line whose opacity
    /// decays linearly: `(1 - dist/link_distance) * link_alpha`. The O(n²)
    /// sweep is deliberate at this population size (see DESIGN.md).
    pub fn render(&self, out: &mut DrawList, theme: Theme) {
        let palette = theme.palette();

        for p in &self.particles {
            out.push_disc(DiscInstance {
                x: p.pos.x,
                y: p.pos.y,
                radius: p.radius,
                r: palette.particle.r as f32,
                g: palette.particle.g as f32,
                b: palette.particle.b as f32,
                alpha: palette.particle_alpha,
            });
        }

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dist = self.particles[i].pos.distance(self.particles[j].pos);
                if dist < self.config.link_distance {
                    let alpha = (1.0 - dist / self.config.link_distance) * palette.link_alpha;
                    out.push_line(LineInstance {
                        x0: self.particles[i].pos.x,
                        y0: self.particles[i].pos.y,
                        x1: self.particles[j].pos.x,
                        y1: self.particles[j].pos.y,
                        width: self.config.link_width,
                        r: palette.link.r as f32,
                        g: palette.link.g as f32,
                        b: palette.link.b as f32,
                        alpha,
                    });
                }
            }
        }
    }

    /// Emit a line from every particle within `pointer_distance` of the
    /// pointer. No pointer, no lines.
    pub fn connect_pointer(&self, out: &mut DrawList, theme: Theme) {
        let pointer = match self.pointer {
            Some(p) => p,
            None => return,
        };
        let palette = theme.palette();

        for p in &self.particles {
            let dist = p.pos.distance(pointer);
            if dist < self.config.pointer_distance {
                let alpha =
                    (1.0 - dist / self.config.pointer_distance) * palette.pointer_link_alpha;
                out.push_line(LineInstance {
                    x0: p.pos.x,
                    y0: p.pos.y,
                    x1: pointer.x,
                    y1: pointer.y,
                    width: self.config.pointer_width,
                    r: palette.link.r as f32,
                    g: palette.link.g as f32,
                    b: palette.link.b as f32,
                    alpha,
                });
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn config(&self) -> &ConstellationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(count: usize) -> Constellation {
        let config = ConstellationConfig {
            particle_count: count,
            ..ConstellationConfig::default()
        };
        Constellation::new(config, Vec2::new(100.0, 100.0), 42)
    }

    /// Pin two particles at known positions, drop the rest.
    fn pinned(positions: &[Vec2]) -> Constellation {
        let mut sim = small(positions.len());
        for (p, &pos) in sim.particles.iter_mut().zip(positions) {
            p.pos = pos;
        }
        sim
    }

    #[test]
    fn initialize_places_every_particle_in_bounds() {
        for count in [0, 1, 10, 60, 200] {
            let sim = small(count);
            assert_eq!(sim.particles().len(), count);
            for p in sim.particles() {
                assert!(p.in_bounds(sim.bounds()), "out of bounds: {:?}", p.pos);
            }
        }
    }

    #[test]
    fn step_never_violates_reflection_invariant() {
        let mut sim = small(60);
        for _ in 0..5_000 {
            sim.step();
            for p in sim.particles() {
                assert!(p.in_bounds(sim.bounds()));
            }
        }
    }

    #[test]
    fn nearby_pair_gets_one_line_with_linear_opacity() {
        let sim = pinned(&[Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0)]);
        let mut list = DrawList::new();
        sim.render(&mut list, Theme::Dark);

        assert_eq!(list.disc_count(), 2);
        assert_eq!(list.line_count(), 1, "distance 10 < 150 must connect");

        let line = &list.lines[0];
        let expected = (1.0 - 10.0 / 150.0) * Theme::Dark.palette().link_alpha;
        assert!((line.alpha - expected).abs() < 1e-6);
        assert_eq!(line.width, 1.0);
    }

    #[test]
    fn distant_pair_gets_no_line() {
        // 100x100 bounds cap pair distance at ~141; widen the field instead.
        let config = ConstellationConfig {
            particle_count: 2,
            ..ConstellationConfig::default()
        };
        let mut sim = Constellation::new(config, Vec2::new(1000.0, 1000.0), 42);
        sim.particles[0].pos = Vec2::new(0.0, 0.0);
        sim.particles[1].pos = Vec2::new(300.0, 0.0);

        let mut list = DrawList::new();
        sim.render(&mut list, Theme::Dark);
        assert_eq!(list.line_count(), 0);
    }

    #[test]
    fn pointer_absent_emits_zero_lines() {
        let sim = small(60);
        let mut list = DrawList::new();
        sim.connect_pointer(&mut list, Theme::Dark);
        assert_eq!(list.line_count(), 0);
    }

    #[test]
    fn pointer_lines_use_pointer_constants() {
        let mut sim = pinned(&[Vec2::new(50.0, 50.0)]);
        sim.set_pointer(Vec2::new(50.0, 150.0));

        let mut list = DrawList::new();
        sim.connect_pointer(&mut list, Theme::Dark);

        assert_eq!(list.line_count(), 1);
        let line = &list.lines[0];
        let expected = (1.0 - 100.0 / 200.0) * Theme::Dark.palette().pointer_link_alpha;
        assert!((line.alpha - expected).abs() < 1e-6);
        assert_eq!(line.width, 2.0);
    }

    #[test]
    fn pointer_leave_clears_lines() {
        let mut sim = small(10);
        sim.set_pointer(Vec2::new(50.0, 50.0));
        sim.clear_pointer();

        let mut list = DrawList::new();
        sim.connect_pointer(&mut list, Theme::Dark);
        assert_eq!(list.line_count(), 0);
    }

    #[test]
    fn resize_replaces_the_whole_population() {
        let mut sim = small(60);
        let before: Vec<_> = sim.particles().to_vec();

        sim.resize(Vec2::new(640.0, 480.0));

        assert_eq!(sim.particles().len(), 60, "count is configured, not drifted");
        assert_eq!(sim.bounds(), Vec2::new(640.0, 480.0));
        for p in sim.particles() {
            assert!(p.in_bounds(sim.bounds()));
        }
        // A full reset, not a rescale: positions are freshly drawn.
        assert_ne!(before, sim.particles().to_vec());
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let a = small(60);
        let b = small(60);
        assert_eq!(a.particles(), b.particles());
    }
}
