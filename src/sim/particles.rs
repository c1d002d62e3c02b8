//! Decorative particle bursts (no gameplay effect)

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::palette::Color;
use crate::tuning::GameConfig;

/// A single visual particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per reference frame
    pub vel: Vec2,
    pub color: Color,
    pub size: f32,
    pub age_ms: f32,
    pub lifetime_ms: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Color, size: f32, lifetime_ms: f32) -> Self {
        Self {
            pos,
            vel,
            color,
            size,
            age_ms: 0.0,
            lifetime_ms,
        }
    }

    /// Advance position and age; returns whether the particle is still alive
    pub fn update(&mut self, dt: f32, gravity: f32, reference_fps: f32) -> bool {
        let frames = dt * reference_fps;
        self.pos += self.vel * frames;
        self.vel.y += gravity * frames;
        self.age_ms += dt * 1000.0;
        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.age_ms < self.lifetime_ms
    }

    /// Remaining life in 0..=1, used for fading
    pub fn alpha(&self) -> f32 {
        if self.lifetime_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }
}

/// Owns all live particles
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    rng: Pcg32,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(seed: u64, max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            max_particles,
        }
    }

    /// Emit a burst of `count` particles at `origin`
    pub fn emit(&mut self, origin: Vec2, color: Color, count: usize, config: &GameConfig) {
        for _ in 0..count {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self
                .rng
                .random_range(config.particle_speed_min..=config.particle_speed_max);
            // Upward bias
            let vel = Vec2::new(angle.cos() * speed, angle.sin() * speed - 2.0);
            let size = self
                .rng
                .random_range(config.particle_size_min..=config.particle_size_max)
                as f32;

            self.particles.push(Particle::new(
                origin,
                vel,
                color,
                size,
                config.particle_lifetime_ms,
            ));
        }

        // Oldest particles go first when over the cap
        if self.particles.len() > self.max_particles {
            let excess = self.particles.len() - self.max_particles;
            self.particles.drain(..excess);
        }
    }

    pub fn update(&mut self, dt: f32, config: &GameConfig) {
        self.particles
            .retain_mut(|p| p.update(dt, config.particle_gravity, config.reference_fps));
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
