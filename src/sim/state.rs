//! Session state for one play-through
//!
//! Everything a running game mutates lives here and is owned by the single
//! session object; only the main tick touches it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::DifficultyRamp;
use super::entity::{ActivePowerUp, Basket, FallingObject, PowerUp, PowerUpKind};
use super::particles::ParticleSystem;
use super::score::ScoreTracker;
use super::spawn::Spawner;
use crate::tuning::GameConfig;

/// Final numbers handed to the statistics store at game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub best_combo: u32,
    pub objects_caught: u32,
    pub objects_missed: u32,
    /// Whole seconds spent in the playing state
    pub play_secs: u64,
}

/// One play-through from starting score to zero
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub basket: Basket,
    pub objects: Vec<FallingObject>,
    pub power_ups: Vec<PowerUp>,
    /// At most one effect; a new catch overwrites it
    pub active_power_up: Option<ActivePowerUp>,
    pub particles: ParticleSystem,
    pub score: ScoreTracker,
    pub ramp: DifficultyRamp,
    pub spawner: Spawner,
    /// Milliseconds since the last object spawn
    pub spawn_elapsed_ms: f32,
    /// Seconds spent playing this session
    pub game_time: f32,
    pub objects_caught: u32,
    pub objects_missed: u32,
    /// Visual bursts are skipped when false
    pub particles_enabled: bool,
    /// Set once the game-over event fired
    pub over: bool,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            basket: Basket::new(&config),
            objects: Vec::new(),
            power_ups: Vec::new(),
            active_power_up: None,
            particles: ParticleSystem::new(seed.wrapping_add(1), config.max_particles),
            score: ScoreTracker::new(&config, high_score),
            ramp: DifficultyRamp::new(&config),
            spawner: Spawner::new(Pcg32::seed_from_u64(seed)),
            spawn_elapsed_ms: 0.0,
            game_time: 0.0,
            objects_caught: 0,
            objects_missed: 0,
            particles_enabled: true,
            over: false,
            config,
        }
    }

    /// Start over with a new config and seed, keeping the high score
    pub fn restart(&mut self, config: GameConfig, seed: u64) {
        let high_score = self.score.high_score;
        let particles_enabled = self.particles_enabled;
        *self = Self::new(config, seed, high_score);
        self.particles_enabled = particles_enabled;
    }

    pub fn has_power_up(&self, kind: PowerUpKind) -> bool {
        self.active_power_up.is_some_and(|p| p.kind == kind)
    }

    /// Fall-speed factor from slow motion
    pub fn speed_multiplier(&self) -> f32 {
        if self.has_power_up(PowerUpKind::SlowMotion) {
            PowerUpKind::SlowMotion.effect_value()
        } else {
            1.0
        }
    }

    /// Replace whatever power-up is running
    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        self.active_power_up = Some(ActivePowerUp::new(kind, self.config.power_up_duration_ms));
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score.score,
            best_combo: self.score.best_combo,
            objects_caught: self.objects_caught,
            objects_missed: self.objects_missed,
            play_secs: self.game_time.max(0.0) as u64,
        }
    }
}
