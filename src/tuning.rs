//! Data-driven game balance
//!
//! Every gameplay constant lives in [`GameConfig`], which is passed into the
//! session and state machine at construction. Tests build fixtures by
//! overriding individual fields.

use serde::{Deserialize, Serialize};

/// Difficulty presets selectable from the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Next preset in the settings cycle (wraps)
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// (base speed factor, spawn delay factor)
    fn factors(&self) -> (f32, f32) {
        match self {
            Difficulty::Easy => (0.8, 1.2),
            Difficulty::Normal => (1.0, 1.0),
            Difficulty::Hard => (1.25, 0.8),
        }
    }
}

/// Immutable gameplay configuration
///
/// Speeds are in pixels per reference frame; durations in milliseconds
/// unless the field name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frame rate that speeds are expressed against
    pub reference_fps: f32,

    // === Basket ===
    pub basket_width: f32,
    pub basket_height: f32,
    pub basket_speed: f32,
    pub basket_y_offset: f32,

    // === Falling objects ===
    pub object_width: f32,
    pub object_height: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub spawn_delay_ms: f32,
    pub min_spawn_delay_ms: f32,
    pub spawn_delay_decrement_ms: f32,
    pub difficulty_interval_secs: f32,
    /// Number of vertical spawn lanes
    pub spawn_columns: u32,
    /// Roll below this spawns a bomb
    pub bomb_chance: f32,
    /// Cumulative threshold: roll below this (and not a bomb) spawns purple
    pub purple_threshold: f32,

    // === Scoring ===
    pub starting_score: u32,
    pub miss_penalty: u32,
    pub bomb_damage: u32,
    pub combo_timeout_ms: f32,

    // === Power-ups ===
    pub power_up_duration_ms: f32,
    pub power_up_spawn_chance: f32,
    /// Power-up fall speed relative to the current object speed
    pub power_up_speed_factor: f32,

    // === Particles ===
    pub particle_count: usize,
    pub particle_lifetime_ms: f32,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub particle_size_min: u32,
    pub particle_size_max: u32,
    /// Downward acceleration per reference frame
    pub particle_gravity: f32,
    pub max_particles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1100.0,
            screen_height: 700.0,
            reference_fps: 60.0,

            basket_width: 100.0,
            basket_height: 20.0,
            basket_speed: 15.0,
            basket_y_offset: 10.0,

            object_width: 40.0,
            object_height: 40.0,
            base_speed: 5.0,
            max_speed: 15.0,
            speed_increment: 0.1,
            spawn_delay_ms: 1000.0,
            min_spawn_delay_ms: 500.0,
            spawn_delay_decrement_ms: 50.0,
            difficulty_interval_secs: 10.0,
            spawn_columns: 3,
            bomb_chance: 0.15,
            purple_threshold: 0.20,

            starting_score: 10,
            miss_penalty: 1,
            bomb_damage: 3,
            combo_timeout_ms: 2000.0,

            power_up_duration_ms: 5000.0,
            power_up_spawn_chance: 0.05,
            power_up_speed_factor: 0.7,

            particle_count: 10,
            particle_lifetime_ms: 500.0,
            particle_speed_min: 2.0,
            particle_speed_max: 5.0,
            particle_size_min: 2,
            particle_size_max: 6,
            particle_gravity: 0.3,
            max_particles: 512,
        }
    }
}

impl GameConfig {
    /// Derive a config scaled for a difficulty preset
    pub fn for_difficulty(&self, difficulty: Difficulty) -> Self {
        let (speed_factor, delay_factor) = difficulty.factors();
        let mut config = self.clone();
        config.base_speed = (self.base_speed * speed_factor).min(self.max_speed);
        config.spawn_delay_ms = (self.spawn_delay_ms * delay_factor).max(self.min_spawn_delay_ms);
        config
    }

    /// Convert elapsed seconds into reference frames
    #[inline]
    pub fn frames(&self, dt: f32) -> f32 {
        dt * self.reference_fps
    }

    /// Resting y position of the basket
    pub fn basket_y(&self) -> f32 {
        self.screen_height - 30.0 - self.basket_y_offset
    }
}
