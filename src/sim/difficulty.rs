//! Time-based difficulty ramp

use serde::{Deserialize, Serialize};

use crate::tuning::GameConfig;

/// Stepped speed/spawn-rate progression for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRamp {
    /// Current fall speed for newly spawned objects
    pub speed: f32,
    pub spawn_delay_ms: f32,
    /// Seconds since the last step
    pub timer: f32,
    /// Steps taken this session
    pub level: u32,
}

impl DifficultyRamp {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            speed: config.base_speed,
            spawn_delay_ms: config.spawn_delay_ms,
            timer: 0.0,
            level: 0,
        }
    }

    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Accumulate `dt` seconds; returns true when a step was taken
    pub fn update(&mut self, dt: f32, config: &GameConfig) -> bool {
        self.timer += dt;
        if self.timer >= config.difficulty_interval_secs {
            self.timer = 0.0;
            self.step(config);
            return true;
        }
        false
    }

    fn step(&mut self, config: &GameConfig) {
        if self.speed < config.max_speed {
            self.speed = (self.speed + config.speed_increment).min(config.max_speed);
        }
        if self.spawn_delay_ms > config.min_spawn_delay_ms {
            self.spawn_delay_ms =
                (self.spawn_delay_ms - config.spawn_delay_decrement_ms).max(config.min_spawn_delay_ms);
        }
        self.level += 1;
        log::debug!(
            "Difficulty level {}: speed={:.2}, spawn_delay={}ms",
            self.level,
            self.speed,
            self.spawn_delay_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_steps_on_interval() {
        let config = GameConfig::default();
        let mut ramp = DifficultyRamp::new(&config);
        assert!(!ramp.update(9.5, &config));
        assert!(ramp.update(0.5, &config));
        assert!((ramp.speed - 5.1).abs() < 1e-4);
        assert_eq!(ramp.spawn_delay_ms, 950.0);
        assert_eq!(ramp.timer, 0.0);
    }

    #[test]
    fn test_ramp_is_capped_and_floored() {
        let config = GameConfig::default();
        let mut ramp = DifficultyRamp::new(&config);
        let mut last_speed = ramp.speed;
        for _ in 0..500 {
            ramp.update(config.difficulty_interval_secs, &config);
            assert!(ramp.speed >= last_speed);
            last_speed = ramp.speed;
        }
        assert_eq!(ramp.speed, config.max_speed);
        assert_eq!(ramp.spawn_delay_ms, config.min_spawn_delay_ms);
    }

    #[test]
    fn test_ramp_reset() {
        let config = GameConfig::default();
        let mut ramp = DifficultyRamp::new(&config);
        ramp.update(10.0, &config);
        ramp.reset(&config);
        assert_eq!(ramp, DifficultyRamp::new(&config));
    }
}
