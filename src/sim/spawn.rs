//! Randomized spawning of falling objects and power-ups
//!
//! The RNG is injected so spawn sequences are reproducible from a seed.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use super::entity::{FallingObject, ObjectKind, PowerUp, PowerUpKind};
use crate::tuning::GameConfig;

/// Pick an object kind from a uniform roll in [0, 1)
///
/// Below `bomb_chance` → bomb, below `purple_threshold` → purple,
/// otherwise `regular_pick` indexes the regular kinds.
pub fn pick_object_kind(roll: f32, regular_pick: usize, config: &GameConfig) -> ObjectKind {
    if roll < config.bomb_chance {
        ObjectKind::Bomb
    } else if roll < config.purple_threshold {
        ObjectKind::Purple
    } else {
        ObjectKind::REGULAR[regular_pick % ObjectKind::REGULAR.len()]
    }
}

/// Entity generation policy
#[derive(Debug, Clone)]
pub struct Spawner<R = Pcg32> {
    rng: R,
}

impl<R: Rng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Spawn an object once more than `spawn_delay_ms` has elapsed since the last one
    pub fn try_spawn(
        &mut self,
        elapsed_ms: f32,
        spawn_delay_ms: f32,
        base_speed: f32,
        config: &GameConfig,
    ) -> Option<FallingObject> {
        if elapsed_ms > spawn_delay_ms {
            Some(self.spawn_object(base_speed, config))
        } else {
            None
        }
    }

    /// Independent low-probability power-up roll
    pub fn try_power_up_spawn(
        &mut self,
        spawn_chance: f32,
        base_speed: f32,
        config: &GameConfig,
    ) -> Option<PowerUp> {
        if self.rng.random::<f32>() >= spawn_chance {
            return None;
        }

        let max_x = (config.screen_width - config.object_width).max(0.0) as u32;
        let x = self.rng.random_range(0..=max_x) as f32;
        let kind = *PowerUpKind::ALL
            .choose(&mut self.rng)
            .unwrap_or(&PowerUpKind::SlowMotion);

        Some(PowerUp::new(
            Vec2::new(x, -config.object_height),
            kind,
            base_speed * config.power_up_speed_factor,
            config,
        ))
    }

    /// Spawn an object in a random column just above the screen
    pub fn spawn_object(&mut self, base_speed: f32, config: &GameConfig) -> FallingObject {
        let columns = config.spawn_columns.max(1);
        let column_width = config.screen_width as u32 / columns;
        let column = self.rng.random_range(0..columns);

        let jitter_max = column_width.saturating_sub(config.object_width as u32);
        let x = (column * column_width + self.rng.random_range(0..=jitter_max)) as f32;
        let x = x.clamp(0.0, (config.screen_width - config.object_width).max(0.0));

        let roll = self.rng.random::<f32>();
        let regular_pick = self.rng.random_range(0..ObjectKind::REGULAR.len());
        let kind = pick_object_kind(roll, regular_pick, config);
        let spin = self.rng.random_range(-5.0..=5.0);

        FallingObject::new(Vec2::new(x, -config.object_height), kind, base_speed, config)
            .with_spin(spin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn spawner(seed: u64) -> Spawner {
        Spawner::new(Pcg32::seed_from_u64(seed))
    }

    #[test]
    fn test_pick_object_kind_table() {
        let config = GameConfig::default();
        assert_eq!(pick_object_kind(0.0, 0, &config), ObjectKind::Bomb);
        assert_eq!(pick_object_kind(0.149, 0, &config), ObjectKind::Bomb);
        assert_eq!(pick_object_kind(0.15, 0, &config), ObjectKind::Purple);
        assert_eq!(pick_object_kind(0.199, 2, &config), ObjectKind::Purple);
        assert_eq!(pick_object_kind(0.2, 0, &config), ObjectKind::Red);
        assert_eq!(pick_object_kind(0.5, 1, &config), ObjectKind::Green);
        assert_eq!(pick_object_kind(0.99, 2, &config), ObjectKind::Yellow);
    }

    #[test]
    fn test_try_spawn_respects_delay() {
        let config = GameConfig::default();
        let mut s = spawner(1);
        assert!(s.try_spawn(1000.0, 1000.0, 5.0, &config).is_none());
        let obj = s.try_spawn(1000.1, 1000.0, 5.0, &config).unwrap();
        assert_eq!(obj.pos.y, -40.0);
        assert_eq!(obj.speed, 5.0);
    }

    #[test]
    fn test_spawn_positions_stay_on_screen() {
        let config = GameConfig::default();
        let mut s = spawner(42);
        for _ in 0..500 {
            let obj = s.spawn_object(5.0, &config);
            assert!(obj.pos.x >= 0.0);
            assert!(obj.pos.x <= config.screen_width - config.object_width);
        }
    }

    #[test]
    fn test_spawn_distribution_is_roughly_right() {
        let config = GameConfig::default();
        let mut s = spawner(2024);
        let n = 4000;
        let bombs = (0..n)
            .filter(|_| s.spawn_object(5.0, &config).kind == ObjectKind::Bomb)
            .count();
        let ratio = bombs as f32 / n as f32;
        assert!((0.11..0.19).contains(&ratio), "bomb ratio {ratio}");
    }

    #[test]
    fn test_deterministic_table_override() {
        let config = GameConfig {
            bomb_chance: 1.0,
            purple_threshold: 1.0,
            ..GameConfig::default()
        };
        let mut s = spawner(3);
        for _ in 0..20 {
            assert_eq!(s.spawn_object(5.0, &config).kind, ObjectKind::Bomb);
        }
    }

    #[test]
    fn test_power_up_chance_bounds() {
        let config = GameConfig::default();
        let mut s = spawner(9);
        for _ in 0..100 {
            assert!(s.try_power_up_spawn(0.0, 5.0, &config).is_none());
        }
        let p = s.try_power_up_spawn(1.0, 5.0, &config).unwrap();
        assert!((p.speed - 3.5).abs() < 1e-5);
        assert_eq!(p.pos.y, -40.0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let config = GameConfig::default();
        let mut a = spawner(77);
        let mut b = spawner(77);
        for _ in 0..50 {
            let oa = a.spawn_object(5.0, &config);
            let ob = b.spawn_object(5.0, &config);
            assert_eq!(oa.kind, ob.kind);
            assert_eq!(oa.pos, ob.pos);
        }
    }
}
