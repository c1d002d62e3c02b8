//! Score, combo and high score tracking

use serde::{Deserialize, Serialize};

use crate::highscores::HighScoreFile;
use crate::tuning::GameConfig;

/// Combo multiplier step function
///
/// combo 0..=2 → 1.0, 3..=4 → 1.5, 5..=9 → 2.0, 10+ → 2.5
pub fn combo_multiplier(combo: u32) -> f32 {
    match combo {
        0..=2 => 1.0,
        3..=4 => 1.5,
        5..=9 => 2.0,
        _ => 2.5,
    }
}

/// Score state for the running session plus the persisted high score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub score: u32,
    pub high_score: u32,
    pub combo: u32,
    /// Best combo this session
    pub best_combo: u32,
    pub combo_timer_ms: f32,
    pub combo_active: bool,
    starting_score: u32,
    combo_timeout_ms: f32,
}

impl ScoreTracker {
    pub fn new(config: &GameConfig, high_score: u32) -> Self {
        Self {
            score: config.starting_score,
            high_score,
            combo: 0,
            best_combo: 0,
            combo_timer_ms: 0.0,
            combo_active: false,
            starting_score: config.starting_score,
            combo_timeout_ms: config.combo_timeout_ms,
        }
    }

    /// Tracker seeded from the high score file (missing/corrupt → 0)
    pub fn load(config: &GameConfig, file: &HighScoreFile) -> Self {
        Self::new(config, file.load())
    }

    /// Write the high score; failures are logged and reported as `false`
    pub fn save_high_score(&self, file: &HighScoreFile) -> bool {
        file.save(self.high_score)
    }

    /// Award `floor(base * multiplier)` points and extend the combo.
    /// Returns the points actually added.
    pub fn add_points(&mut self, base: u32, multiplier: f32) -> u32 {
        let actual = (base as f32 * multiplier).floor().max(0.0) as u32;
        self.score = self.score.saturating_add(actual);

        if self.score > self.high_score {
            self.high_score = self.score;
        }

        self.combo += 1;
        self.best_combo = self.best_combo.max(self.combo);
        self.combo_timer_ms = self.combo_timeout_ms;
        self.combo_active = true;

        actual
    }

    /// Deduct points (clamped at zero) and break the combo
    pub fn subtract_points(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
        self.reset_combo();
    }

    pub fn reset_combo(&mut self) {
        self.combo = 0;
        self.combo_active = false;
    }

    /// Run the combo countdown; `dt` in seconds
    pub fn update_combo_timer(&mut self, dt: f32) {
        if self.combo_active {
            self.combo_timer_ms -= dt * 1000.0;
            if self.combo_timer_ms <= 0.0 {
                self.reset_combo();
            }
        }
    }

    pub fn combo_multiplier(&self) -> f32 {
        combo_multiplier(self.combo)
    }

    pub fn is_game_over(&self) -> bool {
        self.score == 0
    }

    /// Session-start defaults; the high score is kept
    pub fn reset(&mut self) {
        self.score = self.starting_score;
        self.combo = 0;
        self.best_combo = 0;
        self.combo_timer_ms = 0.0;
        self.combo_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> ScoreTracker {
        ScoreTracker::new(&GameConfig::default(), 0)
    }

    #[test]
    fn test_fresh_tracker() {
        let t = tracker();
        assert_eq!(t.score, 10);
        assert_eq!(t.combo, 0);
        assert!(!t.is_game_over());
    }

    #[test]
    fn test_add_points() {
        let mut t = tracker();
        let added = t.add_points(10, 1.0);
        assert_eq!(added, 10);
        assert_eq!(t.score, 20);
        assert_eq!(t.combo, 1);
        assert_eq!(t.high_score, 20);
    }

    #[test]
    fn test_add_points_floors() {
        let mut t = tracker();
        assert_eq!(t.add_points(1, 1.5), 1);
        assert_eq!(t.add_points(3, 2.5), 7);
        assert_eq!(t.score, 18);
    }

    #[test]
    fn test_combo_builds_and_resets() {
        let mut t = tracker();
        t.add_points(1, 1.0);
        assert_eq!(t.combo, 1);
        t.add_points(1, 1.0);
        assert_eq!(t.combo, 2);
        t.reset_combo();
        assert_eq!(t.combo, 0);
        assert_eq!(t.best_combo, 2);
    }

    #[test]
    fn test_combo_multiplier_steps() {
        let mut t = tracker();
        assert_eq!(t.combo_multiplier(), 1.0);
        t.combo = 3;
        assert_eq!(t.combo_multiplier(), 1.5);
        t.combo = 5;
        assert_eq!(t.combo_multiplier(), 2.0);
        t.combo = 10;
        assert_eq!(t.combo_multiplier(), 2.5);
    }

    #[test]
    fn test_subtract_points_clamps() {
        let mut t = tracker();
        t.subtract_points(5);
        assert_eq!(t.score, 5);
        t.subtract_points(100);
        assert_eq!(t.score, 0);
        assert!(t.is_game_over());
    }

    #[test]
    fn test_combo_timer_expires() {
        let mut t = tracker();
        t.add_points(1, 1.0);
        t.update_combo_timer(1.0);
        assert_eq!(t.combo, 1);
        t.update_combo_timer(1.0);
        assert_eq!(t.combo, 0);
        assert!(!t.combo_active);
    }

    #[test]
    fn test_catch_restarts_combo_timer() {
        let mut t = tracker();
        t.add_points(1, 1.0);
        t.update_combo_timer(1.5);
        t.add_points(1, 1.0);
        t.update_combo_timer(1.5);
        assert_eq!(t.combo, 2);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut t = tracker();
        t.add_points(50, 1.0);
        t.reset();
        assert_eq!(t.score, 10);
        assert_eq!(t.best_combo, 0);
        assert_eq!(t.high_score, 60);
    }

    #[test]
    fn test_high_score_persists() {
        let dir = crate::persistence::test_util::scratch_dir("score_hs");
        let file = HighScoreFile::new(dir.join("highscore.txt"));
        let config = GameConfig::default();

        let mut t = ScoreTracker::load(&config, &file);
        assert_eq!(t.high_score, 0);
        t.add_points(15, 1.0);
        assert!(t.save_high_score(&file));

        let reloaded = ScoreTracker::load(&config, &file);
        assert_eq!(reloaded.high_score, 25);
        assert_eq!(reloaded.score, 10);
    }

    proptest! {
        #[test]
        fn prop_score_never_negative(ops in proptest::collection::vec((any::<bool>(), 0u32..20), 0..64)) {
            let mut t = tracker();
            for (add, n) in ops {
                if add {
                    t.add_points(n, 1.0);
                } else {
                    let before = t.score;
                    t.subtract_points(n);
                    prop_assert_eq!(t.score, before.saturating_sub(n));
                    prop_assert_eq!(t.combo, 0);
                }
                prop_assert_eq!(t.is_game_over(), t.score == 0);
                prop_assert!(t.high_score >= t.score || t.score <= 10);
            }
        }

        #[test]
        fn prop_multiplier_is_monotonic_step(combo in 0u32..1000) {
            let m = combo_multiplier(combo);
            prop_assert!([1.0, 1.5, 2.0, 2.5].contains(&m));
            prop_assert!(combo_multiplier(combo + 1) >= m);
        }
    }
}
