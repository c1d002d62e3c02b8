//! Lifetime statistics across all sessions
//!
//! Persisted as a JSON record; missing keys default to zero/null.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence;
use crate::sim::SessionSummary;

/// Aggregate counters, updated once per finished session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u64,
    pub total_score: u64,
    pub total_time_seconds: u64,
    pub best_combo: u64,
    pub objects_caught: u64,
    pub objects_missed: u64,
    /// RFC 3339 timestamp of the last finished session
    pub last_played: Option<String>,
}

impl Statistics {
    pub fn load(path: &Path) -> Self {
        persistence::load_json_or_default(path, "statistics")
    }

    pub fn save(&self, path: &Path) -> bool {
        persistence::save_json_logged(path, self, "statistics")
    }

    /// Fold a finished session into the totals
    pub fn record_session(&mut self, summary: &SessionSummary, timestamp: String) {
        self.games_played += 1;
        self.total_score += u64::from(summary.score);
        self.total_time_seconds += summary.play_secs;
        self.best_combo = self.best_combo.max(u64::from(summary.best_combo));
        self.objects_caught += u64::from(summary.objects_caught);
        self.objects_missed += u64::from(summary.objects_missed);
        self.last_played = Some(timestamp);
    }

    /// Record a session stamped with the local time and write the file
    pub fn end_session(&mut self, summary: &SessionSummary, path: &Path) -> bool {
        self.record_session(summary, chrono::Local::now().to_rfc3339());
        self.save(path)
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.games_played as f64
    }

    /// Percentage of objects caught, 0 when nothing has fallen yet
    pub fn catch_rate(&self) -> f64 {
        let total = self.objects_caught + self.objects_missed;
        if total == 0 {
            return 0.0;
        }
        self.objects_caught as f64 / total as f64 * 100.0
    }

    /// Total play time as "Xm Ys"
    pub fn play_time_display(&self) -> String {
        format!(
            "{}m {}s",
            self.total_time_seconds / 60,
            self.total_time_seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::test_util::scratch_dir;

    fn summary(score: u32, caught: u32, missed: u32) -> SessionSummary {
        SessionSummary {
            score,
            best_combo: 4,
            objects_caught: caught,
            objects_missed: missed,
            play_secs: 65,
        }
    }

    #[test]
    fn test_record_session() {
        let mut stats = Statistics::default();
        stats.record_session(&summary(0, 20, 5), "2024-01-01T00:00:00Z".to_string());
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.objects_caught, 20);
        assert_eq!(stats.objects_missed, 5);
        assert_eq!(stats.best_combo, 4);
        assert_eq!(stats.play_time_display(), "1m 5s");
        assert!(stats.last_played.is_some());
    }

    #[test]
    fn test_average_score() {
        let mut stats = Statistics::default();
        assert_eq!(stats.average_score(), 0.0);
        stats.games_played = 2;
        stats.total_score = 100;
        assert_eq!(stats.average_score(), 50.0);
    }

    #[test]
    fn test_catch_rate() {
        let mut stats = Statistics::default();
        assert_eq!(stats.catch_rate(), 0.0);
        stats.objects_caught = 80;
        stats.objects_missed = 20;
        assert_eq!(stats.catch_rate(), 80.0);
    }

    #[test]
    fn test_best_combo_is_max() {
        let mut stats = Statistics {
            best_combo: 10,
            ..Default::default()
        };
        stats.record_session(&summary(3, 1, 1), "t".to_string());
        assert_eq!(stats.best_combo, 10);
    }

    #[test]
    fn test_round_trip() {
        let path = scratch_dir("stats").join("statistics.json");
        let mut stats = Statistics::default();
        assert!(stats.end_session(&summary(12, 3, 4), &path));
        let back = Statistics::load(&path);
        assert_eq!(back, stats);
    }

    #[test]
    fn test_missing_keys_default() {
        let stats: Statistics = serde_json::from_str(r#"{"games_played": 3, "bogus": true}"#).unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.total_score, 0);
        assert_eq!(stats.last_played, None);
    }
}
