//! Game settings and preferences
//!
//! Persisted as a JSON record and rewritten on every change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence;
use crate::tuning::Difficulty;

/// Volume step used by the settings menu
pub const VOLUME_STEP: f32 = 0.1;

/// Boolean preferences that can be flipped from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Fullscreen,
    ShowFps,
    Particles,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Sound effects volume (0.0 - 1.0)
    pub sound_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Display ===
    pub fullscreen: bool,
    /// Show FPS counter in the HUD
    pub show_fps: bool,
    /// Particle effects (catch bursts, explosions)
    pub particles_enabled: bool,

    // === Gameplay ===
    /// Difficulty preset name; unknown names play as "normal"
    pub difficulty: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_volume: 0.7,
            music_volume: 0.5,
            fullscreen: false,
            show_fps: false,
            particles_enabled: true,
            difficulty: Difficulty::Normal.as_str().to_string(),
        }
    }
}

impl Settings {
    /// Parsed difficulty preset
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_str(&self.difficulty).unwrap_or_default()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty.as_str().to_string();
    }

    pub fn toggle(&mut self, which: Toggle) -> bool {
        let flag = match which {
            Toggle::Fullscreen => &mut self.fullscreen,
            Toggle::ShowFps => &mut self.show_fps,
            Toggle::Particles => &mut self.particles_enabled,
        };
        *flag = !*flag;
        *flag
    }

    /// Nudge sound volume, clamped to 0..=1
    pub fn adjust_sound_volume(&mut self, delta: f32) -> f32 {
        self.sound_volume = round_volume(self.sound_volume + delta);
        self.sound_volume
    }

    /// Nudge music volume, clamped to 0..=1
    pub fn adjust_music_volume(&mut self, delta: f32) -> f32 {
        self.music_volume = round_volume(self.music_volume + delta);
        self.music_volume
    }

    /// Clamp out-of-range values read from disk
    pub fn sanitized(mut self) -> Self {
        self.sound_volume = round_volume(self.sound_volume);
        self.music_volume = round_volume(self.music_volume);
        self
    }
}

/// Clamp to 0..=1 and snap to two decimals so repeated steps don't drift
fn round_volume(v: f32) -> f32 {
    if !v.is_finite() {
        return 0.0;
    }
    (v.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Settings bound to their file; every mutation is saved immediately
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = persistence::load_json_or_default::<Settings>(&path, "settings").sanitized();
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Apply a change and persist it; returns whether the write succeeded
    pub fn update(&mut self, change: impl FnOnce(&mut Settings)) -> bool {
        change(&mut self.settings);
        self.save()
    }

    pub fn toggle(&mut self, which: Toggle) -> bool {
        let value = self.settings.toggle(which);
        self.save();
        value
    }

    pub fn save(&self) -> bool {
        persistence::save_json_logged(&self.path, &self.settings, "settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::test_util::scratch_dir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.sound_volume, 0.7);
        assert_eq!(s.music_volume, 0.5);
        assert!(s.particles_enabled);
        assert_eq!(s.difficulty(), Difficulty::Normal);
    }

    #[test]
    fn test_toggle() {
        let mut s = Settings::default();
        let initial = s.show_fps;
        assert_eq!(s.toggle(Toggle::ShowFps), !initial);
        assert_eq!(s.show_fps, !initial);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut s = Settings::default();
        for _ in 0..20 {
            s.adjust_sound_volume(VOLUME_STEP);
        }
        assert_eq!(s.sound_volume, 1.0);
        for _ in 0..20 {
            s.adjust_music_volume(-VOLUME_STEP);
        }
        assert_eq!(s.music_volume, 0.0);
        s.adjust_music_volume(VOLUME_STEP);
        assert_eq!(s.music_volume, 0.1);
    }

    #[test]
    fn test_unknown_difficulty_is_normal() {
        let s = Settings {
            difficulty: "insane".to_string(),
            ..Default::default()
        };
        assert_eq!(s.difficulty(), Difficulty::Normal);
    }

    #[test]
    fn test_partial_record_merges_with_defaults() {
        let s: Settings = serde_json::from_str(r#"{"sound_volume": 0.5, "extra": 1}"#).unwrap();
        assert_eq!(s.sound_volume, 0.5);
        assert_eq!(s.music_volume, 0.5);
        assert_eq!(s.difficulty, "normal");
    }

    #[test]
    fn test_store_saves_every_change() {
        let path = scratch_dir("settings").join("settings.json");
        let mut store = SettingsStore::load(&path);
        assert_eq!(store.get(), &Settings::default());

        assert!(store.update(|s| s.sound_volume = 0.5));
        store.toggle(Toggle::Fullscreen);
        store.update(|s| s.set_difficulty(Difficulty::Hard));

        let reloaded = SettingsStore::load(&path);
        assert_eq!(reloaded.get().sound_volume, 0.5);
        assert!(reloaded.get().fullscreen);
        assert_eq!(reloaded.get().difficulty(), Difficulty::Hard);
        assert_eq!(reloaded.get(), store.get());
    }

    #[test]
    fn test_out_of_range_volume_is_clamped_on_load() {
        let path = scratch_dir("settings_clamp").join("settings.json");
        persistence::write_atomic(&path, r#"{"sound_volume": 3.0}"#).unwrap();
        assert_eq!(SettingsStore::load(&path).get().sound_volume, 1.0);
    }
}
