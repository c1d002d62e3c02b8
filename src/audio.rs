//! Sound triggers
//!
//! The game only names the sound it wants; an [`AudioBackend`] does the
//! actual playback. Without a backend every call is a no-op.

use crate::sim::ObjectKind;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    CatchRed,
    CatchGreen,
    CatchYellow,
    CatchPurple,
    /// Bomb landed in the basket
    CatchBomb,
    /// Object fell off the bottom unshielded
    Miss,
    /// Power-up collected
    PowerUp,
    /// Combo above 2
    Combo,
    GameOver,
    ButtonClick,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 10] = [
        SoundEffect::CatchRed,
        SoundEffect::CatchGreen,
        SoundEffect::CatchYellow,
        SoundEffect::CatchPurple,
        SoundEffect::CatchBomb,
        SoundEffect::Miss,
        SoundEffect::PowerUp,
        SoundEffect::Combo,
        SoundEffect::GameOver,
        SoundEffect::ButtonClick,
    ];

    /// Trigger name, also the asset stem a backend would load
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::CatchRed => "catch_red",
            SoundEffect::CatchGreen => "catch_green",
            SoundEffect::CatchYellow => "catch_yellow",
            SoundEffect::CatchPurple => "catch_purple",
            SoundEffect::CatchBomb => "catch_bomb",
            SoundEffect::Miss => "miss",
            SoundEffect::PowerUp => "powerup",
            SoundEffect::Combo => "combo",
            SoundEffect::GameOver => "game_over",
            SoundEffect::ButtonClick => "button_click",
        }
    }

    /// Catch sound for an object type
    pub fn catch(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Red => SoundEffect::CatchRed,
            ObjectKind::Green => SoundEffect::CatchGreen,
            ObjectKind::Yellow => SoundEffect::CatchYellow,
            ObjectKind::Purple => SoundEffect::CatchPurple,
            ObjectKind::Bomb => SoundEffect::CatchBomb,
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    /// Play a one-shot effect at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);

    /// Music volume changed (0.0 - 1.0)
    fn set_music_volume(&mut self, _volume: f32) {}
}

/// Backend that only logs each trigger, used by the headless binary
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("sound {} @ {:.2}", effect.name(), volume);
    }

    fn set_music_volume(&mut self, volume: f32) {
        log::debug!("music volume {:.2}", volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    sound_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend available - audio disabled");
        }
        Self {
            backend,
            sound_volume: 0.7,
            music_volume: 0.5,
            muted: false,
        }
    }

    /// Manager that silently drops every trigger
    pub fn disabled() -> Self {
        Self {
            backend: None,
            sound_volume: 0.0,
            music_volume: 0.0,
            muted: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Set sound effect volume (0.0 - 1.0)
    pub fn set_sound_volume(&mut self, vol: f32) {
        self.sound_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        let volume = self.music_volume;
        if let Some(backend) = self.backend.as_mut() {
            backend.set_music_volume(volume);
        }
    }

    pub fn sound_volume(&self) -> f32 {
        self.sound_volume
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sound_volume }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.play(effect, vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(SoundEffect, f32)>>>);

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.borrow_mut().push((effect, volume));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = SoundEffect::ALL.iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SoundEffect::ALL.len());
    }

    #[test]
    fn test_catch_sound_per_kind() {
        assert_eq!(SoundEffect::catch(ObjectKind::Red).name(), "catch_red");
        assert_eq!(SoundEffect::catch(ObjectKind::Purple).name(), "catch_purple");
        assert_eq!(SoundEffect::catch(ObjectKind::Bomb).name(), "catch_bomb");
    }

    #[test]
    fn test_no_backend_is_noop() {
        let mut audio = AudioManager::new(None);
        assert!(!audio.is_enabled());
        audio.play(SoundEffect::Miss);
        audio.set_music_volume(0.3);
        assert_eq!(audio.music_volume(), 0.3);
    }

    #[test]
    fn test_plays_at_sound_volume() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Some(Box::new(recorder.clone())));
        audio.set_sound_volume(0.4);
        audio.play(SoundEffect::PowerUp);
        assert_eq!(*recorder.0.borrow(), vec![(SoundEffect::PowerUp, 0.4)]);
    }

    #[test]
    fn test_muted_or_silent_skips_backend() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Some(Box::new(recorder.clone())));
        audio.set_muted(true);
        audio.play(SoundEffect::Combo);
        audio.set_muted(false);
        audio.set_sound_volume(0.0);
        audio.play(SoundEffect::Combo);
        assert!(recorder.0.borrow().is_empty());
    }
}
