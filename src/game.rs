//! Screen state machine
//!
//! [`Game`] owns the session, the persisted stores and the audio manager.
//! Every frame it folds input into menu actions, runs the simulation while
//! playing, and returns what to draw and which sounds fired.

use glam::Vec2;

use crate::audio::{AudioManager, SoundEffect};
use crate::highscores::HighScoreFile;
use crate::persistence::StoragePaths;
use crate::platform::FrameInput;
use crate::render::{self, DrawCommand};
use crate::settings::{Settings, SettingsStore, Toggle, VOLUME_STEP};
use crate::sim::{GameEvent, Session, tick};
use crate::statistics::Statistics;
use crate::tuning::GameConfig;
use crate::ui::{self, Menu};

/// Frames averaged by the FPS counter
const FPS_WINDOW: usize = 60;
/// Longest frame time folded into the simulation
const MAX_FRAME_TIME: f32 = 2.0;
/// Cap on fixed steps per frame
const MAX_SUBSTEPS: u32 = 120;
/// Float slack when draining the accumulator
const STEP_SLACK: f32 = 1e-4;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Playing,
    Paused,
    GameOver,
    Statistics,
    Settings,
}

/// Everything a menu button can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartGame,
    ShowStatistics,
    ShowSettings,
    Quit,
    Resume,
    Pause,
    ReturnToMenu,
    SoundVolumeDown,
    SoundVolumeUp,
    MusicVolumeDown,
    MusicVolumeUp,
    ToggleFullscreen,
    ToggleShowFps,
    ToggleParticles,
    CycleDifficulty,
}

/// Output of one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub sounds: Vec<SoundEffect>,
}

impl Frame {
    pub fn sound_names(&self) -> Vec<&'static str> {
        self.sounds.iter().map(|s| s.name()).collect()
    }
}

/// Rolling average over the last [`FPS_WINDOW`] frame times
#[derive(Debug, Clone)]
struct FpsCounter {
    frame_times: [f32; FPS_WINDOW],
    index: usize,
    filled: usize,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            index: 0,
            filled: 0,
        }
    }

    fn record(&mut self, dt: f32) {
        self.frame_times[self.index] = dt;
        self.index = (self.index + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    fn fps(&self) -> u32 {
        let total: f32 = self.frame_times[..self.filled].iter().sum();
        if total <= 0.0 {
            return 0;
        }
        (self.filled as f32 / total).round() as u32
    }
}

/// Game instance holding all state
pub struct Game {
    base_config: GameConfig,
    paths: StoragePaths,
    high_scores: HighScoreFile,
    settings: SettingsStore,
    stats: Statistics,
    audio: AudioManager,
    session: Session,
    screen: Screen,
    running: bool,
    /// Seed for the next session
    next_seed: u64,
    fps: FpsCounter,
    /// Unsimulated time carried to the next frame
    accumulator: f32,
    pointer: Vec2,
    /// Sounds triggered during the current frame
    sounds: Vec<SoundEffect>,
}

impl Game {
    pub fn new(base_config: GameConfig, paths: StoragePaths, audio: AudioManager, seed: u64) -> Self {
        let high_scores = HighScoreFile::new(paths.high_score.clone());
        let settings = SettingsStore::load(paths.settings.clone());
        let stats = Statistics::load(&paths.statistics);

        let mut audio = audio;
        audio.set_sound_volume(settings.get().sound_volume);
        audio.set_music_volume(settings.get().music_volume);

        let config = base_config.for_difficulty(settings.get().difficulty());
        let mut session = Session::new(config, seed, high_scores.load());
        session.particles_enabled = settings.get().particles_enabled;

        log::info!(
            "Falling Frenzy ready (difficulty {}, high score {})",
            settings.get().difficulty,
            session.score.high_score
        );

        Self {
            base_config,
            paths,
            high_scores,
            settings,
            stats,
            audio,
            session,
            screen: Screen::MainMenu,
            running: true,
            next_seed: seed,
            fps: FpsCounter::new(),
            accumulator: 0.0,
            pointer: Vec2::ZERO,
            sounds: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn settings(&self) -> &Settings {
        self.settings.get()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn high_score(&self) -> u32 {
        self.session.score.high_score
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// One iteration of the main loop: input, update, render
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> Frame {
        self.pointer = input.pointer;
        self.fps.record(dt);

        if input.quit {
            self.apply(Action::Quit);
        }
        if input.pause {
            self.escape();
        }
        if input.click
            && let Some(action) = self.menu().and_then(|m| m.click(input.pointer))
        {
            self.play(SoundEffect::ButtonClick);
            self.apply(action);
        }

        if !self.running {
            return self.finish_frame();
        }

        if self.screen == Screen::Playing {
            self.step_session(input, dt);
        } else {
            self.accumulator = 0.0;
        }

        self.finish_frame()
    }

    fn finish_frame(&mut self) -> Frame {
        Frame {
            commands: self.render(),
            sounds: std::mem::take(&mut self.sounds),
        }
    }

    /// Advance the session in fixed steps of one reference frame
    fn step_session(&mut self, input: &FrameInput, dt: f32) {
        let step = 1.0 / self.session.config.reference_fps;
        let tick_input = input.tick_input();
        self.accumulator += dt.max(0.0).min(MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator + STEP_SLACK >= step && substeps < MAX_SUBSTEPS {
            let events = tick(&mut self.session, &tick_input, step);
            self.accumulator -= step;
            substeps += 1;

            self.handle_events(&events);
            if self.session.over {
                self.accumulator = 0.0;
                self.end_game();
                return;
            }
        }
    }

    /// Perform a menu action
    pub fn apply(&mut self, action: Action) {
        log::debug!("Action {:?} on {:?}", action, self.screen);
        match action {
            Action::StartGame => self.start_session(),
            Action::ShowStatistics => self.screen = Screen::Statistics,
            Action::ShowSettings => self.screen = Screen::Settings,
            Action::Quit => self.quit(),
            Action::Resume => {
                if self.screen == Screen::Paused {
                    self.screen = Screen::Playing;
                }
            }
            Action::Pause => {
                if self.screen == Screen::Playing {
                    self.screen = Screen::Paused;
                }
            }
            Action::ReturnToMenu => self.screen = Screen::MainMenu,
            Action::SoundVolumeDown | Action::SoundVolumeUp => {
                let delta = if action == Action::SoundVolumeUp {
                    VOLUME_STEP
                } else {
                    -VOLUME_STEP
                };
                let mut volume = 0.0;
                self.settings
                    .update(|s| volume = s.adjust_sound_volume(delta));
                self.audio.set_sound_volume(volume);
            }
            Action::MusicVolumeDown | Action::MusicVolumeUp => {
                let delta = if action == Action::MusicVolumeUp {
                    VOLUME_STEP
                } else {
                    -VOLUME_STEP
                };
                let mut volume = 0.0;
                self.settings
                    .update(|s| volume = s.adjust_music_volume(delta));
                self.audio.set_music_volume(volume);
            }
            Action::ToggleFullscreen => {
                let on = self.settings.toggle(Toggle::Fullscreen);
                log::info!("Fullscreen {}", on);
            }
            Action::ToggleShowFps => {
                self.settings.toggle(Toggle::ShowFps);
            }
            Action::ToggleParticles => {
                let on = self.settings.toggle(Toggle::Particles);
                self.session.particles_enabled = on;
                if !on {
                    self.session.particles.clear();
                }
            }
            Action::CycleDifficulty => {
                self.settings
                    .update(|s| s.set_difficulty(s.difficulty().next()));
                log::info!(
                    "Difficulty set to {} (applies next game)",
                    self.settings.get().difficulty
                );
            }
        }
    }

    /// Escape: pause toggle while in a game, back out of sub-menus
    fn escape(&mut self) {
        let next = match self.screen {
            Screen::Playing => Screen::Paused,
            Screen::Paused => Screen::Playing,
            Screen::Statistics | Screen::Settings => Screen::MainMenu,
            other => other,
        };
        if next != self.screen {
            log::debug!("Escape: {:?} -> {:?}", self.screen, next);
            self.screen = next;
        }
    }

    fn start_session(&mut self) {
        let difficulty = self.settings.get().difficulty();
        let config = self.base_config.for_difficulty(difficulty);
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);

        self.session.restart(config, seed);
        self.accumulator = 0.0;
        self.session.particles_enabled = self.settings.get().particles_enabled;
        self.screen = Screen::Playing;
        log::info!("New game (seed {}, difficulty {})", seed, difficulty.as_str());
    }

    /// Snapshot the session into statistics and persist the high score
    fn end_game(&mut self) {
        self.screen = Screen::GameOver;
        self.play(SoundEffect::GameOver);

        let summary = self.session.summary();
        self.stats.end_session(&summary, &self.paths.statistics);
        self.session.score.save_high_score(&self.high_scores);
    }

    fn quit(&mut self) {
        log::info!("Quitting");
        self.session.score.save_high_score(&self.high_scores);
        self.settings.save();
        self.running = false;
    }

    fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::Caught { kind, combo, .. } => {
                    self.play(SoundEffect::catch(kind));
                    if combo > 2 {
                        self.play(SoundEffect::Combo);
                    }
                }
                GameEvent::BombCaught { .. } => self.play(SoundEffect::CatchBomb),
                GameEvent::Missed { penalized, .. } => {
                    if penalized {
                        self.play(SoundEffect::Miss);
                    }
                }
                GameEvent::PowerUpCollected(_) => self.play(SoundEffect::PowerUp),
                GameEvent::PowerUpExpired(kind) => {
                    log::debug!("{} wore off", kind.name());
                }
                GameEvent::DifficultyIncreased { level } => {
                    log::debug!("Difficulty level {}", level);
                }
                GameEvent::GameOver { .. } => {}
            }
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        self.audio.play(effect);
        self.sounds.push(effect);
    }

    /// Menu shown on the current screen, if any
    pub fn menu(&self) -> Option<Menu> {
        let config = &self.session.config;
        match self.screen {
            Screen::MainMenu => Some(ui::main_menu(config)),
            Screen::Playing => None,
            Screen::Paused => Some(ui::pause_menu(config)),
            Screen::GameOver => Some(ui::game_over_menu(
                config,
                self.session.score.score,
                self.session.score.high_score,
            )),
            Screen::Statistics => Some(ui::statistics_menu(config, &self.stats)),
            Screen::Settings => Some(ui::settings_menu(config, self.settings.get())),
        }
    }

    fn render(&self) -> Vec<DrawCommand> {
        let config = &self.session.config;
        match self.screen {
            Screen::Playing => {
                let fps = self.settings.get().show_fps.then(|| self.fps.fps());
                render::playing(&self.session, fps)
            }
            Screen::Paused => render::paused(&self.session, &ui::pause_menu(config), self.pointer),
            _ => match self.menu() {
                Some(menu) => render::menu_screen(&menu, config, self.pointer),
                None => vec![render::background()],
            },
        }
    }
}
