//! Falling Frenzy - catch the falling objects, dodge the bombs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, scoring)
//! - `game`: Screen state machine driving the simulation
//! - `render` / `audio` / `ui`: Presentation boundary (draw commands, sound triggers, menus)
//! - `platform`: Input event abstraction
//! - `persistence`: Flat-file storage for high score, statistics and settings
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod statistics;
pub mod tuning;
pub mod ui;

pub use game::{Action, Frame, Game, Screen};
pub use highscores::HighScoreFile;
pub use settings::Settings;
pub use statistics::Statistics;
pub use tuning::{Difficulty, GameConfig};

/// RGB colors shared by entities, particles and menus
pub mod palette {
    pub type Color = [u8; 3];

    pub const WHITE: Color = [255, 255, 255];
    pub const BLACK: Color = [0, 0, 0];
    pub const RED: Color = [255, 60, 60];
    pub const GREEN: Color = [60, 255, 100];
    pub const YELLOW: Color = [255, 220, 60];
    pub const BLUE: Color = [60, 120, 255];
    pub const PURPLE: Color = [180, 60, 255];
    pub const ORANGE: Color = [255, 140, 0];
    pub const GRAY: Color = [200, 200, 200];
    pub const DARK_GRAY: Color = [50, 50, 50];
    pub const LIGHT_BLUE: Color = [100, 180, 255];
    pub const GOLD: Color = [255, 215, 0];
    pub const MAGENTA: Color = [255, 0, 255];
    /// Bomb burst
    pub const EXPLOSION: Color = [255, 100, 0];

    pub const BG_TOP: Color = [20, 20, 40];
    pub const BG_BOTTOM: Color = [60, 40, 80];

    /// Brighten each channel, saturating at 255
    pub fn lighten(color: Color, amount: u8) -> Color {
        color.map(|c| c.saturating_add(amount))
    }
}
