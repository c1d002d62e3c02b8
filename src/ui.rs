//! Menus and buttons as plain data
//!
//! Each screen's menu is rebuilt from current state when drawn or clicked,
//! so labels like "Sound Volume: 70%" never go stale.

use glam::Vec2;

use crate::game::Action;
use crate::palette::{self, Color};
use crate::settings::Settings;
use crate::sim::Rect;
use crate::statistics::Statistics;
use crate::tuning::GameConfig;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 60.0;
/// Horizontal gap between paired buttons
const PAIR_GAP: f32 = 20.0;
/// Menu title baseline
pub const TITLE_Y: f32 = 100.0;

/// Font size classes; the adapter picks the actual font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
    Title,
}

impl TextSize {
    pub fn px(self) -> u32 {
        match self {
            TextSize::Small => 24,
            TextSize::Medium => 36,
            TextSize::Large => 72,
            TextSize::Title => 100,
        }
    }
}

/// Centered line of menu text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub y: f32,
    pub size: TextSize,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: Action,
    pub color: Color,
}

impl Button {
    pub fn is_hovered(&self, pointer: Vec2) -> bool {
        self.rect.contains_point(pointer)
    }

    /// Fill color for the current pointer position
    pub fn fill(&self, pointer: Vec2) -> Color {
        if self.is_hovered(pointer) {
            palette::lighten(self.color, 50)
        } else {
            self.color
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub title: String,
    pub buttons: Vec<Button>,
    pub texts: Vec<TextLine>,
    screen_width: f32,
    screen_height: f32,
}

impl Menu {
    pub fn new(title: &str, config: &GameConfig) -> Self {
        Self {
            title: title.to_string(),
            buttons: Vec::new(),
            texts: Vec::new(),
            screen_width: config.screen_width,
            screen_height: config.screen_height,
        }
    }

    /// Centered button whose top edge sits `y_offset` below mid-screen
    pub fn add_button(&mut self, label: &str, y_offset: f32, action: Action) -> &mut Self {
        let x = self.screen_width / 2.0 - BUTTON_WIDTH / 2.0;
        self.push_button(x, y_offset, label, action, palette::BLUE)
    }

    /// Two buttons side by side on one row
    pub fn add_button_pair(
        &mut self,
        y_offset: f32,
        left: (&str, Action),
        right: (&str, Action),
    ) -> &mut Self {
        let center = self.screen_width / 2.0;
        self.push_button(
            center - PAIR_GAP / 2.0 - BUTTON_WIDTH,
            y_offset,
            left.0,
            left.1,
            palette::BLUE,
        );
        self.push_button(center + PAIR_GAP / 2.0, y_offset, right.0, right.1, palette::BLUE)
    }

    fn push_button(
        &mut self,
        x: f32,
        y_offset: f32,
        label: &str,
        action: Action,
        color: Color,
    ) -> &mut Self {
        let y = self.screen_height / 2.0 + y_offset;
        self.buttons.push(Button {
            rect: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            label: label.to_string(),
            action,
            color,
        });
        self
    }

    pub fn add_text(&mut self, text: impl Into<String>, y: f32, size: TextSize) -> &mut Self {
        self.add_colored_text(text, y, size, palette::WHITE)
    }

    pub fn add_colored_text(
        &mut self,
        text: impl Into<String>,
        y: f32,
        size: TextSize,
        color: Color,
    ) -> &mut Self {
        self.texts.push(TextLine {
            text: text.into(),
            y,
            size,
            color,
        });
        self
    }

    /// Action of the button under `pointer`, if any
    pub fn click(&self, pointer: Vec2) -> Option<Action> {
        self.buttons
            .iter()
            .find(|b| b.is_hovered(pointer))
            .map(|b| b.action)
    }

    pub fn button(&self, action: Action) -> Option<&Button> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

pub fn main_menu(config: &GameConfig) -> Menu {
    let mut menu = Menu::new("FALLING FRENZY", config);
    menu.add_button("Start Game", -20.0, Action::StartGame)
        .add_button("Statistics", 60.0, Action::ShowStatistics)
        .add_button("Settings", 140.0, Action::ShowSettings)
        .add_button("Quit", 220.0, Action::Quit);
    menu
}

pub fn pause_menu(config: &GameConfig) -> Menu {
    let mut menu = Menu::new("PAUSED", config);
    menu.add_button("Resume", -20.0, Action::Resume)
        .add_button("Main Menu", 60.0, Action::ReturnToMenu);
    menu
}

pub fn game_over_menu(config: &GameConfig, score: u32, high_score: u32) -> Menu {
    let mut menu = Menu::new("GAME OVER", config);
    menu.add_text(
        format!("Final Score: {} | High Score: {}", score, high_score),
        config.screen_height / 2.0 - 100.0,
        TextSize::Medium,
    )
    .add_button("Play Again", 20.0, Action::StartGame)
    .add_button("Main Menu", 100.0, Action::ReturnToMenu);
    menu
}

pub fn statistics_menu(config: &GameConfig, stats: &Statistics) -> Menu {
    let mut menu = Menu::new("STATISTICS", config);
    menu.add_text(
        format!("Games Played: {}", stats.games_played),
        200.0,
        TextSize::Medium,
    )
    .add_text(
        format!("Average Score: {:.1}", stats.average_score()),
        240.0,
        TextSize::Medium,
    )
    .add_text(format!("Best Combo: {}", stats.best_combo), 280.0, TextSize::Medium)
    .add_text(
        format!("Catch Rate: {:.1}%", stats.catch_rate()),
        320.0,
        TextSize::Medium,
    )
    .add_text(
        format!("Total Play Time: {}", stats.play_time_display()),
        360.0,
        TextSize::Medium,
    )
    .add_button("Back", 180.0, Action::ReturnToMenu);
    menu
}

pub fn settings_menu(config: &GameConfig, settings: &Settings) -> Menu {
    let on_off = |flag: bool| if flag { "On" } else { "Off" };
    let percent = |v: f32| (v * 100.0).round() as u32;
    let mid = config.screen_height / 2.0;

    let mut menu = Menu::new("SETTINGS", config);
    menu.add_text(
        format!("Sound Volume: {}%", percent(settings.sound_volume)),
        mid - 190.0,
        TextSize::Small,
    )
    .add_button_pair(
        -170.0,
        ("Sound -", Action::SoundVolumeDown),
        ("Sound +", Action::SoundVolumeUp),
    )
    .add_text(
        format!("Music Volume: {}%", percent(settings.music_volume)),
        mid - 100.0,
        TextSize::Small,
    )
    .add_button_pair(
        -80.0,
        ("Music -", Action::MusicVolumeDown),
        ("Music +", Action::MusicVolumeUp),
    )
    .add_button_pair(
        0.0,
        (
            &format!("Fullscreen: {}", on_off(settings.fullscreen)),
            Action::ToggleFullscreen,
        ),
        (
            &format!("Show FPS: {}", on_off(settings.show_fps)),
            Action::ToggleShowFps,
        ),
    )
    .add_button_pair(
        80.0,
        (
            &format!("Particles: {}", on_off(settings.particles_enabled)),
            Action::ToggleParticles,
        ),
        (
            &format!("Difficulty: {}", capitalize(settings.difficulty().as_str())),
            Action::CycleDifficulty,
        ),
    )
    .add_button("Back", 180.0, Action::ReturnToMenu);
    menu
}

/// HUD combo color by streak length
pub fn combo_color(combo: u32) -> Color {
    match combo {
        0..=2 => palette::WHITE,
        3..=4 => palette::GREEN,
        5..=9 => palette::GOLD,
        _ => palette::MAGENTA,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(menu: &Menu, action: Action) -> Vec2 {
        menu.button(action).unwrap().rect.center()
    }

    #[test]
    fn test_main_menu_layout() {
        let config = GameConfig::default();
        let menu = main_menu(&config);
        let start = menu.button(Action::StartGame).unwrap();
        assert_eq!(start.rect.left(), 450.0);
        assert_eq!(start.rect.top(), 330.0);
        assert_eq!(start.rect.size, Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT));
        assert_eq!(menu.buttons.len(), 4);
    }

    #[test]
    fn test_click_hits_button() {
        let config = GameConfig::default();
        let menu = main_menu(&config);
        assert_eq!(
            menu.click(center_of(&menu, Action::ShowSettings)),
            Some(Action::ShowSettings)
        );
        assert_eq!(menu.click(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_hover_lightens() {
        let config = GameConfig::default();
        let menu = pause_menu(&config);
        let resume = menu.button(Action::Resume).unwrap();
        assert_eq!(resume.fill(Vec2::ZERO), palette::BLUE);
        assert_eq!(
            resume.fill(resume.rect.center()),
            palette::lighten(palette::BLUE, 50)
        );
    }

    #[test]
    fn test_settings_buttons_do_not_overlap() {
        let config = GameConfig::default();
        let menu = settings_menu(&config, &Settings::default());
        for (i, a) in menu.buttons.iter().enumerate() {
            for b in &menu.buttons[i + 1..] {
                assert!(!a.rect.intersects(&b.rect), "{} overlaps {}", a.label, b.label);
            }
        }
    }

    #[test]
    fn test_settings_labels_follow_state() {
        let config = GameConfig::default();
        let settings = Settings {
            show_fps: true,
            sound_volume: 0.3,
            ..Default::default()
        };
        let menu = settings_menu(&config, &settings);
        assert_eq!(menu.button(Action::ToggleShowFps).unwrap().label, "Show FPS: On");
        assert_eq!(
            menu.button(Action::CycleDifficulty).unwrap().label,
            "Difficulty: Normal"
        );
        assert!(menu.texts.iter().any(|t| t.text == "Sound Volume: 30%"));
    }

    #[test]
    fn test_statistics_text() {
        let config = GameConfig::default();
        let stats = Statistics {
            games_played: 2,
            total_score: 30,
            objects_caught: 3,
            objects_missed: 1,
            total_time_seconds: 125,
            ..Default::default()
        };
        let menu = statistics_menu(&config, &stats);
        let texts: Vec<_> = menu.texts.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"Average Score: 15.0"));
        assert!(texts.contains(&"Catch Rate: 75.0%"));
        assert!(texts.contains(&"Total Play Time: 2m 5s"));
    }

    #[test]
    fn test_game_over_text() {
        let config = GameConfig::default();
        let menu = game_over_menu(&config, 0, 42);
        assert_eq!(menu.texts[0].text, "Final Score: 0 | High Score: 42");
        assert!(menu.button(Action::StartGame).is_some());
    }

    #[test]
    fn test_combo_color() {
        assert_eq!(combo_color(0), palette::WHITE);
        assert_eq!(combo_color(3), palette::GREEN);
        assert_eq!(combo_color(7), palette::GOLD);
        assert_eq!(combo_color(10), palette::MAGENTA);
    }
}
