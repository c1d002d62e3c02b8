//! Gameplay entities: basket, falling objects, power-ups
//!
//! Pure data plus per-frame update rules. Nothing here touches I/O.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::palette::{self, Color};
use crate::tuning::GameConfig;

/// Falling object types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Red,
    Green,
    Yellow,
    Purple,
    Bomb,
}

/// Per-kind attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTraits {
    pub name: &'static str,
    pub color: Color,
    /// Base points awarded on catch (bombs award nothing)
    pub points: u32,
    pub is_bomb: bool,
}

const OBJECT_TABLE: [ObjectTraits; 5] = [
    ObjectTraits { name: "red", color: palette::RED, points: 1, is_bomb: false },
    ObjectTraits { name: "green", color: palette::GREEN, points: 2, is_bomb: false },
    ObjectTraits { name: "yellow", color: palette::YELLOW, points: 3, is_bomb: false },
    ObjectTraits { name: "purple", color: palette::PURPLE, points: 5, is_bomb: false },
    ObjectTraits { name: "bomb", color: palette::BLACK, points: 0, is_bomb: true },
];

impl ObjectKind {
    /// The common catchable kinds, chosen uniformly by the spawner
    pub const REGULAR: [ObjectKind; 3] = [ObjectKind::Red, ObjectKind::Green, ObjectKind::Yellow];

    pub fn traits(self) -> &'static ObjectTraits {
        &OBJECT_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.traits().name
    }

    pub fn color(self) -> Color {
        self.traits().color
    }

    pub fn points(self) -> u32 {
        self.traits().points
    }

    pub fn is_bomb(self) -> bool {
        self.traits().is_bomb
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    SlowMotion,
    DoublePoints,
    Shield,
    /// Carried as data only; has no gameplay effect
    Magnet,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUpTraits {
    pub name: &'static str,
    pub color: Color,
    /// Fall-speed factor for slow motion, points factor for double points
    pub effect_value: f32,
}

const POWER_UP_TABLE: [PowerUpTraits; 4] = [
    PowerUpTraits { name: "slow_mo", color: palette::LIGHT_BLUE, effect_value: 0.5 },
    PowerUpTraits { name: "double_points", color: palette::GOLD, effect_value: 2.0 },
    PowerUpTraits { name: "shield", color: palette::PURPLE, effect_value: 1.0 },
    PowerUpTraits { name: "magnet", color: palette::ORANGE, effect_value: 1.0 },
];

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::SlowMotion,
        PowerUpKind::DoublePoints,
        PowerUpKind::Shield,
        PowerUpKind::Magnet,
    ];

    pub fn traits(self) -> &'static PowerUpTraits {
        &POWER_UP_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.traits().name
    }

    pub fn color(self) -> Color {
        self.traits().color
    }

    pub fn effect_value(self) -> f32 {
        self.traits().effect_value
    }

    /// HUD label, e.g. "SLOW_MO"
    pub fn label(self) -> String {
        self.name().to_uppercase()
    }
}

/// Horizontal steering derived from held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

/// The player's basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per reference frame
    pub speed: f32,
    pub velocity_x: f32,
}

impl Basket {
    /// Basket centred horizontally at its resting height
    pub fn new(config: &GameConfig) -> Self {
        let mut basket = Self {
            pos: Vec2::new(0.0, config.basket_y()),
            size: Vec2::new(config.basket_width, config.basket_height),
            speed: config.basket_speed,
            velocity_x: 0.0,
        };
        basket.recenter(config);
        basket
    }

    pub fn recenter(&mut self, config: &GameConfig) {
        self.pos.x = (config.screen_width / 2.0).floor() - (self.size.x / 2.0).floor();
        self.velocity_x = 0.0;
    }

    /// Move according to held keys, clamped to the screen (right wins ties)
    pub fn update(&mut self, steering: Steering, dt: f32, config: &GameConfig) {
        self.velocity_x = 0.0;
        if steering.left {
            self.velocity_x = -self.speed;
        }
        if steering.right {
            self.velocity_x = self.speed;
        }

        self.pos.x += self.velocity_x * config.frames(dt);
        self.pos.x = self.pos.x.clamp(0.0, (config.screen_width - self.size.x).max(0.0));
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

/// An object falling from the top of the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObjectKind,
    /// Pixels per reference frame
    pub speed: f32,
    /// Degrees, visual only
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Pulse phase for purple objects and bombs
    pub pulse_time: f32,
    pub scale: f32,
}

impl FallingObject {
    pub fn new(pos: Vec2, kind: ObjectKind, speed: f32, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::new(config.object_width, config.object_height),
            kind,
            speed,
            rotation: 0.0,
            rotation_speed: 0.0,
            pulse_time: 0.0,
            scale: 1.0,
        }
    }

    pub fn with_spin(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn update(&mut self, dt: f32, speed_multiplier: f32, config: &GameConfig) {
        let frames = config.frames(dt);
        self.pos.y += self.speed * speed_multiplier * frames;
        self.rotation = (self.rotation + self.rotation_speed * frames) % 360.0;

        match self.kind {
            ObjectKind::Purple => {
                self.pulse_time += dt * 10.0;
                self.scale = 1.0 + self.pulse_time.sin() * 0.1;
            }
            ObjectKind::Bomb => {
                self.pulse_time += dt * 8.0;
                self.scale = 1.0 + self.pulse_time.sin() * 0.15;
            }
            _ => {}
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.pos.y > screen_height
    }
}

/// A catchable power-up item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PowerUpKind,
    pub speed: f32,
    pub rotation: f32,
    /// Glow phase in seconds, visual only
    pub glow_time: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind, speed: f32, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::new(config.object_width, config.object_height),
            kind,
            speed,
            rotation: 0.0,
            glow_time: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, speed_multiplier: f32, config: &GameConfig) {
        let frames = config.frames(dt);
        self.pos.y += self.speed * speed_multiplier * frames;
        self.rotation = (self.rotation + 2.0 * frames) % 360.0;
        self.glow_time += dt;
    }

    /// Glow intensity in 0..=1
    pub fn glow(&self) -> f32 {
        ((self.glow_time * 5.0).sin() + 1.0) / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.pos.y > screen_height
    }
}

/// The single power-up effect currently running
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub remaining_ms: f32,
}

impl ActivePowerUp {
    pub fn new(kind: PowerUpKind, duration_ms: f32) -> Self {
        Self {
            kind,
            remaining_ms: duration_ms,
        }
    }

    /// Count down; returns true once the effect has run out
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining_ms -= dt * 1000.0;
        self.remaining_ms <= 0.0
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining_ms.max(0.0) / 1000.0
    }
}
