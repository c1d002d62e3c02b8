//! Draw command generation
//!
//! The core never touches a graphics API. Each frame it produces a flat list
//! of [`DrawCommand`]s in paint order, and a window backend rasterizes them.

use glam::Vec2;

use crate::palette::{self, Color};
use crate::sim::{ObjectKind, PowerUpKind, Rect, Session};
use crate::tuning::GameConfig;
use crate::ui::{self, Menu, TextSize, TITLE_Y};

/// Alpha of the dimming overlay behind the pause menu
const PAUSE_DIM: f32 = 0.5;

/// Where a text position is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// A single paint operation, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Vertical gradient filling the screen
    Background { top: Color, bottom: Color },
    /// Filled rectangle with a lighter top highlight (the basket)
    Rect { rect: Rect, color: Color, highlight: Color },
    Object {
        kind: ObjectKind,
        center: Vec2,
        size: Vec2,
        /// Degrees
        rotation: f32,
        scale: f32,
    },
    PowerUp {
        kind: PowerUpKind,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        /// 0..1 halo intensity
        glow: f32,
    },
    Particle {
        pos: Vec2,
        size: f32,
        color: Color,
        alpha: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        size: TextSize,
        color: Color,
        anchor: Anchor,
    },
    Button {
        rect: Rect,
        label: String,
        fill: Color,
        /// White when hovered
        border: Color,
    },
    /// Full-screen translucent fill
    Overlay { color: Color, alpha: f32 },
}

impl DrawCommand {
    fn text(text: impl Into<String>, pos: Vec2, size: TextSize, color: Color, anchor: Anchor) -> Self {
        DrawCommand::Text {
            text: text.into(),
            pos,
            size,
            color,
            anchor,
        }
    }
}

pub fn background() -> DrawCommand {
    DrawCommand::Background {
        top: palette::BG_TOP,
        bottom: palette::BG_BOTTOM,
    }
}

/// Basket, falling entities and particles
pub fn scene(session: &Session, out: &mut Vec<DrawCommand>) {
    let basket = session.basket.rect();
    out.push(DrawCommand::Rect {
        rect: basket,
        color: palette::BLUE,
        highlight: palette::lighten(palette::BLUE, 50),
    });

    for obj in &session.objects {
        out.push(DrawCommand::Object {
            kind: obj.kind,
            center: obj.center(),
            size: obj.size,
            rotation: obj.rotation,
            scale: obj.scale,
        });
    }

    for p in &session.power_ups {
        out.push(DrawCommand::PowerUp {
            kind: p.kind,
            center: p.center(),
            size: p.size,
            rotation: p.rotation,
            glow: p.glow(),
        });
    }

    for particle in &session.particles.particles {
        let alpha = particle.alpha();
        out.push(DrawCommand::Particle {
            pos: particle.pos,
            size: (particle.size * alpha).max(1.0),
            color: particle.color,
            alpha,
        });
    }
}

/// Score, combo, FPS and the active power-up label
pub fn hud(session: &Session, fps: Option<u32>, out: &mut Vec<DrawCommand>) {
    let config = &session.config;
    let score = &session.score;
    let mid_x = config.screen_width / 2.0;

    out.push(DrawCommand::text(
        format!("Score: {}", score.score),
        Vec2::new(10.0, 10.0),
        TextSize::Medium,
        palette::WHITE,
        Anchor::TopLeft,
    ));
    out.push(DrawCommand::text(
        format!("High Score: {}", score.high_score),
        Vec2::new(10.0, 50.0),
        TextSize::Small,
        palette::GRAY,
        Anchor::TopLeft,
    ));

    if score.combo > 0 {
        let color = ui::combo_color(score.combo);
        out.push(DrawCommand::text(
            format!("COMBO x{}", score.combo),
            Vec2::new(mid_x, 50.0),
            TextSize::Medium,
            color,
            Anchor::Center,
        ));
        let multiplier = score.combo_multiplier();
        if multiplier > 1.0 {
            out.push(DrawCommand::text(
                format!("{:.1}x Points!", multiplier),
                Vec2::new(mid_x, 85.0),
                TextSize::Small,
                color,
                Anchor::Center,
            ));
        }
    }

    if let Some(fps) = fps {
        out.push(DrawCommand::text(
            format!("FPS: {}", fps),
            Vec2::new(config.screen_width - 100.0, 10.0),
            TextSize::Small,
            palette::GRAY,
            Anchor::TopLeft,
        ));
    }

    if let Some(active) = &session.active_power_up {
        out.push(DrawCommand::text(
            format!(
                "Power-up: {} ({:.1}s)",
                active.kind.label(),
                active.remaining_secs()
            ),
            Vec2::new(mid_x, config.screen_height - 40.0),
            TextSize::Small,
            active.kind.color(),
            Anchor::Center,
        ));
    }
}

/// Title, text lines and buttons of a menu
pub fn menu(menu: &Menu, config: &GameConfig, pointer: Vec2, out: &mut Vec<DrawCommand>) {
    let mid_x = config.screen_width / 2.0;
    out.push(DrawCommand::text(
        menu.title.clone(),
        Vec2::new(mid_x, TITLE_Y),
        TextSize::Title,
        palette::WHITE,
        Anchor::Center,
    ));

    for line in &menu.texts {
        out.push(DrawCommand::text(
            line.text.clone(),
            Vec2::new(mid_x, line.y),
            line.size,
            line.color,
            Anchor::Center,
        ));
    }

    for button in &menu.buttons {
        let hovered = button.is_hovered(pointer);
        out.push(DrawCommand::Button {
            rect: button.rect,
            label: button.label.clone(),
            fill: button.fill(pointer),
            border: if hovered {
                palette::WHITE
            } else {
                palette::DARK_GRAY
            },
        });
    }
}

/// Full playing frame
pub fn playing(session: &Session, fps: Option<u32>) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(
        8 + session.objects.len() + session.power_ups.len() + session.particles.len(),
    );
    out.push(background());
    scene(session, &mut out);
    hud(session, fps, &mut out);
    out
}

/// Frozen scene, dimmed, with the pause menu on top
pub fn paused(session: &Session, pause_menu: &Menu, pointer: Vec2) -> Vec<DrawCommand> {
    let mut out = vec![background()];
    scene(session, &mut out);
    out.push(DrawCommand::Overlay {
        color: palette::BLACK,
        alpha: PAUSE_DIM,
    });
    menu(pause_menu, &session.config, pointer, &mut out);
    out
}

/// Background plus a menu
pub fn menu_screen(m: &Menu, config: &GameConfig, pointer: Vec2) -> Vec<DrawCommand> {
    let mut out = vec![background()];
    menu(m, config, pointer, &mut out);
    out
}
