//! Platform abstraction layer
//!
//! Window/event-loop backends translate their native events into
//! [`InputEvent`]s; [`InputTracker`] folds them into one [`FrameInput`]
//! per frame.

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Escape,
}

impl Key {
    /// Map a DOM/winit style key name; both arrows and A/D steer
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "Right" | "d" | "D" => Some(Key::Right),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Raw platform input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerMoved(Vec2),
    PointerDown,
    PointerUp,
}

/// Input snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub quit: bool,
    /// Escape pressed this frame
    pub pause: bool,
    pub left: bool,
    pub right: bool,
    pub pointer: Vec2,
    /// Pointer pressed this frame
    pub click: bool,
}

impl FrameInput {
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

/// Held-key state plus one-shot edges collected between frames
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    left_held: bool,
    right_held: bool,
    pointer: Vec2,
    pending: FrameInput,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.pending.quit = true,
            InputEvent::KeyDown(Key::Left) => self.left_held = true,
            InputEvent::KeyDown(Key::Right) => self.right_held = true,
            InputEvent::KeyDown(Key::Escape) => self.pending.pause = true,
            InputEvent::KeyUp(Key::Left) => self.left_held = false,
            InputEvent::KeyUp(Key::Right) => self.right_held = false,
            InputEvent::KeyUp(Key::Escape) => {}
            InputEvent::PointerMoved(pos) => self.pointer = pos,
            InputEvent::PointerDown => self.pending.click = true,
            InputEvent::PointerUp => {}
        }
    }

    /// Snapshot for this frame; clears the one-shot flags
    pub fn frame(&mut self) -> FrameInput {
        let one_shot = std::mem::take(&mut self.pending);
        FrameInput {
            quit: one_shot.quit,
            pause: one_shot.pause,
            left: self.left_held,
            right: self.right_held,
            pointer: self.pointer,
            click: one_shot.click,
        }
    }
}
