//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Frame-rate independent motion (everything scaled by `dt`)
//! - No rendering, audio or file I/O

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod event;
pub mod particles;
pub mod rect;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{effective_multiplier, resolve_catches, resolve_misses};
pub use difficulty::DifficultyRamp;
pub use entity::{
    ActivePowerUp, Basket, FallingObject, ObjectKind, PowerUp, PowerUpKind, Steering,
};
pub use event::GameEvent;
pub use particles::{Particle, ParticleSystem};
pub use rect::Rect;
pub use score::{ScoreTracker, combo_multiplier};
pub use spawn::{Spawner, pick_object_kind};
pub use state::{Session, SessionSummary};
pub use tick::{TickInput, autopilot, tick};
