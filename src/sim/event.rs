//! Discrete gameplay events produced by a simulation tick
//!
//! The presentation layer maps these onto sounds; the simulation never
//! calls audio directly.

use super::entity::{ObjectKind, PowerUpKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A non-bomb object was caught
    Caught {
        kind: ObjectKind,
        points: u32,
        /// Combo count after this catch
        combo: u32,
    },
    /// A bomb landed in the basket
    BombCaught { damage: u32 },
    /// A non-bomb object fell past the bottom of the screen
    Missed { kind: ObjectKind, penalized: bool },
    PowerUpCollected(PowerUpKind),
    PowerUpExpired(PowerUpKind),
    DifficultyIncreased { level: u32 },
    /// Score reached zero
    GameOver { score: u32 },
}
