//! # dara-engine
//!
//! Rule engine and computer opponent for a two-player Dara-style board game.
//!
//! Players drop pieces from their reserves onto a shared grid, then slide
//! them to adjacent cells. Completing a line of three of your own pieces
//! lets you destroy one opponent piece.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, input or timing. A host calls the
//!    engine and draws whatever it returns.
//!
//! 2. **Explicit Results**: Every rejected action is a `GameError` value and
//!    leaves the game untouched.
//!
//! 3. **Reproducible AI**: The opponent draws from a seeded `GameRng`, so a
//!    seed replays the same decisions.
//!
//! ## Modules
//!
//! - `core`: Piece IDs, players, configuration, RNG, errors, decisions
//! - `zones`: The main grid and the two reserves
//! - `rules`: Legality oracle, run detection, turn/phase state machine
//! - `ai`: Move policies and host pacing
//! - `game`: `DaraGame`, the engine facade

pub mod core;
pub mod zones;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PieceId, Player, PlayerMap,
    GameRng, GameRngState, GameConfig,
    GameError, IllegalMoveReason, ConfigError, BoardError,
    AiDecision, MoveOutcome,
};

pub use crate::zones::{Board, Cell, Grid, Location, Zone};

pub use crate::rules::{Announcement, Oracle, Phase, TurnState};

pub use crate::ai::{GreedyPolicy, MovePolicy, PacingConfig};

pub use crate::game::{DaraGame, DaraGameBuilder};
