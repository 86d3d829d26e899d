//! Core engine types: pieces, players, configuration, RNG, errors, decisions.
//!
//! This module contains the building blocks shared by the board, the rule
//! oracle, the turn state machine and the AI.

pub mod piece;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;

pub use piece::PieceId;
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError, GameError, IllegalMoveReason};
pub use action::{AiDecision, MoveOutcome};
