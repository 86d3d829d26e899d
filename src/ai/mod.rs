//! Computer opponent.
//!
//! The opponent is a single-ply heuristic, not a search:
//!
//! - `MovePolicy`: trait for choosing the active player's action
//! - `GreedyPolicy`: prefers slides that complete a run, otherwise uniform
//! - `PacingConfig`: host-side delays around computer turns
//!
//! ## Example
//!
//! ```
//! use dara_engine::ai::{GreedyPolicy, MovePolicy};
//! use dara_engine::core::{GameConfig, GameRng};
//! use dara_engine::rules::TurnState;
//! use dara_engine::zones::Board;
//!
//! let board = Board::new(&GameConfig::default());
//! let mut rng = GameRng::new(42);
//!
//! let decision = GreedyPolicy.decide(&board, TurnState::default(), &mut rng).unwrap();
//! assert!(board.main().get(decision.target).is_none());
//! ```

pub mod policy;
pub mod pacing;

pub use policy::{select_best, Candidate, GreedyPolicy, MovePolicy};
pub use pacing::PacingConfig;
