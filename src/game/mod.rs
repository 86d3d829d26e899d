//! The Dara engine facade.
//!
//! `DaraGame` owns the board, the turn state and the AI random source, and
//! is the only way a host changes them:
//!
//! - `apply_move` / `apply_destroy` / `apply_decision` mutate
//! - `request_ai_move` proposes without mutating
//! - queries return copies or shared borrows
//!
//! ## Example
//!
//! ```
//! use dara_engine::game::DaraGame;
//! use dara_engine::core::{GameConfig, PieceId, Player};
//! use dara_engine::rules::Phase;
//!
//! let mut game = DaraGame::new(GameConfig::default()).unwrap();
//!
//! let outcome = game.apply_move(PieceId(1), 2, 2).unwrap();
//! assert_eq!(outcome.phase, Phase::Drop);
//! assert_eq!(outcome.active_player, Player::Two);
//!
//! let decision = game.request_ai_move().unwrap();
//! game.apply_decision(decision).unwrap();
//! assert_eq!(game.active_player(), Player::One);
//! ```

mod dara;

pub use dara::{DaraGame, DaraGameBuilder};
