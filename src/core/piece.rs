//! Piece identification.
//!
//! Every piece in a game has a unique `PieceId` in `1..=2N`, where `N` is the
//! number of pieces each player starts with.
//!
//! ## ID Layout
//!
//! - `1..=N`: Player 1's pieces
//! - `N+1..=2N`: Player 2's pieces
//!
//! Ownership is derived from the ID and `pieces_per_player`, never stored.
//!
//! ```
//! use dara_engine::core::{PieceId, Player};
//!
//! let n = 12;
//! assert_eq!(PieceId(1).owner(n), Some(Player::One));
//! assert_eq!(PieceId(13).owner(n), Some(Player::Two));
//! assert_eq!(PieceId(25).owner(n), None);
//! ```

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Unique identifier for a piece.
///
/// Zero is never a valid piece; empty cells are represented as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check whether this ID is in `1..=2N`.
    #[must_use]
    pub const fn is_valid(self, pieces_per_player: u8) -> bool {
        self.0 >= 1 && (self.0 as u16) <= 2 * pieces_per_player as u16
    }

    /// Get the player owning this piece.
    ///
    /// Returns `None` for IDs outside `1..=2N`.
    #[must_use]
    pub const fn owner(self, pieces_per_player: u8) -> Option<Player> {
        if !self.is_valid(pieces_per_player) {
            None
        } else if self.0 <= pieces_per_player {
            Some(Player::One)
        } else {
            Some(Player::Two)
        }
    }

    /// Iterate over every piece ID of one player, in ascending order.
    pub fn for_player(player: Player, pieces_per_player: u8) -> impl Iterator<Item = PieceId> {
        let first = match player {
            Player::One => 1u16,
            Player::Two => pieces_per_player as u16 + 1,
        };
        (first..first + pieces_per_player as u16).map(|id| PieceId(id as u8))
    }

    /// Iterate over every piece ID in the game.
    pub fn all(pieces_per_player: u8) -> impl Iterator<Item = PieceId> {
        (1..=2 * pieces_per_player as u16).map(|id| PieceId(id as u8))
    }
}

impl From<u8> for PieceId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}
