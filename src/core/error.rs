//! Engine error types.
//!
//! Every fallible engine operation returns one of these as an explicit
//! `Result`. The presentation layer decides what the user sees.

use thiserror::Error;

use super::piece::PieceId;
use super::player::Player;
use crate::rules::Phase;
use crate::zones::{Cell, Location};

/// Why a move or destroy target was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("action not allowed during the {0:?} phase")]
    WrongPhase(Phase),
    #[error("piece does not exist or has been captured")]
    UnknownPiece,
    #[error("piece belongs to the inactive player")]
    NotActivePlayer,
    #[error("piece cannot be picked up from its current zone")]
    NotLiftable,
    #[error("target is outside the main grid")]
    OutOfBounds,
    #[error("target cell is occupied")]
    Occupied,
    #[error("target is not orthogonally adjacent to the origin")]
    NotAdjacent,
    #[error("dropping here would complete a run of three")]
    DropFormsRun,
    #[error("target is not an opponent piece on the main grid")]
    NotOpponentPiece,
}

/// Errors surfaced by the engine API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The requested drop or slide is forbidden. No state was changed.
    #[error("illegal move of {piece} to {target}: {reason}")]
    IllegalMove {
        piece: PieceId,
        target: Cell,
        reason: IllegalMoveReason,
    },

    /// The requested destroy target is forbidden. No state was changed.
    #[error("illegal destroy target {piece}: {reason}")]
    IllegalTarget {
        piece: PieceId,
        reason: IllegalMoveReason,
    },

    /// The active player has no legal candidate in the current phase.
    #[error("{player} has no legal action in the {phase:?} phase")]
    Stalemate { player: Player, phase: Phase },

    /// The piece is not on the board (captured or never existed).
    #[error("{0} is not on the board")]
    PieceNotFound(PieceId),

    /// The game already has a winner.
    #[error("game is over, {winner} won")]
    GameOver { winner: Player },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Invalid construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("main grid must have at least one cell, got {rows}x{cols}")]
    EmptyMainGrid { rows: usize, cols: usize },
    #[error("each player needs at least one piece")]
    NoPieces,
    #[error("{0} pieces per player exceeds the limit of 127")]
    TooManyPieces(u8),
    #[error("reserve has {slots} slots but each player has {pieces} pieces")]
    ReserveMismatch { slots: usize, pieces: usize },
    #[error("main grid has {cells} cells, too few for {pieces} pieces")]
    MainGridTooSmall { cells: usize, pieces: usize },
}

/// Board corruption detected by `Board::validate`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{piece} appears at both {first} and {second}")]
    DuplicatePiece {
        piece: PieceId,
        first: Location,
        second: Location,
    },
    #[error("{piece} at {at} is outside the valid id range")]
    InvalidPiece { piece: PieceId, at: Location },
    #[error("board shape does not match the game configuration")]
    ShapeMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Zone;

    #[test]
    fn test_illegal_move_message() {
        let err = GameError::IllegalMove {
            piece: PieceId(3),
            target: Cell::new(1, 2),
            reason: IllegalMoveReason::Occupied,
        };

        assert_eq!(
            err.to_string(),
            "illegal move of Piece(3) to (1, 2): target cell is occupied"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: GameError = ConfigError::NoPieces.into();
        assert_eq!(err, GameError::Config(ConfigError::NoPieces));
        assert_eq!(err.to_string(), "each player needs at least one piece");
    }

    #[test]
    fn test_board_error_message() {
        let err = BoardError::DuplicatePiece {
            piece: PieceId(5),
            first: Location::new(Zone::Main, Cell::new(0, 0)),
            second: Location::new(Zone::ReserveA, Cell::new(2, 1)),
        };

        assert_eq!(
            err.to_string(),
            "Piece(5) appears at both Main(0, 0) and ReserveA(2, 1)"
        );
    }
}
