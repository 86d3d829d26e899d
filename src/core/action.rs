//! Decisions and outcomes exchanged with the presentation layer.
//!
//! - `AiDecision`: what the move generator wants to do. Read-only; the host
//!   applies it through the engine.
//! - `MoveOutcome`: the turn record after an applied move or destroy.

use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use super::player::Player;
use crate::rules::{Announcement, Phase};
use crate::zones::Cell;

/// A move chosen by the AI.
///
/// In `Drop` and `Move` phases `target` is the destination on the main grid.
/// In `Destroy` phase `target` is the cell of the piece to remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiDecision {
    /// Phase the decision was made for.
    pub phase: Phase,

    /// The piece to drop, slide, or destroy.
    pub piece: PieceId,

    /// Main grid cell the action targets.
    pub target: Cell,
}

impl AiDecision {
    /// Create a new decision.
    #[must_use]
    pub fn new(phase: Phase, piece: PieceId, target: Cell) -> Self {
        Self {
            phase,
            piece,
            target,
        }
    }
}

/// Result of a successfully applied move or destroy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Phase after the transition.
    pub phase: Phase,

    /// Player to act next.
    pub active_player: Player,

    /// The move completed a run and the mover must now destroy a piece.
    pub capture_available: bool,

    /// Message for the new phase.
    pub announcement: Announcement,

    /// Set when the move ended the game.
    pub winner: Option<Player>,
}
