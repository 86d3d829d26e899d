//! Turn and phase state machine.
//!
//! ```text
//!            reserves empty
//!   Drop ───────────────────▶ Move ◀──────────┐
//!    ▲ │                       │ │            │ one piece removed,
//!    └─┘ otherwise             │ └─▶ Destroy ─┘ player alternates
//!   player alternates          │   run formed,
//!                              │   same player
//!                              └─ no run: player alternates
//! ```
//!
//! `TurnState` is the only owner of phase and active player; `advance` is
//! the only mutation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::player::Player;

/// Game phase. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players place reserve pieces onto the main grid.
    #[default]
    Drop,
    /// Players slide one piece to an adjacent empty cell.
    Move,
    /// The player who just completed a run removes an opponent piece.
    Destroy,
}

/// Display message selected by each transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Announcement {
    GameStart,
    DropPhase,
    MovePhase,
    DestroyPhase,
}

impl Announcement {
    /// Message keyed to a phase.
    #[must_use]
    pub const fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Drop => Announcement::DropPhase,
            Phase::Move => Announcement::MovePhase,
            Phase::Destroy => Announcement::DestroyPhase,
        }
    }

    /// Text shown to the players.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Announcement::GameStart => "Game Start!",
            Announcement::DropPhase => "Drop phase",
            Announcement::MovePhase => "Move phase",
            Announcement::DestroyPhase => "Seek and destroy!",
        }
    }
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Current phase and active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    phase: Phase,
    active_player: Player,
}

impl TurnState {
    /// Start of a game: `Drop` phase with the given player to act.
    #[must_use]
    pub const fn new(first_player: Player) -> Self {
        Self {
            phase: Phase::Drop,
            active_player: first_player,
        }
    }

    /// Resume from an arbitrary phase, e.g. when setting up a position.
    #[must_use]
    pub const fn resume(phase: Phase, active_player: Player) -> Self {
        Self {
            phase,
            active_player,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn active_player(&self) -> Player {
        self.active_player
    }

    /// Transition after a move or destroy has been applied to the board.
    ///
    /// - `completed_run`: the applied move formed a run of three
    /// - `reserves_empty`: both reserves are empty after the move
    ///
    /// Returns the announcement for the new phase.
    pub fn advance(&mut self, completed_run: bool, reserves_empty: bool) -> Announcement {
        let from = *self;

        let (next_phase, alternate) = match self.phase {
            // Drop runs are filtered by the oracle, so a run here is ignored.
            Phase::Drop if reserves_empty => (Phase::Move, true),
            Phase::Drop => (Phase::Drop, true),
            Phase::Move if completed_run => (Phase::Destroy, false),
            Phase::Move => (Phase::Move, true),
            Phase::Destroy => (Phase::Move, true),
        };

        self.phase = next_phase;
        if alternate {
            self.active_player = self.active_player.opponent();
        }

        debug!(
            from_phase = ?from.phase,
            from_player = %from.active_player,
            to_phase = ?self.phase,
            to_player = %self.active_player,
            "turn advanced"
        );

        Announcement::for_phase(self.phase)
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Player::One)
    }
}
