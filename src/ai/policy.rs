//! Move policies for the computer opponent.
//!
//! A policy looks at a board and turn state and picks one action for the
//! active player. It never mutates the board; the caller applies the
//! returned `AiDecision` through the engine.

use tracing::{trace, warn};

use crate::core::{AiDecision, GameError, GameRng, PieceId};
use crate::rules::{Oracle, Phase, TurnState};
use crate::zones::{Board, Cell};

/// Policy for choosing the active player's next action.
pub trait MovePolicy: Send + Sync {
    /// Choose an action for the active player.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Stalemate` if the player has no legal action.
    fn decide(&self, board: &Board, turn: TurnState, rng: &mut GameRng) -> Result<AiDecision, GameError>;
}

/// A legal action with its heuristic score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub piece: PieceId,
    /// Main grid origin for slides. `None` for drops and destroys.
    pub origin: Option<Cell>,
    pub target: Cell,
    pub score: u32,
}

/// Single-ply greedy policy.
///
/// - `Drop`: first unplaced reserve piece, uniformly random legal cell
/// - `Move`: slides that complete a run score 1, others 0; uniformly random
///   among the best
/// - `Destroy`: uniformly random opponent piece on the main grid
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Enumerate every scored candidate for the active player.
    #[must_use]
    pub fn candidates(&self, board: &Board, turn: TurnState) -> Vec<Candidate> {
        let oracle = Oracle::new(board);
        let player = turn.active_player();

        match turn.phase() {
            Phase::Drop => {
                let Some(piece) = board.first_unplaced(player) else {
                    return Vec::new();
                };
                oracle
                    .legal_moves(Phase::Drop, player, None)
                    .into_iter()
                    .map(|target| Candidate {
                        piece,
                        origin: None,
                        target,
                        score: 0,
                    })
                    .collect()
            }
            Phase::Move => {
                let mut out = Vec::new();
                for (origin, piece) in board.on_board(player) {
                    for target in board.main().neighbors(origin) {
                        if !oracle.is_legal_move(Phase::Move, player, target, Some(origin)) {
                            continue;
                        }
                        let score = u32::from(oracle.forms_run_of_three(target, player, Some(origin)));
                        trace!(%piece, %origin, %target, score, "scored slide");
                        out.push(Candidate {
                            piece,
                            origin: Some(origin),
                            target,
                            score,
                        });
                    }
                }
                out
            }
            Phase::Destroy => oracle
                .legal_moves(Phase::Destroy, player, None)
                .into_iter()
                .filter_map(|target| {
                    board.main().get(target).map(|piece| Candidate {
                        piece,
                        origin: None,
                        target,
                        score: 0,
                    })
                })
                .collect(),
        }
    }
}

/// Pick uniformly among the candidates sharing the highest score.
pub fn select_best<'a>(candidates: &'a [Candidate], rng: &mut GameRng) -> Option<&'a Candidate> {
    let best = candidates.iter().map(|c| c.score).max()?;
    let top: Vec<&Candidate> = candidates.iter().filter(|c| c.score == best).collect();
    rng.choose(&top).copied()
}

impl MovePolicy for GreedyPolicy {
    fn decide(&self, board: &Board, turn: TurnState, rng: &mut GameRng) -> Result<AiDecision, GameError> {
        let candidates = self.candidates(board, turn);

        let Some(choice) = select_best(&candidates, rng) else {
            warn!(player = %turn.active_player(), phase = ?turn.phase(), "no legal candidates");
            return Err(GameError::Stalemate {
                player: turn.active_player(),
                phase: turn.phase(),
            });
        };

        trace!(
            candidates = candidates.len(),
            piece = %choice.piece,
            target = %choice.target,
            score = choice.score,
            "policy decided"
        );

        Ok(AiDecision::new(turn.phase(), choice.piece, choice.target))
    }
}
