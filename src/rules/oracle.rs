//! Rule oracle: move legality and run detection.
//!
//! The oracle borrows a `Board` immutably, so every query is pure. A moving
//! piece's origin is excluded from run detection by treating that cell as
//! empty during the scan; the board itself is never touched.

use crate::core::error::IllegalMoveReason;
use crate::core::piece::PieceId;
use crate::core::player::Player;
use crate::zones::{Board, Cell, Direction, Location, Zone};

use super::turn::Phase;

/// Same-owner neighbour counts through a cell, excluding the cell itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunLengths {
    /// Contiguous pieces to the left plus to the right.
    pub horizontal: usize,
    /// Contiguous pieces above plus below.
    pub vertical: usize,
}

impl RunLengths {
    /// The cell plus at least two colinear neighbours make a run of three.
    #[must_use]
    pub fn forms_run(self) -> bool {
        self.horizontal > 1 || self.vertical > 1
    }
}

/// Legality queries over a board snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Oracle<'a> {
    board: &'a Board,
}

impl<'a> Oracle<'a> {
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Owner of a main grid cell, with `exclude` treated as empty.
    fn owner_at(&self, cell: Cell, exclude: Option<Cell>) -> Option<Player> {
        if exclude == Some(cell) {
            return None;
        }
        self.board.owner_at(cell)
    }

    /// Count contiguous `player` pieces from `origin` in one direction.
    fn chain_length(&self, player: Player, origin: Cell, direction: Direction, exclude: Option<Cell>) -> usize {
        let grid = self.board.main();
        let mut count = 0;
        let mut current = origin;

        while let Some(next) = grid.step(current, direction) {
            if self.owner_at(next, exclude) != Some(player) {
                break;
            }
            count += 1;
            current = next;
        }

        count
    }

    /// Directional same-owner counts through `target`.
    #[must_use]
    pub fn run_lengths(&self, target: Cell, player: Player, exclude: Option<Cell>) -> RunLengths {
        let len = |dir| self.chain_length(player, target, dir, exclude);

        RunLengths {
            horizontal: len(Direction::Left) + len(Direction::Right),
            vertical: len(Direction::Up) + len(Direction::Down),
        }
    }

    /// Would a `player` piece at `target` complete a run of three or more?
    ///
    /// `exclude` is treated as empty, so a sliding piece does not count its
    /// own prior position.
    #[must_use]
    pub fn forms_run_of_three(&self, target: Cell, player: Player, exclude: Option<Cell>) -> bool {
        self.run_lengths(target, player, exclude).forms_run()
    }

    /// Check a candidate move, reporting why it is illegal.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks.
    pub fn check_move(
        &self,
        phase: Phase,
        player: Player,
        target: Cell,
        origin: Option<Cell>,
    ) -> Result<(), IllegalMoveReason> {
        let grid = self.board.main();
        if !grid.contains(target) {
            return Err(IllegalMoveReason::OutOfBounds);
        }
        let occupied = grid.get(target).is_some();

        match phase {
            Phase::Drop => {
                if occupied {
                    Err(IllegalMoveReason::Occupied)
                } else if self.forms_run_of_three(target, player, None) {
                    Err(IllegalMoveReason::DropFormsRun)
                } else {
                    Ok(())
                }
            }
            Phase::Move => {
                if occupied {
                    Err(IllegalMoveReason::Occupied)
                } else if !origin.is_some_and(|o| o.is_adjacent(target)) {
                    Err(IllegalMoveReason::NotAdjacent)
                } else {
                    Ok(())
                }
            }
            Phase::Destroy => {
                if self.board.owner_at(target) == Some(player.opponent()) {
                    Ok(())
                } else {
                    Err(IllegalMoveReason::NotOpponentPiece)
                }
            }
        }
    }

    /// Is a candidate move legal in the given phase?
    ///
    /// `origin` is required in `Move` phase and ignored otherwise.
    #[must_use]
    pub fn is_legal_move(&self, phase: Phase, player: Player, target: Cell, origin: Option<Cell>) -> bool {
        self.check_move(phase, player, target, origin).is_ok()
    }

    /// All legal target cells on the main grid, row-major.
    #[must_use]
    pub fn legal_moves(&self, phase: Phase, player: Player, origin: Option<Cell>) -> Vec<Cell> {
        self.board
            .main()
            .cells()
            .filter(|&cell| self.is_legal_move(phase, player, cell, origin))
            .collect()
    }

    /// Check whether `active` may pick up `piece`, returning where it is.
    ///
    /// - `Drop`: only the active player's reserve pieces
    /// - `Move`: only the active player's pieces on the main grid
    /// - `Destroy`: nothing is lifted
    ///
    /// # Errors
    ///
    /// Returns why the piece cannot be lifted.
    pub fn check_lift(&self, phase: Phase, active: Player, piece: PieceId) -> Result<Location, IllegalMoveReason> {
        if phase == Phase::Destroy {
            return Err(IllegalMoveReason::WrongPhase(phase));
        }

        let location = self.board.locate(piece).ok_or(IllegalMoveReason::UnknownPiece)?;

        if self.board.owner_of(piece) != Some(active) {
            return Err(IllegalMoveReason::NotActivePlayer);
        }

        let expected_zone = match phase {
            Phase::Drop => Zone::reserve_of(active),
            _ => Zone::Main,
        };

        if location.zone == expected_zone {
            Ok(location)
        } else {
            Err(IllegalMoveReason::NotLiftable)
        }
    }

    /// Can `active` pick up `piece` in this phase?
    #[must_use]
    pub fn can_lift(&self, phase: Phase, active: Player, piece: PieceId) -> bool {
        self.check_lift(phase, active, piece).is_ok()
    }
}
