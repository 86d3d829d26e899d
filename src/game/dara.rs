//! The Dara engine: board, turn state and AI behind one API.

use tracing::{debug, info, instrument};

use crate::ai::{GreedyPolicy, MovePolicy, PacingConfig};
use crate::core::{
    AiDecision, BoardError, GameConfig, GameError, GameRng, GameRngState, IllegalMoveReason, MoveOutcome, PieceId,
    Player,
};
use crate::rules::{Announcement, Oracle, Phase, TurnState};
use crate::zones::{Board, Cell, Location, Zone};

/// A player with fewer pieces than this can never complete a run.
const MIN_PIECES: usize = 3;

/// A running game.
///
/// Every mutation goes through `apply_move`, `apply_destroy` or
/// `apply_decision`. A rejected action leaves the game unchanged.
#[derive(Clone, Debug)]
pub struct DaraGame<P = GreedyPolicy> {
    config: GameConfig,
    board: Board,
    turn: TurnState,
    announcement: Announcement,
    winner: Option<Player>,
    rng: GameRng,
    policy: P,
    pacing: PacingConfig,
}

impl DaraGame<GreedyPolicy> {
    /// Start a new game with the greedy AI.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_policy(config, GreedyPolicy)
    }
}

impl<P: MovePolicy> DaraGame<P> {
    /// Start a new game with a custom AI policy.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the configuration is invalid.
    pub fn with_policy(config: GameConfig, policy: P) -> Result<Self, GameError> {
        config.validate()?;

        let board = Board::new(&config);
        let turn = TurnState::new(config.first_player);
        let rng = GameRng::new(config.seed);

        info!(
            rows = config.main_rows,
            cols = config.main_cols,
            pieces = config.pieces_per_player,
            seed = config.seed,
            "game started"
        );

        Ok(Self {
            config,
            board,
            turn,
            announcement: Announcement::GameStart,
            winner: None,
            rng,
            policy,
            pacing: PacingConfig::default(),
        })
    }

    /// Resume from an arbitrary position.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the board does not
    /// match it, or the board holds a duplicate or out-of-range piece.
    pub fn from_position(config: GameConfig, board: Board, turn: TurnState, policy: P) -> Result<Self, GameError> {
        config.validate()?;
        if !board.matches_config(&config) {
            return Err(BoardError::ShapeMismatch.into());
        }
        board.validate()?;

        let rng = GameRng::new(config.seed);
        let mut game = Self {
            config,
            board,
            turn,
            announcement: Announcement::for_phase(turn.phase()),
            winner: None,
            rng,
            policy,
            pacing: PacingConfig::default(),
        };
        game.winner = game.compute_winner();

        Ok(game)
    }

    /// Replace the host pacing values.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Restore the AI random source, e.g. to replay a session.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }

    // === Queries ===

    #[must_use]
    pub fn current_phase(&self) -> Phase {
        self.turn.phase()
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.turn.active_player()
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Message selected by the most recent transition.
    #[must_use]
    pub fn announcement(&self) -> Announcement {
        self.announcement
    }

    /// The winner, once a player is down to fewer than three pieces.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Borrow the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the board. Later moves do not affect it.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Capture the AI random source.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Find a piece.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PieceNotFound` if the piece was captured or never
    /// existed.
    pub fn locate(&self, piece: PieceId) -> Result<Location, GameError> {
        self.board.locate(piece).ok_or(GameError::PieceNotFound(piece))
    }

    /// Main grid cells a piece could act on in the current phase.
    ///
    /// - `Drop`: legal drop cells, if the piece is still in its reserve
    /// - `Move`: legal slides, if the piece is on the main grid
    /// - `Destroy`: opponent-occupied cells, if the piece belongs to the
    ///   player who is destroying
    ///
    /// The result is empty when the piece cannot act, including after the
    /// game has ended.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PieceNotFound` if the piece is not on the board.
    pub fn legal_targets(&self, piece: PieceId) -> Result<Vec<Cell>, GameError> {
        let location = self.locate(piece)?;
        let owner = self.board.owner_of(piece).ok_or(GameError::PieceNotFound(piece))?;

        if self.winner.is_some() {
            return Ok(Vec::new());
        }

        let oracle = Oracle::new(&self.board);
        let phase = self.turn.phase();

        let targets = match phase {
            Phase::Drop if location.zone == Zone::reserve_of(owner) => oracle.legal_moves(phase, owner, None),
            Phase::Move if location.zone == Zone::Main => oracle.legal_moves(phase, owner, Some(location.cell)),
            Phase::Destroy if owner == self.turn.active_player() => oracle.legal_moves(phase, owner, None),
            _ => Vec::new(),
        };

        Ok(targets)
    }

    // === Actions ===

    /// Drop or slide a piece onto a main grid cell.
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` if the game has a winner
    /// - `GameError::IllegalMove` if the piece cannot be lifted or the
    ///   target is forbidden; the game is unchanged
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, piece: PieceId, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        self.ensure_running()?;

        let target = Cell::new(row, col);
        let phase = self.turn.phase();
        let player = self.turn.active_player();
        let oracle = Oracle::new(&self.board);

        let from = oracle
            .check_lift(phase, player, piece)
            .map_err(|reason| illegal_move(piece, target, reason))?;
        let origin = (from.zone == Zone::Main).then_some(from.cell);

        oracle
            .check_move(phase, player, target, origin)
            .map_err(|reason| illegal_move(piece, target, reason))?;

        // Drop runs are filtered above, so only slides can complete one.
        let completed_run = phase == Phase::Move && oracle.forms_run_of_three(target, player, origin);

        self.board.move_piece(from, Location::new(Zone::Main, target));
        debug!(%piece, %from, %target, completed_run, "piece moved");

        let announcement = self.turn.advance(completed_run, self.board.all_reserves_empty());
        Ok(self.finish_turn(announcement, completed_run))
    }

    /// Remove an opponent piece after a completed run.
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` if the game has a winner
    /// - `GameError::IllegalTarget` outside the `Destroy` phase, or if the
    ///   piece is not an opponent piece on the main grid
    #[instrument(skip(self))]
    pub fn apply_destroy(&mut self, piece: PieceId) -> Result<MoveOutcome, GameError> {
        self.ensure_running()?;

        let phase = self.turn.phase();
        if phase != Phase::Destroy {
            return Err(illegal_target(piece, IllegalMoveReason::WrongPhase(phase)));
        }

        let location = self
            .board
            .locate(piece)
            .ok_or_else(|| illegal_target(piece, IllegalMoveReason::UnknownPiece))?;

        let player = self.turn.active_player();
        let is_target = location.zone == Zone::Main
            && Oracle::new(&self.board).is_legal_move(phase, player, location.cell, None);
        if !is_target {
            return Err(illegal_target(piece, IllegalMoveReason::NotOpponentPiece));
        }

        self.board.remove_piece(piece);
        info!(%piece, at = %location, by = %player, "piece destroyed");

        let announcement = self.turn.advance(false, self.board.all_reserves_empty());
        Ok(self.finish_turn(announcement, false))
    }

    /// Apply a decision produced by `request_ai_move`.
    ///
    /// # Errors
    ///
    /// Same as `apply_move` or `apply_destroy`. A decision made for another
    /// phase is rejected as illegal.
    pub fn apply_decision(&mut self, decision: AiDecision) -> Result<MoveOutcome, GameError> {
        let phase = self.turn.phase();
        if decision.phase != phase {
            self.ensure_running()?;
            let reason = IllegalMoveReason::WrongPhase(phase);
            return Err(match decision.phase {
                Phase::Destroy => illegal_target(decision.piece, reason),
                _ => illegal_move(decision.piece, decision.target, reason),
            });
        }

        match phase {
            Phase::Destroy => self.apply_destroy(decision.piece),
            Phase::Drop | Phase::Move => self.apply_move(decision.piece, decision.target.row, decision.target.col),
        }
    }

    /// Ask the AI for the active player's next action.
    ///
    /// Only the random source advances; the board and turn are untouched.
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` if the game has a winner
    /// - `GameError::Stalemate` if the active player has no legal action
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Result<AiDecision, GameError> {
        self.ensure_running()?;
        self.policy.decide(&self.board, self.turn, &mut self.rng)
    }

    // === Internals ===

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.winner {
            Some(winner) => Err(GameError::GameOver { winner }),
            None => Ok(()),
        }
    }

    fn compute_winner(&self) -> Option<Player> {
        if usize::from(self.board.pieces_per_player()) < MIN_PIECES {
            return None;
        }

        Player::ALL
            .iter()
            .find(|&&p| self.board.piece_count(p) < MIN_PIECES)
            .map(|p| p.opponent())
    }

    fn finish_turn(&mut self, announcement: Announcement, capture_available: bool) -> MoveOutcome {
        debug_assert!(self.board.validate().is_ok(), "board corrupted:\n{}", self.board);

        self.announcement = announcement;
        self.winner = self.compute_winner();
        if let Some(winner) = self.winner {
            info!(%winner, "game over");
        }

        MoveOutcome {
            phase: self.turn.phase(),
            active_player: self.turn.active_player(),
            capture_available,
            announcement,
            winner: self.winner,
        }
    }
}

fn illegal_move(piece: PieceId, target: Cell, reason: IllegalMoveReason) -> GameError {
    debug!(%piece, %target, %reason, "move rejected");
    GameError::IllegalMove { piece, target, reason }
}

fn illegal_target(piece: PieceId, reason: IllegalMoveReason) -> GameError {
    debug!(%piece, %reason, "destroy rejected");
    GameError::IllegalTarget { piece, reason }
}

/// Builder for creating a `DaraGame`.
pub struct DaraGameBuilder<P = GreedyPolicy> {
    config: GameConfig,
    pacing: PacingConfig,
    policy: P,
}

impl Default for DaraGameBuilder<GreedyPolicy> {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            pacing: PacingConfig::default(),
            policy: GreedyPolicy,
        }
    }
}

impl DaraGameBuilder<GreedyPolicy> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MovePolicy> DaraGameBuilder<P> {
    pub fn main_size(mut self, rows: usize, cols: usize) -> Self {
        self.config = self.config.with_main_size(rows, cols);
        self
    }

    pub fn reserve_size(mut self, rows: usize, cols: usize) -> Self {
        self.config = self.config.with_reserve_size(rows, cols);
        self
    }

    pub fn pieces_per_player(mut self, pieces: u8) -> Self {
        self.config = self.config.with_pieces_per_player(pieces);
        self
    }

    pub fn first_player(mut self, player: Player) -> Self {
        self.config = self.config.with_first_player(player);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Swap in a different AI policy.
    pub fn policy<Q: MovePolicy>(self, policy: Q) -> DaraGameBuilder<Q> {
        DaraGameBuilder {
            config: self.config,
            pacing: self.pacing,
            policy,
        }
    }

    /// Build the game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the configuration is invalid.
    pub fn build(self) -> Result<DaraGame<P>, GameError> {
        Ok(DaraGame::with_policy(self.config, self.policy)?.with_pacing(self.pacing))
    }
}
