//! Scripted scenarios exercising the engine through its public API.
//!
//! Each test sets up a position by playing or by `from_position`, then
//! checks the oracle, the turn state machine and the board together.

use dara_engine::core::{GameConfig, GameError, IllegalMoveReason, PieceId, Player};
use dara_engine::game::DaraGame;
use dara_engine::rules::{Announcement, Oracle, Phase, TurnState};
use dara_engine::zones::{Board, Cell, Location, Zone};
use dara_engine::GreedyPolicy;

fn position(p1: &[(usize, usize)], p2: &[(usize, usize)], turn: TurnState) -> DaraGame {
    let config = GameConfig::default();
    let mut board = Board::empty(&config);
    for (i, &(row, col)) in p1.iter().enumerate() {
        board.place(PieceId(1 + i as u8), Location::main(row, col));
    }
    for (i, &(row, col)) in p2.iter().enumerate() {
        board.place(PieceId(13 + i as u8), Location::main(row, col));
    }
    DaraGame::from_position(config, board, turn, GreedyPolicy).unwrap()
}

/// First drops: occupied cells drop out of the legal set, nothing else does.
#[test]
fn test_opening_drops() {
    let mut game = DaraGame::new(GameConfig::default()).unwrap();

    game.apply_move(PieceId(1), 2, 2).unwrap();
    let oracle_moves = Oracle::new(game.board()).legal_moves(Phase::Drop, Player::One, None);
    assert_eq!(oracle_moves.len(), 29);
    assert!(!oracle_moves.contains(&Cell::new(2, 2)));

    game.apply_move(PieceId(13), 0, 0).unwrap();
    let snapshot = game.board_snapshot();
    assert_eq!(snapshot.get(Zone::Main, 2, 2), Some(PieceId(1)));
    assert_eq!(snapshot.get(Zone::Main, 0, 0), Some(PieceId(13)));

    let moves = Oracle::new(&snapshot).legal_moves(Phase::Drop, Player::One, None);
    assert_eq!(moves.len(), 28);
    for cell in snapshot.main().cells() {
        let expected = cell != Cell::new(2, 2) && cell != Cell::new(0, 0);
        assert_eq!(moves.contains(&cell), expected, "cell {cell}");
    }

    // The engine agrees with the raw oracle.
    assert_eq!(game.legal_targets(PieceId(2)).unwrap(), moves);
    assert_eq!(game.active_player(), Player::One);
}

/// A drop that would complete a run is never offered and is rejected.
#[test]
fn test_drop_run_filtered() {
    let mut game = DaraGame::new(GameConfig::default()).unwrap();
    game.apply_move(PieceId(1), 0, 0).unwrap();
    game.apply_move(PieceId(24), 4, 5).unwrap();
    game.apply_move(PieceId(2), 0, 1).unwrap();
    game.apply_move(PieceId(23), 4, 4).unwrap();

    let oracle_board = game.board_snapshot();
    let oracle = Oracle::new(&oracle_board);
    assert!(oracle.forms_run_of_three(Cell::new(0, 2), Player::One, None));
    assert!(!oracle.legal_moves(Phase::Drop, Player::One, None).contains(&Cell::new(0, 2)));

    let err = game.apply_move(PieceId(3), 0, 2).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalMove {
            piece: PieceId(3),
            target: Cell::new(0, 2),
            reason: IllegalMoveReason::DropFormsRun,
        }
    );
    assert_eq!(game.board_snapshot(), oracle_board);
    assert_eq!(game.active_player(), Player::One);
}

/// Sliding into a line of three keeps the turn and opens a capture.
#[test]
fn test_slide_into_run_then_destroy() {
    let mut game = position(
        &[(1, 1), (1, 3), (1, 4)],
        &[(3, 0), (3, 2), (4, 4), (4, 5)],
        TurnState::resume(Phase::Move, Player::One),
    );

    let outcome = game.apply_move(PieceId(1), 1, 2).unwrap();
    assert_eq!(outcome.phase, Phase::Destroy);
    assert_eq!(outcome.active_player, Player::One);
    assert!(outcome.capture_available);
    assert_eq!(outcome.announcement, Announcement::DestroyPhase);

    let outcome = game.apply_destroy(PieceId(16)).unwrap();
    assert_eq!(outcome.phase, Phase::Move);
    assert_eq!(outcome.active_player, Player::Two);
    assert_eq!(outcome.announcement.text(), "Move phase");
    assert_eq!(game.board().piece_count(Player::Two), 3);
}

/// A slide next to the piece's own old cell does not count that cell.
#[test]
fn test_slide_excludes_origin() {
    let mut game = position(
        &[(1, 2), (1, 4), (3, 0)],
        &[(4, 1), (4, 3), (4, 5)],
        TurnState::resume(Phase::Move, Player::One),
    );

    let outcome = game.apply_move(PieceId(1), 1, 3).unwrap();

    assert_eq!(outcome.phase, Phase::Move);
    assert_eq!(outcome.active_player, Player::Two);
    assert!(!outcome.capture_available);
}

/// Runs count in both orientations and need three pieces.
#[test]
fn test_run_detection_orientations() {
    let config = GameConfig::default();
    let mut board = Board::empty(&config);
    board.place(PieceId(1), Location::main(2, 0));
    board.place(PieceId(2), Location::main(2, 1));
    board.place(PieceId(3), Location::main(0, 4));
    board.place(PieceId(4), Location::main(1, 4));
    board.place(PieceId(5), Location::main(4, 0));
    board.place(PieceId(6), Location::main(4, 2));
    board.place(PieceId(13), Location::main(4, 1));

    let oracle = Oracle::new(&board);

    assert!(oracle.forms_run_of_three(Cell::new(2, 2), Player::One, None));
    assert!(oracle.forms_run_of_three(Cell::new(2, 4), Player::One, None));
    // Two in a line is not a run.
    assert!(!oracle.forms_run_of_three(Cell::new(1, 0), Player::One, None));
    assert!(!oracle.forms_run_of_three(Cell::new(2, 2), Player::Two, None));
    // The opponent piece at (4, 1) stops the scan leftwards from (4, 3).
    assert!(!oracle.forms_run_of_three(Cell::new(4, 3), Player::One, None));
}

/// Snapshots are stable without a mutation and independent afterwards.
#[test]
fn test_snapshot_idempotent() {
    let mut game = DaraGame::new(GameConfig::default()).unwrap();
    game.apply_move(PieceId(1), 3, 3).unwrap();

    let first = game.board_snapshot();
    let second = game.board_snapshot();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());

    game.apply_move(PieceId(24), 0, 0).unwrap();
    assert_ne!(game.board_snapshot(), first);
    assert_eq!(first.get(Zone::Main, 0, 0), None);
}

/// The drop phase ends once both reserves are empty.
#[test]
fn test_drop_phase_ends_when_reserves_empty() {
    let config = GameConfig::default()
        .with_main_size(6, 6)
        .with_reserve_size(3, 2)
        .with_pieces_per_player(6);
    let mut game = DaraGame::new(config).unwrap();

    for turn in 0..12 {
        assert_eq!(game.current_phase(), Phase::Drop, "turn {turn}");
        let decision = game.request_ai_move().unwrap();
        let outcome = game.apply_decision(decision).unwrap();
        if turn < 11 {
            assert_eq!(outcome.announcement, Announcement::DropPhase);
        }
    }

    assert_eq!(game.current_phase(), Phase::Move);
    assert_eq!(game.announcement().text(), "Move phase");
    assert!(game.board().all_reserves_empty());
    assert_eq!(game.board().main().occupied().count(), 12);
    // Twelve turns alternate back to the first player.
    assert_eq!(game.active_player(), Player::One);
}

/// Locating a captured piece is an explicit error.
#[test]
fn test_locate_captured_piece() {
    let mut game = position(
        &[(1, 1), (1, 2), (1, 3)],
        &[(3, 0), (3, 2), (4, 4), (4, 5)],
        TurnState::resume(Phase::Destroy, Player::One),
    );

    assert_eq!(game.locate(PieceId(13)).unwrap(), Location::main(3, 0));
    game.apply_destroy(PieceId(13)).unwrap();

    assert_eq!(game.locate(PieceId(13)), Err(GameError::PieceNotFound(PieceId(13))));
    assert_eq!(game.legal_targets(PieceId(13)), Err(GameError::PieceNotFound(PieceId(13))));
}

/// Lifting rules follow the phase and the active player.
#[test]
fn test_lift_rules() {
    let game = DaraGame::new(GameConfig::default()).unwrap();
    let oracle = Oracle::new(game.board());

    assert!(oracle.can_lift(Phase::Drop, Player::One, PieceId(5)));
    assert!(!oracle.can_lift(Phase::Drop, Player::One, PieceId(20)));
    assert!(!oracle.can_lift(Phase::Move, Player::One, PieceId(5)));
    assert!(!oracle.can_lift(Phase::Destroy, Player::One, PieceId(5)));
}
