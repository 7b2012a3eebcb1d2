//! Scenario tests for the Go-like game.

use tor_games::board::{Board, Cell, Color, Pos, Topology};
use tor_games::go::{self, GoState, Territory, calculate_territory, end_game, play};

// =============================================================================
// Helper functions
// =============================================================================

/// Place stones directly, then hand the move to `to_move`.
fn setpos(black: &[(i32, i32)], white: &[(i32, i32)], to_move: Color) -> GoState {
    let mut board = Board::new(9, Topology::Bounded);
    for &(r, c) in black {
        board.set(Pos::new(r, c), Cell::Black);
    }
    for &(r, c) in white {
        board.set(Pos::new(r, c), Cell::White);
    }
    GoState {
        board,
        current_player: to_move,
        ..go::init_game()
    }
}

/// Play a sequence of moves, alternating from the current player.
fn play_all(state: &GoState, moves: &[(i32, i32)]) -> GoState {
    moves
        .iter()
        .fold(state.clone(), |s, &(r, c)| play(&s, Pos::new(r, c)))
}

// =============================================================================
// Basic play
// =============================================================================

#[test]
fn test_alternation_and_history() {
    let state = play_all(&go::init_game(), &[(2, 2), (6, 6), (2, 6)]);
    assert_eq!(state.current_player, Color::White);
    assert_eq!(
        state.history,
        vec![Pos::new(2, 2), Pos::new(6, 6), Pos::new(2, 6)]
    );
    assert_eq!(state.board.get(Pos::new(6, 6)), Some(Cell::White));
}

#[test]
fn test_illegal_play_is_noop() {
    let state = play_all(&go::init_game(), &[(2, 2)]);
    assert_eq!(play(&state, Pos::new(2, 2)), state);
    assert_eq!(play(&state, Pos::new(-1, 0)), state);
    assert_eq!(play(&state, Pos::new(0, 9)), state);
    assert!(!go::can_play(&state.board, Pos::new(2, 2)));
    assert!(go::can_play(&state.board, Pos::new(8, 8)));
}

// =============================================================================
// Liberties and capture
// =============================================================================

#[test]
fn test_surrounded_stone_is_removed() {
    let state = setpos(&[(3, 4), (5, 4), (4, 3)], &[(4, 4)], Color::Black);
    let next = play(&state, Pos::new(4, 5));
    assert_eq!(next.board.get(Pos::new(4, 4)), Some(Cell::Empty));
    assert_eq!(next.black_score, 1);
    assert_eq!(next.current_player, Color::White);
}

#[test]
fn test_pair_survives_until_last_liberty() {
    // White pair (4,4)-(4,5) has six liberties; black holds four of them.
    let state = setpos(
        &[(3, 4), (3, 5), (5, 4), (5, 5)],
        &[(4, 4), (4, 5)],
        Color::Black,
    );

    let one_left = play(&state, Pos::new(4, 3));
    assert_eq!(one_left.board.get(Pos::new(4, 4)), Some(Cell::White));
    assert_eq!(one_left.board.get(Pos::new(4, 5)), Some(Cell::White));
    assert_eq!(one_left.black_score, 0);

    let captured = play_all(&one_left, &[(0, 0), (4, 6)]);
    assert_eq!(captured.board.get(Pos::new(4, 4)), Some(Cell::Empty));
    assert_eq!(captured.board.get(Pos::new(4, 5)), Some(Cell::Empty));
    assert_eq!(captured.black_score, 2);
    assert_eq!(captured.white_score, 0);
}

#[test]
fn test_white_captures_score_for_white() {
    let state = setpos(&[(0, 0)], &[(0, 1)], Color::White);
    let next = play(&state, Pos::new(1, 0));
    assert_eq!(next.board.get(Pos::new(0, 0)), Some(Cell::Empty));
    assert_eq!(next.white_score, 1);
    assert_eq!(next.black_score, 0);
}

#[test]
fn test_two_groups_captured_at_once() {
    // Black at (0,1) fills the last liberty of both white corner stones.
    let state = setpos(&[(1, 0), (1, 2), (0, 3)], &[(0, 0), (0, 2)], Color::Black);
    let next = play(&state, Pos::new(0, 1));
    assert_eq!(next.black_score, 2);
    assert_eq!(next.board.counts(), (4, 0));
}

#[test]
fn test_self_capture_is_allowed() {
    let state = setpos(&[], &[(0, 1), (1, 0)], Color::Black);
    let next = play(&state, Pos::new(0, 0));
    assert_eq!(next.board.get(Pos::new(0, 0)), Some(Cell::Black));
    assert_eq!(next.history.len(), 1);
    assert_eq!((next.black_score, next.white_score), (0, 0));
}

#[test]
fn test_capture_takes_priority_over_self_atari() {
    // Black plays into a point with no empty neighbors but captures first.
    let state = setpos(&[(0, 2), (1, 1)], &[(0, 1), (1, 0)], Color::Black);
    let next = play(&state, Pos::new(0, 0));
    assert_eq!(next.board.get(Pos::new(0, 1)), Some(Cell::Empty));
    assert_eq!(next.board.get(Pos::new(1, 0)), Some(Cell::White));
    assert_eq!(next.black_score, 1);
}

// =============================================================================
// Territory and end of game
// =============================================================================

#[test]
fn test_territory_law() {
    // Black wall along column 2 encloses columns 0-1; a white stone sits in
    // the open area so the rest is shared.
    let black: Vec<(i32, i32)> = (0..9).map(|r| (r, 2)).collect();
    let state = setpos(&black, &[(4, 6)], Color::Black);
    let t = calculate_territory(&state.board);
    assert_eq!(t, Territory { black: 18, white: 0 });
}

#[test]
fn test_territory_region_surrounded_by_white() {
    let state = setpos(&[(8, 8)], &[(0, 1), (1, 0)], Color::Black);
    let t = calculate_territory(&state.board);
    assert_eq!(t.white, 1);
    assert_eq!(t.black, 0);
}

#[test]
fn test_end_game_adds_territory_to_captures() {
    let black: Vec<(i32, i32)> = (0..9).map(|r| (r, 2)).collect();
    let mut state = setpos(&black, &[(4, 6)], Color::Black);
    state.white_score = 20;
    let ended = end_game(&state);
    assert!(ended.game_over);
    assert_eq!(ended.black_score, 18);
    assert_eq!(ended.white_score, 20);
    assert_eq!(ended.winner, Some(Color::White));
}

#[test]
fn test_end_game_exact_tie() {
    let mut state = setpos(&[(0, 0)], &[(8, 8)], Color::Black);
    state.black_score = 3;
    state.white_score = 3;
    let ended = end_game(&state);
    assert_eq!(ended.winner, None);
    assert_eq!((ended.black_score, ended.white_score), (3, 3));
}

#[test]
fn test_no_play_after_end() {
    let ended = end_game(&play_all(&go::init_game(), &[(4, 4)]));
    assert_eq!(play(&ended, Pos::new(0, 0)), ended);
    assert_eq!(end_game(&ended), ended);
}
