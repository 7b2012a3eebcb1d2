//! Area-control game on a 10x10 board.
//!
//! Each turn a player takes up to two actions. An action either places a new
//! piece on an empty cell or moves an *isolated* piece (no same-color
//! orthogonal neighbor) one orthogonal step. After every action, opposing
//! pieces in the 3x3 window around the landing cell flip when their own 3x3
//! window holds between [`FLIP_MIN`] and [`FLIP_MAX`] of the mover's pieces.
//! The game ends when the board is full; the larger count wins.
//!
//! Every operation takes a state by reference and returns a fresh state.
//! Illegal actions return an unchanged copy of the input.
//!
//! On a toroidal board the one-step distance of a move is measured on the
//! raw coordinates the caller passes, while occupancy is looked up on the
//! wrapped cell. Moving from `(0, 0)` to `(0, -1)` lands on `(0, 9)`; asking
//! for `(0, 0)` to `(0, 9)` directly is not a one-step move.

use tracing::debug;

use crate::board::{Board, Cell, Color, Pos, Topology};
use crate::constants::{ACTIONS_PER_TURN, AREA_SIZE, FLIP_MAX, FLIP_MIN, ORTHOGONAL};

/// One action in the area-control game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Place(Pos),
    Move { from: Pos, to: Pos },
}

/// Snapshot of an area-control game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaState {
    pub board: Board,
    pub current_player: Color,
    /// Actions left this turn: 2 at turn start, never 0 between calls.
    pub actions_remaining: u8,
    /// Piece picked for movement, stored normalized.
    pub selected: Option<Pos>,
    pub game_over: bool,
    /// `None` while running or on a drawn game.
    pub winner: Option<Color>,
    pub black_count: usize,
    pub white_count: usize,
}

impl Default for AreaState {
    fn default() -> Self {
        init_game()
    }
}

/// Empty bounded board, Black to act.
pub fn init_game() -> AreaState {
    new_game(Topology::Bounded)
}

pub fn new_game(topology: Topology) -> AreaState {
    AreaState {
        board: Board::new(AREA_SIZE, topology),
        current_player: Color::Black,
        actions_remaining: ACTIONS_PER_TURN,
        selected: None,
        game_over: false,
        winner: None,
        black_count: 0,
        white_count: 0,
    }
}

// =============================================================================
// Legality
// =============================================================================

pub fn can_place(board: &Board, pos: Pos) -> bool {
    board.is_empty_at(pos)
}

pub fn can_move(board: &Board, from: Pos, to: Pos, player: Color) -> bool {
    from.is_orthogonal_step(to)
        && board.get(from).is_some_and(|c| c.is(player))
        && board.is_empty_at(to)
        && board.is_isolated(from, player)
}

pub fn can_select(state: &AreaState, pos: Pos) -> bool {
    !state.game_over
        && state
            .board
            .get(pos)
            .is_some_and(|c| c.is(state.current_player))
        && state.board.is_isolated(pos, state.current_player)
}

/// Landing cells reachable from `from`, as raw coordinates. On a toroidal
/// board these may lie outside `0..size`; pass them to [`move_piece`] as is.
pub fn valid_moves(board: &Board, from: Pos, player: Color) -> Vec<Pos> {
    ORTHOGONAL
        .iter()
        .filter_map(|&(dr, dc)| from.checked_offset(dr, dc))
        .filter(|&to| can_move(board, from, to, player))
        .collect()
}

/// Every legal action for the player to act: placements first, then moves.
pub fn legal_actions(state: &AreaState) -> Vec<Action> {
    if state.game_over || state.actions_remaining == 0 {
        return Vec::new();
    }
    let board = &state.board;
    let player = state.current_player;

    let mut actions: Vec<Action> = board
        .positions()
        .filter(|&pos| can_place(board, pos))
        .map(Action::Place)
        .collect();

    for from in board.positions() {
        if board.get(from).is_some_and(|c| c.is(player)) {
            for to in valid_moves(board, from, player) {
                actions.push(Action::Move { from, to });
            }
        }
    }
    actions
}

// =============================================================================
// Flip Resolution
// =============================================================================

/// Whether an opponent piece whose 3x3 window holds `count` mover pieces flips.
#[inline]
pub fn flips_with(count: usize) -> bool {
    (FLIP_MIN..=FLIP_MAX).contains(&count)
}

/// Flip the opposing pieces around a piece that just landed at `pos`.
///
/// Eligibility of every candidate is decided on the board as it stands before
/// any flip, so flips never cascade within one call. Returns the number of
/// pieces flipped.
pub fn resolve_flips(board: &mut Board, pos: Pos, player: Color) -> usize {
    let opponent = player.opponent();
    let flipped: Vec<Pos> = board
        .window(pos)
        .into_iter()
        .filter(|&p| board.get(p).is_some_and(|c| c.is(opponent)))
        .filter(|&p| flips_with(board.count_in(&board.window(p), player)))
        .collect();

    for &p in &flipped {
        board.set(p, player.into());
    }
    if !flipped.is_empty() {
        debug!(count = flipped.len(), at = %pos, %player, "flipped pieces");
    }
    flipped.len()
}

// =============================================================================
// Action Application
// =============================================================================

/// Place a piece for the player to act.
pub fn place(state: &AreaState, pos: Pos) -> AreaState {
    if !action_available(state) || !can_place(&state.board, pos) {
        debug!(%pos, "rejected placement");
        return state.clone();
    }
    let player = state.current_player;
    let mut board = state.board.clone();
    board.set(pos, player.into());
    resolve_flips(&mut board, pos, player);
    finish_action(state, board)
}

/// Move an isolated piece one orthogonal step.
pub fn move_piece(state: &AreaState, from: Pos, to: Pos) -> AreaState {
    let player = state.current_player;
    if !action_available(state) || !can_move(&state.board, from, to, player) {
        debug!(%from, %to, "rejected move");
        return state.clone();
    }
    let mut board = state.board.clone();
    board.set(from, Cell::Empty);
    board.set(to, player.into());
    resolve_flips(&mut board, to, player);
    finish_action(state, board)
}

/// Apply an action produced by the caller or the heuristic.
pub fn apply(state: &AreaState, action: &Action) -> AreaState {
    match *action {
        Action::Place(pos) => place(state, pos),
        Action::Move { from, to } => move_piece(state, from, to),
    }
}

/// Select a piece for movement, replacing any previous selection.
pub fn select(state: &AreaState, pos: Pos) -> AreaState {
    if !can_select(state, pos) {
        return state.clone();
    }
    AreaState {
        selected: state.board.normalize(pos),
        ..state.clone()
    }
}

pub fn deselect(state: &AreaState) -> AreaState {
    AreaState {
        selected: None,
        ..state.clone()
    }
}

/// Give up the rest of the turn. Only available after the first action.
pub fn end_turn(state: &AreaState) -> AreaState {
    if state.game_over || state.actions_remaining >= ACTIONS_PER_TURN {
        return state.clone();
    }
    AreaState {
        current_player: state.current_player.opponent(),
        actions_remaining: ACTIONS_PER_TURN,
        selected: None,
        ..state.clone()
    }
}

fn action_available(state: &AreaState) -> bool {
    !state.game_over && state.actions_remaining > 0
}

/// Recount, advance the turn, and check for a full board.
fn finish_action(state: &AreaState, board: Board) -> AreaState {
    let (black_count, white_count) = board.counts();
    let game_over = board.is_full();
    let winner = if game_over {
        Color::leader(black_count, white_count)
    } else {
        None
    };
    if game_over {
        debug!(black_count, white_count, ?winner, "board full");
    }

    let remaining = state.actions_remaining - 1;
    let (current_player, actions_remaining) = if remaining == 0 {
        (state.current_player.opponent(), ACTIONS_PER_TURN)
    } else {
        (state.current_player, remaining)
    };

    AreaState {
        board,
        current_player,
        actions_remaining,
        selected: None,
        game_over,
        winner,
        black_count,
        white_count,
    }
}
