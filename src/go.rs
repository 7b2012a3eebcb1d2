//! Go-like capture game on a bounded 9x9 board.
//!
//! Players alternate placing one stone on any empty point. After each
//! placement, opposing groups touching the new stone that are left without
//! liberties are removed and credited to the mover. Playing into a point
//! that leaves the mover's own group without liberties is allowed; that group
//! simply stays on the board.
//!
//! The game ends only when the caller invokes [`end_game`], which adds
//! territory (empty regions bordered by a single color) to the capture
//! scores and fixes the winner.

use std::collections::VecDeque;

use tracing::debug;

use crate::board::{Board, Cell, Color, Pos, Topology};
use crate::constants::GO_SIZE;

/// Snapshot of a Go-like game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoState {
    pub board: Board,
    pub current_player: Color,
    /// Captured stones, plus territory once the game has ended.
    pub black_score: usize,
    pub white_score: usize,
    /// Every placement, in order.
    pub history: Vec<Pos>,
    pub game_over: bool,
    /// `None` while running or on a drawn game.
    pub winner: Option<Color>,
}

impl Default for GoState {
    fn default() -> Self {
        init_game()
    }
}

/// Empty board, Black to play.
pub fn init_game() -> GoState {
    GoState {
        board: Board::new(GO_SIZE, Topology::Bounded),
        current_player: Color::Black,
        black_score: 0,
        white_score: 0,
        history: Vec::new(),
        game_over: false,
        winner: None,
    }
}

/// Territory totals from [`calculate_territory`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Territory {
    pub black: usize,
    pub white: usize,
}

pub fn can_play(board: &Board, pos: Pos) -> bool {
    board.is_empty_at(pos)
}

/// Remove every opposing group adjacent to `pos` that has no liberty left.
///
/// Neighbors are examined one at a time; a group already removed through an
/// earlier neighbor is not counted again. Returns the sizes of the removed
/// groups.
pub fn resolve_captures(board: &mut Board, pos: Pos, player: Color) -> Vec<usize> {
    let opponent = player.opponent();
    let mut removed = Vec::new();

    for n in board.neighbors(pos) {
        if !board.get(n).is_some_and(|c| c.is(opponent)) {
            continue;
        }
        let group = board.collect_group(n);
        if board.has_liberties(&group) {
            continue;
        }
        for &stone in &group {
            board.set(stone, Cell::Empty);
        }
        removed.push(group.len());
    }
    removed
}

/// Place a stone for the player to move.
pub fn play(state: &GoState, pos: Pos) -> GoState {
    if state.game_over || !can_play(&state.board, pos) {
        debug!(%pos, "rejected play");
        return state.clone();
    }
    let player = state.current_player;
    let mut board = state.board.clone();
    board.set(pos, player.into());

    let captured: usize = resolve_captures(&mut board, pos, player).iter().sum();
    if captured > 0 {
        debug!(captured, at = %pos, %player, "captured stones");
    }

    let mut history = state.history.clone();
    history.push(pos);

    let (black_score, white_score) = match player {
        Color::Black => (state.black_score + captured, state.white_score),
        Color::White => (state.black_score, state.white_score + captured),
    };

    GoState {
        board,
        current_player: player.opponent(),
        black_score,
        white_score,
        history,
        game_over: false,
        winner: None,
    }
}

/// Count empty points enclosed by a single color.
///
/// Each maximal empty region is flood-filled; it scores for a color only if
/// every stone bordering the whole region is that color. Regions touching
/// both colors, or no stones at all, score for nobody.
pub fn calculate_territory(board: &Board) -> Territory {
    let mut visited = vec![false; board.size() * board.size()];
    let mut territory = Territory::default();

    for start in board.positions() {
        let Some(i) = board.index(start) else { continue };
        if visited[i] || !board.is_empty_at(start) {
            continue;
        }

        let mut region = 0usize;
        let mut touches_black = false;
        let mut touches_white = false;
        let mut queue = VecDeque::from([start]);
        visited[i] = true;

        while let Some(pt) = queue.pop_front() {
            region += 1;
            for n in board.neighbors(pt) {
                match board.get(n) {
                    Some(Cell::Black) => touches_black = true,
                    Some(Cell::White) => touches_white = true,
                    Some(Cell::Empty) => {
                        if let Some(j) = board.index(n) {
                            if !visited[j] {
                                visited[j] = true;
                                queue.push_back(n);
                            }
                        }
                    }
                    None => {}
                }
            }
        }

        match (touches_black, touches_white) {
            (true, false) => territory.black += region,
            (false, true) => territory.white += region,
            _ => {}
        }
    }
    territory
}

/// Finish the game: add territory to capture scores and fix the winner.
pub fn end_game(state: &GoState) -> GoState {
    if state.game_over {
        return state.clone();
    }
    let territory = calculate_territory(&state.board);
    let black_score = state.black_score + territory.black;
    let white_score = state.white_score + territory.white;
    let winner = Color::leader(black_score, white_score);
    debug!(black_score, white_score, ?winner, "game ended");

    GoState {
        black_score,
        white_score,
        game_over: true,
        winner,
        ..state.clone()
    }
}
