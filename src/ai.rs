//! One-ply greedy move selection for the computer opponent.
//!
//! Each candidate action is simulated on a cloned board and scored by a cheap
//! evaluation; the highest score wins. A small random jitter is added to each
//! score so that equal candidates are chosen differently from game to game.
//! The jitter comes from a caller-supplied [`RandomSource`], so a seeded
//! `fastrand::Rng` or a [`FixedRandom`] makes the choice reproducible.
//!
//! Selectors never touch the state they are given; the caller applies the
//! result through the regular appliers.

use tracing::trace;

use crate::area::{self, Action, AreaState};
use crate::board::{Board, Cell, Color, Pos};
use crate::constants::{
    AREA_CENTER_REACH, AREA_JITTER, AREA_MOVE_BASE, AREA_MOVE_FLIP_WEIGHT,
    AREA_PLACE_CENTER_WEIGHT, AREA_PLACE_CONTACT_WEIGHT, AREA_PLACE_FLIP_WEIGHT, GO_CAPTURE_WEIGHT,
    GO_CENTER_REACH, GO_CENTER_WEIGHT, GO_GROUP_CAPTURE_WEIGHT, GO_JITTER,
    GO_SELF_CAPTURE_PENALTY,
};
use crate::go::{self, GoState};

/// Source of uniform samples for tie-breaking jitter.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in `[0, upper)`.
    fn jitter(&mut self, upper: f64) -> f64 {
        self.next_f64() * upper
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// Always returns the same sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

// =============================================================================
// Area-Control
// =============================================================================

/// Pick the best action for the player to act, or `None` if there is none.
///
/// Candidates are all placements followed by all moves; on equal scores the
/// earlier candidate is kept.
pub fn best_action<R: RandomSource>(state: &AreaState, rng: &mut R) -> Option<Action> {
    let mut best: Option<(Action, f64)> = None;

    for action in area::legal_actions(state) {
        let jitter = rng.jitter(AREA_JITTER);
        let score = area_action_score(state, &action) + jitter;
        trace!(?action, score, "area candidate");
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((action, score));
        }
    }
    best.map(|(action, _)| action)
}

/// Deterministic part of an area-control action's score.
///
/// Placement: `20 * flips + 5 * opponents left in the 3x3 window
/// + 2 * (9 - distance to center)`. Move: `25 * flips + 10`.
pub fn area_action_score(state: &AreaState, action: &Action) -> f64 {
    let player = state.current_player;
    let mut board = state.board.clone();

    match *action {
        Action::Place(pos) => {
            board.set(pos, player.into());
            let flips = area::resolve_flips(&mut board, pos, player);
            let contact = board.count_in(&board.window(pos), player.opponent());
            let center = board
                .normalize(pos)
                .map_or(AREA_CENTER_REACH, |p| p.center_distance(board.size()));
            AREA_PLACE_FLIP_WEIGHT * flips as f64
                + AREA_PLACE_CONTACT_WEIGHT * contact as f64
                + AREA_PLACE_CENTER_WEIGHT * (AREA_CENTER_REACH - center)
        }
        Action::Move { from, to } => {
            board.set(from, Cell::Empty);
            board.set(to, player.into());
            let flips = area::resolve_flips(&mut board, to, player);
            AREA_MOVE_FLIP_WEIGHT * flips as f64 + AREA_MOVE_BASE
        }
    }
}

// =============================================================================
// Go-Like
// =============================================================================

/// Pick the best placement for the player to move, or `None` if the board is
/// full or the game has ended.
pub fn best_move<R: RandomSource>(state: &GoState, rng: &mut R) -> Option<Pos> {
    let board = &state.board;
    if state.game_over || board.is_full() {
        return None;
    }
    let mut best: Option<(Pos, f64)> = None;

    for pos in board.positions().filter(|&p| go::can_play(board, p)) {
        let jitter = rng.jitter(GO_JITTER);
        let score = go_move_score(board, pos, state.current_player) + jitter;
        trace!(%pos, score, "go candidate");
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Deterministic part of a Go-like placement's score.
///
/// `10 * captured`, then `-100` if the mover's group is left without
/// liberties or `+ liberty contacts` otherwise, then `15 * size` for every
/// captured group, then `0.5 * (8 - distance to center)`. Captured stones are
/// credited by both the first and third terms.
pub fn go_move_score(board: &Board, pos: Pos, player: Color) -> f64 {
    let mut board = board.clone();
    board.set(pos, player.into());
    let removed = go::resolve_captures(&mut board, pos, player);
    let captured: usize = removed.iter().sum();

    let mut score = GO_CAPTURE_WEIGHT * captured as f64;

    let own = board.collect_group(pos);
    if board.has_liberties(&own) {
        score += liberty_contacts(&board, &own) as f64;
    } else {
        score -= GO_SELF_CAPTURE_PENALTY;
    }

    for size in removed {
        score += GO_GROUP_CAPTURE_WEIGHT * size as f64;
    }

    score + GO_CENTER_WEIGHT * (GO_CENTER_REACH - pos.center_distance(board.size()))
}

/// Empty orthogonal neighbors summed over every stone of `group`. A point
/// shared by two stones counts twice.
fn liberty_contacts(board: &Board, group: &[Pos]) -> usize {
    group
        .iter()
        .map(|&pt| {
            board
                .neighbors(pt)
                .into_iter()
                .filter(|&n| board.is_empty_at(n))
                .count()
        })
        .sum()
}
