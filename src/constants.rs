//! Constants for board dimensions, turn structure, and heuristic weights.
//!
//! This module contains all the compile-time configuration for both games.
//! Run-time choices (board topology, random seed) are passed in explicitly.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of the area-control board.
pub const AREA_SIZE: usize = 10;

/// Side length of the Go-like board.
pub const GO_SIZE: usize = 9;

/// Orthogonal step offsets (row, col). Order: North, South, West, East.
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Area-Control Rules
// =============================================================================

/// Actions a player may take before the turn passes.
pub const ACTIONS_PER_TURN: u8 = 2;

/// Fewest mover pieces in an opponent's 3x3 window that flips it.
pub const FLIP_MIN: usize = 5;

/// Most mover pieces in an opponent's 3x3 window that flips it.
pub const FLIP_MAX: usize = 8;

// =============================================================================
// Area-Control Heuristic
// =============================================================================

/// Score per flipped piece for a placement.
pub const AREA_PLACE_FLIP_WEIGHT: f64 = 20.0;

/// Score per opponent piece left inside the placement's 3x3 window.
pub const AREA_PLACE_CONTACT_WEIGHT: f64 = 5.0;

/// Multiplier for (AREA_CENTER_REACH - distance to center).
pub const AREA_PLACE_CENTER_WEIGHT: f64 = 2.0;

/// Manhattan reach used by the centrality bonus.
pub const AREA_CENTER_REACH: f64 = 9.0;

/// Score per flipped piece for a move.
pub const AREA_MOVE_FLIP_WEIGHT: f64 = 25.0;

/// Flat bonus for any legal move.
pub const AREA_MOVE_BASE: f64 = 10.0;

/// Upper bound (exclusive) of the random jitter added to each candidate.
pub const AREA_JITTER: f64 = 5.0;

// =============================================================================
// Go-Like Heuristic
// =============================================================================

/// Score per captured stone.
pub const GO_CAPTURE_WEIGHT: f64 = 10.0;

/// Extra score per stone of each captured group.
pub const GO_GROUP_CAPTURE_WEIGHT: f64 = 15.0;

/// Penalty for leaving the mover's own group without liberties.
pub const GO_SELF_CAPTURE_PENALTY: f64 = 100.0;

/// Multiplier for (GO_CENTER_REACH - distance to center).
pub const GO_CENTER_WEIGHT: f64 = 0.5;

/// Manhattan reach used by the centrality bonus.
pub const GO_CENTER_REACH: f64 = 8.0;

/// Upper bound (exclusive) of the random jitter added to each candidate.
pub const GO_JITTER: f64 = 3.0;

/// Default cap on actions in an area-control self-play game. Moves do not
/// fill the board, so a game can otherwise run forever.
pub const AREA_MAX_GAME_LEN: usize = AREA_SIZE * AREA_SIZE * 4;

/// Default cap on moves in a Go-like self-play game.
pub const GO_MAX_GAME_LEN: usize = GO_SIZE * GO_SIZE * 3;
