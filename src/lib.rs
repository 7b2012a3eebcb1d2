//! Tor-Games: rule engines for two small capture board games.
//!
//! - The **area** game: a 10x10 board (bounded or toroidal) where each player
//!   takes two actions per turn, placing pieces or sliding isolated ones, and
//!   flips opposing pieces that end up surrounded in their 3x3 window.
//! - The **go** game: a 9x9 Go-like game with group capture and a simple
//!   flood-fill territory count at the end.
//!
//! Every engine operation is a pure function from a state snapshot to a new
//! snapshot. Illegal actions return the input unchanged.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, turn rules, and heuristic weights
//! - [`board`] - Shared square board with optional wraparound
//! - [`area`] - Area-control rules
//! - [`go`] - Go-like rules and territory scoring
//! - [`ai`] - One-ply heuristic move selection
//! - [`protocol`] - Text command session for driving either game
//!
//! ## Example
//!
//! ```
//! use tor_games::ai::{best_action, FixedRandom};
//! use tor_games::area;
//! use tor_games::board::Pos;
//!
//! let state = area::init_game();
//! let state = area::place(&state, Pos::new(5, 5));
//! assert_eq!(state.actions_remaining, 1);
//!
//! let action = best_action(&state, &mut FixedRandom(0.0)).unwrap();
//! let state = area::apply(&state, &action);
//! assert_eq!(state.actions_remaining, 2);
//! ```

pub mod ai;
pub mod area;
pub mod board;
pub mod constants;
pub mod go;
pub mod protocol;
