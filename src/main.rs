//! Tor-Games: command-line driver for the area and go rule engines.
//!
//! ## Usage
//!
//! - `tor-games` - Show a demo
//! - `tor-games area [--torus] [--seed N]` - Text protocol session, area game
//! - `tor-games go [--seed N]` - Text protocol session, go game
//! - `tor-games selfplay <area|go>` - Let the heuristic play both sides
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see rejected actions and
//! captures.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tor_games::ai::{best_action, best_move};
use tor_games::area;
use tor_games::board::{Color, Pos, Topology};
use tor_games::constants::{AREA_MAX_GAME_LEN, GO_MAX_GAME_LEN};
use tor_games::go;
use tor_games::protocol::{GameKind, Session};

/// Tor-Games: area-control and Go-like capture engines
#[derive(Parser)]
#[command(name = "tor-games")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a text protocol session for the area game
    Area {
        /// Wrap rows and columns around the board edges
        #[arg(long)]
        torus: bool,
        /// Seed for the heuristic's tie-breaking
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Start a text protocol session for the go game
    Go {
        /// Seed for the heuristic's tie-breaking
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let the heuristic play both sides and print the result
    Selfplay {
        game: Mode,
        /// Wrap rows and columns around the board edges (area game)
        #[arg(long)]
        torus: bool,
        /// Seed for the heuristic's tie-breaking
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many actions (go: then count territory)
        #[arg(long)]
        max_moves: Option<usize>,
    },
    /// Run a short demo of both engines
    Demo,
}

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    Area,
    Go,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Area { torus, seed }) => {
            let mut session = Session::new(GameKind::Area(topology(torus)), seed);
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("area protocol session failed")?;
        }
        Some(Commands::Go { seed }) => {
            let mut session = Session::new(GameKind::Go, seed);
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("go protocol session failed")?;
        }
        Some(Commands::Selfplay {
            game,
            torus,
            seed,
            max_moves,
        }) => {
            let mut rng = rng_from(seed);
            match game {
                Mode::Area => selfplay_area(
                    topology(torus),
                    max_moves.unwrap_or(AREA_MAX_GAME_LEN),
                    &mut rng,
                ),
                Mode::Go => selfplay_go(max_moves.unwrap_or(GO_MAX_GAME_LEN), &mut rng),
            }
        }
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

fn topology(torus: bool) -> Topology {
    if torus {
        Topology::Toroidal
    } else {
        Topology::Bounded
    }
}

fn rng_from(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}

fn winner_text(winner: Option<Color>) -> String {
    winner.map_or_else(|| "draw".to_string(), |c| c.to_string())
}

fn selfplay_area(topology: Topology, max_moves: usize, rng: &mut fastrand::Rng) {
    let mut state = area::new_game(topology);
    let mut actions = 0usize;
    while actions < max_moves {
        let Some(action) = best_action(&state, rng) else {
            break;
        };
        state = area::apply(&state, &action);
        actions += 1;
    }
    info!(actions, game_over = state.game_over, "area self-play finished");
    println!("{}", state.board);
    println!(
        "Black {} - White {}: {}",
        state.black_count,
        state.white_count,
        winner_text(state.winner)
    );
}

fn selfplay_go(max_moves: usize, rng: &mut fastrand::Rng) {
    let mut state = go::init_game();
    while state.history.len() < max_moves {
        let Some(pos) = best_move(&state, rng) else {
            break;
        };
        state = go::play(&state, pos);
    }
    let state = go::end_game(&state);
    info!(moves = state.history.len(), "go self-play finished");
    println!("{}", state.board);
    println!(
        "Black {} - White {}: {}",
        state.black_score,
        state.white_score,
        winner_text(state.winner)
    );
}

fn run_demo() {
    println!("Tor-Games: area-control and Go-like capture engines\n");

    println!("=== Area Game ===");
    let mut state = area::init_game();
    state = area::place(&state, Pos::new(5, 5));
    state = area::place(&state, Pos::new(4, 4));
    let mut rng = fastrand::Rng::new();
    if let Some(action) = best_action(&state, &mut rng) {
        println!("White answers with {action:?}");
        state = area::apply(&state, &action);
    }
    println!("{}", state.board);

    println!("=== Go Game ===");
    let mut state = go::init_game();
    for _ in 0..6 {
        match best_move(&state, &mut rng) {
            Some(pos) => state = go::play(&state, pos),
            None => break,
        }
    }
    println!("{}", state.board);
    let state = go::end_game(&state);
    println!(
        "Black {} - White {}: {}",
        state.black_score,
        state.white_score,
        winner_text(state.winner)
    );
}
