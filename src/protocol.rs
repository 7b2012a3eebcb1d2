//! Line-oriented text protocol for driving either game.
//!
//! The protocol follows the shape of GTP: one command per line, an optional
//! numeric id in front, and a response of `=[id] text` on success or
//! `?[id] text` on failure, each followed by a blank line. Coordinates are
//! given as `row col` integers (zero-based, top-left origin).
//!
//! ## Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `clear_board` - start a new game of the same kind
//! - `showboard` - print the board (`X` black, `O` white, `.` empty)
//! - `score` - current counts or scores and the winner, if decided
//! - `genmove` - let the heuristic choose an action and apply it
//! - area game: `place r c`, `move r c r c`, `select r c`, `deselect`,
//!   `valid_moves r c`, `end_turn`
//! - go game: `play r c`, `end_game`
//!
//! Rows and columns may be negative on a toroidal board; they are wrapped
//! on lookup but movement distance uses them as given.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::ai::{best_action, best_move};
use crate::area::{self, Action, AreaState};
use crate::board::{Board, Color, Pos, Topology};
use crate::go::{self, GoState};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "deselect",
    "end_game",
    "end_turn",
    "genmove",
    "known_command",
    "list_commands",
    "move",
    "name",
    "place",
    "play",
    "quit",
    "score",
    "select",
    "showboard",
    "valid_moves",
    "version",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("missing argument")]
    MissingArgument,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("not available in the {0} game")]
    WrongGame(&'static str),
    #[error("illegal action")]
    IllegalAction,
}

/// Which game a session plays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameKind {
    Area(Topology),
    Go,
}

/// The game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Game {
    Area(AreaState),
    Go(GoState),
}

impl Game {
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::Area(topology) => Game::Area(area::new_game(topology)),
            GameKind::Go => Game::Go(go::init_game()),
        }
    }

    pub fn board(&self) -> &Board {
        match self {
            Game::Area(state) => &state.board,
            Game::Go(state) => &state.board,
        }
    }

    pub fn is_over(&self) -> bool {
        match self {
            Game::Area(state) => state.game_over,
            Game::Go(state) => state.game_over,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Game::Area(state) => state.winner,
            Game::Go(state) => state.winner,
        }
    }
}

/// Protocol session state.
pub struct Session {
    kind: GameKind,
    game: Game,
    rng: fastrand::Rng,
}

impl Session {
    /// Create a session. A seed pins the heuristic's choices.
    pub fn new(kind: GameKind, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            kind,
            game: Game::new(kind),
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> io::Result<()> {
        info!(kind = ?self.kind, "session started");
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (prefix, message) = match self.execute(&command, args) {
                Ok(message) => ('=', message),
                Err(err) => {
                    debug!(%command, %err, "command failed");
                    ('?', err.to_string())
                }
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute one command and return its response text.
    pub fn execute(&mut self, command: &str, args: &[&str]) -> Result<String, ProtocolError> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),
            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),
            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),
            "known_command" => {
                let cmd = args.first().ok_or(ProtocolError::MissingArgument)?;
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                Ok(known.to_string())
            }
            "quit" => Ok(String::new()),
            "clear_board" => {
                self.game = Game::new(self.kind);
                Ok(String::new())
            }
            "showboard" => Ok(format!("\n{}", self.game.board().to_string().trim_end())),
            "score" => Ok(self.score()),
            "genmove" => self.genmove(),
            _ => match &self.game {
                Game::Area(state) => {
                    let next = Self::execute_area(state, command, args)?;
                    let reply = if command == "valid_moves" {
                        let from = parse_pos(args, 0)?;
                        format_positions(&area::valid_moves(&state.board, from, state.current_player))
                    } else {
                        String::new()
                    };
                    self.game = Game::Area(next);
                    Ok(reply)
                }
                Game::Go(state) => {
                    let next = Self::execute_go(state, command, args)?;
                    let reply = if command == "end_game" {
                        winner_text(next.winner)
                    } else {
                        String::new()
                    };
                    self.game = Game::Go(next);
                    Ok(reply)
                }
            },
        }
    }

    fn execute_area(
        state: &AreaState,
        command: &str,
        args: &[&str],
    ) -> Result<AreaState, ProtocolError> {
        match command {
            "place" => {
                let pos = parse_pos(args, 0)?;
                changed(state, area::place(state, pos))
            }
            "move" => {
                let from = parse_pos(args, 0)?;
                let to = parse_pos(args, 2)?;
                changed(state, area::move_piece(state, from, to))
            }
            "select" => {
                let pos = parse_pos(args, 0)?;
                if !area::can_select(state, pos) {
                    return Err(ProtocolError::IllegalAction);
                }
                Ok(area::select(state, pos))
            }
            "deselect" => Ok(area::deselect(state)),
            "end_turn" => changed(state, area::end_turn(state)),
            "valid_moves" => {
                parse_pos(args, 0)?;
                Ok(state.clone())
            }
            "play" | "end_game" => Err(ProtocolError::WrongGame("area")),
            _ => Err(ProtocolError::UnknownCommand(command.to_string())),
        }
    }

    fn execute_go(state: &GoState, command: &str, args: &[&str]) -> Result<GoState, ProtocolError> {
        match command {
            "play" => {
                let pos = parse_pos(args, 0)?;
                changed(state, go::play(state, pos))
            }
            "end_game" => changed(state, go::end_game(state)),
            "place" | "move" | "select" | "deselect" | "valid_moves" | "end_turn" => {
                Err(ProtocolError::WrongGame("go"))
            }
            _ => Err(ProtocolError::UnknownCommand(command.to_string())),
        }
    }

    fn genmove(&mut self) -> Result<String, ProtocolError> {
        match &self.game {
            Game::Area(state) => {
                let Some(action) = best_action(state, &mut self.rng) else {
                    return Ok("none".to_string());
                };
                let next = area::apply(state, &action);
                self.game = Game::Area(next);
                Ok(match action {
                    Action::Place(pos) => format!("place {pos}"),
                    Action::Move { from, to } => format!("move {from} {to}"),
                })
            }
            Game::Go(state) => {
                let Some(pos) = best_move(state, &mut self.rng) else {
                    return Ok("none".to_string());
                };
                let next = go::play(state, pos);
                self.game = Game::Go(next);
                Ok(pos.to_string())
            }
        }
    }

    fn score(&self) -> String {
        let (black, white) = match &self.game {
            Game::Area(state) => (state.black_count, state.white_count),
            Game::Go(state) => (state.black_score, state.white_score),
        };
        let mut text = format!("black {black} white {white}");
        if self.game.is_over() {
            text.push_str(&format!(" winner {}", winner_text(self.game.winner())));
        }
        text
    }
}

/// Parse the `row col` pair starting at `args[at]`.
pub fn parse_pos(args: &[&str], at: usize) -> Result<Pos, ProtocolError> {
    let row = parse_coord(args.get(at))?;
    let col = parse_coord(args.get(at + 1))?;
    Ok(Pos::new(row, col))
}

fn parse_coord(arg: Option<&&str>) -> Result<i32, ProtocolError> {
    let arg = arg.ok_or(ProtocolError::MissingArgument)?;
    arg.parse::<i32>()
        .map_err(|_| ProtocolError::InvalidNumber(arg.to_string()))
}

/// An unchanged state means the engine rejected the action.
fn changed<S: PartialEq>(before: &S, after: S) -> Result<S, ProtocolError> {
    if *before == after {
        Err(ProtocolError::IllegalAction)
    } else {
        Ok(after)
    }
}

fn format_positions(positions: &[Pos]) -> String {
    positions
        .iter()
        .map(Pos::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn winner_text(winner: Option<Color>) -> String {
    winner.map_or_else(|| "draw".to_string(), |c| c.to_string())
}
