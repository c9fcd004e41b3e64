//! Parsing of the line-oriented commands typed at the prompt.

use chess_core::{Move, Square};
use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' needs a square, e.g. '{0} e2'")]
    MissingSquare(String),
    #[error("'{0}' is not a square")]
    InvalidSquare(String),
}

/// Commands accepted by the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select and release in one step, e.g. "e2e4".
    Move(Move),
    /// Pick up the piece on a square.
    Select(Square),
    /// Drop the selected piece on a square.
    Release(Square),
    /// List where the piece on a square can go.
    Moves(Square),
    /// Redraw the board.
    Board,
    /// Print the current position as FEN.
    Fen,
    /// Show usage.
    Help,
    /// Leave the program.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses one line of input.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = match parts.next() {
            Some(cmd) => cmd,
            None => return Ok(Command::Empty),
        };

        match cmd.to_ascii_lowercase().as_str() {
            "select" | "s" => Self::parse_square(cmd, parts.next()).map(Command::Select),
            "release" | "r" => Self::parse_square(cmd, parts.next()).map(Command::Release),
            "moves" | "m" => Self::parse_square(cmd, parts.next()).map(Command::Moves),
            "board" | "b" => Ok(Command::Board),
            "fen" => Ok(Command::Fen),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => match Move::from_uci(cmd) {
                Some(m) => Ok(Command::Move(m)),
                None => Ok(Command::Unknown(input.to_string())),
            },
        }
    }

    fn parse_square(cmd: &str, arg: Option<&str>) -> Result<Square, CommandError> {
        let arg = arg.ok_or_else(|| CommandError::MissingSquare(cmd.to_string()))?;
        Square::from_algebraic(arg).ok_or_else(|| CommandError::InvalidSquare(arg.to_string()))
    }
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  e2e4          move the piece on e2 to e4
  select <sq>   pick up a piece (s)
  release <sq>  drop the selected piece on a square (r)
  moves <sq>    list where a piece can go (m)
  board         redraw the board (b)
  fen           print the position as FEN
  help          show this text (?)
  quit          leave (q)";
