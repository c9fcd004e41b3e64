//! Interactive session: selection state and command handling.
//!
//! The session is the presentation layer's half of a move attempt. A piece is
//! picked up with `select` (only the side to move may pick), and `release`
//! hands source and destination to the engine. The selection is cleared after
//! every release, whatever the outcome.

use crate::command::{Command, HELP};
use crate::config::DisplayConfig;
use crate::render::render_board;
use chess_core::{Move, Square};
use chess_engine::{CheckStatus, Game, GameError};

/// Text to show the player after a command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    /// The session has ended (quit or checkmate).
    pub finished: bool,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply {
            lines: vec![text.into()],
            finished: false,
        }
    }
}

/// One game driven from the terminal.
pub struct Session {
    game: Game,
    selected: Option<Square>,
    display: DisplayConfig,
}

impl Session {
    pub fn new(game: Game, display: DisplayConfig) -> Self {
        Session {
            game,
            selected: None,
            display,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the prompt for the next command.
    pub fn prompt(&self) -> String {
        match self.selected {
            Some(square) => format!("{} ({})> ", self.game.side_to_move(), square),
            None => format!("{}> ", self.game.side_to_move()),
        }
    }

    /// Draws the current board, marking the selection.
    pub fn render(&self) -> String {
        render_board(self.game.board(), self.selected, &self.display)
    }

    /// Runs one command.
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Move(m) => {
                let picked = self.select(m.from());
                if !picked.lines.is_empty() {
                    self.selected = None;
                    return picked;
                }
                self.release(m.to())
            }
            Command::Select(square) => self.select(square),
            Command::Release(square) => self.release(square),
            Command::Moves(square) => self.list_moves(square),
            Command::Board => Reply::line(self.render()),
            Command::Fen => Reply::line(self.game.to_fen()),
            Command::Help => Reply::line(HELP),
            Command::Quit => Reply {
                lines: Vec::new(),
                finished: true,
            },
            Command::Empty => Reply::default(),
            Command::Unknown(text) => {
                Reply::line(format!("Unknown command '{}'. Type 'help'.", text))
            }
        }
    }

    /// Picks up the piece on `square` if it belongs to the side to move.
    ///
    /// An empty reply means the selection succeeded.
    fn select(&mut self, square: Square) -> Reply {
        let side = self.game.side_to_move();
        match self.game.board().piece_at(square) {
            Some(piece) if piece.color == side => {
                tracing::debug!(%square, %piece, "selected");
                self.selected = Some(square);
                Reply::default()
            }
            Some(_) => Reply::line(format!("The piece on {} belongs to the other side.", square)),
            None => Reply::line(format!("There is no piece on {}.", square)),
        }
    }

    fn release(&mut self, to: Square) -> Reply {
        let Some(from) = self.selected.take() else {
            return Reply::line("Select a piece first.");
        };

        match self.game.make_move(Move::new(from, to)) {
            Ok(record) => {
                let mut reply = Reply::default();
                if let Some(captured) = record.captured {
                    reply.lines.push(format!("Captured {}!", captured));
                }
                reply.lines.push(self.render());
                match record.status {
                    CheckStatus::Checkmate => {
                        reply
                            .lines
                            .push(format!("Checkmate! {} wins!", record.piece.color));
                        reply.finished = true;
                    }
                    CheckStatus::Check => {
                        reply
                            .lines
                            .push(format!("{} is in check.", self.game.side_to_move()));
                    }
                    CheckStatus::None => {}
                }
                reply
            }
            Err(GameError::IllegalGeometry(_)) => Reply::line("Invalid move!"),
            Err(GameError::SelfCheck(_)) => Reply::line("Invalid move: King is in check!"),
            Err(err) => Reply::line(err.to_string()),
        }
    }

    fn list_moves(&self, square: Square) -> Reply {
        let destinations = self.game.legal_destinations(square);
        if destinations.is_empty() {
            return Reply::line(format!("No moves from {}.", square));
        }
        let names: Vec<String> = destinations.iter().map(|sq| sq.to_algebraic()).collect();
        Reply::line(format!("{}: {}", square, names.join(" ")))
    }
}
