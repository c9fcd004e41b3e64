//! Game session management.
//!
//! The [`Game`] struct owns the authoritative board of one game together with
//! the side to move, the move history and the result. Boards only change
//! through [`Game::make_move`], and only once a move is fully validated.

use crate::rules::{CheckStatus, MoveOutcome, RuleSet, SimplifiedChess};
use crate::Board;
use chess_core::{Color, FenError, FenParser, Move, Piece, PieceKind, Square};
use thiserror::Error;

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move as played.
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// Opposing piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// Check state of the opponent after the move.
    pub status: CheckStatus,
}

impl GameMove {
    /// Returns true if this move was a castle.
    pub fn is_castle(&self) -> bool {
        self.piece.kind == PieceKind::King && self.mov.col_delta().abs() == 2
    }
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    NoPieceSelected(Square),
    /// The piece on the source square belongs to the other side.
    #[error("the piece on {0} is not yours to move")]
    NotYourPiece(Square),
    /// The piece cannot move in that shape.
    #[error("illegal move: {0}")]
    IllegalGeometry(Move),
    /// The move would leave the mover's king in check.
    #[error("illegal move {0}: king would be in check")]
    SelfCheck(Move),
    /// The move text could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    moves: Vec<GameMove>,
    start_board: Board,
    status: CheckStatus,
    winner: Option<Color>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the starting position with White to move.
    pub fn new() -> Self {
        Self::from_board(SimplifiedChess.initial_board(), Color::White)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let status = SimplifiedChess.check_status(&board, side_to_move);
        let winner = (status == CheckStatus::Checkmate).then_some(side_to_move.opposite());
        Game {
            start_board: board.clone(),
            board,
            side_to_move,
            moves: Vec::new(),
            status,
            winner,
        }
    }

    /// Creates a game from a FEN string. White moves if no color is given.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let side = parsed.active_color.unwrap_or(Color::White);
        Ok(Self::from_board(Board::from_placements(parsed.placements), side))
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board the game started from.
    pub fn start_board(&self) -> &Board {
        &self.start_board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the check state of the side to move.
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Returns the winner once the game has ended in checkmate.
    pub fn result(&self) -> Option<Color> {
        self.winner
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the placement FEN followed by the side to move.
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.to_fen(), self.side_to_move.to_fen_char())
    }

    /// Makes a move for the side to move.
    ///
    /// On error the game is left unchanged.
    pub fn make_move(&mut self, m: Move) -> Result<GameMove, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let piece = self
            .board
            .piece_at(m.from())
            .ok_or(GameError::NoPieceSelected(m.from()))?;
        if piece.color != self.side_to_move {
            return Err(GameError::NotYourPiece(m.from()));
        }

        let outcome = SimplifiedChess.attempt_move(&self.board, self.side_to_move, m.from(), m.to());
        let (board, captured) = match outcome {
            MoveOutcome::Applied { board, captured } => (board, captured),
            MoveOutcome::RejectedIllegalGeometry => {
                tracing::debug!(%m, %piece, "rejected: illegal geometry");
                return Err(GameError::IllegalGeometry(m));
            }
            MoveOutcome::RejectedSelfCheck => {
                tracing::debug!(%m, %piece, "rejected: king would be in check");
                return Err(GameError::SelfCheck(m));
            }
        };

        if let Some(captured) = captured {
            tracing::debug!(%m, %captured, "capture");
        }

        self.board = board;
        self.side_to_move = self.side_to_move.opposite();
        self.status = SimplifiedChess.check_status(&self.board, self.side_to_move);

        match self.status {
            CheckStatus::Checkmate => {
                let winner = self.side_to_move.opposite();
                tracing::info!("Checkmate! {} wins!", winner);
                self.winner = Some(winner);
            }
            CheckStatus::Check => tracing::info!("{} is in check", self.side_to_move),
            CheckStatus::None => {}
        }

        let record = GameMove {
            mov: m,
            piece,
            captured,
            status: self.status,
        };
        self.moves.push(record.clone());
        Ok(record)
    }

    /// Makes a move given in coordinate notation (e.g., "e2e4").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<GameMove, GameError> {
        let m = Move::from_uci(uci).ok_or_else(|| GameError::InvalidNotation(uci.to_string()))?;
        self.make_move(m)
    }

    /// Returns the squares the piece on `from` can move to without leaving
    /// its own king in check. The source square itself is not listed.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board.piece_at(from) else {
            return Vec::new();
        };
        Square::all()
            .filter(|&to| to != from)
            .filter(|&to| {
                SimplifiedChess
                    .attempt_move(&self.board, piece.color, from, to)
                    .is_applied()
            })
            .collect()
    }
}
