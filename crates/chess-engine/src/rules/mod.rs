//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the narrow interface a
//! presentation layer drives: legality, move attempts and check status.
//! Implementors supply the primitive tests; the compound operations
//! ([`attempt_move`](RuleSet::attempt_move) and
//! [`check_status`](RuleSet::check_status)) are built on top of them.

mod simplified;

pub use simplified::SimplifiedChess;

use crate::Board;
use chess_core::{Color, Move, Piece, Square};

/// Check state of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The king is not attacked.
    None,
    /// The king is attacked but an escape exists.
    Check,
    /// The king is attacked and no move escapes.
    Checkmate,
}

/// Result of a move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was legal; `board` is the position after it.
    Applied {
        board: Board,
        /// Opposing piece that stood on the destination square.
        captured: Option<Piece>,
    },
    /// The piece cannot move in that shape.
    RejectedIllegalGeometry,
    /// The move would leave the mover's own king in check.
    RejectedSelfCheck,
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Trait for implementing chess rule sets.
///
/// # Example
///
/// ```
/// use chess_core::{Color, Square};
/// use chess_engine::rules::{CheckStatus, RuleSet};
/// use chess_engine::SimplifiedChess;
///
/// let board = SimplifiedChess.initial_board();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// let e4 = Square::from_algebraic("e4").unwrap();
/// let outcome = SimplifiedChess.attempt_move(&board, Color::White, e2, e4);
/// assert!(outcome.is_applied());
/// assert_eq!(SimplifiedChess.check_status(&board, Color::Black), CheckStatus::None);
/// ```
pub trait RuleSet {
    /// Returns the initial board for this rule set.
    fn initial_board(&self) -> Board;

    /// Returns true if the piece on the move's source square may make the move.
    fn is_legal_move(&self, board: &Board, m: Move) -> bool;

    /// Applies a move to the board, returning the previous destination occupant.
    ///
    /// The move is not validated.
    fn apply_move(&self, board: &mut Board, m: Move) -> Option<Piece>;

    /// Returns true if `side`'s king is attacked.
    fn is_in_check(&self, board: &Board, side: Color) -> bool;

    /// Returns true if `side` is checkmated.
    fn is_checkmate(&self, board: &Board, side: Color) -> bool;

    /// Validates and applies a move for `side` without touching `board`.
    ///
    /// The move is applied to a copy; if the copy leaves `side` in check the
    /// attempt is rejected. Only opposing pieces are reported as captured.
    fn attempt_move(&self, board: &Board, side: Color, from: Square, to: Square) -> MoveOutcome {
        let m = Move::new(from, to);
        if !self.is_legal_move(board, m) {
            return MoveOutcome::RejectedIllegalGeometry;
        }

        let mut next = board.clone();
        let displaced = self.apply_move(&mut next, m);
        if self.is_in_check(&next, side) {
            return MoveOutcome::RejectedSelfCheck;
        }

        MoveOutcome::Applied {
            board: next,
            captured: displaced.filter(|piece| piece.color != side),
        }
    }

    /// Returns the check state of `side`.
    fn check_status(&self, board: &Board, side: Color) -> CheckStatus {
        if !self.is_in_check(board, side) {
            CheckStatus::None
        } else if self.is_checkmate(board, side) {
            CheckStatus::Checkmate
        } else {
            CheckStatus::Check
        }
    }
}
