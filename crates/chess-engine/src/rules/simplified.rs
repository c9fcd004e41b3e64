//! The simplified rule set.

use super::RuleSet;
use crate::{apply_move, is_checkmate, is_in_check, is_legal_move, Board};
use chess_core::{Color, Move, Piece};

/// Simplified chess rules.
///
/// - Moves are legal by shape alone; sliding pieces ignore blockers
/// - Pawns only move straight ahead (one step, or two from their start row)
/// - Castling needs only the rook in its corner and empty squares between
/// - No en passant, promotion, stalemate or draw rules
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedChess;

impl RuleSet for SimplifiedChess {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn is_legal_move(&self, board: &Board, m: Move) -> bool {
        is_legal_move(board, m)
    }

    fn apply_move(&self, board: &mut Board, m: Move) -> Option<Piece> {
        apply_move(board, m)
    }

    fn is_in_check(&self, board: &Board, side: Color) -> bool {
        is_in_check(board, side)
    }

    fn is_checkmate(&self, board: &Board, side: Color) -> bool {
        is_checkmate(board, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CheckStatus, MoveOutcome};
    use chess_core::{PieceKind, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn initial_board() {
        let board = SimplifiedChess.initial_board();
        assert_eq!(board.to_fen(), chess_core::FenParser::STARTPOS);
    }

    #[test]
    fn attempt_legal_move() {
        let board = SimplifiedChess.initial_board();
        match SimplifiedChess.attempt_move(&board, Color::White, sq("g1"), sq("f3")) {
            MoveOutcome::Applied { board: next, captured } => {
                assert_eq!(captured, None);
                assert_eq!(
                    next.piece_at(sq("f3")),
                    Some(Piece::new(Color::White, PieceKind::Knight))
                );
                assert!(next.is_empty(sq("g1")));
            }
            other => panic!("expected move to apply, got {:?}", other),
        }
    }

    #[test]
    fn attempt_illegal_geometry() {
        let board = SimplifiedChess.initial_board();
        let outcome = SimplifiedChess.attempt_move(&board, Color::White, sq("e2"), sq("e5"));
        assert_eq!(outcome, MoveOutcome::RejectedIllegalGeometry);
    }

    #[test]
    fn attempt_from_empty_square_is_illegal() {
        let board = SimplifiedChess.initial_board();
        let outcome = SimplifiedChess.attempt_move(&board, Color::White, sq("e4"), sq("e5"));
        assert_eq!(outcome, MoveOutcome::RejectedIllegalGeometry);
    }

    #[test]
    fn attempt_self_check() {
        // The rook on h1 checks along the first rank; d1 stays on it, d2 leaves it.
        let board = Board::from_fen("8/8/8/8/8/8/8/4K2r").unwrap();
        let outcome = SimplifiedChess.attempt_move(&board, Color::White, sq("e1"), sq("d1"));
        assert_eq!(outcome, MoveOutcome::RejectedSelfCheck);

        let escape = SimplifiedChess.attempt_move(&board, Color::White, sq("e1"), sq("d2"));
        assert!(escape.is_applied());
    }

    #[test]
    fn attempt_reports_capture() {
        let board = Board::from_fen("k7/8/8/8/8/8/R7/7K").unwrap();
        match SimplifiedChess.attempt_move(&board, Color::White, sq("a2"), sq("a8")) {
            MoveOutcome::Applied { captured, .. } => {
                assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::King)));
            }
            other => panic!("expected capture, got {:?}", other),
        }
    }

    #[test]
    fn own_piece_on_destination_is_not_a_capture() {
        let board = Board::from_fen("k7/8/8/8/8/8/P7/R3K3").unwrap();
        match SimplifiedChess.attempt_move(&board, Color::White, sq("a1"), sq("a2")) {
            MoveOutcome::Applied { board: next, captured } => {
                assert_eq!(captured, None);
                assert_eq!(next.piece_count(), 3);
            }
            other => panic!("expected move to apply, got {:?}", other),
        }
    }

    #[test]
    fn check_status_levels() {
        let quiet = SimplifiedChess.initial_board();
        assert_eq!(
            SimplifiedChess.check_status(&quiet, Color::White),
            CheckStatus::None
        );

        let check = Board::from_fen("K6r/8/8/8/8/8/8/8").unwrap();
        assert_eq!(
            SimplifiedChess.check_status(&check, Color::White),
            CheckStatus::Check
        );

        let mate = Board::from_fen("K6r/7r/8/8/8/8/8/8").unwrap();
        assert_eq!(
            SimplifiedChess.check_status(&mate, Color::White),
            CheckStatus::Checkmate
        );
    }
}
