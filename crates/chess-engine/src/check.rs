//! Check and checkmate detection.
//!
//! Attacks are defined through [`is_legal_move`]: a side is in check when any
//! opposing piece could legally move onto its king's square, so every
//! simplification of the move geometry carries over.

use crate::apply::relocate;
use crate::geometry::is_legal_move;
use crate::Board;
use chess_core::{Color, Move, Square};

/// Returns true if `side`'s king is attacked.
///
/// A board without a king for `side` is never in check.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    board
        .pieces_of(side.opposite())
        .any(|(from, _)| is_legal_move(board, Move::new(from, king)))
}

/// Returns true if `side` is in check and no legal move gets it out.
///
/// Candidate escapes are simulated as plain relocations: a castling move's
/// rook jump is not replayed here.
pub fn is_checkmate(board: &Board, side: Color) -> bool {
    if !is_in_check(board, side) {
        return false;
    }
    !board.pieces_of(side).any(|(from, _)| {
        Square::all()
            .map(|to| Move::new(from, to))
            .filter(|&m| is_legal_move(board, m))
            .any(|m| {
                let mut trial = board.clone();
                relocate(&mut trial, m);
                !is_in_check(&trial, side)
            })
    })
}
