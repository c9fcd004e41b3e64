//! Move application.

use crate::geometry::castling_rook_move;
use crate::Board;
use chess_core::{Move, Piece, PieceKind};

/// Moves the piece on the source square to the destination.
///
/// Returns whatever previously occupied the destination. Castling is not
/// recognized: this is a plain relocation.
pub fn relocate(board: &mut Board, m: Move) -> Option<Piece> {
    let piece = board.take_piece(m.from());
    let displaced = board.piece_at(m.to());
    board.set_piece(m.to(), piece);
    displaced
}

/// Applies a move, including the rook jump of a castling king.
///
/// The move is not validated. Returns whatever previously occupied the
/// destination square.
pub fn apply_move(board: &mut Board, m: Move) -> Option<Piece> {
    let is_king = board
        .piece_at(m.from())
        .is_some_and(|piece| piece.kind == PieceKind::King);
    let displaced = relocate(board, m);

    if is_king {
        if let Some((rook_from, rook_to)) = castling_rook_move(m) {
            let rook = board.take_piece(rook_from);
            board.set_piece(rook_to, rook);
        }
    }

    displaced
}
