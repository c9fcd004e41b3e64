//! Per-kind move geometry.
//!
//! Legality here is shape only: sliding pieces never check for blockers and
//! the destination's occupant is never consulted, except for the empty
//! squares castling requires between king and rook.

use crate::Board;
use chess_core::{Move, Piece, PieceKind, Square};

/// Column the king must start on to castle.
pub const KING_HOME_COL: u8 = 4;

type GeometryFn = fn(&Board, Piece, Move) -> bool;

/// Legality test per piece kind, indexed by [`PieceKind::index`].
const GEOMETRY: [GeometryFn; 6] = [pawn, knight, bishop, rook, queen, king];

/// Returns true if the piece on the move's source square may make this move.
///
/// An empty source square never has a legal move.
pub fn is_legal_move(board: &Board, m: Move) -> bool {
    match board.piece_at(m.from()) {
        Some(piece) => GEOMETRY[piece.kind.index()](board, piece, m),
        None => false,
    }
}

/// Rook relocation for a two-column king move: `(rook_from, rook_to)`.
///
/// Returns `None` for any move that is not a castling shape. The board is not
/// consulted, so the caller must know a king is moving.
pub fn castling_rook_move(m: Move) -> Option<(Square, Square)> {
    if m.row_delta() != 0 {
        return None;
    }
    let (rook_from, rook_to) = match m.col_delta() {
        2 => (7, 5),
        -2 => (0, 3),
        _ => return None,
    };
    Some((m.to().with_col(rook_from)?, m.to().with_col(rook_to)?))
}

fn pawn(_board: &Board, piece: Piece, m: Move) -> bool {
    if m.col_delta() != 0 {
        return false;
    }
    let forward = piece.color.pawn_direction();
    let dr = m.row_delta();
    dr == forward || (m.from().row() == piece.color.pawn_row() && dr == 2 * forward)
}

fn knight(_board: &Board, _piece: Piece, m: Move) -> bool {
    matches!(
        (m.row_delta().abs(), m.col_delta().abs()),
        (2, 1) | (1, 2)
    )
}

fn bishop(_board: &Board, _piece: Piece, m: Move) -> bool {
    m.row_delta().abs() == m.col_delta().abs()
}

fn rook(_board: &Board, _piece: Piece, m: Move) -> bool {
    m.row_delta() == 0 || m.col_delta() == 0
}

fn queen(board: &Board, piece: Piece, m: Move) -> bool {
    rook(board, piece, m) || bishop(board, piece, m)
}

fn king(board: &Board, piece: Piece, m: Move) -> bool {
    if m.col_delta().abs() == 2
        && m.row_delta() == 0
        && m.from().col() == KING_HOME_COL
        && can_castle(board, piece, m)
    {
        return true;
    }
    m.row_delta().abs() <= 1 && m.col_delta().abs() <= 1
}

fn can_castle(board: &Board, piece: Piece, m: Move) -> bool {
    let (rook_col, between): (u8, &[u8]) = if m.col_delta() > 0 {
        (7, &[5, 6][..])
    } else {
        (0, &[1, 2, 3][..])
    };
    let own_rook = Piece::new(piece.color, PieceKind::Rook);
    let rook_in_place = m
        .from()
        .with_col(rook_col)
        .and_then(|sq| board.piece_at(sq))
        == Some(own_rook);
    rook_in_place
        && between
            .iter()
            .filter_map(|&col| m.from().with_col(col))
            .all(|sq| board.is_empty(sq))
}
