//! Text rendering of the board.

use crate::config::DisplayConfig;
use chess_core::{Piece, Square};
use chess_engine::Board;

/// Draws the board with row 0 (Black's back rank) at the top.
///
/// The selected square, if any, is bracketed.
pub fn render_board(board: &Board, selected: Option<Square>, display: &DisplayConfig) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        if display.coordinates {
            out.push((b'8' - row) as char);
            out.push(' ');
        }
        for col in 0..8u8 {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let glyph = board
                .piece_at(square)
                .map_or('.', |piece| glyph(piece, display));
            if selected == Some(square) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }
        out.push('\n');
    }
    if display.coordinates {
        out.push_str("   a  b  c  d  e  f  g  h\n");
    }
    out
}

fn glyph(piece: Piece, display: &DisplayConfig) -> char {
    if display.unicode {
        piece.to_unicode()
    } else {
        piece.to_fen_char()
    }
}
