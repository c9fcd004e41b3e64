//! FEN (Forsyth-Edwards Notation) piece placement parsing and serialization.
//!
//! Only the first two FEN fields are meaningful here: the piece placement and
//! the optional active color. Castling rights, en passant and move clocks
//! are not tracked by the rules engine, so any trailing fields are accepted
//! and ignored.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: empty input")]
    Empty,

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Occupied squares in row-major order starting at a8.
    pub placements: Vec<(Square, Piece)>,
    /// Side to move, if the active color field was present.
    pub active_color: Option<Color>,
}

impl FenParser {
    /// The standard starting position placement.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a FEN string (placement field, optionally followed by more fields).
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();

        let placement = parts.next().ok_or(FenError::Empty)?;
        let placements = Self::parse_placement(placement)?;

        let active_color = match parts.next() {
            None => None,
            Some("w") => Some(Color::White),
            Some("b") => Some(Color::Black),
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            placements,
            active_color,
        })
    }

    fn parse_placement(placement: &str) -> Result<Vec<(Square, Piece)>, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                rows.len()
            )));
        }

        let mut placements = Vec::new();
        for (row, rank) in rows.iter().enumerate() {
            let mut col = 0u32;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    let square = Square::new(row as u8, col as u8).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!(
                            "rank {} has more than 8 squares",
                            8 - row
                        ))
                    })?;
                    placements.push((square, piece));
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(placements)
    }

    /// Serializes a placement lookup into the FEN placement field.
    pub fn placement_to_fen(piece_at: impl Fn(Square) -> Option<Piece>) -> String {
        let mut fen = String::new();
        for row in 0..8u8 {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for col in 0..8u8 {
                let piece = Square::new(row, col).and_then(&piece_at);
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
        }
        fen
    }
}
