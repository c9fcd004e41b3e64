//! Move representation.

use crate::Square;
use std::fmt;

/// A move from one square to another.
///
/// A move carries no flags: whether it is a castle or a capture depends on
/// the board it is played on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the row delta (destination row minus source row).
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    /// Returns the column delta (destination column minus source column).
    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    /// Returns the move with source and destination swapped.
    #[inline]
    pub const fn reversed(self) -> Self {
        Move {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
