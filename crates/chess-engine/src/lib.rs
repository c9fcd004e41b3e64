//! Rules engine for a simplified two-player chess variant.
//!
//! This crate provides:
//! - [`Board`] - 8x8 piece placement, the single source of truth for a game
//! - [`RuleSet`] - the interface a presentation layer drives, implemented by
//!   [`SimplifiedChess`]
//! - [`Game`] - a caller-owned session tracking turn, history and result
//! - Free functions for move geometry, move application and check detection
//!
//! # Rules
//!
//! Moves are legal by shape alone. Sliding pieces ignore pieces in between,
//! pawns only ever move straight ahead, and castling only needs the rook in
//! its corner with empty squares between. A side is in check when any
//! opposing piece could legally move onto its king.
//!
//! # Example
//!
//! ```
//! use chess_engine::{CheckStatus, Game};
//!
//! let mut game = Game::new();
//! game.make_move_uci("e2e4").unwrap();
//! game.make_move_uci("e7e5").unwrap();
//! assert_eq!(game.status(), CheckStatus::None);
//! println!("{}", game.board());
//! ```

mod apply;
mod board;
mod check;
mod game;
mod geometry;
pub mod rules;

pub use apply::{apply_move, relocate};
pub use board::Board;
pub use check::{is_checkmate, is_in_check};
pub use game::{Game, GameError, GameMove};
pub use geometry::{castling_rook_move, is_legal_move, KING_HOME_COL};
pub use rules::{CheckStatus, MoveOutcome, RuleSet, SimplifiedChess};
