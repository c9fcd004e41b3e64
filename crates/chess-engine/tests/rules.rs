//! Integration tests for the rules engine through its public interface.

use chess_core::{Color, Move, Piece, PieceKind, Square};
use chess_engine::{
    is_checkmate, is_in_check, is_legal_move, Board, CheckStatus, Game, GameError, MoveOutcome,
    RuleSet, SimplifiedChess,
};
use proptest::prelude::*;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn opening_pawn_steps() {
    let board = SimplifiedChess.initial_board();
    let from = sq(6, 4);
    assert!(is_legal_move(&board, Move::new(from, sq(4, 4))));
    assert!(is_legal_move(&board, Move::new(from, sq(5, 4))));
    assert!(!is_legal_move(&board, Move::new(from, sq(3, 4))));
    assert!(!is_legal_move(&board, Move::new(from, sq(5, 3))));
}

#[test]
fn nobody_in_check_at_start() {
    let board = SimplifiedChess.initial_board();
    assert!(!is_in_check(&board, Color::White));
    assert!(!is_in_check(&board, Color::Black));
}

#[test]
fn kingside_castle_relocates_rook() {
    let board = Board::from_placements([
        (sq(7, 4), Piece::new(Color::White, PieceKind::King)),
        (sq(7, 7), Piece::new(Color::White, PieceKind::Rook)),
    ]);
    let outcome = SimplifiedChess.attempt_move(&board, Color::White, sq(7, 4), sq(7, 6));
    let MoveOutcome::Applied { board: next, captured } = outcome else {
        panic!("castle should be legal, got {:?}", outcome);
    };
    assert_eq!(captured, None);
    assert_eq!(
        next.piece_at(sq(7, 6)),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        next.piece_at(sq(7, 5)),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(next.is_empty(sq(7, 7)));
    assert!(next.is_empty(sq(7, 4)));
}

#[test]
fn queenside_castle_relocates_rook() {
    let mut game = Game::from_fen("r3k3/8/8/8/8/8/8/4K3 b").unwrap();
    game.make_move_uci("e8c8").unwrap();
    assert_eq!(game.board().to_fen(), "2kr4/8/8/8/8/8/8/4K3");
}

#[test]
fn queenside_castle_through_attempt_move() {
    let board = Board::from_fen("r3k3/8/8/8/8/8/8/4K3").unwrap();
    let outcome = SimplifiedChess.attempt_move(&board, Color::Black, sq(0, 4), sq(0, 2));
    let MoveOutcome::Applied { board: next, captured } = outcome else {
        panic!("castle should be legal, got {:?}", outcome);
    };
    assert_eq!(captured, None);
    assert_eq!(next.to_fen(), "2kr4/8/8/8/8/8/8/4K3");
    assert_eq!(board.to_fen(), "r3k3/8/8/8/8/8/8/4K3");
}

#[test]
fn castling_into_check_is_rejected() {
    // The black rook on g7 covers g1, where the king would land.
    let board = Board::from_fen("4k3/6r1/8/8/8/8/8/4K2R").unwrap();
    let before = board.clone();
    assert!(is_legal_move(&board, Move::new(sq(7, 4), sq(7, 6))));
    assert!(!is_in_check(&board, Color::White));

    let outcome = SimplifiedChess.attempt_move(&board, Color::White, sq(7, 4), sq(7, 6));
    assert_eq!(outcome, MoveOutcome::RejectedSelfCheck);
    assert_eq!(board, before);

    let mut game = Game::from_board(board, Color::White);
    assert_eq!(
        game.make_move_uci("e1g1"),
        Err(GameError::SelfCheck(Move::new(sq(7, 4), sq(7, 6))))
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.ply_count(), 0);
}

#[test]
fn lone_king_checked_by_rook_can_escape() {
    let board = Board::from_placements([
        (sq(0, 0), Piece::new(Color::White, PieceKind::King)),
        (sq(0, 7), Piece::new(Color::Black, PieceKind::Rook)),
    ]);
    assert!(is_in_check(&board, Color::White));
    assert!(!is_checkmate(&board, Color::White));
    assert_eq!(
        SimplifiedChess.check_status(&board, Color::White),
        CheckStatus::Check
    );

    let escaped = SimplifiedChess.attempt_move(&board, Color::White, sq(0, 0), sq(1, 0));
    assert!(escaped.is_applied());
}

#[test]
fn reversible_move_restores_placement() {
    let start = SimplifiedChess.initial_board();
    let there = Move::new(sq(7, 6), sq(5, 5));

    let MoveOutcome::Applied { board: moved, .. } =
        SimplifiedChess.attempt_move(&start, Color::White, there.from(), there.to())
    else {
        panic!("knight move should be legal");
    };
    let back = there.reversed();
    let MoveOutcome::Applied { board: restored, .. } =
        SimplifiedChess.attempt_move(&moved, Color::White, back.from(), back.to())
    else {
        panic!("knight return should be legal");
    };
    assert_eq!(restored, start);
}

#[test]
fn knight_dance_in_a_game() {
    let mut game = Game::new();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        game.make_move_uci(uci).unwrap();
    }
    assert_eq!(game.board(), game.start_board());
    assert_eq!(game.ply_count(), 4);
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn checkmate_without_king_is_false() {
    let board = Board::from_placements([(sq(3, 3), Piece::new(Color::Black, PieceKind::Queen))]);
    assert!(!is_checkmate(&board, Color::White));
    assert!(!is_checkmate(&Board::empty(), Color::Black));
}

#[test]
fn castling_is_the_only_escape() {
    // Bishop b4 checks e1, knights cover d1/f1/e2, the a2 rook covers row 6.
    let mut game = Game::from_fen("k7/8/8/8/1b6/2n1n3/r7/4K2R w").unwrap();
    assert!(is_in_check(game.board(), Color::White));
    assert!(!is_checkmate(game.board(), Color::White));
    assert_eq!(game.status(), CheckStatus::Check);
    assert_eq!(game.legal_destinations(sq(7, 4)), vec![sq(7, 6)]);

    let record = game.make_move_uci("e1g1").unwrap();
    assert!(record.is_castle());
    assert_eq!(game.board().to_fen(), "k7/8/8/8/1b6/2n1n3/r7/5RK1");
}

#[test]
fn mate_ends_the_game() {
    let mut game = Game::from_fen("4k3/8/8/8/8/1r6/r7/4K3 b").unwrap();
    let record = game.make_move_uci("b3b1").unwrap();
    assert_eq!(record.status, CheckStatus::Checkmate);
    assert_eq!(game.result(), Some(Color::Black));
    assert_eq!(game.make_move_uci("e1e2"), Err(GameError::GameAlreadyOver));
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (any::<bool>(), 0usize..6).prop_map(|(white, kind)| {
        let color = if white { Color::White } else { Color::Black };
        Piece::new(color, PieceKind::ALL[kind])
    })
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec((0u8..64, piece_strategy()), 0..16).prop_map(|placements| {
        Board::from_placements(
            placements
                .into_iter()
                .filter_map(|(index, piece)| Square::from_index(index).map(|sq| (sq, piece))),
        )
    })
}

fn color_strategy() -> impl Strategy<Value = Color> {
    any::<bool>().prop_map(|white| if white { Color::White } else { Color::Black })
}

proptest! {
    #[test]
    fn rejected_moves_leave_board_untouched(
        board in board_strategy(),
        side in color_strategy(),
        from in 0u8..64,
        to in 0u8..64,
    ) {
        let from = Square::from_index(from).unwrap();
        let to = Square::from_index(to).unwrap();
        let before = board.clone();
        let outcome = SimplifiedChess.attempt_move(&board, side, from, to);
        prop_assert_eq!(&board, &before);

        match outcome {
            MoveOutcome::Applied { board: next, .. } => {
                prop_assert!(!is_in_check(&next, side));
            }
            MoveOutcome::RejectedIllegalGeometry => {
                prop_assert!(!is_legal_move(&board, Move::new(from, to)));
            }
            MoveOutcome::RejectedSelfCheck => {
                prop_assert!(is_legal_move(&board, Move::new(from, to)));
            }
        }
    }

    #[test]
    fn failed_game_moves_change_nothing(
        board in board_strategy(),
        side in color_strategy(),
        from in 0u8..64,
        to in 0u8..64,
    ) {
        let mut game = Game::from_board(board, side);
        let before = game.board().clone();
        let m = Move::new(Square::from_index(from).unwrap(), Square::from_index(to).unwrap());
        if game.make_move(m).is_err() {
            prop_assert_eq!(game.board(), &before);
            prop_assert_eq!(game.side_to_move(), side);
            prop_assert_eq!(game.ply_count(), 0);
        } else {
            prop_assert_eq!(game.side_to_move(), side.opposite());
            prop_assert_eq!(game.ply_count(), 1);
        }
    }

    #[test]
    fn checkmate_implies_check(board in board_strategy(), side in color_strategy()) {
        if is_checkmate(&board, side) {
            prop_assert!(is_in_check(&board, side));
        }
    }

    #[test]
    fn kingless_side_is_never_in_check(board in board_strategy(), side in color_strategy()) {
        let mut board = board;
        for (square, piece) in board.clone().pieces() {
            if piece == Piece::new(side, PieceKind::King) {
                board.set_piece(square, None);
            }
        }
        prop_assert!(!is_in_check(&board, side));
        prop_assert!(!is_checkmate(&board, side));
    }

    #[test]
    fn knight_and_king_steps_are_symmetric(
        kind in prop::sample::select(vec![PieceKind::Knight, PieceKind::King]),
        from in 0u8..64,
        to in 0u8..64,
    ) {
        let from = Square::from_index(from).unwrap();
        let to = Square::from_index(to).unwrap();
        let piece = Piece::new(Color::White, kind);
        // Keep kings off the castling shape, which depends on the rook.
        prop_assume!(kind != PieceKind::King || (Move::new(from, to).col_delta().abs() != 2));
        let there = Board::from_placements([(from, piece)]);
        let back = Board::from_placements([(to, piece)]);
        prop_assert_eq!(
            is_legal_move(&there, Move::new(from, to)),
            is_legal_move(&back, Move::new(to, from))
        );
    }
}
