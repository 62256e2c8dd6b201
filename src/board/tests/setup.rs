//! Initial layout and mutation primitive tests.

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

#[test]
fn test_initial_position_matches_standard_layout() {
    let board = Board::new();
    let back_rank = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];

    for (file, &piece) in back_rank.iter().enumerate() {
        assert_eq!(board.piece_at(Square(0, file)), Some((Color::Dark, piece)));
        assert_eq!(board.piece_at(Square(7, file)), Some((Color::Light, piece)));
    }
    for file in 0..8 {
        assert_eq!(
            board.piece_at(Square(1, file)),
            Some((Color::Dark, Piece::Pawn))
        );
        assert_eq!(
            board.piece_at(Square(6, file)),
            Some((Color::Light, Piece::Pawn))
        );
    }
    for row in 2..6 {
        for col in 0..8 {
            assert_eq!(board.piece_at(Square(row, col)), None);
        }
    }
}

#[test]
fn test_initial_position_has_32_pieces() {
    assert_eq!(Board::new().piece_count(), 32);
    assert_eq!(Board::default(), Board::new());
}

#[test]
fn test_empty_board_has_no_pieces() {
    let board = Board::empty();
    for row in 0..8 {
        for col in 0..8 {
            assert!(board.is_empty(Square(row, col)));
        }
    }
}

#[test]
fn test_set_and_clear_square() {
    let mut board = Board::empty();
    board.set_piece(Square(3, 3), Color::Light, Piece::Queen);
    assert_eq!(
        board.piece_at(Square(3, 3)),
        Some((Color::Light, Piece::Queen))
    );
    assert_eq!(board.color_at(Square(3, 3)), Some(Color::Light));

    // Overwrite, then clear
    board.set_piece(Square(3, 3), Color::Dark, Piece::Knight);
    assert_eq!(
        board.piece_at(Square(3, 3)),
        Some((Color::Dark, Piece::Knight))
    );
    board.clear_square(Square(3, 3));
    assert!(board.is_empty(Square(3, 3)));
}

#[test]
fn test_apply_move_moves_and_captures() {
    let mut board = Board::new();
    board.apply_move(Square(6, 4), Square(4, 4));
    assert!(board.is_empty(Square(6, 4)));
    assert_eq!(
        board.piece_at(Square(4, 4)),
        Some((Color::Light, Piece::Pawn))
    );

    // Capture overwrites the occupant and shrinks the piece count
    board.apply_move(Square(4, 4), Square(1, 4));
    assert_eq!(
        board.piece_at(Square(1, 4)),
        Some((Color::Light, Piece::Pawn))
    );
    assert_eq!(board.piece_count(), 31);

    // Moving from an empty square does nothing
    let before = board.clone();
    board.apply_move(Square(4, 4), Square(3, 4));
    assert_eq!(board, before);
}

#[test]
fn test_builder_places_and_replaces_pieces() {
    let board = BoardBuilder::new()
        .piece(Square(2, 2), Color::Dark, Piece::Bishop)
        .piece(Square(2, 2), Color::Light, Piece::Rook)
        .piece(Square(5, 5), Color::Dark, Piece::King)
        .clear(Square(5, 5))
        .build();
    assert_eq!(
        board.piece_at(Square(2, 2)),
        Some((Color::Light, Piece::Rook))
    );
    assert!(board.is_empty(Square(5, 5)));
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn test_builder_starting_position_matches_board_new() {
    assert_eq!(BoardBuilder::starting_position().build(), Board::new());
}

#[test]
fn test_square_notation_roundtrip() {
    assert_eq!("e2".parse::<Square>().unwrap(), Square(6, 4));
    assert_eq!("a8".parse::<Square>().unwrap(), Square(0, 0));
    assert_eq!("h1".parse::<Square>().unwrap(), Square(7, 7));
    assert_eq!(Square(6, 4).to_string(), "e2");
    assert_eq!(Square(0, 0).to_string(), "a8");

    assert!("e9".parse::<Square>().is_err());
    assert!("i2".parse::<Square>().is_err());
    assert!("e22".parse::<Square>().is_err());
    assert!(Square::try_from((8, 0)).is_err());
    assert!(Square::new(7, 7).is_some());
    assert!(Square::new(8, 0).is_none());
}
