//! Board occupancy state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

/// The 8x8 grid of piece occupancy.
///
/// A square holds at most one piece or none. The grid carries no turn,
/// check, or king-count invariants; the only sanctioned mutations are
/// `set_piece`, `clear_square`, and `apply_move`.
///
/// Indexing a square outside the 8x8 range is a caller error and panics;
/// the legality engine validates ranges before indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Create a board with the standard starting position.
    ///
    /// Dark pieces fill rows 0 and 1, light pieces mirror them on rows 6
    /// and 7, everything else is empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
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
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::Dark, *piece);
            board.set_piece(Square(7, file), Color::Light, *piece);
            board.set_piece(Square(1, file), Color::Dark, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Light, Piece::Pawn);
        }
        board
    }

    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the occupant of a square, or `None` if it is empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.0][square.1]
    }

    /// Get the color of the occupant of a square, if any.
    #[inline]
    #[must_use]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|(color, _)| color)
    }

    /// Whether a square holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place a piece on a square, overwriting any occupant.
    #[inline]
    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.0][square.1] = Some((color, piece));
    }

    /// Remove the occupant of a square, if any.
    #[inline]
    pub fn clear_square(&mut self, square: Square) {
        self.squares[square.0][square.1] = None;
    }

    /// Move the occupant of `from` onto `to`, overwriting any capture.
    ///
    /// Does nothing when `from` is empty.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        if let Some((color, piece)) = self.piece_at(from) {
            self.set_piece(to, color, piece);
            self.clear_square(from);
        }
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|occ| occ.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
