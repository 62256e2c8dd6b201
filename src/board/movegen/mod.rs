//! Simplified move legality.
//!
//! Legality is move-shape validity plus the same-color-destination
//! exclusion, nothing more. Sliding pieces do not test the squares they
//! pass over, there is no check safety, and no turn is tracked. These
//! gaps are deliberate and pinned by the test suite.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Piece, Square};

impl Board {
    /// Decide whether moving the occupant of `from` onto `to` is allowed.
    ///
    /// Destinations outside the 8x8 range are illegal, as are empty
    /// sources and same-colored targets. Moving a piece onto its own
    /// square is rejected by the same-color rule, since the mover
    /// occupies the source. `from` must be in range.
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if !to.in_bounds() {
            return false;
        }
        let (color, piece) = match self.piece_at(from) {
            Some(occupant) => occupant,
            None => return false,
        };
        if self.color_at(to) == Some(color) {
            return false;
        }

        match piece {
            Piece::Pawn => self.pawn_move_allowed(color, from, to),
            Piece::Knight => knights::knight_shape(from, to),
            Piece::Bishop => sliders::diagonal(from, to),
            Piece::Rook => sliders::straight(from, to),
            Piece::Queen => sliders::straight(from, to) || sliders::diagonal(from, to),
            Piece::King => kings::king_shape(from, to),
        }
    }

    /// All squares the occupant of `from` may legally move to.
    ///
    /// Scans the full grid in row-major order (row 0..7, then column 0..7
    /// within each row), so the result is deterministic and duplicate-free.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut destinations = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let to = Square(row, col);
                if self.is_legal(from, to) {
                    destinations.push(to);
                }
            }
        }
        destinations
    }
}
