use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn pawn_move_allowed(&self, color: Color, from: Square, to: Square) -> bool {
        let dir = color.forward();
        let d_row = to.0 as isize - from.0 as isize;
        let d_col = to.1 as isize - from.1 as isize;

        // Single push onto an empty square
        if d_col == 0 && d_row == dir && self.is_empty(to) {
            return true;
        }

        // Diagonal capture; the caller already rejected same-colored
        // targets, so any occupant here is an opposing piece
        if d_col.abs() == 1 && d_row == dir && self.piece_at(to).is_some() {
            return true;
        }

        // Double push from the home row; the skipped square is not inspected
        if d_col == 0 && d_row == 2 * dir && from.0 == color.pawn_home_row() && self.is_empty(to) {
            return true;
        }

        false
    }
}
