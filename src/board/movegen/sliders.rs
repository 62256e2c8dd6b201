//! Rook, bishop, and queen move shapes.
//!
//! Any same-row, same-column, or same-diagonal destination is allowed at
//! any distance; intervening squares are never inspected.

use super::super::Square;

pub(crate) fn straight(from: Square, to: Square) -> bool {
    from.0 == to.0 || from.1 == to.1
}

pub(crate) fn diagonal(from: Square, to: Square) -> bool {
    let d_row = (to.0 as isize - from.0 as isize).abs();
    let d_col = (to.1 as isize - from.1 as isize).abs();
    d_row == d_col
}
