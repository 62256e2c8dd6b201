use super::super::Square;

pub(crate) fn knight_shape(from: Square, to: Square) -> bool {
    let d_row = (to.0 as isize - from.0 as isize).abs();
    let d_col = (to.1 as isize - from.1 as isize).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
