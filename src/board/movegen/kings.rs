use super::super::Square;

pub(crate) fn king_shape(from: Square, to: Square) -> bool {
    let d_row = (to.0 as isize - from.0 as isize).abs();
    let d_col = (to.1 as isize - from.1 as isize).abs();
    d_row <= 1 && d_col <= 1
}
