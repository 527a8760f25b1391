//! Gap interpolation between two selected points
//!
//! Only straight moves fill in the points they pass over: along a row,
//! along a column, or along a 45° diagonal. Any other jump selects just
//! its destination.

use crate::core::types::Coordinate;

/// Unit step from `from` toward `to` along one axis
#[inline]
fn step(from: usize, to: usize) -> isize {
    if from > to {
        -1
    } else {
        1
    }
}

#[inline]
fn advance(value: usize, step: isize) -> usize {
    value.wrapping_add_signed(step)
}

/// Cells strictly between `start` and `end`, ordered from `start` outward
///
/// Empty when the two points are equal, adjacent, or not aligned on a row,
/// column or diagonal.
pub fn interpolate(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    let d_row = start.row.abs_diff(end.row);
    let d_col = start.col.abs_diff(end.col);

    let (row_step, col_step) = if d_row == d_col && d_row > 0 {
        (step(start.row, end.row), step(start.col, end.col))
    } else if d_row == 0 && d_col > 0 {
        (0, step(start.col, end.col))
    } else if d_col == 0 && d_row > 0 {
        (step(start.row, end.row), 0)
    } else {
        return Vec::new();
    };

    let count = d_row.max(d_col) - 1;
    let mut gaps = Vec::with_capacity(count);
    let mut current = start;
    for _ in 0..count {
        current = Coordinate::new(advance(current.row, row_step), advance(current.col, col_step));
        gaps.push(current);
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_horizontal_gaps() {
        assert_eq!(interpolate(c(0, 0), c(0, 3)), vec![c(0, 1), c(0, 2)]);
        assert_eq!(interpolate(c(2, 3), c(2, 0)), vec![c(2, 2), c(2, 1)]);
    }

    #[test]
    fn test_vertical_gaps() {
        assert_eq!(interpolate(c(0, 1), c(3, 1)), vec![c(1, 1), c(2, 1)]);
        assert_eq!(interpolate(c(3, 1), c(1, 1)), vec![c(2, 1)]);
    }

    #[test]
    fn test_diagonal_gaps_all_directions() {
        assert_eq!(interpolate(c(0, 0), c(3, 3)), vec![c(1, 1), c(2, 2)]);
        assert_eq!(interpolate(c(3, 3), c(0, 0)), vec![c(2, 2), c(1, 1)]);
        assert_eq!(interpolate(c(0, 3), c(3, 0)), vec![c(1, 2), c(2, 1)]);
        assert_eq!(interpolate(c(3, 0), c(0, 3)), vec![c(2, 1), c(1, 2)]);
    }

    #[test]
    fn test_adjacent_has_no_gaps() {
        assert!(interpolate(c(1, 1), c(1, 2)).is_empty());
        assert!(interpolate(c(1, 1), c(2, 2)).is_empty());
        assert!(interpolate(c(1, 1), c(0, 1)).is_empty());
    }

    #[test]
    fn test_same_point_has_no_gaps() {
        assert!(interpolate(c(2, 2), c(2, 2)).is_empty());
    }

    #[test]
    fn test_knight_jump_has_no_gaps() {
        assert!(interpolate(c(0, 0), c(2, 1)).is_empty());
        assert!(interpolate(c(0, 0), c(1, 3)).is_empty());
        assert!(interpolate(c(3, 3), c(0, 1)).is_empty());
    }
}
