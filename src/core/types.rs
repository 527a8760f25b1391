//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell identifier: `row` counts down, `col` counts across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of king moves between two cells
    pub fn chebyshev_distance(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions, fixed for the lifetime of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of points on the grid, saturating at `usize::MAX`
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// All coordinates in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coordinate::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_equality_by_value() {
        assert_eq!(Coordinate::new(1, 2), Coordinate::from((1, 2)));
        assert_ne!(Coordinate::new(1, 2), Coordinate::new(2, 1));
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = Coordinate::new(0, 0);
        assert_eq!(a.chebyshev_distance(&Coordinate::new(0, 3)), 3);
        assert_eq!(a.chebyshev_distance(&Coordinate::new(2, 1)), 2);
        assert_eq!(a.chebyshev_distance(&a), 0);
    }

    #[test]
    fn test_grid_contains() {
        let size = GridSize::new(3, 4);
        assert!(size.contains(Coordinate::new(2, 3)));
        assert!(!size.contains(Coordinate::new(3, 0)));
        assert!(!size.contains(Coordinate::new(0, 4)));
        assert_eq!(size.cell_count(), 12);
    }

    #[test]
    fn test_cell_count_saturates() {
        assert_eq!(GridSize::new(usize::MAX, 2).cell_count(), usize::MAX);
    }

    #[test]
    fn test_grid_coordinates_row_major() {
        let coords: Vec<_> = GridSize::new(2, 2).coordinates().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }
}
