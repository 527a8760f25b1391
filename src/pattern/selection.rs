//! Ordered, duplicate-free record of the points a pattern has taken
//!
//! Mutation goes through `append` and `reset`, each of which hands the
//! updated sequence to a `SelectionSink` before returning. Rejected
//! mutations (duplicates, off-grid points, resetting an empty sequence)
//! change nothing and notify nobody.

use tracing::trace;

use crate::core::types::{Coordinate, GridSize};

/// Receives the full sequence after each successful mutation
pub trait SelectionSink {
    fn selection_changed(&mut self, points: &[Coordinate]);
}

#[derive(Debug, Clone)]
pub struct SelectionSequence {
    size: GridSize,
    points: Vec<Coordinate>,
}

impl SelectionSequence {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            points: Vec::new(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Add a point to the end of the path
    ///
    /// Returns `false` without notifying when the point is off the grid or
    /// already taken.
    pub fn append<S>(&mut self, coord: Coordinate, sink: &mut S) -> bool
    where
        S: SelectionSink + ?Sized,
    {
        if !self.size.contains(coord) {
            trace!(%coord, "ignoring off-grid point");
            return false;
        }
        if self.contains(coord) {
            trace!(%coord, "ignoring already taken point");
            return false;
        }
        self.points.push(coord);
        sink.selection_changed(&self.points);
        true
    }

    /// Drop every point
    ///
    /// Returns `false` without notifying when there was nothing to clear.
    pub fn reset<S>(&mut self, sink: &mut S) -> bool
    where
        S: SelectionSink + ?Sized,
    {
        if self.points.is_empty() {
            return false;
        }
        self.points.clear();
        sink.selection_changed(&self.points);
        true
    }

    /// Linear scan; grids are small
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.points.iter().any(|&p| p == coord)
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in path order
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }
}
