//! Screen geometry of the point grid
//!
//! Cells are square boxes laid out row-major from `origin`, separated by a
//! fixed gap. Rows grow downward (+y) and columns rightward (+x).

use glam::Vec2;

use crate::core::types::{Coordinate, GridSize};
use crate::render::colors::Theme;
use crate::render::HitTest;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub size: GridSize,
    /// Top-left corner of cell (0, 0), in screen pixels
    pub origin: Vec2,
    /// Side of one cell box, in pixels
    pub box_px: f32,
    /// Space between boxes, in pixels
    pub gap_px: f32,
}

impl GridLayout {
    pub fn new(size: GridSize, origin: Vec2, box_px: f32, gap_px: f32) -> Self {
        Self {
            size,
            origin,
            box_px,
            gap_px,
        }
    }

    /// Layout with box and gap sizes converted from the theme's rem lengths
    pub fn from_theme(size: GridSize, theme: &Theme, origin: Vec2) -> Self {
        Self::new(size, origin, theme.box_px(), theme.gap_px())
    }

    #[inline]
    fn pitch(&self) -> f32 {
        self.box_px + self.gap_px
    }

    /// Top-left corner of a cell's box
    pub fn cell_origin(&self, coord: Coordinate) -> Vec2 {
        self.origin + Vec2::new(coord.col as f32, coord.row as f32) * self.pitch()
    }

    /// Centre of a cell's box, where segments attach
    pub fn cell_center(&self, coord: Coordinate) -> Vec2 {
        self.cell_origin(coord) + Vec2::splat(self.box_px / 2.0)
    }

    /// Overall width and height covered by the grid
    pub fn extent(&self) -> Vec2 {
        let span = |n: usize| {
            if n == 0 {
                0.0
            } else {
                n as f32 * self.box_px + (n - 1) as f32 * self.gap_px
            }
        };
        Vec2::new(span(self.size.cols), span(self.size.rows))
    }

    /// Index of the box covering `offset` along one axis, if any
    fn axis_index(&self, offset: f32, count: usize) -> Option<usize> {
        if !offset.is_finite() || offset < 0.0 {
            return None;
        }
        let index = (offset / self.pitch()).floor();
        let within = offset - index * self.pitch();
        let index = index as usize;
        (index < count && within < self.box_px).then_some(index)
    }
}

impl HitTest for GridLayout {
    fn cell_at(&self, point: Vec2) -> Option<Coordinate> {
        let local = point - self.origin;
        let col = self.axis_index(local.x, self.size.cols)?;
        let row = self.axis_index(local.y, self.size.rows)?;
        Some(Coordinate::new(row, col))
    }
}
