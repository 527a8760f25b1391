//! Rendering seams for the pattern grid
//!
//! The path engine never draws or measures anything itself. It pushes
//! visual updates through a `RenderSink`, asks a `HitTest` which cell lies
//! under the pointer, and reports selection changes to a `PatternObserver`.

pub mod colors;
pub mod layout;
pub mod recording;

use glam::Vec2;

use crate::core::types::Coordinate;
use colors::Palette;

pub use colors::{Color, ColorScheme, Theme, VertexSize};
pub use layout::GridLayout;
pub use recording::{RecordingRenderer, RenderCommand};

/// Drawing operations the path engine issues
pub trait RenderSink {
    /// Mark a point as part of (or not part of) the current pattern.
    fn set_taken(&mut self, coord: Coordinate, taken: bool);

    /// Clear the "taken" mark from every point.
    fn clear_all_taken(&mut self);

    /// Open a new in-progress segment anchored at `from`.
    fn begin_live_segment(&mut self, from: Coordinate);

    /// Move the free end of the in-progress segment to a screen position.
    fn update_live_segment_endpoint(&mut self, point: Vec2);

    /// Pin the free end of the in-progress segment to the centre of `to`.
    fn commit_segment(&mut self, to: Coordinate);

    /// Discard the in-progress segment, leaving committed segments alone.
    fn remove_live_segment(&mut self);

    /// Remove every segment, committed or not.
    fn clear_segments(&mut self);

    /// Switch the colours used for points and lines.
    fn apply_palette(&mut self, palette: &Palette);
}

/// Screen-space lookup from pointer position to grid cell
pub trait HitTest {
    fn cell_at(&self, point: Vec2) -> Option<Coordinate>;
}

/// Receives the selection after every change
///
/// `invalid` is `false` for every mid-gesture change and carries the
/// length check once more when a gesture ends.
pub trait PatternObserver {
    fn on_pattern(&mut self, points: &[Coordinate], invalid: bool);
}

impl<F> PatternObserver for F
where
    F: FnMut(&[Coordinate], bool),
{
    fn on_pattern(&mut self, points: &[Coordinate], invalid: bool) {
        self(points, invalid)
    }
}
