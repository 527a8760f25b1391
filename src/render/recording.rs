//! In-memory renderer
//!
//! Keeps the visual state a real renderer would show (taken points,
//! committed segments, the live segment, the active palette) and logs every
//! call it receives. The demo binary prints it as text; tests inspect it.

use std::collections::HashSet;
use std::fmt::Write as _;

use glam::Vec2;

use crate::core::types::Coordinate;
use crate::render::colors::Palette;
use crate::render::layout::GridLayout;
use crate::render::{HitTest, RenderSink};

/// One call received by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    SetTaken(Coordinate, bool),
    ClearAllTaken,
    BeginLiveSegment(Coordinate),
    UpdateLiveSegmentEndpoint(Vec2),
    CommitSegment(Coordinate),
    RemoveLiveSegment,
    ClearSegments,
    ApplyPalette(Palette),
}

/// The in-progress segment: a fixed anchor and a free end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSegment {
    pub from: Coordinate,
    pub end: Vec2,
}

#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    layout: GridLayout,
    taken: HashSet<Coordinate>,
    segments: Vec<(Coordinate, Coordinate)>,
    live: Option<LiveSegment>,
    palette: Option<Palette>,
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            taken: HashSet::new(),
            layout,
            segments: Vec::new(),
            live: None,
            palette: None,
            commands: Vec::new(),
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn is_taken(&self, coord: Coordinate) -> bool {
        self.taken.contains(&coord)
    }

    pub fn taken_count(&self) -> usize {
        self.taken.len()
    }

    /// Committed segments in drawing order
    pub fn segments(&self) -> &[(Coordinate, Coordinate)] {
        &self.segments
    }

    pub fn live_segment(&self) -> Option<LiveSegment> {
        self.live
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drain the command log
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text view of the grid: `o` for taken points, `.` for free ones
    pub fn ascii(&self) -> String {
        let size = self.layout.size;
        let mut out = String::new();
        for row in 0..size.rows {
            for col in 0..size.cols {
                if col > 0 {
                    out.push(' ');
                }
                out.push(if self.is_taken(Coordinate::new(row, col)) { 'o' } else { '.' });
            }
            out.push('\n');
        }
        if !self.segments.is_empty() {
            let path: Vec<String> = self.segments.iter().map(|(a, b)| format!("{a}->{b}")).collect();
            let _ = writeln!(out, "segments: {}", path.join(" "));
        }
        out
    }
}

impl RenderSink for RecordingRenderer {
    fn set_taken(&mut self, coord: Coordinate, taken: bool) {
        self.commands.push(RenderCommand::SetTaken(coord, taken));
        if !self.layout.size.contains(coord) {
            return;
        }
        if taken {
            self.taken.insert(coord);
        } else {
            self.taken.remove(&coord);
        }
    }

    fn clear_all_taken(&mut self) {
        self.commands.push(RenderCommand::ClearAllTaken);
        self.taken.clear();
    }

    fn begin_live_segment(&mut self, from: Coordinate) {
        self.commands.push(RenderCommand::BeginLiveSegment(from));
        self.live = Some(LiveSegment {
            from,
            end: self.layout.cell_center(from),
        });
    }

    fn update_live_segment_endpoint(&mut self, point: Vec2) {
        self.commands.push(RenderCommand::UpdateLiveSegmentEndpoint(point));
        if let Some(live) = self.live.as_mut() {
            live.end = point;
        }
    }

    fn commit_segment(&mut self, to: Coordinate) {
        self.commands.push(RenderCommand::CommitSegment(to));
        if let Some(live) = self.live.take() {
            self.segments.push((live.from, to));
        }
    }

    fn remove_live_segment(&mut self) {
        self.commands.push(RenderCommand::RemoveLiveSegment);
        self.live = None;
    }

    fn clear_segments(&mut self) {
        self.commands.push(RenderCommand::ClearSegments);
        self.segments.clear();
        self.live = None;
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.commands.push(RenderCommand::ApplyPalette(*palette));
        self.palette = Some(*palette);
    }
}

impl HitTest for RecordingRenderer {
    fn cell_at(&self, point: Vec2) -> Option<Coordinate> {
        self.layout.cell_at(point)
    }
}
