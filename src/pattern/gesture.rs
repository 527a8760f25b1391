//! Drag gesture handling for a pattern grid
//!
//! A gesture is `Idle -> Dragging -> Idle`. Pressing a point starts a fresh
//! pattern; moving over new points extends it (filling straight-line gaps);
//! releasing or leaving the surface ends it and reports whether the pattern
//! reached its target length. Events that make no sense in the current
//! state are dropped.

use glam::Vec2;
use tracing::{debug, trace};

use crate::core::config::{GridSpec, PatternConfig};
use crate::core::error::Result;
use crate::core::types::{Coordinate, GridSize};
use crate::pattern::gaps::interpolate;
use crate::pattern::selection::{SelectionSequence, SelectionSink};
use crate::pattern::validator::matches_target;
use crate::render::colors::Theme;
use crate::render::{HitTest, PatternObserver, RenderSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// Most recently committed point
        last: Coordinate,
    },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }
}

/// Pointer input, in the renderer's screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed (mouse down / touch start)
    Down(Vec2),
    /// Pointer moved
    Move(Vec2),
    /// Pointer released (mouse up / touch end)
    Up,
    /// Pointer left the interactive surface, or the platform cancelled it
    Leave,
}

type BoxedObserver = Box<dyn PatternObserver>;

/// Render pass run after every selection change
struct Redraw<'a, R> {
    renderer: &'a mut R,
    live_segment: &'a mut bool,
    observer: &'a mut Option<BoxedObserver>,
}

impl<R: RenderSink> SelectionSink for Redraw<'_, R> {
    fn selection_changed(&mut self, points: &[Coordinate]) {
        if points.is_empty() {
            self.renderer.clear_all_taken();
        } else {
            for &point in points {
                self.renderer.set_taken(point, true);
            }
        }

        if let Some(&last) = points.last() {
            if *self.live_segment {
                self.renderer.commit_segment(last);
            }
            self.renderer.begin_live_segment(last);
            *self.live_segment = true;
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.on_pattern(points, false);
        }
    }
}

/// A pattern grid: selection, gesture state and the renderer drawing them
pub struct PatternGrid<R> {
    spec: GridSpec,
    renderer: R,
    selection: SelectionSequence,
    state: GestureState,
    /// Whether the renderer currently has an in-progress segment open
    live_segment: bool,
    /// Whether the last finished gesture fell short of (or overshot) the target
    invalid: bool,
    observer: Option<BoxedObserver>,
}

impl<R> PatternGrid<R>
where
    R: RenderSink + HitTest,
{
    /// Validate `config` and build a grid drawing through `renderer`
    pub fn new(config: &PatternConfig, renderer: R) -> Result<Self> {
        Ok(Self::from_spec(config.validate()?, renderer))
    }

    pub fn from_spec(spec: GridSpec, mut renderer: R) -> Self {
        renderer.apply_palette(&spec.theme.palette(false));
        debug!(
            rows = spec.size.rows,
            cols = spec.size.cols,
            target_length = spec.target_length,
            "pattern grid created"
        );
        Self {
            selection: SelectionSequence::new(spec.size),
            spec,
            renderer,
            state: GestureState::Idle,
            live_segment: false,
            invalid: false,
            observer: None,
        }
    }

    /// Install the observer, replacing any previous one
    pub fn subscribe(&mut self, observer: impl PatternObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn unsubscribe(&mut self) {
        self.observer = None;
    }

    /// Feed one pointer event through the gesture state machine
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(point) => match self.renderer.cell_at(point) {
                Some(cell) => self.start(cell),
                None => trace!(?point, "press outside any point"),
            },
            PointerEvent::Move(point) => self.move_to(point),
            PointerEvent::Up | PointerEvent::Leave => {
                self.end();
            }
        }
    }

    /// Begin a gesture on `cell`, discarding the previous pattern
    pub fn start(&mut self, cell: Coordinate) {
        if self.state.is_dragging() {
            debug!(%cell, "ignoring start while a gesture is active");
            return;
        }
        if !self.spec.size.contains(cell) {
            debug!(%cell, "ignoring start outside the grid");
            return;
        }

        self.clear_pattern();
        self.state = GestureState::Dragging { last: cell };
        self.append(cell);
        debug!(%cell, "gesture started");
    }

    /// Track the pointer and take any new point it reaches
    pub fn move_to(&mut self, point: Vec2) {
        let GestureState::Dragging { last } = self.state else {
            trace!("ignoring move while idle");
            return;
        };

        if self.live_segment {
            self.renderer.update_live_segment_endpoint(point);
        }

        let Some(cell) = self.renderer.cell_at(point) else {
            return;
        };
        if !self.spec.size.contains(cell) {
            trace!(%cell, "ignoring move onto off-grid cell");
            return;
        }
        if self.selection.contains(cell) {
            return;
        }

        for gap in interpolate(last, cell) {
            self.append(gap);
        }
        if self.append(cell) {
            self.state = GestureState::Dragging { last: cell };
            trace!(%cell, length = self.selection.len(), "point taken");
        }
    }

    /// Finish the gesture
    ///
    /// Returns `Some(true)` when the pattern has exactly the target length,
    /// `Some(false)` when it does not, and `None` if no gesture was active.
    pub fn end(&mut self) -> Option<bool> {
        if !self.state.is_dragging() {
            trace!("ignoring end while idle");
            return None;
        }

        if self.live_segment {
            self.renderer.remove_live_segment();
            self.live_segment = false;
        }
        self.state = GestureState::Idle;

        let complete = matches_target(self.selection.len(), self.spec.target_length);
        if !complete {
            self.invalid = true;
            self.renderer.apply_palette(&self.spec.theme.palette(true));
        }
        debug!(
            length = self.selection.len(),
            target_length = self.spec.target_length,
            complete,
            "gesture ended"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer.on_pattern(self.selection.points(), !complete);
        }
        Some(complete)
    }

    /// Clear the pattern and its visuals, abandoning any active gesture
    ///
    /// An abandoned gesture gets no end notification.
    pub fn reset(&mut self) {
        if self.state.is_dragging() {
            debug!("abandoning active gesture on reset");
        }
        self.state = GestureState::Idle;
        self.clear_pattern();
    }

    fn clear_pattern(&mut self) {
        self.invalid = false;
        self.renderer.apply_palette(&self.spec.theme.palette(false));

        let Self {
            selection,
            renderer,
            live_segment,
            observer,
            ..
        } = self;
        selection.reset(&mut Redraw {
            renderer,
            live_segment,
            observer,
        });

        self.renderer.clear_segments();
        self.live_segment = false;
    }

    fn append(&mut self, cell: Coordinate) -> bool {
        let Self {
            selection,
            renderer,
            live_segment,
            observer,
            ..
        } = self;
        selection.append(
            cell,
            &mut Redraw {
                renderer,
                live_segment,
                observer,
            },
        )
    }
}

impl<R> PatternGrid<R> {
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Selected points in path order
    pub fn selection(&self) -> &[Coordinate] {
        self.selection.points()
    }

    pub fn size(&self) -> GridSize {
        self.spec.size
    }

    pub fn target_length(&self) -> usize {
        self.spec.target_length
    }

    pub fn theme(&self) -> &Theme {
        &self.spec.theme
    }

    /// Whether the grid is showing a failed pattern
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
