//! Pattern Lock - path construction engine for pattern-lock grids
//!
//! A drag over an N×M grid of points becomes an ordered, duplicate-free
//! list of coordinates. Straight moves pick up the points they pass over,
//! and a finished gesture is checked against a target length. Drawing and
//! hit-testing stay behind the traits in [`render`].

pub mod core;
pub mod pattern;
pub mod render;

pub use crate::core::{Coordinate, GridSize, GridSpec, PatternConfig, PatternError, Result};
pub use crate::pattern::{interpolate, GestureState, PatternGrid, PointerEvent};
pub use crate::render::{HitTest, PatternObserver, RenderSink};
