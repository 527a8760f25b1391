//! Path construction: which points a drag selects, in what order, and
//! whether the finished pattern has the expected length.

pub mod gaps;
pub mod gesture;
pub mod selection;
pub mod validator;

pub use gaps::interpolate;
pub use gesture::{GestureState, PatternGrid, PointerEvent};
pub use selection::{SelectionSequence, SelectionSink};
pub use validator::matches_target;
