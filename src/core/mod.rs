pub mod config;
pub mod error;
pub mod types;

pub use config::{GridSpec, PatternConfig};
pub use error::{PatternError, Result};
pub use types::{Coordinate, GridSize};
