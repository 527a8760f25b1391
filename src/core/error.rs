use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid grid dimensions: {rows}x{cols} (both must be at least 1)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Invalid target length: {0} (must be at least 1)")]
    InvalidTargetLength(i64),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;
