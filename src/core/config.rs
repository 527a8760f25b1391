//! Grid configuration
//!
//! A `PatternConfig` is what callers write (by hand or in TOML); `validate`
//! resolves it into a `GridSpec`, which is what a grid is built from.
//! Invalid configuration is the only failure a grid can report, and it is
//! reported here, before any grid exists.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{PatternError, Result};
use crate::core::types::GridSize;
use crate::render::colors::Theme;

/// User-facing grid configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    /// Number of point rows
    pub rows: usize,
    /// Number of point columns
    pub cols: usize,
    /// Points a complete pattern must contain
    ///
    /// `None` means every point on the grid. Values above the point count
    /// are clamped down to it; values below 1 are rejected.
    pub target_length: Option<i64>,
    /// Presentation settings handed to the renderer
    pub theme: Theme,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            target_length: None,
            theme: Theme::default(),
        }
    }
}

/// Validated, resolved grid parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub size: GridSize,
    /// Always within `1..=size.cell_count()`
    pub target_length: usize,
    pub theme: Theme,
}

impl PatternConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_target_length(mut self, target_length: i64) -> Self {
        self.target_length = Some(target_length);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Parse a config from TOML text
    ///
    /// Unknown colour schemes and size presets fail here, as parse errors.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate and resolve into a `GridSpec`
    pub fn validate(&self) -> Result<GridSpec> {
        let invalid_dimensions = || PatternError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid_dimensions());
        }
        let cell_count = self.rows.checked_mul(self.cols).ok_or_else(invalid_dimensions)?;
        let size = GridSize::new(self.rows, self.cols);

        let target_length = match self.target_length {
            None => cell_count,
            Some(n) if n < 1 => return Err(PatternError::InvalidTargetLength(n)),
            Some(n) => usize::try_from(n).map_or(cell_count, |n| n.min(cell_count)),
        };

        self.theme.validate()?;

        Ok(GridSpec {
            size,
            target_length,
            theme: self.theme.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors::{ColorScheme, VertexSize};

    #[test]
    fn test_default_config_is_valid() {
        let spec = PatternConfig::default().validate().unwrap();
        assert_eq!(spec.size, GridSize::new(3, 3));
        assert_eq!(spec.target_length, 9);
    }

    #[test]
    fn test_target_length_clamped_to_cell_count() {
        let spec = PatternConfig::new(2, 2).with_target_length(10).validate().unwrap();
        assert_eq!(spec.target_length, 4);
    }

    #[test]
    fn test_target_length_kept_when_in_range() {
        let spec = PatternConfig::new(4, 4).with_target_length(4).validate().unwrap();
        assert_eq!(spec.target_length, 4);
    }

    #[test]
    fn test_non_positive_target_rejected() {
        for bad in [0, -3] {
            let err = PatternConfig::new(3, 3).with_target_length(bad).validate().unwrap_err();
            assert!(matches!(err, PatternError::InvalidTargetLength(n) if n == bad));
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = PatternConfig::new(0, 3).validate().unwrap_err();
        assert!(matches!(err, PatternError::InvalidDimensions { rows: 0, cols: 3 }));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let err = PatternConfig::new(usize::MAX, 2).validate().unwrap_err();
        assert!(matches!(err, PatternError::InvalidDimensions { rows: usize::MAX, cols: 2 }));
    }

    #[test]
    fn test_huge_grid_validates_without_allocating() {
        let spec = PatternConfig::new(1 << 15, 1 << 15).with_target_length(4).validate().unwrap();
        assert_eq!(spec.target_length, 4);
        let selection = crate::pattern::SelectionSequence::new(spec.size);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let config = PatternConfig::from_toml_str(
            r#"
            rows = 4
            cols = 5
            target_length = 6

            [theme]
            color_scheme = "gray"
            vertex_size = "sm"
            "#,
        )
        .unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 5);
        assert_eq!(config.target_length, Some(6));
        assert_eq!(config.theme.color_scheme, ColorScheme::Gray);
        assert_eq!(config.theme.vertex_size, VertexSize::Sm);
        assert_eq!(config.theme.box_size, 3.0);
    }

    #[test]
    fn test_unknown_color_scheme_rejected() {
        let err = PatternConfig::from_toml_str(
            r#"
            [theme]
            color_scheme = "purple"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = PatternConfig::load("data/patterns/does_not_exist.toml").unwrap_err();
        assert!(matches!(err, PatternError::ConfigRead { .. }));
    }
}
