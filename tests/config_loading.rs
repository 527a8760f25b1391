//! Config file loading and grid construction

use glam::Vec2;
use pattern_lock::render::{ColorScheme, GridLayout, RecordingRenderer, VertexSize};
use pattern_lock::{GridSize, PatternConfig, PatternError, PatternGrid};

#[test]
fn test_load_default_pattern_config() {
    let config = PatternConfig::load("data/patterns/default.toml").expect("Should load default config");
    let spec = config.validate().unwrap();
    assert_eq!(spec.size, GridSize::new(3, 3));
    assert_eq!(spec.target_length, 4);
    assert_eq!(spec.theme.color_scheme, ColorScheme::Green);
    assert_eq!(spec.theme.vertex_size, VertexSize::Lg);
}

#[test]
fn test_grid_rejects_invalid_target() {
    let config = PatternConfig::new(3, 3).with_target_length(0);
    let layout = GridLayout::new(GridSize::new(3, 3), Vec2::ZERO, 10.0, 10.0);
    let result = PatternGrid::new(&config, RecordingRenderer::new(layout));
    assert!(matches!(result, Err(PatternError::InvalidTargetLength(0))));
}

#[test]
fn test_grid_applies_theme_palette_on_creation() {
    let config = PatternConfig::from_toml_str(
        r#"
        rows = 2
        cols = 2

        [theme]
        color_scheme = "gray"
        "#,
    )
    .unwrap();
    let layout = GridLayout::new(GridSize::new(2, 2), Vec2::ZERO, 10.0, 10.0);
    let grid = PatternGrid::new(&config, RecordingRenderer::new(layout)).unwrap();
    assert_eq!(grid.target_length(), 4);
    assert_eq!(grid.renderer().palette(), Some(&ColorScheme::Gray.palette()));
}

#[test]
fn test_unknown_field_rejected() {
    let err = PatternConfig::from_toml_str("rows = 3\nsize = 9\n").unwrap_err();
    assert!(matches!(err, PatternError::ConfigParse(_)));
}
