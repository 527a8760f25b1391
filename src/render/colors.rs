//! Colour schemes and the presentation theme handed to renderers

use serde::{Deserialize, Serialize};

use crate::core::error::{PatternError, Result};

/// RGBA colour, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgba((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xff)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Float channels in 0.0..=1.0, for GPU-style consumers
    pub fn to_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Colours used to draw one visual state of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Filled point (shade 600)
    pub point: Color,
    /// Connecting line (shade 400)
    pub line: Color,
    /// Translucent ring around a taken point (shade 200)
    pub halo: Color,
}

/// Named colour schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Green,
    Red,
    Gray,
}

const GREEN: Palette = Palette {
    point: Color::hex(0x217c02),
    line: Color::hex(0x30ab32),
    halo: Color::hex(0x2f7705).with_alpha(0x60),
};

const RED: Palette = Palette {
    point: Color::hex(0xa70000),
    line: Color::hex(0xee3232),
    halo: Color::hex(0xa70000).with_alpha(0x60),
};

const GRAY: Palette = Palette {
    point: Color::hex(0x454343),
    line: Color::hex(0xadadad),
    halo: Color::hex(0x000000).with_alpha(0x52),
};

impl ColorScheme {
    pub fn palette(&self) -> Palette {
        match self {
            ColorScheme::Green => GREEN,
            ColorScheme::Red => RED,
            ColorScheme::Gray => GRAY,
        }
    }

    #[cfg(test)]
    fn all() -> [ColorScheme; 3] {
        [ColorScheme::Green, ColorScheme::Red, ColorScheme::Gray]
    }
}

/// Point size presets, expressed as the root font size rem lengths scale from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexSize {
    Sm,
    Md,
    #[default]
    Lg,
}

impl VertexSize {
    /// Pixels per rem
    pub fn root_font_px(&self) -> f32 {
        match self {
            VertexSize::Sm => 10.0,
            VertexSize::Md => 16.0,
            VertexSize::Lg => 20.0,
        }
    }
}

/// Presentation settings passed to a renderer at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub color_scheme: ColorScheme,
    pub vertex_size: VertexSize,
    /// Side of one point's box, in rem
    pub box_size: f32,
    /// Space between neighbouring boxes, in rem
    pub gap: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Green,
            vertex_size: VertexSize::Lg,
            box_size: 3.0,
            gap: 2.0,
        }
    }
}

impl Theme {
    /// Palette for the current visual state; a failed pattern is always red
    pub fn palette(&self, invalid: bool) -> Palette {
        if invalid {
            ColorScheme::Red.palette()
        } else {
            self.color_scheme.palette()
        }
    }

    pub fn rem_px(&self) -> f32 {
        self.vertex_size.root_font_px()
    }

    pub fn box_px(&self) -> f32 {
        self.box_size * self.rem_px()
    }

    pub fn gap_px(&self) -> f32 {
        self.gap * self.rem_px()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.box_size.is_finite() && self.box_size > 0.0) {
            return Err(PatternError::InvalidTheme(format!(
                "box_size must be positive, got {}",
                self.box_size
            )));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(PatternError::InvalidTheme(format!(
                "gap must be non-negative, got {}",
                self.gap
            )));
        }
        Ok(())
    }
}
