//! Text paint configuration
//!
//! Style of the time readout. The engine configures this once at creation
//! and only ever touches the anti-alias flag afterwards (low-bit ambient
//! displays blend colors badly, so anti-aliasing is dropped while ambient).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Horizontal anchoring of drawn text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Paint for the time readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextPaint {
    /// Opaque text color
    pub color: Rgb565,
    /// Stroke width in pixels
    pub stroke_width: u16,
    /// Nominal glyph height in pixels
    pub size: u16,
    pub align: TextAlign,
    /// Whether glyph edges are smoothed; canvases without anti-aliasing
    /// support may ignore this
    pub anti_alias: bool,
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            color: Rgb565::BLACK,
            stroke_width: 2,
            size: 50,
            align: TextAlign::Center,
            anti_alias: true,
        }
    }
}
