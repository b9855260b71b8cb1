//! Draw surface trait
//!
//! Provides a hardware-agnostic interface for painting the watch face.
//! Implementations handle the specifics of the display driver; the engine
//! only issues fills, blits, and text draws.

use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;

use crate::render::bitmap::Bitmap;
use crate::render::paint::TextPaint;

/// Draw surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError {
    /// Communication error with the display
    Communication,
    /// Coordinates or dimensions outside the surface
    OutOfBounds,
}

/// Draw surface trait
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Fill the whole surface with a solid color
    fn fill(&mut self, color: Rgb565) -> Result<(), DrawError>;

    /// Copy a bitmap onto the surface with its top-left corner at `origin`
    fn blit(&mut self, bitmap: &Bitmap, origin: Point) -> Result<(), DrawError>;

    /// Draw a line of text
    ///
    /// The meaning of `anchor` follows `paint.align`: for
    /// `TextAlign::Center` it is the horizontal midpoint of the rendered
    /// text; the vertical coordinate is the text baseline.
    fn draw_text(&mut self, text: &str, anchor: Point, paint: &TextPaint) -> Result<(), DrawError>;
}
