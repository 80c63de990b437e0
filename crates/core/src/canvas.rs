use crate::Result;

/// Pixel drawing surface for one frame.
///
/// Coordinates may fall outside the surface; implementations clip.  Every
/// primitive draws in the single "on" colour of a monochrome panel.
pub trait Canvas {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Height of one rendered text line.
    fn glyph_height(&self) -> u32;

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn text(&mut self, x: i32, y: i32, text: &str) -> Result<()>;

    /// Draw a one-pixel line between two points (inclusive).
    fn line(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<()>;

    /// Draw the one-pixel outline of the rectangle spanning both corners (inclusive).
    fn rectangle(&mut self, top_left: (i32, i32), bottom_right: (i32, i32)) -> Result<()>;
}
