use embedded_graphics::{
    mono_font::{ascii::FONT_6X12, MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use oledstat_core::{Canvas, Result};
use std::convert::Infallible;

const FONT: &MonoFont<'static> = &FONT_6X12;

/// In-memory 1-bit frame, one `bool` per pixel, row-major.
///
/// Drawing outside the frame is clipped silently, which is what lets the
/// scroll layout draw a wrapped copy at a negative `y`.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width:  u32,
    height: u32,
    pixels: Vec<bool>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; (width * height) as usize],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// `true` if the pixel is lit; out-of-range coordinates read as dark.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.pixels[(y * self.width + x) as usize]
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    pub fn lit_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(move |(i, _)| (i as u32 % width, i as u32 / width))
    }

    /// Text dump for logs: `#` lit, `.` dark, one line per pixel row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.pixels.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|lit| if *lit { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                self.pixels[(y * self.width + x) as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

fn stroke() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

impl Canvas for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn glyph_height(&self) -> u32 {
        FONT.character_size.height
    }

    fn text(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        let style = MonoTextStyle::new(FONT, BinaryColor::On);
        infallible(Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self));
        Ok(())
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<()> {
        infallible(
            Line::new(Point::new(from.0, from.1), Point::new(to.0, to.1))
                .into_styled(stroke())
                .draw(self),
        );
        Ok(())
    }

    fn rectangle(&mut self, top_left: (i32, i32), bottom_right: (i32, i32)) -> Result<()> {
        infallible(
            Rectangle::with_corners(
                Point::new(top_left.0, top_left.1),
                Point::new(bottom_right.0, bottom_right.1),
            )
            .into_styled(stroke())
            .draw(self),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_set_pixels_and_clip() {
        let mut fb = FrameBuffer::new(16, 8);
        fb.line((3, 9), (3, -4)).unwrap();
        assert_eq!(fb.lit_count(), 8);
        assert!(fb.pixel(3, 0) && fb.pixel(3, 7));

        fb.clear();
        fb.rectangle((0, 0), (4, 2)).unwrap();
        // 5x3 outline = 5 + 5 + 1 + 1
        assert_eq!(fb.lit_count(), 12);
        assert!(!fb.pixel(2, 1));
    }

    #[test]
    fn text_uses_top_baseline() {
        let mut fb = FrameBuffer::new(32, 24);
        assert_eq!(fb.glyph_height(), 12);
        fb.text(0, 12, "8").unwrap();
        assert!(fb.lit_pixels().all(|(_, y)| (12..24).contains(&y)));
        assert!(fb.lit_count() > 0);

        fb.clear();
        fb.text(0, -30, "8").unwrap();
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn ascii_dump_has_one_row_per_line() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.line((0, 1), (2, 1)).unwrap();
        assert_eq!(fb.to_ascii(), "...\n###\n");
    }
}
