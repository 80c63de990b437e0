//! Layout and drawing engine for the OLED frame.
//!
//! Turns the widgets' [`Line`]s into draw calls on a [`Canvas`], moving every
//! element a little each cycle so no pixel stays lit in the same place:
//! - [`LayoutOffset`] decides where each row lands this cycle
//! - [`histogram`] draws the framed bar graph for rows that carry a history

pub mod histogram;
pub mod layout;

pub use layout::LayoutOffset;

use oledstat_config::LayoutConfig;
use oledstat_core::{Canvas, Line, Result, StatError};

/// Draws complete frames for a fixed [`LayoutConfig`].
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    layout: LayoutConfig,
}

impl FrameRenderer {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Draw every line at the positions `offset` assigns this cycle.
    ///
    /// Line `i` belongs to row slot `i`; there must be no more lines than slots.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        lines: &[Line],
        offset: &LayoutOffset,
    ) -> Result<()> {
        let slots = self.layout.line_anchors.len();
        if lines.len() > slots {
            return Err(StatError::Layout(format!(
                "{} lines do not fit {slots} row slots",
                lines.len()
            )));
        }

        let height = canvas.height();
        let glyph_height = canvas.glyph_height();
        let figure_x = self.layout.margin_x_figure as i32;
        let bar_x = self.layout.margin_x_bar as i32;

        for (row, line) in lines.iter().enumerate() {
            for (x, y) in offset.origins(&self.layout, row, 0, glyph_height, height) {
                canvas.text(x, y, &line.label)?;
                if let Some(figure) = &line.figure {
                    canvas.text(x + figure_x, y, figure)?;
                }
            }

            if let Some(samples) = &line.history {
                let top = self.layout.bar_margin_top;
                let bar_height = self.layout.bar_height;
                for (x, y) in offset.origins(&self.layout, row, top, bar_height, height) {
                    histogram::draw(canvas, (x + bar_x, y), &self.layout, samples)?;
                }
            }
        }

        tracing::trace!(lines = lines.len(), ?offset, "frame rendered");
        Ok(())
    }
}
