use oledstat_config::LayoutConfig;
use oledstat_core::{Canvas, Result};

/// Pixel height of one column for a percent sample, floored and clamped to the bar.
pub fn column_height(percent: f32, bar_height: u32) -> i32 {
    let scaled = f64::from(percent) * f64::from(bar_height) / 100.0;
    scaled.floor().clamp(0.0, f64::from(bar_height)) as i32
}

/// Draw the bar frame with its top-left at `origin`, then one column per sample.
///
/// Columns run left to right oldest first and grow upwards from the frame's
/// bottom edge.  A zero-height column draws nothing.
pub fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    origin: (i32, i32),
    layout: &LayoutConfig,
    samples: &[f32],
) -> Result<()> {
    let (left, top) = origin;
    let bottom = top + layout.bar_height as i32;
    canvas.rectangle((left, top), (left + layout.bar_width as i32, bottom))?;

    for (i, value) in samples.iter().enumerate() {
        let height = column_height(*value, layout.bar_height);
        if height > 0 {
            let x = left + i as i32;
            canvas.line((x, bottom), (x, bottom - height))?;
        }
    }
    Ok(())
}
