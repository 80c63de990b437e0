use crate::framebuffer::FrameBuffer;
use oledstat_core::Result;
use tracing::{debug, trace};

/// Physical (or pretend) display that shows finished frames.
pub trait Panel {
    /// Push a complete frame to the panel.
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;

    /// Set the panel contrast once at startup.  Panels without one ignore it.
    fn set_contrast(&mut self, _level: u8) -> Result<()> {
        Ok(())
    }
}

impl<P: Panel + ?Sized> Panel for Box<P> {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        (**self).present(frame)
    }

    fn set_contrast(&mut self, level: u8) -> Result<()> {
        (**self).set_contrast(level)
    }
}

/// Panel for running without hardware: frames go to the trace log.
#[derive(Debug, Default)]
pub struct HeadlessPanel {
    frames: u64,
}

impl HeadlessPanel {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Panel for HeadlessPanel {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.frames += 1;
        if tracing::enabled!(tracing::Level::TRACE) {
            trace!(frame = self.frames, "\n{}", frame.to_ascii());
        }
        Ok(())
    }

    fn set_contrast(&mut self, level: u8) -> Result<()> {
        debug!("Headless panel ignores contrast {level}");
        Ok(())
    }
}
