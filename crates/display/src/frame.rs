use crate::{framebuffer::FrameBuffer, panel::Panel};
use oledstat_core::Result;
use std::ops::{Deref, DerefMut};
use tracing::warn;

/// A panel plus the buffer frames are drawn into.
#[derive(Debug)]
pub struct Screen<P> {
    buffer:  FrameBuffer,
    panel:   P,
    flushes: u64,
}

impl<P: Panel> Screen<P> {
    pub fn new(panel: P, width: u32, height: u32) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
            panel,
            flushes: 0,
        }
    }

    /// Start a new, blank frame.  The frame reaches the panel exactly once:
    /// on [`Frame::present`] or, failing that, when the guard is dropped.
    pub fn begin_frame(&mut self) -> Frame<'_, P> {
        self.buffer.clear();
        Frame {
            screen:    self,
            presented: false,
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// The last drawn frame.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Frames handed to the panel so far, failed ones included.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        self.panel.present(&self.buffer)
    }
}

/// Scoped drawing context for one frame.  Derefs to the [`FrameBuffer`].
pub struct Frame<'a, P: Panel> {
    screen:    &'a mut Screen<P>,
    presented: bool,
}

impl<P: Panel> Frame<'_, P> {
    /// Hand the frame to the panel, reporting panel errors.
    pub fn present(mut self) -> Result<()> {
        self.presented = true;
        self.screen.flush()
    }
}

impl<P: Panel> Deref for Frame<'_, P> {
    type Target = FrameBuffer;

    fn deref(&self) -> &FrameBuffer {
        &self.screen.buffer
    }
}

impl<P: Panel> DerefMut for Frame<'_, P> {
    fn deref_mut(&mut self) -> &mut FrameBuffer {
        &mut self.screen.buffer
    }
}

impl<P: Panel> Drop for Frame<'_, P> {
    fn drop(&mut self) {
        if self.presented {
            return;
        }
        if let Err(e) = self.screen.flush() {
            warn!("Presenting an abandoned frame failed: {e}");
        }
    }
}
