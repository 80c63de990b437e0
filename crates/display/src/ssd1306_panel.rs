//! SSD1306 128x64 OLED over Linux I2C.

use crate::{framebuffer::FrameBuffer, panel::Panel};
use linux_embedded_hal::I2cdev;
use oledstat_core::{Result, StatError};
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};
use tracing::info;

type Driver = Ssd1306<I2CInterface<I2cdev>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct Ssd1306Panel {
    driver: Driver,
}

impl Ssd1306Panel {
    /// Open the I2C bus and initialise the controller.
    pub fn open(bus: &str, address: u8) -> Result<Self> {
        let i2c = I2cdev::new(bus)
            .map_err(|e| StatError::Display(format!("cannot open '{bus}': {e}")))?;

        let interface = match address {
            0x3C => I2CDisplayInterface::new(i2c),
            0x3D => I2CDisplayInterface::new_alternate_address(i2c),
            other => {
                return Err(StatError::Config(format!(
                    "unsupported SSD1306 address {other:#04x} (expected 0x3c or 0x3d)"
                )))
            }
        };

        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init().map_err(display_err)?;

        info!("SSD1306 ready on {bus} at {address:#04x}");
        Ok(Self { driver })
    }
}

fn display_err(e: impl std::fmt::Debug) -> StatError {
    StatError::Display(format!("{e:?}"))
}

impl Panel for Ssd1306Panel {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.driver.clear_buffer();
        for (x, y) in frame.lit_pixels() {
            self.driver.set_pixel(x, y, true);
        }
        self.driver.flush().map_err(display_err)
    }

    fn set_contrast(&mut self, level: u8) -> Result<()> {
        self.driver
            .set_brightness(Brightness::custom(1, level))
            .map_err(display_err)
    }
}
