//! OLED output for `oledstat`.
//!
//! Owns the display loop and wires together:
//! - the host metrics sampler (CPU, memory, disk, temperature, network)
//! - the widgets and frame renderer
//! - the panel driver (headless, or SSD1306 with the `ssd1306` feature)

pub mod frame;
pub mod framebuffer;
pub mod panel;
pub mod session;
#[cfg(feature = "ssd1306")]
pub mod ssd1306_panel;

pub use frame::{Frame, Screen};
pub use framebuffer::FrameBuffer;
pub use panel::{HeadlessPanel, Panel};
pub use session::{Session, Ticker, TokioTicker};

use oledstat_config::{default_path, load as load_config, DisplayConfig, Driver};
use oledstat_core::Result;
use oledstat_system::SysinfoSource;
use tracing::{error, info};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the display loop.  Returns only on Ctrl-C or a fatal error.
pub fn run() -> Result<()> {
    let config = load_config(default_path()).unwrap_or_else(|e| {
        error!("{e}; using defaults");
        Default::default()
    });

    info!(
        driver = ?config.display.driver,
        strategy = ?config.layout.strategy,
        interval_ms = config.monitor.interval_ms,
        interface = %config.monitor.interface,
        "Starting display loop"
    );

    let mut panel = open_panel(&config.display)?;
    if let Some(level) = config.display.contrast {
        panel.set_contrast(level)?;
    }
    let source = SysinfoSource::new(config.monitor.temperature);
    let mut session = Session::new(&config, source, panel, TokioTicker)?;

    // Single-threaded: the loop only ever yields while sleeping between frames.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        tokio::select! {
            result = session.run(None) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted; stopping");
                Ok(())
            }
        }
    })
}

fn open_panel(display: &DisplayConfig) -> Result<Box<dyn Panel>> {
    match display.driver {
        Driver::Headless => Ok(Box::new(HeadlessPanel::default())),
        #[cfg(feature = "ssd1306")]
        Driver::Ssd1306 => Ok(Box::new(ssd1306_panel::Ssd1306Panel::open(
            &display.i2c_bus,
            display.i2c_address,
        )?)),
        #[cfg(not(feature = "ssd1306"))]
        Driver::Ssd1306 => Err(oledstat_core::StatError::Config(
            "driver \"ssd1306\" needs a build with the `ssd1306` feature".to_string(),
        )),
    }
}
