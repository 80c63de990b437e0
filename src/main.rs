//! oledstat — live host telemetry on a small monochrome OLED.
//!
//! Run with:  `RUST_LOG=info oledstat`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG=trace also dumps every frame as ASCII art (headless driver).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("oledstat v{} starting", env!("CARGO_PKG_VERSION"));

    oledstat_display::run().map_err(Into::into)
}
