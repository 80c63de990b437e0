use oledstat_core::{Result, StatError};
use serde::{Deserialize, Serialize};

/// Largest burn-in jitter, in pixels per axis.
pub const MAX_JITTER: u32 = 8;

/// Root configuration structure parsed from `oledstat.toml`.
///
/// Every field has a compiled-in default, so an absent file or a partial one
/// is always usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OledConfig {
    pub display: DisplayConfig,
    pub layout:  LayoutConfig,
    pub monitor: MonitorConfig,
}

impl OledConfig {
    /// Reject geometry and timing values the render loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        let d = &self.display;
        let l = &self.layout;

        if d.width == 0 || d.height == 0 {
            return Err(invalid("display width and height must be non-zero"));
        }
        if d.driver == Driver::Ssd1306 && (d.width, d.height) != (128, 64) {
            return Err(invalid("the ssd1306 driver only supports a 128x64 panel"));
        }
        if l.line_anchors.is_empty() {
            return Err(invalid("layout.line_anchors must not be empty"));
        }
        if let Some(anchor) = l.line_anchors.iter().find(|a| **a >= d.height) {
            return Err(invalid(&format!(
                "line anchor {anchor} lies below the {}px display",
                d.height
            )));
        }
        if l.bar_width == 0 || l.bar_height == 0 {
            return Err(invalid("bar width and height must be non-zero"));
        }
        if l.margin_x_bar.checked_add(l.bar_width).map_or(true, |right| right > d.width) {
            return Err(invalid("histogram bar does not fit the display width"));
        }
        if l.bar_margin_top.checked_add(l.bar_height).map_or(true, |bottom| bottom >= d.height) {
            return Err(invalid("bar_margin_top + bar_height must fit the display height"));
        }
        if l.margin_x_figure >= d.width {
            return Err(invalid("layout.margin_x_figure lies right of the display"));
        }
        if l.scroll_step >= d.height {
            return Err(invalid(&format!(
                "layout.scroll_step must be below the {}px display height",
                d.height
            )));
        }
        if l.jitter > MAX_JITTER || l.jitter >= d.height {
            return Err(invalid(&format!(
                "layout.jitter must be at most {MAX_JITTER}px and below the display height"
            )));
        }
        if self.monitor.interval_ms == 0 {
            return Err(invalid("monitor.interval_ms must be non-zero"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> StatError {
    StatError::Config(msg.to_string())
}

/// Which panel receives the frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// No hardware; frames are logged.
    #[default]
    Headless,
    /// SSD1306 over Linux I2C (requires the `ssd1306` cargo feature).
    Ssd1306,
}

/// Physical panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub driver: Driver,
    pub width:  u32,
    pub height: u32,
    /// Contrast (0 – 255) applied once at startup; `None` leaves the panel default.
    pub contrast: Option<u8>,
    /// I2C character device, e.g. `/dev/i2c-1`.
    pub i2c_bus: String,
    /// 7-bit I2C address (0x3C or 0x3D).
    pub i2c_address: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            driver:      Driver::Headless,
            width:       128,
            height:      64,
            contrast:    None,
            i2c_bus:     "/dev/i2c-1".to_string(),
            i2c_address: 0x3C,
        }
    }
}

/// Burn-in avoidance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Scroll everything down by `scroll_step` px per cycle, wrapping at the bottom.
    #[default]
    Scroll,
    /// Rotate lines through the row slots and add a random pixel jitter.
    Rotate,
}

/// Placement of text and histogram bars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub strategy: Strategy,
    /// Top edge of each row slot, in display order.
    pub line_anchors: Vec<u32>,
    /// X position of the right-hand figures.
    pub margin_x_figure: u32,
    /// X position of the histogram frame's left edge.
    pub margin_x_bar: u32,
    /// Histogram columns, which is also the history capacity.
    pub bar_width: u32,
    pub bar_height: u32,
    /// Gap between a row's anchor and the top of its histogram frame.
    pub bar_margin_top: u32,
    /// Pixels scrolled per cycle (scroll strategy).
    pub scroll_step: u32,
    /// Upper bound of the random pixel offset per axis (rotate strategy).
    pub jitter: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy:        Strategy::Scroll,
            line_anchors:    vec![0, 13, 25, 38, 51],
            margin_x_figure: 78,
            margin_x_bar:    31,
            bar_width:       52,
            bar_height:      8,
            bar_margin_top:  3,
            scroll_step:     1,
            jitter:          2,
        }
    }
}

/// What the network row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// Bytes per second since the previous cycle.
    #[default]
    Rate,
    /// Cumulative bytes since boot.
    Total,
}

/// Where the temperature comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureSource {
    /// Raspberry Pi firmware query, `vcgencmd measure_temp`.
    #[default]
    Vcgencmd,
    /// Hottest hardware sensor reported by the OS.
    Sensors,
}

/// Sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Pause between frames in milliseconds.
    pub interval_ms: u64,
    /// Network interface shown on the last row.
    pub interface: String,
    /// Mount point whose usage is shown on the disk row.
    pub mount: String,
    pub network: NetworkMode,
    pub temperature: TemperatureSource,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            interface:   "eth0".to_string(),
            mount:       "/".to_string(),
            network:     NetworkMode::Rate,
            temperature: TemperatureSource::Vcgencmd,
        }
    }
}
