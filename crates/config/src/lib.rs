pub mod schema;

pub use schema::{
    DisplayConfig, Driver, LayoutConfig, MonitorConfig, NetworkMode, OledConfig, Strategy,
    TemperatureSource, MAX_JITTER,
};

use oledstat_core::{Result, StatError};
use std::path::{Path, PathBuf};

/// Read the panel configuration at `path`.
///
/// An absent file is not an error: the compiled-in layout (128x64, five rows)
/// is used instead.  A file that exists must parse and validate.
pub fn load(path: impl AsRef<Path>) -> Result<OledConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(OledConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| StatError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<OledConfig> {
    let config: OledConfig =
        toml::from_str(raw).map_err(|e| StatError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// `oledstat/oledstat.toml` under `$XDG_CONFIG_HOME`, else under `~/.config`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("oledstat").join("oledstat.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load("/nonexistent/oledstat.toml").unwrap();
        assert_eq!(config.layout.bar_width, 52);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = parse(
            r#"
            [layout]
            strategy = "rotate"
            jitter = 1

            [monitor]
            interface = "wlan0"
            network = "total"
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.strategy, Strategy::Rotate);
        assert_eq!(config.layout.jitter, 1);
        assert_eq!(config.layout.line_anchors, vec![0, 13, 25, 38, 51]);
        assert_eq!(config.monitor.interface, "wlan0");
        assert_eq!(config.monitor.network, NetworkMode::Total);
        assert_eq!(config.monitor.interval_ms, 500);
        assert_eq!(config.display.width, 128);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = parse("[layout\nbar_width = ").unwrap_err();
        assert!(matches!(err, StatError::Config(_)));
    }

    #[test]
    fn oversized_jitter_is_rejected_at_parse() {
        let err = parse("[layout]\nstrategy = \"rotate\"\njitter = 4294967295").unwrap_err();
        assert!(err.to_string().contains("jitter"));
    }

    #[test]
    fn validation_runs_after_parse() {
        let err = parse("[monitor]\ninterval_ms = 0").unwrap_err();
        assert!(err.to_string().contains("interval"));
    }
}
