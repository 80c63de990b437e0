use thiserror::Error;

/// Failures of the sample → render → present cycle and its start-up.
#[derive(Debug, Error)]
pub enum StatError {
    #[error("config error: {0}")]
    Config(String),

    #[error("system error: {0}")]
    System(String),

    /// A sensor could not be read this cycle.  Callers degrade instead of failing.
    #[error("sensor error: {0}")]
    Sensor(String),

    #[error("display error: {0}")]
    Display(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = StatError> = std::result::Result<T, E>;
