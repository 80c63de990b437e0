use crate::format::format_percent;
use oledstat_core::{AppState, Line, StatWidget};

/// Displays the device temperature, or `--` while the sensor is failing.
#[derive(Debug, Default)]
pub struct TempWidget;

impl TempWidget {
    pub fn new() -> Self {
        Self
    }
}

impl StatWidget for TempWidget {
    fn id(&self) -> &str {
        "temperature"
    }

    fn view(&self, state: &AppState) -> Line {
        let figure = match state.readings.temperature {
            Some(celsius) => format_percent(celsius),
            None => format!("{:>5}", "--"),
        };
        Line::text("Temp").with_figure(format!("{figure}'C"))
    }
}
