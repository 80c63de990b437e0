use crate::format::format_percent;
use oledstat_core::{AppState, Line, StatWidget};

/// Displays usage of the watched filesystem.
#[derive(Debug, Default)]
pub struct DiskWidget;

impl DiskWidget {
    pub fn new() -> Self {
        Self
    }
}

impl StatWidget for DiskWidget {
    fn id(&self) -> &str {
        "disk"
    }

    fn view(&self, state: &AppState) -> Line {
        Line::text("Disk").with_figure(format!("{} %", format_percent(state.readings.disk)))
    }
}
