use crate::format::format_percent;
use oledstat_core::{AppState, Line, Metric, StatWidget};

/// Displays virtual memory usage with its rolling histogram.
#[derive(Debug, Default)]
pub struct MemoryWidget;

impl MemoryWidget {
    pub fn new() -> Self {
        Self
    }
}

impl StatWidget for MemoryWidget {
    fn id(&self) -> &str {
        "memory"
    }

    fn view(&self, state: &AppState) -> Line {
        Line::text("Mem")
            .with_figure(format!("{} %", format_percent(state.readings.memory)))
            .with_history(state.history(Metric::Memory).snapshot())
    }
}
