use crate::format::format_percent;
use oledstat_core::{AppState, Line, Metric, StatWidget};

/// Displays CPU usage with its rolling histogram.
#[derive(Debug, Default)]
pub struct CpuWidget;

impl CpuWidget {
    pub fn new() -> Self {
        Self
    }
}

impl StatWidget for CpuWidget {
    fn id(&self) -> &str {
        "cpu"
    }

    fn view(&self, state: &AppState) -> Line {
        Line::text("CPU")
            .with_figure(format!("{} %", format_percent(state.readings.cpu)))
            .with_history(state.history(Metric::Cpu).snapshot())
    }
}
