use crate::format::bytes2human;
use oledstat_core::{AppState, Line, NetworkReading, StatWidget};

/// Displays TX / RX traffic of the watched interface across the full row.
#[derive(Debug, Default)]
pub struct NetworkWidget;

impl NetworkWidget {
    pub fn new() -> Self {
        Self
    }
}

impl StatWidget for NetworkWidget {
    fn id(&self) -> &str {
        "network"
    }

    fn view(&self, state: &AppState) -> Line {
        match &state.readings.network {
            NetworkReading::Traffic { tx, rx } => {
                Line::text(format!("Tx{}, Rx{}", bytes2human(*tx), bytes2human(*rx)))
            }
            NetworkReading::NotFound { interface } => Line::text(format!("{interface}: Not found")),
        }
    }
}
