use crate::history::{History, Metric};

/// Network line content for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkReading {
    /// Bytes sent / received: per second in rate mode, cumulative in total mode.
    Traffic { tx: u64, rx: u64 },
    /// The configured interface does not exist on this host.
    NotFound { interface: String },
}

impl Default for NetworkReading {
    fn default() -> Self {
        Self::Traffic { tx: 0, rx: 0 }
    }
}

/// One cycle's worth of sampled metrics.  Not retained past the cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readings {
    /// Degrees Celsius, `None` when the sensor failed this cycle.
    pub temperature: Option<f32>,
    /// CPU utilisation (0.0 – 100.0).
    pub cpu: f32,
    /// Virtual memory utilisation (0.0 – 100.0).
    pub memory: f32,
    /// Filesystem usage of the watched mount (0.0 – 100.0).
    pub disk: f32,
    pub network: NetworkReading,
}

/// Everything the widgets read from: the latest readings plus the rolling histories.
#[derive(Debug, Clone)]
pub struct AppState {
    pub readings: Readings,
    cpu_history: History,
    mem_history: History,
}

impl AppState {
    /// Empty histories, both sized to `bar_width` samples.
    pub fn new(bar_width: usize) -> Self {
        Self {
            readings: Readings::default(),
            cpu_history: History::new(bar_width),
            mem_history: History::new(bar_width),
        }
    }

    /// Store a fresh sample set and feed the CPU / memory histories.
    pub fn apply(&mut self, readings: Readings) {
        self.record(Metric::Cpu, readings.cpu);
        self.record(Metric::Memory, readings.memory);
        self.readings = readings;
    }

    pub fn record(&mut self, metric: Metric, value: f32) {
        self.history_mut(metric).record(value);
    }

    pub fn history(&self, metric: Metric) -> &History {
        match metric {
            Metric::Cpu => &self.cpu_history,
            Metric::Memory => &self.mem_history,
        }
    }

    fn history_mut(&mut self, metric: Metric) -> &mut History {
        match metric {
            Metric::Cpu => &mut self.cpu_history,
            Metric::Memory => &mut self.mem_history,
        }
    }
}
