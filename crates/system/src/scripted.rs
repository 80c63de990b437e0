use crate::{network::NetCounters, MetricsSource};
use oledstat_core::{Result, StatError};
use std::collections::HashMap;
use std::path::Path;

/// Deterministic [`MetricsSource`] that replays scripted readings.
///
/// Each [`refresh`](MetricsSource::refresh) advances one step.  A script
/// shorter than the run keeps repeating its last value; an empty script
/// reads as zero.  A `None` temperature step simulates a sensor failure.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    pub cpu:         Vec<f32>,
    pub memory:      Vec<f32>,
    pub disk:        Vec<f32>,
    pub temperature: Vec<Option<f32>>,
    pub interfaces:  HashMap<String, Vec<NetCounters>>,
    step:            Option<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpu(mut self, script: impl Into<Vec<f32>>) -> Self {
        self.cpu = script.into();
        self
    }

    pub fn with_memory(mut self, script: impl Into<Vec<f32>>) -> Self {
        self.memory = script.into();
        self
    }

    pub fn with_disk(mut self, script: impl Into<Vec<f32>>) -> Self {
        self.disk = script.into();
        self
    }

    pub fn with_temperature(mut self, script: impl Into<Vec<Option<f32>>>) -> Self {
        self.temperature = script.into();
        self
    }

    /// Script the cumulative counters of `interface`, one entry per step.
    pub fn with_interface(
        mut self,
        interface: impl Into<String>,
        script: impl Into<Vec<NetCounters>>,
    ) -> Self {
        self.interfaces.insert(interface.into(), script.into());
        self
    }

    /// Index of the current step; 0 before the first refresh.
    pub fn step(&self) -> usize {
        self.step.unwrap_or(0)
    }
}

fn at<T: Copy + Default>(script: &[T], step: usize) -> T {
    script
        .get(step)
        .or_else(|| script.last())
        .copied()
        .unwrap_or_default()
}

impl MetricsSource for ScriptedSource {
    fn refresh(&mut self) {
        self.step = Some(self.step.map_or(0, |s| s + 1));
    }

    fn cpu_percent(&self) -> f32 {
        at(&self.cpu, self.step())
    }

    fn memory_percent(&self) -> f32 {
        at(&self.memory, self.step())
    }

    fn disk_percent(&self, _mount: &Path) -> Result<f32> {
        Ok(at(&self.disk, self.step()))
    }

    fn net_counters(&self, interface: &str) -> Option<NetCounters> {
        self.interfaces
            .get(interface)
            .map(|script| at(script, self.step()))
    }

    fn temperature(&mut self) -> Result<f32> {
        if self.temperature.is_empty() {
            return Ok(0.0);
        }
        at(&self.temperature, self.step())
            .ok_or_else(|| StatError::Sensor("scripted sensor failure".to_string()))
    }
}
