pub mod host;
pub mod network;
pub mod scripted;
pub mod temperature;

pub use host::SysinfoSource;
pub use network::{NetCounters, NetRate, RateTracker};
pub use scripted::ScriptedSource;

use oledstat_config::{MonitorConfig, NetworkMode};
use oledstat_core::{NetworkReading, Readings, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Synchronous, local view of the host's metrics.
///
/// Implementations cache OS counters and only touch the OS in [`refresh`]
/// and the sensor / disk queries.
///
/// [`refresh`]: MetricsSource::refresh
pub trait MetricsSource {
    /// Re-read CPU, memory and network counters.  Called once per cycle.
    fn refresh(&mut self);

    /// CPU utilisation (0.0 – 100.0) since the previous refresh.
    fn cpu_percent(&self) -> f32;

    /// Virtual memory utilisation (0.0 – 100.0).
    fn memory_percent(&self) -> f32;

    /// Used / total space of the filesystem mounted at `mount`, as a percent.
    fn disk_percent(&self, mount: &Path) -> Result<f32>;

    /// Cumulative counters for `interface`, `None` if the host has no such interface.
    fn net_counters(&self, interface: &str) -> Option<NetCounters>;

    /// Device temperature in °C.
    fn temperature(&mut self) -> Result<f32>;
}

/// Turns a [`MetricsSource`] into per-cycle [`Readings`].
///
/// Owns the only long-lived sampler state: the last network counter snapshot
/// per interface and whether the temperature sensor is currently failing.
#[derive(Debug)]
pub struct Sampler<S> {
    source:       S,
    rates:        RateTracker,
    interface:    String,
    mount:        PathBuf,
    mode:         NetworkMode,
    temp_failing: bool,
}

impl<S: MetricsSource> Sampler<S> {
    pub fn new(source: S, monitor: &MonitorConfig) -> Self {
        Self {
            source,
            rates: RateTracker::default(),
            interface: monitor.interface.clone(),
            mount: PathBuf::from(&monitor.mount),
            mode: monitor.network,
            temp_failing: false,
        }
    }

    /// Sample every metric once.  `now` timestamps the network counters.
    ///
    /// A temperature failure degrades to `None`; disk errors are fatal.
    pub fn sample(&mut self, now: Instant) -> Result<Readings> {
        self.source.refresh();

        let temperature = self.temperature();
        let cpu = self.source.cpu_percent();
        let memory = self.source.memory_percent();
        let disk = self.source.disk_percent(&self.mount)?;
        let network = self.network(now);

        Ok(Readings {
            temperature,
            cpu,
            memory,
            disk,
            network,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn temperature(&mut self) -> Option<f32> {
        match self.source.temperature() {
            Ok(celsius) => {
                if self.temp_failing {
                    info!("Temperature sensor recovered: {celsius:.1}°C");
                    self.temp_failing = false;
                }
                Some(celsius)
            }
            Err(e) => {
                if self.temp_failing {
                    debug!("Temperature still unavailable: {e}");
                } else {
                    warn!("Temperature unavailable, showing '--': {e}");
                    self.temp_failing = true;
                }
                None
            }
        }
    }

    fn network(&mut self, now: Instant) -> NetworkReading {
        let Some(counters) = self.source.net_counters(&self.interface) else {
            return NetworkReading::NotFound {
                interface: self.interface.clone(),
            };
        };

        match self.mode {
            NetworkMode::Total => NetworkReading::Traffic {
                tx: counters.bytes_sent,
                rx: counters.bytes_recv,
            },
            NetworkMode::Rate => {
                let rate = self.rates.update(&self.interface, counters, now);
                NetworkReading::Traffic {
                    tx: rate.tx as u64,
                    rx: rate.rx as u64,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oledstat_core::StatError;
    use std::time::Duration;

    fn monitor(network: NetworkMode) -> MonitorConfig {
        MonitorConfig {
            network,
            ..MonitorConfig::default()
        }
    }

    fn eth0(counters: Vec<NetCounters>) -> ScriptedSource {
        ScriptedSource::new().with_interface("eth0", counters)
    }

    #[test]
    fn first_sample_reports_zero_rate_then_differences() {
        let source = eth0(vec![
            NetCounters { bytes_sent: 1_000, bytes_recv: 5_000 },
            NetCounters { bytes_sent: 3_048, bytes_recv: 13_192 },
        ]);
        let mut sampler = Sampler::new(source, &monitor(NetworkMode::Rate));
        let t0 = Instant::now();

        let first = sampler.sample(t0).unwrap();
        assert_eq!(first.network, NetworkReading::Traffic { tx: 0, rx: 0 });

        let second = sampler.sample(t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(second.network, NetworkReading::Traffic { tx: 1_024, rx: 4_096 });
    }

    #[test]
    fn total_mode_reports_cumulative_counters() {
        let source = eth0(vec![NetCounters { bytes_sent: 10_000, bytes_recv: 100_001_221 }]);
        let mut sampler = Sampler::new(source, &monitor(NetworkMode::Total));
        let readings = sampler.sample(Instant::now()).unwrap();
        assert_eq!(
            readings.network,
            NetworkReading::Traffic { tx: 10_000, rx: 100_001_221 }
        );
    }

    #[test]
    fn unknown_interface_is_not_found() {
        let mut sampler = Sampler::new(ScriptedSource::default(), &monitor(NetworkMode::Rate));
        let readings = sampler.sample(Instant::now()).unwrap();
        assert_eq!(
            readings.network,
            NetworkReading::NotFound { interface: "eth0".to_string() }
        );
    }

    #[test]
    fn temperature_failure_degrades_and_recovers() {
        let source = ScriptedSource::new().with_temperature([Some(41.5), None, None, Some(43.0)]);
        let mut sampler = Sampler::new(source, &MonitorConfig::default());
        let now = Instant::now();
        let temps: Vec<Option<f32>> = (0..4)
            .map(|_| sampler.sample(now).unwrap().temperature)
            .collect();
        assert_eq!(temps, vec![Some(41.5), None, None, Some(43.0)]);
    }

    #[derive(Debug)]
    struct NoDisk;

    impl MetricsSource for NoDisk {
        fn refresh(&mut self) {}
        fn cpu_percent(&self) -> f32 { 0.0 }
        fn memory_percent(&self) -> f32 { 0.0 }
        fn disk_percent(&self, mount: &Path) -> Result<f32> {
            Err(StatError::System(format!("no filesystem mounted at '{}'", mount.display())))
        }
        fn net_counters(&self, _: &str) -> Option<NetCounters> { None }
        fn temperature(&mut self) -> Result<f32> { Ok(40.0) }
    }

    #[test]
    fn disk_errors_propagate() {
        let mut sampler = Sampler::new(NoDisk, &MonitorConfig::default());
        assert!(matches!(sampler.sample(Instant::now()), Err(StatError::System(_))));
    }
}
