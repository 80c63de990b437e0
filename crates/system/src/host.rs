use crate::{network::NetCounters, temperature, MetricsSource};
use oledstat_config::TemperatureSource;
use oledstat_core::{Result, StatError};
use std::path::Path;
use sysinfo::{Disks, Networks, System};

/// [`MetricsSource`] backed by `sysinfo`.
pub struct SysinfoSource {
    sys:         System,
    networks:    Networks,
    temperature: TemperatureSource,
}

impl SysinfoSource {
    pub fn new(temperature: TemperatureSource) -> Self {
        let mut sys = System::new();
        // Prime the CPU counters so the first real refresh yields a usage delta.
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        Self {
            sys,
            networks: Networks::new_with_refreshed_list(),
            temperature,
        }
    }
}

impl std::fmt::Debug for SysinfoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysinfoSource")
            .field("interfaces", &self.networks.list().len())
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl MetricsSource for SysinfoSource {
    fn refresh(&mut self) {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();
        self.networks.refresh(true); // true = drop interfaces that disappeared
    }

    fn cpu_percent(&self) -> f32 {
        self.sys.global_cpu_usage()
    }

    fn memory_percent(&self) -> f32 {
        let total = self.sys.total_memory();
        if total == 0 {
            return 0.0;
        }
        let used = total.saturating_sub(self.sys.available_memory());
        used as f32 / total as f32 * 100.0
    }

    fn disk_percent(&self, mount: &Path) -> Result<f32> {
        let disks = Disks::new_with_refreshed_list();
        let (used, total) = disks
            .iter()
            .find(|d| d.mount_point() == mount)
            .map(|d| (d.total_space().saturating_sub(d.available_space()), d.total_space()))
            .ok_or_else(|| {
                StatError::System(format!("no filesystem mounted at '{}'", mount.display()))
            })?;

        if total == 0 {
            return Ok(0.0);
        }
        Ok(used as f32 / total as f32 * 100.0)
    }

    fn net_counters(&self, interface: &str) -> Option<NetCounters> {
        self.networks.list().get(interface).map(|data| NetCounters {
            bytes_sent: data.total_transmitted(),
            bytes_recv: data.total_received(),
        })
    }

    fn temperature(&mut self) -> Result<f32> {
        match self.temperature {
            TemperatureSource::Vcgencmd => temperature::read_vcgencmd(),
            TemperatureSource::Sensors  => temperature::read_hottest_sensor(),
        }
    }
}
