use oledstat_core::{Result, StatError};
use std::process::Command;
use sysinfo::Components;

/// Query the Raspberry Pi firmware with `vcgencmd measure_temp`.
pub fn read_vcgencmd() -> Result<f32> {
    let output = Command::new("vcgencmd")
        .arg("measure_temp")
        .output()
        .map_err(|e| StatError::Sensor(format!("cannot run vcgencmd: {e}")))?;

    if !output.status.success() {
        return Err(StatError::Sensor(format!(
            "vcgencmd exited with {}",
            output.status
        )));
    }

    parse_vcgencmd(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `temp=45.2'C` into `45.2`.
pub fn parse_vcgencmd(output: &str) -> Result<f32> {
    let value = output
        .trim()
        .split_once('=')
        .map(|(_, rest)| rest.split('\'').next().unwrap_or(rest))
        .ok_or_else(|| StatError::Sensor(format!("unexpected vcgencmd output: {output:?}")))?;

    value
        .trim()
        .parse::<f32>()
        .map_err(|e| StatError::Sensor(format!("bad temperature {value:?}: {e}")))
}

/// Highest temperature among the hardware sensors the OS exposes.
pub fn read_hottest_sensor() -> Result<f32> {
    let components = Components::new_with_refreshed_list();
    components
        .list()
        .iter()
        .filter_map(|c| c.temperature())
        .filter(|t| t.is_finite())
        .reduce(f32::max)
        .ok_or_else(|| StatError::Sensor("no temperature sensors found".to_string()))
}
