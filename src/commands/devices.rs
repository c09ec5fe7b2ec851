//! Device commands - battery life through the abstract device template

use oop_patterns::core::models::DeviceKind;
use oop_patterns::output::{DeviceInfo, DeviceReport, OutputMode};

/// Show the battery life of every known device
pub fn devices(output_mode: OutputMode) -> anyhow::Result<()> {
    show(&DeviceKind::ALL, output_mode)
}

/// Show the battery life of one device, selected by name
pub fn device(name: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let kind: DeviceKind = name.parse()?;
    show(&[kind], output_mode)
}

fn show(kinds: &[DeviceKind], output_mode: OutputMode) -> anyhow::Result<()> {
    let report = DeviceReport {
        devices: kinds
            .iter()
            .map(|kind| DeviceInfo {
                device: *kind,
                battery_life: kind.build().battery_life(),
            })
            .collect(),
    };
    report.render(output_mode)?;
    Ok(())
}
