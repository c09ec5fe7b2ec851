//! Vehicle commands - build vehicles through the factory

use oop_patterns::core::services::{DEMO_VEHICLE_TYPES, VehicleFactory, describe_outcome};
use oop_patterns::output::{FactoryReport, OperationResult, OutputMode, VehicleReport};

/// Build one vehicle by type name
pub fn vehicle(name: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let vehicle = VehicleFactory::create_vehicle_named(name)?;

    let report = VehicleReport {
        vehicle_type: vehicle.vehicle_type().to_string(),
        name: vehicle.name().to_string(),
    };
    report.render(output_mode);
    Ok(())
}

/// Run the factory walkthrough: a car, a motorcycle, then a rejected type
pub fn vehicles(output_mode: OutputMode) -> anyhow::Result<()> {
    let steps = DEMO_VEHICLE_TYPES
        .into_iter()
        .map(|name| {
            let outcome = VehicleFactory::create_vehicle_named(name);
            OperationResult {
                success: outcome.is_ok(),
                message: describe_outcome(&outcome),
            }
        })
        .collect();

    FactoryReport { steps }.render(output_mode);
    Ok(())
}
