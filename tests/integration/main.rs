//! Integration tests for the oop-patterns CLI
//!
//! Each test runs the real binary with `HOME` pointed at a temporary
//! directory so no user configuration leaks in.


use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create an oop-patterns command with an isolated home
fn oop_patterns(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("oop-patterns"));
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// BASIC CLI TESTS
// =============================================================================

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("oop-patterns"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run small demonstrations of textbook design patterns"));
}

#[test]
fn test_no_args_shows_info() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("oop-patterns v"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    let output = oop_patterns(&home).args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// DEVICE TESTS
// =============================================================================

#[test]
fn test_devices_lists_every_battery_life() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home).arg("devices").assert().success().stdout(
        "Smartphone battery life: 10 hours.\n\
         Laptop battery life: 5 hours.\n\
         Smartwatch battery life: 24 hours.\n",
    );
}

#[test]
fn test_device_by_name() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .args(["device", "laptop"])
        .assert()
        .success()
        .stdout("Laptop battery life: 5 hours.\n");
}

#[test]
fn test_device_unknown_fails() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .args(["device", "toaster"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown device: toaster"));
}

#[test]
fn test_devices_json() {
    let home = TempDir::new().unwrap();
    let output = oop_patterns(&home).args(["devices", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let devices = value["devices"].as_array().unwrap();
    assert_eq!(devices.len(), 3);
    assert_eq!(devices[2]["device"], "smartwatch");
    assert_eq!(devices[2]["battery_life"], "Smartwatch battery life: 24 hours.");
}

// =============================================================================
// VEHICLE TESTS
// =============================================================================

#[test]
fn test_vehicle_by_name() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .args(["vehicle", "Motorcycle"])
        .assert()
        .success()
        .stdout("Vehicle Type: Motorcycle\n");
}

#[test]
fn test_vehicle_invalid_type_fails() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .args(["vehicle", "hj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The vehicle type : \"hj\" is invalid."));
}

#[test]
fn test_vehicles_walkthrough() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home).arg("vehicles").assert().success().stdout(
        "Vehicle Type: Car\nVehicle Type: Motorcycle\nError: The vehicle type : \"hj\" is invalid.\n",
    );
}

#[test]
fn test_vehicles_walkthrough_json() {
    let home = TempDir::new().unwrap();
    let output = oop_patterns(&home).args(["--json", "vehicles"]).output().unwrap();
    assert!(output.status.success());

    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(steps[0]["success"], true);
    assert_eq!(steps[1]["message"], "Vehicle Type: Motorcycle");
    assert_eq!(steps[2]["success"], false);
}

// =============================================================================
// TEMPERATURE TESTS
// =============================================================================

#[test]
fn test_temperature_defaults_agree() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .arg("temperature")
        .assert()
        .success()
        .stdout("Temperature: 25.00 °C\nTemperature: 25.00 °C\n");
}

#[test]
fn test_temperature_written_through_adapter() {
    let home = TempDir::new().unwrap();
    oop_patterns(&home)
        .args(["temperature", "--celsius", "-40"])
        .assert()
        .success()
        .stdout("Temperature: -40.00 °C\nTemperature: -40.00 °C\n");
}

#[test]
fn test_temperature_json_reports_raw_fahrenheit() {
    let home = TempDir::new().unwrap();
    let output =
        oop_patterns(&home).args(["--json", "temperature", "--celsius", "100"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["fahrenheit"], 212.0);
    assert_eq!(value["adapted_celsius"], 100.0);
}
