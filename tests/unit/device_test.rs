//! Tests for the electronic device template

use oop_patterns::PatternError;
use oop_patterns::core::models::{DeviceKind, Laptop, Smartphone, Smartwatch};
use oop_patterns::core::ports::ElectronicDevice;
use oop_patterns::core::services::{battery_life_of, display_battery_life, display_battery_life_of};
use test_case::test_case;

const SMARTPHONE: &str = "Smartphone battery life: 10 hours.";
const LAPTOP: &str = "Laptop battery life: 5 hours.";
const SMARTWATCH: &str = "Smartwatch battery life: 24 hours.";

// =============================================================================
// CONCRETE DEVICES
// =============================================================================

#[test]
fn smartphone_battery_life() {
    assert_eq!(Smartphone.battery_life(), SMARTPHONE);
}

#[test]
fn laptop_battery_life() {
    assert_eq!(Laptop.battery_life(), LAPTOP);
}

#[test]
fn smartwatch_battery_life() {
    assert_eq!(Smartwatch.battery_life(), SMARTWATCH);
}

// =============================================================================
// DISPLAY
// =============================================================================

#[test]
fn display_battery_life_writes_each_device_in_order() {
    let devices: Vec<Box<dyn ElectronicDevice>> =
        vec![Box::new(Smartphone), Box::new(Laptop), Box::new(Smartwatch)];
    let mut out = Vec::new();

    for device in &devices {
        display_battery_life(&**device, &mut out).unwrap();
    }

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, format!("{SMARTPHONE}\n{LAPTOP}\n{SMARTWATCH}\n"));
}

#[test]
fn battery_life_of_accepts_concrete_and_boxed_devices() {
    assert_eq!(battery_life_of(&Laptop).unwrap(), LAPTOP);

    let boxed: Box<dyn ElectronicDevice> = Box::new(Smartwatch);
    assert_eq!(battery_life_of(&boxed).unwrap(), SMARTWATCH);
}

#[test]
fn battery_life_of_rejects_non_device() {
    let err = battery_life_of(&"Not an ElectronicDevice").unwrap_err();
    assert!(matches!(err, PatternError::InvalidDevice));
    assert_eq!(err.to_string(), "Parameter \"device\" must be type ElectronicDevice");

    assert!(battery_life_of(&42_i32).is_err());
}

#[test]
fn display_battery_life_of_writes_nothing_on_error() {
    let mut out = Vec::new();
    assert!(display_battery_life_of(&3.5_f64, &mut out).is_err());
    assert!(out.is_empty());

    display_battery_life_of(&Smartphone, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{SMARTPHONE}\n"));
}

// =============================================================================
// DEVICE KIND
// =============================================================================

#[test_case("smartphone", DeviceKind::Smartphone ; "smartphone")]
#[test_case("PHONE", DeviceKind::Smartphone ; "phone alias uppercase")]
#[test_case("Laptop", DeviceKind::Laptop ; "laptop mixed case")]
#[test_case("watch", DeviceKind::Smartwatch ; "watch alias")]
fn device_kind_parses(input: &str, expected: DeviceKind) {
    assert_eq!(input.parse::<DeviceKind>().unwrap(), expected);
}

#[test]
fn device_kind_rejects_unknown() {
    let err = "toaster".parse::<DeviceKind>().unwrap_err();
    assert!(matches!(err, PatternError::UnknownDevice(ref name) if name == "toaster"));
    assert!(err.to_string().contains("Unknown device: toaster"));
}

#[test]
fn device_kind_builds_matching_device() {
    let lines: Vec<String> = DeviceKind::ALL.iter().map(|k| k.build().battery_life()).collect();
    assert_eq!(lines, vec![SMARTPHONE, LAPTOP, SMARTWATCH]);
}

#[test]
fn device_kind_display_round_trips() {
    for kind in DeviceKind::ALL {
        assert_eq!(kind.to_string().parse::<DeviceKind>().unwrap(), kind);
    }
}
