//! Configuration to conversion acceptance tests.
//!
//! # Acceptance Criteria
//!
//! - A TOML file fully determines the rates used by every conversion
//! - Missing rates fall back to the hardware profile
//! - Unusable rates are rejected before any conversion runs

use super::common::{converter_from_toml, write_config};
use std::time::Duration;
use timing_common::{ClockConfig, ConfigError, BASE_CLOCK_RATE, CNTFREQ};
use timing_core::CycleConverter;

#[test]
fn test_concrete_example_from_file() {
    let conv = converter_from_toml(
        r#"
        base_clock_rate = 19200000
        cntfreq = 1000000
        "#,
    );

    assert_eq!(conv.ms_to_cycles(1_000), 19_200_000);
    assert_eq!(conv.us_to_cycles(1_000_000), 19_200_000);
    assert_eq!(conv.ns_to_cycles(1_000_000_000), 19_200_000);
    assert_eq!(conv.cycles_to_ms(19_200_000), Duration::from_secs(1));
    assert_eq!(conv.cpu_cycles_to_clock_cycles(19_200_000), 1_000_000);
}

#[test]
fn test_empty_file_uses_hardware_profile() {
    let conv = converter_from_toml("");
    assert_eq!(conv.base_clock_rate(), BASE_CLOCK_RATE);
    assert_eq!(conv.cntfreq(), CNTFREQ);
    assert_eq!(conv.ms_to_clock_cycles(1_000), CNTFREQ);
}

#[test]
fn test_invalid_rate_rejected() {
    let file = write_config("base_clock_rate = 0");
    let config = ClockConfig::from_file(file.path()).unwrap();
    let err = CycleConverter::new(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "base_clock_rate",
            ..
        }
    ));
}

#[test]
fn test_saved_config_reloads_identically() {
    let original = ClockConfig::new(1_000_000_000, 24_000_000);
    let file = write_config(&original.to_toml().unwrap());
    let reloaded = ClockConfig::from_file(file.path()).unwrap();

    let a = CycleConverter::new(&original).unwrap();
    let b = CycleConverter::new(&reloaded).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.ns_to_cycles(123_456_789), 123_456_789);
}
