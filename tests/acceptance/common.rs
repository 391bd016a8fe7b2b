//! Common utilities for acceptance tests.

#![allow(dead_code)] // Not every helper is used by every test module

use std::io::Write;
use tempfile::NamedTempFile;
use timing_common::ClockConfig;
use timing_core::CycleConverter;

/// Rates used by the concrete examples: 19.2 MHz primary, 1 MHz secondary.
pub const TEST_BASE_CLOCK_RATE: u64 = 19_200_000;
/// Secondary counter rate used alongside [`TEST_BASE_CLOCK_RATE`].
pub const TEST_CNTFREQ: u64 = 1_000_000;

/// Write `contents` to a temporary TOML file.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

/// Load a converter from a TOML document via the file path API.
pub fn converter_from_toml(contents: &str) -> CycleConverter {
    let file = write_config(contents);
    let config = ClockConfig::from_file(file.path()).expect("load config");
    CycleConverter::new(&config).expect("valid config")
}

/// Converter with the test rates.
pub fn test_converter() -> CycleConverter {
    CycleConverter::new(&ClockConfig::new(TEST_BASE_CLOCK_RATE, TEST_CNTFREQ))
        .expect("valid config")
}
