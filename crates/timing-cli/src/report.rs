//! Conversion reports printed by the CLI.
//!
//! Every report renders either as aligned text or as a JSON document.

use serde::Serialize;
use std::fmt;
use std::time::Duration;
use timing_common::{ClockConfig, TimeUnit};
use timing_core::{ConversionPath, CycleConverter};

/// Result of converting a duration to cycle counts.
#[derive(Debug, Clone, Serialize)]
pub struct ToCyclesReport {
    /// Input as typed by the operator.
    pub input: String,
    /// Parsed duration count.
    pub count: i64,
    /// Unit of `count`.
    pub unit: TimeUnit,
    /// Primary clock cycles.
    pub cycles: i64,
    /// Arithmetic path used for `cycles`.
    pub path: ConversionPath,
    /// Secondary clock ticks.
    pub clock_cycles: u64,
    /// Rates the conversion used.
    pub clock: ClockConfig,
}

impl ToCyclesReport {
    /// Convert `count` in `unit` with `conv`.
    #[must_use]
    pub fn new(conv: &CycleConverter, input: &str, count: i64, unit: TimeUnit) -> Self {
        let conversion = conv.convert_detailed(count, unit);
        Self {
            input: input.to_string(),
            count,
            unit,
            cycles: conversion.cycles,
            path: conversion.path,
            clock_cycles: conv.to_clock_cycles(count, unit),
            clock: conv.config(),
        }
    }
}

impl fmt::Display for ToCyclesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input:         {} ({}{})", self.input, self.count, self.unit)?;
        writeln!(
            f,
            "cpu cycles:    {} @ {} Hz ({})",
            self.cycles,
            self.clock.base_clock_rate,
            path_label(self.path)
        )?;
        write!(
            f,
            "clock cycles:  {} @ {} Hz",
            self.clock_cycles, self.clock.cntfreq
        )
    }
}

/// Result of converting a primary cycle count back to time.
#[derive(Debug, Clone, Serialize)]
pub struct FromCyclesReport {
    /// Primary clock cycles.
    pub cycles: i64,
    /// Whole milliseconds.
    pub ms: u128,
    /// Whole microseconds.
    pub us: u128,
    /// Whole nanoseconds.
    pub ns: u128,
    /// Nanosecond result in human-readable form.
    pub human: String,
    /// Same instant on the secondary clock.
    pub clock_cycles: u64,
    /// Rates the conversion used.
    pub clock: ClockConfig,
}

impl FromCyclesReport {
    /// Build a report from already-converted durations.
    #[must_use]
    pub fn new(
        conv: &CycleConverter,
        cycles: i64,
        ms: Duration,
        us: Duration,
        ns: Duration,
    ) -> Self {
        Self {
            cycles,
            ms: ms.as_millis(),
            us: us.as_micros(),
            ns: ns.as_nanos(),
            human: humantime::format_duration(ns).to_string(),
            clock_cycles: conv.cpu_cycles_to_clock_cycles(u64::try_from(cycles).unwrap_or(0)),
            clock: conv.config(),
        }
    }
}

impl fmt::Display for FromCyclesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "cpu cycles:    {} @ {} Hz",
            self.cycles, self.clock.base_clock_rate
        )?;
        writeln!(f, "duration:      {}", self.human)?;
        writeln!(f, "               {}ms / {}us / {}ns", self.ms, self.us, self.ns)?;
        write!(
            f,
            "clock cycles:  {} @ {} Hz",
            self.clock_cycles, self.clock.cntfreq
        )
    }
}

fn path_label(path: ConversionPath) -> &'static str {
    match path {
        ConversionPath::Exact => "exact",
        ConversionPath::Truncated => "truncated to whole seconds",
        ConversionPath::Saturated => "saturated",
    }
}
