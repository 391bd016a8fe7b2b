//! Default hardware profile.
//!
//! These rates describe the emulated board and are only used to seed
//! [`ClockConfig::default`](crate::config::ClockConfig). Conversions read the
//! rates from a configured converter, never from these constants directly.

/// Primary (CPU) clock rate in Hz.
pub const BASE_CLOCK_RATE: u64 = 1_019_215_872;

/// Secondary hardware counter frequency in Hz (the generic timer `CNTFRQ`).
pub const CNTFREQ: u64 = 19_200_000;
