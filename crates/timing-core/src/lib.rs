//! Cycle/time conversion for the emulator core.
//!
//! This crate converts between wall-clock durations and two cycle counters:
//!
//! - **Wide arithmetic** ([`wide`]): exact 128-bit multiply and 128/32-bit divide
//! - **Converter** ([`convert`]): time to primary cycles, time to secondary
//!   clock ticks, cross-clock resampling and cycles back to time
//!
//! # Example
//!
//! ```
//! use timing_common::ClockConfig;
//! use timing_core::CycleConverter;
//!
//! let conv = CycleConverter::new(&ClockConfig::new(19_200_000, 1_000_000)).unwrap();
//!
//! assert_eq!(conv.ms_to_cycles(1_000), 19_200_000);
//! assert_eq!(conv.ns_to_cycles(1_000_000_000), 19_200_000);
//! assert_eq!(conv.cycles_to_ms(19_200_000).as_millis(), 1_000);
//! assert_eq!(conv.cpu_cycles_to_clock_cycles(19_200_000), 1_000_000);
//! ```

pub mod convert;
pub mod wide;

pub use convert::{ConversionPath, CycleConversion, CycleConverter};
pub use wide::{checked_divide_128_on_32, divide_128_on_32, multiply_64_into_128};
