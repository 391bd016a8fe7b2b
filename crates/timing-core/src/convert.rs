//! Conversions between wall-clock durations and cycle counts.
//!
//! Two counters are supported:
//! - the **primary** CPU cycle counter running at `base_clock_rate`, reported
//!   as signed 64-bit cycles so schedulers can add and compare deadlines;
//! - the **secondary** hardware counter running at `cntfreq`, reported as
//!   unsigned 64-bit ticks.
//!
//! All arithmetic is integer-only and floor-rounded. Millisecond and
//! microsecond conversions to primary cycles use 64-bit arithmetic guarded by
//! a saturation threshold; everything else goes through the wide
//! multiply-divide primitive in [`crate::wide`].
//!
//! Negative inputs are clamped to zero by the total API. The `try_*` methods
//! reject them instead.

use crate::wide::mul_div;
use serde::Serialize;
use static_assertions::const_assert;
use std::time::Duration;
use timing_common::config::{ClockConfig, ConfigError};
use timing_common::error::{TimingError, TimingResult};
use timing_common::hardware::{BASE_CLOCK_RATE, CNTFREQ};
use timing_common::units::TimeUnit;
use tracing::{debug, error};

// Both rates are used as 32-bit divisors.
const_assert!(BASE_CLOCK_RATE > 0 && BASE_CLOCK_RATE <= u32::MAX as u64);
const_assert!(CNTFREQ > 0 && CNTFREQ <= u32::MAX as u64);

/// Which arithmetic path produced a primary cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionPath {
    /// Exact floor division, no precision lost.
    Exact,
    /// The input was reduced to whole seconds before scaling; the sub-second
    /// part was dropped.
    Truncated,
    /// The input could not be represented and the result is `i64::MAX`.
    Saturated,
}

/// A primary cycle count together with the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleConversion {
    /// Converted primary clock cycles.
    pub cycles: i64,
    /// Arithmetic path taken.
    pub path: ConversionPath,
}

/// Stateless converter capturing the two clock rates.
///
/// Cheap to copy and safe to share between threads; every method is a pure
/// function of its arguments and the captured rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleConverter {
    base_clock_rate: u32,
    cntfreq: u32,
    /// Largest count that can be multiplied by the base rate
    /// without leaving the signed 64-bit range.
    max_value_to_multiply: u64,
}

impl Default for CycleConverter {
    fn default() -> Self {
        Self::with_rates(BASE_CLOCK_RATE as u32, CNTFREQ as u32)
    }
}

impl CycleConverter {
    /// Build a converter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if either rate is zero or wider than
    /// 32 bits.
    pub fn new(config: &ClockConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let invalid = |field| ConfigError::Invalid {
            field,
            reason: "rate does not fit in 32 bits".into(),
        };
        let base = u32::try_from(config.base_clock_rate).map_err(|_| invalid("base_clock_rate"))?;
        let cntfreq = u32::try_from(config.cntfreq).map_err(|_| invalid("cntfreq"))?;
        Ok(Self::with_rates(base, cntfreq))
    }

    const fn with_rates(base_clock_rate: u32, cntfreq: u32) -> Self {
        Self {
            base_clock_rate,
            cntfreq,
            max_value_to_multiply: i64::MAX as u64 / base_clock_rate as u64,
        }
    }

    /// The configuration this converter was built from.
    #[must_use]
    pub fn config(&self) -> ClockConfig {
        ClockConfig::new(self.base_clock_rate(), self.cntfreq())
    }

    /// Primary clock rate in Hz.
    #[must_use]
    pub fn base_clock_rate(&self) -> u64 {
        u64::from(self.base_clock_rate)
    }

    /// Secondary counter frequency in Hz.
    #[must_use]
    pub fn cntfreq(&self) -> u64 {
        u64::from(self.cntfreq)
    }

    /// Saturation threshold for the guarded millisecond/microsecond paths.
    ///
    /// A duration whose whole-second count exceeds this value converts to
    /// `i64::MAX`.
    #[must_use]
    pub fn max_value_to_multiply(&self) -> u64 {
        self.max_value_to_multiply
    }

    // ------------------------------------------------------------------
    // Time -> primary cycles
    // ------------------------------------------------------------------

    /// Milliseconds to primary clock cycles.
    #[must_use]
    pub fn ms_to_cycles(&self, ms: i64) -> i64 {
        self.guarded_to_cycles(ms, TimeUnit::Milliseconds).cycles
    }

    /// Microseconds to primary clock cycles.
    #[must_use]
    pub fn us_to_cycles(&self, us: i64) -> i64 {
        self.guarded_to_cycles(us, TimeUnit::Microseconds).cycles
    }

    /// Nanoseconds to primary clock cycles.
    #[must_use]
    pub fn ns_to_cycles(&self, ns: i64) -> i64 {
        self.wide_to_cycles(ns).cycles
    }

    /// Convert `count` expressed in `unit` to primary clock cycles.
    #[must_use]
    pub fn to_cycles(&self, count: i64, unit: TimeUnit) -> i64 {
        self.convert_detailed(count, unit).cycles
    }

    /// Like [`to_cycles`](Self::to_cycles), also reporting the path taken.
    #[must_use]
    pub fn convert_detailed(&self, count: i64, unit: TimeUnit) -> CycleConversion {
        match unit {
            TimeUnit::Milliseconds | TimeUnit::Microseconds => self.guarded_to_cycles(count, unit),
            TimeUnit::Nanoseconds => self.wide_to_cycles(count),
        }
    }

    /// A [`Duration`] to primary clock cycles via the nanosecond path.
    ///
    /// Durations longer than `u64::MAX` nanoseconds saturate.
    #[must_use]
    pub fn duration_to_cycles(&self, duration: Duration) -> i64 {
        let ns = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        let cycles = mul_div(ns, self.base_clock_rate(), TimeUnit::Nanoseconds.per_second());
        i64::try_from(cycles).unwrap_or(i64::MAX)
    }

    /// Strict variant of [`to_cycles`](Self::to_cycles).
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::NegativeDuration`] for negative input and
    /// [`TimingError::Overflow`] when the total API would saturate.
    pub fn try_to_cycles(&self, count: i64, unit: TimeUnit) -> TimingResult<i64> {
        if count < 0 {
            return Err(TimingError::NegativeDuration { value: count, unit });
        }
        let conversion = self.convert_detailed(count, unit);
        match conversion.path {
            ConversionPath::Saturated => Err(TimingError::Overflow { value: count, unit }),
            ConversionPath::Exact | ConversionPath::Truncated => Ok(conversion.cycles),
        }
    }

    fn guarded_to_cycles(&self, count: i64, unit: TimeUnit) -> CycleConversion {
        let value = clamp_non_negative(count);
        let per_second = u64::from(unit.per_second());
        let base = self.base_clock_rate();

        if value / per_second > self.max_value_to_multiply {
            error!(value = count, %unit, "Integer overflow converting time to cycles, using max value");
            return CycleConversion {
                cycles: i64::MAX,
                path: ConversionPath::Saturated,
            };
        }
        if value > self.max_value_to_multiply {
            debug!(value = count, %unit, "Time value very large, rounding to whole seconds");
            // base * whole_seconds <= base * max_value_to_multiply <= i64::MAX
            return CycleConversion {
                cycles: to_signed(base * (value / per_second)),
                path: ConversionPath::Truncated,
            };
        }
        CycleConversion {
            cycles: to_signed(base * value / per_second),
            path: ConversionPath::Exact,
        }
    }

    fn wide_to_cycles(&self, ns: i64) -> CycleConversion {
        let cycles = mul_div(
            clamp_non_negative(ns),
            self.base_clock_rate(),
            TimeUnit::Nanoseconds.per_second(),
        );
        match i64::try_from(cycles) {
            Ok(cycles) => CycleConversion {
                cycles,
                path: ConversionPath::Exact,
            },
            Err(_) => {
                error!(value = ns, unit = %TimeUnit::Nanoseconds, "Integer overflow converting time to cycles, using max value");
                CycleConversion {
                    cycles: i64::MAX,
                    path: ConversionPath::Saturated,
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Time -> secondary clock ticks
    // ------------------------------------------------------------------

    /// Milliseconds to secondary clock ticks.
    #[must_use]
    pub fn ms_to_clock_cycles(&self, ms: i64) -> u64 {
        self.to_clock_cycles(ms, TimeUnit::Milliseconds)
    }

    /// Microseconds to secondary clock ticks.
    #[must_use]
    pub fn us_to_clock_cycles(&self, us: i64) -> u64 {
        self.to_clock_cycles(us, TimeUnit::Microseconds)
    }

    /// Nanoseconds to secondary clock ticks.
    #[must_use]
    pub fn ns_to_clock_cycles(&self, ns: i64) -> u64 {
        self.to_clock_cycles(ns, TimeUnit::Nanoseconds)
    }

    /// Convert `count` expressed in `unit` to secondary clock ticks.
    #[must_use]
    pub fn to_clock_cycles(&self, count: i64, unit: TimeUnit) -> u64 {
        mul_div(clamp_non_negative(count), self.cntfreq(), unit.per_second())
    }

    /// A [`Duration`] to secondary clock ticks.
    #[must_use]
    pub fn duration_to_clock_cycles(&self, duration: Duration) -> u64 {
        let ns = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        mul_div(ns, self.cntfreq(), TimeUnit::Nanoseconds.per_second())
    }

    // ------------------------------------------------------------------
    // Cross-clock
    // ------------------------------------------------------------------

    /// Resample a primary cycle count onto the secondary clock.
    #[must_use]
    pub fn cpu_cycles_to_clock_cycles(&self, ticks: u64) -> u64 {
        mul_div(ticks, self.cntfreq(), self.base_clock_rate)
    }

    /// Resample a secondary tick count onto the primary clock.
    #[must_use]
    pub fn clock_cycles_to_cpu_cycles(&self, ticks: u64) -> u64 {
        mul_div(ticks, self.base_clock_rate(), self.cntfreq)
    }

    // ------------------------------------------------------------------
    // Primary cycles -> time
    // ------------------------------------------------------------------

    /// Primary clock cycles to whole milliseconds.
    #[must_use]
    pub fn cycles_to_ms(&self, cycles: i64) -> Duration {
        Duration::from_millis(self.cycles_to_count(cycles, TimeUnit::Milliseconds))
    }

    /// Primary clock cycles to whole microseconds.
    #[must_use]
    pub fn cycles_to_us(&self, cycles: i64) -> Duration {
        Duration::from_micros(self.cycles_to_count(cycles, TimeUnit::Microseconds))
    }

    /// Primary clock cycles to whole nanoseconds.
    #[must_use]
    pub fn cycles_to_ns(&self, cycles: i64) -> Duration {
        Duration::from_nanos(self.cycles_to_count(cycles, TimeUnit::Nanoseconds))
    }

    /// Primary clock cycles to a duration truncated to `unit` granularity.
    #[must_use]
    pub fn cycles_to(&self, cycles: i64, unit: TimeUnit) -> Duration {
        match unit {
            TimeUnit::Milliseconds => self.cycles_to_ms(cycles),
            TimeUnit::Microseconds => self.cycles_to_us(cycles),
            TimeUnit::Nanoseconds => self.cycles_to_ns(cycles),
        }
    }

    /// Strict variant of [`cycles_to`](Self::cycles_to).
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::NegativeCycles`] for a negative cycle count.
    pub fn try_cycles_to(&self, cycles: i64, unit: TimeUnit) -> TimingResult<Duration> {
        if cycles < 0 {
            return Err(TimingError::NegativeCycles { value: cycles });
        }
        Ok(self.cycles_to(cycles, unit))
    }

    fn cycles_to_count(&self, cycles: i64, unit: TimeUnit) -> u64 {
        mul_div(
            clamp_non_negative(cycles),
            u64::from(unit.per_second()),
            self.base_clock_rate,
        )
    }
}

fn clamp_non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
