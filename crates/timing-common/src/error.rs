use crate::units::TimeUnit;
use thiserror::Error;

/// Errors reported by the strict conversion API.
///
/// The total conversions never fail; they saturate or clamp instead and
/// leave it to the caller to treat the result as an effectively infinite
/// deadline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimingError {
    /// A negative duration was passed where only non-negative time is meaningful.
    #[error("negative duration: {value}{unit}")]
    NegativeDuration {
        /// Offending duration count.
        value: i64,
        /// Unit of the count.
        unit: TimeUnit,
    },

    /// A negative cycle count was passed to a cycles-to-time conversion.
    #[error("negative cycle count: {value}")]
    NegativeCycles {
        /// Offending cycle count.
        value: i64,
    },

    /// The duration is too large to be represented as primary clock cycles.
    #[error("duration {value}{unit} overflows the primary cycle counter")]
    Overflow {
        /// Offending duration count.
        value: i64,
        /// Unit of the count.
        unit: TimeUnit,
    },
}

/// Convenience type alias for strict timing conversions.
pub type TimingResult<T> = Result<T, TimingError>;
