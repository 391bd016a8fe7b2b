//! Wall-clock time units accepted by the converters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a duration count is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Milliseconds (1/1_000 s).
    #[serde(alias = "ms")]
    Milliseconds,
    /// Microseconds (1/1_000_000 s).
    #[serde(alias = "us")]
    Microseconds,
    /// Nanoseconds (1/1_000_000_000 s).
    #[default]
    #[serde(alias = "ns")]
    Nanoseconds,
}

impl TimeUnit {
    /// All units, coarsest first.
    pub const ALL: [TimeUnit; 3] = [
        TimeUnit::Milliseconds,
        TimeUnit::Microseconds,
        TimeUnit::Nanoseconds,
    ];

    /// Number of units in one second.
    ///
    /// Always fits in 32 bits so it can serve as the divisor of the wide
    /// multiply-divide primitive.
    #[must_use]
    pub const fn per_second(self) -> u32 {
        match self {
            Self::Milliseconds => 1_000,
            Self::Microseconds => 1_000_000,
            Self::Nanoseconds => 1_000_000_000,
        }
    }

    /// Short suffix used in logs and CLI output.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "milliseconds" => Ok(Self::Milliseconds),
            "us" | "µs" | "microseconds" => Ok(Self::Microseconds),
            "ns" | "nanoseconds" => Ok(Self::Nanoseconds),
            other => Err(format!("unknown time unit '{other}' (expected ms, us or ns)")),
        }
    }
}
