//! Clock-rate configuration.
//!
//! Supports TOML deserialization with the default hardware profile filling
//! in any rate that is not given explicitly.

use crate::hardware::{BASE_CLOCK_RATE, CNTFREQ};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Rates of the two cycle counters, fixed for the lifetime of a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Primary (CPU) clock rate in Hz.
    pub base_clock_rate: u64,

    /// Secondary hardware counter frequency in Hz.
    pub cntfreq: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            base_clock_rate: BASE_CLOCK_RATE,
            cntfreq: CNTFREQ,
        }
    }
}

impl ClockConfig {
    /// Build a configuration from explicit rates.
    #[must_use]
    pub const fn new(base_clock_rate: u64, cntfreq: u64) -> Self {
        Self {
            base_clock_rate,
            cntfreq,
        }
    }

    /// Check that both rates are usable as divisors of the wide primitive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a rate is zero or does not fit in
    /// 32 bits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("base_clock_rate", self.base_clock_rate)?;
        check_rate("cntfreq", self.cntfreq)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(?path, "Loading clock configuration");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Serialize configuration to TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

fn check_rate(field: &'static str, rate: u64) -> Result<(), ConfigError> {
    if rate == 0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "rate must be non-zero".into(),
        });
    }
    if u32::try_from(rate).is_err() {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("rate {rate} Hz does not fit in 32 bits"),
        });
    }
    Ok(())
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A rate is outside the range the converters support.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}
