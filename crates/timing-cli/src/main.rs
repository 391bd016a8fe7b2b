//! Cycle/time converter entry point.
//!
//! Loads the clock-rate configuration and converts durations to primary and
//! secondary cycle counts, or cycle counts back to durations.

mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use timing_common::{ClockConfig, TimeUnit, TimingError};
use timing_core::{ConversionPath, CycleConverter};
use tracing::{info, warn};

use crate::report::{FromCyclesReport, ToCyclesReport};

/// Environment variable naming a clock configuration file.
const CONFIG_ENV: &str = "CORE_TIMING_CONFIG";

/// Local development configuration path.
const LOCAL_CONFIG_PATH: &str = "config/clock.toml";

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "timing-cli",
    about = "Convert between wall-clock durations and emulated cycle counts",
    version,
    long_about = None
)]
struct Args {
    /// Path to a clock configuration file (TOML).
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    log_level: String,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a duration to primary cycles and secondary clock ticks.
    ToCycles {
        /// Duration such as `1500ms` or `2s`, or a bare integer with `--unit`.
        duration: String,

        /// Unit of a bare integer duration (ms, us, ns).
        #[arg(long, short = 'u')]
        unit: Option<TimeUnit>,
    },

    /// Convert a primary cycle count to a duration.
    FromCycles {
        /// Primary clock cycles.
        #[arg(allow_hyphen_values = true)]
        cycles: i64,
    },

    /// Print the effective clock configuration.
    ShowConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    let config = load_config(&args)?;
    let conv = CycleConverter::new(&config).context("Invalid clock configuration")?;
    info!(
        base_clock_rate = conv.base_clock_rate(),
        cntfreq = conv.cntfreq(),
        "Configuration loaded"
    );

    match &args.command {
        Command::ToCycles { duration, unit } => {
            let (count, unit) = parse_duration(duration, *unit)?;
            if count < 0 {
                return Err(TimingError::NegativeDuration { value: count, unit })
                    .context("Cannot convert a negative duration");
            }
            let report = ToCyclesReport::new(&conv, duration, count, unit);
            if report.path == ConversionPath::Saturated {
                warn!(%duration, "Duration does not fit the cycle counter");
            }
            emit(&report, args.json)
        }
        Command::FromCycles { cycles } => {
            let cycles = *cycles;
            let ms = conv
                .try_cycles_to(cycles, TimeUnit::Milliseconds)
                .context("Cannot convert cycles to time")?;
            let us = conv.cycles_to_us(cycles);
            let ns = conv.cycles_to_ns(cycles);
            emit(&FromCyclesReport::new(&conv, cycles, ms, us, ns), args.json)
        }
        Command::ShowConfig => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", config.to_toml()?);
            }
            Ok(())
        }
    }
}

/// Initialize logging with the specified log level.
fn init_logging(level: &str) {
    let filter = format!("timing_cli={level},timing_core={level},timing_common={level}");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from file or use defaults.
///
/// Resolution priority (first existing file wins):
/// 1. Command-line `--config` argument
/// 2. `CORE_TIMING_CONFIG` environment variable
/// 3. `config/clock.toml` (local development)
/// 4. Built-in hardware profile
fn load_config(args: &Args) -> Result<ClockConfig> {
    if let Some(config_path) = &args.config {
        info!(?config_path, "Loading config from command-line argument");
        return ClockConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        let config_path = PathBuf::from(&env_path);
        if config_path.exists() {
            info!(?config_path, "Loading config from {CONFIG_ENV}");
            return ClockConfig::from_file(&config_path)
                .with_context(|| format!("Failed to load config from {CONFIG_ENV}={env_path:?}"));
        }
        warn!(
            path = %env_path,
            "{CONFIG_ENV} set but file does not exist, checking other locations"
        );
    }

    let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
    if local_path.exists() {
        info!(?local_path, "Loading config from local path");
        return ClockConfig::from_file(&local_path)
            .with_context(|| format!("Failed to load config from {local_path:?}"));
    }

    info!("No config file found, using hardware profile defaults");
    Ok(ClockConfig::default())
}

/// Parse a duration argument into a count and unit.
///
/// With an explicit unit the argument must be an integer. Otherwise it is
/// parsed as a human-readable duration and converted on the nanosecond path.
fn parse_duration(input: &str, unit: Option<TimeUnit>) -> Result<(i64, TimeUnit)> {
    if let Some(unit) = unit {
        let count = input
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Expected an integer count of {unit}, got {input:?}"))?;
        return Ok((count, unit));
    }

    let duration = humantime::parse_duration(input)
        .with_context(|| format!("Failed to parse duration {input:?} (try `1500ms` or `--unit`)"))?;
    match i64::try_from(duration.as_nanos()) {
        Ok(ns) => Ok((ns, TimeUnit::Nanoseconds)),
        Err(_) => bail!("Duration {input:?} exceeds the nanosecond range"),
    }
}

fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
