#![doc = "Common types shared across the core timing workspace."]

pub mod config;
pub mod error;
pub mod hardware;
pub mod units;

pub use config::*;
pub use error::*;
pub use hardware::*;
pub use units::*;
