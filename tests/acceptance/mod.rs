//! End-to-end conversion tests.
//!
//! Every test builds its converter from configuration, never from the
//! hardware constants directly.

mod common;
mod concurrency_test;
mod config_test;
mod scheduling_test;
