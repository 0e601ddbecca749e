//! Replay Sample Application
//!
//! Builds a few Read/Write programs from configuration and interprets each of
//! them twice: into every possible result, and into the latest-write result.

pub mod config;
pub mod scenario;

pub use config::{ConfigError, ReplayConfig};
pub use scenario::{Outcome, Scenario, replay, scenarios};
