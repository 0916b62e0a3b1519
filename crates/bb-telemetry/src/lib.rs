//! # Branch-Bench Telemetry
//!
//! Structured logging for the benchmark harness, built on
//! `tracing-subscriber`. Logs go to stderr so stdout carries only the report.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bb_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BB_LOG_LEVEL` / `RUST_LOG` | `warn` | Log level filter |
//! | `BB_JSON_LOGS` | `false` | JSON formatted logs |
//! | `BB_CONSOLE_OUTPUT` | `true` | Emit logs at all |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed or could not be set
    #[error("Failed to initialize subscriber: {0}")]
    SubscriberInit(String),
}
