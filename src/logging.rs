//! Logging setup
//!
//! Diagnostics go through `tracing`. The filter comes from `BUDGET_LOG` if
//! set, otherwise from the `-v` count, otherwise from the settings file. The
//! CLI logs to stderr; the TUI logs to a file so it doesn't draw over the
//! screen.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "BUDGET_LOG";

/// Pick the filter directive to use
pub fn filter_directive(configured: &str, verbosity: u8) -> String {
    if let Ok(from_env) = std::env::var(LOG_ENV) {
        if !from_env.trim().is_empty() {
            return from_env;
        }
    }
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// With `log_file` set, output is appended to that file instead of stderr.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(configured: &str, verbosity: u8, log_file: Option<&Path>) -> BudgetResult<()> {
    let filter = build_filter(&filter_directive(configured, verbosity));

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| BudgetError::Io(format!("Failed to open log file: {}", e)))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
    Ok(())
}
