//! Diagnostic logging setup
//!
//! The terminal UI owns stdout, so log output goes to `budget.log` in the
//! config directory instead of the console.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, WizardPaths};
use crate::error::{BudgetError, BudgetResult};

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "BUDGET_WIZARD_LOG";

/// Build the log filter: env var first, then the configured level
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
}

/// Install the global tracing subscriber
///
/// If the log file cannot be opened, events are discarded rather than
/// failing startup.
pub fn init(paths: &WizardPaths, settings: &Settings) -> BudgetResult<()> {
    let filter = build_filter(settings);

    let file = paths.ensure_directories().and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())
            .map_err(BudgetError::from)
    });

    let installed = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init(),
    };

    installed.map_err(|e| BudgetError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_settings_level() {
        let settings = Settings {
            log_level: "debug".to_string(),
            ..Settings::default()
        };
        if std::env::var_os(LOG_ENV_VAR).is_none() {
            assert_eq!(build_filter(&settings).to_string(), "debug");
        }
    }
}
