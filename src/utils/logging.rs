use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("NETSIM_LOGGING must be 'true' or 'false', got '{0}'")]
    InvalidSwitch(String),
    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Most verbose level the installed subscriber emits
pub const MAX_LEVEL: tracing::Level = tracing::Level::INFO;

/// Initializes logging based on environment variables:
/// - NETSIM_LOGGING: enables/disables logging (true/false, unset means false)
/// - NETSIM_LOG_FILE: when set, log lines are appended to this file instead of stdout
/// - To enable logging in tests, run: NETSIM_LOGGING=true cargo test -- --nocapture
///
/// Only the first successful call installs a subscriber; later calls are no-ops.
pub fn init_logging() -> Result<(), LoggingError> {
    let enabled = match env::var("NETSIM_LOGGING") {
        Ok(value) => match value.as_str() {
            "true" => true,
            "false" => false,
            other => return Err(LoggingError::InvalidSwitch(other.to_string())),
        },
        Err(_) => false,
    };
    if !enabled {
        return Ok(());
    }

    let builder = tracing_subscriber::fmt()
        .with_max_level(MAX_LEVEL)
        .with_target(false);

    // try_init fails only when a subscriber is already installed
    match env::var("NETSIM_LOG_FILE") {
        Ok(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| LoggingError::LogFile { path, source })?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        Err(_) => {
            let _ = builder.try_init();
        }
    }
    Ok(())
}

/// Emits a `[PREFIX] message` line through the installed subscriber
pub fn log(prefix: &str, message: &str) {
    tracing::info!("[{}]   {}", prefix, message);
}
