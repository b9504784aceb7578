//! Tracing subscriber setup.
//!
//! The dashboard draws over the whole terminal, so its logs go to a file.
//! Headless commands log to stderr, leaving stdout for their output.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, Paths};
use crate::error::TomatickError;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the log file under the tomatick root.
    File,
    /// Write to stderr.
    Stderr,
}

/// Configured directive for `target`; stderr stays quiet so it doesn't mix
/// with timer output.
fn level(config: &LoggingConfig, target: LogTarget) -> &str {
    match target {
        LogTarget::File => &config.level,
        LogTarget::Stderr => &config.console_level,
    }
}

fn filter(config: &LoggingConfig, target: LogTarget) -> Result<EnvFilter, TomatickError> {
    let level = level(config, target);
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| TomatickError::Config(format!("Invalid log level '{level}': {e}")))
}

/// Install the global subscriber.
///
/// File logging that is switched off in the config installs nothing. Calling
/// this twice keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if the level directive is invalid or the log file cannot
/// be opened.
pub fn init(config: &LoggingConfig, paths: &Paths, target: LogTarget) -> Result<(), TomatickError> {
    let filter = filter(config, target)?;

    let installed = match target {
        LogTarget::File if !config.file => return Ok(()),
        LogTarget::File => {
            paths.ensure_dirs()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&paths.log_file)?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_level_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "tomatick=loud".to_string(),
            file: false,
            ..LoggingConfig::default()
        };
        assert!(filter(&config, LogTarget::File).is_err());
        assert!(filter(&config, LogTarget::Stderr).is_ok());
    }

    #[test]
    fn test_headless_logging_defaults_to_warn() {
        let config = LoggingConfig::default();
        assert_eq!(level(&config, LogTarget::Stderr), "warn");
        assert_eq!(level(&config, LogTarget::File), "info");
    }

    #[test]
    fn test_file_logging_disabled_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("root"));
        let config = LoggingConfig {
            file: false,
            ..LoggingConfig::default()
        };

        init(&config, &paths, LogTarget::File).unwrap();
        assert!(!paths.log_file.exists());
    }
}
