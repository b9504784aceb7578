//! Path resolution for tomatick configuration and log files.
//!
//! Everything lives under `~/.tomatick/` unless `TOMATICK_HOME` is set:
//! - `config.yaml` - Main configuration file
//! - `logs/tomatick.log` - Log output while the dashboard owns the terminal

use std::path::PathBuf;

use crate::error::TomatickError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "TOMATICK_HOME";

/// Paths to tomatick configuration and log files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomatick/`
    pub root: PathBuf,
    /// Config file: `~/.tomatick/config.yaml`
    pub config_file: PathBuf,
    /// Log directory: `~/.tomatick/logs/`
    pub logs: PathBuf,
    /// Log file: `~/.tomatick/logs/tomatick.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `TOMATICK_HOME`, falling back to `$HOME/.tomatick`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, TomatickError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var_os("HOME").ok_or_else(|| {
            TomatickError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".tomatick")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        let logs = root.join("logs");
        Self {
            config_file: root.join("config.yaml"),
            log_file: logs.join("tomatick.log"),
            logs,
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TomatickError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    TomatickError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".tomatick")))
    }
}
