//! Elapsed-time stopwatch.

use serde::{Deserialize, Serialize};

use super::format::format_stopwatch;

/// A counter of elapsed seconds, advanced by [`Stopwatch::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_seconds: u64,
    running: bool,
}

/// Serializable view of a stopwatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwatchSnapshot {
    /// Seconds counted so far.
    pub elapsed_seconds: u64,
    /// Whether ticks are being counted.
    pub running: bool,
    /// Elapsed time as shown on screen.
    pub display: String,
}

impl Stopwatch {
    /// Create a stopped stopwatch at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Start counting.
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(elapsed = self.elapsed_seconds, "stopwatch started");
            self.running = true;
        }
    }

    /// Stop counting, keeping the elapsed time.
    pub fn pause(&mut self) {
        if self.running {
            tracing::debug!(elapsed = self.elapsed_seconds, "stopwatch paused");
            self.running = false;
        }
    }

    /// Stop and clear back to zero.
    pub fn reset(&mut self) {
        tracing::debug!("stopwatch reset");
        self.running = false;
        self.elapsed_seconds = 0;
    }

    /// Advance by one second if running.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time as `M:SS` or `H:MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_stopwatch(self.elapsed_seconds)
    }

    #[must_use]
    pub fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            elapsed_seconds: self.elapsed_seconds,
            running: self.running,
            display: self.display(),
        }
    }
}
