//! Headless stopwatch run.

use crate::error::TomatickError;
use crate::features::timer::{parse_duration, Stopwatch};
use crate::output::TimerEvent;

use super::HeadlessRun;

/// A running stopwatch that reports every second.
pub struct StopwatchRun {
    stopwatch: Stopwatch,
    limit_seconds: Option<u64>,
}

impl StopwatchRun {
    /// Start a run, stopping once `limit_seconds` have elapsed.
    #[must_use]
    pub fn new(limit_seconds: Option<u64>) -> Self {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start();
        Self {
            stopwatch,
            limit_seconds,
        }
    }

    /// Build from the `--limit` argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the limit is not a valid duration.
    pub fn from_limit(limit: Option<&str>) -> Result<Self, TomatickError> {
        let limit_seconds = limit
            .map(|s| {
                parse_duration(s)
                    .and_then(|d| u64::try_from(d.num_seconds()).ok())
                    .ok_or_else(|| TomatickError::InvalidInput(format!("Invalid duration: {s}")))
            })
            .transpose()?;
        Ok(Self::new(limit_seconds))
    }
}

impl HeadlessRun for StopwatchRun {
    fn initial_events(&self) -> Vec<TimerEvent> {
        vec![TimerEvent::Stopwatch(self.stopwatch.snapshot())]
    }

    fn on_tick(&mut self) -> Vec<TimerEvent> {
        self.stopwatch.tick();
        let mut snapshot = self.stopwatch.snapshot();
        if self.is_finished() {
            self.stopwatch.pause();
            snapshot.running = false;
        }
        vec![TimerEvent::Stopwatch(snapshot)]
    }

    fn is_finished(&self) -> bool {
        self.limit_seconds
            .is_some_and(|limit| self.stopwatch.elapsed_seconds() >= limit)
    }
}
