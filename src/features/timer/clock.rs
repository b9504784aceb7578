//! Once-per-second tick source.
//!
//! A [`Ticker`] is armed when its timer starts and disarmed when it pauses or
//! resets. Polling it reports how many whole periods have passed since the
//! last poll, so a slow event loop delivers late ticks instead of losing them.

use std::time::{Duration, Instant};

/// Default tick period.
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    /// Instant of the last delivered tick, or of arming. `None` while disarmed.
    anchor: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK)
    }
}

impl Ticker {
    /// A disarmed ticker with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            anchor: None,
        }
    }

    /// Start a fresh interval; the first tick is due one period after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.anchor = Some(now);
    }

    /// Stop delivering ticks.
    pub fn disarm(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Number of ticks due at `now`, advancing the anchor past them.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let period = self.period.as_nanos().max(1);
        let ticks = u32::try_from(elapsed.as_nanos() / period).unwrap_or(u32::MAX);
        if ticks > 0 {
            self.anchor = Some(anchor + self.period * ticks);
        }
        ticks
    }

    /// Time left until the next tick, or `None` while disarmed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.anchor
            .map(|anchor| (anchor + self.period).saturating_duration_since(now))
    }
}
