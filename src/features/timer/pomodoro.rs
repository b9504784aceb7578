//! Pomodoro focus/break countdown.
//!
//! The countdown alternates between a 25 minute focus phase and a 5 minute
//! break. When a phase runs out the timer stops, flips to the other phase and
//! waits for the next start. Every focus phase that runs out counts as one
//! completed cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::format_countdown;

/// Length of a focus phase in seconds.
pub const FOCUS_SECONDS: u64 = 25 * 60;
/// Length of a break phase in seconds.
pub const BREAK_SECONDS: u64 = 5 * 60;

/// Which half of the cycle the countdown is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Working on a task.
    #[default]
    Focus,
    /// Resting between focus phases.
    Break,
}

impl Phase {
    /// Full length of this phase in seconds.
    #[must_use]
    pub const fn duration_seconds(self) -> u64 {
        match self {
            Self::Focus => FOCUS_SECONDS,
            Self::Break => BREAK_SECONDS,
        }
    }

    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Short line shown under the panel title.
    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Focus => "Stay focused",
            Self::Break => "Time for a break",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Emitted by [`Pomodoro::tick`] when a phase runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase that just finished.
    pub from: Phase,
    /// Phase now waiting to be started.
    pub to: Phase,
    /// Completed cycles after the transition.
    pub cycles: u32,
}

impl PhaseTransition {
    /// Notification title for this transition.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.from {
            Phase::Focus => "Pomodoro Complete!",
            Phase::Break => "Break Complete!",
        }
    }

    /// Notification body for this transition.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.from {
            Phase::Focus => "Great job! Time for a well-deserved break! 🎉",
            Phase::Break => "Ready to focus? Let's get back to work! 💪",
        }
    }

    /// True when a focus phase just completed.
    #[must_use]
    pub const fn completed_cycle(&self) -> bool {
        matches!(self.from, Phase::Focus)
    }
}

/// The focus/break countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    phase: Phase,
    remaining_seconds: u64,
    running: bool,
    cycles: u32,
}

/// Serializable view of a pomodoro timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSnapshot {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub running: bool,
    pub cycles: u32,
    /// Remaining time as shown on screen.
    pub display: String,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new()
    }
}

impl Pomodoro {
    /// A stopped timer at the start of a focus phase with no cycles.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Focus,
            remaining_seconds: FOCUS_SECONDS,
            running: false,
            cycles: 0,
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(phase = %self.phase, remaining = self.remaining_seconds, "pomodoro started");
            self.running = true;
        }
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        if self.running {
            tracing::debug!(phase = %self.phase, remaining = self.remaining_seconds, "pomodoro paused");
            self.running = false;
        }
    }

    /// Back to a stopped focus phase with the cycle count cleared.
    pub fn reset(&mut self) {
        tracing::debug!(cycles = self.cycles, "pomodoro reset");
        *self = Self::new();
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the transition when this tick finished the current phase.
    pub fn tick(&mut self) -> Option<PhaseTransition> {
        if !self.running {
            return None;
        }

        if self.remaining_seconds > 1 {
            self.remaining_seconds -= 1;
            return None;
        }

        let from = self.phase;
        let to = from.next();
        if from == Phase::Focus {
            self.cycles = self.cycles.saturating_add(1);
        }

        self.running = false;
        self.phase = to;
        self.remaining_seconds = to.duration_seconds();

        tracing::info!(%from, %to, cycles = self.cycles, "phase finished");
        Some(PhaseTransition {
            from,
            to,
            cycles: self.cycles,
        })
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Fraction of the current phase already spent, `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.phase.duration_seconds();
        1.0 - (self.remaining_seconds as f64 / total as f64)
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_countdown(self.remaining_seconds)
    }

    /// "`N` cycles completed".
    #[must_use]
    pub fn cycles_label(&self) -> String {
        format!("{} cycles completed", self.cycles)
    }

    #[must_use]
    pub fn snapshot(&self) -> PomodoroSnapshot {
        PomodoroSnapshot {
            phase: self.phase,
            remaining_seconds: self.remaining_seconds,
            running: self.running,
            cycles: self.cycles,
            display: self.display(),
        }
    }
}
