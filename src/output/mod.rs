//! Output formatting for tomatick.
//!
//! Headless commands report a stream of [`TimerEvent`]s, printed either as
//! colored console lines or as one JSON object per line.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::TomatickError;
use crate::features::timer::{PhaseTransition, PomodoroSnapshot, StopwatchSnapshot};

pub use json::*;
pub use pretty::*;

/// Something worth printing while a timer runs headless.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// Stopwatch reading.
    Stopwatch(StopwatchSnapshot),
    /// Countdown reading.
    Pomodoro(PomodoroSnapshot),
    /// A phase just ran out.
    Transition(PhaseTransition),
}

/// Format an event based on output format.
///
/// # Errors
///
/// Returns `TomatickError::Parse` if JSON serialization fails.
pub fn format_event(event: &TimerEvent, format: OutputFormat) -> Result<String, TomatickError> {
    match format {
        OutputFormat::Json => to_json_line(event),
        OutputFormat::Pretty => Ok(match event {
            TimerEvent::Stopwatch(s) => format_stopwatch_pretty(s),
            TimerEvent::Pomodoro(p) => format_pomodoro_pretty(p),
            TimerEvent::Transition(t) => format_transition_pretty(t),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::{Phase, Pomodoro};

    #[test]
    fn test_json_event_is_tagged() {
        let event = TimerEvent::Pomodoro(Pomodoro::new().snapshot());
        let line = format_event(&event, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["event"], "pomodoro");
        assert_eq!(value["phase"], "focus");
        assert_eq!(value["remaining_seconds"], 1500);
    }

    #[test]
    fn test_json_transition() {
        let event = TimerEvent::Transition(PhaseTransition {
            from: Phase::Break,
            to: Phase::Focus,
            cycles: 2,
        });
        let line = format_event(&event, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["event"], "transition");
        assert_eq!(value["from"], "break");
        assert_eq!(value["cycles"], 2);
    }
}
