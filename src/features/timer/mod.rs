//! Stopwatch and Pomodoro timers.
//!
//! Both timers are plain state machines advanced one second at a time by
//! their `tick` methods; [`Ticker`] decides when a second has passed.

pub mod clock;
pub mod format;
pub mod pomodoro;
pub mod stopwatch;

pub use clock::{Ticker, TICK};
pub use format::{
    format_countdown, format_duration, format_seconds, format_stopwatch, parse_duration,
    render_progress_bar,
};
pub use pomodoro::{
    Phase, PhaseTransition, Pomodoro, PomodoroSnapshot, BREAK_SECONDS, FOCUS_SECONDS,
};
pub use stopwatch::{Stopwatch, StopwatchSnapshot};
