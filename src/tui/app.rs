//! Application state for the dashboard.

use std::time::{Duration, Instant};

use crate::features::notify::{announce, Notifier};
use crate::features::timer::{Pomodoro, Stopwatch, Ticker};

/// Key help shown in the status bar.
pub const HELP: &str =
    "Tab:panel | s/Space:start/pause | Enter:start | p:pause | r:reset | R:reset all | ?:help | q:quit";

/// Which panel keyboard controls apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Stopwatch,
    Focus,
}

impl Panel {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Stopwatch => Self::Focus,
            Self::Focus => Self::Stopwatch,
        }
    }
}

/// Dashboard state: both timers, their tick sources and the UI selection.
pub struct App<'a> {
    notifier: &'a dyn Notifier,
    /// Elapsed-time counter.
    pub stopwatch: Stopwatch,
    /// Focus/break countdown.
    pub pomodoro: Pomodoro,
    stopwatch_ticker: Ticker,
    pomodoro_ticker: Ticker,
    /// Currently selected panel.
    pub selected: Panel,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the dashboard with both timers stopped.
    pub fn new(notifier: &'a dyn Notifier) -> Self {
        Self {
            notifier,
            stopwatch: Stopwatch::new(),
            pomodoro: Pomodoro::new(),
            stopwatch_ticker: Ticker::default(),
            pomodoro_ticker: Ticker::default(),
            selected: Panel::default(),
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    pub fn select(&mut self, panel: Panel) {
        self.selected = panel;
    }

    pub fn select_other(&mut self) {
        self.selected = self.selected.other();
    }

    pub fn start_stopwatch(&mut self, now: Instant) {
        if !self.stopwatch.is_running() {
            self.stopwatch.start();
            self.stopwatch_ticker.arm(now);
        }
    }

    pub fn pause_stopwatch(&mut self) {
        self.stopwatch.pause();
        self.stopwatch_ticker.disarm();
    }

    pub fn reset_stopwatch(&mut self) {
        self.stopwatch.reset();
        self.stopwatch_ticker.disarm();
    }

    pub fn start_pomodoro(&mut self, now: Instant) {
        if !self.pomodoro.is_running() {
            self.pomodoro.start();
            self.pomodoro_ticker.arm(now);
        }
    }

    pub fn pause_pomodoro(&mut self) {
        self.pomodoro.pause();
        self.pomodoro_ticker.disarm();
    }

    pub fn reset_pomodoro(&mut self) {
        self.pomodoro.reset();
        self.pomodoro_ticker.disarm();
    }

    /// Start the selected timer.
    pub fn start_selected(&mut self, now: Instant) {
        match self.selected {
            Panel::Stopwatch => self.start_stopwatch(now),
            Panel::Focus => self.start_pomodoro(now),
        }
    }

    /// Pause the selected timer.
    pub fn pause_selected(&mut self) {
        match self.selected {
            Panel::Stopwatch => self.pause_stopwatch(),
            Panel::Focus => self.pause_pomodoro(),
        }
    }

    /// Start the selected timer if stopped, pause it if running.
    pub fn toggle_selected(&mut self, now: Instant) {
        if self.selected_running() {
            self.pause_selected();
        } else {
            self.start_selected(now);
        }
    }

    /// Reset the selected timer.
    pub fn reset_selected(&mut self) {
        match self.selected {
            Panel::Stopwatch => self.reset_stopwatch(),
            Panel::Focus => self.reset_pomodoro(),
        }
    }

    /// Reset both timers.
    pub fn reset_all(&mut self) {
        self.reset_stopwatch();
        self.reset_pomodoro();
        self.status = Some("Both timers reset".to_string());
    }

    #[must_use]
    pub const fn selected_running(&self) -> bool {
        match self.selected {
            Panel::Stopwatch => self.stopwatch.is_running(),
            Panel::Focus => self.pomodoro.is_running(),
        }
    }

    /// Deliver every tick due at `now` to the running timers.
    pub fn on_time(&mut self, now: Instant) {
        for _ in 0..self.stopwatch_ticker.due(now) {
            self.stopwatch.tick();
        }

        for _ in 0..self.pomodoro_ticker.due(now) {
            if let Some(transition) = self.pomodoro.tick() {
                // The finished phase stops the countdown; later ticks are stale
                self.pomodoro_ticker.disarm();
                announce(self.notifier, &transition);
                self.status = Some(format!(
                    "{} {}",
                    transition.title(),
                    transition.message()
                ));
                break;
            }
        }
    }

    /// How long the event loop may block before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        [
            self.stopwatch_ticker.until_next(now),
            self.pomodoro_ticker.until_next(now),
        ]
        .into_iter()
        .flatten()
        .fold(max, Duration::min)
    }

    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
