//! Event handling for the dashboard.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TomatickError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Switch to the other panel.
    SelectOther,
    /// Select the stopwatch panel.
    SelectStopwatch,
    /// Select the focus panel.
    SelectFocus,
    /// Start the selected timer.
    Start,
    /// Pause the selected timer.
    Pause,
    /// Start or pause the selected timer.
    Toggle,
    /// Reset the selected timer.
    Reset,
    /// Reset both timers.
    ResetAll,
    /// Show key help.
    Help,
}

/// Map a key press to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SelectOther),
        KeyCode::Left | KeyCode::Char('h' | '1') => Some(Action::SelectStopwatch),
        KeyCode::Right | KeyCode::Char('l' | '2') => Some(Action::SelectFocus),
        KeyCode::Char('s' | ' ') => Some(Action::Toggle),
        KeyCode::Enter => Some(Action::Start),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('R') => Some(Action::ResetAll),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns the action for a key press, or None if nothing relevant happened.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, TomatickError> {
    if !event::poll(timeout).map_err(|e| TomatickError::terminal("Event poll failed", e))? {
        return Ok(None);
    }

    match event::read().map_err(|e| TomatickError::terminal("Event read failed", e))? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}
