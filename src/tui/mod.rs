//! Terminal dashboard for tomatick.
//!
//! Shows the stopwatch and the focus countdown side by side.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Panel};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::TomatickError;
use crate::features::notify::Notifier;

/// Longest time the loop blocks waiting for input.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Run the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run(notifier: &dyn Notifier) -> Result<(), TomatickError> {
    enable_raw_mode().map_err(|e| TomatickError::terminal("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomatickError::terminal("Failed to setup terminal", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomatickError::terminal("Failed to create terminal", e))?;

    tracing::info!("dashboard started");
    let mut app = App::new(notifier);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    tracing::info!(
        stopwatch = app.stopwatch.elapsed_seconds(),
        cycles = app.pomodoro.cycles(),
        "dashboard closed"
    );
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), TomatickError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomatickError::terminal("Failed to draw", e))?;

        let timeout = app.poll_timeout(Instant::now(), MAX_POLL);
        if let Some(action) = event::handle_events(timeout)? {
            apply(app, action, Instant::now());
        }

        app.on_time(Instant::now());
    }

    Ok(())
}

fn apply(app: &mut App<'_>, action: event::Action, now: Instant) {
    use event::Action;

    match action {
        Action::Quit => app.quit(),
        Action::SelectOther => app.select_other(),
        Action::SelectStopwatch => app.select(Panel::Stopwatch),
        Action::SelectFocus => app.select(Panel::Focus),
        Action::Start => app.start_selected(now),
        Action::Pause => app.pause_selected(),
        Action::Toggle => app.toggle_selected(now),
        Action::Reset => app.reset_selected(),
        Action::ResetAll => app.reset_all(),
        Action::Help => app.show_help(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notify::MockNotifier;

    #[test]
    fn test_apply_actions() {
        let notifier = MockNotifier::new();
        let mut app = App::new(&notifier);
        let now = Instant::now();

        apply(&mut app, event::Action::SelectFocus, now);
        apply(&mut app, event::Action::Start, now);
        assert!(app.pomodoro.is_running());

        apply(&mut app, event::Action::Pause, now);
        assert!(!app.pomodoro.is_running());

        apply(&mut app, event::Action::SelectOther, now);
        assert_eq!(app.selected, Panel::Stopwatch);

        apply(&mut app, event::Action::Help, now);
        assert_eq!(app.status.as_deref(), Some(super::app::HELP));

        apply(&mut app, event::Action::Quit, now);
        assert!(app.should_quit);
    }
}
