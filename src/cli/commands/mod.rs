//! Command implementations for tomatick.

mod config;
mod focus;
mod stopwatch;

pub use config::config;
pub use focus::FocusRun;
pub use stopwatch::StopwatchRun;

use std::io::Write;
use std::thread;
use std::time::Instant;

use clap_complete::Shell;

use crate::cli::args::{FocusArgs, OutputFormat, StopwatchArgs};
use crate::error::TomatickError;
use crate::features::completions::{completion_install_instructions, generate_completions};
use crate::features::notify::Notifier;
use crate::features::timer::Ticker;
use crate::output::{format_event, format_focus_intro, TimerEvent};

/// A timer driven from the console, one tick per second.
pub trait HeadlessRun {
    /// Events to print before the first tick.
    fn initial_events(&self) -> Vec<TimerEvent>;
    /// Advance by one second, returning what to print.
    fn on_tick(&mut self) -> Vec<TimerEvent>;
    /// True once the run should end.
    fn is_finished(&self) -> bool;
}

fn emit<W: Write>(out: &mut W, events: &[TimerEvent], format: OutputFormat) -> Result<(), TomatickError> {
    for event in events {
        writeln!(out, "{}", format_event(event, format)?)?;
    }
    out.flush()?;
    Ok(())
}

/// Tick `run` in real time until it finishes, printing every event.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn drive<R: HeadlessRun, W: Write>(
    run: &mut R,
    out: &mut W,
    format: OutputFormat,
) -> Result<(), TomatickError> {
    emit(out, &run.initial_events(), format)?;

    let mut ticker = Ticker::default();
    ticker.arm(Instant::now());

    while !run.is_finished() {
        if let Some(wait) = ticker.until_next(Instant::now()) {
            thread::sleep(wait);
        }

        for _ in 0..ticker.due(Instant::now()) {
            emit(out, &run.on_tick(), format)?;
            if run.is_finished() {
                break;
            }
        }
    }

    Ok(())
}

/// Execute the focus command.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn focus<W: Write>(
    args: &FocusArgs,
    notifier: &dyn Notifier,
    out: &mut W,
    format: OutputFormat,
) -> Result<(), TomatickError> {
    if format == OutputFormat::Pretty {
        writeln!(out, "{}", format_focus_intro(args.cycles))?;
    }
    tracing::info!(cycles = ?args.cycles, "headless focus run started");

    let mut run = FocusRun::new(notifier, args.cycles);
    drive(&mut run, out, format)
}

/// Execute the stopwatch command.
///
/// # Errors
///
/// Returns an error if the limit is invalid or writing output fails.
pub fn stopwatch<W: Write>(
    args: &StopwatchArgs,
    out: &mut W,
    format: OutputFormat,
) -> Result<(), TomatickError> {
    let mut run = StopwatchRun::from_limit(args.limit.as_deref())?;
    tracing::info!(limit = ?args.limit, "headless stopwatch started");
    drive(&mut run, out, format)
}

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell, install: bool) -> Result<String, TomatickError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}
