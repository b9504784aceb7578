use colored::Colorize;

use crate::features::timer::{
    format_seconds, render_progress_bar, Phase, PhaseTransition, PomodoroSnapshot,
    StopwatchSnapshot, BREAK_SECONDS, FOCUS_SECONDS,
};

/// One console line for the stopwatch.
pub fn format_stopwatch_pretty(snapshot: &StopwatchSnapshot) -> String {
    format!("⏱️  {}", snapshot.display.bold())
}

/// One console line for the countdown, with a progress bar.
#[allow(clippy::cast_precision_loss)]
pub fn format_pomodoro_pretty(snapshot: &PomodoroSnapshot) -> String {
    let total = snapshot.phase.duration_seconds();
    let progress = 1.0 - snapshot.remaining_seconds as f64 / total as f64;
    let bar = render_progress_bar(progress, 20);

    let phase = match snapshot.phase {
        Phase::Focus => snapshot.phase.subtitle().red(),
        Phase::Break => snapshot.phase.subtitle().green(),
    };

    format!(
        "🎯 {:<16} {} {}  {}",
        phase,
        snapshot.display.bold(),
        bar,
        format!("{} cycles completed", snapshot.cycles).dimmed()
    )
}

/// Banner printed when a phase runs out.
pub fn format_transition_pretty(transition: &PhaseTransition) -> String {
    let icon = if transition.completed_cycle() { "🎉" } else { "💪" };

    format!(
        "\n{icon} {}\n   {}\n   Next: {} ({})\n",
        transition.title().bold(),
        transition.message(),
        transition.to,
        format_seconds(transition.to.duration_seconds())
    )
}

/// Header printed when a headless focus run begins.
pub fn format_focus_intro(cycles: Option<u32>) -> String {
    let focus = format_seconds(FOCUS_SECONDS);
    let rest = format_seconds(BREAK_SECONDS);
    let limit = cycles.map_or_else(
        || "until interrupted".to_string(),
        |n| format!("for {n} cycle{}", if n == 1 { "" } else { "s" }),
    );

    format!(
        "{}\n{}\n",
        "🍅 Pomodoro Timer".bold(),
        format!("   {focus} focus + {rest} break, {limit}. Ctrl+C to stop.").dimmed()
    )
}
