//! Clock formatting and duration parsing.

use chrono::Duration;

/// Format seconds as a zero-padded `MM:SS` countdown.
///
/// Minutes are not wrapped into hours: 90 minutes is `90:00`.
#[must_use]
pub fn format_countdown(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format seconds for the stopwatch display.
///
/// `H:MM:SS` once an hour has passed, `M:SS` before that.
#[must_use]
pub fn format_stopwatch(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, plural(seconds));
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

/// [`format_duration`] for a plain count of seconds.
#[must_use]
pub fn format_seconds(seconds: u64) -> String {
    let d = i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX);
    format_duration(d)
}

const fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is read as minutes.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<i64>() {
        if minutes <= 0 {
            return None;
        }
        return Duration::try_minutes(minutes);
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
            continue;
        }
        if current_num.is_empty() {
            return None;
        }

        let num: i64 = current_num.parse().ok()?;
        current_num.clear();

        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
    }

    // Trailing number without unit counts as minutes
    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    if total_seconds <= 0 {
        return None;
    }
    Duration::try_seconds(total_seconds)
}

/// Render a text progress bar, `progress` in `0.0..=1.0`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(25 * 60), "25:00");
        assert_eq!(format_countdown(299), "04:59");
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(90 * 60), "90:00");
    }

    #[test]
    fn test_format_stopwatch_under_an_hour() {
        assert_eq!(format_stopwatch(0), "0:00");
        assert_eq!(format_stopwatch(7), "0:07");
        assert_eq!(format_stopwatch(5 * 60 + 7), "5:07");
        assert_eq!(format_stopwatch(3599), "59:59");
    }

    #[test]
    fn test_format_stopwatch_with_hours() {
        assert_eq!(format_stopwatch(3600), "1:00:00");
        assert_eq!(format_stopwatch(3723), "1:02:03");
        assert_eq!(format_stopwatch(36_000 + 59), "10:00:59");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(1)), "1 second");
        assert_eq!(format_duration(Duration::seconds(42)), "42 seconds");
        assert_eq!(format_seconds(300), "5 minutes");
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration(" 5M "), Some(Duration::minutes(5)));
    }

    #[test]
    fn test_parse_duration_compound() {
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("2h30m"), Some(Duration::minutes(150)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("10x").is_none());
        assert!(parse_duration("m5").is_none());
        assert!(parse_duration("99999999999999999h").is_none());
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert_eq!(bar, "[█████░░░░░]");
        assert_eq!(render_progress_bar(2.0, 4), "[████]");
        assert_eq!(render_progress_bar(-1.0, 4), "[░░░░]");
    }
}
