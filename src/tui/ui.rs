//! UI rendering for the dashboard.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::features::timer::Phase;
use crate::tui::app::{App, Panel, HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Header, the two timer panels, info footer, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_stopwatch(frame, app, panels[0]);
    render_focus(frame, app, panels[1]);
    render_info(frame, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(" 🍅 Pomodoro Timer ")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(header, area);
}

fn panel_block(title: &str, selected: bool) -> Block<'_> {
    let border = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border)
}

/// `[Start] [Pause] [Reset]`, with the control that does nothing right now dimmed.
fn controls(running: bool) -> Line<'static> {
    let enabled = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled("[Start]", if running { disabled } else { enabled }),
        Span::raw(" "),
        Span::styled("[Pause]", if running { enabled } else { disabled }),
        Span::raw(" "),
        Span::styled("[Reset]", enabled),
    ])
}

fn render_stopwatch(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let block = panel_block("⏱️ Stopwatch", app.selected == Panel::Stopwatch);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = if app.stopwatch.is_running() {
        Span::styled("Running", Style::default().fg(Color::Green))
    } else {
        Span::styled("Paused", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(state),
        Line::default(),
        Line::from(Span::styled(
            app.stopwatch.display(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        controls(app.stopwatch.is_running()),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_focus(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let block = panel_block("🎯 Focus Session", app.selected == Panel::Focus);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let pomodoro = &app.pomodoro;
    let accent = match pomodoro.phase() {
        Phase::Focus => Color::Red,
        Phase::Break => Color::Green,
    };

    let top = vec![
        Line::from(Span::styled(
            pomodoro.phase().subtitle(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            pomodoro.display(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(top).alignment(Alignment::Center), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(Color::Black))
        .ratio(pomodoro.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, rows[1]);

    let cycles = Paragraph::new(Span::styled(
        pomodoro.cycles_label(),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(cycles, rows[2]);

    frame.render_widget(
        Paragraph::new(controls(pomodoro.is_running())).alignment(Alignment::Center),
        rows[3],
    );
}

fn render_info(frame: &mut Frame<'_>, area: Rect) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled("📊 Stopwatch  ", heading),
            Span::styled("Track total study time continuously", body),
        ]),
        Line::from(vec![
            Span::styled("⏰ Pomodoro   ", heading),
            Span::styled("25min focus + 5min break cycles", body),
        ]),
    ];

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(info, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
