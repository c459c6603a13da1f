//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw key hints and the latest status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" Tab:next  Space:toggle  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:clear  Esc:quit"),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        let color = if app.submitted.is_some() {
            Color::Green
        } else {
            Color::Yellow
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
