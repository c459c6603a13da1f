//! Field rendering utilities for forms

use formstate::{FieldMessage, FieldValue, InputKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field takes: bordered input plus one message line
pub const FIELD_HEIGHT: u16 = 4;

/// Everything needed to draw one field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub kind: InputKind,
    pub value: &'a FieldValue,
    pub message: Option<&'a FieldMessage>,
    pub is_active: bool,
}

/// Draw an input box with its validation message underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let has_error = field.message.is_some_and(|m| m.has_error);
    let border_style = match (has_error, field.is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = match field.kind {
        InputKind::Password => "*".repeat(field.value.as_text().chars().count()),
        _ => field.value.display_value(),
    };
    let display_str = if display_value.is_empty() && !field.is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if field.is_active && field.kind != InputKind::Checkbox {
        "▌"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(message) = field.message {
        draw_message(frame, chunks[1], message);
    }
}

/// Draw a field's validation message: red while failing, dim once fixed
fn draw_message(frame: &mut Frame, area: Rect, message: &FieldMessage) {
    let (prefix, style) = if message.has_error {
        ("✗ ", Style::default().fg(Color::Red))
    } else {
        (
            "✓ ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    };
    let line = Line::from(vec![
        Span::styled(prefix, style.remove_modifier(Modifier::CROSSED_OUT)),
        Span::styled(message.message.as_str(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
