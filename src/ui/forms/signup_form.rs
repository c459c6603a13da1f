//! Signup form rendering

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use formstate::FieldKey;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::SignupField;

/// Draw the signup form and its submit summary
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.signup.form;
    let border_color = if form.all_match() {
        Color::Green
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Sign up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = SignupField::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (index, field) in SignupField::ALL.iter().enumerate() {
        let view = FieldView {
            label: field.label(),
            kind: field.kind(),
            value: form.value(*field),
            message: form.error(*field),
            is_active: app.signup.active_field_index == index,
        };
        draw_field(frame, chunks[index], &view);
    }

    if let Some(area) = chunks.last() {
        draw_summary(frame, *area, app);
    }
}

/// Readiness line plus the last submitted payload
fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let ready = if app.signup.form.all_match() {
        Span::styled("Ready to submit", Style::default().fg(Color::Green))
    } else {
        Span::styled("Incomplete", Style::default().fg(Color::Yellow))
    };
    let mut lines = vec![Line::from(ready)];

    if let Some(submitted) = &app.submitted {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Submitted:",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(submitted.to_string()));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
