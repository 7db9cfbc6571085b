//! Form slice rendering: field boxes, markers, and the submit control.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use signon_core::form::FormField;
use unicode_width::UnicodeWidthStr;

use super::state::FormState;

/// Rows per field box (value line plus borders).
const FIELD_HEIGHT: u16 = 3;

/// Total height the form needs: the field boxes, a gap, and the submit
/// control.
pub fn form_height(form: &FormState) -> u16 {
    form.fields.len() as u16 * FIELD_HEIGHT + 2
}

/// Renders the form into `area`.
pub fn render_form(form: &FormState, frame: &mut Frame, area: Rect) {
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, field) in form.fields.iter().enumerate() {
        render_field(form, idx, field, frame, chunks[idx]);
    }
    render_submit_control(form, frame, chunks[form.fields.len() + 1]);
}

fn render_field(form: &FormState, idx: usize, field: &FormField, frame: &mut Frame, area: Rect) {
    let focused = idx == form.focused;

    // Invalid wins over focus so the marker stays visible while correcting
    // adjacent fields.
    let border_style = if field.invalid {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut label_style = Style::default().fg(if field.invalid {
        Color::Red
    } else {
        Color::Gray
    });
    if field.has_value {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let mut title = vec![Span::styled(format!(" {} ", field.spec.label), label_style)];
    if field.invalid {
        title.push(Span::styled("✗ ", Style::default().fg(Color::Red)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(title));

    let display = display_value(field);
    frame.render_widget(Paragraph::new(display.clone()).block(block), area);

    if focused {
        let inner_width = area.width.saturating_sub(2);
        let prefix: String = display.chars().take(form.cursor).collect();
        let x = (area.x + 1 + prefix.width() as u16)
            .min(area.x + inner_width.max(1));
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// The rendered value: secret fields show one bullet per char.
fn display_value(field: &FormField) -> String {
    if field.spec.secret {
        "•".repeat(field.value.chars().count())
    } else {
        field.value.clone()
    }
}

fn render_submit_control(form: &FormState, frame: &mut Frame, area: Rect) {
    let style = if form.busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    let label = format!("[ {} ]", form.submit_label());
    let control = Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center);
    frame.render_widget(control, area);
}
