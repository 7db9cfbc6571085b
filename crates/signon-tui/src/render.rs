//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::form;
use crate::state::AppState;

/// Width of the centered form column.
const FORM_WIDTH: u16 = 44;

/// Height of the status line at the bottom of the frame.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the pending state.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 4;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    render_content(app, frame, chunks[0]);
    render_status_line(app, frame, chunks[1]);
}

/// Renders the centered column: title, form, banner.
fn render_content(app: &AppState, frame: &mut Frame, area: Rect) {
    // title + gap + form + banner
    let height = 2 + form::form_height(&app.form) + 1;
    let column = centered(area, FORM_WIDTH, height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(form::form_height(&app.form)),
            Constraint::Length(1),
        ])
        .split(column);

    let title = Paragraph::new(Line::from(Span::styled(
        app.form.action.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    form::render_form(&app.form, frame, chunks[2]);
    render_banner(app, frame, chunks[3]);
}

/// Renders the inline error banner when shown.
fn render_banner(app: &AppState, frame: &mut Frame, area: Rect) {
    if let Some(message) = app.banner.message() {
        let banner = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(banner, area);
    }
}

/// Renders the status line: key hints when idle, spinner while pending.
fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = if app.form.busy {
        let spinner_idx = (app.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len();
        vec![
            Span::styled(SPINNER_FRAMES[spinner_idx], Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(
                app.form.action.pending_label.clone(),
                Style::default().fg(Color::Yellow),
            ),
        ]
    } else {
        vec![
            Span::styled("Tab", Style::default().fg(Color::DarkGray)),
            Span::raw(" next field  "),
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" submit  "),
            Span::styled("Esc", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ]
    };

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(status, area);
}

/// Centers a `width` x `height` rect within `area`, clamping to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
