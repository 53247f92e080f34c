//! Status bar view
//!
//! Shows the leftover, the latest status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let totals = app.model.compute_totals();
    let symbol = app.model.state().currency.symbol();

    let leftover_color = if totals.leftover.is_negative() {
        Color::Red
    } else if totals.leftover.is_zero() {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Leftover: ", Style::default().fg(Color::White)),
        Span::styled(
            totals.leftover.format_with_symbol(&symbol),
            Style::default()
                .fg(leftover_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            app.model.state().currency.code().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Normal => " a:Add d:Del e:Name m:Amount n:Note r:Reset q:Quit ",
        InputMode::Editing => " Enter:Save Esc:Cancel ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
