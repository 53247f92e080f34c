//! Edit dialog
//!
//! One text field for a name, an amount or the note.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, EditTarget};
use crate::tui::layout::centered_rect_fixed;

/// Render the edit dialog for `target`
pub fn render(frame: &mut Frame, app: &App, target: EditTarget) {
    let area = centered_rect_fixed(56, 6, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(target.title())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
    frame.render_widget(&app.input, field);

    if inner.height >= 4 {
        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Save  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]);
        let hint_area = Rect::new(inner.x + 1, inner.y + 3, inner.width.saturating_sub(2), 1);
        frame.render_widget(Paragraph::new(hints), hint_area);
    }
}
