//! Notes panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let note = &app.model.state().note;

    let block = Block::default()
        .title(" Notes ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let paragraph = if note.is_empty() {
        Paragraph::new("Press 'n' to jot down savings goals or reminders.")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(note.as_str())
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}
