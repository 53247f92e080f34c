//! Summary panel
//!
//! Totals in whole currency units and the leftover message.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::services::LeftoverStatus;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let totals = app.model.compute_totals();
    let symbol = app.model.state().currency.symbol();
    let status = totals.status();

    let status_color = match status {
        LeftoverStatus::OverBudget(_) => Color::Red,
        LeftoverStatus::BreakEven => Color::Yellow,
        LeftoverStatus::Surplus(_) => Color::Green,
    };

    let row = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(Color::White)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        row("Total Income", totals.total_income.format_whole(&symbol), Color::Green),
        row("Total Expenses", totals.total_expenses.format_whole(&symbol), Color::Red),
        row("Leftover", totals.leftover.format_whole(&symbol), status_color),
        Line::from(Span::styled(
            status.message(&symbol),
            Style::default().fg(status_color),
        )),
    ];

    let block = Block::default()
        .title(" Summary ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
