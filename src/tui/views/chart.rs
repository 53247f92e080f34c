//! Expense breakdown panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::report::{format_bar, format_percentage, truncate};
use crate::services::chart::parse_hex_color;
use crate::tui::app::App;

const LABEL_WIDTH: usize = 18;

fn slice_color(hex: &str) -> Color {
    match parse_hex_color(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Gray,
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.model.state().currency.symbol();

    let block = Block::default()
        .title(" Expenses Breakdown ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    // Label, bar, percentage and amount on one row
    let bar_width = (block.inner(area).width as usize).saturating_sub(LABEL_WIDTH + 18).max(4);

    let lines: Vec<Line> = app
        .chart
        .slices()
        .iter()
        .map(|slice| {
            let color = slice_color(slice.color);
            let label = format!("{:<width$}", truncate(&slice.label, LABEL_WIDTH), width = LABEL_WIDTH);
            let bar = format_bar(slice.percentage, 100.0, bar_width);

            if slice.placeholder {
                return Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::DarkGray)),
                    Span::styled(bar, Style::default().fg(color)),
                ]);
            }

            Line::from(vec![
                Span::raw(label),
                Span::styled(bar, Style::default().fg(color)),
                Span::raw(format!(
                    " {:>5} {:>10}",
                    format_percentage(slice.percentage),
                    slice.value.format_whole(&symbol)
                )),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
