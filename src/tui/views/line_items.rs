//! Line item list views
//!
//! One table per collection with the selected row highlighted when the list
//! has focus.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::LineItemKind;
use crate::tui::app::App;

/// Render the list of `kind`
pub fn render(frame: &mut Frame, app: &App, kind: LineItemKind, area: Rect) {
    let is_focused = app.focused == kind;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::White
    };

    let state = app.model.state();
    let items = state.items(kind);
    let total = app.model.compute_totals();
    let (title_total, title) = match kind {
        LineItemKind::Incomes => (total.total_income, " Income "),
        LineItemKind::Expenses => (total.total_expenses, " Expenses "),
    };
    let symbol = state.currency.symbol();

    let block = Block::default()
        .title(title)
        .title_bottom(format!(" Total {} ", title_total.format_with_symbol(&symbol)))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if items.is_empty() {
        let hint = Paragraph::new(" No items. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let widths = [Constraint::Min(16), Constraint::Length(16)];

    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            let name = if item.name.is_empty() {
                Cell::from("(unnamed)").style(Style::default().fg(Color::DarkGray))
            } else {
                Cell::from(item.name.clone())
            };
            let amount = if item.has_invalid_amount() {
                Cell::from(item.amount_input()).style(Style::default().fg(Color::Red))
            } else {
                Cell::from(item.amount.format_with_symbol(&symbol))
            };
            Row::new(vec![name, amount])
        })
        .collect();

    let mut table = Table::new(rows, widths).block(block);
    if is_focused {
        table = table
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
    }

    let mut table_state = TableState::default();
    table_state.select(Some(app.selected_index(kind)));

    frame.render_stateful_widget(table, area, &mut table_state);
}
