//! TUI Views module
//!
//! The line item lists, the summary, chart and notes panels, and the status
//! bar.

pub mod chart;
pub mod line_items;
pub mod notes;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::models::LineItemKind;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    line_items::render(frame, app, LineItemKind::Incomes, layout.incomes);
    line_items::render(frame, app, LineItemKind::Expenses, layout.expenses);
    summary::render(frame, app, layout.summary);
    chart::render(frame, app, layout.chart);
    notes::render(frame, app, layout.notes);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Confirm(ref message) => dialogs::confirm::render(frame, message),
        ActiveDialog::Edit(target) => dialogs::edit::render(frame, app, target),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetState, Currency, LineItem, Money};
    use crate::services::BudgetModel;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_budget() {
        let mut state = BudgetState::empty(Currency::usd());
        state.incomes.push(LineItem::with_amount("Paycheck", Money::from_units(3000)));
        state.expenses.push(LineItem::with_amount("Rent", Money::from_units(1200)));
        state.expenses.push(LineItem::with_amount("Groceries", Money::from_units(300)));
        let mut app = App::new(BudgetModel::new(state));

        let text = screen_text(&mut app);
        assert!(text.contains("Paycheck"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("$1,500"));
        assert!(text.contains("Nice! You have $1,500 remaining this month."));
        assert!(text.contains("80%"));
    }

    #[test]
    fn test_render_reset_dialog() {
        let mut app = App::new(BudgetModel::new(BudgetState::default()));
        app.request_reset();
        let text = screen_text(&mut app);
        assert!(text.contains("Reset all values?"));
        assert!(text.contains("No expenses"));
    }
}
