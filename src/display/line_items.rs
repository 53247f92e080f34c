//! Line item display formatting
//!
//! Formats one collection of a budget as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetState, LineItemKind};

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format one collection as a table, or a hint if it's empty
pub fn format_line_items(state: &BudgetState, kind: LineItemKind) -> String {
    let items = state.items(kind);
    if items.is_empty() {
        return format!(
            "No {} yet. Add one with 'budget add {}'.",
            kind.as_str(),
            kind.label().to_lowercase()
        );
    }

    let symbol = state.currency.symbol();
    let rows = items.iter().enumerate().map(|(i, item)| LineItemRow {
        position: i + 1,
        id: item.id.to_string(),
        name: if item.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            item.name.clone()
        },
        amount: if item.has_invalid_amount() {
            format!("{} (invalid: {:?})", item.amount.format_with_symbol(&symbol), item.amount_input())
        } else {
            item.amount.format_with_symbol(&symbol)
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
