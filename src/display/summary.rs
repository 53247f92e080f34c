//! Summary display formatting

use crate::models::BudgetState;
use crate::services::compute_totals;

use super::report::{left_align, right_align, separator};

/// Totals, leftover and the status message
pub fn format_summary(state: &BudgetState) -> String {
    let totals = compute_totals(state);
    let symbol = state.currency.symbol();

    let rows = [
        ("Total Income", totals.total_income),
        ("Total Expenses", totals.total_expenses),
        ("Leftover", totals.leftover),
    ];

    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str(&separator(40));
    output.push('\n');
    for (label, amount) in rows {
        output.push_str(&format!(
            "{}{}\n",
            left_align(label, 20),
            right_align(&amount.format_with_symbol(&symbol), 20)
        ));
    }
    output.push('\n');
    output.push_str(&totals.status().message(&symbol));
    output.push('\n');

    if !state.note.is_empty() {
        output.push('\n');
        output.push_str("Notes:\n");
        for line in state.note.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}
