//! Derived figures
//!
//! Pure functions over a [`BudgetState`]. Nothing here is cached; callers
//! recompute on every read.

use crate::models::{BudgetState, LineItem, Money};

/// Label of the stand-in breakdown entry shown when there are no expenses
pub const PLACEHOLDER_NAME: &str = "No expenses";

/// Income, expense and leftover totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTotals {
    pub total_income: Money,
    pub total_expenses: Money,
    /// `total_income - total_expenses`
    pub leftover: Money,
}

impl DerivedTotals {
    pub fn status(&self) -> LeftoverStatus {
        LeftoverStatus::from_leftover(self.leftover)
    }
}

/// Qualitative reading of the leftover figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftoverStatus {
    /// Expenses exceed income by this (positive) amount
    OverBudget(Money),
    BreakEven,
    /// Income exceeds expenses by this amount
    Surplus(Money),
}

impl LeftoverStatus {
    pub fn from_leftover(leftover: Money) -> Self {
        if leftover.is_negative() {
            Self::OverBudget(leftover.abs())
        } else if leftover.is_zero() {
            Self::BreakEven
        } else {
            Self::Surplus(leftover)
        }
    }

    /// The summary message, with amounts rounded to whole units
    pub fn message(&self, symbol: &str) -> String {
        match self {
            Self::OverBudget(amount) => format!(
                "You are over budget by {}. Consider reducing expenses or increasing income.",
                amount.format_whole(symbol)
            ),
            Self::BreakEven => {
                "You are breaking even. You might want to set aside some savings.".to_string()
            }
            Self::Surplus(amount) => format!(
                "Nice! You have {} remaining this month.",
                amount.format_whole(symbol)
            ),
        }
    }
}

/// One segment of the expense breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry {
    pub name: String,
    pub value: Money,
    /// True only for the stand-in entry used when nothing has been spent
    pub placeholder: bool,
}

impl BreakdownEntry {
    fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            value: Money::from_units(1),
            placeholder: true,
        }
    }
}

fn sum(items: &[LineItem]) -> Money {
    items.iter().map(|item| item.amount).sum()
}

/// Compute income, expense and leftover totals
pub fn compute_totals(state: &BudgetState) -> DerivedTotals {
    let total_income = sum(&state.incomes);
    let total_expenses = sum(&state.expenses);
    DerivedTotals {
        total_income,
        total_expenses,
        leftover: total_income - total_expenses,
    }
}

/// Expenses with a positive amount, in order
///
/// Never empty: with nothing spent, a single placeholder worth 1 is returned
/// so a chart always has something to draw.
pub fn compute_expense_breakdown(state: &BudgetState) -> Vec<BreakdownEntry> {
    let entries: Vec<BreakdownEntry> = state
        .expenses
        .iter()
        .filter(|item| item.amount.is_positive())
        .map(|item| BreakdownEntry {
            name: item.name.clone(),
            value: item.amount,
            placeholder: false,
        })
        .collect();

    if entries.is_empty() {
        vec![BreakdownEntry::placeholder()]
    } else {
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, LineItemKind, LineItemPatch, MAX_AMOUNT};

    fn state_with(incomes: &[(&str, &str)], expenses: &[(&str, &str)]) -> BudgetState {
        let mut state = BudgetState::empty(Currency::usd());
        for (kind, rows) in [
            (LineItemKind::Incomes, incomes),
            (LineItemKind::Expenses, expenses),
        ] {
            for (name, amount) in rows {
                let item = state.add_line_item(kind);
                state.update_line_item(kind, item.id, &LineItemPatch::name(*name).with_amount(*amount));
            }
        }
        state
    }

    #[test]
    fn test_paycheck_rent_groceries_scenario() {
        let state = state_with(
            &[("Paycheck", "3000")],
            &[("Rent", "1200"), ("Groceries", "300")],
        );

        let totals = compute_totals(&state);
        assert_eq!(totals.total_income, Money::from_units(3000));
        assert_eq!(totals.total_expenses, Money::from_units(1500));
        assert_eq!(totals.leftover, Money::from_units(1500));

        let breakdown = compute_expense_breakdown(&state);
        let pairs: Vec<_> = breakdown.iter().map(|e| (e.name.as_str(), e.value)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Rent", Money::from_units(1200)),
                ("Groceries", Money::from_units(300))
            ]
        );
        assert!(breakdown.iter().all(|e| !e.placeholder));
    }

    #[test]
    fn test_zero_rent_gives_placeholder() {
        let state = state_with(&[], &[("Rent", "0")]);

        let breakdown = compute_expense_breakdown(&state);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].name, "No expenses");
        assert_eq!(breakdown[0].value, Money::from_units(1));
        assert!(breakdown[0].placeholder);
    }

    #[test]
    fn test_breakdown_never_empty() {
        let empty = BudgetState::empty(Currency::usd());
        assert_eq!(compute_expense_breakdown(&empty).len(), 1);
        assert_eq!(compute_expense_breakdown(&BudgetState::default()).len(), 1);
    }

    #[test]
    fn test_breakdown_skips_zero_items_keeps_order() {
        let state = state_with(&[], &[("A", "5"), ("B", "0"), ("C", "abc"), ("D", "1")]);
        let names: Vec<_> = compute_expense_breakdown(&state)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn test_non_numeric_amount_same_as_omitting() {
        let with_bad = state_with(&[("Pay", "100")], &[("Rent", "40"), ("Junk", "n/a")]);
        let without = state_with(&[("Pay", "100")], &[("Rent", "40")]);
        assert_eq!(compute_totals(&with_bad), compute_totals(&without));
    }

    #[test]
    fn test_leftover_is_difference() {
        let cases = [
            state_with(&[("Pay", "100")], &[("Rent", "250.25")]),
            state_with(&[("Pay", "100"), ("Side", "0.99")], &[]),
            state_with(&[], &[]),
        ];
        for state in &cases {
            let t = compute_totals(state);
            assert_eq!(t.leftover, t.total_income - t.total_expenses);
        }
    }

    #[test]
    fn test_oversized_amounts_count_as_zero() {
        let state = state_with(
            &[("Pay", "100")],
            &[("Yacht", "50000000000000000"), ("Island", "50000000000000000")],
        );
        assert!(state.expenses.iter().all(|item| item.has_invalid_amount()));

        let totals = compute_totals(&state);
        assert_eq!(totals.total_expenses, Money::zero());
        assert_eq!(totals.leftover, Money::from_units(100));
    }

    #[test]
    fn test_largest_amounts_sum_exactly() {
        let state = state_with(
            &[("A", "1000000000000"), ("B", "1000000000000")],
            &[("C", "1000000000000"), ("D", "0.01")],
        );

        let totals = compute_totals(&state);
        assert_eq!(totals.total_income, Money::from_cents(MAX_AMOUNT.cents() * 2));
        assert_eq!(totals.total_expenses, Money::from_cents(MAX_AMOUNT.cents() + 1));
        assert_eq!(totals.leftover, totals.total_income - totals.total_expenses);
        assert_eq!(totals.leftover, Money::from_cents(MAX_AMOUNT.cents() - 1));
    }

    #[test]
    fn test_status_messages() {
        let over = LeftoverStatus::from_leftover(Money::from_units(-250));
        assert_eq!(over, LeftoverStatus::OverBudget(Money::from_units(250)));
        assert_eq!(
            over.message("$"),
            "You are over budget by $250. Consider reducing expenses or increasing income."
        );

        let even = LeftoverStatus::from_leftover(Money::zero());
        assert_eq!(even, LeftoverStatus::BreakEven);
        assert!(even.message("$").contains("breaking even"));

        let surplus = LeftoverStatus::from_leftover(Money::from_units(1500));
        assert_eq!(surplus.message("$"), "Nice! You have $1,500 remaining this month.");
    }
}
