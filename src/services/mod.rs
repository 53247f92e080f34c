//! Business logic layer
//!
//! The budget model and the pure derivations it exposes, plus the chart
//! listener that keeps a rendered breakdown in step with the model.

pub mod chart;
pub mod model;
pub mod totals;

pub use chart::{chart_slices, ChartAdapter, ChartListener, ChartSlice, PALETTE};
pub use model::{BudgetModel, ConfirmPrompt, Decided, StateListener, RESET_PROMPT};
pub use totals::{
    compute_expense_breakdown, compute_totals, BreakdownEntry, DerivedTotals, LeftoverStatus,
    PLACEHOLDER_NAME,
};
