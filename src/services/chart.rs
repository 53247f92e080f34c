//! Expense chart plumbing
//!
//! Turns the expense breakdown into colored, proportioned slices and hands
//! them to a [`ChartAdapter`] whenever the breakdown changes.

use tracing::trace;

use crate::models::{BudgetState, Money};

use super::model::StateListener;
use super::totals::{compute_expense_breakdown, BreakdownEntry};

/// Slice colors, assigned by position and cycled
pub const PALETTE: [&str; 8] = [
    "#0ea5e9", "#22c55e", "#f97316", "#a855f7", "#eab308", "#ef4444", "#14b8a6", "#8b5cf6",
];

/// One drawable segment
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: Money,
    /// Share of the whole, 0.0 - 100.0
    pub percentage: f64,
    /// Hex color from [`PALETTE`]
    pub color: &'static str,
    pub placeholder: bool,
}

/// Color for the slice at `index`
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Parse a `#rrggbb` color
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Assign colors and shares to a breakdown
pub fn chart_slices(breakdown: &[BreakdownEntry]) -> Vec<ChartSlice> {
    let total: Money = breakdown.iter().map(|e| e.value).sum();

    breakdown
        .iter()
        .enumerate()
        .map(|(i, entry)| ChartSlice {
            label: entry.name.clone(),
            value: entry.value,
            percentage: if total.is_positive() {
                entry.value.cents() as f64 / total.cents() as f64 * 100.0
            } else {
                0.0
            },
            color: color_for(i),
            placeholder: entry.placeholder,
        })
        .collect()
}

/// A renderer for the proportional expense chart
pub trait ChartAdapter {
    fn render(&mut self, slices: &[ChartSlice]);
}

/// Re-renders a chart when the expense breakdown changes
pub struct ChartListener<C: ChartAdapter> {
    chart: C,
    last: Option<Vec<BreakdownEntry>>,
}

impl<C: ChartAdapter> ChartListener<C> {
    pub fn new(chart: C) -> Self {
        Self { chart, last: None }
    }

    /// Draw the chart for the initial state
    pub fn prime(&mut self, state: &BudgetState) {
        self.refresh(state);
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    fn refresh(&mut self, state: &BudgetState) {
        let breakdown = compute_expense_breakdown(state);
        if self.last.as_ref() == Some(&breakdown) {
            trace!("Expense breakdown unchanged; chart not redrawn");
            return;
        }
        self.chart.render(&chart_slices(&breakdown));
        self.last = Some(breakdown);
    }
}

impl<C: ChartAdapter> StateListener for ChartListener<C> {
    fn on_state_changed(&mut self, state: &BudgetState) {
        self.refresh(state);
    }
}
