//! Core data models for the budget planner
//!
//! This module contains the data structures of a budget: line items, their
//! ids and amounts, and the state that holds them.

pub mod currency;
pub mod ids;
pub mod line_item;
pub mod money;
pub mod state;

pub use currency::Currency;
pub use ids::LineItemId;
pub use line_item::{LineItem, LineItemKind, LineItemPatch};
pub use money::{Money, MAX_AMOUNT};
pub use state::BudgetState;
