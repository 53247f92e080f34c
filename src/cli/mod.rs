//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget model.

pub mod budget;

pub use budget::{handle_budget_command, print_budget, resolve_line_item, BudgetCommands};
