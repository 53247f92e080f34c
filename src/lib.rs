//! Budget Planner - a monthly budgeting form for the terminal
//!
//! This library provides the core of the budget planner: two lists of named
//! amounts (income and expenses), a free-text note, and everything derived
//! from them: totals, the leftover, and a per-expense breakdown for a
//! proportional chart. Every change is saved automatically.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (line items, money, currency, budget state)
//! - `storage`: Key-value persistence and the versioned snapshot format
//! - `services`: The budget model, derived totals and chart plumbing
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: One-shot command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_planner::config::{paths::PlannerPaths, settings::Settings};
//! use budget_planner::services::BudgetModel;
//! use budget_planner::storage::{BudgetStore, FileStore};
//!
//! let paths = PlannerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = BudgetStore::new(FileStore::open(&paths)?)
//!     .with_default_currency(settings.default_currency.clone());
//!
//! let mut model = BudgetModel::new(store.load_or_default());
//! model.subscribe(store);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
