//! Terminal User Interface module
//!
//! An interactive budget editor built on ratatui: income and expense lists,
//! a live summary, the expense breakdown chart, and notes.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
