//! Dialog components for the TUI

pub mod confirm;
pub mod edit;
