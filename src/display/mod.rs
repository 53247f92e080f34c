//! Display formatting for terminal output
//!
//! Plain-text renderings of a budget used by the CLI.

pub mod chart;
pub mod line_items;
pub mod report;
pub mod summary;

pub use chart::{format_chart, TextChart};
pub use line_items::format_line_items;
pub use summary::format_summary;
