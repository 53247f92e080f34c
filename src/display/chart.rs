//! Text rendering of the expense breakdown
//!
//! A legend with one proportional bar per slice, colored with the slice's
//! palette color when the output is a terminal.

use crate::services::chart::parse_hex_color;
use crate::services::{ChartAdapter, ChartSlice};

use super::report::{format_bar, format_percentage, left_align, right_align, truncate};

const LABEL_WIDTH: usize = 22;
const BAR_WIDTH: usize = 24;

/// Chart renderer that keeps its latest drawing as text
#[derive(Debug, Clone)]
pub struct TextChart {
    symbol: String,
    colored: bool,
    output: String,
}

impl TextChart {
    pub fn new(symbol: impl Into<String>, colored: bool) -> Self {
        Self {
            symbol: symbol.into(),
            colored,
            output: String::new(),
        }
    }

    /// The last rendered chart
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl ChartAdapter for TextChart {
    fn render(&mut self, slices: &[ChartSlice]) {
        self.output = format_chart(slices, &self.symbol, self.colored);
    }
}

fn paint(text: &str, hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
        None => text.to_string(),
    }
}

/// Format slices as a legend with bars
pub fn format_chart(slices: &[ChartSlice], symbol: &str, colored: bool) -> String {
    let mut output = String::from("Expenses Breakdown\n");

    for slice in slices {
        let label = if slice.label.is_empty() {
            "(unnamed)"
        } else {
            slice.label.as_str()
        };
        let bar = format_bar(slice.percentage, 100.0, BAR_WIDTH);
        let bar = if colored { paint(&bar, slice.color) } else { bar };

        if slice.placeholder {
            output.push_str(&format!("  {} {}\n", left_align(label, LABEL_WIDTH), bar));
            continue;
        }

        output.push_str(&format!(
            "  {} {} {} {}\n",
            left_align(&truncate(label, LABEL_WIDTH), LABEL_WIDTH),
            bar,
            right_align(&format_percentage(slice.percentage), 5),
            right_align(&slice.value.format_whole(symbol), 10)
        ));
    }

    output
}
