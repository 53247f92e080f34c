//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetModel;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn tui_error(action: &'static str) -> impl FnOnce(io::Error) -> BudgetError {
    move |e| BudgetError::Tui(format!("Failed to {}: {}", action, e))
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> BudgetResult<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error("enable raw mode"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error("enter alternate screen"))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(tui_error("create terminal"))
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> BudgetResult<()> {
    disable_raw_mode().map_err(tui_error("disable raw mode"))?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error("leave alternate screen"))?;
    Ok(())
}

/// Run the TUI until the user quits
pub fn run_tui(model: BudgetModel) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(model);
    let events = EventHandler::default();
    info!("TUI started");

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    info!("TUI stopped");
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_failures_are_tui_errors() {
        let err = tui_error("enable raw mode")(io::Error::new(io::ErrorKind::Other, "not a tty"));
        assert!(matches!(err, BudgetError::Tui(_)));
        assert_eq!(err.to_string(), "TUI error: Failed to enable raw mode: not a tty");
    }
}
