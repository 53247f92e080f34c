//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('a') => app.add_item(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('e') => app.begin_edit_name(),
        KeyCode::Enter | KeyCode::Char('m') => app.begin_edit_amount(),
        KeyCode::Char('n') => app.begin_edit_note(),
        KeyCode::Char('r') => app.request_reset(),

        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Confirm(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_reset(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_reset(false),
            _ => {}
        },
        ActiveDialog::Edit(_) => return handle_editing_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in editing mode
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetState, Currency, LineItem, LineItemKind, Money};
    use crate::services::BudgetModel;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        let mut state = BudgetState::empty(Currency::usd());
        state.incomes.push(LineItem::with_amount("Paycheck", Money::from_units(3000)));
        App::new(BudgetModel::new(state))
    }

    #[test]
    fn test_add_and_rename_expense() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, LineItemKind::Expenses);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::Editing);

        // Typing 'q' inside the editor must not quit
        for _ in 0.."New Item".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Rent q");
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.model.state().expenses[0].name, "Rent q");
    }

    #[test]
    fn test_edit_amount_with_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input.value(), "3000");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.compute_totals().total_income, Money::from_units(300));
    }

    #[test]
    fn test_escape_discards_edit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "hello");
        press(&mut app, KeyCode::Esc);
        assert!(app.model.state().note.is_empty());
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_reset_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.model.state().incomes[0].name, "Paycheck");

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.model.state().incomes[0].name, "Primary Paycheck");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
