//! Application state for the TUI
//!
//! The App struct owns the budget model and holds everything else needed for
//! rendering and handling events.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::models::{LineItem, LineItemId, LineItemKind, LineItemPatch, Money};
use crate::services::{BudgetModel, ChartAdapter, ChartListener, ChartSlice, Decided, RESET_PROMPT};

use super::widgets::input::TextInput;

/// How long a status message stays visible
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// What an open edit dialog writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Name(LineItemKind, LineItemId),
    Amount(LineItemKind, LineItemId),
    Note,
}

impl EditTarget {
    /// Dialog title
    pub fn title(&self) -> String {
        match self {
            Self::Name(kind, _) => format!(" {} name ", kind.label()),
            Self::Amount(kind, _) => format!(" {} amount ", kind.label()),
            Self::Note => " Notes ".to_string(),
        }
    }

    /// Label shown before the input field
    pub fn field_label(&self) -> &'static str {
        match self {
            Self::Name(..) => "Name",
            Self::Amount(..) => "Amount",
            Self::Note => "Note",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Confirm(String),
    Edit(EditTarget),
}

/// Chart that hands its slices to the chart view
///
/// Clones share the same slices, so one handle can be subscribed to the
/// model while the view reads another.
#[derive(Debug, Clone, Default)]
pub struct ChartPanel {
    slices: Rc<RefCell<Vec<ChartSlice>>>,
}

impl ChartPanel {
    /// The most recently rendered slices
    pub fn slices(&self) -> Vec<ChartSlice> {
        self.slices.borrow().clone()
    }
}

impl ChartAdapter for ChartPanel {
    fn render(&mut self, slices: &[ChartSlice]) {
        *self.slices.borrow_mut() = slices.to_vec();
    }
}

/// Main application state
pub struct App {
    /// The budget being edited
    pub model: BudgetModel,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which list has focus
    pub focused: LineItemKind,

    /// Selected row in the income list
    pub selected_income: usize,

    /// Selected row in the expense list
    pub selected_expense: usize,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Input for the edit dialog
    pub input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,

    status_set_at: Option<Instant>,

    /// Expense chart data
    pub chart: ChartPanel,
}

impl App {
    /// Create the app and hook the chart up to the model
    pub fn new(mut model: BudgetModel) -> Self {
        let chart = ChartPanel::default();
        let mut listener = ChartListener::new(chart.clone());
        listener.prime(model.state());
        model.subscribe(listener);

        Self {
            model,
            should_quit: false,
            focused: LineItemKind::Incomes,
            selected_income: 0,
            selected_expense: 0,
            input_mode: InputMode::Normal,
            active_dialog: ActiveDialog::None,
            input: TextInput::new(),
            status_message: None,
            status_set_at: None,
            chart,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch focus to the other list
    pub fn toggle_focus(&mut self) {
        self.focused = self.focused.other();
    }

    /// Selected row in the list of `kind`
    pub fn selected_index(&self, kind: LineItemKind) -> usize {
        match kind {
            LineItemKind::Incomes => self.selected_income,
            LineItemKind::Expenses => self.selected_expense,
        }
    }

    fn selected_index_mut(&mut self) -> &mut usize {
        match self.focused {
            LineItemKind::Incomes => &mut self.selected_income,
            LineItemKind::Expenses => &mut self.selected_expense,
        }
    }

    /// The item under the cursor in the focused list
    pub fn selected_item(&self) -> Option<&LineItem> {
        self.model
            .state()
            .items(self.focused)
            .get(self.selected_index(self.focused))
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.model.state().items(self.focused).len();
        let index = self.selected_index_mut();
        if len > 0 && *index < len - 1 {
            *index += 1;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        let index = self.selected_index_mut();
        if *index > 0 {
            *index -= 1;
        }
    }

    /// Keep both selections inside their lists
    fn clamp_selection(&mut self) {
        let incomes = self.model.state().incomes.len();
        let expenses = self.model.state().expenses.len();
        self.selected_income = self.selected_income.min(incomes.saturating_sub(1));
        self.selected_expense = self.selected_expense.min(expenses.saturating_sub(1));
    }

    /// Add an item to the focused list and select it
    pub fn add_item(&mut self) {
        let kind = self.focused;
        let item = self.model.add_line_item(kind);
        *self.selected_index_mut() = self.model.state().items(kind).len() - 1;
        self.set_status(format!("Added {}", item.name));
    }

    /// Remove the selected item
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        if let Some(item) = self.model.remove_line_item(self.focused, id) {
            self.clamp_selection();
            let name = if item.name.is_empty() {
                "item".to_string()
            } else {
                item.name
            };
            self.set_status(format!("Removed {}", name));
        }
    }

    /// Open the edit dialog for the selected item's name
    pub fn begin_edit_name(&mut self) {
        if let Some(item) = self.selected_item() {
            let target = EditTarget::Name(self.focused, item.id);
            let text = item.name.clone();
            self.open_editor(target, text);
        }
    }

    /// Open the edit dialog for the selected item's amount
    pub fn begin_edit_amount(&mut self) {
        if let Some(item) = self.selected_item() {
            let target = EditTarget::Amount(self.focused, item.id);
            let text = item.amount_input();
            self.open_editor(target, text);
        }
    }

    /// Open the edit dialog for the note
    pub fn begin_edit_note(&mut self) {
        let text = self.model.state().note.clone();
        self.open_editor(EditTarget::Note, text);
    }

    fn open_editor(&mut self, target: EditTarget, text: String) {
        self.input = TextInput::new()
            .label(target.field_label())
            .content(text)
            .focused(true);
        self.input_mode = InputMode::Editing;
        self.active_dialog = ActiveDialog::Edit(target);
    }

    /// Write the edit dialog's text back to the model
    pub fn commit_edit(&mut self) {
        let ActiveDialog::Edit(target) = self.active_dialog else {
            return;
        };
        let value = self.input.value().to_string();

        match target {
            EditTarget::Name(kind, id) => {
                self.model
                    .update_line_item(kind, id, &LineItemPatch::name(value));
            }
            EditTarget::Amount(kind, id) => {
                if Money::parse_amount(&value).is_none() {
                    self.set_status(format!("'{}' is not a number; counted as 0", value));
                }
                self.model
                    .update_line_item(kind, id, &LineItemPatch::amount(value));
            }
            EditTarget::Note => {
                self.model.set_note(value);
            }
        }

        self.close_dialog();
    }

    /// Ask before resetting
    pub fn request_reset(&mut self) {
        self.active_dialog = ActiveDialog::Confirm(RESET_PROMPT.to_string());
    }

    /// Answer the reset dialog
    pub fn answer_reset(&mut self, confirmed: bool) {
        self.close_dialog();
        if self.model.reset(&Decided(confirmed)) {
            self.selected_income = 0;
            self.selected_expense = 0;
            self.set_status("Budget reset");
        }
    }

    /// Check if any dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_set_at = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetState, Currency, LineItem};

    fn app() -> App {
        let mut state = BudgetState::empty(Currency::usd());
        state.incomes.push(LineItem::with_amount("Paycheck", Money::from_units(3000)));
        state.expenses.push(LineItem::with_amount("Rent", Money::from_units(1200)));
        state.expenses.push(LineItem::with_amount("Groceries", Money::from_units(300)));
        App::new(BudgetModel::new(state))
    }

    #[test]
    fn test_chart_primed_on_start() {
        let app = app();
        let slices = app.chart.slices();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Rent");
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = app();
        app.toggle_focus();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_expense, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_expense, 0);
    }

    #[test]
    fn test_add_and_delete_follow_selection() {
        let mut app = app();
        app.add_item();
        assert_eq!(app.selected_income, 1);
        assert_eq!(app.selected_item().unwrap().name, "New Item");

        app.delete_selected();
        assert_eq!(app.selected_income, 0);
        assert_eq!(app.model.state().incomes.len(), 1);
    }

    #[test]
    fn test_edit_amount_updates_chart() {
        let mut app = app();
        app.toggle_focus();
        app.move_down();
        app.begin_edit_amount();
        assert_eq!(app.input.value(), "300");

        app.input = TextInput::new().content("1800").focused(true);
        app.commit_edit();

        assert!(!app.has_dialog());
        let slices = app.chart.slices();
        assert_eq!(slices[1].value, Money::from_units(1800));
    }

    #[test]
    fn test_invalid_amount_sets_status() {
        let mut app = app();
        app.begin_edit_amount();
        app.input = TextInput::new().content("abc").focused(true);
        app.commit_edit();

        assert!(app.status_message.as_deref().unwrap().contains("not a number"));
        assert_eq!(app.model.compute_totals().total_income, Money::zero());
    }

    #[test]
    fn test_reset_declined_keeps_state() {
        let mut app = app();
        let before = app.model.state().clone();
        app.request_reset();
        assert!(app.has_dialog());
        app.answer_reset(false);
        assert!(!app.has_dialog());
        assert_eq!(app.model.state(), &before);
    }

    #[test]
    fn test_reset_confirmed() {
        let mut app = app();
        app.request_reset();
        app.answer_reset(true);
        assert_eq!(app.model.state().expenses.len(), 7);
        assert_eq!(app.chart.slices()[0].label, "No expenses");
    }
}
