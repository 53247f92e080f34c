//! Budget model
//!
//! Owns the [`BudgetState`] for a session. Every operation that changes the
//! state is followed by exactly one "state changed" notification to the
//! subscribed listeners; persistence and charting are such listeners and are
//! unknown to the model itself.

use tracing::{debug, info};

use crate::models::{BudgetState, Currency, LineItem, LineItemId, LineItemKind, LineItemPatch};

use super::totals::{self, BreakdownEntry, DerivedTotals};

/// Question asked before a reset
pub const RESET_PROMPT: &str = "Reset all values?";

/// Something that reacts to a changed budget
pub trait StateListener {
    fn on_state_changed(&mut self, state: &BudgetState);
}

/// Synchronous yes/no question put to the user
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// A decision already taken, e.g. by a dialog or a `--yes` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decided(pub bool);

impl ConfirmPrompt for Decided {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// The budget being edited
pub struct BudgetModel {
    state: BudgetState,
    /// Currency of the budget created by a reset
    default_currency: Currency,
    listeners: Vec<Box<dyn StateListener>>,
}

impl BudgetModel {
    /// Wrap a state (usually the one loaded at startup)
    pub fn new(state: BudgetState) -> Self {
        let default_currency = state.currency.clone();
        Self {
            state,
            default_currency,
            listeners: Vec::new(),
        }
    }

    /// Set the currency used when the budget is reset
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Register a listener for subsequent changes
    pub fn subscribe<L: StateListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener.on_state_changed(&self.state);
        }
    }

    /// Append a new item with a fresh id, default name and zero amount
    pub fn add_line_item(&mut self, kind: LineItemKind) -> LineItem {
        self.add_line_item_with(kind, &LineItemPatch::default())
    }

    /// Append a new item with `patch` applied, as a single change
    pub fn add_line_item_with(&mut self, kind: LineItemKind, patch: &LineItemPatch) -> LineItem {
        let item = self.state.add_line_item_with(kind, patch);
        debug!(%kind, id = %item.id, "Added line item");
        self.notify();
        item
    }

    /// Patch the item with `id`; an unknown id leaves everything untouched
    ///
    /// Returns whether an item was found.
    pub fn update_line_item(
        &mut self,
        kind: LineItemKind,
        id: LineItemId,
        patch: &LineItemPatch,
    ) -> bool {
        if !self.state.update_line_item(kind, id, patch) {
            debug!(%kind, %id, "Update for unknown line item ignored");
            return false;
        }
        self.notify();
        true
    }

    /// Remove the item with `id`, if present
    pub fn remove_line_item(&mut self, kind: LineItemKind, id: LineItemId) -> Option<LineItem> {
        let removed = self.state.remove_line_item(kind, id)?;
        debug!(%kind, %id, "Removed line item");
        self.notify();
        Some(removed)
    }

    /// Replace the note verbatim
    pub fn set_note(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.state.note == text {
            return;
        }
        self.state.set_note(text);
        self.notify();
    }

    /// Change the display currency
    pub fn set_currency(&mut self, currency: Currency) {
        if self.state.currency == currency {
            return;
        }
        self.state.currency = currency;
        self.notify();
    }

    /// Replace everything with the starter budget, if the user agrees
    ///
    /// Returns whether the reset happened. Declining changes nothing and
    /// notifies no one.
    pub fn reset(&mut self, prompt: &dyn ConfirmPrompt) -> bool {
        if !prompt.confirm(RESET_PROMPT) {
            debug!("Reset declined");
            return false;
        }
        self.state = BudgetState::starter(self.default_currency.clone());
        info!("Budget reset to defaults");
        self.notify();
        true
    }

    pub fn compute_totals(&self) -> DerivedTotals {
        totals::compute_totals(&self.state)
    }

    pub fn compute_expense_breakdown(&self) -> Vec<BreakdownEntry> {
        totals::compute_expense_breakdown(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Records every state it is told about
    #[derive(Clone, Default)]
    struct Recorder {
        seen: Rc<RefCell<Vec<BudgetState>>>,
    }

    impl StateListener for Recorder {
        fn on_state_changed(&mut self, state: &BudgetState) {
            self.seen.borrow_mut().push(state.clone());
        }
    }

    impl Recorder {
        fn count(&self) -> usize {
            self.seen.borrow().len()
        }
    }

    fn model_with_recorder() -> (BudgetModel, Recorder) {
        let recorder = Recorder::default();
        let mut model = BudgetModel::new(BudgetState::default());
        model.subscribe(recorder.clone());
        (model, recorder)
    }

    #[test]
    fn test_add_notifies_once() {
        let (mut model, recorder) = model_with_recorder();
        let item = model.add_line_item(LineItemKind::Incomes);

        assert_eq!(recorder.count(), 1);
        assert_eq!(model.state().incomes.last(), Some(&item));
        assert_eq!(recorder.seen.borrow()[0], *model.state());
    }

    #[test]
    fn test_add_with_values_notifies_once() {
        let (mut model, recorder) = model_with_recorder();
        let patch = LineItemPatch::name("Side Gig").with_amount("3000");
        let item = model.add_line_item_with(LineItemKind::Incomes, &patch);

        assert_eq!(recorder.count(), 1);
        let seen = recorder.seen.borrow();
        let saved = seen[0].incomes.last().unwrap();
        assert_eq!(saved, &item);
        assert_eq!(saved.name, "Side Gig");
        assert_eq!(saved.amount, Money::from_units(3000));
    }

    #[test]
    fn test_update_and_totals() {
        let (mut model, recorder) = model_with_recorder();
        let pay = model.state().incomes[0].id;
        let rent = model.state().expenses[0].id;

        assert!(model.update_line_item(LineItemKind::Incomes, pay, &LineItemPatch::amount("3000")));
        assert!(model.update_line_item(LineItemKind::Expenses, rent, &LineItemPatch::amount("1200")));

        let totals = model.compute_totals();
        assert_eq!(totals.total_income, Money::from_units(3000));
        assert_eq!(totals.leftover, Money::from_units(1800));
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let (mut model, recorder) = model_with_recorder();
        let before = model.state().clone();

        let found = model.update_line_item(
            LineItemKind::Expenses,
            LineItemId::new(),
            &LineItemPatch::amount("5"),
        );

        assert!(!found);
        assert_eq!(*model.state(), before);
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_remove_unknown_id_is_silent_noop() {
        let (mut model, recorder) = model_with_recorder();
        assert!(model
            .remove_line_item(LineItemKind::Incomes, LineItemId::new())
            .is_none());
        assert_eq!(recorder.count(), 0);

        let id = model.state().incomes[0].id;
        assert!(model.remove_line_item(LineItemKind::Incomes, id).is_some());
        assert_eq!(recorder.count(), 1);
        assert!(model.state().incomes.is_empty());
    }

    #[test]
    fn test_set_note() {
        let (mut model, recorder) = model_with_recorder();
        model.set_note("save $500");
        model.set_note("save $500");

        assert_eq!(model.state().note, "save $500");
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_set_currency() {
        let (mut model, recorder) = model_with_recorder();
        model.set_currency("GBP".parse().unwrap());
        assert_eq!(model.state().currency.code(), "GBP");
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_reset_declined_leaves_state() {
        let (mut model, recorder) = model_with_recorder();
        model.set_note("keep me");
        let before = model.state().clone();

        let asked = Cell::new(None);
        let prompt = |message: &str| {
            asked.set(Some(message.to_string()));
            false
        };

        assert!(!model.reset(&prompt));
        assert_eq!(asked.take().as_deref(), Some(RESET_PROMPT));
        assert_eq!(*model.state(), before);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_reset_confirmed_restores_starter() {
        let (mut model, recorder) = model_with_recorder();
        model.set_note("gone soon");
        model.add_line_item(LineItemKind::Expenses);
        let old_ids: Vec<_> = model.state().expenses.iter().map(|e| e.id).collect();

        assert!(model.reset(&Decided(true)));

        let state = model.state();
        assert!(state.note.is_empty());
        assert_eq!(state.expenses.len(), 7);
        assert!(state.expenses.iter().all(|e| !old_ids.contains(&e.id)));
        assert_eq!(recorder.count(), 3);
    }

    #[test]
    fn test_reset_uses_default_currency() {
        let mut model = BudgetModel::new(BudgetState::default())
            .with_default_currency("EUR".parse().unwrap());
        model.set_currency("JPY".parse().unwrap());

        model.reset(&Decided(true));
        assert_eq!(model.state().currency.code(), "EUR");
    }

    #[test]
    fn test_listeners_are_independent() {
        let first = Recorder::default();
        let second = Recorder::default();
        let mut model = BudgetModel::new(BudgetState::default());
        model.subscribe(first.clone());
        model.subscribe(second.clone());

        model.add_line_item(LineItemKind::Expenses);
        assert_eq!(first.count(), 1);
        assert_eq!(second.count(), 1);
    }
}
