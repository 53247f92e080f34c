//! Budget state
//!
//! The complete, persistable state of one budget: both line item collections,
//! a free-text note and the display currency. All mutations are plain methods
//! on an owned value; whoever owns the state decides when to persist it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::ids::LineItemId;
use super::line_item::{LineItem, LineItemKind, LineItemPatch, DEFAULT_ITEM_NAME};

/// Income lines in a fresh budget
pub const DEFAULT_INCOMES: &[&str] = &["Primary Paycheck"];

/// Expense lines in a fresh budget
pub const DEFAULT_EXPENSES: &[&str] = &[
    "Rent / Mortgage",
    "Credit Cards",
    "Utilities & Internet",
    "Insurance",
    "Groceries",
    "Transport",
    "Subscriptions",
];

/// Income and expense line items plus ancillary fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    #[serde(default)]
    pub incomes: Vec<LineItem>,
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "super::currency::lenient::deserialize")]
    pub currency: Currency,
}

impl BudgetState {
    /// A budget with no line items at all
    pub fn empty(currency: Currency) -> Self {
        Self {
            incomes: Vec::new(),
            expenses: Vec::new(),
            note: String::new(),
            currency,
        }
    }

    /// The starter budget: common categories, all at zero
    pub fn starter(currency: Currency) -> Self {
        Self {
            incomes: DEFAULT_INCOMES.iter().map(|n| LineItem::new(*n)).collect(),
            expenses: DEFAULT_EXPENSES.iter().map(|n| LineItem::new(*n)).collect(),
            note: String::new(),
            currency,
        }
    }

    /// Get one collection
    pub fn items(&self, kind: LineItemKind) -> &[LineItem] {
        match kind {
            LineItemKind::Incomes => &self.incomes,
            LineItemKind::Expenses => &self.expenses,
        }
    }

    fn items_mut(&mut self, kind: LineItemKind) -> &mut Vec<LineItem> {
        match kind {
            LineItemKind::Incomes => &mut self.incomes,
            LineItemKind::Expenses => &mut self.expenses,
        }
    }

    /// Find an item by id
    pub fn get(&self, kind: LineItemKind, id: LineItemId) -> Option<&LineItem> {
        self.items(kind).iter().find(|item| item.id == id)
    }

    /// Append a fresh item and return a copy of it
    pub fn add_line_item(&mut self, kind: LineItemKind) -> LineItem {
        self.add_line_item_with(kind, &LineItemPatch::default())
    }

    /// Append a fresh item with `patch` already applied
    pub fn add_line_item_with(&mut self, kind: LineItemKind, patch: &LineItemPatch) -> LineItem {
        let mut item = LineItem::new(DEFAULT_ITEM_NAME);
        // Ids must stay unique within the collection
        while self.get(kind, item.id).is_some() {
            item.id = LineItemId::new();
        }
        patch.apply(&mut item);
        self.items_mut(kind).push(item.clone());
        item
    }

    /// Apply a patch to the item with `id`
    ///
    /// Returns false (leaving the state untouched) when no such item exists.
    pub fn update_line_item(
        &mut self,
        kind: LineItemKind,
        id: LineItemId,
        patch: &LineItemPatch,
    ) -> bool {
        match self.items_mut(kind).iter_mut().find(|item| item.id == id) {
            Some(item) => {
                patch.apply(item);
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`, returning it if it existed
    pub fn remove_line_item(&mut self, kind: LineItemKind, id: LineItemId) -> Option<LineItem> {
        let items = self.items_mut(kind);
        let index = items.iter().position(|item| item.id == id)?;
        Some(items.remove(index))
    }

    /// Replace the note verbatim
    pub fn set_note(&mut self, text: impl Into<String>) {
        self.note = text.into();
    }

    /// Re-issue any id that repeats within its collection
    ///
    /// Returns how many ids were replaced. Used on states read from storage,
    /// which may have been edited by hand.
    pub fn normalize(&mut self) -> usize {
        let mut replaced = 0;
        for kind in LineItemKind::all() {
            let mut seen = HashSet::new();
            for item in self.items_mut(kind).iter_mut() {
                while !seen.insert(item.id) {
                    item.id = LineItemId::new();
                    replaced += 1;
                }
            }
        }
        replaced
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::starter(Currency::default())
    }
}
