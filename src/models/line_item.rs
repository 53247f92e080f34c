//! Line item model
//!
//! A line item is one named amount in either the income or the expense
//! collection of a budget.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::LineItemId;
use super::money::{self, Money};

/// Name given to items created with the add control
pub const DEFAULT_ITEM_NAME: &str = "New Item";

/// Which collection a line item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineItemKind {
    Incomes,
    Expenses,
}

impl LineItemKind {
    /// Both kinds, in display order
    pub fn all() -> [Self; 2] {
        [Self::Incomes, Self::Expenses]
    }

    /// Collection name as stored ("incomes" / "expenses")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomes => "incomes",
            Self::Expenses => "expenses",
        }
    }

    /// Singular label for headings and messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Incomes => "Income",
            Self::Expenses => "Expense",
        }
    }

    /// The other collection
    pub fn other(&self) -> Self {
        match self {
            Self::Incomes => Self::Expenses,
            Self::Expenses => Self::Incomes,
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LineItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" => Ok(Self::Incomes),
            "expense" | "expenses" => Ok(Self::Expenses),
            other => Err(format!(
                "Unknown line item kind '{}' (expected 'income' or 'expense')",
                other
            )),
        }
    }
}

/// A single named amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    /// Amount counted in totals, never negative
    #[serde(with = "money::as_units")]
    pub amount: Money,
    /// Raw input that could not be read as an amount, kept for redisplay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_text: Option<String>,
}

impl LineItem {
    /// Create a new line item with a zero amount
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LineItemId::new(),
            name: name.into(),
            amount: Money::zero(),
            amount_text: None,
        }
    }

    /// Create a new line item with a given amount
    pub fn with_amount(name: impl Into<String>, amount: Money) -> Self {
        let mut item = Self::new(name);
        item.amount = if amount.is_negative() {
            Money::zero()
        } else {
            amount
        };
        item
    }

    /// Set the amount from user input
    ///
    /// Input that is not a non-negative number counts as zero; the text is
    /// remembered so the field can show what the user typed.
    pub fn set_amount_input(&mut self, raw: &str) {
        match Money::parse_amount(raw) {
            Some(amount) => {
                self.amount = amount;
                self.amount_text = None;
            }
            None => {
                self.amount = Money::zero();
                self.amount_text = Some(raw.to_string());
            }
        }
    }

    /// Text for the amount input field
    pub fn amount_input(&self) -> String {
        if let Some(ref text) = self.amount_text {
            return text.clone();
        }
        if self.amount.cents_part() == 0 {
            self.amount.units().to_string()
        } else if self.amount.cents_part() % 10 == 0 {
            format!("{}.{}", self.amount.units(), self.amount.cents_part() / 10)
        } else {
            format!("{}.{:02}", self.amount.units(), self.amount.cents_part())
        }
    }

    /// Whether the last amount input was rejected
    pub fn has_invalid_amount(&self) -> bool {
        self.amount_text.is_some()
    }
}

/// Partial update for a line item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemPatch {
    pub name: Option<String>,
    /// Raw amount input; coerced on apply
    pub amount: Option<String>,
}

impl LineItemPatch {
    /// Patch that renames an item
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            amount: None,
        }
    }

    /// Patch that sets an item's amount from raw input
    pub fn amount(raw: impl Into<String>) -> Self {
        Self {
            name: None,
            amount: Some(raw.into()),
        }
    }

    /// Add an amount to this patch
    pub fn with_amount(mut self, raw: impl Into<String>) -> Self {
        self.amount = Some(raw.into());
        self
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none()
    }

    /// Apply the patch to an item
    pub fn apply(&self, item: &mut LineItem) {
        if let Some(ref name) = self.name {
            item.name = name.clone();
        }
        if let Some(ref raw) = self.amount {
            item.set_amount_input(raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_item() {
        let item = LineItem::new("Rent");
        assert_eq!(item.name, "Rent");
        assert!(item.amount.is_zero());
        assert!(!item.has_invalid_amount());
    }

    #[test]
    fn test_with_negative_amount_clamps() {
        let item = LineItem::with_amount("Refund", Money::from_units(-10));
        assert!(item.amount.is_zero());
    }

    #[test]
    fn test_set_amount_input_valid() {
        let mut item = LineItem::new("Rent");
        item.set_amount_input("1200.50");
        assert_eq!(item.amount, Money::from_cents(120050));
        assert_eq!(item.amount_input(), "1200.5");
        assert!(!item.has_invalid_amount());
    }

    #[test]
    fn test_set_amount_input_invalid_keeps_text() {
        let mut item = LineItem::new("Rent");
        item.set_amount_input("1200");
        item.set_amount_input("twelve hundred");
        assert!(item.amount.is_zero());
        assert_eq!(item.amount_input(), "twelve hundred");

        // A later valid input clears the remembered text
        item.set_amount_input("15.05");
        assert_eq!(item.amount_input(), "15.05");
        assert!(!item.has_invalid_amount());
    }

    #[test]
    fn test_negative_input_counts_as_zero() {
        let mut item = LineItem::new("Gym");
        item.set_amount_input("-40");
        assert!(item.amount.is_zero());
        assert!(item.has_invalid_amount());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<LineItemKind>(), Ok(LineItemKind::Incomes));
        assert_eq!("Expenses".parse::<LineItemKind>(), Ok(LineItemKind::Expenses));
        assert!("savings".parse::<LineItemKind>().is_err());
        assert_eq!(LineItemKind::Incomes.other(), LineItemKind::Expenses);
    }

    #[test]
    fn test_patch_apply() {
        let mut item = LineItem::new("Old");
        let patch = LineItemPatch::name("Groceries").with_amount("300");
        assert!(!patch.is_empty());

        patch.apply(&mut item);
        assert_eq!(item.name, "Groceries");
        assert_eq!(item.amount, Money::from_units(300));

        LineItemPatch::default().apply(&mut item);
        assert_eq!(item.name, "Groceries");
    }

    #[test]
    fn test_serialization_shape() {
        let mut item = LineItem::new("Rent");
        item.set_amount_input("1200");
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["name"], "Rent");
        assert_eq!(value["amount"], 1200.0);
        assert!(value.get("amount_text").is_none());
        assert_eq!(value["id"], item.id.as_uuid().to_string());
    }
}
