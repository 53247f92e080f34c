//! Persisted snapshot format
//!
//! The canonical format is a single JSON document under [`STORAGE_KEY`]:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "saved_at": "2025-01-31T12:00:00Z",
//!   "incomes": [{"id": "…", "name": "Paycheck", "amount": 3000.0}],
//!   "expenses": [{"id": "…", "name": "Rent", "amount": 1200.0}],
//!   "note": "",
//!   "currency": "USD"
//! }
//! ```
//!
//! Older installs kept two separate keys, `incomes` and `expenses`, each an
//! array of `{name, amount}` without ids, where the amount was whatever the
//! input field held (often a string). Those are upgraded on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Currency, LineItem, Money};

/// Key of the canonical snapshot
pub const STORAGE_KEY: &str = "budget-planner-v1";

/// Newest snapshot schema this build reads and writes
pub const SCHEMA_VERSION: u32 = 1;

/// Keys used by the pre-versioned format
pub const LEGACY_INCOMES_KEY: &str = "incomes";
pub const LEGACY_EXPENSES_KEY: &str = "expenses";

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    #[serde(flatten)]
    state: &'a BudgetState,
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(flatten)]
    state: BudgetState,
}

/// Serialize a state into the canonical snapshot document
pub fn encode(state: &BudgetState) -> BudgetResult<String> {
    let snapshot = SnapshotRef {
        schema_version: SCHEMA_VERSION,
        saved_at: Utc::now(),
        state,
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Parse a canonical snapshot document
pub fn decode(raw: &str) -> BudgetResult<BudgetState> {
    let snapshot: Snapshot = serde_json::from_str(raw)?;
    if snapshot.schema_version > SCHEMA_VERSION {
        return Err(BudgetError::Storage(format!(
            "Snapshot schema version {} is newer than supported version {}",
            snapshot.schema_version, SCHEMA_VERSION
        )));
    }
    Ok(snapshot.state)
}

#[derive(Deserialize)]
struct LegacyItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    amount: Value,
}

impl LegacyItem {
    fn upgrade(self) -> LineItem {
        let mut item = LineItem::new(self.name.unwrap_or_default());
        match self.amount {
            Value::String(raw) => item.set_amount_input(&raw),
            Value::Number(n) => {
                let amount = n
                    .as_f64()
                    .filter(|v| *v >= 0.0)
                    .and_then(Money::from_units_f64);
                match amount {
                    Some(amount) => item.amount = amount,
                    None => item.set_amount_input(&n.to_string()),
                }
            }
            _ => {}
        }
        item
    }
}

fn decode_legacy_items(raw: Option<&str>) -> BudgetResult<Vec<LineItem>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    // The old app stored the literal "null" after clearing a collection
    let items: Option<Vec<LegacyItem>> = serde_json::from_str(raw)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(LegacyItem::upgrade)
        .collect())
}

/// Build a state from the pre-versioned `incomes` / `expenses` documents
///
/// Returns `Ok(None)` when neither document exists.
pub fn upgrade_legacy(
    incomes: Option<&str>,
    expenses: Option<&str>,
    currency: Currency,
) -> BudgetResult<Option<BudgetState>> {
    if incomes.is_none() && expenses.is_none() {
        return Ok(None);
    }

    let mut state = BudgetState::empty(currency);
    state.incomes = decode_legacy_items(incomes)?;
    state.expenses = decode_legacy_items(expenses)?;
    Ok(Some(state))
}
