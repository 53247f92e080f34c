//! Budget persistence adapter
//!
//! Reads the budget once at startup and writes the whole state after every
//! change. Both directions are best-effort: unreadable data means "start from
//! the default budget", and a failed write is logged and otherwise ignored so
//! that editing is never interrupted.

use tracing::{debug, info, warn};

use crate::error::BudgetResult;
use crate::models::{BudgetState, Currency};
use crate::services::StateListener;

use super::kv::KeyValueStore;
use super::snapshot::{self, LEGACY_EXPENSES_KEY, LEGACY_INCOMES_KEY, STORAGE_KEY};

/// Loads and saves [`BudgetState`] through a [`KeyValueStore`]
pub struct BudgetStore<S: KeyValueStore> {
    kv: S,
    /// Currency for states upgraded from the legacy format and for defaults
    default_currency: Currency,
}

impl<S: KeyValueStore> BudgetStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            default_currency: Currency::default(),
        }
    }

    /// Set the currency used for upgraded and default states
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Read the stored state, reporting why it could not be read
    ///
    /// `Ok(None)` means nothing has been stored yet.
    pub fn try_load(&self) -> BudgetResult<Option<BudgetState>> {
        let mut state = match self.kv.get(STORAGE_KEY)? {
            Some(raw) => snapshot::decode(&raw)?,
            None => {
                let incomes = self.kv.get(LEGACY_INCOMES_KEY)?;
                let expenses = self.kv.get(LEGACY_EXPENSES_KEY)?;
                match snapshot::upgrade_legacy(
                    incomes.as_deref(),
                    expenses.as_deref(),
                    self.default_currency.clone(),
                )? {
                    Some(state) => {
                        info!("Upgraded budget from legacy incomes/expenses keys");
                        state
                    }
                    None => return Ok(None),
                }
            }
        };

        let replaced = state.normalize();
        if replaced > 0 {
            warn!(replaced, "Stored budget had duplicate line item ids; reissued them");
        }
        Ok(Some(state))
    }

    /// Read the stored state; `None` if absent or unreadable
    pub fn load(&self) -> Option<BudgetState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable stored budget");
                None
            }
        }
    }

    /// Read the stored state, falling back to the starter budget
    pub fn load_or_default(&self) -> BudgetState {
        self.load().unwrap_or_else(|| {
            debug!("No stored budget; starting from defaults");
            BudgetState::starter(self.default_currency.clone())
        })
    }

    /// Write the full state, reporting failures
    pub fn try_save(&self, state: &BudgetState) -> BudgetResult<()> {
        let raw = snapshot::encode(state)?;
        self.kv.set(STORAGE_KEY, &raw)
    }

    /// Write the full state; failures are logged and swallowed
    pub fn save(&self, state: &BudgetState) {
        match self.try_save(state) {
            Ok(()) => debug!(
                incomes = state.incomes.len(),
                expenses = state.expenses.len(),
                "Saved budget"
            ),
            Err(e) => warn!(error = %e, "Failed to save budget; continuing without saving"),
        }
    }
}

impl<S: KeyValueStore> StateListener for BudgetStore<S> {
    fn on_state_changed(&mut self, state: &BudgetState) {
        self.save(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, LineItemKind, LineItemPatch, Money};
    use crate::storage::kv::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::empty(Currency::usd());
        state.incomes.push(LineItem::with_amount("Paycheck", Money::from_units(3000)));
        state.expenses.push(LineItem::with_amount("Rent", Money::from_units(1200)));
        state.expenses.push(LineItem::with_amount("Groceries", Money::from_cents(30055)));
        state.set_note("save $500");
        state
    }

    #[test]
    fn test_load_absent_is_none() {
        let store = BudgetStore::new(MemoryStore::new());
        assert!(store.load().is_none());
        assert_eq!(store.try_load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = BudgetStore::new(MemoryStore::new());
        let state = sample_state();

        store.save(&state);
        assert_eq!(store.load(), Some(state));
    }

    #[test]
    fn test_round_trip_keeps_rejected_input() {
        let store = BudgetStore::new(MemoryStore::new());
        let mut state = sample_state();
        let id = state.expenses[0].id;
        state.update_line_item(LineItemKind::Expenses, id, &LineItemPatch::amount("12OO"));

        store.save(&state);
        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.expenses[0].amount_input(), "12OO");
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let state = sample_state();

        {
            let store = BudgetStore::new(FileStore::new(temp_dir.path().to_path_buf()));
            store.save(&state);
        }

        let store = BudgetStore::new(FileStore::new(temp_dir.path().to_path_buf()));
        assert_eq!(store.load(), Some(state));
    }

    #[test]
    fn test_malformed_data_falls_back() {
        let kv = MemoryStore::new();
        kv.set(STORAGE_KEY, "{definitely not json").unwrap();
        let store = BudgetStore::new(kv);

        assert!(store.try_load().is_err());
        assert!(store.load().is_none());
        assert_eq!(store.load_or_default().expenses.len(), 7);
    }

    #[test]
    fn test_default_uses_configured_currency() {
        let store =
            BudgetStore::new(MemoryStore::new()).with_default_currency("EUR".parse().unwrap());
        assert_eq!(store.load_or_default().currency.code(), "EUR");
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let kv = MemoryStore::with_quota(16);
        let store = BudgetStore::new(kv.clone());

        // Must not panic or return anything
        store.save(&sample_state());
        assert!(kv.get(STORAGE_KEY).unwrap().is_none());
        assert!(store.try_save(&sample_state()).is_err());
    }

    #[test]
    fn test_legacy_keys_are_upgraded() {
        let kv = MemoryStore::new();
        kv.set(LEGACY_INCOMES_KEY, r#"[{"name":"Paycheck","amount":"3000"}]"#)
            .unwrap();
        kv.set(LEGACY_EXPENSES_KEY, r#"[{"name":"Rent","amount":"1200"}]"#)
            .unwrap();
        let store = BudgetStore::new(kv.clone());

        let state = store.load().unwrap();
        assert_eq!(state.incomes[0].name, "Paycheck");
        assert_eq!(state.expenses[0].amount, Money::from_units(1200));

        // The canonical key takes precedence once written
        store.save(&state);
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, state);
        assert!(kv.get(LEGACY_INCOMES_KEY).unwrap().is_some());
    }

    #[test]
    fn test_duplicate_ids_are_reissued_on_load() {
        let kv = MemoryStore::new();
        let mut state = sample_state();
        let dup = state.expenses[0].clone();
        state.expenses.push(dup);
        kv.set(STORAGE_KEY, &snapshot::encode(&state).unwrap()).unwrap();

        let loaded = BudgetStore::new(kv).load().unwrap();
        assert_eq!(loaded.expenses.len(), 3);
        assert_ne!(loaded.expenses[0].id, loaded.expenses[2].id);
    }

    #[test]
    fn test_listener_saves() {
        let kv = MemoryStore::new();
        let mut store = BudgetStore::new(kv.clone());

        store.on_state_changed(&sample_state());
        assert!(kv.get(STORAGE_KEY).unwrap().is_some());
    }
}
