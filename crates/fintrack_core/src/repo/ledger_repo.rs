//! Persisted expense ledger.
//!
//! # Responsibility
//! - Read and write the whole ledger as one JSON array.
//!
//! # Invariants
//! - The array order is the ledger's insertion order.
//! - `write_all` replaces the stored array in a single `set`.
//! - A missing or undecodable array reads as an empty ledger.
//! - A failed read is returned as an error, never as an empty ledger, so a
//!   later `write_all` cannot overwrite records it never saw.

use crate::model::expense::ExpenseRecord;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::warn;

/// Storage key of the ledger array.
pub const LEDGER_KEY: &str = "fintrack_expenses";

/// Whole-array persistence for expense records.
pub struct LedgerStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads every stored record in insertion order.
    ///
    /// # Errors
    /// - Propagates storage read failures unchanged.
    pub fn read_all(&self) -> StoreResult<Vec<ExpenseRecord>> {
        let Some(raw) = self.store.get(LEDGER_KEY)? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("event=ledger_load module=ledger status=error error_code=decode_failed error={err}");
            Vec::new()
        }))
    }

    /// Serializes and stores the full record sequence.
    pub fn write_all(&self, records: &[ExpenseRecord]) -> StoreResult<()> {
        let raw = serde_json::to_string(records)?;
        self.store.set(LEDGER_KEY, &raw)
    }
}
