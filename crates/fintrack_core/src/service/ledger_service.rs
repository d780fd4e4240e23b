//! Ledger use-case service.
//!
//! # Responsibility
//! - Hold the in-memory mirror of the persisted ledger.
//! - Validate, identify and append new expenses, persisting after each one.
//!
//! # Invariants
//! - After every public call returns, `records()` equals the persisted array.
//! - Records are append-only; nothing edits or removes a stored record.
//! - Ids strictly increase in append order within one ledger.

use crate::model::expense::{ExpenseDraft, ExpenseId, ExpenseRecord};
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use crate::repo::ledger_repo::LedgerStore;
use log::{debug, error, info};

/// In-memory ledger mirrored to a [`LedgerStore`].
pub struct LedgerService<S: KeyValueStore> {
    store: LedgerStore<S>,
    records: Vec<ExpenseRecord>,
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Creates the service and reads the persisted ledger into memory.
    ///
    /// # Errors
    /// - Returns the storage error when the ledger cannot be read; no
    ///   service exists that could later overwrite unread records.
    pub fn load(store: S) -> StoreResult<Self> {
        let store = LedgerStore::new(store);
        let records = store.read_all().map_err(|err| {
            error!("event=ledger_load module=ledger status=error error_code=read_failed error={err}");
            err
        })?;
        info!(
            "event=ledger_load module=ledger status=ok count={}",
            records.len()
        );
        Ok(Self { store, records })
    }

    /// Re-reads the persisted ledger, replacing the in-memory copy.
    ///
    /// On read failure the previous in-memory copy is kept.
    pub fn load_all(&mut self) -> StoreResult<&[ExpenseRecord]> {
        self.records = self.store.read_all()?;
        Ok(&self.records)
    }

    /// Current ledger snapshot in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Appends one expense and persists the whole ledger.
    ///
    /// # Contract
    /// - Invalid drafts return `Ok(None)`; nothing is mutated or written.
    /// - On success returns the stored record with its assigned id.
    /// - On write failure the in-memory append is undone and the error is
    ///   returned.
    pub fn append(&mut self, draft: &ExpenseDraft) -> StoreResult<Option<ExpenseRecord>> {
        if let Err(err) = draft.validate() {
            debug!(
                "event=expense_append module=ledger status=rejected reason={}",
                err.code()
            );
            return Ok(None);
        }

        let record = draft.to_record(self.next_id(now_epoch_ms()));
        self.records.push(record.clone());

        if let Err(err) = self.persist() {
            self.records.pop();
            error!(
                "event=expense_append module=ledger status=error error_code=persist_failed error={err}"
            );
            return Err(err);
        }

        info!(
            "event=expense_append module=ledger status=ok id={} count={}",
            record.id,
            self.records.len()
        );
        Ok(Some(record))
    }

    /// Writes the full in-memory ledger to storage.
    pub fn persist(&self) -> StoreResult<()> {
        self.store.write_all(&self.records)
    }

    // Epoch-ms ids collide when two appends share a millisecond; bump past
    // the newest id instead.
    fn next_id(&self, now_ms: i64) -> ExpenseId {
        match self.records.iter().map(|record| record.id).max() {
            Some(last) if last >= now_ms => last.saturating_add(1),
            _ => now_ms,
        }
    }
}

fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::LedgerService;
    use crate::db::open_db_in_memory;
    use crate::model::expense::ExpenseDraft;
    use crate::repo::kv_store::SqliteKvStore;

    #[test]
    fn next_id_uses_clock_until_it_would_collide() {
        let conn = open_db_in_memory().unwrap();
        let mut service = LedgerService::load(SqliteKvStore::try_new(&conn).unwrap()).unwrap();
        assert_eq!(service.next_id(1_000), 1_000);

        let draft = ExpenseDraft::new("2024-01-01", "Food", "", 1.0);
        let stored = service.append(&draft).unwrap().unwrap();

        assert_eq!(service.next_id(stored.id), stored.id + 1);
        assert_eq!(service.next_id(stored.id - 50), stored.id + 1);
        assert_eq!(service.next_id(stored.id + 50), stored.id + 50);
    }
}
