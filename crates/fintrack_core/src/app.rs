//! Application context wiring identity and ledger for a presentation layer.
//!
//! # Responsibility
//! - Own the auth and ledger services for the lifetime of one UI session.
//! - Translate form-level input into service calls.
//! - Produce the full set of projections the UI renders after each action.
//!
//! # Invariants
//! - Constructed once per process start; no ambient global state.
//! - Every mutation is persisted before the call returns, so a following
//!   `dashboard` call always observes it.

use crate::model::expense::{ExpenseInput, ExpenseRecord};
use crate::model::identity::Identity;
use crate::projection::format::MonthlyChart;
use crate::projection::ledger_views::{summary, table_view, LedgerSummary};
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use crate::service::auth_service::AuthService;
use crate::service::ledger_service::LedgerService;
use chrono::{Datelike, NaiveDate};
use log::debug;

/// Everything the UI renders for the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Records newest date first.
    pub table: Vec<ExpenseRecord>,
    pub summary: LedgerSummary,
    /// Monthly totals for the reference date's year.
    pub chart: MonthlyChart,
}

impl Dashboard {
    /// Computes every projection against `today`.
    pub fn build(records: &[ExpenseRecord], today: NaiveDate) -> Self {
        Self {
            table: table_view(records),
            summary: summary(records, today),
            chart: MonthlyChart::for_year(records, today.year()),
        }
    }
}

/// Session context over one key-value store.
pub struct FinTrackApp<S: KeyValueStore + Clone> {
    auth: AuthService<S>,
    ledger: LedgerService<S>,
}

impl<S: KeyValueStore + Clone> FinTrackApp<S> {
    /// Loads the persisted ledger, then the persisted identity.
    ///
    /// # Errors
    /// - Fails when the ledger cannot be read from storage.
    pub fn new(store: S) -> StoreResult<Self> {
        let ledger = LedgerService::load(store.clone())?;
        let auth = AuthService::load(store);
        Ok(Self { auth, ledger })
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.auth.current()
    }

    /// See [`AuthService::login`].
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<Option<Identity>> {
        self.auth.login(email, password)
    }

    pub fn logout(&mut self) -> StoreResult<()> {
        self.auth.logout()
    }

    /// Adds an expense from raw form fields.
    ///
    /// Returns `Ok(None)` when the amount does not parse or the draft fails
    /// validation; storage is left untouched in that case.
    pub fn add_expense(&mut self, input: &ExpenseInput) -> StoreResult<Option<ExpenseRecord>> {
        match input.to_draft() {
            Ok(draft) => self.ledger.append(&draft),
            Err(err) => {
                debug!(
                    "event=expense_append module=app status=rejected reason={}",
                    err.code()
                );
                Ok(None)
            }
        }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    pub fn dashboard(&self, today: NaiveDate) -> Dashboard {
        Dashboard::build(self.ledger.records(), today)
    }
}
