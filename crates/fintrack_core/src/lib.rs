//! Core domain logic for FinTrack.
//! This crate owns the ledger, identity and projection rules; UI layers only
//! bind events to [`FinTrackApp`] and render what it returns.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod service;

pub use app::{Dashboard, FinTrackApp};
pub use config::CoreConfig;
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::expense::{
    ExpenseDraft, ExpenseId, ExpenseInput, ExpenseRecord, ExpenseValidationError,
    DESCRIPTION_PLACEHOLDER,
};
pub use model::identity::Identity;
pub use projection::format::{format_amount, MonthlyChart, MONTH_LABELS};
pub use projection::ledger_views::{
    monthly_series, parse_calendar_date, summary, table_view, LedgerSummary,
};
pub use repo::identity_repo::{IdentityStore, IDENTITY_KEY};
pub use repo::kv_store::{KeyValueStore, SqliteKvStore, StoreError, StoreResult};
pub use repo::ledger_repo::{LedgerStore, LEDGER_KEY};
pub use service::auth_service::AuthService;
pub use service::ledger_service::LedgerService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
