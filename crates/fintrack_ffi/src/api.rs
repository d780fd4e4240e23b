//! FFI use-case API for the expense tracker UI.
//!
//! # Responsibility
//! - Expose login, logout, add-expense and dashboard calls to Dart via FRB.
//! - Flatten core results into display-ready response envelopes.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Every call opens storage, acts, and persists before returning.
//! - Amount strings in responses are already formatted for display.

use chrono::Local;
use fintrack_core::db::open_db;
use fintrack_core::{
    core_version as core_version_inner, format_amount, init_logging_from_config, CoreConfig,
    ExpenseInput, ExpenseRecord, FinTrackApp, SqliteKvStore,
};
use log::warn;
use std::sync::OnceLock;

static CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Exposes the core crate version.
///
/// # FFI contract
/// - Sync call, non-blocking. Never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Blank `level`/`log_dir` fall back to `FINTRACK_LOG_LEVEL`/`FINTRACK_LOG_DIR`.
/// Returns an empty string on success, otherwise the error message. Safe to
/// repeat with identical arguments.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let resolved = config().with_logging_overrides(&level, &log_dir);
    if resolved.log_dir.is_none() {
        return "log_dir is required when FINTRACK_LOG_DIR is unset".to_string();
    }
    match init_logging_from_config(&resolved) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Login state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub ok: bool,
    /// Logged-in email, `None` when logged out.
    pub email: Option<String>,
    pub message: String,
}

/// Result of an add-expense submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseActionResponse {
    pub ok: bool,
    pub expense_id: Option<i64>,
    pub message: String,
}

/// One table row, newest date first.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: String,
    /// Formatted, e.g. `₹12.50`.
    pub amount: String,
}

/// Everything the main screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardResponse {
    pub ok: bool,
    pub rows: Vec<ExpenseRow>,
    pub total_spent: String,
    pub month_spent: String,
    pub total_count: u32,
    pub chart_year: i32,
    pub chart_labels: Vec<String>,
    pub chart_values: Vec<f64>,
    pub message: String,
}

impl ExpenseActionResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            expense_id: None,
            message: message.into(),
        }
    }
}

impl AuthResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            email: None,
            message: message.into(),
        }
    }
}

/// Logs in with any non-blank email/password pair.
///
/// # FFI contract
/// - Sync call, DB-backed.
/// - Blank fields return `ok=false` and leave storage untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(email: String, password: String) -> AuthResponse {
    match with_app(|app| {
        app.login(&email, &password)
            .map_err(|err| err.to_string())
    }) {
        Ok(Some(identity)) => AuthResponse {
            ok: true,
            email: Some(identity.email),
            message: "Logged in.".to_string(),
        },
        Ok(None) => AuthResponse::failure("Email and password are required."),
        Err(err) => AuthResponse::failure(format!("auth_login failed: {err}")),
    }
}

/// Clears the persisted identity.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_logout() -> AuthResponse {
    match with_app(|app| app.logout().map_err(|err| err.to_string())) {
        Ok(()) => AuthResponse {
            ok: true,
            email: None,
            message: "Logged out.".to_string(),
        },
        Err(err) => AuthResponse::failure(format!("auth_logout failed: {err}")),
    }
}

/// Returns the identity restored from storage, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_current() -> AuthResponse {
    match with_app(|app| Ok(app.current_user().map(|identity| identity.email.clone()))) {
        Ok(email) => AuthResponse {
            ok: true,
            message: if email.is_some() {
                "Logged in.".to_string()
            } else {
                "Logged out.".to_string()
            },
            email,
        },
        Err(err) => AuthResponse::failure(format!("auth_current failed: {err}")),
    }
}

/// Adds an expense from raw form fields.
///
/// # FFI contract
/// - Sync call, DB-backed.
/// - Invalid input returns `ok=false` with the rejection reason; nothing is
///   stored.
#[flutter_rust_bridge::frb(sync)]
pub fn expense_add(
    date: String,
    category: String,
    description: String,
    amount: String,
) -> ExpenseActionResponse {
    let input = ExpenseInput {
        date,
        category,
        description,
        amount,
    };
    let rejection = input
        .to_draft()
        .and_then(|draft| draft.validate())
        .err();

    match with_app(|app| app.add_expense(&input).map_err(|err| err.to_string())) {
        Ok(Some(record)) => ExpenseActionResponse {
            ok: true,
            expense_id: Some(record.id),
            message: "Expense added.".to_string(),
        },
        Ok(None) => ExpenseActionResponse::failure(match rejection {
            Some(reason) => format!("Expense rejected: {reason}"),
            None => "Expense rejected.".to_string(),
        }),
        Err(err) => ExpenseActionResponse::failure(format!("expense_add failed: {err}")),
    }
}

/// Computes table rows, summary badges and the current-year chart.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard() -> DashboardResponse {
    let today = Local::now().date_naive();
    match with_app(|app| Ok(app.dashboard(today))) {
        Ok(view) => DashboardResponse {
            ok: true,
            rows: view.table.iter().map(to_expense_row).collect(),
            total_spent: format_amount(view.summary.total),
            month_spent: format_amount(view.summary.month_total),
            total_count: u32::try_from(view.summary.count).unwrap_or(u32::MAX),
            chart_year: view.chart.year,
            chart_labels: view.chart.labels.iter().map(|label| label.to_string()).collect(),
            chart_values: view.chart.values.to_vec(),
            message: String::new(),
        },
        Err(err) => DashboardResponse {
            ok: false,
            rows: Vec::new(),
            total_spent: format_amount(0.0),
            month_spent: format_amount(0.0),
            total_count: 0,
            chart_year: 0,
            chart_labels: Vec::new(),
            chart_values: Vec::new(),
            message: format!("dashboard failed: {err}"),
        },
    }
}

fn config() -> &'static CoreConfig {
    CONFIG.get_or_init(|| {
        let config = CoreConfig::from_env();
        // Keep test runs away from the user's ledger and log settings.
        #[cfg(test)]
        let config = CoreConfig {
            db_path: std::env::temp_dir()
                .join(format!("fintrack-ffi-test-{}.sqlite3", std::process::id())),
            log_dir: None,
            ..config
        };
        config
    })
}

fn with_app<T>(
    f: impl FnOnce(&mut FinTrackApp<SqliteKvStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = &config().db_path;
    let conn = open_db(db_path).map_err(|err| {
        warn!("event=ffi_call module=ffi status=error error_code=db_open_failed error={err}");
        format!("storage open failed: {err}")
    })?;
    let store =
        SqliteKvStore::try_new(&conn).map_err(|err| format!("storage init failed: {err}"))?;
    let mut app = FinTrackApp::new(store).map_err(|err| {
        warn!("event=ffi_call module=ffi status=error error_code=ledger_load_failed error={err}");
        format!("ledger load failed: {err}")
    })?;
    f(&mut app)
}

fn to_expense_row(record: &ExpenseRecord) -> ExpenseRow {
    ExpenseRow {
        id: record.id,
        date: record.date.clone(),
        category: record.category.clone(),
        description: record.description.clone(),
        amount: format_amount(record.amount),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        auth_current, auth_login, auth_logout, config, core_version, dashboard, expense_add,
        init_logging,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("info".to_string(), "logs/dev".to_string()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/fintrack-logs".to_string()).is_empty());
    }

    #[test]
    fn test_runs_use_a_private_database() {
        let name = config()
            .db_path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("db path should have a file name")
            .to_string();
        assert_eq!(
            name,
            format!("fintrack-ffi-test-{}.sqlite3", std::process::id())
        );
    }

    #[test]
    fn blank_login_is_refused() {
        let response = auth_login(String::new(), "pw".to_string());
        assert!(!response.ok);
        assert_eq!(response.email, None);
    }

    #[test]
    fn login_current_logout_cycle() {
        let login = auth_login(" ffi@example.com ".to_string(), "pw".to_string());
        assert!(login.ok, "{}", login.message);
        assert_eq!(login.email.as_deref(), Some("ffi@example.com"));

        let current = auth_current();
        assert!(current.ok, "{}", current.message);
        assert_eq!(current.email.as_deref(), Some("ffi@example.com"));

        let logout = auth_logout();
        assert!(logout.ok, "{}", logout.message);
        assert_eq!(auth_current().email, None);
    }

    #[test]
    fn added_expense_shows_up_in_dashboard() {
        let description = unique_token("dashboard-row");
        let added = expense_add(
            "2024-03-20".to_string(),
            "Travel".to_string(),
            description.clone(),
            "7.25".to_string(),
        );
        assert!(added.ok, "{}", added.message);
        let id = added.expense_id.expect("added expense should return an id");

        let view = dashboard();
        assert!(view.ok, "{}", view.message);
        let row = view
            .rows
            .iter()
            .find(|row| row.id == id)
            .expect("added row should be listed");
        assert_eq!(row.description, description);
        assert_eq!(row.amount, "₹7.25");
        assert!(view.total_count >= 1);
        assert_eq!(view.chart_labels.len(), 12);
        assert_eq!(view.chart_values.len(), 12);
        assert!(view.total_spent.starts_with('₹'));
    }

    #[test]
    fn non_numeric_amount_reports_reason() {
        let response = expense_add(
            "2024-03-20".to_string(),
            "Food".to_string(),
            String::new(),
            "abc".to_string(),
        );
        assert!(!response.ok);
        assert_eq!(response.expense_id, None);
        assert!(response.message.contains("not a number"), "{}", response.message);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
