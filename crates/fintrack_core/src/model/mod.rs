//! Domain records for the expense tracker.
//!
//! # Responsibility
//! - Define the persisted shapes of the logged-in identity and expenses.
//! - Own input validation for new expenses.
//!
//! # Invariants
//! - Expense records are immutable once appended to a ledger.
//! - Identity and ledger records never reference each other.

pub mod expense;
pub mod identity;
