//! Pure projections of a ledger snapshot for presentation.
//!
//! # Responsibility
//! - Derive the table listing, summary figures and monthly chart series.
//! - Provide display formatting for amounts and month labels.

pub mod format;
pub mod ledger_views;
