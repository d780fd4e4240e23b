//! Display helpers shared by every presentation surface.

use super::ledger_views::monthly_series;
use crate::model::expense::ExpenseRecord;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Bar chart axis labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Renders an amount with the currency symbol and two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value:.2}")
}

/// Chart-ready monthly series for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyChart {
    pub year: i32,
    pub labels: [&'static str; 12],
    pub values: [f64; 12],
}

impl MonthlyChart {
    pub fn for_year(records: &[ExpenseRecord], year: i32) -> Self {
        Self {
            year,
            labels: MONTH_LABELS,
            values: monthly_series(records, year),
        }
    }
}
