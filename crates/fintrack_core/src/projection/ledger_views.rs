//! Read-only views derived from a ledger snapshot.
//!
//! # Invariants
//! - Functions here never mutate their input and have no side effects.
//! - Sums are plain `f64` additions in ledger order; rounding is left to
//!   display formatting.
//! - Records whose date does not parse never land in a month bucket.

use crate::model::expense::ExpenseRecord;
use chrono::{DateTime, Datelike, NaiveDate};

/// Aggregate figures for the summary badges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerSummary {
    /// Sum of every amount.
    pub total: f64,
    /// Sum of amounts dated in the reference month.
    pub month_total: f64,
    /// Number of records, all time.
    pub count: usize,
}

/// Interprets a stored date string as a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (their written date is used,
/// no timezone shift).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Returns the ledger sorted newest date first.
///
/// Equal dates keep insertion order. Unparseable dates sort last.
pub fn table_view(records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    let mut keyed: Vec<(Option<NaiveDate>, &ExpenseRecord)> = records
        .iter()
        .map(|record| (parse_calendar_date(&record.date), record))
        .collect();
    // Stable sort; `None` orders below every date so it trails when reversed.
    keyed.sort_by(|(left, _), (right, _)| right.cmp(left));
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Computes all-time and reference-month totals.
pub fn summary(records: &[ExpenseRecord], reference: NaiveDate) -> LedgerSummary {
    let total = records.iter().map(|record| record.amount).fold(0.0, |a, b| a + b);
    let month_total = records
        .iter()
        .filter(|record| {
            parse_calendar_date(&record.date).is_some_and(|date| {
                date.year() == reference.year() && date.month() == reference.month()
            })
        })
        .map(|record| record.amount)
        .fold(0.0, |a, b| a + b);

    LedgerSummary {
        total,
        month_total,
        count: records.len(),
    }
}

/// Totals per month of `year`; index 0 is January.
pub fn monthly_series(records: &[ExpenseRecord], year: i32) -> [f64; 12] {
    let mut buckets = [0.0; 12];
    for record in records {
        let Some(date) = parse_calendar_date(&record.date) else {
            continue;
        };
        if date.year() != year {
            continue;
        }
        if let Some(bucket) = buckets.get_mut(date.month0() as usize) {
            *bucket += record.amount;
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::{monthly_series, parse_calendar_date, summary, table_view};
    use crate::model::expense::ExpenseRecord;
    use chrono::NaiveDate;

    fn record(id: i64, date: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            id,
            date: date.to_string(),
            category: "Food".to_string(),
            description: "-".to_string(),
            amount,
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(parse_calendar_date("2024-03-05"), Some(ymd(2024, 3, 5)));
        assert_eq!(
            parse_calendar_date("2024-03-31T23:30:00-05:00"),
            Some(ymd(2024, 3, 31))
        );
        assert_eq!(parse_calendar_date("05/03/2024"), None);
        assert_eq!(parse_calendar_date("2024-02-30"), None);
    }

    #[test]
    fn table_view_sorts_descending_with_stable_ties_and_invalid_last() {
        let ledger = vec![
            record(1, "2024-01-10", 1.0),
            record(2, "not a date", 2.0),
            record(3, "2024-05-01", 3.0),
            record(4, "2024-01-10", 4.0),
        ];

        let ids: Vec<i64> = table_view(&ledger).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2]);
        assert_eq!(ledger[0].id, 1, "input must be left untouched");
    }

    #[test]
    fn summary_on_empty_ledger_is_zero() {
        let result = summary(&[], ymd(2024, 3, 1));
        assert_eq!(result.total, 0.0);
        assert_eq!(result.month_total, 0.0);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn summary_month_total_requires_same_year_and_month() {
        let ledger = vec![
            record(1, "2024-03-01", 10.0),
            record(2, "2023-03-15", 20.0),
            record(3, "2024-04-01", 40.0),
            record(4, "garbage", 80.0),
        ];

        let result = summary(&ledger, ymd(2024, 3, 28));
        assert_eq!(result.total, 150.0);
        assert_eq!(result.month_total, 10.0);
        assert_eq!(result.count, 4);
    }

    #[test]
    fn monthly_series_buckets_only_the_requested_year() {
        let ledger = vec![
            record(1, "2024-01-31", 1.5),
            record(2, "2024-12-01", 2.0),
            record(3, "2024-12-24", 3.0),
            record(4, "2025-01-01", 100.0),
        ];

        let series = monthly_series(&ledger, 2024);
        assert_eq!(series[0], 1.5);
        assert_eq!(series[11], 5.0);
        assert_eq!(series[1..11].iter().sum::<f64>(), 0.0);
        assert_eq!(series.iter().sum::<f64>(), 6.5);
    }
}
