//! Expense domain model.
//!
//! # Responsibility
//! - Define the persisted expense record and the draft it is built from.
//! - Validate user input before it may enter a ledger.
//!
//! # Invariants
//! - `date` and `category` are non-blank on every stored record.
//! - `amount` is finite on every stored record.
//! - `description` is never empty; blank input becomes [`DESCRIPTION_PLACEHOLDER`].

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ledger-unique identifier in epoch-millisecond shape.
pub type ExpenseId = i64;

/// Stored in place of an empty description.
pub const DESCRIPTION_PLACEHOLDER: &str = "-";

/// One persisted expense. Serialized field names match the stored JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    /// Calendar date as entered, e.g. `2024-03-05`. Not timezone-normalized.
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

/// Reason an expense draft cannot be appended.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDate,
    EmptyCategory,
    /// Amount text did not parse as a number.
    InvalidAmount(String),
    /// Amount parsed but is NaN or infinite.
    NonFiniteAmount(f64),
}

impl Display for ExpenseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDate => write!(f, "expense date is required"),
            Self::EmptyCategory => write!(f, "expense category is required"),
            Self::InvalidAmount(raw) => write!(f, "expense amount `{raw}` is not a number"),
            Self::NonFiniteAmount(value) => write!(f, "expense amount {value} is not finite"),
        }
    }
}

impl Error for ExpenseValidationError {}

impl ExpenseValidationError {
    /// Stable machine-readable reason, safe to log.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyDate => "empty_date",
            Self::EmptyCategory => "empty_category",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::NonFiniteAmount(_) => "non_finite_amount",
        }
    }
}

/// Typed expense input awaiting validation and id assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

impl ExpenseDraft {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Checks the append preconditions.
    ///
    /// # Errors
    /// - `EmptyDate` / `EmptyCategory` for blank text fields.
    /// - `NonFiniteAmount` for NaN or infinite amounts.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.date.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDate);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount(self.amount));
        }
        Ok(())
    }

    /// Builds the stored record. Callers must have run [`Self::validate`].
    pub(crate) fn to_record(&self, id: ExpenseId) -> ExpenseRecord {
        let description = self.description.trim();
        ExpenseRecord {
            id,
            date: self.date.clone(),
            category: self.category.clone(),
            description: if description.is_empty() {
                DESCRIPTION_PLACEHOLDER.to_string()
            } else {
                description.to_string()
            },
            amount: self.amount,
        }
    }
}

/// Raw add-expense form fields, all as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseInput {
    /// Coerces form text into a typed draft.
    ///
    /// Only the amount is parsed here; text-field checks happen in
    /// [`ExpenseDraft::validate`]. The whole trimmed amount must be a number:
    /// numeric prefixes such as `12abc` are rejected rather than read as `12`.
    pub fn to_draft(&self) -> Result<ExpenseDraft, ExpenseValidationError> {
        let raw = self.amount.trim();
        let amount = raw
            .parse::<f64>()
            .map_err(|_| ExpenseValidationError::InvalidAmount(raw.to_string()))?;
        Ok(ExpenseDraft {
            date: self.date.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpenseDraft, ExpenseInput, ExpenseValidationError, DESCRIPTION_PLACEHOLDER};

    fn input(amount: &str) -> ExpenseInput {
        ExpenseInput {
            date: "2024-03-05".to_string(),
            category: "Food".to_string(),
            description: String::new(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn blank_text_fields_are_rejected() {
        let draft = ExpenseDraft::new("  ", "Food", "", 1.0);
        assert_eq!(draft.validate(), Err(ExpenseValidationError::EmptyDate));

        let draft = ExpenseDraft::new("2024-01-01", "", "", 1.0);
        assert_eq!(draft.validate(), Err(ExpenseValidationError::EmptyCategory));
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let draft = ExpenseDraft::new("2024-01-01", "Food", "", amount);
            assert!(matches!(
                draft.validate(),
                Err(ExpenseValidationError::NonFiniteAmount(_))
            ));
        }
    }

    #[test]
    fn to_record_fills_placeholder_and_trims_description() {
        let record = ExpenseDraft::new("2024-01-01", "Food", "   ", 3.5).to_record(7);
        assert_eq!(record.id, 7);
        assert_eq!(record.description, DESCRIPTION_PLACEHOLDER);

        let record = ExpenseDraft::new("2024-01-01", "Food", " Lunch ", 3.5).to_record(8);
        assert_eq!(record.description, "Lunch");
    }

    #[test]
    fn amount_text_is_trimmed_and_parsed() {
        let draft = input(" 12.50 ").to_draft().unwrap();
        assert_eq!(draft.amount, 12.5);
    }

    #[test]
    fn non_numeric_amount_text_is_rejected() {
        assert_eq!(
            input("abc").to_draft(),
            Err(ExpenseValidationError::InvalidAmount("abc".to_string()))
        );
        assert!(input("").to_draft().is_err());
        assert_eq!(
            input("12abc").to_draft(),
            Err(ExpenseValidationError::InvalidAmount("12abc".to_string()))
        );
    }

    #[test]
    fn nan_text_parses_but_fails_validation() {
        let draft = input("NaN").to_draft().unwrap();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn record_json_uses_stored_field_names() {
        let record = ExpenseDraft::new("2024-03-20", "Travel", "Taxi", 7.25).to_record(1);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "date": "2024-03-20",
                "category": "Travel",
                "description": "Taxi",
                "amount": 7.25
            })
        );
    }
}
