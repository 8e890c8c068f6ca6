//! Validation errors for record fields.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated input field on a revenue, expense, or appointment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Description,
    Amount,
    Category,
    Title,
    Date,
}

impl Field {
    /// Lowercase field name, as used in log fields and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Title => "title",
            Self::Date => "date",
        }
    }

    /// Capitalized label for inline form messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Title => "Title",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when a record fails its field constraints.
///
/// A `ValidationError` is always raised before the ledger is mutated, so the
/// store is unchanged whenever one is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    #[error("{field} is required")]
    Required {
        /// The offending field.
        field: Field,
    },
    /// An amount is zero or negative.
    #[error("{field} must be positive (got {amount})")]
    NonPositiveAmount {
        /// The offending field.
        field: Field,
        /// The rejected value.
        amount: Decimal,
    },
    /// Typed input is positive but below one cent.
    #[error("{field} must be at least 0.01 (got {amount})")]
    BelowMinimum {
        /// The offending field.
        field: Field,
        /// The rejected value.
        amount: Decimal,
    },
    /// An amount exceeds the per-record maximum.
    #[error("{field} is too large (got {amount})")]
    AmountTooLarge {
        /// The offending field.
        field: Field,
        /// The rejected value.
        amount: Decimal,
    },
    /// An amount could not be parsed as a decimal number.
    #[error("{field} is not a number: {input:?}")]
    MalformedAmount {
        /// The offending field.
        field: Field,
        /// The raw input.
        input: String,
    },
    /// A date could not be parsed.
    #[error("{field} is not a valid date: {input:?}")]
    MalformedDate {
        /// The offending field.
        field: Field,
        /// The raw input.
        input: String,
    },
}

impl ValidationError {
    /// The field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Required { field }
            | Self::NonPositiveAmount { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AmountTooLarge { field, .. }
            | Self::MalformedAmount { field, .. }
            | Self::MalformedDate { field, .. } => *field,
        }
    }

    /// Short message suitable for display next to the form field.
    #[must_use]
    pub fn field_message(&self) -> String {
        match self {
            Self::Required { field } => format!("{} is required", field.label()),
            Self::NonPositiveAmount { field, .. } | Self::BelowMinimum { field, .. } => {
                format!("{} must be positive", field.label())
            }
            Self::AmountTooLarge { field, .. } => format!("{} is too large", field.label()),
            Self::MalformedAmount { field, .. } => format!("{} must be a number", field.label()),
            Self::MalformedDate { field, .. } => format!("{} must be a valid date", field.label()),
        }
    }
}
