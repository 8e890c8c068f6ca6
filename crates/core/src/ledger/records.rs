//! Ledger records.
//!
//! Records are immutable once created: fields are private and only exposed
//! through accessors, and the only constructors are the store's `add_*`
//! operations (plus deserialization).

use serde::{Deserialize, Serialize};

use crate::types::{Amount, AppointmentId, ExpenseId, RequiredText, RevenueId, Timestamp};

/// Money received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEntry {
    id: RevenueId,
    description: RequiredText,
    amount: Amount,
    date: Timestamp,
}

impl RevenueEntry {
    pub(crate) const fn new(
        id: RevenueId,
        description: RequiredText,
        amount: Amount,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            date,
        }
    }

    #[must_use]
    pub const fn id(&self) -> RevenueId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    #[must_use]
    pub const fn date(&self) -> Timestamp {
        self.date
    }
}

/// Money spent, tagged with a free-form category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    id: ExpenseId,
    description: RequiredText,
    amount: Amount,
    category: RequiredText,
    date: Timestamp,
}

impl ExpenseEntry {
    pub(crate) const fn new(
        id: ExpenseId,
        description: RequiredText,
        amount: Amount,
        category: RequiredText,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            category,
            date,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ExpenseId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Category label. Opaque text; never checked against a fixed set.
    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    #[must_use]
    pub const fn date(&self) -> Timestamp {
        self.date
    }
}

/// A calendar appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    title: RequiredText,
    date: Timestamp,
}

impl Appointment {
    pub(crate) const fn new(id: AppointmentId, title: RequiredText, date: Timestamp) -> Self {
        Self { id, title, date }
    }

    #[must_use]
    pub const fn id(&self) -> AppointmentId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub const fn date(&self) -> Timestamp {
        self.date
    }
}
