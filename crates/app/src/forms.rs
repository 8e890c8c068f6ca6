//! View-local form state for the add dialogs.
//!
//! Forms hold the raw text the user typed plus a few ephemeral flags. They
//! are never shared and never stored in the ledger; only a successful
//! `submit` reaches the [`LedgerStore`].

use bizboard_core::{
    Amount, Field, LedgerStore, RequiredText, Timestamp, ValidationError, start_of_day,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::categorize::{CategorySuggestion, Categorizer, Classifier};

/// Visual weight of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Destructive,
}

/// Transient, non-blocking message shown after a form action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            description: description.into(),
        }
    }

    fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Revenue
// =============================================================================

/// "Add Revenue" dialog.
#[derive(Debug, Clone, Default)]
pub struct RevenueForm {
    pub description: String,
    pub amount: String,
    pub dialog_open: bool,
}

impl RevenueForm {
    /// Validate and record the entry, dated `now`.
    ///
    /// On success the form is reset and the dialog closed. On failure the
    /// inputs are left as they were.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in field order.
    pub fn submit(
        &mut self,
        store: &mut LedgerStore,
        now: Timestamp,
    ) -> Result<Notice, ValidationError> {
        RequiredText::parse(Field::Description, &self.description)?;
        let amount = Amount::parse(Field::Amount, &self.amount)?;

        let entry = store.add_revenue(&self.description, amount.value(), now)?;
        *self = Self::default();

        Ok(Notice::info(
            "Revenue Added",
            format!("Successfully added \"{}\".", entry.description()),
        ))
    }
}

// =============================================================================
// Expenses
// =============================================================================

/// "Add Expense" dialog with category suggestion.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: String,
    /// A category suggestion is in flight.
    pub categorizing: bool,
    pub dialog_open: bool,
}

impl ExpenseForm {
    /// Ask `categorizer` for a category and write it into the category field.
    ///
    /// Never touches the ledger. A blank description is rejected with a
    /// notice before any classifier call.
    pub async fn suggest_category<C: Classifier>(&mut self, categorizer: &Categorizer<C>) -> Notice {
        if self.description.trim().is_empty() {
            return no_description();
        }

        self.categorizing = true;
        let suggestion = categorizer.suggest(&self.description).await;
        self.categorizing = false;

        match suggestion {
            CategorySuggestion::Skipped => no_description(),
            CategorySuggestion::Suggested(category) => {
                debug!(category = %category, "category filled in");
                self.category = category;
                Notice::info(
                    "Category Suggested",
                    "We've suggested a category for your expense.",
                )
            }
            CategorySuggestion::Fallback { category, .. } => {
                self.category = category;
                Notice::destructive("Categorization Failed", "Could not categorize the expense.")
            }
        }
    }

    /// Validate and record the expense, dated `now`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in field order.
    pub fn submit(
        &mut self,
        store: &mut LedgerStore,
        now: Timestamp,
    ) -> Result<Notice, ValidationError> {
        RequiredText::parse(Field::Description, &self.description)?;
        let amount = Amount::parse(Field::Amount, &self.amount)?;

        let entry = store.add_expense(&self.description, amount.value(), &self.category, now)?;
        *self = Self::default();

        Ok(Notice::info(
            "Expense Added",
            format!("Successfully added \"{}\".", entry.description()),
        ))
    }
}

fn no_description() -> Notice {
    Notice::destructive("No description", "Please enter a description to categorize.")
}

// =============================================================================
// Appointments
// =============================================================================

/// "Add Appointment" dialog, scheduled on the calendar's selected day.
#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    pub title: String,
    /// Optional `HH:MM` start time; blank means the start of the day.
    pub time: String,
    pub selected: Option<NaiveDate>,
    pub dialog_open: bool,
}

impl AppointmentForm {
    /// A form with `day` selected on the calendar.
    #[must_use]
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            selected: Some(day),
            ..Self::default()
        }
    }

    /// Validate and schedule the appointment in `now`'s UTC offset.
    ///
    /// The selected day survives a successful submit; the title and time
    /// are cleared and the dialog closes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] for a blank title or when no day
    /// is selected, and [`ValidationError::MalformedDate`] for a bad time.
    pub fn submit(
        &mut self,
        store: &mut LedgerStore,
        now: Timestamp,
    ) -> Result<Notice, ValidationError> {
        RequiredText::parse(Field::Title, &self.title)?;
        let day = self
            .selected
            .ok_or(ValidationError::Required { field: Field::Date })?;
        let date = self.scheduled_at(day, now)?;

        let appointment = store.add_appointment(&self.title, date)?;
        self.title.clear();
        self.time.clear();
        self.dialog_open = false;

        Ok(Notice::info(
            "Appointment Added",
            format!("Successfully scheduled \"{}\".", appointment.title()),
        ))
    }

    fn scheduled_at(&self, day: NaiveDate, now: Timestamp) -> Result<Timestamp, ValidationError> {
        let offset = *now.offset();
        let time = self.time.trim();
        if time.is_empty() {
            return Ok(start_of_day(day, offset));
        }

        let malformed = || ValidationError::MalformedDate {
            field: Field::Date,
            input: self.time.clone(),
        };
        let time = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| malformed())?;
        day.and_time(time)
            .and_local_timezone(offset)
            .single()
            .ok_or_else(malformed)
    }
}
