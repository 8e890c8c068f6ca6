//! Fixed sample records seeded at session start.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::records::{Appointment, ExpenseEntry, RevenueEntry};
use super::store::LedgerStore;
use crate::types::{
    Amount, AppointmentId, ExpenseId, Field, RequiredText, RevenueId, Timestamp, ValidationError,
    start_of_day,
};

/// (description, amount in cents, year, month, day)
const SAMPLE_REVENUE: &[(&str, i64, i32, u32, u32)] = &[
    ("Website Development Project", 250_000, 2024, 5, 10),
    ("Logo Design", 80_000, 2024, 5, 15),
    ("Consulting Services", 120_000, 2024, 6, 2),
];

/// (description, amount in cents, category, year, month, day)
const SAMPLE_EXPENSES: &[(&str, i64, &str, i32, u32, u32)] = &[
    ("Software Subscription", 4_999, "Software", 2024, 5, 1),
    ("Lunch with client", 7_550, "Business Development", 2024, 5, 20),
    ("Office Supplies", 12_000, "Office Expenses", 2024, 6, 5),
];

impl LedgerStore {
    /// Create a store seeded with the sample session data.
    ///
    /// Revenue and expense samples are dated midnight in `now`'s offset on
    /// fixed days in 2024. The two sample appointments are at `now` and two
    /// days later. Seeded ids are 1, 2, 3 in each collection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] only if the sample table itself is invalid.
    pub fn with_sample_data(now: Timestamp) -> Result<Self, ValidationError> {
        let mut store = Self::new();
        let offset = *now.offset();

        for (seq, &(description, cents, y, m, d)) in (1_u64..).zip(SAMPLE_REVENUE) {
            store.seed_revenue(RevenueEntry::new(
                RevenueId::new(seq),
                RequiredText::parse(Field::Description, description)?,
                Amount::new(Field::Amount, Decimal::new(cents, 2))?,
                start_of_day(sample_day(y, m, d)?, offset),
            ));
        }

        for (seq, &(description, cents, category, y, m, d)) in (1_u64..).zip(SAMPLE_EXPENSES) {
            store.seed_expense(ExpenseEntry::new(
                ExpenseId::new(seq),
                RequiredText::parse(Field::Description, description)?,
                Amount::new(Field::Amount, Decimal::new(cents, 2))?,
                RequiredText::parse(Field::Category, category)?,
                start_of_day(sample_day(y, m, d)?, offset),
            ));
        }

        let kickoff = now.checked_add_days(Days::new(2)).unwrap_or(now);
        let appointments = [("Meeting with John Doe", now), ("Project Kickoff", kickoff)];
        for (seq, (title, date)) in (1_u64..).zip(appointments) {
            store.seed_appointment(Appointment::new(
                AppointmentId::new(seq),
                RequiredText::parse(Field::Title, title)?,
                date,
            ));
        }

        Ok(store)
    }
}

fn sample_day(y: i32, m: u32, d: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| ValidationError::MalformedDate {
        field: Field::Date,
        input: format!("{y:04}-{m:02}-{d:02}"),
    })
}
