//! Read-only view over the ledger collections and the aggregates derived
//! from them.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use super::records::{Appointment, ExpenseEntry, RevenueEntry};

/// Borrowed snapshot of the three collections.
///
/// Collections are in insertion order. Display order is a consumer concern.
/// Every method is a pure function of the borrowed collections, so repeated
/// calls without an intervening mutation return the same result.
#[derive(Debug, Clone, Copy)]
pub struct LedgerView<'a> {
    revenue: &'a [RevenueEntry],
    expenses: &'a [ExpenseEntry],
    appointments: &'a [Appointment],
}

impl<'a> LedgerView<'a> {
    pub(crate) const fn new(
        revenue: &'a [RevenueEntry],
        expenses: &'a [ExpenseEntry],
        appointments: &'a [Appointment],
    ) -> Self {
        Self {
            revenue,
            expenses,
            appointments,
        }
    }

    #[must_use]
    pub const fn revenue(&self) -> &'a [RevenueEntry] {
        self.revenue
    }

    #[must_use]
    pub const fn expenses(&self) -> &'a [ExpenseEntry] {
        self.expenses
    }

    #[must_use]
    pub const fn appointments(&self) -> &'a [Appointment] {
        self.appointments
    }

    /// Sum of all revenue amounts; zero when there is none.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        sum_amounts(self.revenue.iter().map(|r| r.amount().value()))
    }

    /// Sum of all expense amounts; zero when there is none.
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        sum_amounts(self.expenses.iter().map(|e| e.amount().value()))
    }

    /// Revenue minus expenses. Negative when expenses exceed revenue.
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.total_revenue().saturating_sub(self.total_expenses())
    }

    /// Appointments whose local calendar date is `day`, in insertion order.
    ///
    /// Time of day is ignored; the comparison uses each appointment's own
    /// wall-clock date.
    #[must_use]
    pub fn appointments_on(&self, day: NaiveDate) -> Vec<&'a Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date().date_naive() == day)
            .collect()
    }

    /// Days that have at least one appointment, ascending.
    #[must_use]
    pub fn appointment_days(&self) -> BTreeSet<NaiveDate> {
        self.appointments
            .iter()
            .map(|a| a.date().date_naive())
            .collect()
    }

    /// Expense totals per category, ordered by category.
    #[must_use]
    pub fn expenses_by_category(&self) -> BTreeMap<&'a str, Decimal> {
        let mut totals = BTreeMap::new();
        for expense in self.expenses {
            let total = totals.entry(expense.category()).or_insert(Decimal::ZERO);
            *total = add_amount(*total, expense.amount().value());
        }
        totals
    }
}

/// Totals saturate at [`Decimal::MAX`] instead of panicking on overflow.
fn sum_amounts(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, add_amount)
}

fn add_amount(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!(%total, %amount, "ledger total overflowed, saturating");
        Decimal::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_saturates_instead_of_panicking() {
        let total = sum_amounts([Decimal::MAX, Decimal::MAX, Decimal::ONE].into_iter());
        assert_eq!(total, Decimal::MAX);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        assert_eq!(sum_amounts(core::iter::empty()), Decimal::ZERO);
    }
}
