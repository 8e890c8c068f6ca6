//! The ledger store: single owner of the revenue, expense, and appointment
//! collections and the only path by which they change.

use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::events::{LedgerEvent, LedgerSubscriber, SubscriberRegistry};
use super::records::{Appointment, ExpenseEntry, RevenueEntry};
use super::view::LedgerView;
use crate::types::{
    Amount, AppointmentId, ExpenseId, Field, IdSequence, RequiredText, RevenueId, SubscriptionId,
    Timestamp, ValidationError,
};

/// In-memory, append-only ledger.
///
/// Every `add_*` operation validates all fields before touching any state,
/// assigns a fresh identifier, appends the record, and notifies subscribers,
/// all before returning. A rejected write leaves the store unchanged and
/// publishes nothing.
///
/// The store is owned by one caller and mutated through `&mut self`, which
/// makes the mutation path the single serialization point. Consumers that
/// share it across threads must wrap it in a lock.
#[derive(Default)]
pub struct LedgerStore {
    revenue: Vec<RevenueEntry>,
    expenses: Vec<ExpenseEntry>,
    appointments: Vec<Appointment>,
    revenue_ids: IdSequence,
    expense_ids: IdSequence,
    appointment_ids: IdSequence,
    subscribers: SubscriberRegistry,
}

impl fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerStore")
            .field("revenue", &self.revenue.len())
            .field("expenses", &self.expenses.len())
            .field("appointments", &self.appointments.len())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl LedgerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Record money received.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the description is blank or the amount
    /// is not positive. The store is not modified in that case.
    pub fn add_revenue(
        &mut self,
        description: &str,
        amount: Decimal,
        date: Timestamp,
    ) -> Result<RevenueEntry, ValidationError> {
        let description = RequiredText::parse(Field::Description, description)?;
        let amount = Amount::new(Field::Amount, amount)?;

        let id = RevenueId::new(self.revenue_ids.issue());
        let entry = RevenueEntry::new(id, description, amount, date);
        self.revenue.push(entry.clone());

        info!(%id, amount = %amount, "revenue recorded");
        self.publish(LedgerEvent::RevenueAdded(entry.clone()));
        Ok(entry)
    }

    /// Record money spent.
    ///
    /// The category is opaque text supplied by the caller; it is only
    /// required to be non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the description or category is blank or
    /// the amount is not positive. The store is not modified in that case.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Decimal,
        category: &str,
        date: Timestamp,
    ) -> Result<ExpenseEntry, ValidationError> {
        let description = RequiredText::parse(Field::Description, description)?;
        let amount = Amount::new(Field::Amount, amount)?;
        let category = RequiredText::parse(Field::Category, category)?;

        let id = ExpenseId::new(self.expense_ids.issue());
        let entry = ExpenseEntry::new(id, description, amount, category, date);
        self.expenses.push(entry.clone());

        info!(%id, amount = %amount, category = entry.category(), "expense recorded");
        self.publish(LedgerEvent::ExpenseAdded(entry.clone()));
        Ok(entry)
    }

    /// Schedule an appointment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] if the title is blank.
    pub fn add_appointment(
        &mut self,
        title: &str,
        date: Timestamp,
    ) -> Result<Appointment, ValidationError> {
        let title = RequiredText::parse(Field::Title, title)?;

        let id = AppointmentId::new(self.appointment_ids.issue());
        let appointment = Appointment::new(id, title, date);
        self.appointments.push(appointment.clone());

        info!(%id, date = %date, "appointment scheduled");
        self.publish(LedgerEvent::AppointmentAdded(appointment.clone()));
        Ok(appointment)
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a subscriber that is notified after every successful mutation.
    pub fn subscribe(&mut self, subscriber: impl LedgerSubscriber + 'static) -> SubscriptionId {
        let id = self.subscribers.subscribe(Box::new(subscriber));
        debug!(subscription = %id, "subscriber registered");
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.unsubscribe(id);
        debug!(subscription = %id, removed, "subscriber removed");
        removed
    }

    fn publish(&mut self, event: LedgerEvent) {
        let view = LedgerView::new(&self.revenue, &self.expenses, &self.appointments);
        self.subscribers.publish(&event, &view);
    }

    // -------------------------------------------------------------------------
    // Reads and aggregates
    // -------------------------------------------------------------------------

    /// Borrow a read-only view of all collections.
    #[must_use]
    pub fn view(&self) -> LedgerView<'_> {
        LedgerView::new(&self.revenue, &self.expenses, &self.appointments)
    }

    /// Revenue entries in insertion order.
    #[must_use]
    pub fn revenue(&self) -> &[RevenueEntry] {
        &self.revenue
    }

    /// Expense entries in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    /// Appointments in insertion order.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// See [`LedgerView::total_revenue`].
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.view().total_revenue()
    }

    /// See [`LedgerView::total_expenses`].
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        self.view().total_expenses()
    }

    /// See [`LedgerView::profit`].
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.view().profit()
    }

    /// See [`LedgerView::appointments_on`].
    #[must_use]
    pub fn appointments_on(&self, day: NaiveDate) -> Vec<&Appointment> {
        self.view().appointments_on(day)
    }

    /// See [`LedgerView::appointment_days`].
    #[must_use]
    pub fn appointment_days(&self) -> BTreeSet<NaiveDate> {
        self.view().appointment_days()
    }

    /// See [`LedgerView::expenses_by_category`].
    #[must_use]
    pub fn expenses_by_category(&self) -> BTreeMap<&str, Decimal> {
        self.view().expenses_by_category()
    }

    // -------------------------------------------------------------------------
    // Seeding
    // -------------------------------------------------------------------------

    /// Append a record with a fixed id. Only used for sample data, before any
    /// subscriber exists.
    pub(crate) fn seed_revenue(&mut self, entry: RevenueEntry) {
        self.revenue_ids.observe(entry.id().as_u64());
        self.revenue.push(entry);
    }

    pub(crate) fn seed_expense(&mut self, entry: ExpenseEntry) {
        self.expense_ids.observe(entry.id().as_u64());
        self.expenses.push(entry);
    }

    pub(crate) fn seed_appointment(&mut self, appointment: Appointment) {
        self.appointment_ids.observe(appointment.id().as_u64());
        self.appointments.push(appointment);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::DateTime;

    use super::*;

    fn ts(s: &str) -> Timestamp {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon() -> Timestamp {
        ts("2024-05-10T12:00:00Z")
    }

    #[test]
    fn test_add_revenue_appends_and_assigns_id() {
        let mut store = LedgerStore::new();
        let entry = store
            .add_revenue("Logo Design", Decimal::new(800, 0), noon())
            .unwrap();

        assert_eq!(store.revenue().len(), 1);
        assert_eq!(entry.id(), RevenueId::new(1));
        assert_eq!(entry.description(), "Logo Design");
        assert_eq!(store.revenue().first(), Some(&entry));
    }

    #[test]
    fn test_ids_are_unique_for_same_instant() {
        let mut store = LedgerStore::new();
        let a = store.add_revenue("A", Decimal::ONE, noon()).unwrap();
        let b = store.add_revenue("B", Decimal::ONE, noon()).unwrap();
        let c = store.add_revenue("C", Decimal::ONE, noon()).unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), c.id());
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let mut store = LedgerStore::new();
        for amount in [Decimal::ZERO, Decimal::new(-1, 2), Decimal::new(-100, 0)] {
            let err = store.add_revenue("Refund", amount, noon()).unwrap_err();
            assert!(matches!(err, ValidationError::NonPositiveAmount { .. }));
            let err = store
                .add_expense("Refund", amount, "Misc", noon())
                .unwrap_err();
            assert!(matches!(err, ValidationError::NonPositiveAmount { .. }));
        }
        assert!(store.revenue().is_empty());
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_oversized_amounts_never_reach_the_totals() {
        let mut store = LedgerStore::new();
        for _ in 0..2 {
            let err = store.add_revenue("Big", Decimal::MAX, noon()).unwrap_err();
            assert!(matches!(err, ValidationError::AmountTooLarge { .. }));
            let err = store
                .add_expense("Big", Decimal::MAX, "Misc", noon())
                .unwrap_err();
            assert!(matches!(err, ValidationError::AmountTooLarge { .. }));
        }
        assert!(store.revenue().is_empty());
        assert!(store.expenses().is_empty());

        store.add_revenue("Max", Amount::MAX, noon()).unwrap();
        store.add_revenue("Max again", Amount::MAX, noon()).unwrap();
        store.add_expense("Max", Amount::MAX, "Misc", noon()).unwrap();
        store.add_expense("Max again", Amount::MAX, "Misc", noon()).unwrap();

        let doubled = Amount::MAX * Decimal::TWO;
        assert_eq!(store.total_revenue(), doubled);
        assert_eq!(store.total_expenses(), doubled);
        assert_eq!(store.profit(), Decimal::ZERO);
        assert_eq!(store.expenses_by_category().get("Misc"), Some(&doubled));
    }

    #[test]
    fn test_rejects_blank_text() {
        let mut store = LedgerStore::new();
        assert_eq!(
            store.add_revenue("  ", Decimal::ONE, noon()).unwrap_err(),
            ValidationError::Required {
                field: Field::Description
            }
        );
        assert_eq!(
            store
                .add_expense("Taxi", Decimal::ONE, "", noon())
                .unwrap_err(),
            ValidationError::Required {
                field: Field::Category
            }
        );
        assert_eq!(
            store.add_appointment("", noon()).unwrap_err(),
            ValidationError::Required {
                field: Field::Title
            }
        );
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn test_failed_write_does_not_consume_id() {
        let mut store = LedgerStore::new();
        store.add_expense("", Decimal::ONE, "Misc", noon()).unwrap_err();
        let entry = store
            .add_expense("Taxi", Decimal::ONE, "Travel", noon())
            .unwrap();
        assert_eq!(entry.id(), ExpenseId::new(1));
    }

    #[test]
    fn test_totals() {
        let mut store = LedgerStore::new();
        assert_eq!(store.total_revenue(), Decimal::ZERO);
        assert_eq!(store.total_expenses(), Decimal::ZERO);

        for amount in [2500, 800, 1200] {
            store
                .add_revenue("Work", Decimal::new(amount, 0), noon())
                .unwrap();
        }
        assert_eq!(store.total_revenue(), Decimal::new(4500, 0));
    }

    #[test]
    fn test_profit_can_be_negative() {
        let mut store = LedgerStore::new();
        store
            .add_revenue("Sale", Decimal::new(100, 0), noon())
            .unwrap();
        store
            .add_expense("Rent", Decimal::new(150, 0), "Office", noon())
            .unwrap();
        assert_eq!(store.profit(), Decimal::new(-50, 0));
        assert_eq!(store.profit(), store.total_revenue() - store.total_expenses());
    }

    #[test]
    fn test_appointments_on_calendar_day() {
        let mut store = LedgerStore::new();
        let late = store
            .add_appointment("Late call", ts("2024-05-10T23:00:00-04:00"))
            .unwrap();
        store
            .add_appointment("Next morning", ts("2024-05-11T08:00:00-04:00"))
            .unwrap();

        let on_10th = store.appointments_on(day(2024, 5, 10));
        assert_eq!(on_10th, vec![&late]);

        let on_11th = store.appointments_on(day(2024, 5, 11));
        assert_eq!(on_11th.len(), 1);
        assert!(on_11th.iter().all(|a| a.id() != late.id()));
    }

    #[test]
    fn test_reads_are_stable_without_mutation() {
        let mut store = LedgerStore::new();
        store
            .add_revenue("Sale", Decimal::new(100, 0), noon())
            .unwrap();
        store.add_appointment("Call", noon()).unwrap();

        let first = (store.total_revenue(), store.appointments_on(day(2024, 5, 10)).len());
        for _ in 0..5 {
            assert_eq!(
                (store.total_revenue(), store.appointments_on(day(2024, 5, 10)).len()),
                first
            );
        }
    }

    #[test]
    fn test_appointment_days_and_category_totals() {
        let mut store = LedgerStore::new();
        store.add_appointment("A", ts("2024-05-10T09:00:00Z")).unwrap();
        store.add_appointment("B", ts("2024-05-10T15:00:00Z")).unwrap();
        store.add_appointment("C", ts("2024-05-02T09:00:00Z")).unwrap();
        let days: Vec<_> = store.appointment_days().into_iter().collect();
        assert_eq!(days, vec![day(2024, 5, 2), day(2024, 5, 10)]);

        store
            .add_expense("Taxi", Decimal::new(20, 0), "Travel", noon())
            .unwrap();
        store
            .add_expense("Train", Decimal::new(35, 0), "Travel", noon())
            .unwrap();
        store
            .add_expense("Paper", Decimal::new(5, 0), "Office", noon())
            .unwrap();
        let totals = store.expenses_by_category();
        assert_eq!(totals.get("Travel"), Some(&Decimal::new(55, 0)));
        assert_eq!(totals.get("Office"), Some(&Decimal::new(5, 0)));
    }

    #[test]
    fn test_subscribers_observe_new_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = LedgerStore::new();
        let sink = Arc::clone(&seen);
        store.subscribe(move |event: &LedgerEvent, ledger: &LedgerView<'_>| {
            sink.lock()
                .unwrap()
                .push((event.kind(), ledger.revenue().len(), ledger.total_revenue()));
        });

        store
            .add_revenue("Sale", Decimal::new(100, 0), noon())
            .unwrap();
        store.add_revenue("", Decimal::ONE, noon()).unwrap_err();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![("revenue_added", 1, Decimal::new(100, 0))]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Arc::new(Mutex::new(0_u32));
        let mut store = LedgerStore::new();
        let counter = Arc::clone(&count);
        let id = store.subscribe(move |_: &LedgerEvent, _: &LedgerView<'_>| {
            *counter.lock().unwrap() += 1;
        });

        store.add_appointment("One", noon()).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_appointment("Two", noon()).unwrap();

        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_subscribers_run_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut store = LedgerStore::new();
        for tag in ["first", "second"] {
            let order = Arc::clone(&order);
            store.subscribe(move |_: &LedgerEvent, _: &LedgerView<'_>| {
                order.lock().unwrap().push(tag);
            });
        }
        store.add_appointment("Call", noon()).unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_store_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<LedgerStore>();
    }

    #[test]
    fn test_debug_reports_counts() {
        let mut store = LedgerStore::new();
        store.add_appointment("Call", noon()).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("appointments: 1"));
    }
}
