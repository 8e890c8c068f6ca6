//! Change notification for ledger consumers.
//!
//! Every successful mutation publishes exactly one [`LedgerEvent`]. Delivery
//! is synchronous: subscribers run, in subscription order, after the record
//! has been appended and before the mutating call returns.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::records::{Appointment, ExpenseEntry, RevenueEntry};
use super::view::LedgerView;
use crate::types::{IdSequence, SubscriptionId};

/// Events emitted by the ledger store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "record", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A revenue entry was appended.
    RevenueAdded(RevenueEntry),
    /// An expense entry was appended.
    ExpenseAdded(ExpenseEntry),
    /// An appointment was appended.
    AppointmentAdded(Appointment),
}

impl LedgerEvent {
    /// Short name of the event, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RevenueAdded(_) => "revenue_added",
            Self::ExpenseAdded(_) => "expense_added",
            Self::AppointmentAdded(_) => "appointment_added",
        }
    }
}

/// A consumer that reacts to ledger changes.
///
/// The view passed alongside the event already contains the new record.
/// Closures of the form `FnMut(&LedgerEvent, &LedgerView<'_>) + Send` are
/// subscribers.
pub trait LedgerSubscriber: Send {
    /// Handle one ledger event.
    fn on_event(&mut self, event: &LedgerEvent, ledger: &LedgerView<'_>);
}

impl<F> LedgerSubscriber for F
where
    F: FnMut(&LedgerEvent, &LedgerView<'_>) + Send,
{
    fn on_event(&mut self, event: &LedgerEvent, ledger: &LedgerView<'_>) {
        self(event, ledger);
    }
}

/// Callback registry owned by the store.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    ids: IdSequence,
    entries: Vec<(SubscriptionId, Box<dyn LedgerSubscriber>)>,
}

impl SubscriberRegistry {
    pub(crate) fn subscribe(&mut self, subscriber: Box<dyn LedgerSubscriber>) -> SubscriptionId {
        let id = SubscriptionId::new(self.ids.issue());
        self.entries.push((id, subscriber));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn publish(&mut self, event: &LedgerEvent, ledger: &LedgerView<'_>) {
        for (id, subscriber) in &mut self.entries {
            trace!(subscription = %id, event = event.kind(), "notifying subscriber");
            subscriber.on_event(event, ledger);
        }
    }
}
