//! The ledger store and its records, events, and derived views.

mod events;
mod records;
mod sample;
mod store;
mod view;

pub use events::{LedgerEvent, LedgerSubscriber};
pub use records::{Appointment, ExpenseEntry, RevenueEntry};
pub use store::LedgerStore;
pub use view::LedgerView;
