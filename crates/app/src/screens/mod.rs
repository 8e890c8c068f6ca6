//! Screen view models.
//!
//! Each screen is a plain struct derived from a [`LedgerView`] and a
//! [`MoneyFormat`]. Screens hold only display-ready values and never keep a
//! reference to the ledger, so a rebuilt screen can be sent across threads
//! through a [`ScreenFeed`].
//!
//! [`LedgerView`]: bizboard_core::LedgerView
//! [`MoneyFormat`]: bizboard_core::MoneyFormat

mod calendar;
mod dashboard;
mod expenses;
mod feed;
mod format;
mod revenue;

pub use calendar::{AppointmentRow, CalendarScreen};
pub use dashboard::{ChartPoint, DashboardScreen};
pub use expenses::{CategoryTotal, ExpenseRow, ExpensesScreen};
pub use feed::ScreenFeed;
pub use format::{heading_date, long_date};
pub use revenue::{RevenueRow, RevenueScreen};
