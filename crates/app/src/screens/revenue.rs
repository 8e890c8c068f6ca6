//! Revenue table.

use bizboard_core::{LedgerView, MoneyFormat, RevenueEntry, RevenueId};
use serde::Serialize;

use super::format::long_date;

const EMPTY_REVENUE: &str = "No revenue entries yet.";

/// One row of the revenue table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueRow {
    pub id: RevenueId,
    pub description: String,
    pub date: String,
    pub amount: String,
}

/// Revenue view model, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueScreen {
    pub rows: Vec<RevenueRow>,
    /// Shown in place of the table when there are no rows.
    pub placeholder: Option<&'static str>,
}

impl RevenueScreen {
    /// Build the revenue table, sorted by date descending.
    #[must_use]
    pub fn build(ledger: &LedgerView<'_>, money: &MoneyFormat) -> Self {
        let mut entries: Vec<&RevenueEntry> = ledger.revenue().iter().collect();
        entries.sort_by(|a, b| b.date().cmp(&a.date()).then_with(|| b.id().cmp(&a.id())));

        let rows: Vec<RevenueRow> = entries
            .into_iter()
            .map(|entry| RevenueRow {
                id: entry.id(),
                description: entry.description().to_string(),
                date: long_date(entry.date().date_naive()),
                amount: money.format(entry.amount().value()),
            })
            .collect();

        Self {
            placeholder: rows.is_empty().then_some(EMPTY_REVENUE),
            rows,
        }
    }
}
