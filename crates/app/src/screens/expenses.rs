//! Expense table with per-category totals.

use bizboard_core::{ExpenseEntry, ExpenseId, LedgerView, MoneyFormat};
use serde::Serialize;

use super::format::long_date;

const EMPTY_EXPENSES: &str = "No expenses yet.";

/// One row of the expense table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub description: String,
    pub category: String,
    pub date: String,
    pub amount: String,
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: String,
}

/// Expenses view model, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpensesScreen {
    pub rows: Vec<ExpenseRow>,
    /// Category totals, sorted by category name.
    pub by_category: Vec<CategoryTotal>,
    /// Shown in place of the table when there are no rows.
    pub placeholder: Option<&'static str>,
}

impl ExpensesScreen {
    /// Build the expense table, sorted by date descending.
    #[must_use]
    pub fn build(ledger: &LedgerView<'_>, money: &MoneyFormat) -> Self {
        let mut entries: Vec<&ExpenseEntry> = ledger.expenses().iter().collect();
        entries.sort_by(|a, b| b.date().cmp(&a.date()).then_with(|| b.id().cmp(&a.id())));

        let rows: Vec<ExpenseRow> = entries
            .into_iter()
            .map(|entry| ExpenseRow {
                id: entry.id(),
                description: entry.description().to_string(),
                category: entry.category().to_string(),
                date: long_date(entry.date().date_naive()),
                amount: money.format(entry.amount().value()),
            })
            .collect();

        let by_category = ledger
            .expenses_by_category()
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total: money.format(total),
            })
            .collect();

        Self {
            placeholder: rows.is_empty().then_some(EMPTY_EXPENSES),
            rows,
            by_category,
        }
    }
}
