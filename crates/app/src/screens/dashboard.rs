//! Dashboard summary cards and overview chart.

use bizboard_core::{LedgerView, MoneyFormat};
use rust_decimal::Decimal;
use serde::Serialize;

/// One bar group in the overview chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub revenue: Decimal,
    pub expenses: Decimal,
}

/// Dashboard view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardScreen {
    pub total_revenue: String,
    pub total_expenses: String,
    pub profit: String,
    /// Profit is negative; rendered in the loss color.
    pub profit_is_loss: bool,
    pub chart: Vec<ChartPoint>,
}

impl DashboardScreen {
    /// Build the dashboard from the current ledger.
    #[must_use]
    pub fn build(ledger: &LedgerView<'_>, money: &MoneyFormat) -> Self {
        let revenue = ledger.total_revenue();
        let expenses = ledger.total_expenses();
        let profit = ledger.profit();

        Self {
            total_revenue: money.format(revenue),
            total_expenses: money.format(expenses),
            profit: money.format(profit),
            profit_is_loss: profit < Decimal::ZERO,
            chart: vec![ChartPoint {
                name: "Metrics".to_string(),
                revenue,
                expenses,
            }],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bizboard_core::LedgerStore;
    use chrono::DateTime;

    use super::*;

    fn at(s: &str) -> bizboard_core::Timestamp {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_empty_dashboard() {
        let store = LedgerStore::new();
        let screen = DashboardScreen::build(&store.view(), &MoneyFormat::default());
        assert_eq!(screen.total_revenue, "$0.00");
        assert_eq!(screen.total_expenses, "$0.00");
        assert_eq!(screen.profit, "$0.00");
        assert!(!screen.profit_is_loss);
    }

    #[test]
    fn test_loss_is_flagged() {
        let mut store = LedgerStore::new();
        store
            .add_revenue("Logo Design", Decimal::new(100, 0), at("2024-05-15T09:00:00Z"))
            .unwrap();
        store
            .add_expense(
                "Office Supplies",
                Decimal::new(150, 0),
                "Office Expenses",
                at("2024-06-05T09:00:00Z"),
            )
            .unwrap();

        let screen = DashboardScreen::build(&store.view(), &MoneyFormat::default());
        assert_eq!(screen.total_revenue, "$100.00");
        assert_eq!(screen.total_expenses, "$150.00");
        assert_eq!(screen.profit, "-$50.00");
        assert!(screen.profit_is_loss);
        assert_eq!(
            screen.chart,
            vec![ChartPoint {
                name: "Metrics".to_string(),
                revenue: Decimal::new(100, 0),
                expenses: Decimal::new(150, 0),
            }]
        );
    }
}
