//! Text and JSON rendering of screens and notices.
//!
//! All command output goes to the writer handed to [`Output`] (stdout in
//! the binary); logs go to stderr.

use std::io::Write;

use bizboard_app::CategorySuggestion;
use bizboard_app::forms::{Notice, NoticeKind};
use bizboard_app::screens::{CalendarScreen, DashboardScreen, ExpensesScreen, RevenueScreen};
use serde::Serialize;
use serde_json::json;

use crate::error::CliError;

/// Command output sink.
pub struct Output<W> {
    out: W,
    json: bool,
}

impl<W: Write> Output<W> {
    pub const fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn flush(&mut self) -> Result<(), CliError> {
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn dashboard(&mut self, screen: &DashboardScreen) -> Result<(), CliError> {
        if self.json {
            return self.json(screen);
        }
        let profit_note = if screen.profit_is_loss {
            "Total revenue minus expenses (loss)"
        } else {
            "Total revenue minus expenses"
        };
        self.table(
            &["", "", ""],
            &[
                row(["Total Revenue", &screen.total_revenue, "All-time revenue"]),
                row(["Total Expenses", &screen.total_expenses, "All-time expenses"]),
                row(["Profit", &screen.profit, profit_note]),
            ],
            None,
        )
    }

    pub fn revenue(&mut self, screen: &RevenueScreen) -> Result<(), CliError> {
        if self.json {
            return self.json(screen);
        }
        if let Some(placeholder) = screen.placeholder {
            return self.line(placeholder);
        }
        let rows: Vec<Vec<String>> = screen
            .rows
            .iter()
            .map(|r| row([&r.description, &r.date, &r.amount]))
            .collect();
        self.table(&["Description", "Date", "Amount"], &rows, Some(2))
    }

    pub fn expenses(&mut self, screen: &ExpensesScreen) -> Result<(), CliError> {
        if self.json {
            return self.json(screen);
        }
        if let Some(placeholder) = screen.placeholder {
            return self.line(placeholder);
        }
        let rows: Vec<Vec<String>> = screen
            .rows
            .iter()
            .map(|r| row([&r.description, &r.category, &r.date, &r.amount]))
            .collect();
        self.table(&["Description", "Category", "Date", "Amount"], &rows, Some(3))?;

        self.line("")?;
        let totals: Vec<Vec<String>> = screen
            .by_category
            .iter()
            .map(|c| row([&c.category, &c.total]))
            .collect();
        self.table(&["Category", "Total"], &totals, Some(1))
    }

    pub fn calendar(&mut self, screen: &CalendarScreen) -> Result<(), CliError> {
        if self.json {
            return self.json(screen);
        }
        self.line(&screen.heading)?;
        self.line(&screen.summary)?;
        if let Some(placeholder) = screen.placeholder {
            self.line(placeholder)?;
        }
        for appt in &screen.appointments {
            writeln!(self.out, "  {}  {}", appt.time, appt.title)?;
        }
        if !screen.marked_days.is_empty() {
            let days: Vec<String> = screen
                .marked_days
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect();
            writeln!(self.out, "Days with appointments: {}", days.join(", "))?;
        }
        Ok(())
    }

    pub fn notice(&mut self, notice: &Notice) -> Result<(), CliError> {
        if self.json {
            return self.json(notice);
        }
        let marker = match notice.kind {
            NoticeKind::Info => "*",
            NoticeKind::Destructive => "!",
        };
        writeln!(self.out, "{marker} {}: {}", notice.title, notice.description)?;
        Ok(())
    }

    pub fn suggestion(
        &mut self,
        description: &str,
        suggestion: &CategorySuggestion,
    ) -> Result<(), CliError> {
        if self.json {
            return self.json(&json!({
                "description": description,
                "category": suggestion.category(),
                "fallback": suggestion.is_fallback(),
            }));
        }
        self.line(suggestion.category())
    }

    fn json<T: Serialize>(&mut self, value: &T) -> Result<(), CliError> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Write an aligned table. `right` is the index of a right-aligned
    /// column; a header row of blanks is not printed.
    fn table(
        &mut self,
        headers: &[&str],
        rows: &[Vec<String>],
        right: Option<usize>,
    ) -> Result<(), CliError> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for cells in rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        if headers.iter().any(|h| !h.is_empty()) {
            let header: Vec<String> = headers.iter().map(ToString::to_string).collect();
            self.table_row(&header, &widths, right)?;
        }
        for cells in rows {
            self.table_row(cells, &widths, right)?;
        }
        Ok(())
    }

    fn table_row(
        &mut self,
        cells: &[String],
        widths: &[usize],
        right: Option<usize>,
    ) -> Result<(), CliError> {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                if Some(i) == right {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                }
            })
            .collect();
        writeln!(self.out, "{}", line.join("  ").trim_end())?;
        Ok(())
    }
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bizboard_core::{LedgerStore, MoneyFormat};
    use chrono::DateTime;

    use super::*;

    fn sample() -> LedgerStore {
        let now = DateTime::parse_from_rfc3339("2024-05-10T09:00:00-04:00").unwrap();
        LedgerStore::with_sample_data(now).unwrap()
    }

    fn rendered(f: impl FnOnce(&mut Output<Vec<u8>>) -> Result<(), CliError>) -> String {
        let mut output = Output::new(Vec::new(), false);
        f(&mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_dashboard_text() {
        let store = sample();
        let screen = DashboardScreen::build(&store.view(), &MoneyFormat::default());
        let text = rendered(|out| out.dashboard(&screen));
        assert!(text.contains("Total Revenue   $4,500.00"));
        assert!(text.contains("Profit          $4,254.51"));
    }

    #[test]
    fn test_revenue_table_alignment() {
        let store = sample();
        let screen = RevenueScreen::build(&store.view(), &MoneyFormat::default());
        let text = rendered(|out| out.revenue(&screen));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.first().unwrap().starts_with("Description"));
        assert!(lines.get(1).unwrap().starts_with("Consulting Services"));
        assert!(lines.iter().skip(1).all(|l| l.len() == lines.get(1).unwrap().len()));
    }

    #[test]
    fn test_empty_revenue_placeholder() {
        let store = LedgerStore::new();
        let screen = RevenueScreen::build(&store.view(), &MoneyFormat::default());
        assert_eq!(rendered(|out| out.revenue(&screen)), "No revenue entries yet.\n");
    }

    #[test]
    fn test_json_output() {
        let store = sample();
        let screen = DashboardScreen::build(&store.view(), &MoneyFormat::default());
        let mut output = Output::new(Vec::new(), true);
        output.dashboard(&screen).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(value["total_expenses"], "$245.49");
        assert_eq!(value["profit_is_loss"], false);
        assert_eq!(value["chart"][0]["revenue"], "4500.00");
    }
}
