//! Expense commands.

use std::io::Write;

use bizboard_app::forms::ExpenseForm;
use bizboard_app::screens::ExpensesScreen;
use tracing::info;

use crate::error::CliError;
use crate::render::Output;
use crate::session::Session;

/// Print the expense table and category totals.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn list(session: &Session, out: &mut Output<impl Write>) -> Result<(), CliError> {
    out.expenses(&ExpensesScreen::build(&session.store.view(), &session.money))
}

/// Record an expense and print the updated table.
///
/// Without `category`, a category is suggested from the description first.
///
/// # Errors
///
/// Returns `CliError::Validation` if the expense is rejected.
pub async fn add(
    session: &mut Session,
    out: &mut Output<impl Write>,
    description: String,
    amount: String,
    category: Option<String>,
    date: Option<&str>,
) -> Result<(), CliError> {
    let date = session.timestamp(date)?;
    let mut form = ExpenseForm {
        description,
        amount,
        category: category.unwrap_or_default(),
        dialog_open: true,
        ..ExpenseForm::default()
    };

    if form.category.trim().is_empty() {
        info!("No category given, asking for a suggestion");
        let notice = form.suggest_category(&session.categorizer).await;
        out.notice(&notice)?;
    }

    let notice = form.submit(&mut session.store, date)?;
    out.notice(&notice)?;
    list(session, out)
}
