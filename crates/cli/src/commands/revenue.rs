//! Revenue commands.

use std::io::Write;

use bizboard_app::forms::RevenueForm;
use bizboard_app::screens::RevenueScreen;

use crate::error::CliError;
use crate::render::Output;
use crate::session::Session;

/// Print the revenue table.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn list(session: &Session, out: &mut Output<impl Write>) -> Result<(), CliError> {
    out.revenue(&RevenueScreen::build(&session.store.view(), &session.money))
}

/// Record a revenue entry and print the updated table.
///
/// # Errors
///
/// Returns `CliError::Validation` if the entry is rejected.
pub fn add(
    session: &mut Session,
    out: &mut Output<impl Write>,
    description: String,
    amount: String,
    date: Option<&str>,
) -> Result<(), CliError> {
    let date = session.timestamp(date)?;
    let mut form = RevenueForm {
        description,
        amount,
        dialog_open: true,
    };
    let notice = form.submit(&mut session.store, date)?;
    out.notice(&notice)?;
    list(session, out)
}
