//! Dashboard summary.

use std::io::Write;

use bizboard_app::screens::DashboardScreen;

use crate::error::CliError;
use crate::render::Output;
use crate::session::Session;

/// Print the summary cards.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn show(session: &Session, out: &mut Output<impl Write>) -> Result<(), CliError> {
    out.dashboard(&DashboardScreen::build(
        &session.store.view(),
        &session.money,
    ))
}
