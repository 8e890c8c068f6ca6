//! Category suggestion for a single description.

use std::io::Write;

use crate::error::CliError;
use crate::render::Output;
use crate::session::Session;

/// Print the suggested category for `description`.
///
/// Prints an empty line for a blank description and "Uncategorized" when
/// the classifier is unavailable.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub async fn run(
    session: &Session,
    out: &mut Output<impl Write>,
    description: &str,
) -> Result<(), CliError> {
    let suggestion = session.categorizer.suggest(description).await;
    out.suggestion(description, &suggestion)
}
