//! Calendar commands.

use std::io::Write;

use bizboard_app::forms::AppointmentForm;
use bizboard_app::screens::CalendarScreen;
use bizboard_core::{Field, parse_day};
use chrono::NaiveDate;

use crate::error::CliError;
use crate::render::Output;
use crate::session::Session;

fn selected_day(session: &Session, day: Option<&str>) -> Result<NaiveDate, CliError> {
    match day {
        Some(day) => Ok(parse_day(Field::Date, day)?),
        None => Ok(session.now.date_naive()),
    }
}

/// Print the appointments on `day` (default: today).
///
/// # Errors
///
/// Returns `CliError::Validation` for a malformed day.
pub fn show(
    session: &Session,
    out: &mut Output<impl Write>,
    day: Option<&str>,
) -> Result<(), CliError> {
    let day = selected_day(session, day)?;
    out.calendar(&CalendarScreen::build(&session.store.view(), Some(day)))
}

/// Schedule an appointment on `day` (default: today) and print that day.
///
/// # Errors
///
/// Returns `CliError::Validation` if the appointment is rejected.
pub fn add(
    session: &mut Session,
    out: &mut Output<impl Write>,
    title: String,
    day: Option<&str>,
    time: Option<String>,
) -> Result<(), CliError> {
    let day = selected_day(session, day)?;
    let mut form = AppointmentForm {
        title,
        time: time.unwrap_or_default(),
        dialog_open: true,
        ..AppointmentForm::for_day(day)
    };
    let notice = form.submit(&mut session.store, session.now)?;
    out.notice(&notice)?;
    out.calendar(&CalendarScreen::build(&session.store.view(), form.selected))
}
