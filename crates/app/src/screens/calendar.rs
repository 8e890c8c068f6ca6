//! Calendar day panel.

use std::collections::BTreeSet;

use bizboard_core::{AppointmentId, LedgerView};
use chrono::NaiveDate;
use serde::Serialize;

use super::format::heading_date;

const EMPTY_DAY: &str = "No appointments scheduled for this day.";

/// One appointment in the day panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRow {
    pub id: AppointmentId,
    pub title: String,
    /// Local wall-clock time, `HH:MM`.
    pub time: String,
}

/// Calendar view model for the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarScreen {
    pub selected: Option<NaiveDate>,
    pub heading: String,
    pub summary: String,
    pub appointments: Vec<AppointmentRow>,
    pub placeholder: Option<&'static str>,
    /// Days that get an appointment marker.
    pub marked_days: BTreeSet<NaiveDate>,
}

impl CalendarScreen {
    /// Build the panel for `selected`. With no selected day, the panel lists
    /// nothing but the markers are still shown.
    #[must_use]
    pub fn build(ledger: &LedgerView<'_>, selected: Option<NaiveDate>) -> Self {
        let appointments: Vec<AppointmentRow> = selected
            .map(|day| ledger.appointments_on(day))
            .unwrap_or_default()
            .into_iter()
            .map(|appt| AppointmentRow {
                id: appt.id(),
                title: appt.title().to_string(),
                time: appt.date().format("%H:%M").to_string(),
            })
            .collect();

        let heading = selected.map_or_else(
            || "Appointments for selected date".to_string(),
            |day| format!("Appointments for {}", heading_date(day)),
        );

        Self {
            selected,
            heading,
            summary: format!("You have {} appointment(s) today.", appointments.len()),
            placeholder: appointments.is_empty().then_some(EMPTY_DAY),
            appointments,
            marked_days: ledger.appointment_days(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bizboard_core::LedgerStore;
    use chrono::DateTime;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_with_appointments() {
        let mut store = LedgerStore::new();
        let late = DateTime::parse_from_rfc3339("2024-05-10T23:00:00-04:00").unwrap();
        let early = DateTime::parse_from_rfc3339("2024-05-10T08:30:00-04:00").unwrap();
        let other = DateTime::parse_from_rfc3339("2024-05-12T10:00:00-04:00").unwrap();
        store.add_appointment("Late call", late).unwrap();
        store.add_appointment("Standup", early).unwrap();
        store.add_appointment("Review", other).unwrap();

        let screen = CalendarScreen::build(&store.view(), Some(day(2024, 5, 10)));
        assert_eq!(screen.heading, "Appointments for May 10, 2024");
        assert_eq!(screen.summary, "You have 2 appointment(s) today.");
        assert_eq!(screen.placeholder, None);

        let titles: Vec<(&str, &str)> = screen
            .appointments
            .iter()
            .map(|a| (a.title.as_str(), a.time.as_str()))
            .collect();
        assert_eq!(titles, [("Late call", "23:00"), ("Standup", "08:30")]);
        assert_eq!(
            screen.marked_days.into_iter().collect::<Vec<_>>(),
            [day(2024, 5, 10), day(2024, 5, 12)]
        );
    }

    #[test]
    fn test_empty_day() {
        let store = LedgerStore::new();
        let screen = CalendarScreen::build(&store.view(), Some(day(2024, 5, 11)));
        assert!(screen.appointments.is_empty());
        assert_eq!(screen.summary, "You have 0 appointment(s) today.");
        assert_eq!(
            screen.placeholder,
            Some("No appointments scheduled for this day.")
        );
    }

    #[test]
    fn test_no_selection() {
        let store = LedgerStore::new();
        let screen = CalendarScreen::build(&store.view(), None);
        assert_eq!(screen.heading, "Appointments for selected date");
        assert!(screen.appointments.is_empty());
    }
}
