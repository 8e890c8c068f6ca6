//! Record timestamps and calendar-day parsing.
//!
//! Records carry a wall-clock timestamp together with its UTC offset. Calendar
//! day comparisons use the timestamp's own local date, so an appointment at
//! `2024-05-10T23:00-04:00` belongs to May 10th.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::validation::{Field, ValidationError};

/// Timestamp type stored on every record.
pub type Timestamp = DateTime<FixedOffset>;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a record timestamp.
///
/// Accepted forms:
/// - RFC 3339 (`2024-05-10T23:00:00-04:00`), keeping its own offset
/// - `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD HH:MM[:SS]`, interpreted in `offset`
/// - `YYYY-MM-DD`, as midnight in `offset`
///
/// # Errors
///
/// Returns [`ValidationError::MalformedDate`] for anything else, including
/// impossible calendar dates such as `2024-02-30`.
pub fn parse_timestamp(
    field: Field,
    input: &str,
    offset: FixedOffset,
) -> Result<Timestamp, ValidationError> {
    let trimmed = input.trim();
    let malformed = || ValidationError::MalformedDate {
        field,
        input: input.to_owned(),
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts);
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(malformed)?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(malformed)
}

/// Parse a calendar day (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`ValidationError::MalformedDate`] if the input is not a valid date.
pub fn parse_day(field: Field, input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::MalformedDate {
            field,
            input: input.to_owned(),
        }
    })
}

/// Midnight of `day` in `offset`.
#[must_use]
pub fn start_of_day(day: NaiveDate, offset: FixedOffset) -> Timestamp {
    // A fixed offset has exactly one mapping for every local time.
    offset
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
        .unwrap_or_else(|| day.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}
