//! Date rendering shared by the screens.

use chrono::{Datelike, NaiveDate};

/// Long date with an ordinal day, e.g. "May 10th, 2024".
#[must_use]
pub fn long_date(day: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        day.format("%B"),
        day.day(),
        ordinal_suffix(day.day()),
        day.year()
    )
}

/// Heading date without an ordinal, e.g. "May 10, 2024".
#[must_use]
pub fn heading_date(day: NaiveDate) -> String {
    day.format("%B %-d, %Y").to_string()
}

const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(day(2024, 5, 10)), "May 10th, 2024");
        assert_eq!(long_date(day(2024, 6, 2)), "June 2nd, 2024");
        assert_eq!(long_date(day(2024, 5, 1)), "May 1st, 2024");
        assert_eq!(long_date(day(2024, 3, 23)), "March 23rd, 2024");
    }

    #[test]
    fn test_teens_use_th() {
        for d in 11..=13 {
            assert!(long_date(day(2024, 1, d)).contains(&format!("{d}th")));
        }
        assert_eq!(long_date(day(2024, 1, 21)), "January 21st, 2024");
        assert_eq!(long_date(day(2024, 1, 31)), "January 31st, 2024");
    }

    #[test]
    fn test_heading_date() {
        assert_eq!(heading_date(day(2024, 5, 10)), "May 10, 2024");
        assert_eq!(heading_date(day(2024, 6, 2)), "June 2, 2024");
    }
}
