//! Calendar arithmetic and formatting helpers.
//!
//! Month arithmetic clamps the day to the end of the target month, so
//! `add_months(2024-01-31, 1)` is `2024-02-29`.

pub mod clock;
pub mod range;

pub use clock::{Clock, FixedClock, SystemClock};
pub use range::{DateRange, date_range};

use chrono::{Datelike, Days, Months, NaiveDate};

/// Adds (or subtracts, when negative) whole days.
///
/// Saturates at the representable calendar bounds.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// Adds whole months, clamping the day to the last day of the target month.
///
/// Saturates at the representable calendar bounds.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of calendar months touched by the inclusive span.
///
/// `2024-01-31..2024-02-01` touches two months. Returns zero or less
/// when `end` falls in an earlier month than `start`.
#[must_use]
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let start_index = 12 * start.year() + start.month0().cast_signed();
    let end_index = 12 * end.year() + end.month0().cast_signed();
    end_index - start_index + 1
}

/// Days from `start` to `end`; negative when `end` precedes `start`.
#[must_use]
pub fn date_diff(end: NaiveDate, start: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// "Jan 2024"
#[must_use]
pub fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// "Jan 24"
#[must_use]
pub fn short_month_year(date: NaiveDate) -> String {
    date.format("%b %y").to_string()
}

/// "2024"
#[must_use]
pub fn year(date: NaiveDate) -> String {
    date.format("%Y").to_string()
}

/// Lowercase, underscore-joined month/year token, e.g. `jan_2024`.
#[must_use]
pub fn month_year_key(date: NaiveDate) -> String {
    date.format("%b_%Y")
        .to_string()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case(d(2024, 1, 31), 1, d(2024, 2, 29))]
    #[case(d(2023, 1, 31), 1, d(2023, 2, 28))]
    #[case(d(2024, 1, 1), 12, d(2025, 1, 1))]
    #[case(d(2024, 11, 30), 3, d(2025, 2, 28))]
    #[case(d(2024, 4, 15), 0, d(2024, 4, 15))]
    fn test_add_months_clamps(#[case] start: NaiveDate, #[case] n: u32, #[case] want: NaiveDate) {
        assert_eq!(add_months(start, n), want);
    }

    #[test]
    fn test_add_days_both_directions() {
        assert_eq!(add_days(d(2024, 2, 28), 1), d(2024, 2, 29));
        assert_eq!(add_days(d(2024, 3, 1), -1), d(2024, 2, 29));
        assert_eq!(add_days(d(2024, 3, 1), 0), d(2024, 3, 1));
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(first_day_of_month(d(2024, 2, 29)), d(2024, 2, 1));
        assert_eq!(first_day_of_month(d(2024, 2, 1)), d(2024, 2, 1));
    }

    #[rstest]
    #[case(d(2024, 1, 1), d(2024, 12, 31), 12)]
    #[case(d(2024, 1, 31), d(2024, 2, 1), 2)]
    #[case(d(2024, 4, 1), d(2025, 3, 31), 12)]
    #[case(d(2024, 6, 10), d(2024, 6, 20), 1)]
    #[case(d(2024, 6, 10), d(2024, 5, 20), 0)]
    fn test_months_between(#[case] start: NaiveDate, #[case] end: NaiveDate, #[case] want: i32) {
        assert_eq!(months_between(start, end), want);
    }

    #[test]
    fn test_date_diff() {
        assert_eq!(date_diff(d(2024, 3, 1), d(2024, 2, 1)), 29);
        assert_eq!(date_diff(d(2024, 2, 1), d(2024, 3, 1)), -29);
    }

    #[test]
    fn test_formatting() {
        let date = d(2024, 1, 31);
        assert_eq!(month_year(date), "Jan 2024");
        assert_eq!(short_month_year(date), "Jan 24");
        assert_eq!(year(date), "2024");
        assert_eq!(month_year_key(date), "jan_2024");
        assert_eq!(month_year_key(d(2023, 12, 1)), "dec_2023");
    }
}
