//! Period keys and labels.

use chrono::NaiveDate;

use super::types::Periodicity;
use crate::dates::{month_year, month_year_key, short_month_year, year};

/// Column key of a period ending on `to_date`, e.g. `mar_2024`.
#[must_use]
pub fn period_key(to_date: NaiveDate) -> String {
    month_year_key(to_date)
}

/// Range label from `from_date` to `to_date`.
///
/// Yearly: `"2024"` or `"2023-2024"`. Otherwise `"Jan 24-Mar 24"`.
#[must_use]
pub fn range_label(periodicity: Periodicity, from_date: NaiveDate, to_date: NaiveDate) -> String {
    if periodicity == Periodicity::Yearly {
        let (from_year, to_year) = (year(from_date), year(to_date));
        if from_year == to_year {
            from_year
        } else {
            format!("{from_year}-{to_year}")
        }
    } else {
        format!("{}-{}", short_month_year(from_date), short_month_year(to_date))
    }
}

/// Label of a period.
///
/// Non-accumulated monthly periods read `"Jan 2024"`. Every other label
/// is a range ending on `to_date` and starting at `anchor`, which the
/// caller sets to the period's own start unless accumulating.
#[must_use]
pub fn period_label(
    periodicity: Periodicity,
    accumulated_values: bool,
    anchor: NaiveDate,
    to_date: NaiveDate,
) -> String {
    if periodicity == Periodicity::Monthly && !accumulated_values {
        month_year(to_date)
    } else {
        range_label(periodicity, anchor, to_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case(Periodicity::Yearly, d(2024, 1, 1), d(2024, 12, 31), "2024")]
    #[case(Periodicity::Yearly, d(2023, 4, 1), d(2024, 3, 31), "2023-2024")]
    #[case(Periodicity::Quarterly, d(2024, 1, 1), d(2024, 3, 31), "Jan 24-Mar 24")]
    #[case(Periodicity::HalfYearly, d(2024, 7, 1), d(2024, 12, 31), "Jul 24-Dec 24")]
    #[case(Periodicity::Monthly, d(2023, 12, 1), d(2024, 1, 31), "Dec 23-Jan 24")]
    fn test_range_label(
        #[case] periodicity: Periodicity,
        #[case] from: NaiveDate,
        #[case] to: NaiveDate,
        #[case] want: &str,
    ) {
        assert_eq!(range_label(periodicity, from, to), want);
    }

    #[test]
    fn test_monthly_label_is_single_month() {
        assert_eq!(
            period_label(Periodicity::Monthly, false, d(2024, 2, 1), d(2024, 2, 29)),
            "Feb 2024"
        );
    }

    #[test]
    fn test_accumulated_monthly_label_is_range() {
        assert_eq!(
            period_label(Periodicity::Monthly, true, d(2024, 1, 1), d(2024, 3, 31)),
            "Jan 24-Mar 24"
        );
    }

    #[test]
    fn test_key() {
        assert_eq!(period_key(d(2024, 2, 29)), "feb_2024");
    }
}
