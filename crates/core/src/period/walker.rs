//! Lazy subdivision of a span into periodicity-sized buckets.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use super::types::{PeriodBounds, Periodicity};
use crate::dates::{add_days, add_months, first_day_of_month, months_between};

/// Walks `start..=end` in steps of `periodicity.months()`.
///
/// Each bucket ends the day before the next step boundary, clamped to
/// `end`. Iteration stops right after the bucket ending on `end`, so the
/// last bucket always finishes on the span end. Buckets are contiguous.
#[derive(Debug, Clone)]
pub struct PeriodWalker {
    cursor: NaiveDate,
    end: NaiveDate,
    step: u32,
    snap_first_to_month: bool,
    done: bool,
}

impl PeriodWalker {
    /// Creates a walker.
    ///
    /// With `snap_first_to_month`, the first step is measured from the
    /// first day of the start month, so the first bucket ends on a month
    /// boundary. An inverted span yields nothing.
    #[must_use]
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        periodicity: Periodicity,
        snap_first_to_month: bool,
    ) -> Self {
        Self {
            cursor: start,
            end,
            step: periodicity.months(),
            snap_first_to_month,
            done: end < start,
        }
    }
}

impl Iterator for PeriodWalker {
    type Item = PeriodBounds;

    fn next(&mut self) -> Option<PeriodBounds> {
        if self.done {
            return None;
        }

        let from_date = self.cursor;
        let base = if self.snap_first_to_month {
            self.snap_first_to_month = false;
            first_day_of_month(from_date)
        } else {
            from_date
        };

        let boundary = add_months(base, self.step);
        let to_date = add_days(boundary, -1).min(self.end);

        if to_date >= self.end {
            self.done = true;
        } else {
            self.cursor = boundary;
        }

        Some(PeriodBounds { from_date, to_date })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // At most one bucket per calendar month touched.
        let months = usize::try_from(months_between(self.cursor, self.end)).unwrap_or(1);
        (1, Some(months.max(1)))
    }
}

impl FusedIterator for PeriodWalker {}
