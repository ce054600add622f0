//! Day-by-day iteration over inclusive date spans.

use std::iter::FusedIterator;

use chrono::NaiveDate;

/// Lazy iterator over every day in an inclusive span.
///
/// Iterating from the back (`.rev()`) yields the newest day first.
/// A span whose end precedes its start yields nothing.
#[derive(Debug, Clone)]
pub struct DateRange {
    front: NaiveDate,
    back: NaiveDate,
    exhausted: bool,
}

impl DateRange {
    /// Creates a range covering `start..=end`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            front: start,
            back: end,
            exhausted: end < start,
        }
    }

    fn remaining(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        usize::try_from((self.back - self.front).num_days() + 1).unwrap_or(0)
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let current = self.front;
        match current.succ_opt() {
            Some(next) if current < self.back => self.front = next,
            _ => self.exhausted = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DateRange {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let current = self.back;
        match current.pred_opt() {
            Some(prev) if current > self.front => self.back = prev,
            _ => self.exhausted = true,
        }
        Some(current)
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}

/// Collects every day in `start..=end`.
#[must_use]
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    DateRange::new(start, end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_forward_includes_both_ends() {
        let days = date_range(d(2024, 2, 27), d(2024, 3, 1));
        assert_eq!(
            days,
            vec![d(2024, 2, 27), d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)]
        );
    }

    #[test]
    fn test_reverse_starts_from_end() {
        let days: Vec<_> = DateRange::new(d(2024, 1, 1), d(2024, 1, 3)).rev().collect();
        assert_eq!(days, vec![d(2024, 1, 3), d(2024, 1, 2), d(2024, 1, 1)]);
    }

    #[test]
    fn test_single_day() {
        let mut range = DateRange::new(d(2024, 5, 5), d(2024, 5, 5));
        assert_eq!(range.len(), 1);
        assert_eq!(range.next(), Some(d(2024, 5, 5)));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let range = DateRange::new(d(2024, 5, 6), d(2024, 5, 5));
        assert_eq!(range.len(), 0);
        assert_eq!(range.count(), 0);
    }

    #[test]
    fn test_meeting_in_the_middle() {
        let mut range = DateRange::new(d(2024, 1, 1), d(2024, 1, 4));
        assert_eq!(range.next(), Some(d(2024, 1, 1)));
        assert_eq!(range.next_back(), Some(d(2024, 1, 4)));
        assert_eq!(range.len(), 2);
        assert_eq!(range.next(), Some(d(2024, 1, 2)));
        assert_eq!(range.next_back(), Some(d(2024, 1, 3)));
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_size_matches_date_diff() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 12, 31));
        assert_eq!(range.len(), 366);
    }
}
