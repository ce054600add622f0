//! Property-based tests for period list generation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::service::PeriodService;
use super::types::{PeriodListRequest, Periodicity};
use super::walker::PeriodWalker;
use crate::dates::{FixedClock, add_days};
use crate::fiscal::{FiscalYearResolver, InMemoryFiscalYearStore};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..11_000).prop_map(|offset| add_days(base(), offset))
}

fn periodicity_strategy() -> impl Strategy<Value = Periodicity> {
    prop_oneof![
        Just(Periodicity::Yearly),
        Just(Periodicity::HalfYearly),
        Just(Periodicity::Quarterly),
        Just(Periodicity::Monthly),
    ]
}

fn service(today: NaiveDate) -> PeriodService<InMemoryFiscalYearStore, FixedClock> {
    PeriodService::new(
        FiscalYearResolver::new(InMemoryFiscalYearStore::new()),
        FixedClock(today),
    )
}

fn request(start: NaiveDate, end: NaiveDate, periodicity: Periodicity) -> PeriodListRequest {
    PeriodListRequest::date_range(start, end, periodicity).ignore_fiscal_year(true)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Periods are non-empty, ordered, contiguous and end on the span end.
    #[test]
    fn prop_periods_tile_the_span(
        start in date_strategy(),
        length in 0i64..1_500,
        periodicity in periodicity_strategy(),
        snap in any::<bool>(),
    ) {
        let end = add_days(start, length);
        let periods: Vec<_> = PeriodWalker::new(start, end, periodicity, snap).collect();

        prop_assert!(!periods.is_empty());
        prop_assert_eq!(periods[0].from_date, start);
        prop_assert_eq!(periods.last().unwrap().to_date, end);
        for p in &periods {
            prop_assert!(p.from_date <= p.to_date);
            prop_assert!(p.to_date <= end);
        }
        for pair in periods.windows(2) {
            prop_assert_eq!(add_days(pair[0].to_date, 1), pair[1].from_date);
        }
    }

    /// The span end never passes today.
    #[test]
    fn prop_end_never_after_today(
        start in date_strategy(),
        length in 0i64..1_500,
        today_offset in 0i64..1_500,
        periodicity in periodicity_strategy(),
    ) {
        let end = add_days(start, length);
        let today = add_days(start, today_offset);
        let periods = service(today).get_period_list(&request(start, end, periodicity)).unwrap();

        let effective_end = end.min(today);
        prop_assert_eq!(periods.last().unwrap().to_date, effective_end);
        prop_assert!(periods.iter().all(|p| p.to_date <= today));
        prop_assert!(periods.iter().all(|p| p.year_end_date == effective_end));
    }

    /// Periodicity and accumulation only change bucketing and labels,
    /// never the span.
    #[test]
    fn prop_span_independent_of_bucketing(
        start in date_strategy(),
        length in 0i64..1_500,
        first in periodicity_strategy(),
        second in periodicity_strategy(),
        accumulated in any::<bool>(),
    ) {
        let end = add_days(start, length);
        let service = service(add_days(end, 1));

        let a = service.get_period_list(&request(start, end, first)).unwrap();
        let b = service
            .get_period_list(&request(start, end, second).accumulated(accumulated))
            .unwrap();

        prop_assert_eq!(a[0].year_start_date, b[0].year_start_date);
        prop_assert_eq!(a[0].year_end_date, b[0].year_end_date);
        prop_assert_eq!(a.last().unwrap().to_date, b.last().unwrap().to_date);
    }

    /// Month-aligned spans give every period a distinct key.
    #[test]
    fn prop_keys_unique_for_month_aligned_spans(
        start in date_strategy(),
        length in 0i64..1_500,
        periodicity in periodicity_strategy(),
    ) {
        let start = start.with_day(1).unwrap();
        let end = add_days(start, length);
        let periods = service(add_days(end, 1))
            .get_period_list(&request(start, end, periodicity))
            .unwrap();

        let mut keys: Vec<_> = periods.iter().map(|p| p.key.clone()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }
}
