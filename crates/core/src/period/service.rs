//! Period list generation service.

use chrono::NaiveDate;
use tracing::debug;

use super::error::PeriodError;
use super::label::{period_key, period_label};
use super::types::{FilterBasedOn, Period, PeriodBounds, PeriodListRequest};
use super::walker::PeriodWalker;
use crate::dates::Clock;
use crate::fiscal::{FiscalYear, FiscalYearQuery, FiscalYearResolver, FiscalYearStore};

/// Builds period lists for report columns.
#[derive(Debug)]
pub struct PeriodService<S, C> {
    resolver: FiscalYearResolver<S>,
    clock: C,
}

impl<S: FiscalYearStore, C: Clock> PeriodService<S, C> {
    /// Creates a service.
    #[must_use]
    pub fn new(resolver: FiscalYearResolver<S>, clock: C) -> Self {
        Self { resolver, clock }
    }

    /// The fiscal year resolver.
    pub fn resolver(&self) -> &FiscalYearResolver<S> {
        &self.resolver
    }

    /// Resolves the span `(year_start_date, year_end_date)`, with the end
    /// clamped to today.
    pub fn resolve_span(
        &self,
        request: &PeriodListRequest,
    ) -> Result<(NaiveDate, NaiveDate), PeriodError> {
        let basis = request.filter_based_on;
        let missing = PeriodError::MissingDateRange { basis };

        let (start, end) = match basis {
            FilterBasedOn::FiscalYear => {
                let (Some(from), Some(to)) = (
                    request.from_fiscal_year.as_deref(),
                    request.to_fiscal_year.as_deref(),
                ) else {
                    return Err(missing);
                };
                self.resolver.span_bounds(from, to)?.ok_or(missing)?
            }
            FilterBasedOn::DateRange => {
                let (Some(start), Some(end)) = (request.period_start_date, request.period_end_date)
                else {
                    return Err(missing);
                };
                (start, end)
            }
        };

        if end < start {
            return Err(PeriodError::InvalidDateRange { basis, start, end });
        }

        let end = end.min(self.clock.today());
        if end < start {
            // Whole span lies after today.
            return Err(PeriodError::InvalidDateRange { basis, start, end });
        }

        Ok((start, end))
    }

    /// Lazily walks the resolved span without labelling.
    pub fn walk(&self, request: &PeriodListRequest) -> Result<PeriodWalker, PeriodError> {
        let (start, end) = self.resolve_span(request)?;
        Ok(PeriodWalker::new(
            start,
            end,
            request.periodicity,
            request.filter_based_on == FilterBasedOn::DateRange,
        ))
    }

    /// Ordered, contiguous, labelled periods covering the span.
    ///
    /// Fails as a whole: no partial list is returned.
    pub fn get_period_list(&self, request: &PeriodListRequest) -> Result<Vec<Period>, PeriodError> {
        let (year_start_date, year_end_date) = self.resolve_span(request)?;
        let walker = PeriodWalker::new(
            year_start_date,
            year_end_date,
            request.periodicity,
            request.filter_based_on == FilterBasedOn::DateRange,
        );

        let periods = walker
            .map(|bounds| self.build_period(request, bounds, year_start_date, year_end_date))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            periodicity = %request.periodicity,
            start = %year_start_date,
            end = %year_end_date,
            count = periods.len(),
            "period list generated"
        );
        Ok(periods)
    }

    /// Silent lookup: a miss is `None`, store failures still propagate.
    fn try_resolve(
        &self,
        date: NaiveDate,
        company: Option<&str>,
    ) -> Result<Option<FiscalYear>, PeriodError> {
        let query = FiscalYearQuery::for_date(date).maybe_company(company).silent();
        match self.resolver.resolve(&query) {
            Ok(year) => Ok(Some(year)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn build_period(
        &self,
        request: &PeriodListRequest,
        bounds: PeriodBounds,
        year_start_date: NaiveDate,
        year_end_date: NaiveDate,
    ) -> Result<Period, PeriodError> {
        let PeriodBounds { from_date, to_date } = bounds;

        let (to_date_fiscal_year, from_date_fiscal_year_start_date) = if request.ignore_fiscal_year {
            (None, None)
        } else {
            let company = request.company.as_deref();
            // Only a resetting accumulated label depends on the fiscal year.
            let from_year = if request.accumulated_values && request.reset_period_on_fy_change {
                Some(
                    self.resolver
                        .resolve(&FiscalYearQuery::for_date(from_date).maybe_company(company))?,
                )
            } else {
                self.try_resolve(from_date, company)?
            };
            let to_year = self.try_resolve(to_date, company)?;
            (
                to_year.map(|y| y.name),
                from_year.map(|y| y.year_start_date),
            )
        };

        let anchor = match (request.accumulated_values, request.reset_period_on_fy_change) {
            (false, _) => from_date,
            (true, true) => from_date_fiscal_year_start_date.unwrap_or(year_start_date),
            (true, false) => year_start_date,
        };

        Ok(Period {
            from_date,
            to_date,
            key: period_key(to_date),
            label: period_label(request.periodicity, request.accumulated_values, anchor, to_date),
            year_start_date,
            year_end_date,
            to_date_fiscal_year,
            from_date_fiscal_year_start_date,
        })
    }
}
