//! Periods command implementation
//!
//! Builds a report period list from either explicit dates or a pair of
//! fiscal year names.

use chrono::NaiveDate;
use hrkit_core::period::{FilterBasedOn, PeriodListRequest, Periodicity};
use hrkit_shared::{AppError, AppResult};
use serde_json::Value;
use tracing::info;

use crate::context::Context;

/// Arguments of `hrkit periods`.
#[derive(Debug, Clone)]
pub struct PeriodsArgs {
    /// Span start.
    pub from: Option<NaiveDate>,
    /// Span end.
    pub to: Option<NaiveDate>,
    /// First fiscal year name.
    pub from_fiscal_year: Option<String>,
    /// Last fiscal year name.
    pub to_fiscal_year: Option<String>,
    /// Bucket size.
    pub periodicity: Periodicity,
    /// Cumulative labels.
    pub accumulated: bool,
    /// Restart cumulative labels per fiscal year.
    pub reset: bool,
    /// Skip per-period fiscal year resolution.
    pub ignore_fiscal_year: bool,
    /// Company scope.
    pub company: Option<String>,
}

impl PeriodsArgs {
    /// Fiscal-year mode is selected by naming either fiscal year.
    pub fn into_request(self) -> PeriodListRequest {
        let filter_based_on = if self.from_fiscal_year.is_some() || self.to_fiscal_year.is_some() {
            FilterBasedOn::FiscalYear
        } else {
            FilterBasedOn::DateRange
        };

        PeriodListRequest {
            from_fiscal_year: self.from_fiscal_year,
            to_fiscal_year: self.to_fiscal_year,
            period_start_date: self.from,
            period_end_date: self.to,
            filter_based_on,
            periodicity: self.periodicity,
            accumulated_values: self.accumulated,
            company: self.company,
            reset_period_on_fy_change: self.reset,
            ignore_fiscal_year: self.ignore_fiscal_year,
        }
    }
}

/// Run the periods command
pub fn run(ctx: &Context, args: PeriodsArgs) -> AppResult<Value> {
    let request = args.into_request();
    info!(
        basis = ?request.filter_based_on,
        periodicity = %request.periodicity,
        "building period list"
    );

    let periods = ctx.service.get_period_list(&request)?;
    info!(count = periods.len(), "period list built");

    serde_json::to_value(periods).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PeriodsArgs {
        PeriodsArgs {
            from: None,
            to: None,
            from_fiscal_year: None,
            to_fiscal_year: None,
            periodicity: Periodicity::Quarterly,
            accumulated: false,
            reset: true,
            ignore_fiscal_year: false,
            company: None,
        }
    }

    #[test]
    fn test_date_range_mode_by_default() {
        let request = PeriodsArgs {
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..args()
        }
        .into_request();
        assert_eq!(request.filter_based_on, FilterBasedOn::DateRange);
        assert_eq!(request.periodicity, Periodicity::Quarterly);
    }

    #[test]
    fn test_fiscal_year_mode_when_named() {
        let request = PeriodsArgs {
            to_fiscal_year: Some("2024-2025".to_string()),
            reset: false,
            ..args()
        }
        .into_request();
        assert_eq!(request.filter_based_on, FilterBasedOn::FiscalYear);
        assert!(!request.reset_period_on_fy_change);
    }
}
