//! Period bucketing types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Granularity a span is subdivided at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    /// Twelve-month buckets.
    Yearly,
    /// Six-month buckets.
    #[serde(rename = "Half-Yearly")]
    HalfYearly,
    /// Three-month buckets.
    Quarterly,
    /// One-month buckets.
    Monthly,
}

impl Periodicity {
    /// Every periodicity, coarsest first.
    pub const ALL: [Self; 4] = [Self::Yearly, Self::HalfYearly, Self::Quarterly, Self::Monthly];

    /// Months per bucket.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Yearly => 12,
            Self::HalfYearly => 6,
            Self::Quarterly => 3,
            Self::Monthly => 1,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "Yearly",
            Self::HalfYearly => "Half-Yearly",
            Self::Quarterly => "Quarterly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised periodicity name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown periodicity: {0} (expected Yearly, Half-Yearly, Quarterly or Monthly)")]
pub struct ParsePeriodicityError(pub String);

impl FromStr for Periodicity {
    type Err = ParsePeriodicityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePeriodicityError(s.to_string()))
    }
}

/// Where the span boundaries come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterBasedOn {
    /// Combined bounds of a range of named fiscal years.
    #[serde(rename = "Fiscal Year")]
    FiscalYear,
    /// Explicit start and end dates.
    #[serde(rename = "Date Range")]
    DateRange,
}

impl FilterBasedOn {
    pub(crate) const fn missing_range_message(self) -> &'static str {
        match self {
            Self::FiscalYear => "Start Year and End Year are mandatory",
            Self::DateRange => "From Date and To Date are mandatory",
        }
    }

    pub(crate) const fn inverted_range_message(self) -> &'static str {
        match self {
            Self::FiscalYear => "End Year cannot be before Start Year",
            Self::DateRange => "To Date cannot be less than From Date",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Parameters of a period list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodListRequest {
    /// First fiscal year name (fiscal year mode).
    #[serde(default)]
    pub from_fiscal_year: Option<String>,
    /// Last fiscal year name (fiscal year mode).
    #[serde(default)]
    pub to_fiscal_year: Option<String>,
    /// Span start (date range mode).
    #[serde(default)]
    pub period_start_date: Option<NaiveDate>,
    /// Span end (date range mode).
    #[serde(default)]
    pub period_end_date: Option<NaiveDate>,
    /// Which pair of fields defines the span.
    pub filter_based_on: FilterBasedOn,
    /// Bucket size.
    pub periodicity: Periodicity,
    /// Label each period with its cumulative range.
    #[serde(default)]
    pub accumulated_values: bool,
    /// Company used when resolving per-period fiscal years.
    #[serde(default)]
    pub company: Option<String>,
    /// Under accumulation, restart the label range at each fiscal year start.
    #[serde(default = "default_true")]
    pub reset_period_on_fy_change: bool,
    /// Skip per-period fiscal year resolution.
    #[serde(default)]
    pub ignore_fiscal_year: bool,
}

impl PeriodListRequest {
    /// Span given by explicit dates.
    #[must_use]
    pub fn date_range(start: NaiveDate, end: NaiveDate, periodicity: Periodicity) -> Self {
        Self {
            from_fiscal_year: None,
            to_fiscal_year: None,
            period_start_date: Some(start),
            period_end_date: Some(end),
            filter_based_on: FilterBasedOn::DateRange,
            periodicity,
            accumulated_values: false,
            company: None,
            reset_period_on_fy_change: true,
            ignore_fiscal_year: false,
        }
    }

    /// Span covering the named fiscal years.
    #[must_use]
    pub fn fiscal_years(
        from: impl Into<String>,
        to: impl Into<String>,
        periodicity: Periodicity,
    ) -> Self {
        Self {
            from_fiscal_year: Some(from.into()),
            to_fiscal_year: Some(to.into()),
            period_start_date: None,
            period_end_date: None,
            filter_based_on: FilterBasedOn::FiscalYear,
            periodicity,
            accumulated_values: false,
            company: None,
            reset_period_on_fy_change: true,
            ignore_fiscal_year: false,
        }
    }

    /// Sets accumulation mode.
    #[must_use]
    pub fn accumulated(mut self, accumulated: bool) -> Self {
        self.accumulated_values = accumulated;
        self
    }

    /// Sets the company.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets whether accumulated labels restart at each fiscal year.
    #[must_use]
    pub fn reset_on_fy_change(mut self, reset: bool) -> Self {
        self.reset_period_on_fy_change = reset;
        self
    }

    /// Sets whether per-period fiscal years are resolved.
    #[must_use]
    pub fn ignore_fiscal_year(mut self, ignore: bool) -> Self {
        self.ignore_fiscal_year = ignore;
        self
    }
}

/// Inclusive bounds of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    /// First day.
    pub from_date: NaiveDate,
    /// Last day.
    pub to_date: NaiveDate,
}

/// One labelled bucket of a period list.
///
/// `to_date_fiscal_year` and `from_date_fiscal_year_start_date` are set
/// exactly when the request did not ignore fiscal years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day of the bucket.
    pub from_date: NaiveDate,
    /// Last day of the bucket; never after `year_end_date`.
    pub to_date: NaiveDate,
    /// Column key derived from `to_date`, e.g. `mar_2024`.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Start of the whole span.
    pub year_start_date: NaiveDate,
    /// End of the whole span, after clamping to today.
    pub year_end_date: NaiveDate,
    /// Name of the fiscal year containing `to_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date_fiscal_year: Option<String>,
    /// Start of the fiscal year containing `from_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date_fiscal_year_start_date: Option<NaiveDate>,
}
