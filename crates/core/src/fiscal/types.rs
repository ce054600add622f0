//! Fiscal year records and store filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::FiscalError;

/// Fiscal year definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    /// Unique name (e.g., "2024-2025").
    pub name: String,
    /// First day of the fiscal year (inclusive).
    pub year_start_date: NaiveDate,
    /// Last day of the fiscal year (inclusive).
    pub year_end_date: NaiveDate,
    /// Disabled years are never offered as candidates.
    #[serde(default)]
    pub disabled: bool,
    /// Companies this year is scoped to. Empty means every company.
    #[serde(default)]
    pub companies: Vec<String>,
}

impl FiscalYear {
    /// Creates an enabled, unscoped fiscal year.
    #[must_use]
    pub fn new(name: impl Into<String>, year_start_date: NaiveDate, year_end_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            year_start_date,
            year_end_date,
            disabled: false,
            companies: Vec::new(),
        }
    }

    /// Scopes the year to one more company.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.companies.push(company.into());
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns true if the given date falls within this fiscal year.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.year_start_date && date <= self.year_end_date
    }

    /// Returns true if the year is unscoped or explicitly associated with `company`.
    #[must_use]
    pub fn applies_to(&self, company: &str) -> bool {
        self.companies.is_empty() || self.companies.iter().any(|c| c == company)
    }

    /// The `(name, start, end)` triple.
    #[must_use]
    pub fn as_tuple(&self) -> (&str, NaiveDate, NaiveDate) {
        (&self.name, self.year_start_date, self.year_end_date)
    }

    /// Checks `year_end_date >= year_start_date`.
    pub fn validate(&self) -> Result<(), FiscalError> {
        if self.year_end_date < self.year_start_date {
            return Err(FiscalError::InvalidDateRange {
                name: self.name.clone(),
                start: self.year_start_date,
                end: self.year_end_date,
            });
        }
        Ok(())
    }
}

/// Criteria for [`FiscalYearStore::query`](super::FiscalYearStore::query).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiscalYearFilter {
    /// Keep only years unscoped or associated with this company.
    pub company: Option<String>,
    /// Keep only the year with this exact name.
    pub name: Option<String>,
    /// Include disabled years.
    pub include_disabled: bool,
}

impl FiscalYearFilter {
    /// Every enabled fiscal year.
    #[must_use]
    pub fn active() -> Self {
        Self::default()
    }

    /// Every fiscal year, disabled ones included.
    #[must_use]
    pub fn everything() -> Self {
        Self {
            include_disabled: true,
            ..Self::default()
        }
    }

    /// Restricts to one company (or lifts the restriction with `None`).
    #[must_use]
    pub fn for_company(mut self, company: Option<&str>) -> Self {
        self.company = company.map(str::to_owned);
        self
    }

    /// Restricts to one exact name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if `year` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, year: &FiscalYear) -> bool {
        (self.include_disabled || !year.disabled)
            && self.company.as_deref().is_none_or(|c| year.applies_to(c))
            && self.name.as_deref().is_none_or(|n| year.name == n)
    }
}
