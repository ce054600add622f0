//! Fiscal year error types.

use chrono::NaiveDate;
use hrkit_shared::AppError;
use thiserror::Error;

/// Failures of the backing fiscal year store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be read.
    #[error("Fiscal year store unavailable: {0}")]
    Unavailable(String),

    /// A record was rejected on write.
    #[error("Invalid fiscal year record {name}: {reason}")]
    InvalidRecord {
        /// Record name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors raised while resolving fiscal years.
#[derive(Debug, Error)]
pub enum FiscalError {
    /// No fiscal year matches the requested date, name and company.
    #[error("{}", not_found_message(.date.as_ref().copied(), .name.as_deref(), .company.as_deref()))]
    NotFound {
        /// Date that was checked.
        date: Option<NaiveDate>,
        /// Name that was checked.
        name: Option<String>,
        /// Company the lookup was restricted to.
        company: Option<String>,
    },

    /// A fiscal year ends before it starts.
    #[error("Fiscal Year {name}: end date {end} is before start date {start}")]
    InvalidDateRange {
        /// Fiscal year name.
        name: String,
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn not_found_message(date: Option<NaiveDate>, name: Option<&str>, company: Option<&str>) -> String {
    let mut message = match (date, name) {
        (Some(date), _) => format!("Date {date} is not in any active Fiscal Year"),
        (None, Some(name)) => format!("Fiscal Year {name} is not active or does not exist"),
        (None, None) => "No active Fiscal Year found".to_string(),
    };
    if let Some(company) = company {
        message.push_str(" for ");
        message.push_str(company);
    }
    message
}

impl FiscalError {
    /// Returns true for the not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<FiscalError> for AppError {
    fn from(err: FiscalError) -> Self {
        match err {
            FiscalError::NotFound { .. } => Self::NotFound(err.to_string()),
            FiscalError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
            FiscalError::Store(StoreError::InvalidRecord { .. }) => {
                Self::Validation(err.to_string())
            }
            FiscalError::Store(StoreError::Unavailable(_)) => Self::Internal(err.to_string()),
        }
    }
}
