//! Period list error types.

use chrono::NaiveDate;
use hrkit_shared::AppError;
use thiserror::Error;

use super::types::FilterBasedOn;
use crate::fiscal::FiscalError;

/// Errors that abort period list generation.
#[derive(Debug, Error)]
pub enum PeriodError {
    /// A span boundary is absent.
    #[error("{}", .basis.missing_range_message())]
    MissingDateRange {
        /// Which boundaries were expected.
        basis: FilterBasedOn,
    },

    /// The span ends before it starts.
    #[error("{}", .basis.inverted_range_message())]
    InvalidDateRange {
        /// Which boundaries were compared.
        basis: FilterBasedOn,
        /// Span start.
        start: NaiveDate,
        /// Span end.
        end: NaiveDate,
    },

    /// Per-period fiscal year resolution failed.
    #[error(transparent)]
    Fiscal(#[from] FiscalError),
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        match err {
            PeriodError::Fiscal(inner) => inner.into(),
            PeriodError::MissingDateRange { .. } | PeriodError::InvalidDateRange { .. } => {
                Self::Validation(err.to_string())
            }
        }
    }
}
