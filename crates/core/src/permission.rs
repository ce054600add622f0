//! Short leave-of-absence ("permission") requests.

use chrono::NaiveDateTime;
use hrkit_shared::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::Clock;

/// Permission request validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermissionError {
    /// Return time precedes departure.
    #[error("The date and time of arriving cannot be before the date and time of leaving.")]
    ArrivingBeforeLeaving {
        /// Departure.
        leaving_at: NaiveDateTime,
        /// Return.
        arriving_at: NaiveDateTime,
    },

    /// Departure falls on a day before today.
    #[error("the date can't be in the past.")]
    LeavingInPast {
        /// Departure.
        leaving_at: NaiveDateTime,
    },
}

impl From<PermissionError> for AppError {
    fn from(err: PermissionError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// An employee's request to step out between two points in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionApplication {
    /// Employee id.
    pub employee: String,
    /// When the employee leaves.
    pub leaving_at: NaiveDateTime,
    /// When the employee is back.
    pub arriving_at: NaiveDateTime,
}

impl PermissionApplication {
    /// Checks ordering and that the departure day is not in the past.
    ///
    /// Leaving earlier today is allowed; only the calendar day is compared
    /// against `clock`.
    ///
    /// # Errors
    ///
    /// [`PermissionError::ArrivingBeforeLeaving`] is checked first, then
    /// [`PermissionError::LeavingInPast`].
    pub fn validate(&self, clock: &impl Clock) -> Result<(), PermissionError> {
        if self.arriving_at < self.leaving_at {
            return Err(PermissionError::ArrivingBeforeLeaving {
                leaving_at: self.leaving_at,
                arriving_at: self.arriving_at,
            });
        }

        if self.leaving_at.date() < clock.today() {
            return Err(PermissionError::LeavingInPast {
                leaving_at: self.leaving_at,
            });
        }

        Ok(())
    }
}
