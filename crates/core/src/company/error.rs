//! Company error types.

use hrkit_shared::AppError;
use thiserror::Error;

/// Company validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompanyError {
    /// Abbreviation blank after derivation.
    #[error("Abbreviation is mandatory")]
    AbbreviationMandatory,

    /// Another company already uses the abbreviation.
    #[error("Abbreviation already used for another company")]
    AbbreviationInUse {
        /// The conflicting abbreviation.
        abbr: String,
    },

    /// Default currency changed on an existing company.
    #[error(
        "Cannot change company's default currency, because there are existing transactions. \
         Transactions must be cancelled to change the default currency."
    )]
    CurrencyLocked {
        /// Currency on record.
        previous: String,
        /// Requested currency.
        requested: String,
    },

    /// Parent is missing or not a group company.
    #[error("Parent Company must be a group company")]
    ParentNotGroup {
        /// Parent name.
        parent: String,
    },

    /// Company still has child companies.
    #[error("Cannot delete {name} because child companies exist")]
    HasChildren {
        /// Company name.
        name: String,
    },
}

impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::AbbreviationMandatory => Self::Validation(err.to_string()),
            _ => Self::BusinessRule(err.to_string()),
        }
    }
}
