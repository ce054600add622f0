//! Company records: abbreviation, currency and hierarchy rules.

pub mod error;
pub mod rules;
pub mod types;

pub use error::CompanyError;
pub use rules::{
    children_of, derive_abbr, ensure_deletable, name_with_abbr, validate_abbr, validate_company,
    validate_currency_change, validate_parent_company,
};
pub use types::{Company, CompanyChanges, ROOT_COMPANY_LABEL, TreeNode};
