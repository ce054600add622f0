//! Company save-time validation and naming helpers.
//!
//! All checks operate on a snapshot of the company directory; callers
//! are responsible for persisting the result and acting on the returned
//! [`CompanyChanges`].

use tracing::debug;

use super::error::CompanyError;
use super::types::{Company, CompanyChanges, ROOT_COMPANY_LABEL, TreeNode};

const NAME_SEPARATOR: &str = " - ";

/// Builds an abbreviation from the first letter of each word, uppercased.
///
/// `"Acme Widgets ltd"` becomes `"AWL"`.
#[must_use]
pub fn derive_abbr(company_name: &str) -> String {
    company_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalises `company.abbr` and checks it is present and unique.
///
/// A blank abbreviation is derived from `company_name` first.
///
/// # Errors
///
/// [`CompanyError::AbbreviationMandatory`] when nothing remains after
/// trimming, [`CompanyError::AbbreviationInUse`] when another company in
/// `directory` carries the same abbreviation.
pub fn validate_abbr(company: &mut Company, directory: &[Company]) -> Result<(), CompanyError> {
    let current = company.abbr.as_deref().map_or("", str::trim);
    let abbr = if current.is_empty() {
        derive_abbr(&company.company_name)
    } else {
        current.to_string()
    };
    let abbr = abbr.trim().to_string();

    if abbr.is_empty() {
        return Err(CompanyError::AbbreviationMandatory);
    }

    let taken = directory.iter().any(|other| {
        other.name != company.name && other.abbr.as_deref() == Some(abbr.as_str())
    });
    if taken {
        return Err(CompanyError::AbbreviationInUse { abbr });
    }

    company.abbr = Some(abbr);
    Ok(())
}

/// Rejects a default-currency change on an already saved company.
///
/// # Errors
///
/// [`CompanyError::CurrencyLocked`] when both the stored and requested
/// currencies are set and differ.
pub fn validate_currency_change(
    company: &Company,
    previous: Option<&Company>,
) -> Result<(), CompanyError> {
    let Some(previous) = previous else {
        return Ok(());
    };

    match (&previous.default_currency, &company.default_currency) {
        (Some(stored), Some(requested)) if stored != requested => {
            Err(CompanyError::CurrencyLocked {
                previous: stored.clone(),
                requested: requested.clone(),
            })
        }
        _ => Ok(()),
    }
}

/// Checks the parent company, if any, is a group company.
///
/// An unknown parent is treated the same as a non-group one.
///
/// # Errors
///
/// [`CompanyError::ParentNotGroup`].
pub fn validate_parent_company(
    company: &Company,
    directory: &[Company],
) -> Result<(), CompanyError> {
    let Some(parent) = company.parent_company.as_deref().filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    let is_group = directory
        .iter()
        .find(|c| c.name == parent)
        .is_some_and(|c| c.is_group);

    if is_group {
        Ok(())
    } else {
        Err(CompanyError::ParentNotGroup {
            parent: parent.to_string(),
        })
    }
}

/// Runs every save-time check and reports what changed.
///
/// `previous` is the stored version of the company, `None` on insert;
/// inserts never report changes.
///
/// # Errors
///
/// The first failing check's [`CompanyError`].
pub fn validate_company(
    company: &mut Company,
    previous: Option<&Company>,
    directory: &[Company],
) -> Result<CompanyChanges, CompanyError> {
    validate_abbr(company, directory)?;
    validate_currency_change(company, previous)?;
    validate_parent_company(company, directory)?;

    // New companies report no changes.
    let changes = previous.map_or_else(CompanyChanges::default, |previous| CompanyChanges {
        parent_company_changed: previous.parent_company != company.parent_company,
        country_changed: previous.country != company.country,
    });

    debug!(company = %company.name, ?changes, "company validated");
    Ok(changes)
}

/// Rejects deletion of a company that still has children.
///
/// # Errors
///
/// [`CompanyError::HasChildren`].
pub fn ensure_deletable(company: &Company, directory: &[Company]) -> Result<(), CompanyError> {
    let has_children = directory
        .iter()
        .any(|c| c.parent_company.as_deref() == Some(company.name.as_str()));

    if has_children {
        Err(CompanyError::HasChildren {
            name: company.name.clone(),
        })
    } else {
        Ok(())
    }
}

/// Appends `" - ABBR"` to `name` unless its last segment already is the
/// abbreviation (compared case-insensitively).
#[must_use]
pub fn name_with_abbr(name: &str, abbr: &str) -> String {
    let last = name.rsplit(NAME_SEPARATOR).next().unwrap_or(name);

    if last.to_lowercase() == abbr.to_lowercase() {
        name.to_string()
    } else {
        format!("{name}{NAME_SEPARATOR}{abbr}")
    }
}

/// Lists the direct children of `parent` for tree browsing.
///
/// `None`, an empty string or [`ROOT_COMPANY_LABEL`] select top-level
/// companies.
#[must_use]
pub fn children_of(companies: &[Company], parent: Option<&str>) -> Vec<TreeNode> {
    let parent = parent.filter(|p| !p.is_empty() && *p != ROOT_COMPANY_LABEL);

    companies
        .iter()
        .filter(|c| {
            let own = c.parent_company.as_deref().filter(|p| !p.is_empty());
            own == parent
        })
        .map(|c| TreeNode {
            value: c.name.clone(),
            expandable: c.is_group,
        })
        .collect()
}
