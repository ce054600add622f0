//! Company data types.

use serde::{Deserialize, Serialize};

/// Root label shown above top-level companies in tree views.
pub const ROOT_COMPANY_LABEL: &str = "All Companies";

/// A company node in the organisation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique record name.
    pub name: String,
    /// Display name the abbreviation is derived from.
    pub company_name: String,
    /// Short code appended to names of company-owned records.
    #[serde(default)]
    pub abbr: Option<String>,
    /// Group companies may have child companies.
    #[serde(default)]
    pub is_group: bool,
    /// Parent company name; `None` for top-level companies.
    #[serde(default)]
    pub parent_company: Option<String>,
    /// Default currency code.
    #[serde(default)]
    pub default_currency: Option<String>,
    /// Country of registration.
    #[serde(default)]
    pub country: Option<String>,
}

impl Company {
    /// Creates a top-level, non-group company named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            company_name: name.clone(),
            name,
            abbr: None,
            is_group: false,
            parent_company: None,
            default_currency: None,
            country: None,
        }
    }

    /// Sets the abbreviation.
    #[must_use]
    pub fn with_abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }

    /// Marks the company as a group.
    #[must_use]
    pub fn as_group(mut self) -> Self {
        self.is_group = true;
        self
    }

    /// Sets the parent company.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_company = Some(parent.into());
        self
    }

    /// Sets the default currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = Some(currency.into());
        self
    }

    /// Sets the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Side effects the caller must apply after a successful save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompanyChanges {
    /// The parent moved; the company tree needs rebuilding.
    pub parent_company_changed: bool,
    /// The country changed; regional fixtures need installing.
    pub country_changed: bool,
}

/// One entry of a tree-browse listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Company name.
    pub value: String,
    /// Whether the node can be expanded (group companies).
    pub expandable: bool,
}
