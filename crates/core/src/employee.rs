//! Employee contact details.

use serde::{Deserialize, Serialize};

/// The email addresses stored on an employee record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeContacts {
    /// Address the employee chose for correspondence.
    #[serde(default)]
    pub preferred_email: Option<String>,
    /// Login user id, which is an email address.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Work address.
    #[serde(default)]
    pub company_email: Option<String>,
    /// Private address.
    #[serde(default)]
    pub personal_email: Option<String>,
}

impl EmployeeContacts {
    /// Returns the address to notify: preferred, then user id, then
    /// company, then personal. Empty values are skipped; values are
    /// returned as stored.
    #[must_use]
    pub fn preferred_email(&self) -> Option<&str> {
        [
            &self.preferred_email,
            &self.user_id,
            &self.company_email,
            &self.personal_email,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|email| !email.is_empty())
    }
}
