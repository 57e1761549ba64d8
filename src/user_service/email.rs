//! Email acceptance rules.

use crate::user_service::EmailError;
use serde::{Deserialize, Serialize};

/// How strictly `create_user` checks email addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailPolicy {
    /// An @ must separate a non-empty local part from a non-empty domain.
    #[default]
    Strict,
    /// Any non-empty string is accepted. Only for data that predates the
    /// strict rule.
    NonEmpty,
}

impl EmailPolicy {
    /// Checks `email` against this policy.
    ///
    /// # Errors
    ///
    /// Returns the first rule the input breaks.
    pub fn check(self, email: &str) -> Result<(), EmailError> {
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        match self {
            EmailPolicy::NonEmpty => Ok(()),
            EmailPolicy::Strict => {
                let (local, domain) = email.split_once('@').ok_or(EmailError::MissingAtSymbol)?;
                if local.is_empty() {
                    return Err(EmailError::EmptyLocalPart);
                }
                if domain.is_empty() {
                    return Err(EmailError::EmptyDomain);
                }
                Ok(())
            }
        }
    }
}
