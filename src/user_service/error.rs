//! Error types for the User service.

use crate::model::UserId;
use thiserror::Error;

/// Reasons an email address is rejected under the strict policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,

    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,

    /// The local part (before @) is empty.
    #[error("email local part cannot be empty")]
    EmptyLocalPart,

    /// The domain part (after @) is empty.
    #[error("email domain cannot be empty")]
    EmptyDomain,
}

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// The name is empty.
    #[error("User validation error: name cannot be empty")]
    InvalidName,

    /// The email failed validation.
    #[error("User validation error: {0}")]
    InvalidEmail(#[from] EmailError),
}
