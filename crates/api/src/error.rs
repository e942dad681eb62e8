// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use courtside::CoreError;
use courtside_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A session document could not be read.
    #[error("Invalid session document: {reason}")]
    InvalidDocument {
        /// Why the document was rejected.
        reason: String,
    },
    /// A roster CSV could not be read as a whole.
    #[error("Invalid CSV format: {reason}")]
    InvalidCsvFormat {
        /// Why the CSV was rejected.
        reason: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingName => ApiError::InvalidInput {
            field: String::from("name"),
            message: err.to_string(),
        },
        DomainError::DuplicateName { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_player_name"),
            message: err.to_string(),
        },
        DomainError::InvalidOption { field, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}
