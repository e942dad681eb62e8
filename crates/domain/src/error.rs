// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by roster edits and value parsing.
///
/// Session validation never produces these; its findings are returned as
/// [`crate::ValidationResult`] values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One of the names in a pair is blank after trimming.
    MissingName,
    /// A name collides case-insensitively with another player.
    DuplicateName {
        /// The trimmed name that was rejected.
        name: String,
    },
    /// A string could not be parsed into one of the option enums.
    InvalidOption {
        /// The option being parsed (e.g. "sport", "gender").
        field: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "Both player names are required"),
            Self::DuplicateName { name } => {
                write!(f, "A player named '{name}' already exists")
            }
            Self::InvalidOption { field, value } => {
                write!(f, "Invalid {field}: '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
