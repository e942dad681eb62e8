// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rules::{RuleContext, SessionRule};
use crate::types::{Player, SessionConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How serious a finding is. Only errors block a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// The section of the session form a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCategory {
    SessionInfo,
    Players,
    Courts,
    Scoring,
    GameType,
}

impl ValidationCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::SessionInfo,
        Self::Players,
        Self::Courts,
        Self::Scoring,
        Self::GameType,
    ];

    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SessionInfo => "session_info",
            Self::Players => "players",
            Self::Courts => "courts",
            Self::Scoring => "scoring",
            Self::GameType => "game_type",
        }
    }
}

/// A single problem reported by a session rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub severity: Severity,
    pub message: String,
    pub category: ValidationCategory,
    /// The config field the finding points at, if any.
    pub field: Option<String>,
}

impl ValidationResult {
    /// Creates an error finding.
    #[must_use]
    pub fn error(category: ValidationCategory, field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            category,
            field: Some(field.to_string()),
        }
    }

    /// Creates a warning finding.
    #[must_use]
    pub fn warning(category: ValidationCategory, field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            category,
            field: Some(field.to_string()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Runs the session rule catalog against a config and roster.
///
/// The validator is pure apart from the reference instant used by the
/// start-time rule, which is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct SessionValidator {
    now: DateTime<Utc>,
}

impl SessionValidator {
    /// Creates a validator that compares start times against the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self { now: Utc::now() }
    }

    /// Creates a validator that compares start times against `now`.
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Runs every rule and returns all findings in catalog order.
    ///
    /// No rule short-circuits another; a config with several problems reports
    /// all of them.
    ///
    /// # Arguments
    ///
    /// * `config` - The session configuration
    /// * `players` - The current roster snapshot
    #[must_use]
    pub fn validate(&self, config: &SessionConfig, players: &[Player]) -> Vec<ValidationResult> {
        let ctx: RuleContext<'_> = RuleContext::new(config, players, self.now);
        SessionRule::ALL
            .iter()
            .filter_map(|rule| rule.evaluate(&ctx))
            .collect()
    }

    /// Returns only the error findings.
    #[must_use]
    pub fn errors(&self, config: &SessionConfig, players: &[Player]) -> Vec<ValidationResult> {
        self.validate(config, players)
            .into_iter()
            .filter(ValidationResult::is_error)
            .collect()
    }

    /// Returns only the warning findings.
    #[must_use]
    pub fn warnings(&self, config: &SessionConfig, players: &[Player]) -> Vec<ValidationResult> {
        self.validate(config, players)
            .into_iter()
            .filter(ValidationResult::is_warning)
            .collect()
    }

    /// Returns whether the session has no errors. Warnings never block.
    #[must_use]
    pub fn is_valid(&self, config: &SessionConfig, players: &[Player]) -> bool {
        self.errors(config, players).is_empty()
    }
}

impl Default for SessionValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a session against the current instant.
#[must_use]
pub fn validate_session(config: &SessionConfig, players: &[Player]) -> Vec<ValidationResult> {
    SessionValidator::new().validate(config, players)
}

/// Returns the error findings for a session, evaluated now.
#[must_use]
pub fn session_errors(config: &SessionConfig, players: &[Player]) -> Vec<ValidationResult> {
    SessionValidator::new().errors(config, players)
}

/// Returns the warning findings for a session, evaluated now.
#[must_use]
pub fn session_warnings(config: &SessionConfig, players: &[Player]) -> Vec<ValidationResult> {
    SessionValidator::new().warnings(config, players)
}

/// Returns whether a session has no errors, evaluated now.
#[must_use]
pub fn is_session_valid(config: &SessionConfig, players: &[Player]) -> bool {
    SessionValidator::new().is_valid(config, players)
}

/// Groups findings by category.
///
/// Every category is present in the result, mapped to an empty vector when it
/// has no findings. Relative order within a category is preserved.
#[must_use]
pub fn group_by_category(
    results: &[ValidationResult],
) -> BTreeMap<ValidationCategory, Vec<ValidationResult>> {
    let mut grouped: BTreeMap<ValidationCategory, Vec<ValidationResult>> = ValidationCategory::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for result in results {
        grouped
            .entry(result.category)
            .or_default()
            .push(result.clone());
    }

    grouped
}
