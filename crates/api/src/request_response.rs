// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use courtside_domain::{Player, ScoreCheck, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::csv_preview::RosterImportPreview;

/// The outcome of validating a session document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when there are no errors. Warnings do not block.
    pub valid: bool,
    /// The instant the start time was compared against (RFC 3339).
    pub checked_at: String,
    /// Error findings, in rule order.
    pub errors: Vec<ValidationResult>,
    /// Warning findings, in rule order.
    pub warnings: Vec<ValidationResult>,
    /// Every finding keyed by category name; all five categories are present.
    pub by_category: BTreeMap<String, Vec<ValidationResult>>,
}

impl ValidationReport {
    /// Returns the error messages only.
    #[must_use]
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// API request to check a recorded match score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCheckRequest {
    pub score1: i64,
    pub score2: i64,
    /// Scoring mode tag, e.g. `first_to_21`. Unknown tags accept any score.
    pub mode: String,
}

/// API response for a score check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCheckResponse {
    pub score1: i64,
    pub score2: i64,
    pub mode: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreCheckResponse {
    #[must_use]
    pub fn new(request: ScoreCheckRequest, check: ScoreCheck) -> Self {
        Self {
            score1: request.score1,
            score2: request.score2,
            mode: request.mode,
            valid: check.valid,
            error: check.error,
        }
    }
}

/// API response for a roster import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterImportResponse {
    /// Per-row results of reading the CSV.
    pub preview: RosterImportPreview,
    /// The roster after loading the valid rows.
    pub players: Vec<Player>,
    /// A success message.
    pub message: String,
}
