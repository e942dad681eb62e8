// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entry points that turn documents and requests into responses.

use chrono::{DateTime, SecondsFormat, Utc};
use courtside::RosterManager;
use courtside_domain::{
    PlayerId, ScoreCheck, SessionValidator, ValidationCategory, ValidationResult, check_score,
    group_by_category,
};
use std::collections::BTreeMap;
use tracing::info;

use crate::csv_preview::{RosterImportPreview, preview_roster_csv};
use crate::error::ApiError;
use crate::request_response::{
    RosterImportResponse, ScoreCheckRequest, ScoreCheckResponse, ValidationReport,
};
use crate::session_document::SessionDocument;

/// Validates a session document as of `now`.
///
/// Validation never fails; every problem is reported in the returned report.
#[must_use]
pub fn validate_document(document: &SessionDocument, now: DateTime<Utc>) -> ValidationReport {
    let results: Vec<ValidationResult> =
        SessionValidator::at(now).validate(&document.config, &document.players);

    let by_category: BTreeMap<String, Vec<ValidationResult>> = group_by_category(&results)
        .into_iter()
        .map(|(category, findings): (ValidationCategory, Vec<ValidationResult>)| {
            (category.as_str().to_string(), findings)
        })
        .collect();

    let (errors, warnings): (Vec<ValidationResult>, Vec<ValidationResult>) =
        results.into_iter().partition(ValidationResult::is_error);

    info!(
        session = %document.config.name,
        players = document.players.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "Validated session"
    );

    ValidationReport {
        valid: errors.is_empty(),
        checked_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        errors,
        warnings,
        by_category,
    }
}

/// Checks one recorded match score.
#[must_use]
pub fn check_match_score(request: ScoreCheckRequest) -> ScoreCheckResponse {
    let check: ScoreCheck = check_score(request.score1, request.score2, &request.mode);
    if let Some(reason) = &check.error {
        info!(
            score1 = request.score1,
            score2 = request.score2,
            mode = %request.mode,
            reason = %reason,
            "Rejected score"
        );
    }
    ScoreCheckResponse::new(request, check)
}

/// Previews a roster CSV and loads its valid rows into `manager`,
/// replacing the current roster.
///
/// Invalid rows are reported in the preview and left out of the roster.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the CSV cannot be read; the
/// roster is left untouched.
pub fn import_roster(
    manager: &mut RosterManager,
    csv_content: &str,
) -> Result<RosterImportResponse, ApiError> {
    let preview: RosterImportPreview = preview_roster_csv(csv_content)?;
    let ids: Vec<PlayerId> = manager.set_players_from_import(preview.import_records());

    let message: String = format!(
        "Imported {} of {} player(s)",
        ids.len(),
        preview.total_rows
    );
    info!(
        imported = ids.len(),
        rejected = preview.invalid_count,
        "Imported roster CSV"
    );

    Ok(RosterImportResponse {
        players: manager.roster().players().to_vec(),
        preview,
        message,
    })
}
