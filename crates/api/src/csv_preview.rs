// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for bulk roster import.
//!
//! Rows are checked without touching any roster. Only rows that pass are
//! handed on to the roster manager, which keeps duplicate names out of an
//! import even though the import command itself accepts them.

use courtside::ImportedPlayer;
use courtside_domain::Gender;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::ApiError;

/// A single row result from CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The trimmed name, if present.
    pub name: Option<String>,
    /// The parsed gender, if the column was present and valid.
    pub gender: Option<Gender>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterImportPreview {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

impl RosterImportPreview {
    /// Returns the valid rows as import records, in file order.
    #[must_use]
    pub fn import_records(&self) -> Vec<ImportedPlayer> {
        self.rows
            .iter()
            .filter(|row| row.status == CsvRowStatus::Valid)
            .filter_map(|row| {
                row.name
                    .as_deref()
                    .map(|name| ImportedPlayer::new(name, row.gender))
            })
            .collect()
    }
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["name"];

const GENDER_HEADER: &str = "gender";

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Checks one row. Names already seen earlier in the file are rejected.
fn check_row(
    row_number: usize,
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    seen_names: &mut HashSet<String>,
) -> CsvRowResult {
    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut errors: Vec<String> = Vec::new();

    let name: Option<String> = get_field("name");
    match &name {
        None => errors.push(String::from("name: required field is missing or empty")),
        Some(name) => {
            if !seen_names.insert(name.to_lowercase()) {
                errors.push(format!(
                    "name: duplicate within CSV - '{name}' appears multiple times"
                ));
            }
        }
    }

    let gender: Option<Gender> =
        get_field(GENDER_HEADER).and_then(|value| match value.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(_) => {
                errors.push(format!(
                    "gender: invalid value '{value}' (must be male, female, or unspecified)"
                ));
                None
            }
        });

    let status: CsvRowStatus = if errors.is_empty() {
        CsvRowStatus::Valid
    } else {
        CsvRowStatus::Invalid
    };

    CsvRowResult {
        row_number,
        name,
        gender,
        status,
        errors,
    }
}

/// Previews and validates roster CSV data without importing it.
///
/// The CSV must have a `name` column; a `gender` column is optional.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
///
/// # Returns
///
/// * `Ok(RosterImportPreview)` with per-row validation results
/// * `Err(ApiError)` if CSV format is invalid or cannot be parsed
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the header row cannot be read or
/// lacks a required column.
pub fn preview_roster_csv(csv_content: &str) -> Result<RosterImportPreview, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut rows: Vec<CsvRowResult> = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let row: CsvRowResult = match result {
            Ok(record) => check_row(row_number, &record, &header_map, &mut seen_names),
            Err(e) => CsvRowResult {
                row_number,
                name: None,
                gender: None,
                status: CsvRowStatus::Invalid,
                errors: vec![format!("CSV parse error: {e}")],
            },
        };
        rows.push(row);
    }

    let total_rows: usize = rows.len();
    let valid_count: usize = rows
        .iter()
        .filter(|r| r.status == CsvRowStatus::Valid)
        .count();

    tracing::debug!(total_rows, valid_count, "Previewed roster CSV");

    Ok(RosterImportPreview {
        rows,
        total_rows,
        valid_count,
        invalid_count: total_rows - valid_count,
    })
}
