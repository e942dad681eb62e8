// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod csv_preview;
mod error;
mod handlers;
mod request_response;
mod session_document;

#[cfg(test)]
mod tests;

pub use csv_preview::{CsvRowResult, CsvRowStatus, RosterImportPreview, preview_roster_csv};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{check_match_score, import_roster, validate_document};
pub use request_response::{
    RosterImportResponse, ScoreCheckRequest, ScoreCheckResponse, ValidationReport,
};
pub use session_document::SessionDocument;
