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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod roster_checks;
mod rules;
mod schedule;
mod score;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use roster_checks::{
    GenderCounts, count_duplicate_names, count_genders, count_non_mutual_partnerships,
    count_unpartnered,
};
pub use rules::{RuleContext, SessionRule};
pub use schedule::session_start;
pub use score::{ScoreCheck, ScoreTarget, check_score};
pub use types::{
    GameFormat, Gender, MatchupPreference, PlayMode, Player, PlayerId, ScoringMode, ScoringRules,
    SessionConfig, Sport, Tiebreak, names_match,
};
pub use validation::{
    Severity, SessionValidator, ValidationCategory, ValidationResult, group_by_category,
    is_session_valid, session_errors, session_warnings, validate_session,
};
