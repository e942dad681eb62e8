// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Legality check for a single recorded match score.
//!
//! ## Fixed-target modes
//!
//! `first_to_15` and `first_to_21` play to a target with a two-point margin
//! once the target is passed (deuce). Any other mode tag is open-ended and
//! accepts every non-negative score that is not 0-0.
//!
//! A score that ties exactly at the target (e.g. 15-15) is accepted because
//! the target check only looks at the higher score.

use serde::{Deserialize, Serialize};

/// A scoring mode with a fixed points target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTarget {
    FirstTo15,
    FirstTo21,
}

impl ScoreTarget {
    /// Parses a mode tag. Returns `None` for open-ended or unknown modes.
    #[must_use]
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "first_to_15" => Some(Self::FirstTo15),
            "first_to_21" => Some(Self::FirstTo21),
            _ => None,
        }
    }

    /// Returns the points the winning team must reach.
    #[must_use]
    pub const fn points(&self) -> i64 {
        match self {
            Self::FirstTo15 => 15,
            Self::FirstTo21 => 21,
        }
    }

    /// Converts this target to its mode tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTo15 => "first_to_15",
            Self::FirstTo21 => "first_to_21",
        }
    }
}

/// Outcome of a score check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCheck {
    pub valid: bool,
    pub error: Option<String>,
}

impl ScoreCheck {
    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }
}

/// Checks whether a match score is legal under a scoring mode.
///
/// # Arguments
///
/// * `score1` - Points for the first team
/// * `score2` - Points for the second team
/// * `mode` - The mode tag, e.g. `first_to_21`
///
/// # Returns
///
/// A [`ScoreCheck`] carrying the first failed condition, if any.
#[must_use]
pub fn check_score(score1: i64, score2: i64, mode: &str) -> ScoreCheck {
    if score1 < 0 || score2 < 0 {
        return ScoreCheck::rejected("Scores cannot be negative");
    }

    if score1 == 0 && score2 == 0 {
        return ScoreCheck::rejected("At least one team must score");
    }

    let Some(target) = ScoreTarget::parse(mode) else {
        return ScoreCheck::accepted();
    };

    let target: i64 = target.points();
    let hi: i64 = score1.max(score2);
    let lo: i64 = score1.min(score2);

    if hi < target {
        return ScoreCheck::rejected(format!(
            "Winning team must reach at least {target} points"
        ));
    }

    // Past the target the game goes to deuce
    if hi > target && hi - lo < 2 {
        return ScoreCheck::rejected("Must win by 2 points");
    }

    if hi > target * 2 {
        return ScoreCheck::rejected("Score seems too high");
    }

    ScoreCheck::accepted()
}
