// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The session rule catalog.
//!
//! Each rule is a variant of [`SessionRule`] and inspects the same
//! [`RuleContext`]. A rule reports at most one finding. Rules are independent:
//! where one rule is described as applying "only if" another passed, it
//! restates that condition itself instead of depending on evaluation order.
//!
//! [`SessionRule::ALL`] fixes the evaluation order, which is also the order
//! findings are reported in.

use crate::roster_checks::{
    GenderCounts, count_genders, count_non_mutual_partnerships, count_unpartnered,
};
use crate::schedule::session_start;
use crate::types::{GameFormat, MatchupPreference, PlayMode, Player, SessionConfig, Sport};
use crate::validation::{ValidationCategory, ValidationResult};
use chrono::{DateTime, Utc};

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 60;
const MIN_PLAYERS: i64 = 4;
const PLAYERS_PER_COURT: i64 = 4;

/// Everything a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a SessionConfig,
    pub players: &'a [Player],
    /// Reference instant for the start-time rule.
    pub now: DateTime<Utc>,
    genders: GenderCounts,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn new(config: &'a SessionConfig, players: &'a [Player], now: DateTime<Utc>) -> Self {
        Self {
            config,
            players,
            now,
            genders: count_genders(players),
        }
    }

    fn player_count(&self) -> i64 {
        i64::try_from(self.players.len()).unwrap_or(i64::MAX)
    }

    fn males(&self) -> i64 {
        i64::try_from(self.genders.male).unwrap_or(i64::MAX)
    }

    fn females(&self) -> i64 {
        i64::try_from(self.genders.female).unwrap_or(i64::MAX)
    }

    /// Players needed to fill every court once.
    const fn court_seats(&self, per_court: i64) -> i64 {
        self.config.courts.saturating_mul(per_court)
    }

    fn trimmed_name_len(&self) -> usize {
        self.config.name.trim().chars().count()
    }
}

/// A single session rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionRule {
    NameRequired,
    NameMinLength,
    NameMaxLength,
    GameDateRequired,
    StartInFuture,
    DurationRange,
    MinimumPlayers,
    MixedMexicanoBalanced,
    MixedMexicanoMinimum,
    FixedPartnerEvenCount,
    FixedPartnerAllPartnered,
    FixedPartnerMutual,
    MixedMatchupsBothGenders,
    MixedMatchupsMinimum,
    CourtsRange,
    ParallelCourtsRange,
    ParallelNeedsRotation,
    ParallelMinimumPlayers,
    ParallelMixedMexicanoGenders,
    TennisGameScoring,
    PadelPointsScoring,
    PointsPerMatchRange,
    GamesToWinRange,
    TotalGamesRange,
    PointsPerGameRange,
}

impl SessionRule {
    /// Every rule, in evaluation order.
    pub const ALL: [Self; 25] = [
        Self::NameRequired,
        Self::NameMinLength,
        Self::NameMaxLength,
        Self::GameDateRequired,
        Self::StartInFuture,
        Self::DurationRange,
        Self::MinimumPlayers,
        Self::MixedMexicanoBalanced,
        Self::MixedMexicanoMinimum,
        Self::FixedPartnerEvenCount,
        Self::FixedPartnerAllPartnered,
        Self::FixedPartnerMutual,
        Self::MixedMatchupsBothGenders,
        Self::MixedMatchupsMinimum,
        Self::CourtsRange,
        Self::ParallelCourtsRange,
        Self::ParallelNeedsRotation,
        Self::ParallelMinimumPlayers,
        Self::ParallelMixedMexicanoGenders,
        Self::TennisGameScoring,
        Self::PadelPointsScoring,
        Self::PointsPerMatchRange,
        Self::GamesToWinRange,
        Self::TotalGamesRange,
        Self::PointsPerGameRange,
    ];

    /// Returns the category this rule reports under.
    #[must_use]
    pub const fn category(&self) -> ValidationCategory {
        match self {
            Self::NameRequired
            | Self::NameMinLength
            | Self::NameMaxLength
            | Self::GameDateRequired
            | Self::StartInFuture
            | Self::DurationRange => ValidationCategory::SessionInfo,
            Self::MinimumPlayers => ValidationCategory::Players,
            Self::MixedMexicanoBalanced
            | Self::MixedMexicanoMinimum
            | Self::FixedPartnerEvenCount
            | Self::FixedPartnerAllPartnered
            | Self::FixedPartnerMutual
            | Self::MixedMatchupsBothGenders
            | Self::MixedMatchupsMinimum => ValidationCategory::GameType,
            Self::CourtsRange
            | Self::ParallelCourtsRange
            | Self::ParallelNeedsRotation
            | Self::ParallelMinimumPlayers
            | Self::ParallelMixedMexicanoGenders => ValidationCategory::Courts,
            Self::TennisGameScoring
            | Self::PadelPointsScoring
            | Self::PointsPerMatchRange
            | Self::GamesToWinRange
            | Self::TotalGamesRange
            | Self::PointsPerGameRange => ValidationCategory::Scoring,
        }
    }

    /// Returns the config field this rule points at.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameRequired | Self::NameMinLength | Self::NameMaxLength => "name",
            Self::GameDateRequired | Self::StartInFuture => "game_date",
            Self::DurationRange => "duration_hours",
            Self::MinimumPlayers
            | Self::MixedMexicanoBalanced
            | Self::MixedMexicanoMinimum
            | Self::FixedPartnerEvenCount
            | Self::FixedPartnerAllPartnered
            | Self::FixedPartnerMutual
            | Self::MixedMatchupsBothGenders
            | Self::MixedMatchupsMinimum
            | Self::ParallelNeedsRotation
            | Self::ParallelMinimumPlayers
            | Self::ParallelMixedMexicanoGenders => "players",
            Self::CourtsRange | Self::ParallelCourtsRange => "courts",
            Self::TennisGameScoring | Self::PadelPointsScoring => "scoring_mode",
            Self::PointsPerMatchRange => "points_per_match",
            Self::GamesToWinRange => "games_to_win",
            Self::TotalGamesRange => "total_games",
            Self::PointsPerGameRange => "points_per_game",
        }
    }

    /// Evaluates this rule, returning its finding if the rule is violated.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<ValidationResult> {
        let config: &SessionConfig = ctx.config;
        let genders: &GenderCounts = &ctx.genders;
        let is_mixed_mexicano: bool = config.game_format == GameFormat::MixedMexicano;
        let is_fixed_partner: bool = config.game_format == GameFormat::FixedPartner;
        let is_mixed_only: bool = config.matchup_preference == MatchupPreference::MixedOnly;
        let is_parallel: bool = config.mode == PlayMode::Parallel;

        let message: String = match self {
            Self::NameRequired => {
                if !config.name.trim().is_empty() {
                    return None;
                }
                String::from("Session name is required")
            }
            Self::NameMinLength => {
                if ctx.trimmed_name_len() >= NAME_MIN_CHARS {
                    return None;
                }
                format!("Session name must be at least {NAME_MIN_CHARS} characters")
            }
            Self::NameMaxLength => {
                if ctx.trimmed_name_len() <= NAME_MAX_CHARS {
                    return None;
                }
                format!("Session name must be at most {NAME_MAX_CHARS} characters")
            }
            Self::GameDateRequired => {
                if config
                    .game_date
                    .as_deref()
                    .is_some_and(|date| !date.trim().is_empty())
                {
                    return None;
                }
                String::from("Game date is required")
            }
            Self::StartInFuture => {
                // Unparsable input is not reported here
                let start: DateTime<Utc> = session_start(config)?;
                if start >= ctx.now {
                    return None;
                }
                String::from("Session date and time must be in the future")
            }
            Self::DurationRange => {
                if (0.5..=24.0).contains(&config.duration_hours) {
                    return None;
                }
                String::from("Duration must be between 0.5 and 24 hours")
            }
            Self::MinimumPlayers => {
                if ctx.player_count() >= MIN_PLAYERS {
                    return None;
                }
                format!("At least {MIN_PLAYERS} players are required")
            }
            Self::MixedMexicanoBalanced => {
                if !is_mixed_mexicano || genders.male == genders.female {
                    return None;
                }
                format!(
                    "Mixed Mexicano requires an equal number of males and females. Current: {} males, {} females",
                    genders.male, genders.female
                )
            }
            Self::MixedMexicanoMinimum => {
                if !is_mixed_mexicano
                    || genders.male != genders.female
                    || genders.both_at_least(2)
                {
                    return None;
                }
                String::from("Mixed Mexicano requires at least 2 males and 2 females")
            }
            Self::FixedPartnerEvenCount => {
                if !is_fixed_partner || ctx.players.len() % 2 == 0 {
                    return None;
                }
                String::from("Fixed Partner mode requires an even number of players")
            }
            Self::FixedPartnerAllPartnered => {
                let missing: usize = count_unpartnered(ctx.players);
                if !is_fixed_partner || missing == 0 {
                    return None;
                }
                format!(
                    "Fixed Partner mode requires every player to have a partner. {missing} player(s) missing partners"
                )
            }
            Self::FixedPartnerMutual => {
                if !is_fixed_partner || count_non_mutual_partnerships(ctx.players) == 0 {
                    return None;
                }
                String::from("All partnerships must be mutual")
            }
            Self::MixedMatchupsBothGenders => {
                if !is_mixed_only || genders.both_at_least(1) {
                    return None;
                }
                String::from("Mixed matchups require both male and female players")
            }
            Self::MixedMatchupsMinimum => {
                if !is_mixed_only || !genders.both_at_least(1) || genders.both_at_least(2) {
                    return None;
                }
                String::from("Mixed matchups require at least 2 males and 2 females")
            }
            Self::CourtsRange => {
                if (1..=10).contains(&config.courts) {
                    return None;
                }
                String::from("Courts must be between 1 and 10")
            }
            Self::ParallelCourtsRange => {
                if !is_parallel || (2..=4).contains(&config.courts) {
                    return None;
                }
                String::from("Parallel mode requires 2-4 courts")
            }
            Self::ParallelNeedsRotation => {
                let players: i64 = ctx.player_count();
                if !is_parallel || players != ctx.court_seats(PLAYERS_PER_COURT) {
                    return None;
                }
                format!(
                    "Cannot use parallel mode with exactly {players} players on {} courts. Parallel mode needs extra players to rotate; use Sequential mode instead",
                    config.courts
                )
            }
            Self::ParallelMinimumPlayers => {
                let players: i64 = ctx.player_count();
                let required: i64 = ctx.court_seats(PLAYERS_PER_COURT);
                if !is_parallel || players >= required {
                    return None;
                }
                format!(
                    "Parallel mode with {} courts requires at least {required} players. Current: {players} players",
                    config.courts
                )
            }
            Self::ParallelMixedMexicanoGenders => {
                let required: i64 = ctx.court_seats(2);
                if !is_parallel
                    || !is_mixed_mexicano
                    || (ctx.males() >= required && ctx.females() >= required)
                {
                    return None;
                }
                format!(
                    "Parallel Mixed Mexicano with {} courts needs at least {required} males and {required} females",
                    config.courts
                )
            }
            Self::TennisGameScoring => {
                if config.sport != Sport::Tennis || config.scoring_mode().is_game_based() {
                    return None;
                }
                String::from(
                    "Tennis uses game-based scoring. Choose First To or Total Games scoring",
                )
            }
            Self::PadelPointsScoring => {
                if config.sport != Sport::Padel || !config.scoring_mode().is_game_based() {
                    return None;
                }
                return Some(ValidationResult::warning(
                    self.category(),
                    self.field(),
                    "Padel typically uses points scoring. Game-based scoring is more common in tennis",
                ));
            }
            Self::PointsPerMatchRange => {
                if (1..=100).contains(&config.points_per_match) {
                    return None;
                }
                String::from("Points per match must be between 1 and 100")
            }
            Self::GamesToWinRange => {
                if !set_and_outside(config.scoring.games_to_win(), 1, 10) {
                    return None;
                }
                String::from("Games to win must be between 1 and 10")
            }
            Self::TotalGamesRange => {
                if !set_and_outside(config.scoring.total_games(), 1, 15) {
                    return None;
                }
                String::from("Total games must be between 1 and 15")
            }
            Self::PointsPerGameRange => {
                if !set_and_outside(config.scoring.points_per_game(), 4, 32) {
                    return None;
                }
                String::from("Points per game must be between 4 and 32")
            }
        };

        Some(ValidationResult::error(
            self.category(),
            self.field(),
            message,
        ))
    }
}

/// Returns whether an optional count is set to a nonzero value outside `[min, max]`.
///
/// Zero counts as unset, matching how the session form treats a cleared field.
fn set_and_outside(value: Option<u32>, min: u32, max: u32) -> bool {
    value.is_some_and(|v| v != 0 && !(min..=max).contains(&v))
}
