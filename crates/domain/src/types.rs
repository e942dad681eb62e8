// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The racket sport a session is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    #[default]
    Padel,
    Tennis,
}

impl Sport {
    /// Converts this sport to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Padel => "padel",
            Self::Tennis => "tennis",
        }
    }
}

impl FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "padel" => Ok(Self::Padel),
            "tennis" => Ok(Self::Tennis),
            _ => Err(DomainError::InvalidOption {
                field: "sport",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How players are rotated into matches over the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameFormat {
    /// Partners are re-drawn each round from the standings.
    #[default]
    Mexicano,
    /// Everyone partners everyone once.
    Americano,
    /// Partnerships are fixed for the whole session.
    FixedPartner,
    /// Mexicano where every team is one male and one female.
    MixedMexicano,
}

impl GameFormat {
    /// Converts this format to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mexicano => "mexicano",
            Self::Americano => "americano",
            Self::FixedPartner => "fixed_partner",
            Self::MixedMexicano => "mixed_mexicano",
        }
    }
}

impl FromStr for GameFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mexicano" => Ok(Self::Mexicano),
            "americano" => Ok(Self::Americano),
            "fixed_partner" => Ok(Self::FixedPartner),
            "mixed_mexicano" => Ok(Self::MixedMexicano),
            _ => Err(DomainError::InvalidOption {
                field: "game format",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for GameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether courts play one round at a time or independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// All courts start and finish a round together.
    #[default]
    Sequential,
    /// Each court rotates on its own as soon as its match ends.
    Parallel,
}

impl PlayMode {
    /// Converts this mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl FromStr for PlayMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(DomainError::InvalidOption {
                field: "mode",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The scoring mode tag. The mode-specific settings live in [`ScoringRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Points,
    FirstTo,
    TotalGames,
}

impl ScoringMode {
    /// Converts this scoring mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::FirstTo => "first_to",
            Self::TotalGames => "total_games",
        }
    }

    /// Returns whether matches are scored in games rather than rally points.
    #[must_use]
    pub const fn is_game_based(&self) -> bool {
        matches!(self, Self::FirstTo | Self::TotalGames)
    }
}

impl FromStr for ScoringMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "first_to" => Ok(Self::FirstTo),
            "total_games" => Ok(Self::TotalGames),
            _ => Err(DomainError::InvalidOption {
                field: "scoring mode",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Preference for the gender make-up of generated matchups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchupPreference {
    #[default]
    Any,
    MixedOnly,
    RandomizedModes,
}

impl MatchupPreference {
    /// Converts this preference to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::MixedOnly => "mixed_only",
            Self::RandomizedModes => "randomized_modes",
        }
    }
}

impl FromStr for MatchupPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "mixed_only" => Ok(Self::MixedOnly),
            "randomized_modes" => Ok(Self::RandomizedModes),
            _ => Err(DomainError::InvalidOption {
                field: "matchup preference",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MatchupPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tiebreak settings for game-based scoring. Carried through unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiebreak {
    pub enabled: bool,
    pub points: Option<u32>,
}

/// Scoring settings, keyed by scoring mode.
///
/// Only the game-based modes carry extra settings. A value of `Some(0)` in
/// any of the optional counts is treated as unset by the session rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scoring_mode", rename_all = "snake_case")]
pub enum ScoringRules {
    /// Rally points; the match total comes from `points_per_match`.
    Points,
    /// First team to win a number of games.
    FirstTo {
        games_to_win: Option<u32>,
        points_per_game: Option<u32>,
        win_margin: Option<u32>,
        tiebreak: Option<Tiebreak>,
    },
    /// A fixed number of games is played.
    TotalGames {
        total_games: Option<u32>,
        points_per_game: Option<u32>,
        win_margin: Option<u32>,
        tiebreak: Option<Tiebreak>,
    },
}

impl ScoringRules {
    /// Returns the scoring mode tag for these rules.
    #[must_use]
    pub const fn mode(&self) -> ScoringMode {
        match self {
            Self::Points => ScoringMode::Points,
            Self::FirstTo { .. } => ScoringMode::FirstTo,
            Self::TotalGames { .. } => ScoringMode::TotalGames,
        }
    }

    #[must_use]
    pub const fn games_to_win(&self) -> Option<u32> {
        match self {
            Self::FirstTo { games_to_win, .. } => *games_to_win,
            Self::Points | Self::TotalGames { .. } => None,
        }
    }

    #[must_use]
    pub const fn total_games(&self) -> Option<u32> {
        match self {
            Self::TotalGames { total_games, .. } => *total_games,
            Self::Points | Self::FirstTo { .. } => None,
        }
    }

    #[must_use]
    pub const fn points_per_game(&self) -> Option<u32> {
        match self {
            Self::FirstTo {
                points_per_game, ..
            }
            | Self::TotalGames {
                points_per_game, ..
            } => *points_per_game,
            Self::Points => None,
        }
    }
}

fn default_timezone() -> String {
    String::from("UTC")
}

/// A tournament session configuration as entered by the organiser.
///
/// This is an immutable snapshot; validation reads it and never changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub name: String,
    pub sport: Sport,
    pub game_format: GameFormat,
    pub mode: PlayMode,
    #[serde(flatten)]
    pub scoring: ScoringRules,
    /// Signed so that negative input is reported by validation rather than
    /// rejected while parsing.
    pub courts: i64,
    pub points_per_match: i64,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub game_date: Option<String>,
    /// Wall-clock start time, `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub game_time: Option<String>,
    pub duration_hours: f64,
    #[serde(default)]
    pub matchup_preference: MatchupPreference,
    /// IANA timezone the date and time are expressed in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl SessionConfig {
    /// Returns the scoring mode tag.
    #[must_use]
    pub const fn scoring_mode(&self) -> ScoringMode {
        self.scoring.mode()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            sport: Sport::Padel,
            game_format: GameFormat::Mexicano,
            mode: PlayMode::Sequential,
            scoring: ScoringRules::Points,
            courts: 1,
            points_per_match: 21,
            game_date: None,
            game_time: None,
            duration_hours: 2.0,
            matchup_preference: MatchupPreference::Any,
            timezone: default_timezone(),
        }
    }
}

/// A player's gender, used only for mixed-format balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Converts this gender to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "unspecified" => Ok(Self::Unspecified),
            _ => Err(DomainError::InvalidOption {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque player identifier. Only the roster manager mints these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player on a session roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    /// The player's partner, if any. Always mutual within a roster.
    #[serde(default)]
    pub partner_id: Option<PlayerId>,
}

impl Player {
    /// Creates a new unpartnered `Player`.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier minted for this player
    /// * `name` - The display name (stored as given)
    /// * `gender` - The player's gender
    #[must_use]
    pub fn new(id: PlayerId, name: &str, gender: Gender) -> Self {
        Self {
            id,
            name: name.to_string(),
            gender,
            partner_id: None,
        }
    }

    /// Returns this player with `partner_id` set.
    #[must_use]
    pub const fn with_partner(mut self, partner_id: PlayerId) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    #[must_use]
    pub const fn is_partnered(&self) -> bool {
        self.partner_id.is_some()
    }

    /// Compares this player's name against `name`, ignoring case.
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Case-insensitive name comparison used for roster uniqueness.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
