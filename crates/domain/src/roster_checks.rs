// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only roster metrics shared by the session rules and the roster manager.
//!
//! Everything here is a pure function of a player slice.

use crate::types::{Gender, Player, names_match};
use serde::{Deserialize, Serialize};

/// Player counts per gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
    pub unspecified: usize,
}

impl GenderCounts {
    /// Returns whether both genders reach `minimum`.
    #[must_use]
    pub const fn both_at_least(&self, minimum: usize) -> bool {
        self.male >= minimum && self.female >= minimum
    }
}

/// Counts players by gender.
#[must_use]
pub fn count_genders(players: &[Player]) -> GenderCounts {
    players
        .iter()
        .fold(GenderCounts::default(), |mut counts, player| {
            match player.gender {
                Gender::Male => counts.male += 1,
                Gender::Female => counts.female += 1,
                Gender::Unspecified => counts.unspecified += 1,
            }
            counts
        })
}

/// Counts players without a partner.
#[must_use]
pub fn count_unpartnered(players: &[Player]) -> usize {
    players.iter().filter(|p| p.partner_id.is_none()).count()
}

/// Counts players whose partnership is not mutual.
///
/// A partnership is broken when the partner is missing from the roster, points
/// back at someone else, or is the player itself.
#[must_use]
pub fn count_non_mutual_partnerships(players: &[Player]) -> usize {
    players
        .iter()
        .filter(|player| {
            player.partner_id.is_some_and(|partner_id| {
                partner_id == player.id
                    || !players
                        .iter()
                        .any(|other| other.id == partner_id && other.partner_id == Some(player.id))
            })
        })
        .count()
}

/// Counts players whose name repeats an earlier player's name, ignoring case.
#[must_use]
pub fn count_duplicate_names(players: &[Player]) -> usize {
    players
        .iter()
        .enumerate()
        .filter(|(idx, player)| {
            players[..*idx]
                .iter()
                .any(|earlier| names_match(&earlier.name, &player.name))
        })
        .count()
}
