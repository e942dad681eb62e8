// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::{Gender, PlayerId};
use serde::{Deserialize, Serialize};

pub(crate) const ADD_PLAYER: &str = "AddPlayer";
pub(crate) const ADD_PAIR: &str = "AddPair";
pub(crate) const REMOVE_PLAYER: &str = "RemovePlayer";
pub(crate) const UPDATE_GENDER: &str = "UpdateGender";
pub(crate) const SET_PARTNER: &str = "SetPartner";
pub(crate) const IMPORT_PLAYERS: &str = "ImportPlayers";
pub(crate) const CLEAR_PLAYERS: &str = "ClearPlayers";

/// One player record from an external roster source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedPlayer {
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl ImportedPlayer {
    #[must_use]
    pub fn new(name: &str, gender: Option<Gender>) -> Self {
        Self {
            name: name.to_string(),
            gender,
        }
    }
}

/// A roster edit expressed as data.
///
/// Commands are the only way to request roster changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCommand {
    /// Add a single unpartnered player.
    AddPlayer {
        /// The player's name (trimmed before use).
        name: String,
        gender: Gender,
    },
    /// Add two new players who partner each other.
    AddPair {
        first_name: String,
        second_name: String,
        first_gender: Gender,
        second_gender: Gender,
    },
    /// Remove a player, freeing their partner.
    RemovePlayer { id: PlayerId },
    /// Change a player's gender.
    UpdateGender { id: PlayerId, gender: Gender },
    /// Partner two players, or clear a player's partnership with `None`.
    SetPartner {
        id: PlayerId,
        partner_id: Option<PlayerId>,
    },
    /// Replace the whole roster with imported records.
    ImportPlayers { players: Vec<ImportedPlayer> },
    /// Remove every player.
    ClearPlayers,
}

impl RosterCommand {
    /// Returns the action name recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer { .. } => ADD_PLAYER,
            Self::AddPair { .. } => ADD_PAIR,
            Self::RemovePlayer { .. } => REMOVE_PLAYER,
            Self::UpdateGender { .. } => UPDATE_GENDER,
            Self::SetPartner { .. } => SET_PARTNER,
            Self::ImportPlayers { .. } => IMPORT_PLAYERS,
            Self::ClearPlayers => CLEAR_PLAYERS,
        }
    }
}
