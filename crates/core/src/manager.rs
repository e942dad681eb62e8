// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::{ImportedPlayer, RosterCommand};
use crate::error::CoreError;
use crate::state::{Roster, TransitionResult};
use courtside_audit::AuditEvent;
use courtside_domain::{Gender, PlayerId};
use tracing::{debug, info};

/// Owns a roster and the audit trail of edits made to it.
///
/// Each method applies one command and swaps in the resulting roster, so a
/// reader holding a clone of [`RosterManager::roster`] never sees a
/// half-applied edit. Access from several threads needs an outer lock.
#[derive(Debug, Clone, Default)]
pub struct RosterManager {
    roster: Roster,
    history: Vec<AuditEvent>,
}

impl RosterManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns one audit event per change, oldest first.
    #[must_use]
    pub fn history(&self) -> &[AuditEvent] {
        &self.history
    }

    /// Applies a command and commits the result.
    ///
    /// # Errors
    ///
    /// Returns the command's error; the roster is left untouched.
    pub fn execute(&mut self, command: RosterCommand) -> Result<TransitionResult, CoreError> {
        let result: TransitionResult = apply(&self.roster, command)?;
        self.roster = result.new_roster.clone();
        if let Some(event) = &result.audit_event {
            debug!(
                action = %event.action.name,
                delta = event.player_delta(),
                players = event.after.players,
                "Recorded roster change"
            );
            self.history.push(event.clone());
        }
        Ok(result)
    }

    /// Adds an unpartnered player. Returns `None` if the name is blank.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is already on the roster.
    pub fn add_player(
        &mut self,
        name: &str,
        gender: Gender,
    ) -> Result<Option<PlayerId>, CoreError> {
        let result: TransitionResult = self.execute(RosterCommand::AddPlayer {
            name: name.to_string(),
            gender,
        })?;
        Ok(result.added.first().copied())
    }

    /// Adds two players partnered with each other.
    ///
    /// # Errors
    ///
    /// Returns `MissingName` if either name is blank, or `DuplicateName` if
    /// the names match each other or an existing player.
    pub fn add_pair(
        &mut self,
        first: (&str, Gender),
        second: (&str, Gender),
    ) -> Result<(PlayerId, PlayerId), CoreError> {
        let result: TransitionResult = self.execute(RosterCommand::AddPair {
            first_name: first.0.to_string(),
            second_name: second.0.to_string(),
            first_gender: first.1,
            second_gender: second.1,
        })?;
        match result.added.as_slice() {
            [a, b] => Ok((*a, *b)),
            _ => unreachable!("AddPair always mints two ids on success"),
        }
    }

    /// Removes a player. Returns whether the roster changed.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        self.infallible(RosterCommand::RemovePlayer { id })
    }

    /// Changes a player's gender. Returns whether the roster changed.
    pub fn update_gender(&mut self, id: PlayerId, gender: Gender) -> bool {
        self.infallible(RosterCommand::UpdateGender { id, gender })
    }

    /// Partners two players, or clears a partnership with `None`.
    /// Returns whether the roster changed.
    pub fn set_partner(&mut self, id: PlayerId, partner_id: Option<PlayerId>) -> bool {
        self.infallible(RosterCommand::SetPartner { id, partner_id })
    }

    /// Replaces the roster with imported records and returns the new ids.
    pub fn set_players_from_import(&mut self, players: Vec<ImportedPlayer>) -> Vec<PlayerId> {
        match self.execute(RosterCommand::ImportPlayers { players }) {
            Ok(result) => {
                info!(players = result.added.len(), "Imported roster");
                result.added
            }
            Err(_) => Vec::new(),
        }
    }

    /// Removes every player. Returns whether the roster changed.
    pub fn clear_players(&mut self) -> bool {
        self.infallible(RosterCommand::ClearPlayers)
    }

    fn infallible(&mut self, command: RosterCommand) -> bool {
        self.execute(command).is_ok_and(|result| result.changed())
    }
}
