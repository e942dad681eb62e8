// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{ImportedPlayer, RosterCommand};
use crate::error::CoreError;
use crate::state::{Roster, TransitionResult};
use courtside_audit::{Action, AuditEvent, StateSnapshot};
use courtside_domain::{DomainError, Gender, PlayerId};
use tracing::debug;

/// A roster being edited by one command.
struct Edit {
    roster: Roster,
    added: Vec<PlayerId>,
    details: Option<String>,
}

impl Edit {
    fn of(roster: &Roster) -> Self {
        Self {
            roster: roster.clone(),
            added: Vec::new(),
            details: None,
        }
    }

    fn player_name(&self, id: PlayerId) -> String {
        self.roster
            .get(id)
            .map_or_else(|| id.to_string(), |p| p.name.clone())
    }

    fn add_player(mut self, name: &str, gender: Gender) -> Result<Self, CoreError> {
        let name: &str = name.trim();
        if name.is_empty() {
            return Ok(self);
        }
        if self.roster.has_name(name) {
            return Err(DomainError::DuplicateName {
                name: name.to_string(),
            }
            .into());
        }

        self.added.push(self.roster.push(name, gender));
        self.details = Some(format!("Added '{name}'"));
        Ok(self)
    }

    fn add_pair(
        mut self,
        first: (&str, Gender),
        second: (&str, Gender),
    ) -> Result<Self, CoreError> {
        let first_name: &str = first.0.trim();
        let second_name: &str = second.0.trim();
        if first_name.is_empty() || second_name.is_empty() {
            return Err(DomainError::MissingName.into());
        }
        if courtside_domain::names_match(first_name, second_name) {
            return Err(DomainError::DuplicateName {
                name: second_name.to_string(),
            }
            .into());
        }
        if let Some(taken) = [first_name, second_name]
            .into_iter()
            .find(|name| self.roster.has_name(name))
        {
            return Err(DomainError::DuplicateName {
                name: taken.to_string(),
            }
            .into());
        }

        let first_id: PlayerId = self.roster.push(first_name, first.1);
        let second_id: PlayerId = self.roster.push(second_name, second.1);
        self.roster.link(first_id, second_id);
        self.added.extend([first_id, second_id]);
        self.details = Some(format!("Paired '{first_name}' with '{second_name}'"));
        Ok(self)
    }

    fn remove_player(mut self, id: PlayerId) -> Self {
        if let Some(removed) = self.roster.remove(id) {
            self.details = Some(format!("Removed '{}'", removed.name));
        }
        self
    }

    fn update_gender(mut self, id: PlayerId, gender: Gender) -> Self {
        if self.roster.contains(id) {
            self.roster.set_gender(id, gender);
            self.details = Some(format!(
                "Set gender of '{}' to {gender}",
                self.player_name(id)
            ));
        }
        self
    }

    fn set_partner(mut self, id: PlayerId, partner_id: Option<PlayerId>) -> Self {
        if !self.roster.contains(id) {
            return self;
        }
        match partner_id {
            None => {
                self.roster.unlink(id);
                self.details = Some(format!("Cleared partner of '{}'", self.player_name(id)));
            }
            Some(partner) if partner != id && self.roster.contains(partner) => {
                self.roster.link(id, partner);
                self.details = Some(format!(
                    "Partnered '{}' with '{}'",
                    self.player_name(id),
                    self.player_name(partner)
                ));
            }
            Some(partner) => {
                debug!(%id, %partner, "Ignoring partner request");
            }
        }
        self
    }

    fn import_players(mut self, players: &[ImportedPlayer]) -> Self {
        self.roster.clear();
        for record in players {
            let name: &str = record.name.trim();
            if name.is_empty() {
                continue;
            }
            let id: PlayerId = self
                .roster
                .push(name, record.gender.unwrap_or_default());
            self.added.push(id);
        }
        self.details = Some(format!("Imported {} player(s)", self.added.len()));
        self
    }

    fn clear_players(mut self) -> Self {
        let removed: usize = self.roster.len();
        self.roster.clear();
        self.details = Some(format!("Removed {removed} player(s)"));
        self
    }

    /// Finishes the edit. An audit event is produced only if the player list changed.
    fn into_transition(self, before: &Roster, action_name: &str) -> TransitionResult {
        let audit_event: Option<AuditEvent> = if self.roster.players() == before.players() {
            None
        } else {
            let before_snapshot: StateSnapshot = before.snapshot();
            let after_snapshot: StateSnapshot = self.roster.snapshot();
            Some(AuditEvent::new(
                Action::new(action_name.to_string(), self.details),
                before_snapshot,
                after_snapshot,
            ))
        };

        TransitionResult {
            new_roster: self.roster,
            audit_event,
            added: self.added,
        }
    }
}

/// Applies a command to a roster, producing a new roster and, if anything
/// changed, an audit event.
///
/// The input roster is never modified. Both invariants hold for the
/// returned roster whenever they held for the input: partnerships are
/// mutual, and names added through `AddPlayer`/`AddPair` are unique
/// ignoring case.
///
/// # Arguments
///
/// * `roster` - The current roster (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new roster and optional audit event
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if:
/// - `AddPair` is given a blank name
/// - `AddPlayer` or `AddPair` would introduce a duplicate name
pub fn apply(roster: &Roster, command: RosterCommand) -> Result<TransitionResult, CoreError> {
    let action_name: &str = command.name();
    let edit: Edit = Edit::of(roster);

    let edit: Edit = match command {
        RosterCommand::AddPlayer { name, gender } => edit.add_player(&name, gender)?,
        RosterCommand::AddPair {
            first_name,
            second_name,
            first_gender,
            second_gender,
        } => edit.add_pair((&first_name, first_gender), (&second_name, second_gender))?,
        RosterCommand::RemovePlayer { id } => edit.remove_player(id),
        RosterCommand::UpdateGender { id, gender } => edit.update_gender(id, gender),
        RosterCommand::SetPartner { id, partner_id } => edit.set_partner(id, partner_id),
        RosterCommand::ImportPlayers { players } => edit.import_players(&players),
        RosterCommand::ClearPlayers => edit.clear_players(),
    };

    let result: TransitionResult = edit.into_transition(roster, action_name);
    debug!(
        action = action_name,
        changed = result.changed(),
        players = result.new_roster.len(),
        "Applied roster command"
    );
    Ok(result)
}
