// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_audit::{AuditEvent, StateSnapshot};
use courtside_domain::{Gender, Player, PlayerId, count_duplicate_names};
use std::collections::BTreeMap;

/// The ordered player list for one session.
///
/// Players are held in insertion order. Partnerships are stored as id
/// references on each player, and an id-to-position index is kept beside
/// the list so partner lookups never scan.
///
/// Outside this crate a `Roster` is read-only; every change goes through
/// [`crate::apply`], which builds a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
    index: BTreeMap<PlayerId, usize>,
    /// The next id to mint. Never reset, so ids are not reused.
    next_id: u64,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            index: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Returns the players in display order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Looks up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.index.get(&id).and_then(|&pos| self.players.get(pos))
    }

    /// Looks up a player by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name: &str = name.trim();
        self.players.iter().find(|p| p.name_matches(name))
    }

    /// Returns each partnership once, as `(first, second)` in roster order.
    #[must_use]
    pub fn partnerships(&self) -> Vec<(PlayerId, PlayerId)> {
        self.players
            .iter()
            .enumerate()
            .filter_map(|(pos, player)| {
                let partner: PlayerId = player.partner_id?;
                let partner_pos: usize = *self.index.get(&partner)?;
                (pos < partner_pos).then_some((player.id, partner))
            })
            .collect()
    }

    /// Returns the roster shape recorded in audit events.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(self.players.len(), self.partnerships().len())
    }

    /// Checks that every partnership is mutual and every name is unique.
    ///
    /// Rosters loaded through an import may legitimately carry duplicate
    /// names, so callers wanting only the partnership check should use
    /// [`Roster::partnerships_are_mutual`].
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.partnerships_are_mutual() && self.names_are_unique()
    }

    /// Checks that every partner reference points at a different player who
    /// points back.
    #[must_use]
    pub fn partnerships_are_mutual(&self) -> bool {
        self.players.iter().all(|player| match player.partner_id {
            None => true,
            Some(partner) if partner == player.id => false,
            Some(partner) => self
                .get(partner)
                .is_some_and(|other| other.partner_id == Some(player.id)),
        })
    }

    /// Checks that no two players share a name under case-insensitive comparison.
    #[must_use]
    pub fn names_are_unique(&self) -> bool {
        count_duplicate_names(&self.players) == 0
    }

    pub(crate) fn contains(&self, id: PlayerId) -> bool {
        self.index.contains_key(&id)
    }

    pub(crate) fn has_name(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name_matches(name))
    }

    const fn mint_id(&mut self) -> PlayerId {
        let id: PlayerId = PlayerId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a new unpartnered player and returns its id.
    pub(crate) fn push(&mut self, name: &str, gender: Gender) -> PlayerId {
        let id: PlayerId = self.mint_id();
        self.index.insert(id, self.players.len());
        self.players.push(Player::new(id, name, gender));
        id
    }

    /// Removes a player, freeing its partner. Returns the removed player.
    pub(crate) fn remove(&mut self, id: PlayerId) -> Option<Player> {
        self.unlink(id);
        let pos: usize = self.index.remove(&id)?;
        let removed: Player = self.players.remove(pos);
        self.reindex();
        Some(removed)
    }

    pub(crate) fn set_gender(&mut self, id: PlayerId, gender: Gender) {
        if let Some(player) = self.get_mut(id) {
            player.gender = gender;
        }
    }

    /// Partners `a` and `b`, first freeing whoever either was partnered with.
    pub(crate) fn link(&mut self, a: PlayerId, b: PlayerId) {
        if a == b || !self.contains(a) || !self.contains(b) {
            return;
        }
        self.unlink(a);
        self.unlink(b);
        if let Some(player) = self.get_mut(a) {
            player.partner_id = Some(b);
        }
        if let Some(player) = self.get_mut(b) {
            player.partner_id = Some(a);
        }
    }

    /// Clears the partnership of `id` on both sides.
    pub(crate) fn unlink(&mut self, id: PlayerId) {
        let Some(partner) = self.get_mut(id).and_then(|p| p.partner_id.take()) else {
            return;
        };
        if let Some(other) = self
            .get_mut(partner)
            .filter(|other| other.partner_id == Some(id))
        {
            other.partner_id = None;
        }
    }

    /// Drops every player. The id counter keeps running.
    pub(crate) fn clear(&mut self) {
        self.players.clear();
        self.index.clear();
    }

    fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let pos: usize = *self.index.get(&id)?;
        self.players.get_mut(pos)
    }

    fn reindex(&mut self) {
        self.index = self
            .players
            .iter()
            .enumerate()
            .map(|(pos, player)| (player.id, pos))
            .collect();
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of applying a roster command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The roster after the command.
    pub new_roster: Roster,
    /// The audit event for the change, or `None` when nothing changed.
    pub audit_event: Option<AuditEvent>,
    /// Ids minted by the command, in creation order.
    pub added: Vec<PlayerId>,
}

impl TransitionResult {
    /// Returns true if the command changed the roster.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.audit_event.is_some()
    }
}
