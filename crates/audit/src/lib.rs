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

use serde::{Deserialize, Serialize};

/// Represents the roster edit that was performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the edit (e.g., "`AddPair`", "`SetPartner`").
    pub name: String,
    /// Optional human-readable details, such as the names involved.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the edit
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// Roster shape at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Number of players on the roster.
    pub players: usize,
    /// Number of mutual partnerships (each pair counted once).
    pub partnerships: usize,
}

impl StateSnapshot {
    #[must_use]
    pub const fn new(players: usize, partnerships: usize) -> Self {
        Self {
            players,
            partnerships,
        }
    }
}

impl std::fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "players={},partnerships={}",
            self.players, self.partnerships
        )
    }
}

/// An immutable record of one roster change.
///
/// Every edit that changes the roster produces exactly one audit event.
/// Edits that turn out to be no-ops produce none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The edit that was performed.
    pub action: Action,
    /// The roster shape before the edit.
    pub before: StateSnapshot,
    /// The roster shape after the edit.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `action` - The edit that was performed
    /// * `before` - The roster shape before the edit
    /// * `after` - The roster shape after the edit
    #[must_use]
    pub const fn new(action: Action, before: StateSnapshot, after: StateSnapshot) -> Self {
        Self {
            action,
            before,
            after,
        }
    }

    /// Signed change in player count caused by this edit.
    #[must_use]
    pub fn player_delta(&self) -> i64 {
        let before: i64 = i64::try_from(self.before.players).unwrap_or(i64::MAX);
        let after: i64 = i64::try_from(self.after.players).unwrap_or(i64::MAX);
        after - before
    }
}
