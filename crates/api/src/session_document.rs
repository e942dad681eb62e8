// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON session documents: a session configuration plus its roster.

use courtside::Roster;
use courtside_domain::{Player, SessionConfig};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A session configuration together with the roster it will run with.
///
/// ```json
/// {
///   "config": { "name": "Friday Padel", "scoring_mode": "points", ... },
///   "players": [ { "id": 1, "name": "Ana", "gender": "female", "partner_id": 2 } ]
/// }
/// ```
///
/// A document without `players` describes an empty roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    pub config: SessionConfig,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl SessionDocument {
    #[must_use]
    pub const fn new(config: SessionConfig, players: Vec<Player>) -> Self {
        Self { config, players }
    }

    /// Builds a document from a config and the current state of a roster.
    #[must_use]
    pub fn from_roster(config: SessionConfig, roster: &Roster) -> Self {
        Self::new(config, roster.players().to_vec())
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidDocument` if the text is not valid JSON or
    /// does not describe a session.
    pub fn from_json(text: &str) -> Result<Self, ApiError> {
        serde_json::from_str(text).map_err(|e| ApiError::InvalidDocument {
            reason: e.to_string(),
        })
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidDocument` if serialization fails.
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string_pretty(self).map_err(|e| ApiError::InvalidDocument {
            reason: e.to_string(),
        })
    }
}
