// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Roster, RosterCommand, TransitionResult, apply};
use courtside_domain::{Gender, PlayerId};

pub fn add_player_command(name: &str) -> RosterCommand {
    RosterCommand::AddPlayer {
        name: String::from(name),
        gender: Gender::Unspecified,
    }
}

pub fn add_pair_command(first: &str, second: &str) -> RosterCommand {
    RosterCommand::AddPair {
        first_name: String::from(first),
        second_name: String::from(second),
        first_gender: Gender::Male,
        second_gender: Gender::Female,
    }
}

/// Applies a command that is expected to succeed and returns the new roster.
pub fn step(roster: &Roster, command: RosterCommand) -> Roster {
    apply(roster, command).unwrap().new_roster
}

/// A roster of Ana+Ben (partnered) plus Cruz and Dee (single).
pub fn create_test_roster() -> Roster {
    let roster: Roster = step(&Roster::new(), add_pair_command("Ana", "Ben"));
    let roster: Roster = step(&roster, add_player_command("Cruz"));
    step(&roster, add_player_command("Dee"))
}

pub fn id_of(roster: &Roster, name: &str) -> PlayerId {
    roster.find_by_name(name).unwrap().id
}

pub fn partner_of(roster: &Roster, name: &str) -> Option<PlayerId> {
    roster.find_by_name(name).unwrap().partner_id
}

pub fn apply_ok(roster: &Roster, command: RosterCommand) -> TransitionResult {
    apply(roster, command).unwrap()
}
