// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Gender, Player, PlayerId, SessionConfig, SessionValidator};
use chrono::{DateTime, TimeZone, Utc};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

pub fn validator() -> SessionValidator {
    SessionValidator::at(fixed_now())
}

/// A config that passes every rule with four unspecified players.
pub fn create_valid_config() -> SessionConfig {
    SessionConfig {
        name: String::from("Friday Night Padel"),
        game_date: Some(String::from("2026-12-04")),
        game_time: Some(String::from("19:00")),
        ..SessionConfig::default()
    }
}

pub fn create_players(genders: &[Gender]) -> Vec<Player> {
    genders
        .iter()
        .enumerate()
        .map(|(idx, gender)| {
            let id: u64 = u64::try_from(idx).unwrap() + 1;
            Player::new(PlayerId::new(id), &format!("Player {id}"), *gender)
        })
        .collect()
}

pub fn create_unspecified_players(count: usize) -> Vec<Player> {
    create_players(&vec![Gender::Unspecified; count])
}

pub fn create_mixed_players(males: usize, females: usize) -> Vec<Player> {
    let mut genders: Vec<Gender> = vec![Gender::Male; males];
    genders.extend(vec![Gender::Female; females]);
    create_players(&genders)
}

/// Pairs consecutive players: (1, 2), (3, 4), ...
pub fn pair_up(mut players: Vec<Player>) -> Vec<Player> {
    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    for (idx, player) in players.iter_mut().enumerate() {
        let partner_idx: usize = if idx % 2 == 0 { idx + 1 } else { idx - 1 };
        player.partner_id = ids.get(partner_idx).copied();
    }
    players
}
