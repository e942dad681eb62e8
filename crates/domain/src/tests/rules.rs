// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_mixed_players, create_players, create_unspecified_players, create_valid_config,
    fixed_now, pair_up, validator,
};
use crate::{
    GameFormat, Gender, MatchupPreference, PlayMode, Player, PlayerId, RuleContext, ScoringRules,
    SessionConfig, SessionRule, Severity, Sport, ValidationCategory, ValidationResult,
};
use std::collections::HashSet;

fn messages(config: &SessionConfig, players: &[Player]) -> Vec<String> {
    validator()
        .validate(config, players)
        .into_iter()
        .map(|r| r.message)
        .collect()
}

fn evaluate(rule: SessionRule, config: &SessionConfig, players: &[Player]) -> Option<ValidationResult> {
    rule.evaluate(&RuleContext::new(config, players, fixed_now()))
}

fn first_to(games_to_win: Option<u32>, points_per_game: Option<u32>) -> ScoringRules {
    ScoringRules::FirstTo {
        games_to_win,
        points_per_game,
        win_margin: None,
        tiebreak: None,
    }
}

fn total_games(total: Option<u32>) -> ScoringRules {
    ScoringRules::TotalGames {
        total_games: total,
        points_per_game: None,
        win_margin: None,
        tiebreak: None,
    }
}

#[test]
fn test_catalog_has_unique_rules() {
    let unique: HashSet<SessionRule> = SessionRule::ALL.iter().copied().collect();
    assert_eq!(unique.len(), SessionRule::ALL.len());
    assert_eq!(SessionRule::ALL.len(), 25);
}

#[test]
fn test_rule_categories() {
    assert_eq!(
        SessionRule::NameRequired.category(),
        ValidationCategory::SessionInfo
    );
    assert_eq!(
        SessionRule::MinimumPlayers.category(),
        ValidationCategory::Players
    );
    assert_eq!(
        SessionRule::FixedPartnerMutual.category(),
        ValidationCategory::GameType
    );
    assert_eq!(
        SessionRule::ParallelNeedsRotation.category(),
        ValidationCategory::Courts
    );
    assert_eq!(
        SessionRule::PadelPointsScoring.category(),
        ValidationCategory::Scoring
    );
}

#[test]
fn test_rules_report_under_their_own_category() {
    let config: SessionConfig = SessionConfig {
        name: String::new(),
        courts: 0,
        mode: PlayMode::Parallel,
        game_format: GameFormat::MixedMexicano,
        sport: Sport::Tennis,
        ..create_valid_config()
    };
    let players: Vec<Player> = create_mixed_players(1, 0);

    for rule in SessionRule::ALL {
        if let Some(result) = evaluate(rule, &config, &players) {
            assert_eq!(result.category, rule.category(), "{rule:?}");
            assert_eq!(result.field.as_deref(), Some(rule.field()), "{rule:?}");
        }
    }
}

#[test]
fn test_whitespace_name_is_required_and_too_short() {
    let config: SessionConfig = SessionConfig {
        name: String::from("   "),
        ..create_valid_config()
    };
    let found: Vec<String> = messages(&config, &create_unspecified_players(4));
    assert_eq!(
        found,
        vec![
            String::from("Session name is required"),
            String::from("Session name must be at least 3 characters"),
        ]
    );
}

#[test]
fn test_name_length_bounds_use_trimmed_characters() {
    let players: Vec<Player> = create_unspecified_players(4);

    let short: SessionConfig = SessionConfig {
        name: String::from("  ab  "),
        ..create_valid_config()
    };
    assert_eq!(
        messages(&short, &players),
        vec![String::from("Session name must be at least 3 characters")]
    );

    let three: SessionConfig = SessionConfig {
        name: String::from(" abc "),
        ..create_valid_config()
    };
    assert!(messages(&three, &players).is_empty());

    let sixty: SessionConfig = SessionConfig {
        name: "é".repeat(60),
        ..create_valid_config()
    };
    assert!(messages(&sixty, &players).is_empty());

    let long: SessionConfig = SessionConfig {
        name: "x".repeat(61),
        ..create_valid_config()
    };
    assert_eq!(
        messages(&long, &players),
        vec![String::from("Session name must be at most 60 characters")]
    );
}

#[test]
fn test_blank_game_date_is_required() {
    let config: SessionConfig = SessionConfig {
        game_date: Some(String::from("  ")),
        ..create_valid_config()
    };
    let found: Vec<String> = messages(&config, &create_unspecified_players(4));
    assert_eq!(found, vec![String::from("Game date is required")]);
}

#[test]
fn test_past_start_is_rejected() {
    let config: SessionConfig = SessionConfig {
        game_date: Some(String::from("2026-10-18")),
        game_time: Some(String::from("11:59")),
        ..create_valid_config()
    };
    let found: Vec<String> = messages(&config, &create_unspecified_players(4));
    assert_eq!(
        found,
        vec![String::from("Session date and time must be in the future")]
    );
}

#[test]
fn test_start_equal_to_now_is_allowed() {
    let config: SessionConfig = SessionConfig {
        game_date: Some(String::from("2026-10-18")),
        game_time: Some(String::from("12:00")),
        ..create_valid_config()
    };
    assert!(evaluate(SessionRule::StartInFuture, &config, &[]).is_none());
}

#[test]
fn test_start_respects_timezone() {
    // 13:30 in Madrid (UTC+2 in October before DST ends) is 11:30 UTC: in the past
    let config: SessionConfig = SessionConfig {
        game_date: Some(String::from("2026-10-18")),
        game_time: Some(String::from("13:30")),
        timezone: String::from("Europe/Madrid"),
        ..create_valid_config()
    };
    assert!(evaluate(SessionRule::StartInFuture, &config, &[]).is_some());

    let utc: SessionConfig = SessionConfig {
        timezone: String::from("UTC"),
        ..config
    };
    assert!(evaluate(SessionRule::StartInFuture, &utc, &[]).is_none());
}

#[test]
fn test_unparsable_start_is_silently_skipped() {
    let players: Vec<Player> = create_unspecified_players(4);
    for (date, time) in [
        ("yesterday", "10:00"),
        ("2020-01-01", "noon"),
        ("2020-02-30", "10:00"),
    ] {
        let config: SessionConfig = SessionConfig {
            game_date: Some(String::from(date)),
            game_time: Some(String::from(time)),
            ..create_valid_config()
        };
        assert!(messages(&config, &players).is_empty(), "{date} {time}");
    }

    let bad_zone: SessionConfig = SessionConfig {
        game_date: Some(String::from("2020-01-01")),
        timezone: String::from("Nowhere/Special"),
        ..create_valid_config()
    };
    assert!(messages(&bad_zone, &players).is_empty());
}

#[test]
fn test_duration_bounds() {
    for (hours, ok) in [
        (0.5, true),
        (24.0, true),
        (0.49, false),
        (24.5, false),
        (f64::NAN, false),
    ] {
        let config: SessionConfig = SessionConfig {
            duration_hours: hours,
            ..create_valid_config()
        };
        assert_eq!(
            evaluate(SessionRule::DurationRange, &config, &[]).is_none(),
            ok,
            "{hours}"
        );
    }
}

#[test]
fn test_minimum_players() {
    let config: SessionConfig = create_valid_config();
    assert!(evaluate(SessionRule::MinimumPlayers, &config, &create_unspecified_players(3)).is_some());
    assert!(evaluate(SessionRule::MinimumPlayers, &config, &create_unspecified_players(4)).is_none());
}

#[test]
fn test_mixed_mexicano_equal_but_too_few() {
    let config: SessionConfig = SessionConfig {
        game_format: GameFormat::MixedMexicano,
        ..create_valid_config()
    };
    let players: Vec<Player> = create_players(&[
        Gender::Male,
        Gender::Female,
        Gender::Unspecified,
        Gender::Unspecified,
    ]);

    let found: Vec<String> = messages(&config, &players);

    assert_eq!(
        found,
        vec![String::from(
            "Mixed Mexicano requires at least 2 males and 2 females"
        )]
    );
}

#[test]
fn test_mixed_mexicano_unbalanced_skips_minimum_rule() {
    let config: SessionConfig = SessionConfig {
        game_format: GameFormat::MixedMexicano,
        ..create_valid_config()
    };
    let players: Vec<Player> = create_mixed_players(1, 3);

    assert!(evaluate(SessionRule::MixedMexicanoBalanced, &config, &players).is_some());
    assert!(evaluate(SessionRule::MixedMexicanoMinimum, &config, &players).is_none());
}

#[test]
fn test_mixed_rules_ignore_other_formats() {
    let players: Vec<Player> = create_mixed_players(3, 1);
    assert!(messages(&create_valid_config(), &players).is_empty());
}

#[test]
fn test_fixed_partner_odd_and_unpartnered() {
    let config: SessionConfig = SessionConfig {
        game_format: GameFormat::FixedPartner,
        ..create_valid_config()
    };
    let players: Vec<Player> = create_unspecified_players(5);

    let found: Vec<String> = messages(&config, &players);

    assert_eq!(
        found,
        vec![
            String::from("Fixed Partner mode requires an even number of players"),
            String::from(
                "Fixed Partner mode requires every player to have a partner. 5 player(s) missing partners"
            ),
        ]
    );
}

#[test]
fn test_fixed_partner_fully_paired_is_valid() {
    let config: SessionConfig = SessionConfig {
        game_format: GameFormat::FixedPartner,
        ..create_valid_config()
    };
    let players: Vec<Player> = pair_up(create_unspecified_players(6));
    assert!(messages(&config, &players).is_empty());
}

#[test]
fn test_fixed_partner_one_sided_partnership() {
    let config: SessionConfig = SessionConfig {
        game_format: GameFormat::FixedPartner,
        ..create_valid_config()
    };
    let mut players: Vec<Player> = pair_up(create_unspecified_players(4));
    // Player 4 now points at player 1, who still points at player 2
    players[3].partner_id = Some(PlayerId::new(1));

    let found: Vec<String> = messages(&config, &players);

    assert_eq!(found, vec![String::from("All partnerships must be mutual")]);
}

#[test]
fn test_mixed_only_requires_both_genders() {
    let config: SessionConfig = SessionConfig {
        matchup_preference: MatchupPreference::MixedOnly,
        ..create_valid_config()
    };

    let all_male: Vec<String> = messages(&config, &create_mixed_players(4, 0));
    assert_eq!(
        all_male,
        vec![String::from(
            "Mixed matchups require both male and female players"
        )]
    );

    let one_female: Vec<String> = messages(&config, &create_mixed_players(3, 1));
    assert_eq!(
        one_female,
        vec![String::from(
            "Mixed matchups require at least 2 males and 2 females"
        )]
    );

    assert!(messages(&config, &create_mixed_players(2, 2)).is_empty());
}

#[test]
fn test_randomized_modes_has_no_gender_rules() {
    let config: SessionConfig = SessionConfig {
        matchup_preference: MatchupPreference::RandomizedModes,
        ..create_valid_config()
    };
    assert!(messages(&config, &create_mixed_players(4, 0)).is_empty());
}

#[test]
fn test_courts_range() {
    let players: Vec<Player> = create_unspecified_players(4);
    for (courts, ok) in [(-1, false), (0, false), (1, true), (10, true), (11, false)] {
        let config: SessionConfig = SessionConfig {
            courts,
            ..create_valid_config()
        };
        assert_eq!(
            evaluate(SessionRule::CourtsRange, &config, &players).is_none(),
            ok,
            "{courts}"
        );
    }
}

#[test]
fn test_negative_courts_only_fail_court_ranges() {
    let config: SessionConfig = SessionConfig {
        mode: PlayMode::Parallel,
        courts: -1,
        points_per_match: -5,
        ..create_valid_config()
    };
    let found: Vec<String> = messages(&config, &create_unspecified_players(4));
    assert_eq!(
        found,
        vec![
            String::from("Courts must be between 1 and 10"),
            String::from("Parallel mode requires 2-4 courts"),
            String::from("Points per match must be between 1 and 100"),
        ]
    );
}

#[test]
fn test_parallel_court_range() {
    let config: SessionConfig = SessionConfig {
        mode: PlayMode::Parallel,
        courts: 5,
        ..create_valid_config()
    };
    let found: Vec<String> = messages(&config, &create_unspecified_players(24));
    assert_eq!(found, vec![String::from("Parallel mode requires 2-4 courts")]);
}

#[test]
fn test_parallel_needs_enough_players() {
    let config: SessionConfig = SessionConfig {
        mode: PlayMode::Parallel,
        courts: 3,
        ..create_valid_config()
    };

    let found: Vec<String> = messages(&config, &create_unspecified_players(10));
    assert_eq!(
        found,
        vec![String::from(
            "Parallel mode with 3 courts requires at least 12 players. Current: 10 players"
        )]
    );

    assert!(messages(&config, &create_unspecified_players(13)).is_empty());
}

#[test]
fn test_parallel_mixed_mexicano_gender_minimum() {
    let config: SessionConfig = SessionConfig {
        mode: PlayMode::Parallel,
        courts: 2,
        game_format: GameFormat::MixedMexicano,
        ..create_valid_config()
    };
    let mut players: Vec<Player> = create_mixed_players(3, 3);
    players.extend(
        create_unspecified_players(4)
            .into_iter()
            .map(|mut p| {
                p.id = PlayerId::new(p.id.value() + 100);
                p
            }),
    );

    let result: ValidationResult =
        evaluate(SessionRule::ParallelMixedMexicanoGenders, &config, &players).unwrap();
    assert_eq!(
        result.message,
        "Parallel Mixed Mexicano with 2 courts needs at least 4 males and 4 females"
    );

    let enough: Vec<Player> = create_mixed_players(5, 5);
    assert!(evaluate(SessionRule::ParallelMixedMexicanoGenders, &config, &enough).is_none());
}

#[test]
fn test_tennis_requires_game_scoring() {
    let players: Vec<Player> = create_unspecified_players(4);
    let points: SessionConfig = SessionConfig {
        sport: Sport::Tennis,
        ..create_valid_config()
    };
    let found: Vec<ValidationResult> = validator().validate(&points, &players);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Error);
    assert!(found[0].message.starts_with("Tennis uses game-based scoring"));

    let games: SessionConfig = SessionConfig {
        sport: Sport::Tennis,
        scoring: total_games(Some(8)),
        ..create_valid_config()
    };
    assert!(validator().validate(&games, &players).is_empty());
}

#[test]
fn test_padel_total_games_warns() {
    let config: SessionConfig = SessionConfig {
        scoring: total_games(None),
        ..create_valid_config()
    };
    let result: ValidationResult =
        evaluate(SessionRule::PadelPointsScoring, &config, &[]).unwrap();
    assert_eq!(result.severity, Severity::Warning);
    assert!(result.message.starts_with("Padel typically uses points scoring"));
}

#[test]
fn test_points_per_match_range() {
    for (points, ok) in [(-5, false), (0, false), (1, true), (100, true), (101, false)] {
        let config: SessionConfig = SessionConfig {
            points_per_match: points,
            ..create_valid_config()
        };
        assert_eq!(
            evaluate(SessionRule::PointsPerMatchRange, &config, &[]).is_none(),
            ok,
            "{points}"
        );
    }
}

#[test]
fn test_zero_optional_counts_are_treated_as_unset() {
    let config: SessionConfig = SessionConfig {
        sport: Sport::Tennis,
        scoring: first_to(Some(0), Some(0)),
        ..create_valid_config()
    };
    assert!(messages(&config, &create_unspecified_players(4)).is_empty());

    let total: SessionConfig = SessionConfig {
        sport: Sport::Tennis,
        scoring: total_games(Some(0)),
        ..create_valid_config()
    };
    assert!(messages(&total, &create_unspecified_players(4)).is_empty());
}

#[test]
fn test_optional_count_ranges() {
    let games: SessionConfig = SessionConfig {
        sport: Sport::Tennis,
        scoring: first_to(Some(11), Some(3)),
        ..create_valid_config()
    };
    assert_eq!(
        messages(&games, &create_unspecified_players(4)),
        vec![
            String::from("Games to win must be between 1 and 10"),
            String::from("Points per game must be between 4 and 32"),
        ]
    );

    let total: SessionConfig = SessionConfig {
        sport: Sport::Tennis,
        scoring: total_games(Some(16)),
        ..create_valid_config()
    };
    assert_eq!(
        messages(&total, &create_unspecified_players(4)),
        vec![String::from("Total games must be between 1 and 15")]
    );

    let in_range: SessionConfig = SessionConfig {
        sport: Sport::Tennis,
        scoring: first_to(Some(10), Some(32)),
        ..create_valid_config()
    };
    assert!(messages(&in_range, &create_unspecified_players(4)).is_empty());
}
