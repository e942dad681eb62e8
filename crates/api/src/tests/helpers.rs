// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone, Utc};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

/// A four-player padel session on 2026-12-04 that passes every rule.
pub const VALID_DOCUMENT: &str = r#"{
    "config": {
        "name": "Friday Night Padel",
        "sport": "padel",
        "game_format": "mexicano",
        "mode": "sequential",
        "scoring_mode": "points",
        "courts": 1,
        "points_per_match": 21,
        "game_date": "2026-12-04",
        "game_time": "19:00",
        "duration_hours": 2.0,
        "timezone": "Europe/Madrid"
    },
    "players": [
        { "id": 1, "name": "Ana", "gender": "female" },
        { "id": 2, "name": "Ben", "gender": "male" },
        { "id": 3, "name": "Cruz" },
        { "id": 4, "name": "Dee" }
    ]
}"#;

pub const ROSTER_CSV: &str = "Name,Gender\nAna,female\nBen,M\n  Cruz  ,\nDee,f\n";
