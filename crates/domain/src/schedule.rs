// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session start time resolution.
//!
//! The session form stores a calendar date and a wall-clock time as text,
//! plus the timezone they are expressed in. This module turns that triple
//! into a UTC instant.
//!
//! ## Leniency
//!
//! Resolution is best-effort. Any failure (unparsable date or time, unknown
//! timezone, a local time skipped by a DST transition) yields `None` and the
//! caller is expected to treat the start time as unknown rather than invalid.

use crate::types::SessionConfig;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use time::macros::format_description;

/// Parses a `YYYY-MM-DD` calendar date.
fn parse_date(value: &str) -> Option<time::Date> {
    time::Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Parses an `HH:MM` or `HH:MM:SS` time of day.
fn parse_time(value: &str) -> Option<time::Time> {
    let value: &str = value.trim();
    time::Time::parse(value, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| time::Time::parse(value, format_description!("[hour]:[minute]")))
        .ok()
}

/// Resolves the configured start date and time to a UTC instant.
///
/// # Arguments
///
/// * `config` - The session whose `game_date`, `game_time` and `timezone` are read
///
/// # Returns
///
/// `Some(instant)` if every part parses and the local time exists in the
/// timezone, otherwise `None`. Ambiguous local times (DST fall-back) resolve
/// to the earlier instant.
#[must_use]
pub fn session_start(config: &SessionConfig) -> Option<DateTime<Utc>> {
    let date: time::Date = parse_date(config.game_date.as_deref()?)?;
    let time_of_day: time::Time = parse_time(config.game_time.as_deref()?)?;
    let tz: Tz = config.timezone.trim().parse().ok()?;

    // Convert time::Date / time::Time to their chrono equivalents
    let naive_date: NaiveDate = NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )?;
    let naive_time: NaiveTime = NaiveTime::from_hms_opt(
        u32::from(time_of_day.hour()),
        u32::from(time_of_day.minute()),
        u32::from(time_of_day.second()),
    )?;

    tz.from_local_datetime(&naive_date.and_time(naive_time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}
