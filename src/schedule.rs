//! Display rows derived from a team's games.
//!
//! Shared by the team screen and the `schedule` command.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;
use tracing::warn;

use crate::types::Game;

pub const DEFAULT_TIME_FORMAT: &str = "%b %d %I:%M %P";

/// Time column shown for a game whose start date could not be parsed
pub const MALFORMED_TIME: &str = "??";

/// A game record whose fields cannot be interpreted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("week {week}: unparseable start date {start_date:?}")]
pub struct MalformedRecord {
    pub week: i32,
    pub start_date: String,
}

/// One row of the schedule table: Week, Time, Opponent, Result, Score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub week: i32,
    pub time: String,
    pub opponent: String,
    pub result: String,
    pub score: String,
    pub malformed: Option<MalformedRecord>,
}

impl ScheduleRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.week.to_string(),
            self.time.clone(),
            self.opponent.clone(),
            self.result.clone(),
            self.score.clone(),
        ]
    }
}

/// Whether chrono understands every item of a strftime pattern
pub fn is_valid_time_format(time_format: &str) -> bool {
    StrftimeItems::new(time_format).all(|item| !matches!(item, Item::Error))
}

/// Format `start`, or `None` if the pattern has an item chrono cannot render
pub fn format_start(start: &DateTime<FixedOffset>, time_format: &str) -> Option<String> {
    let mut time = String::new();
    write!(time, "{}", start.format(time_format)).ok()?;
    Some(time)
}

pub fn parse_start_date(start_date: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(start_date).ok()
}

/// Derive the display row for `game` from the point of view of `school`
///
/// A tie counts as a loss. Games that are TBD or start after `now` get a
/// blank result and score even when points are present.
pub fn derive_row(game: &Game, school: &str, now: DateTime<Utc>, time_format: &str) -> ScheduleRow {
    let is_away = game.away_team == school;
    let (prefix, opponent) = if is_away {
        ("@", game.home_team.as_str())
    } else {
        ("vs", game.away_team.as_str())
    };

    let mut malformed = None;
    let (time, future) = if game.start_time_tbd {
        (String::new(), true)
    } else {
        match parse_start_date(&game.start_date) {
            Some(start) => {
                let time = format_start(&start, time_format).unwrap_or_else(|| {
                    warn!("SCHEDULE: invalid time format {:?}", time_format);
                    MALFORMED_TIME.to_string()
                });
                (time, start > now)
            }
            None => {
                let record = MalformedRecord {
                    week: game.week,
                    start_date: game.start_date.clone(),
                };
                warn!("SCHEDULE: {}", record);
                malformed = Some(record);
                (MALFORMED_TIME.to_string(), true)
            }
        }
    };

    let (result, score) = if future {
        (String::new(), String::new())
    } else {
        let (team_points, opponent_points) = if is_away {
            (game.away_points(), game.home_points())
        } else {
            (game.home_points(), game.away_points())
        };
        let result = if team_points > opponent_points { "W" } else { "L" };
        (result.to_string(), format!("{}-{}", team_points, opponent_points))
    };

    ScheduleRow {
        week: game.week,
        time,
        opponent: format!("{} {}", prefix, opponent),
        result,
        score,
        malformed,
    }
}

/// Derive rows for every game, keeping the API's order
pub fn derive_rows(games: &[Game], school: &str, now: DateTime<Utc>, time_format: &str) -> Vec<ScheduleRow> {
    games
        .iter()
        .map(|game| derive_row(game, school, now, time_format))
        .collect()
}
