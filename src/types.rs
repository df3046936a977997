use serde::Deserialize;

/// A college football program as returned by the `/teams` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: Option<i64>,
    pub school: String,
    #[serde(default)]
    pub mascot: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
}

impl Team {
    pub fn new(school: impl Into<String>, mascot: impl Into<String>) -> Self {
        Team {
            id: None,
            school: school.into(),
            mascot: Some(mascot.into()),
            abbreviation: None,
            conference: None,
        }
    }

    /// Mascot, or an empty string when the API has none on record
    pub fn mascot(&self) -> &str {
        self.mascot.as_deref().unwrap_or("")
    }

    /// "Georgia Bulldogs" style label used in headers
    pub fn display_name(&self) -> String {
        match self.mascot.as_deref() {
            Some(mascot) if !mascot.is_empty() => format!("{} {}", self.school, mascot),
            _ => self.school.clone(),
        }
    }
}

/// A single game as returned by the `/games` endpoint
///
/// The API has shipped both snake_case and camelCase payloads, so every
/// multi-word field accepts either spelling. Points are null for games
/// that have not been played; they read as zero, matching the API's
/// own zero-value semantics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub season: Option<i32>,
    pub week: i32,
    #[serde(alias = "homeTeam")]
    pub home_team: String,
    #[serde(alias = "awayTeam")]
    pub away_team: String,
    #[serde(default, alias = "homePoints")]
    pub home_points: Option<i32>,
    #[serde(default, alias = "awayPoints")]
    pub away_points: Option<i32>,
    #[serde(default, alias = "startDate")]
    pub start_date: String,
    #[serde(default, alias = "startTimeTBD", alias = "startTimeTbd")]
    pub start_time_tbd: bool,
}

impl Game {
    pub fn home_points(&self) -> i32 {
        self.home_points.unwrap_or(0)
    }

    pub fn away_points(&self) -> i32 {
        self.away_points.unwrap_or(0)
    }
}
