/// Mock fixture data for testing and development
///
/// Deterministic teams and schedules used by unit tests, by the mock
/// client behind `--mock`, and by the benchmarks. Scores and dates follow
/// the 2022 SEC season closely enough to look real in screenshots.
use crate::types::{Game, Team};

/// (school, mascot, abbreviation, id)
const SEC_TEAMS: [(&str, &str, &str, i64); 14] = [
    ("Georgia", "Bulldogs", "UGA", 61),
    ("Alabama", "Crimson Tide", "ALA", 333),
    ("Tennessee", "Volunteers", "TENN", 2633),
    ("LSU", "Tigers", "LSU", 99),
    ("Ole Miss", "Rebels", "MISS", 145),
    ("South Carolina", "Gamecocks", "SC", 2579),
    ("Mississippi State", "Bulldogs", "MSST", 344),
    ("Kentucky", "Wildcats", "UK", 96),
    ("Florida", "Gators", "FLA", 57),
    ("Arkansas", "Razorbacks", "ARK", 8),
    ("Missouri", "Tigers", "MIZ", 142),
    ("Auburn", "Tigers", "AUB", 2),
    ("Texas A&M", "Aggies", "TA&M", 245),
    ("Vanderbilt", "Commodores", "VAN", 238),
];

/// (week, opponent, home, points for, points against, start date, tbd)
type ScheduleEntry = (i32, &'static str, bool, Option<i32>, Option<i32>, &'static str, bool);

const SCHEDULE: [ScheduleEntry; 8] = [
    (1, "Oregon", true, Some(49), Some(3), "2022-09-03T19:30:00.000Z", false),
    (2, "Samford", true, Some(33), Some(0), "2022-09-10T16:00:00.000Z", false),
    (3, "South Carolina", false, Some(48), Some(7), "2022-09-17T16:00:00.000Z", false),
    (4, "Kent State", true, Some(39), Some(22), "2022-09-24T16:00:00.000Z", false),
    (5, "Missouri", false, Some(26), Some(22), "2022-10-01T23:30:00.000Z", false),
    (6, "Auburn", true, Some(42), Some(10), "2022-10-08T19:30:00.000Z", false),
    (7, "Vanderbilt", true, Some(55), Some(0), "2022-10-15T16:00:00.000Z", false),
    (8, "Florida", false, None, None, "2099-10-29T19:30:00.000Z", true),
];

/// Teams of one conference; every conference gets the same fixture list
pub fn mock_teams(conference: Option<&str>) -> Vec<Team> {
    let conference = conference.unwrap_or("SEC");
    SEC_TEAMS
        .iter()
        .map(|(school, mascot, abbreviation, id)| Team {
            id: Some(*id),
            school: school.to_string(),
            mascot: Some(mascot.to_string()),
            abbreviation: Some(abbreviation.to_string()),
            conference: Some(conference.to_string()),
        })
        .collect()
}

/// A season schedule played by `school`
///
/// Opponents that match `school` are swapped for Georgia so a team never
/// plays itself.
pub fn mock_games(school: &str, season: i32) -> Vec<Game> {
    SCHEDULE
        .iter()
        .enumerate()
        .map(|(i, (week, opponent, home, points_for, points_against, start, tbd))| {
            let opponent = if *opponent == school { "Georgia" } else { opponent };
            let (home_team, away_team, home_points, away_points) = if *home {
                (school, opponent, *points_for, *points_against)
            } else {
                (opponent, school, *points_against, *points_for)
            };
            Game {
                id: Some(401_403_800 + i as i64),
                season: Some(season),
                week: *week,
                home_team: home_team.to_string(),
                away_team: away_team.to_string(),
                home_points,
                away_points,
                start_date: start.to_string(),
                start_time_tbd: *tbd,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_teams_carry_conference() {
        let teams = mock_teams(Some("SEC"));
        assert_eq!(teams.len(), 14);
        assert_eq!(teams[0].display_name(), "Georgia Bulldogs");
        assert!(teams.iter().all(|team| team.conference.as_deref() == Some("SEC")));
    }

    #[test]
    fn test_mock_games_home_and_away() {
        let games = mock_games("Georgia", 2022);
        assert_eq!(games[0].home_team, "Georgia");
        assert_eq!(games[0].away_team, "Oregon");
        assert_eq!(games[2].home_team, "South Carolina");
        assert_eq!(games[2].away_points(), 48);
        assert!(games.last().unwrap().start_time_tbd);
    }

    #[test]
    fn test_mock_games_never_self_scheduled() {
        let games = mock_games("Auburn", 2022);
        assert!(games.iter().all(|game| game.home_team != game.away_team));
        assert_eq!(games[5].away_team, "Georgia");
    }
}
