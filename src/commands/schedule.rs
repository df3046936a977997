use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::commands::format_header;
use crate::data_provider::CfbdDataProvider;
use crate::schedule::{derive_rows, ScheduleRow};

// Layout Constants
/// Width of week column
const WEEK_COL_WIDTH: usize = 5;

/// Width of time column
const TIME_COL_WIDTH: usize = 20;

/// Width of opponent column
const OPPONENT_COL_WIDTH: usize = 24;

/// Width of result column
const RESULT_COL_WIDTH: usize = 6;

fn format_line(cells: [&str; 5]) -> String {
    let line = format!(
        "{:<w$} {:<t$} {:<o$} {:<r$} {}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        w = WEEK_COL_WIDTH,
        t = TIME_COL_WIDTH,
        o = OPPONENT_COL_WIDTH,
        r = RESULT_COL_WIDTH,
    );
    format!("{}\n", line.trim_end())
}

pub fn format_schedule(school: &str, season: i32, rows: &[ScheduleRow]) -> String {
    let mut output = format_header(&format!("{} {} Schedule", school, season));

    if rows.is_empty() {
        output.push_str("No games scheduled.\n");
        return output;
    }

    output.push_str(&format_line(["Week", "Time", "Opponent", "Result", "Score"]));
    for row in rows {
        let week = row.week.to_string();
        output.push_str(&format_line([
            &week,
            &row.time,
            &row.opponent,
            &row.result,
            &row.score,
        ]));
    }

    let malformed = rows.iter().filter(|row| row.malformed.is_some()).count();
    if malformed > 0 {
        output.push_str(&format!(
            "\n{} game(s) had an unreadable start date\n",
            malformed
        ));
    }
    output
}

pub async fn run(
    client: &dyn CfbdDataProvider,
    school: &str,
    season: i32,
    time_format: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    let games = client
        .list_games(school, season)
        .await
        .with_context(|| format!("Failed to fetch {} schedule for {}", season, school))?;

    let rows = derive_rows(&games, school, now, time_format);
    print!("{}", format_schedule(school, season, &rows));
    Ok(())
}
