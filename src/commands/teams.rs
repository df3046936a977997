use anyhow::{Context, Result};

use crate::commands::format_header;
use crate::conferences::conference_name;
use crate::data_provider::CfbdDataProvider;
use crate::types::Team;

/// Width of school column
const SCHOOL_COL_WIDTH: usize = 24;

pub fn format_teams(teams: &[Team], conference: &str) -> String {
    let mut output = format_header(&format!("{} Teams", conference_name(conference)));

    if teams.is_empty() {
        output.push_str("No teams found.\n");
        return output;
    }

    output.push_str(&format!("{:<width$} {}\n", "School", "Mascot", width = SCHOOL_COL_WIDTH));
    for team in teams {
        output.push_str(&format!(
            "{:<width$} {}\n",
            team.school,
            team.mascot(),
            width = SCHOOL_COL_WIDTH
        ));
    }
    output
}

pub async fn run(client: &dyn CfbdDataProvider, conference: &str) -> Result<()> {
    let teams = client
        .list_teams(Some(conference))
        .await
        .with_context(|| format!("Failed to fetch teams for {}", conference))?;

    print!("{}", format_teams(&teams, conference));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{sample_teams, StubProvider};

    #[test]
    fn test_format_teams_lists_in_api_order() {
        let output = format_teams(&sample_teams()[..2], "SEC");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "Southeastern Conference Teams");
        assert_eq!(lines[3].trim_end(), "School                   Mascot");
        assert_eq!(lines[4], "Georgia                  Bulldogs");
        assert_eq!(lines[5], "Alabama                  Crimson Tide");
    }

    #[test]
    fn test_format_teams_empty() {
        let output = format_teams(&[], "B1G");
        assert!(output.contains("Big Ten Conference Teams"));
        assert!(output.ends_with("No teams found.\n"));
    }

    #[tokio::test]
    async fn test_run_reports_fetch_error() {
        let stub = StubProvider::failing();
        let err = run(&stub, "SEC").await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to fetch teams for SEC"));
        assert!(message.contains("503"));
    }
}
