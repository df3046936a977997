/// Mock CFBD client for development and testing
use async_trait::async_trait;
use tracing::info;

use crate::cfbd::ApiError;
use crate::data_provider::CfbdDataProvider;
use crate::fixtures;
use crate::types::{Game, Team};

/// Mock client that returns fixture data instead of making real API calls
#[derive(Default)]
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

#[async_trait]
impl CfbdDataProvider for MockClient {
    async fn list_teams(&self, conference: Option<&str>) -> Result<Vec<Team>, ApiError> {
        info!("MockClient: Returning mock teams for conference: {:?}", conference);
        Ok(fixtures::mock_teams(conference))
    }

    async fn list_games(&self, team: &str, season: i32) -> Result<Vec<Game>, ApiError> {
        info!("MockClient: Returning mock games for {} {}", team, season);
        Ok(fixtures::mock_games(team, season))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_serves_fixtures() {
        let client = MockClient::new();

        let teams = client.list_teams(Some("SEC")).await.unwrap();
        assert_eq!(teams[0].school, "Georgia");

        let games = client.list_games("Alabama", 2022).await.unwrap();
        assert!(games.iter().all(|g| g.home_team == "Alabama" || g.away_team == "Alabama"));
        assert!(games.iter().all(|g| g.season == Some(2022)));
    }
}
