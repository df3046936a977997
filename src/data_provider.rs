/// Trait for providing football data, abstracting over real API clients and mock implementations
use async_trait::async_trait;

use crate::cfbd::{ApiError, Client};
use crate::types::{Game, Team};

/// Remote data port used by the screens and CLI commands
#[async_trait]
pub trait CfbdDataProvider: Send + Sync {
    /// List teams, optionally filtered by conference
    async fn list_teams(&self, conference: Option<&str>) -> Result<Vec<Team>, ApiError>;

    /// List a team's games for one season
    async fn list_games(&self, team: &str, season: i32) -> Result<Vec<Game>, ApiError>;
}

#[async_trait]
impl CfbdDataProvider for Client {
    async fn list_teams(&self, conference: Option<&str>) -> Result<Vec<Team>, ApiError> {
        self.teams(conference).await
    }

    async fn list_games(&self, team: &str, season: i32) -> Result<Vec<Game>, ApiError> {
        self.games(team, season).await
    }
}
