use std::sync::Arc;

use tracing::debug;

use super::component::{Command, DataFetchError, Loaded};
use crate::data_provider::CfbdDataProvider;

/// Effect handler for data fetching operations
///
/// Each method returns a [`Command::Fetch`] whose future resolves to the
/// matching [`Loaded`] variant. Nothing runs until the runtime spawns it.
pub struct DataEffects {
    client: Arc<dyn CfbdDataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn CfbdDataProvider>) -> Self {
        Self { client }
    }

    /// Fetch the teams of one conference
    pub fn fetch_teams(&self, conference: &str) -> Command {
        let client = self.client.clone();
        let conference = conference.to_string();
        Command::Fetch(Box::pin(async move {
            debug!("EFFECT: fetching teams for conference={}", conference);
            let result = client.list_teams(Some(conference.as_str())).await;
            Loaded::Teams(result.map_err(DataFetchError::from))
        }))
    }

    /// Fetch one team's games for a season
    pub fn fetch_games(&self, school: &str, season: i32) -> Command {
        let client = self.client.clone();
        let school = school.to_string();
        Command::Fetch(Box::pin(async move {
            debug!("EFFECT: fetching games for team={} season={}", school, season);
            let result = client.list_games(&school, season).await;
            Loaded::Games(result.map_err(DataFetchError::from))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{sample_games, sample_teams, StubProvider};

    fn create_effects(stub: StubProvider) -> DataEffects {
        DataEffects::new(Arc::new(stub))
    }

    #[tokio::test]
    async fn test_fetch_teams_resolves_to_teams_loaded() {
        let effects = create_effects(StubProvider::new(sample_teams(), sample_games()));

        let Command::Fetch(task) = effects.fetch_teams("SEC") else {
            panic!("Expected Fetch command");
        };

        assert_eq!(task.await, Loaded::Teams(Ok(sample_teams())));
    }

    #[tokio::test]
    async fn test_fetch_games_resolves_to_games_loaded() {
        let effects = create_effects(StubProvider::new(sample_teams(), sample_games()));

        let Command::Fetch(task) = effects.fetch_games("Georgia", 2022) else {
            panic!("Expected Fetch command");
        };

        assert_eq!(task.await, Loaded::Games(Ok(sample_games())));
    }

    #[tokio::test]
    async fn test_fetch_error_is_carried_in_result() {
        let effects = create_effects(StubProvider::failing());

        let Command::Fetch(task) = effects.fetch_teams("SEC") else {
            panic!("Expected Fetch command");
        };

        match task.await {
            Loaded::Teams(Err(err)) => assert!(err.to_string().contains("503")),
            other => panic!("Expected teams error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_is_lazy() {
        let stub = StubProvider::new(sample_teams(), sample_games());
        let calls = stub.call_counter();
        let effects = create_effects(stub);

        let command = effects.fetch_teams("SEC");
        assert_eq!(calls.teams(), 0);
        drop(command);
        assert_eq!(calls.teams(), 0);
    }
}
