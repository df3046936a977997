use async_trait::async_trait;
use cached::{Cached, TimedSizedCache};
use tokio::sync::Mutex;
use tracing::debug;

use crate::cfbd::ApiError;
use crate::data_provider::CfbdDataProvider;
use crate::types::{Game, Team};

const TEAMS_CACHE_SIZE: usize = 16;
const GAMES_CACHE_SIZE: usize = 64;

/// Provider decorator that memoizes successful responses for a limited time
///
/// Errors are passed through and never stored, so a retry after a failure
/// always reaches the wrapped provider.
pub struct CachedProvider<P> {
    inner: P,
    teams: Mutex<TimedSizedCache<String, Vec<Team>>>,
    games: Mutex<TimedSizedCache<(String, i32), Vec<Game>>>,
}

impl<P: CfbdDataProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl_seconds: u64) -> Self {
        Self {
            inner,
            teams: Mutex::new(TimedSizedCache::with_size_and_lifespan(
                TEAMS_CACHE_SIZE,
                ttl_seconds,
            )),
            games: Mutex::new(TimedSizedCache::with_size_and_lifespan(
                GAMES_CACHE_SIZE,
                ttl_seconds,
            )),
        }
    }

    #[cfg(test)]
    pub async fn cache_sizes(&self) -> (usize, usize) {
        (
            self.teams.lock().await.cache_size(),
            self.games.lock().await.cache_size(),
        )
    }
}

#[async_trait]
impl<P: CfbdDataProvider> CfbdDataProvider for CachedProvider<P> {
    async fn list_teams(&self, conference: Option<&str>) -> Result<Vec<Team>, ApiError> {
        let key = conference.unwrap_or_default().to_string();
        if let Some(teams) = self.teams.lock().await.cache_get(&key) {
            debug!("CACHE: teams hit for conference={:?}", conference);
            return Ok(teams.clone());
        }

        let teams = self.inner.list_teams(conference).await?;
        self.teams.lock().await.cache_set(key, teams.clone());
        Ok(teams)
    }

    async fn list_games(&self, team: &str, season: i32) -> Result<Vec<Game>, ApiError> {
        let key = (team.to_string(), season);
        if let Some(games) = self.games.lock().await.cache_get(&key) {
            debug!("CACHE: games hit for team={} season={}", team, season);
            return Ok(games.clone());
        }

        let games = self.inner.list_games(team, season).await?;
        self.games.lock().await.cache_set(key, games.clone());
        Ok(games)
    }
}
