/// HTTP client for the College Football Data API
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Game, Team};

pub const DEFAULT_BASE_URL: &str = "https://api.collegefootballdata.com";

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Errors produced by a remote data call
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;
        let api_key = api_key.into();
        if api_key.is_empty() {
            warn!("No CFBD API key configured; requests will likely be rejected");
        }
        Ok(Client {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Teams, optionally limited to one conference
    pub async fn teams(&self, conference: Option<&str>) -> Result<Vec<Team>, ApiError> {
        let mut query = Vec::new();
        if let Some(conference) = conference {
            query.push(("conference", conference.to_string()));
        }
        self.get("/teams", &query).await
    }

    /// Games for one team in one season, in the order the API returns them
    pub async fn games(&self, team: &str, season: i32) -> Result<Vec<Game>, ApiError> {
        let query = vec![("year", season.to_string()), ("team", team.to_string())];
        self.get("/games", &query).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("HTTP: GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status, url });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = Client::new("https://example.test/", "key").unwrap();
        assert_eq!(client.base_url, "https://example.test");
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            url: "https://example.test/teams".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 401 Unauthorized from https://example.test/teams"
        );
    }
}
