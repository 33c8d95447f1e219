//! Fixture metadata adapter.
//!
//! football-data.org style API: fixtures by numeric or string id,
//! authenticated with an `X-Auth-Token` header.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use pitchside_core::{DataSource, FixturesProvider};
use pitchside_types::{Fixture, MatchRequest, PitchsideError};

const NAME: &str = "fixture-feed";
const DEFAULT_BASE_URL: &str = "https://api.football-data.org";

/// Fixture source backed by a football-data style API.
#[derive(Debug, Clone)]
pub struct FixtureFeedSource {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
}

#[derive(Debug, Deserialize)]
struct MatchResponse {
    id: serde_json::Value,
    #[serde(rename = "utcDate")]
    utc_date: DateTime<Utc>,
    #[serde(default)]
    competition: Option<NamedEntity>,
    #[serde(rename = "homeTeam")]
    home_team: NamedEntity,
    #[serde(rename = "awayTeam")]
    away_team: NamedEntity,
}

#[derive(Debug, Deserialize)]
struct NamedEntity {
    name: String,
}

impl FixtureFeedSource {
    /// Create an adapter against the public endpoint.
    #[must_use]
    pub fn new(auth_token: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), auth_token)
    }

    /// Create an adapter against a custom endpoint. Used by tests.
    #[must_use]
    pub fn with_base_url(base_url: String, auth_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            auth_token,
        }
    }
}

#[async_trait]
impl FixturesProvider for FixtureFeedSource {
    async fn fixture(&self, req: &MatchRequest) -> Result<Fixture, PitchsideError> {
        let url = format!("{}/v4/matches/{}", self.base_url, req.match_id);
        debug!(match_id = %req.match_id, "fetching fixture metadata");

        let resp = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.auth_token)
            .send()
            .await
            .map_err(|e| PitchsideError::unavailable(NAME, e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PitchsideError::unauthorized(NAME));
        }
        if !status.is_success() {
            return Err(PitchsideError::unavailable(
                NAME,
                format!("status {status}"),
            ));
        }

        let data: MatchResponse = resp
            .json()
            .await
            .map_err(|e| PitchsideError::malformed(NAME, e.to_string()))?;
        // Upstream ids are numeric; normalize to the string form used in
        // request keys.
        let match_id = match data.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Ok(Fixture {
            match_id,
            home_team: data.home_team.name,
            away_team: data.away_team.name,
            competition: data.competition.map(|c| c.name),
            kickoff_utc: data.utc_date,
        })
    }
}

impl DataSource for FixtureFeedSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "football-data.org"
    }

    fn as_fixtures_provider(&self) -> Option<&dyn FixturesProvider> {
        Some(self)
    }
}
