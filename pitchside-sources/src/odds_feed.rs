//! Odds snapshot adapter.
//!
//! Talks to the bookmaker aggregation feed; head-to-head decimal prices
//! only. Authenticated with an `X-Api-Key` header.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use pitchside_core::{DataSource, OddsProvider};
use pitchside_types::{MatchRequest, OddsSnapshot, PitchsideError};

const NAME: &str = "odds-feed";
const DEFAULT_BASE_URL: &str = "https://api.oddsfeed.io";

/// Odds source backed by the bookmaker aggregation feed.
#[derive(Debug, Clone)]
pub struct OddsFeedSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct OddsResponse {
    #[serde(rename = "matchId")]
    match_id: String,
    bookmaker: String,
    prices: Prices,
}

#[derive(Debug, Deserialize)]
struct Prices {
    home: f64,
    draw: f64,
    away: f64,
}

impl OddsFeedSource {
    /// Create an adapter against the public feed endpoint.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key)
    }

    /// Create an adapter against a custom endpoint. Used by tests.
    #[must_use]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl OddsProvider for OddsFeedSource {
    async fn odds(&self, req: &MatchRequest) -> Result<OddsSnapshot, PitchsideError> {
        let url = format!("{}/v2/matches/{}/odds", self.base_url, req.match_id);
        debug!(match_id = %req.match_id, "fetching odds snapshot");

        let resp = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
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

        let data: OddsResponse = resp
            .json()
            .await
            .map_err(|e| PitchsideError::malformed(NAME, e.to_string()))?;
        if data.prices.home <= 1.0 || data.prices.draw <= 1.0 || data.prices.away <= 1.0 {
            return Err(PitchsideError::malformed(
                NAME,
                "decimal odds must exceed 1.0",
            ));
        }
        Ok(OddsSnapshot {
            match_id: data.match_id,
            bookmaker: data.bookmaker,
            home_win: data.prices.home,
            draw: data.prices.draw,
            away_win: data.prices.away,
            fetched_at: Utc::now(),
        })
    }
}

impl DataSource for OddsFeedSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "OddsFeed"
    }

    fn as_odds_provider(&self) -> Option<&dyn OddsProvider> {
        Some(self)
    }
}
