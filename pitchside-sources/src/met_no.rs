//! MET Norway locationforecast adapter.
//!
//! MET Norway requires an identifying `User-Agent` and serves no visibility
//! field; visibility defaults to full. Precipitation comes from the
//! one-hour accumulation block when present.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use pitchside_core::{ConditionsProvider, DataSource};
use pitchside_types::{ConditionsRequest, MatchConditions, PitchsideError, SkyCondition};

const NAME: &str = "met-norway";
const DEFAULT_BASE_URL: &str = "https://api.met.no";
const USER_AGENT: &str = "pitchside/0.1 (https://github.com/pitchside/pitchside)";

/// Conditions source backed by MET Norway's locationforecast API.
#[derive(Debug, Clone)]
pub struct MetNoSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LocationForecast {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    timeseries: Vec<TimeStep>,
}

#[derive(Debug, Deserialize)]
struct TimeStep {
    data: StepData,
}

#[derive(Debug, Deserialize)]
struct StepData {
    instant: InstantBlock,
    #[serde(default)]
    next_1_hours: Option<NextHours>,
}

#[derive(Debug, Deserialize)]
struct InstantBlock {
    details: InstantDetails,
}

#[derive(Debug, Deserialize)]
struct InstantDetails {
    air_temperature: f64,
    wind_speed: f64,
    relative_humidity: f64,
}

#[derive(Debug, Deserialize)]
struct NextHours {
    #[serde(default)]
    summary: Option<HoursSummary>,
    #[serde(default)]
    details: Option<HoursDetails>,
}

#[derive(Debug, Deserialize)]
struct HoursSummary {
    symbol_code: String,
}

#[derive(Debug, Deserialize)]
struct HoursDetails {
    #[serde(default)]
    precipitation_amount: f64,
}

/// Map a MET Norway symbol code onto the categorical sky state.
fn sky_from_symbol(symbol: &str) -> SkyCondition {
    // Symbols carry day/night suffixes ("partlycloudy_day"); match on the
    // stem.
    if symbol.contains("thunder") {
        SkyCondition::Thunderstorm
    } else if symbol.contains("snow") || symbol.contains("sleet") {
        SkyCondition::Snow
    } else if symbol.contains("rain") {
        SkyCondition::Rain
    } else if symbol.contains("drizzle") {
        SkyCondition::Drizzle
    } else if symbol.contains("fog") {
        SkyCondition::Fog
    } else if symbol.starts_with("clearsky") {
        SkyCondition::Clear
    } else if symbol.starts_with("fair") || symbol.starts_with("partlycloudy") {
        SkyCondition::PartlyCloudy
    } else {
        SkyCondition::Overcast
    }
}

fn normalize(step: &TimeStep) -> MatchConditions {
    let details = &step.data.instant.details;
    let precipitation_mm = step
        .data
        .next_1_hours
        .as_ref()
        .and_then(|n| n.details.as_ref())
        .map_or(0.0, |d| d.precipitation_amount);
    let sky = step
        .data
        .next_1_hours
        .as_ref()
        .and_then(|n| n.summary.as_ref())
        .map_or(SkyCondition::Overcast, |s| sky_from_symbol(&s.symbol_code));
    MatchConditions {
        temperature_c: details.air_temperature,
        wind_speed_ms: details.wind_speed,
        precipitation_mm,
        humidity_pct: details.relative_humidity,
        // locationforecast has no visibility product.
        visibility_m: 10_000.0,
        sky,
    }
}

impl Default for MetNoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetNoSource {
    /// Create an adapter against the public MET Norway endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create an adapter against a custom endpoint. Used by tests.
    #[must_use]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ConditionsProvider for MetNoSource {
    async fn conditions(&self, req: &ConditionsRequest) -> Result<MatchConditions, PitchsideError> {
        let url = format!(
            "{}/weatherapi/locationforecast/2.0/compact?lat={}&lon={}",
            self.base_url, req.latitude, req.longitude
        );
        debug!(venue = %req.venue_id, "fetching met-norway conditions");

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
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

        let data: LocationForecast = resp
            .json()
            .await
            .map_err(|e| PitchsideError::malformed(NAME, e.to_string()))?;
        let step = data
            .properties
            .timeseries
            .first()
            .ok_or_else(|| PitchsideError::malformed(NAME, "empty timeseries"))?;
        Ok(normalize(step))
    }
}

impl DataSource for MetNoSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "MET Norway"
    }

    fn as_conditions_provider(&self) -> Option<&dyn ConditionsProvider> {
        Some(self)
    }
}
