//! Open-Meteo forecast adapter.
//!
//! Open-Meteo serves current conditions without credentials, which makes it
//! the natural first entry in a conditions priority list: it can never be
//! disabled for credential reasons.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use pitchside_core::{ConditionsProvider, DataSource};
use pitchside_types::{ConditionsRequest, MatchConditions, PitchsideError, SkyCondition};

const NAME: &str = "open-meteo";
const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

/// Conditions source backed by the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    wind_speed_10m: f64,
    precipitation: f64,
    relative_humidity_2m: f64,
    visibility: Option<f64>,
    weather_code: u16,
}

/// Map a WMO weather interpretation code onto the categorical sky state.
fn sky_from_wmo(code: u16) -> SkyCondition {
    match code {
        0 => SkyCondition::Clear,
        1 | 2 => SkyCondition::PartlyCloudy,
        3 => SkyCondition::Overcast,
        45 | 48 => SkyCondition::Fog,
        51..=57 => SkyCondition::Drizzle,
        61..=67 | 80..=82 => SkyCondition::Rain,
        71..=77 | 85 | 86 => SkyCondition::Snow,
        95..=99 => SkyCondition::Thunderstorm,
        _ => SkyCondition::Overcast,
    }
}

fn normalize(current: CurrentBlock) -> MatchConditions {
    MatchConditions {
        temperature_c: current.temperature_2m,
        wind_speed_ms: current.wind_speed_10m,
        precipitation_mm: current.precipitation,
        humidity_pct: current.relative_humidity_2m,
        visibility_m: current.visibility.unwrap_or(10_000.0),
        sky: sky_from_wmo(current.weather_code),
    }
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoSource {
    /// Create an adapter against the public Open-Meteo endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create an adapter against a custom endpoint. Used by tests and
    /// self-hosted Open-Meteo deployments.
    #[must_use]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ConditionsProvider for OpenMeteoSource {
    async fn conditions(&self, req: &ConditionsRequest) -> Result<MatchConditions, PitchsideError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=temperature_2m,wind_speed_10m,precipitation,relative_humidity_2m,visibility,weather_code&wind_speed_unit=ms",
            self.base_url, req.latitude, req.longitude
        );
        debug!(venue = %req.venue_id, "fetching open-meteo conditions");

        let resp = self
            .client
            .get(&url)
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

        let data: ForecastResponse = resp
            .json()
            .await
            .map_err(|e| PitchsideError::malformed(NAME, e.to_string()))?;
        Ok(normalize(data.current))
    }
}

impl DataSource for OpenMeteoSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Open-Meteo"
    }

    fn as_conditions_provider(&self) -> Option<&dyn ConditionsProvider> {
        Some(self)
    }
}
