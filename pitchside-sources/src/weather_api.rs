//! WeatherAPI.com adapter.
//!
//! Key-authenticated; a 401/403 from the vendor means the key is dead for
//! the rest of the process, so the orchestrator disables this source on the
//! first `Unauthorized`. Wire units differ from ours (km/h, km) and are
//! converted during normalization.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use pitchside_core::{ConditionsProvider, DataSource};
use pitchside_types::{ConditionsRequest, MatchConditions, PitchsideError, SkyCondition};

const NAME: &str = "weatherapi";
const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";

/// Conditions source backed by WeatherAPI.com's current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temp_c: f64,
    wind_kph: f64,
    precip_mm: f64,
    humidity: f64,
    vis_km: f64,
    condition: ConditionBlock,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    code: u32,
}

/// Map WeatherAPI condition codes onto the categorical sky state.
fn sky_from_code(code: u32) -> SkyCondition {
    match code {
        1000 => SkyCondition::Clear,
        1003 => SkyCondition::PartlyCloudy,
        1006 | 1009 => SkyCondition::Overcast,
        1030 | 1135 | 1147 => SkyCondition::Fog,
        1063 | 1150 | 1153 | 1168 | 1171 => SkyCondition::Drizzle,
        1066 | 1069 | 1114 | 1117 | 1210..=1225 | 1255 | 1258 => SkyCondition::Snow,
        1087 | 1273 | 1276 | 1279 | 1282 => SkyCondition::Thunderstorm,
        1180..=1201 | 1240 | 1243 | 1246 => SkyCondition::Rain,
        _ => SkyCondition::Overcast,
    }
}

fn normalize(current: CurrentBlock) -> MatchConditions {
    MatchConditions {
        temperature_c: current.temp_c,
        // WeatherAPI reports km/h and km; we carry m/s and m.
        wind_speed_ms: current.wind_kph / 3.6,
        precipitation_mm: current.precip_mm,
        humidity_pct: current.humidity,
        visibility_m: current.vis_km * 1_000.0,
        sky: sky_from_code(current.condition.code),
    }
}

impl WeatherApiSource {
    /// Create an adapter against the public WeatherAPI endpoint.
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
impl ConditionsProvider for WeatherApiSource {
    async fn conditions(&self, req: &ConditionsRequest) -> Result<MatchConditions, PitchsideError> {
        let url = format!(
            "{}/v1/current.json?key={}&q={},{}",
            self.base_url, self.api_key, req.latitude, req.longitude
        );
        debug!(venue = %req.venue_id, "fetching weatherapi conditions");

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

        let data: CurrentResponse = resp
            .json()
            .await
            .map_err(|e| PitchsideError::malformed(NAME, e.to_string()))?;
        Ok(normalize(data.current))
    }
}

impl DataSource for WeatherApiSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "WeatherAPI.com"
    }

    fn as_conditions_provider(&self) -> Option<&dyn ConditionsProvider> {
        Some(self)
    }
}
