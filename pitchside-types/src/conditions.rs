//! Normalized domain payloads.
//!
//! Every source adapter converts its provider-specific wire format into
//! [`MatchConditions`] before the value leaves the adapter; fusion and
//! scoring never see provider shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical sky state. Taken from the single most reliable contributing
/// source during fusion; never averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkyCondition {
    /// Clear sky.
    Clear,
    /// Scattered cloud.
    PartlyCloudy,
    /// Full cloud cover.
    Overcast,
    /// Fog or mist.
    Fog,
    /// Light liquid precipitation.
    Drizzle,
    /// Rain.
    Rain,
    /// Snow or sleet.
    Snow,
    /// Thunderstorm.
    Thunderstorm,
}

impl SkyCondition {
    /// Stable lowercase label for logs and UI payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly_cloudy",
            Self::Overcast => "overcast",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
        }
    }
}

/// Normalized physical conditions at a venue. SI-ish units throughout:
/// Celsius, metres per second, millimetres per hour, percent, metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConditions {
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Sustained wind speed in metres per second.
    pub wind_speed_ms: f64,
    /// Precipitation rate in millimetres per hour.
    pub precipitation_mm: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
    /// Horizontal visibility in metres.
    pub visibility_m: f64,
    /// Categorical sky state.
    pub sky: SkyCondition,
}

/// One source's successful answer for a conditions request, tagged with the
/// source's static reliability weight as registered on the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResult {
    /// Name of the source that produced the payload.
    pub source: String,
    /// Static trust weight in `[0, 1]` supplied at registration. Not a live
    /// health score.
    pub reliability: f64,
    /// Normalized payload.
    pub conditions: MatchConditions,
    /// When the payload was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Output of the fusion step: one trustworthy payload plus provenance.
///
/// Invariant: with a single contributing source the payload passes through
/// untouched and `reliability_used` equals that source's weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedConditions {
    /// Fused payload.
    pub conditions: MatchConditions,
    /// Maximum reliability across contributors; a confidence indicator for
    /// the UI, not a literal weight. Zero means synthetic data.
    pub reliability_used: f64,
    /// Names of the sources that contributed, in priority order.
    pub contributing_sources: Vec<String>,
    /// Most recent fetch time among contributors.
    pub fetched_at: DateTime<Utc>,
}

/// Head-to-head odds snapshot for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsSnapshot {
    /// Upstream match identifier.
    pub match_id: String,
    /// Bookmaker the prices came from.
    pub bookmaker: String,
    /// Decimal odds for a home win.
    pub home_win: f64,
    /// Decimal odds for a draw.
    pub draw: f64,
    /// Decimal odds for an away win.
    pub away_win: f64,
    /// When the snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Basic fixture metadata for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Upstream match identifier.
    pub match_id: String,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Competition name, when the provider reports one.
    pub competition: Option<String>,
    /// Scheduled kickoff.
    pub kickoff_utc: DateTime<Utc>,
}
