//! pitchside-sources
//!
//! Production source adapters for the pitchside data layer. Each adapter
//! owns one upstream HTTP API, converts its wire format into the shared
//! normalized payloads, and maps transport and credential failures onto the
//! unified error taxonomy:
//!
//! - network errors and non-2xx statuses become `Unavailable`;
//! - 401/403 become `Unauthorized`, which disables the source for the
//!   process lifetime;
//! - schema violations become `Malformed`.
//!
//! Adapters never time their own calls out beyond a generous transport
//! timeout; per-call deadlines belong to the orchestrator.
#![warn(missing_docs)]

/// Fixture metadata adapter (football-data style API).
pub mod fixture_feed;
/// MET Norway locationforecast adapter.
pub mod met_no;
/// Odds snapshot adapter.
pub mod odds_feed;
/// Open-Meteo forecast adapter (no credentials required).
pub mod open_meteo;
/// WeatherAPI.com adapter (API-key authenticated).
pub mod weather_api;

pub use fixture_feed::FixtureFeedSource;
pub use met_no::MetNoSource;
pub use odds_feed::OddsFeedSource;
pub use open_meteo::OpenMeteoSource;
pub use weather_api::WeatherApiSource;
