//! Pitchside aggregates match data across multiple upstream sources.
//!
//! Overview
//! - Routes requests to adapters that implement the `pitchside_core`
//!   contracts: match conditions, decimal odds, fixture metadata.
//! - Applies per-caller, per-category admission control before any other
//!   work happens.
//! - Caches responses per operation with lazy TTL expiry and coalesces
//!   identical in-flight requests into a single upstream round-trip.
//! - Normalizes error handling and exposes uniform domain types from
//!   `pitchside_types`.
//!
//! Key behaviors and trade-offs
//! - Conditions: all capable sources are queried concurrently and their
//!   successes fused by reliability weight; categorical fields come from the
//!   most reliable contributor. When every source fails the caller gets a
//!   synthetic neutral payload marked with `reliability_used == 0.0`, never
//!   an error.
//! - Odds and fixtures: sources are walked in registration order and the
//!   first success wins; when all fail, the aggregate `AllSourcesFailed`
//!   error carries every per-source cause.
//! - Credential rejections (`Unauthorized`) disable the offending source for
//!   the process lifetime; transient failures and timeouts do not.
//! - Impact scoring is pure and deterministic, derived entirely from the
//!   fused conditions; it shares the conditions cache so mixing `impact` and
//!   `fused_conditions` calls never doubles upstream traffic.
//! - Only `RateLimited` propagates from the conditions and impact paths;
//!   everything else degrades to the synthetic payload.
//!
//! Examples
//! Building an orchestrator over three weather sources and an odds feed:
//! ```rust,ignore
//! use std::sync::Arc;
//! use pitchside::Pitchside;
//! use pitchside_sources::{MetNoSource, OddsFeedSource, OpenMeteoSource, WeatherApiSource};
//!
//! let pitchside = Pitchside::builder()
//!     .with_source(Arc::new(WeatherApiSource::new(api_key)), 0.9)
//!     .with_source(Arc::new(OpenMeteoSource::new()), 0.85)
//!     .with_source(Arc::new(MetNoSource::new()), 0.8)
//!     .with_source(Arc::new(OddsFeedSource::new(odds_key)), 0.9)
//!     .build()?;
//! ```
//!
//! Fetching fused conditions and an impact score for a match:
//! ```rust,ignore
//! use chrono::Utc;
//! use pitchside::ConditionsRequest;
//!
//! let req = ConditionsRequest::new("anfield", 53.43, -2.96, kickoff)?;
//! let fused = pitchside.fused_conditions("dashboard", &req).await?;
//! let impact = pitchside.impact("dashboard", &req).await?;
//! println!("overall impact: {:.2}", impact.overall);
//! ```
//!
//! Checking source health after a run:
//! ```rust,ignore
//! let report = pitchside.health();
//! for source in &report.sources {
//!     println!("{}: {:?}", source.source, source.status);
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Pitchside, PitchsideBuilder};

pub use pitchside_core::source::{
    ConditionsProvider, DataSource, FixturesProvider, OddsProvider,
};
pub use pitchside_core::{SYNTHETIC_SOURCE, neutral_conditions, score};

// Re-export domain types for convenience
pub use pitchside_types::{
    CacheConfig,
    CategoryLimit,
    ConditionsRequest,
    Fixture,
    FusedConditions,
    HealthReport,
    HealthStatus,
    ImpactScore,
    MatchConditions,
    MatchRequest,
    OddsSnapshot,
    Operation,
    PitchsideConfig,
    PitchsideError,
    PositionImpact,
    RateCategory,
    RateLimitConfig,
    RateLimitStatus,
    SkyCondition,
    SourceHealth,
    SourceKey,
    SourceResult,
    SourceStatus,
    StyleImpact,
    TacticalImpact,
};
