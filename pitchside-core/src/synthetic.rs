//! Neutral synthetic payload used as the terminal fallback.
//!
//! When every registered source fails, the conditions path still has to
//! answer: the dashboard renders something rather than erroring. The
//! synthetic payload is deliberately bland (it scores zero through the
//! impact model) and carries `reliability_used == 0.0` so downstream
//! consumers can tell it apart from real data.

use chrono::{DateTime, Utc};
use pitchside_types::{FusedConditions, MatchConditions, SkyCondition};

/// Name reported in `contributing_sources` for synthetic payloads.
pub const SYNTHETIC_SOURCE: &str = "synthetic-default";

/// Neutral conditions: mild, calm, dry, clear.
#[must_use]
pub fn neutral_conditions() -> MatchConditions {
    MatchConditions {
        temperature_c: 16.0,
        wind_speed_ms: 2.0,
        precipitation_mm: 0.0,
        humidity_pct: 50.0,
        visibility_m: 10_000.0,
        sky: SkyCondition::PartlyCloudy,
    }
}

/// Build the fused payload served when no source answered.
#[must_use]
pub fn synthetic_fused(now: DateTime<Utc>) -> FusedConditions {
    FusedConditions {
        conditions: neutral_conditions(),
        reliability_used: 0.0,
        contributing_sources: vec![SYNTHETIC_SOURCE.to_string()],
        fetched_at: now,
    }
}
