//! Logical request descriptors and their canonical keys.
//!
//! A [`RequestKey`] identifies a logical request independent of which source
//! ends up serving it. The same key drives the cache, the deduplicator, and
//! the rate limiter, so canonicalization lives here and nowhere else.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PitchsideError;

/// Logical operation the facade exposes. Used to pick cache stores and to
/// prefix request keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Operation {
    /// Fused match-conditions lookup.
    Conditions,
    /// Odds snapshot lookup.
    Odds,
    /// Fixture/match-data lookup.
    Fixture,
}

impl Operation {
    /// Stable string form used as the key prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conditions => "conditions",
            Self::Odds => "odds",
            Self::Fixture => "fixture",
        }
    }
}

/// Canonical, provider-agnostic identifier for a logical request.
///
/// Keys are plain strings of the form `{operation}:{params...}` so they can
/// be logged and compared cheaply. Construction goes through the request
/// types below; callers never assemble key strings by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestKey(String);

impl RequestKey {
    fn new(op: Operation, suffix: &str) -> Self {
        Self(format!("{}:{}", op.as_str(), suffix))
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptor for a match-conditions lookup at a venue around kickoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsRequest {
    /// Dashboard-side venue identifier (trimmed, lowercased).
    pub venue_id: String,
    /// Venue latitude in decimal degrees.
    pub latitude: f64,
    /// Venue longitude in decimal degrees.
    pub longitude: f64,
    /// Kickoff time; bucketed to the hour for key purposes so near-identical
    /// lookups coalesce.
    pub kickoff_utc: DateTime<Utc>,
}

impl ConditionsRequest {
    /// Build a validated request.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty venue id or out-of-range
    /// coordinates.
    pub fn new(
        venue_id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        kickoff_utc: DateTime<Utc>,
    ) -> Result<Self, PitchsideError> {
        let venue_id = venue_id.into().trim().to_lowercase();
        if venue_id.is_empty() {
            return Err(PitchsideError::InvalidArg(
                "venue_id must not be empty".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PitchsideError::InvalidArg(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PitchsideError::InvalidArg(format!(
                "longitude out of range: {longitude}"
            )));
        }
        Ok(Self {
            venue_id,
            latitude,
            longitude,
            kickoff_utc,
        })
    }

    /// Kickoff floored to the hour; the canonical time bucket for this
    /// request.
    #[must_use]
    pub fn hour_bucket(&self) -> DateTime<Utc> {
        self.kickoff_utc
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(self.kickoff_utc)
    }

    /// Canonical key: `conditions:{venue}:{hour-bucket-epoch}`.
    #[must_use]
    pub fn key(&self) -> RequestKey {
        RequestKey::new(
            Operation::Conditions,
            &format!("{}:{}", self.venue_id, self.hour_bucket().timestamp()),
        )
    }
}

/// Descriptor for odds or fixture lookups keyed by match id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    /// Upstream match identifier (trimmed).
    pub match_id: String,
}

impl MatchRequest {
    /// Build a validated request.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty match id.
    pub fn new(match_id: impl Into<String>) -> Result<Self, PitchsideError> {
        let match_id = match_id.into().trim().to_string();
        if match_id.is_empty() {
            return Err(PitchsideError::InvalidArg(
                "match_id must not be empty".to_string(),
            ));
        }
        Ok(Self { match_id })
    }

    /// Canonical key for the odds operation.
    #[must_use]
    pub fn odds_key(&self) -> RequestKey {
        RequestKey::new(Operation::Odds, &self.match_id)
    }

    /// Canonical key for the fixture operation.
    #[must_use]
    pub fn fixture_key(&self) -> RequestKey {
        RequestKey::new(Operation::Fixture, &self.match_id)
    }
}
