//! pitchside-types
//!
//! Shared DTOs for the pitchside ecosystem: the unified error type,
//! configuration surfaces, the request/key model, the normalized
//! match-conditions payload, fusion and impact outputs, and status
//! snapshots used for observability.
//!
//! This crate is intentionally free of I/O and async machinery so that
//! connector crates and the orchestrator can share types without pulling
//! in a runtime.
#![warn(missing_docs)]

/// Normalized domain payloads: conditions, odds, fixtures, fused results.
pub mod conditions;
/// Static configuration types with serde support and sensible defaults.
pub mod config;
/// Unified error enum for the workspace.
pub mod error;
/// Impact score outputs produced by the scoring pipeline.
pub mod impact;
/// Logical request descriptors and canonical request keys.
pub mod request;
/// Stable source identifiers for priority lists and health reports.
pub mod source;
/// Observability snapshots: rate-limit status and health reports.
pub mod status;

pub use conditions::{
    Fixture, FusedConditions, MatchConditions, OddsSnapshot, SkyCondition, SourceResult,
};
pub use config::{CacheConfig, CategoryLimit, PitchsideConfig, RateCategory, RateLimitConfig};
pub use error::PitchsideError;
pub use impact::{ImpactScore, PositionImpact, StyleImpact, TacticalImpact};
pub use request::{ConditionsRequest, MatchRequest, Operation, RequestKey};
pub use source::SourceKey;
pub use status::{HealthReport, HealthStatus, RateLimitStatus, SourceHealth, SourceStatus};
