//! Observability snapshots exposed by the facade.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Snapshot of a rate-limit window for one key/category pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Admissions left in the current window.
    pub remaining: u32,
    /// Time until the current window resets. Zero when no window is open.
    pub reset_in: Duration,
    /// Whether the next `admit` for this key would succeed.
    pub can_request: bool,
}

/// Lifecycle state of a registered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SourceStatus {
    /// The source is eligible for requests.
    Active,
    /// The source was disabled for the process lifetime after rejecting
    /// credentials.
    Disabled,
}

/// Per-source entry in a health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceHealth {
    /// Source name.
    pub source: String,
    /// Current lifecycle state.
    pub status: SourceStatus,
}

/// Overall health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HealthStatus {
    /// All registered sources are active.
    Healthy,
    /// At least one source is disabled but at least one remains active.
    Degraded,
    /// Every registered source is disabled; only synthetic data is served.
    Unhealthy,
}

/// Health report returned by the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall classification.
    pub status: HealthStatus,
    /// Per-source detail, in registration (priority) order.
    pub sources: Vec<SourceHealth>,
}
