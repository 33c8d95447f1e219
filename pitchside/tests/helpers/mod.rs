//! Lightweight fixtures shared across the router test suite.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use pitchside::{ConditionsRequest, DataSource, MatchRequest, Pitchside};
use pitchside_mock::MockSource;

/// Caller key used by most tests.
pub const DASHBOARD: &str = "dashboard";

/// A fixed kickoff so request keys are stable across a test.
pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 14, 17, 0, 0).unwrap()
}

/// Conditions request for a well-known venue.
pub fn anfield() -> ConditionsRequest {
    ConditionsRequest::new("anfield", 53.43, -2.96, kickoff()).unwrap()
}

/// Match request used by the odds and fixture tests.
pub fn derby() -> MatchRequest {
    MatchRequest::new("fix-901").unwrap()
}

/// Build an orchestrator over mock sources with default configuration.
pub fn orchestrator(sources: &[(Arc<MockSource>, f64)]) -> Pitchside {
    let mut builder = Pitchside::builder();
    for (source, reliability) in sources {
        builder = builder.with_source(Arc::clone(source) as Arc<dyn DataSource>, *reliability);
    }
    builder.build().expect("orchestrator builds")
}
