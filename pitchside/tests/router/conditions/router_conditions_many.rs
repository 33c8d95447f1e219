use std::sync::Arc;

use chrono::{TimeZone, Utc};

use pitchside::{ConditionsRequest, PitchsideError};
use pitchside_mock::{MockSource, sample_conditions};

use crate::helpers::{DASHBOARD, orchestrator};

fn venue(id: &str) -> ConditionsRequest {
    let kickoff = Utc.with_ymd_and_hms(2026, 6, 14, 17, 0, 0).unwrap();
    ConditionsRequest::new(id, 51.55, -0.11, kickoff).unwrap()
}

#[tokio::test]
async fn batch_requests_resolve_concurrently() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source.clone(), 0.8)]);

    let reqs = vec![venue("emirates"), venue("anfield"), venue("etihad")];
    let (successes, failures) = pitchside
        .fused_conditions_many(DASHBOARD, &reqs)
        .await
        .unwrap();

    assert_eq!(successes.len(), 3);
    assert!(failures.is_empty());
    assert_eq!(source.call_count(), 3);
}

#[tokio::test]
async fn batch_reports_per_request_failures_without_failing_the_rest() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source, 0.8)]);

    // The default fallback budget admits 10 conditions calls per minute;
    // the eleventh entry in the batch must be the only casualty.
    let reqs: Vec<ConditionsRequest> = (0..11).map(|i| venue(&format!("venue-{i}"))).collect();
    let (successes, failures) = pitchside
        .fused_conditions_many(DASHBOARD, &reqs)
        .await
        .unwrap();

    assert_eq!(successes.len(), 10);
    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0].1, PitchsideError::RateLimited { .. }));
}

#[tokio::test]
async fn empty_batch_is_a_no_op() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source.clone(), 0.8)]);

    let (successes, failures) = pitchside
        .fused_conditions_many(DASHBOARD, &[])
        .await
        .unwrap();

    assert!(successes.is_empty());
    assert!(failures.is_empty());
    assert_eq!(source.call_count(), 0);
}
