use std::sync::Arc;

use pitchside::{HealthStatus, PitchsideError, SYNTHETIC_SOURCE, SourceStatus};
use pitchside_mock::{MockSource, sample_conditions};

use crate::helpers::{DASHBOARD, anfield, orchestrator};

#[tokio::test]
async fn unauthorized_source_is_disabled_for_the_process_lifetime() {
    let bad = Arc::new(MockSource::conditions_err(
        "bad",
        PitchsideError::unauthorized("bad"),
    ));
    let good = Arc::new(MockSource::conditions_ok("good", sample_conditions(14.0)));

    let pitchside = orchestrator(&[(bad.clone(), 0.9), (good.clone(), 0.5)]);

    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(fused.contributing_sources, vec!["good"]);
    assert_eq!(fused.reliability_used, 0.5);

    let report = pitchside.health();
    assert_eq!(report.status, HealthStatus::Degraded);
    assert_eq!(report.sources[0].status, SourceStatus::Disabled);
    assert_eq!(report.sources[1].status, SourceStatus::Active);

    // Bust the cache so the second call goes back to the sources; the
    // disabled one must not be consulted again.
    assert!(pitchside.invalidate_conditions(&anfield()).await);
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(bad.call_count(), 1);
    assert_eq!(good.call_count(), 2);
}

#[tokio::test]
async fn synthetic_payload_is_served_when_every_source_fails() {
    let down = Arc::new(MockSource::conditions_err(
        "down",
        PitchsideError::unavailable("down", "connection refused"),
    ));

    let pitchside = orchestrator(&[(down.clone(), 0.9)]);
    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    assert_eq!(fused.reliability_used, 0.0);
    assert_eq!(fused.contributing_sources, vec![SYNTHETIC_SOURCE]);
    // Transient failures never disable a source.
    assert_eq!(pitchside.health().status, HealthStatus::Healthy);
}

#[tokio::test(start_paused = true)]
async fn synthetic_payloads_expire_from_the_cache_early() {
    let down = Arc::new(MockSource::conditions_err(
        "down",
        PitchsideError::unavailable("down", "connection refused"),
    ));
    let pitchside = orchestrator(&[(down.clone(), 0.9)]);

    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(fused.contributing_sources, vec![SYNTHETIC_SOURCE]);

    // Within the short synthetic TTL the cache still answers.
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(down.call_count(), 1);

    // Well before the regular conditions TTL would elapse, the synthetic
    // entry is gone and the source gets another chance.
    tokio::time::advance(std::time::Duration::from_secs(31)).await;
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(down.call_count(), 2);
}

#[tokio::test]
async fn fully_disabled_pool_reports_unhealthy_and_stops_calling() {
    let bad = Arc::new(MockSource::conditions_err(
        "bad",
        PitchsideError::unauthorized("bad"),
    ));

    let pitchside = orchestrator(&[(bad.clone(), 0.9)]);

    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(fused.contributing_sources, vec![SYNTHETIC_SOURCE]);
    assert_eq!(pitchside.health().status, HealthStatus::Unhealthy);

    // Even with the cache busted, a disabled source is never retried.
    pitchside.invalidate_conditions(&anfield()).await;
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(bad.call_count(), 1);
}
