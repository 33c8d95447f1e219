use std::sync::Arc;
use std::time::Duration;

use pitchside_mock::{MockBehavior, MockSource, sample_conditions};

use crate::helpers::{DASHBOARD, anfield, orchestrator};

#[tokio::test]
async fn concurrent_identical_requests_share_a_single_fetch() {
    let slow = Arc::new(
        MockSource::builder("slow")
            .conditions(MockBehavior::Return(sample_conditions(12.0)))
            .delay(Duration::from_millis(50))
            .build(),
    );
    let pitchside = Arc::new(orchestrator(&[(slow.clone(), 0.8)]));

    let tasks = (0..8).map(|_| {
        let pitchside = Arc::clone(&pitchside);
        tokio::spawn(async move { pitchside.fused_conditions(DASHBOARD, &anfield()).await })
    });

    for handle in futures::future::join_all(tasks).await {
        let fused = handle.unwrap().unwrap();
        assert!((fused.conditions.temperature_c - 12.0).abs() < 1e-9);
    }
    assert_eq!(slow.call_count(), 1);
}

#[tokio::test]
async fn requests_after_completion_fetch_fresh() {
    let slow = Arc::new(
        MockSource::builder("slow")
            .conditions(MockBehavior::Return(sample_conditions(12.0)))
            .delay(Duration::from_millis(10))
            .build(),
    );
    let pitchside = orchestrator(&[(slow.clone(), 0.8)]);

    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    // The second round is a cache hit, not a coalesced flight; bust the
    // cache to prove a fresh fetch happens once the first one finished.
    pitchside.invalidate_conditions(&anfield()).await;
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(slow.call_count(), 2);
}
