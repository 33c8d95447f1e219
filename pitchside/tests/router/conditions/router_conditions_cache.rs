use std::sync::Arc;

use pitchside::{CacheConfig, DataSource, Operation, Pitchside};
use pitchside_mock::{MockBehavior, MockSource, sample_conditions, sample_fixture, sample_odds};

use crate::helpers::{DASHBOARD, anfield, derby, orchestrator};

#[tokio::test]
async fn repeated_requests_within_the_ttl_hit_the_cache() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source.clone(), 0.8)]);

    let first = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    let second = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn invalidation_forces_a_refetch() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source.clone(), 0.8)]);

    // Nothing cached yet.
    assert!(!pitchside.invalidate_conditions(&anfield()).await);

    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert!(pitchside.invalidate_conditions(&anfield()).await);

    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(source.call_count(), 2);
}

#[tokio::test]
async fn each_operation_caches_in_its_own_store() {
    let source = Arc::new(
        MockSource::builder("src")
            .conditions(MockBehavior::Return(sample_conditions(12.0)))
            .odds(MockBehavior::Return(sample_odds("fix-901")))
            .fixture(MockBehavior::Return(sample_fixture("fix-901")))
            .build(),
    );
    let pitchside = orchestrator(&[(source.clone(), 0.8)]);

    for _ in 0..2 {
        pitchside
            .fused_conditions(DASHBOARD, &anfield())
            .await
            .unwrap();
        pitchside.odds(DASHBOARD, &derby()).await.unwrap();
        pitchside.fixture(DASHBOARD, &derby()).await.unwrap();
    }

    // One upstream call per operation; the second round was served from
    // the per-operation stores.
    assert_eq!(source.call_count(), 3);
}

#[tokio::test]
async fn zero_ttl_disables_the_conditions_store() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));

    let mut cache = CacheConfig::default();
    cache.per_op_ttl_ms.insert(Operation::Conditions, 0);

    let pitchside = Pitchside::builder()
        .with_source(Arc::clone(&source) as Arc<dyn DataSource>, 0.8)
        .cache(cache)
        .build()
        .unwrap();

    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    assert_eq!(source.call_count(), 2);
}
