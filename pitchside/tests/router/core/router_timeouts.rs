use std::sync::Arc;
use std::time::Duration;

use pitchside::{DataSource, HealthStatus, Pitchside, SYNTHETIC_SOURCE};
use pitchside_mock::{MockBehavior, MockSource, sample_conditions};

use crate::helpers::{DASHBOARD, anfield};

#[tokio::test]
async fn stalled_source_degrades_to_synthetic_data() {
    let hung = Arc::new(
        MockSource::builder("hung")
            .conditions(MockBehavior::Hang)
            .build(),
    );

    let pitchside = Pitchside::builder()
        .with_source(Arc::clone(&hung) as Arc<dyn DataSource>, 0.9)
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    assert_eq!(fused.contributing_sources, vec![SYNTHETIC_SOURCE]);
    assert_eq!(hung.call_count(), 1);
    // A timeout is transient; the source stays in the pool.
    assert_eq!(pitchside.health().status, HealthStatus::Healthy);
}

#[tokio::test]
async fn timeout_applies_per_source_not_per_request() {
    let hung = Arc::new(
        MockSource::builder("hung")
            .conditions(MockBehavior::Hang)
            .build(),
    );
    let prompt = Arc::new(MockSource::conditions_ok("prompt", sample_conditions(13.0)));

    let pitchside = Pitchside::builder()
        .with_source(Arc::clone(&hung) as Arc<dyn DataSource>, 0.9)
        .with_source(Arc::clone(&prompt) as Arc<dyn DataSource>, 0.6)
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    // The healthy source's answer survives the stalled one.
    assert_eq!(fused.contributing_sources, vec!["prompt"]);
    assert_eq!(fused.reliability_used, 0.6);
}
