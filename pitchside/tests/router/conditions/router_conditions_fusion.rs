use std::sync::Arc;

use pitchside::{MatchConditions, SkyCondition};
use pitchside_mock::{MockBehavior, MockSource, sample_conditions};

use crate::helpers::{DASHBOARD, anfield, orchestrator};

#[tokio::test]
async fn fusion_weights_numeric_fields_by_reliability() {
    let cool = Arc::new(MockSource::conditions_ok("cool", sample_conditions(10.0)));
    let warm = Arc::new(MockSource::conditions_ok("warm", sample_conditions(20.0)));

    let pitchside = orchestrator(&[(cool.clone(), 0.9), (warm.clone(), 0.1)]);
    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    // 0.9 * 10 + 0.1 * 20 = 11
    assert!((fused.conditions.temperature_c - 11.0).abs() < 1e-9);
    assert_eq!(fused.reliability_used, 0.9);
    assert_eq!(fused.contributing_sources, vec!["cool", "warm"]);
    assert_eq!(cool.call_count(), 1);
    assert_eq!(warm.call_count(), 1);
}

#[tokio::test]
async fn all_zero_reliability_falls_back_to_the_arithmetic_mean() {
    let a = Arc::new(MockSource::conditions_ok("a", sample_conditions(10.0)));
    let b = Arc::new(MockSource::conditions_ok("b", sample_conditions(20.0)));

    let pitchside = orchestrator(&[(a, 0.0), (b, 0.0)]);
    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    assert!((fused.conditions.temperature_c - 15.0).abs() < 1e-9);
    assert_eq!(fused.reliability_used, 0.0);
    assert_eq!(fused.contributing_sources, vec!["a", "b"]);
}

#[tokio::test]
async fn sky_comes_from_the_most_reliable_contributor() {
    let rainy = MatchConditions {
        sky: SkyCondition::Rain,
        ..sample_conditions(12.0)
    };
    let trusted = Arc::new(
        MockSource::builder("trusted")
            .conditions(MockBehavior::Return(rainy))
            .build(),
    );
    let hopeful = Arc::new(MockSource::conditions_ok("hopeful", sample_conditions(18.0)));

    // Lower-priority registration must not matter; reliability decides.
    let pitchside = orchestrator(&[(hopeful, 0.3), (trusted, 0.8)]);
    let fused = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    assert_eq!(fused.conditions.sky, SkyCondition::Rain);
    assert_eq!(fused.reliability_used, 0.8);
}
