use std::sync::Arc;

use pitchside::{MatchConditions, SkyCondition};
use pitchside_mock::{MockBehavior, MockSource, sample_conditions};

use crate::helpers::{DASHBOARD, anfield, orchestrator};

#[tokio::test]
async fn impact_shares_the_conditions_cache() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source.clone(), 0.8)]);

    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();
    pitchside.impact(DASHBOARD, &anfield()).await.unwrap();

    // One upstream round-trip serves both surfaces.
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn impact_is_deterministic_for_identical_conditions() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source, 0.8)]);

    let a = pitchside.impact(DASHBOARD, &anfield()).await.unwrap();
    let b = pitchside.impact(DASHBOARD, &anfield()).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn foul_weather_depresses_every_composite() {
    let storm = MatchConditions {
        wind_speed_ms: 14.0,
        precipitation_mm: 9.0,
        visibility_m: 800.0,
        sky: SkyCondition::Thunderstorm,
        ..sample_conditions(2.0)
    };
    let source = Arc::new(
        MockSource::builder("src")
            .conditions(MockBehavior::Return(storm))
            .build(),
    );
    let pitchside = orchestrator(&[(source, 0.8)]);

    let impact = pitchside.impact(DASHBOARD, &anfield()).await.unwrap();

    assert!(impact.overall < -0.5);
    assert!(impact.goal_scoring < -0.5);
    assert!((-0.5..0.0).contains(&impact.positions.goalkeeper));
    assert!(impact.tactics.long_ball_bias > 0.0);
}

#[tokio::test]
async fn synthetic_fallback_scores_neutral() {
    let down = Arc::new(MockSource::conditions_err(
        "down",
        pitchside::PitchsideError::unavailable("down", "boom"),
    ));
    let pitchside = orchestrator(&[(down, 0.9)]);

    let impact = pitchside.impact(DASHBOARD, &anfield()).await.unwrap();
    assert_eq!(impact.overall, 0.0);
    assert_eq!(impact.goal_scoring, 0.0);
}
