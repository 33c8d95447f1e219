use std::sync::Arc;

use pitchside::{MatchRequest, PitchsideError, SourceStatus};
use pitchside_mock::{MockBehavior, MockSource, sample_odds};

use crate::helpers::{DASHBOARD, derby, orchestrator};

#[tokio::test]
async fn odds_walk_sources_in_registration_order() {
    let primary = Arc::new(
        MockSource::builder("primary")
            .odds(MockBehavior::Fail(PitchsideError::unavailable(
                "primary", "down",
            )))
            .build(),
    );
    let backup = Arc::new(
        MockSource::builder("backup")
            .odds(MockBehavior::Return(sample_odds("fix-901")))
            .build(),
    );

    let pitchside = orchestrator(&[(primary.clone(), 0.9), (backup.clone(), 0.7)]);
    let snapshot = pitchside.odds(DASHBOARD, &derby()).await.unwrap();

    assert_eq!(snapshot.bookmaker, "mockmaker");
    assert_eq!(primary.call_count(), 1);
    assert_eq!(backup.call_count(), 1);
}

#[tokio::test]
async fn odds_cache_short_circuits_repeat_lookups() {
    let source = Arc::new(
        MockSource::builder("src")
            .odds(MockBehavior::Return(sample_odds("fix-901")))
            .build(),
    );
    let pitchside = orchestrator(&[(source.clone(), 0.9)]);

    let first = pitchside.odds(DASHBOARD, &derby()).await.unwrap();
    let second = pitchside.odds(DASHBOARD, &derby()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn exhausted_odds_sources_aggregate_their_errors() {
    let a = Arc::new(
        MockSource::builder("a")
            .odds(MockBehavior::Fail(PitchsideError::unavailable("a", "down")))
            .build(),
    );
    let b = Arc::new(
        MockSource::builder("b")
            .odds(MockBehavior::Fail(PitchsideError::malformed(
                "b",
                "bad payload",
            )))
            .build(),
    );

    let pitchside = orchestrator(&[(a, 0.9), (b, 0.7)]);
    let err = pitchside.odds(DASHBOARD, &derby()).await.unwrap_err();

    match err {
        PitchsideError::AllSourcesFailed(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_odds_source_is_never_retried() {
    let bad = Arc::new(
        MockSource::builder("bad")
            .odds(MockBehavior::Fail(PitchsideError::unauthorized("bad")))
            .build(),
    );
    let good = Arc::new(
        MockSource::builder("good")
            .odds(MockBehavior::Return(sample_odds("fix-901")))
            .build(),
    );

    let pitchside = orchestrator(&[(bad.clone(), 0.9), (good.clone(), 0.7)]);

    pitchside.odds(DASHBOARD, &derby()).await.unwrap();
    assert_eq!(pitchside.health().sources[0].status, SourceStatus::Disabled);

    // A different match misses the cache; the disabled source stays out.
    let other = MatchRequest::new("fix-902").unwrap();
    pitchside.odds(DASHBOARD, &other).await.unwrap();
    assert_eq!(bad.call_count(), 1);
    assert_eq!(good.call_count(), 2);
}
