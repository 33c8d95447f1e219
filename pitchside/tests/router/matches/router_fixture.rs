use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use pitchside::{
    CategoryLimit, DataSource, Pitchside, PitchsideError, RateCategory, RateLimitConfig,
};
use pitchside_mock::{MockBehavior, MockSource, sample_conditions, sample_fixture};

use crate::helpers::{DASHBOARD, derby, orchestrator};

#[tokio::test]
async fn fixture_lookup_returns_the_first_success_and_caches_it() {
    let source = Arc::new(
        MockSource::builder("src")
            .fixture(MockBehavior::Return(sample_fixture("fix-901")))
            .build(),
    );
    let pitchside = orchestrator(&[(source.clone(), 0.9)]);

    let fixture = pitchside.fixture(DASHBOARD, &derby()).await.unwrap();
    assert_eq!(fixture.home_team, "Home FC");
    assert_eq!(fixture.competition.as_deref(), Some("Mock League"));

    pitchside.fixture(DASHBOARD, &derby()).await.unwrap();
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn fixture_without_capable_sources_fails_cleanly() {
    // Conditions-only source: the fixture capability is never advertised.
    let source = Arc::new(MockSource::conditions_ok("weather", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source, 0.9)]);

    let err = pitchside.fixture(DASHBOARD, &derby()).await.unwrap_err();
    match err {
        PitchsideError::AllSourcesFailed(errors) => assert!(errors.is_empty()),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn fixtures_are_admitted_under_the_matches_budget() {
    let source = Arc::new(
        MockSource::builder("src")
            .fixture(MockBehavior::Return(sample_fixture("fix-901")))
            .build(),
    );

    let mut per_category = HashMap::new();
    per_category.insert(
        RateCategory::Matches,
        CategoryLimit::new(1, Duration::from_secs(60)),
    );
    let limits = RateLimitConfig {
        per_category,
        fallback: CategoryLimit::new(10, Duration::from_secs(60)),
    };

    let pitchside = Pitchside::builder()
        .with_source(Arc::clone(&source) as Arc<dyn DataSource>, 0.9)
        .rate_limits(limits)
        .build()
        .unwrap();

    pitchside.fixture(DASHBOARD, &derby()).await.unwrap();

    // Admission runs before the cache; a cached answer still costs budget.
    let err = pitchside.fixture(DASHBOARD, &derby()).await.unwrap_err();
    assert!(
        matches!(err, PitchsideError::RateLimited { ref category, .. } if category == "matches")
    );
    assert_eq!(source.call_count(), 1);
}
