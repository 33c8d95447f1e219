use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use pitchside::{
    CategoryLimit, DataSource, Pitchside, PitchsideError, RateCategory, RateLimitConfig,
};
use pitchside_mock::{MockSource, sample_conditions};

use crate::helpers::{DASHBOARD, anfield, orchestrator};

#[tokio::test]
async fn ml_analysis_budget_is_enforced_before_anything_else() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source.clone(), 0.8)]);

    // Default budget: 3 per minute.
    for _ in 0..3 {
        pitchside.impact(DASHBOARD, &anfield()).await.unwrap();
    }
    let err = pitchside.impact(DASHBOARD, &anfield()).await.unwrap_err();
    assert!(
        matches!(err, PitchsideError::RateLimited { ref category, limit: 3, .. } if category == "ml_analysis")
    );

    // Other categories keep their own budgets.
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    let status = pitchside.rate_limit_status(DASHBOARD, RateCategory::MlAnalysis);
    assert_eq!(status.remaining, 0);
    assert!(!status.can_request);
    assert!(status.reset_in > Duration::ZERO);
}

#[tokio::test]
async fn budgets_are_tracked_per_caller() {
    let source = Arc::new(MockSource::conditions_ok("src", sample_conditions(12.0)));
    let pitchside = orchestrator(&[(source, 0.8)]);

    for _ in 0..3 {
        pitchside.impact(DASHBOARD, &anfield()).await.unwrap();
    }
    assert!(pitchside.impact(DASHBOARD, &anfield()).await.is_err());

    // A different caller still has a full budget.
    pitchside.impact("notebook", &anfield()).await.unwrap();
}

#[tokio::test]
async fn rate_limited_is_the_only_error_the_conditions_path_surfaces() {
    let down = Arc::new(MockSource::conditions_err(
        "down",
        PitchsideError::unavailable("down", "boom"),
    ));

    let mut per_category = HashMap::new();
    per_category.insert(
        RateCategory::Conditions,
        CategoryLimit::new(1, Duration::from_secs(60)),
    );
    let limits = RateLimitConfig {
        per_category,
        fallback: CategoryLimit::new(10, Duration::from_secs(60)),
    };

    let pitchside = Pitchside::builder()
        .with_source(down as Arc<dyn DataSource>, 0.9)
        .rate_limits(limits)
        .build()
        .unwrap();

    // Upstream failure degrades to synthetic data, not an error.
    pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap();

    // Budget exhaustion is the one thing that propagates.
    let err = pitchside
        .fused_conditions(DASHBOARD, &anfield())
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
}
