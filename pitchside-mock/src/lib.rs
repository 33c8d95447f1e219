//! pitchside-mock
//!
//! Deterministic mock data source for tests and CI-safe examples. Behavior
//! is declared per capability at construction time; every invocation is
//! counted so tests can assert exactly how often a source was consulted.
#![warn(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use pitchside_core::source::{ConditionsProvider, DataSource, FixturesProvider, OddsProvider};
use pitchside_types::{
    ConditionsRequest, Fixture, MatchConditions, MatchRequest, OddsSnapshot, PitchsideError,
    SkyCondition,
};

/// Instruction for how a capability should behave when invoked.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(PitchsideError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

/// Mock data source with per-capability scripted behavior.
///
/// Capabilities are only advertised when a behavior was configured for
/// them, so the orchestrator's capability discovery is exercised the same
/// way it is with production adapters.
pub struct MockSource {
    name: &'static str,
    conditions: Option<MockBehavior<MatchConditions>>,
    odds: Option<MockBehavior<OddsSnapshot>>,
    fixture: Option<MockBehavior<Fixture>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

/// Builder for [`MockSource`].
pub struct MockSourceBuilder {
    inner: MockSource,
}

impl MockSource {
    /// Start building a mock source with the given stable name.
    #[must_use]
    pub fn builder(name: &'static str) -> MockSourceBuilder {
        MockSourceBuilder {
            inner: Self {
                name,
                conditions: None,
                odds: None,
                fixture: None,
                delay: None,
                calls: AtomicUsize::new(0),
            },
        }
    }

    /// Shorthand for a source that always returns the given conditions.
    #[must_use]
    pub fn conditions_ok(name: &'static str, conditions: MatchConditions) -> Self {
        Self::builder(name)
            .conditions(MockBehavior::Return(conditions))
            .build()
    }

    /// Shorthand for a conditions source that always fails with `err`.
    #[must_use]
    pub fn conditions_err(name: &'static str, err: PitchsideError) -> Self {
        Self::builder(name)
            .conditions(MockBehavior::Fail(err))
            .build()
    }

    /// Number of capability invocations so far, across all capabilities.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn act<T: Clone>(
        &self,
        behavior: Option<&MockBehavior<T>>,
        capability: &str,
    ) -> Result<T, PitchsideError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v.clone()),
            Some(MockBehavior::Fail(e)) => Err(e.clone()),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(PitchsideError::unavailable(
                self.name,
                format!("no scripted {capability} behavior"),
            )),
        }
    }
}

impl MockSourceBuilder {
    /// Script the conditions capability.
    #[must_use]
    pub fn conditions(mut self, behavior: MockBehavior<MatchConditions>) -> Self {
        self.inner.conditions = Some(behavior);
        self
    }

    /// Script the odds capability.
    #[must_use]
    pub fn odds(mut self, behavior: MockBehavior<OddsSnapshot>) -> Self {
        self.inner.odds = Some(behavior);
        self
    }

    /// Script the fixture capability.
    #[must_use]
    pub fn fixture(mut self, behavior: MockBehavior<Fixture>) -> Self {
        self.inner.fixture = Some(behavior);
        self
    }

    /// Delay every invocation by `delay` before acting.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.inner.delay = Some(delay);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> MockSource {
        self.inner
    }
}

#[async_trait]
impl ConditionsProvider for MockSource {
    async fn conditions(
        &self,
        _req: &ConditionsRequest,
    ) -> Result<MatchConditions, PitchsideError> {
        self.act(self.conditions.as_ref(), "conditions").await
    }
}

#[async_trait]
impl OddsProvider for MockSource {
    async fn odds(&self, _req: &MatchRequest) -> Result<OddsSnapshot, PitchsideError> {
        self.act(self.odds.as_ref(), "odds").await
    }
}

#[async_trait]
impl FixturesProvider for MockSource {
    async fn fixture(&self, _req: &MatchRequest) -> Result<Fixture, PitchsideError> {
        self.act(self.fixture.as_ref(), "fixture").await
    }
}

impl DataSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_conditions_provider(&self) -> Option<&dyn ConditionsProvider> {
        self.conditions.as_ref().map(|_| self as &dyn ConditionsProvider)
    }

    fn as_odds_provider(&self) -> Option<&dyn OddsProvider> {
        self.odds.as_ref().map(|_| self as &dyn OddsProvider)
    }

    fn as_fixtures_provider(&self) -> Option<&dyn FixturesProvider> {
        self.fixture.as_ref().map(|_| self as &dyn FixturesProvider)
    }
}

/// Mild, dry sample conditions used by many tests.
#[must_use]
pub fn sample_conditions(temperature_c: f64) -> MatchConditions {
    MatchConditions {
        temperature_c,
        wind_speed_ms: 3.0,
        precipitation_mm: 0.0,
        humidity_pct: 55.0,
        visibility_m: 10_000.0,
        sky: SkyCondition::PartlyCloudy,
    }
}

/// Sample odds snapshot for the given match id.
#[must_use]
pub fn sample_odds(match_id: &str) -> OddsSnapshot {
    OddsSnapshot {
        match_id: match_id.to_string(),
        bookmaker: "mockmaker".to_string(),
        home_win: 2.1,
        draw: 3.3,
        away_win: 3.6,
        fetched_at: Utc.with_ymd_and_hms(2026, 6, 14, 12, 0, 0).unwrap(),
    }
}

/// Sample fixture for the given match id.
#[must_use]
pub fn sample_fixture(match_id: &str) -> Fixture {
    Fixture {
        match_id: match_id.to_string(),
        home_team: "Home FC".to_string(),
        away_team: "Away FC".to_string(),
        competition: Some("Mock League".to_string()),
        kickoff_utc: Utc.with_ymd_and_hms(2026, 6, 14, 17, 0, 0).unwrap(),
    }
}
