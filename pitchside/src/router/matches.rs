use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, warn};

use pitchside_core::source::DataSource;
use pitchside_types::{
    Fixture, MatchRequest, OddsSnapshot, PitchsideError, RateCategory, SourceKey,
};

use crate::Pitchside;

impl Pitchside {
    /// Fetch the latest decimal odds snapshot for a match.
    ///
    /// Behavior and trade-offs:
    /// - Walks odds-capable sources in registration order and returns the
    ///   first success; lower fanout than the conditions path at the cost
    ///   of tail latency when early sources are slow.
    /// - Odds move quickly, so the default cache TTL is short (30s).
    /// - A credential rejection disables the offending source for the
    ///   process lifetime before moving on to the next one.
    ///
    /// # Errors
    /// Returns `RateLimited` when the caller exhausted its `odds` budget,
    /// or `AllSourcesFailed` carrying every per-source error when no
    /// source could answer.
    pub async fn odds(
        &self,
        caller: &str,
        req: &MatchRequest,
    ) -> Result<OddsSnapshot, PitchsideError> {
        self.limiter.admit(caller, RateCategory::Odds)?;

        let key = req.odds_key();
        if let Some(cache) = &self.odds_cache
            && let Some(hit) = cache.get(&key).await
        {
            debug!(key = %key, "odds cache hit");
            return Ok(hit);
        }

        let participants = self.odds_participants();
        let disabled = Arc::clone(&self.disabled);
        let timeout = self.cfg.source_timeout;
        let req_owned = req.clone();
        let snapshot = self
            .odds_dedup
            .run(key.clone(), move || {
                fetch_odds(participants, disabled, timeout, req_owned)
            })
            .await?;

        if let Some(cache) = &self.odds_cache {
            cache.insert(key, snapshot.clone()).await;
        }
        Ok(snapshot)
    }

    /// Fetch fixture metadata (teams, competition, kickoff) for a match.
    ///
    /// Behavior and trade-offs:
    /// - Same sequential first-success walk as [`odds`](Self::odds), but
    ///   admitted under the `matches` budget and cached for an hour by
    ///   default since fixtures rarely change once announced.
    ///
    /// # Errors
    /// Returns `RateLimited` when the caller exhausted its `matches`
    /// budget, or `AllSourcesFailed` when no source could answer.
    pub async fn fixture(
        &self,
        caller: &str,
        req: &MatchRequest,
    ) -> Result<Fixture, PitchsideError> {
        self.limiter.admit(caller, RateCategory::Matches)?;

        let key = req.fixture_key();
        if let Some(cache) = &self.fixture_cache
            && let Some(hit) = cache.get(&key).await
        {
            debug!(key = %key, "fixture cache hit");
            return Ok(hit);
        }

        let participants = self.fixture_participants();
        let disabled = Arc::clone(&self.disabled);
        let timeout = self.cfg.source_timeout;
        let req_owned = req.clone();
        let fixture = self
            .fixture_dedup
            .run(key.clone(), move || {
                fetch_fixture(participants, disabled, timeout, req_owned)
            })
            .await?;

        if let Some(cache) = &self.fixture_cache {
            cache.insert(key, fixture.clone()).await;
        }
        Ok(fixture)
    }

    fn odds_participants(&self) -> Vec<Arc<dyn DataSource>> {
        self.sources
            .iter()
            .filter(|r| r.source.as_odds_provider().is_some())
            .filter(|r| !self.is_disabled(r.source.key()))
            .map(|r| Arc::clone(&r.source))
            .collect()
    }

    fn fixture_participants(&self) -> Vec<Arc<dyn DataSource>> {
        self.sources
            .iter()
            .filter(|r| r.source.as_fixtures_provider().is_some())
            .filter(|r| !self.is_disabled(r.source.key()))
            .map(|r| Arc::clone(&r.source))
            .collect()
    }
}

fn record_failure(
    disabled: &Mutex<HashSet<SourceKey>>,
    key: SourceKey,
    capability: &'static str,
    e: &PitchsideError,
) {
    if e.disables_source() {
        warn!(source = %key, "credentials rejected; disabling source");
        disabled.lock().expect("mutex poisoned").insert(key);
    } else {
        debug!(source = %key, capability, error = %e, "source failed; trying next");
    }
}

async fn fetch_odds(
    participants: Vec<Arc<dyn DataSource>>,
    disabled: Arc<Mutex<HashSet<SourceKey>>>,
    timeout: Duration,
    req: MatchRequest,
) -> Result<OddsSnapshot, PitchsideError> {
    let mut errors: Vec<PitchsideError> = Vec::new();
    for source in &participants {
        let name = source.name();
        let Some(provider) = source.as_odds_provider() else {
            errors.push(PitchsideError::unavailable(name, "capability withdrawn"));
            continue;
        };
        match Pitchside::call_with_timeout(name, timeout, provider.odds(&req)).await {
            Ok(snapshot) => return Ok(snapshot),
            Err(e) => {
                record_failure(&disabled, source.key(), "odds", &e);
                errors.push(e);
            }
        }
    }
    Err(PitchsideError::AllSourcesFailed(errors))
}

async fn fetch_fixture(
    participants: Vec<Arc<dyn DataSource>>,
    disabled: Arc<Mutex<HashSet<SourceKey>>>,
    timeout: Duration,
    req: MatchRequest,
) -> Result<Fixture, PitchsideError> {
    let mut errors: Vec<PitchsideError> = Vec::new();
    for source in &participants {
        let name = source.name();
        let Some(provider) = source.as_fixtures_provider() else {
            errors.push(PitchsideError::unavailable(name, "capability withdrawn"));
            continue;
        };
        match Pitchside::call_with_timeout(name, timeout, provider.fixture(&req)).await {
            Ok(fixture) => return Ok(fixture),
            Err(e) => {
                record_failure(&disabled, source.key(), "fixture", &e);
                errors.push(e);
            }
        }
    }
    Err(PitchsideError::AllSourcesFailed(errors))
}
