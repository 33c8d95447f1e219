use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, warn};

use pitchside_core::source::DataSource;
use pitchside_core::{
    Deduplicator, KeyedRateLimiter, SYNTHETIC_SOURCE, TtlCache, fuse, synthetic_fused,
};
use pitchside_types::{
    CacheConfig, ConditionsRequest, Fixture, FusedConditions, OddsSnapshot, Operation,
    PitchsideConfig, PitchsideError, RateLimitConfig, RequestKey, SourceKey, SourceResult,
};

/// Upper bound on how long a synthetic fallback payload may sit in the
/// conditions cache. Real payloads use the configured TTL.
const SYNTHETIC_CACHE_TTL: Duration = Duration::from_secs(30);

pub(crate) struct RegisteredSource {
    pub(crate) source: Arc<dyn DataSource>,
    pub(crate) reliability: f64,
}

/// Orchestrator that routes requests across registered data sources.
///
/// Every public operation runs the same pipeline: admission control, cache
/// lookup, in-flight coalescing, multi-source resolution, cache fill. The
/// conditions path additionally fuses concurrent successes and degrades to a
/// synthetic payload instead of failing; odds and fixture lookups walk
/// sources in priority order and surface an aggregate error when all fail.
pub struct Pitchside {
    pub(crate) sources: Vec<RegisteredSource>,
    pub(crate) cfg: PitchsideConfig,
    pub(crate) limiter: KeyedRateLimiter,
    pub(crate) disabled: Arc<Mutex<HashSet<SourceKey>>>,
    pub(crate) conditions_cache: Option<TtlCache<RequestKey, FusedConditions>>,
    pub(crate) odds_cache: Option<TtlCache<RequestKey, OddsSnapshot>>,
    pub(crate) fixture_cache: Option<TtlCache<RequestKey, Fixture>>,
    pub(crate) conditions_dedup: Deduplicator<FusedConditions>,
    pub(crate) odds_dedup: Deduplicator<OddsSnapshot>,
    pub(crate) fixture_dedup: Deduplicator<Fixture>,
}

/// Builder for constructing a `Pitchside` orchestrator with custom
/// configuration.
pub struct PitchsideBuilder {
    sources: Vec<RegisteredSource>,
    cfg: PitchsideConfig,
}

impl Default for PitchsideBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchsideBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no sources; you must register at least one via
    ///   [`with_source`](Self::with_source).
    /// - Defaults are conservative: five-minute conditions cache, 3/min
    ///   `ml_analysis` budget, 5s per-source timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: PitchsideConfig::default(),
        }
    }

    /// Register a data source with a static reliability weight.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the priority order for sequential lookups
    ///   (odds, fixtures) and the tie-break order during fusion.
    /// - `reliability` is clamped to `[0, 1]`. It is a static trust prior
    ///   chosen at integration time, not a live health score.
    /// - Duplicates are not deduplicated; avoid registering the same source
    ///   twice.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn DataSource>, reliability: f64) -> Self {
        self.sources.push(RegisteredSource {
            source,
            reliability: reliability.clamp(0.0, 1.0),
        });
        self
    }

    /// Replace the per-category admission budgets.
    #[must_use]
    pub fn rate_limits(mut self, cfg: RateLimitConfig) -> Self {
        self.cfg.rate_limits = cfg;
        self
    }

    /// Replace the per-operation cache TTLs and capacities.
    ///
    /// A TTL of zero disables the store for that operation entirely.
    #[must_use]
    pub fn cache(mut self, cfg: CacheConfig) -> Self {
        self.cfg.cache = cfg;
        self
    }

    /// Set the per-source call timeout.
    ///
    /// Behavior and trade-offs:
    /// - Applied to every individual source call; an elapsed timeout counts
    ///   as a transient failure for fallback purposes and never disables
    ///   the source.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Build the `Pitchside` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources have been registered via
    /// [`with_source`](Self::with_source).
    pub fn build(self) -> Result<Pitchside, PitchsideError> {
        if self.sources.is_empty() {
            return Err(PitchsideError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }

        let cache = &self.cfg.cache;
        Ok(Pitchside {
            conditions_cache: store_for(cache, Operation::Conditions),
            odds_cache: store_for(cache, Operation::Odds),
            fixture_cache: store_for(cache, Operation::Fixture),
            conditions_dedup: Deduplicator::new(),
            odds_dedup: Deduplicator::new(),
            fixture_dedup: Deduplicator::new(),
            limiter: KeyedRateLimiter::new(self.cfg.rate_limits.clone()),
            disabled: Arc::new(Mutex::new(HashSet::new())),
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

/// Build the value store for one operation, or `None` when its TTL is zero.
fn store_for<V: Clone>(cache: &CacheConfig, op: Operation) -> Option<TtlCache<RequestKey, V>> {
    cache
        .ttl_for(op)
        .map(|ttl| TtlCache::new(cache.capacity_for(op), ttl))
}

impl Pitchside {
    /// Start building a new `Pitchside` instance.
    ///
    /// Typical usage chains source registration and configuration, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let pitchside = pitchside::Pitchside::builder()
    ///     .with_source(Arc::new(OpenMeteoSource::new()), 0.85)
    ///     .with_source(Arc::new(WeatherApiSource::new(key)), 0.9)
    ///     .with_source(Arc::new(MetNoSource::new()), 0.8)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> PitchsideBuilder {
        PitchsideBuilder::new()
    }

    /// Wrap a source future with the configured per-source timeout.
    pub(crate) async fn call_with_timeout<T, Fut>(
        source_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, PitchsideError>
    where
        Fut: core::future::Future<Output = Result<T, PitchsideError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(PitchsideError::source_timeout(source_name)))
    }

    pub(crate) fn is_disabled(&self, key: SourceKey) -> bool {
        self.disabled.lock().expect("mutex poisoned").contains(&key)
    }

    /// Conditions-capable, not-yet-disabled sources in priority order.
    pub(crate) fn conditions_participants(&self) -> Vec<(Arc<dyn DataSource>, f64)> {
        self.sources
            .iter()
            .filter(|r| r.source.as_conditions_provider().is_some())
            .filter(|r| !self.is_disabled(r.source.key()))
            .map(|r| (Arc::clone(&r.source), r.reliability))
            .collect()
    }

    /// Cache → dedup → fan-out pipeline shared by the conditions and impact
    /// operations. Does not perform admission; callers admit under their own
    /// category first.
    pub(crate) async fn fused_conditions_core(
        &self,
        req: &ConditionsRequest,
    ) -> Result<FusedConditions, PitchsideError> {
        let key = req.key();
        if let Some(cache) = &self.conditions_cache
            && let Some(hit) = cache.get(&key).await
        {
            debug!(key = %key, "conditions cache hit");
            return Ok(hit);
        }

        let participants = self.conditions_participants();
        let disabled = Arc::clone(&self.disabled);
        let timeout = self.cfg.source_timeout;
        let req_owned = req.clone();
        let fused = self
            .conditions_dedup
            .run(key.clone(), move || {
                fetch_and_fuse(participants, disabled, timeout, req_owned)
            })
            .await?;

        if let Some(cache) = &self.conditions_cache {
            if fused.contributing_sources == [SYNTHETIC_SOURCE] {
                // Synthetic payloads must not mask a recovered source for
                // the full TTL; keep them on a short leash.
                let ttl = self
                    .cfg
                    .cache
                    .ttl_for(Operation::Conditions)
                    .map_or(SYNTHETIC_CACHE_TTL, |t| t.min(SYNTHETIC_CACHE_TTL));
                cache.insert_with_ttl(key, fused.clone(), ttl).await;
            } else {
                cache.insert(key, fused.clone()).await;
            }
        }
        Ok(fused)
    }
}

/// Fan out to every participant concurrently, fuse the successes, and fall
/// back to the synthetic payload when nothing answered. Credential
/// rejections disable the offending source for the process lifetime.
async fn fetch_and_fuse(
    participants: Vec<(Arc<dyn DataSource>, f64)>,
    disabled: Arc<Mutex<HashSet<SourceKey>>>,
    timeout: Duration,
    req: ConditionsRequest,
) -> Result<FusedConditions, PitchsideError> {
    if participants.is_empty() {
        warn!(venue = %req.venue_id, "no conditions sources available; serving synthetic data");
        return Ok(synthetic_fused(Utc::now()));
    }

    let attempts = participants.into_iter().map(|(source, reliability)| {
        let req = req.clone();
        async move {
            let name = source.name();
            let key = source.key();
            let provider = match source.as_conditions_provider() {
                Some(p) => p,
                None => {
                    return (
                        key,
                        Err(PitchsideError::unavailable(name, "capability withdrawn")),
                    );
                }
            };
            let outcome =
                Pitchside::call_with_timeout(name, timeout, provider.conditions(&req)).await;
            let outcome = outcome.map(|conditions| SourceResult {
                source: name.to_string(),
                reliability,
                conditions,
                fetched_at: Utc::now(),
            });
            (key, outcome)
        }
    });

    let mut successes: Vec<SourceResult> = Vec::new();
    for (key, outcome) in join_all(attempts).await {
        match outcome {
            Ok(result) => successes.push(result),
            Err(e) if e.disables_source() => {
                warn!(source = %key, "credentials rejected; disabling source");
                disabled.lock().expect("mutex poisoned").insert(key);
            }
            Err(e) => {
                debug!(source = %key, error = %e, "conditions source failed; continuing");
            }
        }
    }

    if successes.is_empty() {
        warn!(venue = %req.venue_id, "every conditions source failed; serving synthetic data");
        return Ok(synthetic_fused(Utc::now()));
    }
    fuse(successes)
}
