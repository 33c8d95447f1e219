//! Configuration types shared by the orchestrator and its components.
//!
//! All configuration is static at construction time; there is no hot-reload
//! path. Defaults are conservative and match the documented category budgets.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::request::Operation;

/// Admission-control category for the keyed rate limiter.
///
/// Categories map one-to-one onto the logical call surfaces of the facade;
/// each carries its own `{max_requests, window}` budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RateCategory {
    /// Fused match-conditions lookups.
    Conditions,
    /// Fixture/match-data lookups.
    Matches,
    /// Odds snapshot lookups.
    Odds,
    /// Impact-scoring requests feeding the prediction models.
    MlAnalysis,
}

impl RateCategory {
    /// Stable string form used in error payloads and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conditions => "conditions",
            Self::Matches => "matches",
            Self::Odds => "odds",
            Self::MlAnalysis => "ml_analysis",
        }
    }
}

impl std::fmt::Display for RateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget for a single rate-limit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimit {
    /// Maximum number of admissions per key within a single window.
    pub max_requests: u32,
    /// Duration of the admission window.
    pub window: Duration,
}

impl CategoryLimit {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }
}

/// Per-category rate-limit configuration with a fallback budget for
/// categories without an explicit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Explicit per-category budgets.
    pub per_category: HashMap<RateCategory, CategoryLimit>,
    /// Budget applied to categories absent from `per_category`.
    pub fallback: CategoryLimit,
}

impl RateLimitConfig {
    /// Resolve the effective budget for a category.
    #[must_use]
    pub fn limit_for(&self, category: RateCategory) -> CategoryLimit {
        self.per_category
            .get(&category)
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        let mut per_category = HashMap::new();
        per_category.insert(
            RateCategory::MlAnalysis,
            CategoryLimit::new(3, Duration::from_secs(60)),
        );
        per_category.insert(
            RateCategory::Matches,
            CategoryLimit::new(15, Duration::from_secs(60)),
        );
        Self {
            per_category,
            fallback: CategoryLimit::new(10, Duration::from_secs(60)),
        }
    }
}

/// Cache configuration keyed by logical operation.
///
/// A TTL of zero disables the store for that operation entirely (the
/// facade then fetches on every call).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL in milliseconds for operations without an explicit entry.
    pub default_ttl_ms: u64,
    /// Capacity bound for operations without an explicit entry.
    pub default_max_entries: usize,
    /// Per-operation TTL overrides, in milliseconds.
    pub per_op_ttl_ms: HashMap<Operation, u64>,
    /// Per-operation capacity overrides.
    pub per_op_max_entries: HashMap<Operation, usize>,
}

impl CacheConfig {
    /// Effective TTL for an operation; `None` means the store is disabled.
    #[must_use]
    pub fn ttl_for(&self, op: Operation) -> Option<Duration> {
        let ms = self
            .per_op_ttl_ms
            .get(&op)
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms))
    }

    /// Effective capacity bound for an operation.
    #[must_use]
    pub fn capacity_for(&self, op: Operation) -> usize {
        self.per_op_max_entries
            .get(&op)
            .copied()
            .unwrap_or(self.default_max_entries)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        let mut per_op_ttl_ms = HashMap::new();
        // Conditions move slowly; odds move fast; fixtures barely move.
        per_op_ttl_ms.insert(Operation::Conditions, 300_000);
        per_op_ttl_ms.insert(Operation::Odds, 30_000);
        per_op_ttl_ms.insert(Operation::Fixture, 3_600_000);
        Self {
            default_ttl_ms: 300_000,
            default_max_entries: 512,
            per_op_ttl_ms,
            per_op_max_entries: HashMap::new(),
        }
    }
}

/// Global configuration for the `Pitchside` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchsideConfig {
    /// Per-category admission budgets.
    pub rate_limits: RateLimitConfig,
    /// Per-operation cache TTLs and capacities.
    pub cache: CacheConfig,
    /// Timeout for each individual source call; exceeding it is treated as
    /// an `Unavailable`-class failure for fallback purposes.
    pub source_timeout: Duration,
}

impl Default for PitchsideConfig {
    fn default() -> Self {
        Self {
            rate_limits: RateLimitConfig::default(),
            cache: CacheConfig::default(),
            source_timeout: Duration::from_secs(5),
        }
    }
}
