//! Keyed sliding-window admission control.
//!
//! Budgets are tracked per `(caller key, category)` pair, so one dashboard
//! session exhausting its `ml_analysis` budget never affects another
//! session's `conditions` lookups. Rejection is free: a denied call does not
//! consume budget and does not extend the window.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use pitchside_types::{PitchsideError, RateCategory, RateLimitConfig, RateLimitStatus};

struct Window {
    count: u32,
    started_at: Instant,
}

/// Sliding-window rate limiter keyed by caller identity and category.
///
/// The limiter is synchronous and cheap; it sits in front of every facade
/// operation and must never await. Windows reset lazily: the first admission
/// after a window elapses starts a fresh window at that instant.
pub struct KeyedRateLimiter {
    cfg: RateLimitConfig,
    windows: Mutex<HashMap<(String, RateCategory), Window>>,
}

impl KeyedRateLimiter {
    /// Create a limiter with the given per-category budgets.
    #[must_use]
    pub fn new(cfg: RateLimitConfig) -> Self {
        Self {
            cfg,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or reject a request for `key` under `category`.
    ///
    /// # Errors
    /// Returns `PitchsideError::RateLimited` when the budget for the current
    /// window is exhausted; `reset_in_ms` reflects the time until that window
    /// elapses. A rejected call does not mutate the window.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub fn admit(&self, key: &str, category: RateCategory) -> Result<(), PitchsideError> {
        let limit = self.cfg.limit_for(category);
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("mutex poisoned");

        let entry = windows
            .entry((key.to_string(), category))
            .or_insert(Window {
                count: 0,
                started_at: now,
            });

        if now.duration_since(entry.started_at) >= limit.window {
            entry.count = 0;
            entry.started_at = now;
        }

        if entry.count < limit.max_requests {
            entry.count += 1;
            return Ok(());
        }

        let elapsed = now.duration_since(entry.started_at);
        let reset_in_ms = limit
            .window
            .saturating_sub(elapsed)
            .as_millis()
            .try_into()
            .unwrap_or(u64::MAX);
        Err(PitchsideError::RateLimited {
            category: category.as_str().to_string(),
            limit: limit.max_requests,
            reset_in_ms,
        })
    }

    /// Inspect the current window for `key` under `category` without
    /// consuming budget.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn status(&self, key: &str, category: RateCategory) -> RateLimitStatus {
        let limit = self.cfg.limit_for(category);
        let now = Instant::now();
        let windows = self.windows.lock().expect("mutex poisoned");

        match windows.get(&(key.to_string(), category)) {
            Some(w) if now.duration_since(w.started_at) < limit.window => {
                let remaining = limit.max_requests.saturating_sub(w.count);
                RateLimitStatus {
                    remaining,
                    reset_in: limit.window.saturating_sub(now.duration_since(w.started_at)),
                    can_request: remaining > 0,
                }
            }
            // No window open, or the open window has already elapsed.
            _ => RateLimitStatus {
                remaining: limit.max_requests,
                reset_in: Duration::ZERO,
                can_request: limit.max_requests > 0,
            },
        }
    }
}
