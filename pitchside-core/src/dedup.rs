//! Coalescing of concurrent identical requests.
//!
//! When several callers ask for the same logical key while a fetch is
//! already in flight, only the first caller's fetch runs; the rest await the
//! same shared future and receive clones of its result, success or failure.
//! The winning fetch runs on a spawned task, so a caller that is cancelled
//! mid-await never tears down work other callers depend on.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use pitchside_types::{PitchsideError, RequestKey};

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, PitchsideError>>>;

/// In-flight request coalescer keyed by [`RequestKey`].
///
/// Entries are removed by the fetch task itself the moment the fetch
/// completes; a request arriving after that starts a fresh fetch even if
/// earlier waiters have not yet observed the result.
pub struct Deduplicator<V> {
    in_flight: Arc<Mutex<HashMap<RequestKey, SharedFetch<V>>>>,
}

impl<V> Default for Deduplicator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Deduplicator<V> {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<V> Deduplicator<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Run `fetch` for `key`, unless a fetch for the same key is already in
    /// flight, in which case await that one instead.
    ///
    /// `fetch` is only invoked when this call becomes the leader for the
    /// key; followers never construct their future.
    ///
    /// # Errors
    /// Propagates the fetch's own error to every waiter. If the fetch task
    /// is torn down by the runtime, waiters receive `PitchsideError::Other`.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub async fn run<F, Fut>(&self, key: RequestKey, fetch: F) -> Result<V, PitchsideError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, PitchsideError>> + Send + 'static,
    {
        let shared = {
            let mut guard = self.in_flight.lock().expect("mutex poisoned");
            if let Some(existing) = guard.get(&key) {
                existing.clone()
            } else {
                let map = Arc::clone(&self.in_flight);
                let k = key.clone();
                let fut = fetch();
                // The task removes its own entry; it contends on the same
                // lock held here, so removal cannot precede insertion.
                let handle = tokio::spawn(async move {
                    let result = fut.await;
                    map.lock().expect("mutex poisoned").remove(&k);
                    result
                });
                let shared: SharedFetch<V> = handle
                    .map(|joined| {
                        joined.unwrap_or_else(|e| {
                            Err(PitchsideError::Other(format!(
                                "coalesced fetch task failed: {e}"
                            )))
                        })
                    })
                    .boxed()
                    .shared();
                guard.insert(key, shared.clone());
                shared
            }
        };
        shared.await
    }

    /// Number of fetches currently in flight.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().expect("mutex poisoned").len()
    }
}
