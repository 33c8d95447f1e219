use pitchside_types::{ConditionsRequest, FusedConditions, PitchsideError, RateCategory};

use crate::Pitchside;

impl Pitchside {
    /// Fetch fused match conditions for a venue around kickoff.
    ///
    /// Behavior and trade-offs:
    /// - Requests are keyed by venue and kickoff hour, so callers asking
    ///   about the same match within the cache TTL share one upstream
    ///   round-trip.
    /// - All capable sources are queried concurrently and their successes
    ///   fused by reliability weight; a single healthy source is enough for
    ///   a real answer.
    /// - When every source fails, a synthetic neutral payload with
    ///   `reliability_used == 0.0` is returned instead of an error, so the
    ///   dashboard can always render something.
    ///
    /// # Errors
    /// Returns `RateLimited` when the caller exhausted its `conditions`
    /// budget. Upstream failures never surface here; they degrade to the
    /// synthetic payload.
    pub async fn fused_conditions(
        &self,
        caller: &str,
        req: &ConditionsRequest,
    ) -> Result<FusedConditions, PitchsideError> {
        self.limiter.admit(caller, RateCategory::Conditions)?;
        self.fused_conditions_core(req).await
    }

    /// Fetch fused conditions for multiple venues concurrently.
    ///
    /// Behavior and trade-offs:
    /// - Each request is admitted and resolved independently; the batch
    ///   returns `(successes, failures)` so one rate-limited or invalid
    ///   entry does not fail the rest.
    /// - Successes preserve no particular order; failures carry the request
    ///   they belong to.
    ///
    /// # Errors
    /// Never fails as a whole; per-request errors are reported in the
    /// second element of the tuple.
    pub async fn fused_conditions_many(
        &self,
        caller: &str,
        reqs: &[ConditionsRequest],
    ) -> Result<
        (
            Vec<FusedConditions>,
            Vec<(ConditionsRequest, PitchsideError)>,
        ),
        PitchsideError,
    > {
        if reqs.is_empty() {
            return Ok((vec![], vec![]));
        }

        let tasks = reqs.iter().map(|req| {
            let req = req.clone();
            async move {
                let res = self.fused_conditions(caller, &req).await;
                (req, res)
            }
        });

        let results = futures::future::join_all(tasks).await;

        let mut successes: Vec<FusedConditions> = Vec::new();
        let mut failures: Vec<(ConditionsRequest, PitchsideError)> = Vec::new();
        for (req, res) in results {
            match res {
                Ok(fused) => successes.push(fused),
                Err(e) => failures.push((req, e)),
            }
        }

        Ok((successes, failures))
    }

    /// Drop the cached conditions entry for this request, if any.
    ///
    /// Returns `true` when an entry was actually removed. The next
    /// `fused_conditions` call for the same venue and hour will go back to
    /// the sources.
    pub async fn invalidate_conditions(&self, req: &ConditionsRequest) -> bool {
        match &self.conditions_cache {
            Some(cache) => cache.invalidate(&req.key()).await,
            None => false,
        }
    }
}
