use pitchside_core::score;
use pitchside_types::{ConditionsRequest, ImpactScore, PitchsideError, RateCategory};

use crate::Pitchside;

impl Pitchside {
    /// Score the expected impact of match conditions on play.
    ///
    /// Behavior and trade-offs:
    /// - Admits under the `ml_analysis` budget, which defaults to the
    ///   tightest limit of all categories; a cached conditions payload is
    ///   still charged because the expensive part is the scoring consumer
    ///   downstream, not the fetch.
    /// - Shares the conditions cache and in-flight coalescing with
    ///   [`fused_conditions`](Self::fused_conditions), so mixing the two
    ///   calls never doubles upstream traffic.
    /// - Scoring itself is pure and deterministic: identical conditions
    ///   always produce identical scores.
    ///
    /// # Errors
    /// Returns `RateLimited` when the caller exhausted its `ml_analysis`
    /// budget. Source failures degrade to scoring the synthetic neutral
    /// payload, which yields near-zero impact across the board.
    pub async fn impact(
        &self,
        caller: &str,
        req: &ConditionsRequest,
    ) -> Result<ImpactScore, PitchsideError> {
        self.limiter.admit(caller, RateCategory::MlAnalysis)?;
        let fused = self.fused_conditions_core(req).await?;
        Ok(score(&fused.conditions))
    }
}
