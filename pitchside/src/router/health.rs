use pitchside_types::{
    HealthReport, HealthStatus, RateCategory, RateLimitStatus, SourceHealth, SourceStatus,
};

use crate::Pitchside;

impl Pitchside {
    /// Report the registration-order status of every source.
    ///
    /// Behavior and trade-offs:
    /// - Purely local: reads the disabled set without touching any
    ///   upstream, so it is safe to poll frequently from a readiness
    ///   probe.
    /// - `Healthy` means every source is active, `Degraded` means at least
    ///   one was disabled after a credential rejection, `Unhealthy` means
    ///   none remain.
    #[must_use]
    pub fn health(&self) -> HealthReport {
        let sources: Vec<SourceHealth> = self
            .sources
            .iter()
            .map(|r| {
                let status = if self.is_disabled(r.source.key()) {
                    SourceStatus::Disabled
                } else {
                    SourceStatus::Active
                };
                SourceHealth {
                    source: r.source.name().to_string(),
                    status,
                }
            })
            .collect();

        let active = sources
            .iter()
            .filter(|s| matches!(s.status, SourceStatus::Active))
            .count();
        let status = if active == sources.len() {
            HealthStatus::Healthy
        } else if active > 0 {
            HealthStatus::Degraded
        } else {
            HealthStatus::Unhealthy
        };

        HealthReport { status, sources }
    }

    /// Inspect a caller's remaining budget for a category without
    /// consuming any of it.
    #[must_use]
    pub fn rate_limit_status(&self, caller: &str, category: RateCategory) -> RateLimitStatus {
        self.limiter.status(caller, category)
    }
}
