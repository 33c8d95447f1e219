use async_trait::async_trait;

use pitchside_types::{
    ConditionsRequest, Fixture, MatchConditions, MatchRequest, OddsSnapshot, PitchsideError,
    SourceKey,
};

/// Focused role trait for sources that provide venue conditions.
#[async_trait]
pub trait ConditionsProvider: Send + Sync {
    /// Fetch normalized conditions for the given venue and kickoff window.
    async fn conditions(&self, req: &ConditionsRequest) -> Result<MatchConditions, PitchsideError>;
}

/// Focused role trait for sources that provide head-to-head odds.
#[async_trait]
pub trait OddsProvider: Send + Sync {
    /// Fetch the current odds snapshot for the given match.
    async fn odds(&self, req: &MatchRequest) -> Result<OddsSnapshot, PitchsideError>;
}

/// Focused role trait for sources that provide fixture metadata.
#[async_trait]
pub trait FixturesProvider: Send + Sync {
    /// Fetch fixture metadata for the given match.
    async fn fixture(&self, req: &MatchRequest) -> Result<Fixture, PitchsideError>;
}

/// Main source trait implemented by adapter crates. Exposes capability
/// discovery; the orchestrator only ever talks to a source through the
/// `as_*_provider` accessors, so a source that does not advertise a
/// capability is simply skipped for that operation.
pub trait DataSource: Send + Sync {
    /// A stable identifier for priority lists (e.g., "open-meteo",
    /// "weatherapi").
    fn name(&self) -> &'static str;

    /// Canonical source key constructed from the static name.
    ///
    /// Use this helper when configuring priority and disable lists.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise conditions capability by returning a usable trait object
    /// reference when supported.
    fn as_conditions_provider(&self) -> Option<&dyn ConditionsProvider> {
        None
    }

    /// Advertise odds capability by returning a usable trait object
    /// reference when supported.
    fn as_odds_provider(&self) -> Option<&dyn OddsProvider> {
        None
    }

    /// Advertise fixture capability by returning a usable trait object
    /// reference when supported.
    fn as_fixtures_provider(&self) -> Option<&dyn FixturesProvider> {
        None
    }
}
