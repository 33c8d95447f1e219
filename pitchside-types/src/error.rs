use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pitchside workspace.
///
/// Wraps caller-pacing rejections, per-source failures with their taxonomy
/// (transient, credential, schema), and an aggregate for multi-source
/// attempts. Only `RateLimited` is expected to reach facade callers on the
/// conditions path; source-level failures are absorbed by the fallback
/// machinery and degrade to the synthetic default.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PitchsideError {
    /// The caller exceeded its request budget for the category; back off
    /// until `reset_in_ms` has elapsed. Not an indication of source failure.
    #[error("rate limited: category={category} limit={limit} reset_in_ms={reset_in_ms}")]
    RateLimited {
        /// Stable category string (e.g. "ml_analysis").
        category: String,
        /// Allowed number of requests in the window.
        limit: u32,
        /// Milliseconds until the current window resets.
        reset_in_ms: u64,
    },

    /// Transient source failure: network error, non-2xx status, or overload.
    #[error("{provider} unavailable: {msg}")]
    Unavailable {
        /// Source name that failed.
        provider: String,
        /// Human-readable failure message.
        msg: String,
    },

    /// Missing or invalid credentials. Permanent for the process lifetime;
    /// the source is disabled and never retried.
    #[error("{provider} rejected credentials")]
    Unauthorized {
        /// Source name that rejected the credentials.
        provider: String,
    },

    /// The response arrived but failed schema validation. Treated as
    /// `Unavailable` for fallback purposes, logged distinctly.
    #[error("{provider} returned a malformed response: {msg}")]
    Malformed {
        /// Source name that produced the response.
        provider: String,
        /// Description of the schema violation.
        msg: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {provider}")]
    SourceTimeout {
        /// Source name that timed out.
        provider: String,
    },

    /// All attempted sources failed; contains the individual failures.
    /// Never surfaced from the conditions path (the synthetic default
    /// absorbs it); odds and fixture lookups may return it.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<PitchsideError>),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl PitchsideError {
    /// Helper: build an `Unavailable` error for a source and message.
    pub fn unavailable(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Unavailable {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unauthorized` error for a source.
    pub fn unauthorized(provider: impl Into<String>) -> Self {
        Self::Unauthorized {
            provider: provider.into(),
        }
    }

    /// Helper: build a `Malformed` error for a source and message.
    pub fn malformed(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Malformed {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error for a source.
    pub fn source_timeout(provider: impl Into<String>) -> Self {
        Self::SourceTimeout {
            provider: provider.into(),
        }
    }

    /// True when this failure must permanently disable the source that
    /// produced it. Only credential rejections qualify; everything else is
    /// transient and eligible for retry on the next logical request.
    #[must_use]
    pub const fn disables_source(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// True when this error reflects caller-side pacing rather than data
    /// unavailability.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
