//! pitchside-core
//!
//! Core traits and mechanisms shared across the pitchside ecosystem.
//!
//! - `source`: the `DataSource` trait and capability provider traits.
//! - `ratelimit`: keyed, per-category sliding-window admission control.
//! - `cache`: bounded TTL cache with lazy expiry.
//! - `dedup`: in-flight request coalescing.
//! - `fusion`: reliability-weighted merging of multi-source results.
//! - `impact`: the deterministic conditions impact model.
//! - `synthetic`: the neutral payload served when every source fails.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime. Several
//! components are explicitly coupled to Tokio types and facilities:
//!
//! - `cache::TtlCache` tracks expiry with `tokio::time::Instant` so tests can
//!   drive the clock with `tokio::time::advance`.
//! - `dedup::Deduplicator` spawns the winning fetch with `tokio::spawn` so a
//!   cancelled caller never tears down a fetch other callers are waiting on.
//!
//! As a result, code using the cache or the deduplicator must run under a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

/// Bounded TTL cache with lazy expiry.
pub mod cache;
/// Coalescing of concurrent identical requests.
pub mod dedup;
/// Reliability-weighted fusion of per-source results.
pub mod fusion;
/// Deterministic conditions-to-impact scoring model.
pub mod impact;
/// Keyed sliding-window admission control.
pub mod ratelimit;
/// Source capability traits and the primary `DataSource` interface.
pub mod source;
/// Neutral synthetic payload used as the terminal fallback.
pub mod synthetic;

pub use cache::TtlCache;
pub use dedup::Deduplicator;
pub use fusion::fuse;
pub use impact::score;
pub use ratelimit::KeyedRateLimiter;
pub use source::{ConditionsProvider, DataSource, FixturesProvider, OddsProvider};
pub use synthetic::{SYNTHETIC_SOURCE, neutral_conditions, synthetic_fused};
